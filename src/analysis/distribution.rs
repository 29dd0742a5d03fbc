// src/analysis/distribution.rs

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Malformed percentage value: {0:?}")]
    MalformedPercentage(String),
    #[error("No data found for {0}")]
    ProductNotFound(String),
}

/// Parses a textual percentage like "42%" into a fraction (0.42).
///
/// The text must end with '%' and carry a numeric prefix. Negative or
/// above-100 values parse fine; range policy belongs to the caller.
pub fn parse_percentage(text: &str) -> Result<f64, AnalysisError> {
    let prefix = text
        .strip_suffix('%')
        .ok_or_else(|| AnalysisError::MalformedPercentage(text.to_string()))?;
    let value: f64 = prefix
        .trim()
        .parse()
        .map_err(|_| AnalysisError::MalformedPercentage(text.to_string()))?;
    if !value.is_finite() {
        return Err(AnalysisError::MalformedPercentage(text.to_string()));
    }
    Ok(value / 100.0)
}

/// Accumulated state fractions for one product. Values are additive across
/// rows and are not required to sum to 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    fractions: HashMap<String, f64>,
}

impl Distribution {
    pub fn fraction(&self, state: &str) -> Option<f64> {
        self.fractions.get(state).copied()
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.fractions.keys().map(String::as_str)
    }

    /// Label-sorted snapshot for deterministic rendering.
    pub fn sorted_entries(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .fractions
            .iter()
            .map(|(state, fraction)| (state.clone(), *fraction))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// Folds every catalog row matching `product_name` into one state → fraction
/// map. Repeated states accumulate rather than overwrite, so a product split
/// across several rows merges additively. A parse failure aborts the whole
/// aggregation; no half-populated distribution escapes.
pub fn aggregate(catalog: &Catalog, product_name: &str) -> Result<Distribution, AnalysisError> {
    let records = catalog.lookup(product_name);
    if records.is_empty() {
        return Err(AnalysisError::ProductNotFound(product_name.to_string()));
    }

    let mut fractions: HashMap<String, f64> = HashMap::new();
    for record in records {
        for (state, percentage) in record.entries() {
            let fraction = parse_percentage(percentage)?;
            *fractions.entry(state.to_string()).or_insert(0.0) += fraction;
        }
    }

    Ok(Distribution { fractions })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub product: String,
    pub values: Vec<f64>,
}

/// Product distributions aligned onto one shared, sorted label axis.
/// `columns[j].values[i]` is product j's fraction for `labels[i]`, 0.0 when
/// that product has no data for the state. Column order follows the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub labels: Vec<String>,
    pub columns: Vec<ComparisonColumn>,
}

/// Aggregates each product independently and merges the results. Rebuilt on
/// every request; a missing product fails the whole comparison with its name
/// attached. Total over any input length: an empty product list yields an
/// empty table (the UI always passes two names).
pub fn compare(catalog: &Catalog, product_names: &[String]) -> Result<ComparisonTable, AnalysisError> {
    let mut distributions = Vec::with_capacity(product_names.len());
    for name in product_names {
        distributions.push((name.clone(), aggregate(catalog, name)?));
    }

    let mut labels: Vec<String> = distributions
        .iter()
        .flat_map(|(_, distribution)| distribution.states().map(str::to_string))
        .collect();
    labels.sort();
    labels.dedup();

    let columns = distributions
        .into_iter()
        .map(|(product, distribution)| ComparisonColumn {
            values: labels
                .iter()
                .map(|label| distribution.fraction(label).unwrap_or(0.0))
                .collect(),
            product,
        })
        .collect();

    Ok(ComparisonTable { labels, columns })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
ProductName,State1,State2,State3,State4,Percentage1,Percentage2,Percentage3,Percentage4
Apples,Organic,,,,30%,,,
Apples,Organic,Imported,,,20%,50%,,
Bananas,Organic,,,,30%,,,
Cereal,Recalled,,,,bad-data,,,
";

    fn catalog() -> Catalog {
        Catalog::from_reader(TABLE.as_bytes()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parse_valid_percentages() {
        assert!(close(parse_percentage("42%").unwrap(), 0.42));
        assert!(close(parse_percentage("100%").unwrap(), 1.0));
        assert!(close(parse_percentage("0%").unwrap(), 0.0));
        assert!(close(parse_percentage("2.5%").unwrap(), 0.025));
        // Syntactically fine; range policy is the caller's call.
        assert!(close(parse_percentage("-5%").unwrap(), -0.05));
        assert!(close(parse_percentage("150%").unwrap(), 1.5));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in ["42", "%", "", "abc%", "4a%", "inf%"] {
            assert_eq!(
                parse_percentage(text),
                Err(AnalysisError::MalformedPercentage(text.to_string())),
                "expected {:?} to be rejected",
                text
            );
        }
    }

    #[test]
    fn aggregate_merges_rows_additively() {
        let distribution = aggregate(&catalog(), "apples").unwrap();
        assert_eq!(distribution.len(), 2);
        assert!(close(distribution.fraction("Organic").unwrap(), 0.5));
        assert!(close(distribution.fraction("Imported").unwrap(), 0.5));
    }

    #[test]
    fn aggregate_is_idempotent() {
        let catalog = catalog();
        let first = aggregate(&catalog, "Apples").unwrap();
        let second = aggregate(&catalog, "Apples").unwrap();
        assert_eq!(first.sorted_entries(), second.sorted_entries());
    }

    #[test]
    fn aggregate_unknown_product_fails() {
        assert_eq!(
            aggregate(&catalog(), "unobtainium"),
            Err(AnalysisError::ProductNotFound("unobtainium".to_string()))
        );
    }

    #[test]
    fn aggregate_propagates_malformed_percentages() {
        assert_eq!(
            aggregate(&catalog(), "Cereal"),
            Err(AnalysisError::MalformedPercentage("bad-data".to_string()))
        );
    }

    #[test]
    fn compare_aligns_products_on_sorted_labels() {
        let names = ["Apples".to_string(), "Bananas".to_string()];
        let table = compare(&catalog(), &names).unwrap();

        assert_eq!(table.labels, vec!["Imported", "Organic"]);
        assert_eq!(table.columns[0].product, "Apples");
        assert!(close(table.columns[0].values[0], 0.5));
        assert!(close(table.columns[0].values[1], 0.5));
        assert_eq!(table.columns[1].product, "Bananas");
        assert!(close(table.columns[1].values[0], 0.0));
        assert!(close(table.columns[1].values[1], 0.3));
    }

    #[test]
    fn compare_order_only_affects_columns() {
        let catalog = catalog();
        let forward = compare(&catalog, &["Apples".to_string(), "Bananas".to_string()]).unwrap();
        let reverse = compare(&catalog, &["Bananas".to_string(), "Apples".to_string()]).unwrap();

        assert_eq!(forward.labels, reverse.labels);
        assert_eq!(forward.columns[0], reverse.columns[1]);
        assert_eq!(forward.columns[1], reverse.columns[0]);
    }

    #[test]
    fn compare_with_no_products_yields_an_empty_table() {
        let table = compare(&catalog(), &[]).unwrap();
        assert!(table.labels.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn compare_names_the_missing_product() {
        let names = ["Apples".to_string(), "unobtainium".to_string()];
        assert_eq!(
            compare(&catalog(), &names),
            Err(AnalysisError::ProductNotFound("unobtainium".to_string()))
        );
    }
}
