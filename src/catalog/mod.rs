// src/catalog/mod.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One denormalized row of the product table. A product may appear in
/// several rows (e.g. regional variants); the analysis layer merges them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "State1", default)]
    state1: String,
    #[serde(rename = "State2", default)]
    state2: String,
    #[serde(rename = "State3", default)]
    state3: String,
    #[serde(rename = "State4", default)]
    state4: String,
    #[serde(rename = "Percentage1", default)]
    percentage1: String,
    #[serde(rename = "Percentage2", default)]
    percentage2: String,
    #[serde(rename = "Percentage3", default)]
    percentage3: String,
    #[serde(rename = "Percentage4", default)]
    percentage4: String,
}

impl CatalogRecord {
    /// The (state, percentage text) pairs of this row, in slot order,
    /// skipping slots where either field is empty.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            (self.state1.as_str(), self.percentage1.as_str()),
            (self.state2.as_str(), self.percentage2.as_str()),
            (self.state3.as_str(), self.percentage3.as_str()),
            (self.state4.as_str(), self.percentage4.as_str()),
        ]
        .into_iter()
        .filter(|(state, percentage)| !state.is_empty() && !percentage.is_empty())
    }
}

/// Read-only view of the product table, loaded once at startup.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open catalog file {}", path.display()))?;
        Self::read_rows(reader)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_rows(csv::Reader::from_reader(reader))
    }

    fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    /// Case-insensitive exact match on the product name. An empty result
    /// means "no data", not an error; callers decide what that implies.
    pub fn lookup(&self, product_name: &str) -> Vec<&CatalogRecord> {
        self.records
            .iter()
            .filter(|record| record.product_name.eq_ignore_ascii_case(product_name))
            .collect()
    }

    /// Unique product names, sorted, for the selection UI. Casing follows
    /// the first row that mentions each product.
    pub fn product_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&record.product_name)) {
                names.push(record.product_name.clone());
            }
        }
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
ProductName,State1,State2,State3,State4,Percentage1,Percentage2,Percentage3,Percentage4
Apples,Organic,,,,30%,,,
apples,Organic,Imported,,,20%,50%,,
Bananas,Organic,,,,30%,,,
";

    fn catalog() -> Catalog {
        Catalog::from_reader(TABLE.as_bytes()).unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("APPLES").len(), 2);
        assert_eq!(catalog.lookup("apples").len(), 2);
        assert_eq!(catalog.lookup("Bananas").len(), 1);
    }

    #[test]
    fn lookup_miss_is_empty_not_an_error() {
        assert!(catalog().lookup("unobtainium").is_empty());
    }

    #[test]
    fn entries_skip_empty_slots() {
        let catalog = catalog();
        let rows = catalog.lookup("Bananas");
        let entries: Vec<_> = rows[0].entries().collect();
        assert_eq!(entries, vec![("Organic", "30%")]);
    }

    #[test]
    fn product_names_are_sorted_and_deduplicated() {
        assert_eq!(catalog().product_names(), vec!["Apples", "Bananas"]);
    }
}
