// src/ui/products.rs
use eframe::egui;

use crate::analysis;
use crate::analysis::{AnalysisError, ComparisonTable};
use crate::state::{AppState, ProductView};

const DESCRIPTION_FALLBACK: &str = "Unable to generate description.";
const DESCRIPTION_TOKENS: u32 = 1500;

pub fn show_products_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Product Information");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.radio_value(&mut state.product_view, ProductView::Single, "View a single product");
        ui.radio_value(&mut state.product_view, ProductView::Compare, "Compare two products");
    });
    ui.separator();

    match state.product_view {
        ProductView::Single => show_single_product(ui, state),
        ProductView::Compare => show_comparison(ui, state),
    }
}

fn product_picker(
    ui: &mut egui::Ui,
    label: &str,
    names: &[String],
    selection: &mut Option<String>,
) {
    egui::ComboBox::from_label(label)
        .selected_text(selection.clone().unwrap_or_else(|| "Select a product".to_string()))
        .show_ui(ui, |ui| {
            for name in names {
                ui.selectable_value(selection, Some(name.clone()), name);
            }
        });
}

fn show_single_product(ui: &mut egui::Ui, state: &mut AppState) {
    let names = state.product_names.clone();
    product_picker(ui, "Select a product:", &names, &mut state.selected_product);

    let Some(product) = state.selected_product.clone() else {
        return;
    };

    ui.add_space(8.0);
    ui.columns(2, |columns| {
        let url = state.image_url(&product);
        columns[0].group(|ui| {
            ui.add(egui::Image::from_uri(url).max_height(200.0));
            ui.label(&product);
        });

        columns[1].group(|ui| {
            ui.heading(format!("State Distribution for {}", product));
            let aggregated = analysis::aggregate(&state.catalog, &product);
            match aggregated {
                Ok(distribution) => {
                    let entries = distribution.sorted_entries();
                    distribution_chart(ui, &product, &entries);

                    egui::Grid::new("distribution_grid").striped(true).show(ui, |ui| {
                        for (label, fraction) in &entries {
                            ui.label(label);
                            ui.label(format!("{:.0}%", fraction * 100.0));
                            ui.end_row();
                        }
                    });
                }
                // Missing data is "no data", rendered in place; malformed
                // data is a catalog defect worth the modal.
                Err(e @ AnalysisError::ProductNotFound(_)) => {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }
                Err(e) => {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                    state.report_error(e.to_string());
                }
            }
        });
    });

    ui.add_space(8.0);
    ui.heading("Product Description");
    if ui.button("Generate Description").clicked() {
        let prompt = format!(
            "Generate a detailed description for {}. Provide more in-depth information.",
            product
        );
        let text = state.generate_text(&prompt, DESCRIPTION_TOKENS, DESCRIPTION_FALLBACK);
        state.descriptions.insert(product.clone(), text);
    }
    if let Some(description) = state.descriptions.get(&product) {
        ui.label(description);
    }
}

fn show_comparison(ui: &mut egui::Ui, state: &mut AppState) {
    let names = state.product_names.clone();
    ui.columns(2, |columns| {
        product_picker(&mut columns[0], "Select first product:", &names, &mut state.compare_first);
        product_picker(&mut columns[1], "Select second product:", &names, &mut state.compare_second);
    });

    let (Some(first), Some(second)) = (state.compare_first.clone(), state.compare_second.clone())
    else {
        return;
    };

    let products = [first.clone(), second.clone()];
    ui.add_space(8.0);
    let compared = analysis::compare(&state.catalog, &products);
    match compared {
        Ok(table) => {
            ui.heading(format!("State Distribution Comparison: {} vs {}", first, second));
            comparison_chart(ui, &table);

            egui::Grid::new("comparison_grid").striped(true).show(ui, |ui| {
                ui.label(egui::RichText::new("State").strong());
                for column in &table.columns {
                    ui.label(egui::RichText::new(&column.product).strong());
                }
                ui.end_row();

                for (i, label) in table.labels.iter().enumerate() {
                    ui.label(label);
                    for column in &table.columns {
                        ui.label(format!("{:.0}%", column.values[i] * 100.0));
                    }
                    ui.end_row();
                }
            });
        }
        Err(e @ AnalysisError::ProductNotFound(_)) => {
            ui.colored_label(egui::Color32::RED, e.to_string());
            return;
        }
        Err(e) => {
            ui.colored_label(egui::Color32::RED, e.to_string());
            state.report_error(e.to_string());
            return;
        }
    }

    ui.add_space(8.0);
    ui.heading("Product Descriptions");
    if ui.button("Generate Descriptions").clicked() {
        for product in &products {
            let prompt = format!("Generate a detailed description for {}.", product);
            let text = state.generate_text(&prompt, DESCRIPTION_TOKENS, DESCRIPTION_FALLBACK);
            state.descriptions.insert(product.clone(), text);
        }
    }
    for product in &products {
        if let Some(description) = state.descriptions.get(product) {
            ui.label(egui::RichText::new(product).strong());
            ui.label(description);
            ui.add_space(4.0);
        }
    }
}

fn distribution_chart(ui: &mut egui::Ui, product: &str, entries: &[(String, f64)]) {
    let bars: Vec<egui_plot::Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, fraction))| {
            egui_plot::Bar::new(i as f64, *fraction)
                .name(label)
                .width(0.6)
                .fill(egui::Color32::from_rgb(76, 175, 80))
        })
        .collect();

    egui_plot::Plot::new(format!("distribution_{}", product))
        .height(220.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(egui_plot::BarChart::new(bars));
        });
}

fn comparison_chart(ui: &mut egui::Ui, table: &ComparisonTable) {
    let group_width = 0.8;
    let bar_width = group_width / table.columns.len().max(1) as f64;

    let charts: Vec<egui_plot::BarChart> = table
        .columns
        .iter()
        .enumerate()
        .map(|(j, column)| {
            let bars: Vec<egui_plot::Bar> = column
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let x = i as f64 - group_width / 2.0 + bar_width * (j as f64 + 0.5);
                    egui_plot::Bar::new(x, *value)
                        .name(&table.labels[i])
                        .width(bar_width * 0.9)
                })
                .collect();
            egui_plot::BarChart::new(bars).name(&column.product)
        })
        .collect();

    egui_plot::Plot::new("comparison_plot")
        .legend(egui_plot::Legend::default())
        .height(240.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
