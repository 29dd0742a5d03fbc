// src/ui/home.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_home_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Welcome to EcoLabel");
    ui.add_space(8.0);
    ui.label(
        "EcoLabel provides clear and personalized insights into the health, \
         environmental, and societal impacts of everyday products. By verifying \
         sustainability metrics and origins, EcoLabel helps you make informed \
         choices that align with your values.",
    );

    ui.add_space(12.0);
    ui.columns(3, |columns| {
        columns[0].group(|ui| {
            ui.label("📊 View product statistics");
        });
        columns[1].group(|ui| {
            ui.label("🔍 Compare different products");
        });
        columns[2].group(|ui| {
            ui.label("💬 Chat with our AI assistant");
        });
    });

    ui.add_space(12.0);
    ui.heading("Featured Products");
    ui.add_space(4.0);

    let featured = state.featured_products.clone();
    if featured.is_empty() {
        ui.label("The catalog is empty.");
        return;
    }

    ui.columns(featured.len(), |columns| {
        for (column, product) in columns.iter_mut().zip(&featured) {
            let url = state.image_url(product);
            column.group(|ui| {
                ui.add(egui::Image::from_uri(url).max_height(160.0));
                ui.label(product);
            });
        }
    });
}
