// src/app.rs
use eframe::egui;

use crate::state::{AppState, Screen};

pub struct EcoLabelApp {
    state: AppState,
}

impl EcoLabelApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        // Needed so egui::Image can fetch the product photo URLs
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self { state }
    }

    fn show_nav(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new("🌱 EcoLabel").heading());
            ui.separator();

            let tabs = [
                (Screen::Home, "Home"),
                (Screen::Products, "Product Info"),
                (Screen::Chat, "Chat"),
            ];

            for (screen, label) in tabs {
                if ui.selectable_label(self.state.current_screen == screen, label).clicked() {
                    self.state.current_screen = screen;
                }
            }
        });
    }
}

impl eframe::App for EcoLabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Home => {
                    crate::ui::home::show_home_view(ui, &mut self.state);
                }
                Screen::Products => {
                    crate::ui::products::show_products_view(ui, &mut self.state);
                }
                Screen::Chat => {
                    crate::ui::chat::show_chat_view(ui, &mut self.state);
                }
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
