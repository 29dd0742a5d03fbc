// src/ui/chat.rs
use eframe::egui;

use crate::session::Speaker;
use crate::state::AppState;

const CHAT_FALLBACK: &str = "Sorry, I couldn't generate a response.";

pub fn show_chat_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Chat with AI Assistant");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Show Previous Chat History").clicked() {
            state.show_history = !state.show_history;
        }
        if ui.button("Clear Chat History").clicked() {
            state.conversation.clear();
        }
    });

    if state.show_history {
        ui.add_space(4.0);
        ui.group(|ui| {
            ui.label(egui::RichText::new("Chat History").strong());
            if state.conversation.is_empty() {
                ui.label("No previous messages.");
            }
            for turn in state.conversation.replay() {
                ui.label(format!("{}: {}", turn.speaker, turn.message));
            }
        });
    }

    ui.add_space(8.0);
    egui::ScrollArea::vertical()
        .id_source("chat_scroll")
        .stick_to_bottom(true)
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            for turn in state.conversation.replay() {
                ui.group(|ui| {
                    let name = match turn.speaker {
                        Speaker::User => "You",
                        Speaker::Assistant => "Assistant",
                    };
                    ui.label(egui::RichText::new(name).strong());
                    ui.label(&turn.message);
                });
                ui.add_space(4.0);
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.chat_input)
            .hint_text("Ask me anything about food / products!")
            .desired_width(ui.available_width() - 72.0);
        let response = ui.add(input);
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if (ui.button("Send").clicked() || submitted) && !state.chat_input.trim().is_empty() {
            let message = std::mem::take(&mut state.chat_input);
            send_message(state, message.trim().to_string());
        }
    });
}

fn send_message(state: &mut AppState, message: String) {
    state.conversation.append(Speaker::User, message);
    let prompt = state.conversation.build_prompt();
    let reply = state.generate_text(&prompt, 1500, CHAT_FALLBACK);
    state.conversation.append(Speaker::Assistant, reply);
}
