use crate::TrainerApp;
use crate::model::AppState;
use egui::{Align, Button, CentralPanel, Context, ScrollArea};

pub fn ui_quiz(app: &mut TrainerApp, ctx: &Context) {
    // Si la sesión ya terminó, esta pantalla no tiene nada que pintar
    let view = match app.question_view() {
        Some(v) => v,
        None => {
            app.state = AppState::Summary;
            return;
        }
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 150.0 + 220.0 + 48.0 + 24.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(120, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(view.heading());
                    ui.add_space(10.0);

                    // Enunciado con scroll fijo
                    let prompt_max_height = 120.0;
                    ui.allocate_ui_with_layout(
                        egui::vec2(panel_width, prompt_max_height),
                        egui::Layout::top_down(Align::Min),
                        |ui| {
                            ScrollArea::vertical()
                                .max_height(prompt_max_height)
                                .show(ui, |ui| {
                                    ui.label(&view.text);
                                });
                        },
                    );

                    ui.add_space(10.0);

                    // Opciones de respuesta única, sin preselección al entrar
                    ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                        ui.set_width(panel_width);
                        for (i, option) in view.options.iter().enumerate() {
                            if ui.radio(view.selected == Some(i), option).clicked() {
                                app.select_option(i);
                            }
                            ui.add_space(4.0);
                        }
                    });

                    ui.add_space(12.0);

                    // El avance solo se habilita con una opción marcada
                    let advance = ui.add_enabled(
                        view.can_advance(),
                        Button::new(view.advance_label()).min_size(egui::vec2(panel_width / 2.0, 36.0)),
                    );
                    if advance.clicked() {
                        app.advance_question();
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
