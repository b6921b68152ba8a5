use crate::TrainerApp;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_welcome(app: &mut TrainerApp, ctx: &Context) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.poll_update_check();
        // El resultado llega en un frame sin input; hay que seguir repintando
        if app.update_check_running() {
            ctx.request_repaint();
        }
    }

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 320.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("🎣 Phishing Awareness Trainer");
                        ui.add_space(6.0);
                        ui.label("Learn to spot phishing before it catches you.");
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        // Botones
                        let btn_cont = if app.has_saved_session() {
                            Some(ui.add_sized(
                                [btn_w, btn_h],
                                Button::new("▶ Continue where you left off"),
                            ))
                        } else {
                            None
                        };
                        ui.add_space(5.0);
                        let btn_quiz = ui.add_sized([btn_w, btn_h], Button::new("📝 Take the Quiz"));
                        ui.add_space(5.0);
                        let btn_results = if app.has_finished_run() {
                            Some(ui.add_sized([btn_w, btn_h], Button::new("🏆 Last results")))
                        } else {
                            None
                        };
                        ui.add_space(5.0);
                        let btn_tips = ui.add_sized([btn_w, btn_h], Button::new("💡 Security Tips"));
                        ui.add_space(5.0);
                        let btn_sim =
                            ui.add_sized([btn_w, btn_h], Button::new("🕵 Try a Login Simulation"));

                        if let Some(b) = btn_cont {
                            if b.clicked() {
                                app.open_quiz();
                            }
                        }
                        if btn_quiz.clicked() {
                            app.start_fresh();
                        }
                        if let Some(b) = btn_results {
                            if b.clicked() {
                                app.open_results();
                            }
                        }
                        if btn_tips.clicked() {
                            app.open_tips();
                        }
                        if btn_sim.clicked() {
                            app.open_simulation();
                        }

                        // Bloque de actualización (solo escritorio)
                        #[cfg(not(target_arch = "wasm32"))]
                        {
                            ui.add_space(16.0);
                            if let Some(version) = app.has_update.clone() {
                                ui.label(
                                    RichText::new(format!("🟡 Update {version} available"))
                                        .color(egui::Color32::YELLOW)
                                        .strong(),
                                );
                                if ui.button("⬇ Install update").clicked() {
                                    app.message = format!("Updating to version {version}…");
                                    app.state = crate::model::AppState::PendingUpdate;
                                }
                            } else if app.update_check_running() {
                                ui.add(egui::Spinner::new());
                            } else if ui.small_button("Check for updates").clicked() {
                                app.start_update_check();
                            }
                        }

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.label(RichText::new(&app.message).weak());
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
