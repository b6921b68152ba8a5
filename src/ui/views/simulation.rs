use crate::TrainerApp;
use crate::ui::layout::centered_panel;
use egui::{Button, RichText, Spinner, TextEdit};

pub fn ui_simulation(app: &mut TrainerApp, ctx: &egui::Context) {
    let now = ctx.input(|i| i.time);
    app.poll_simulation(now);

    // Mientras corre el overlay hay que seguir repintando sin input
    if app.simulation_pending() {
        ctx.request_repaint();
    }

    centered_panel(ctx, 360.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            // Marca falsa deliberada: la "l" es un uno
            ui.heading("PayPa1");
            ui.label(RichText::new("Log in to your account").weak());
            ui.add_space(16.0);

            let pending = app.simulation_pending();

            ui.add_enabled_ui(!pending, |ui| {
                ui.add(
                    TextEdit::singleline(&mut app.sim.email)
                        .hint_text("Email address")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                ui.add(
                    TextEdit::singleline(&mut app.sim.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(14.0);

                if ui
                    .add_sized([ui.available_width(), 36.0], Button::new("Log In"))
                    .clicked()
                {
                    app.submit_simulation(now);
                }
            });

            if pending {
                ui.add_space(12.0);
                ui.add(Spinner::new());
                ui.label("Signing you in…");
            }

            ui.add_space(16.0);
            ui.label(
                RichText::new("Training environment. No real credentials are stored.")
                    .small()
                    .weak(),
            );
            ui.add_space(6.0);
            if ui.small_button("⬅ Back").clicked() {
                app.back_to_welcome();
            }
        });
    });
}
