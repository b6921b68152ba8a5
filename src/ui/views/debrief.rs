use crate::TrainerApp;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText, ScrollArea};

/// Señales que la pantalla de login falsa llevaba a la vista.
const RED_FLAGS: [&str; 4] = [
    "The brand name was 'PayPa1': the last letter is a one, not an 'l'. Spoofed domains rely on lookalike characters.",
    "The page asked for your password without any context about why you were signed out.",
    "There was no way to verify the address bar, the certificate, or the HTTPS lock before typing.",
    "A real provider never delivers a login page through an unexpected link.",
];

pub fn ui_debrief(app: &mut TrainerApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let total_height = 480.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(120, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    ui.heading("⚠ This was a phishing simulation");
                    ui.add_space(8.0);

                    if !app.sim.email.trim().is_empty() {
                        ui.label(format!(
                            "You submitted '{}' to a fake login page. On a real phishing site those credentials would now belong to an attacker.",
                            app.sim.email.trim()
                        ));
                    } else {
                        ui.label(
                            "You submitted the form on a fake login page. On a real phishing site anything you typed would now belong to an attacker.",
                        );
                    }
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(6.0);
                    ui.label(RichText::new("What gave it away").strong());
                    ui.add_space(5.0);

                    let footer_h = 70.0;
                    ScrollArea::vertical()
                        .max_height((total_height - footer_h).max(0.0))
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for flag in RED_FLAGS {
                                ui.label(format!("• {flag}"));
                                ui.add_space(6.0);
                            }
                        });

                    ui.add_space(10.0);

                    let (again, quiz) =
                        two_button_row(ui, panel_width, "↺ Try again", "📝 Take the Quiz");
                    if again {
                        app.open_simulation();
                    }
                    if quiz {
                        app.open_quiz();
                    }

                    ui.add_space(6.0);
                    if ui.small_button("🏠 Home").clicked() {
                        app.back_to_welcome();
                    }
                });
            });
    });
}
