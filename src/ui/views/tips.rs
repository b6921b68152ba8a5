use crate::TrainerApp;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_tips(app: &mut TrainerApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let total_height = 520.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(120, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    ui.heading("💡 Security Tips");
                    ui.add_space(10.0);

                    // --- clave: reservar altura para el botón de volver ---
                    let footer_h = 60.0;
                    let text_h = (total_height - footer_h).max(0.0);

                    ScrollArea::vertical()
                        .max_height(text_h)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for tip in &app.tips {
                                ui.label(RichText::new(&tip.title).strong());
                                ui.label(&tip.body);
                                ui.add_space(8.0);
                                ui.separator();
                                ui.add_space(8.0);
                            }
                        });

                    ui.add_space(8.0);

                    if ui
                        .add_sized([panel_width / 2.0, 36.0], egui::Button::new("⬅ Back"))
                        .clicked()
                    {
                        app.back_to_welcome();
                    }
                });
            });
    });
}
