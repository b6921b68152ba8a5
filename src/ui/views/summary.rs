use crate::TrainerApp;
use crate::model::AppState;
use crate::ui::layout::two_button_row;
use crate::view_models::ResultsView;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_summary(app: &mut TrainerApp, ctx: &Context) {
    // Sin sesión completa no hay resumen que enseñar
    if !app.is_quiz_complete() {
        app.state = AppState::Quiz;
        return;
    }

    let results: ResultsView = app.results_view();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 700.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 30))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Quiz Complete!");
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(results.score_line())
                            .heading()
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.label(results.feedback());
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(6.0);
                    ui.label(RichText::new("Review Your Answers").strong());
                    ui.add_space(5.0);

                    let max_height = 380.0;
                    ScrollArea::vertical()
                        .max_height(max_height)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            for row in &results.rows {
                                ui.label(
                                    RichText::new(format!(
                                        "{} Question {}: {}",
                                        row.status_label(),
                                        row.number,
                                        row.question
                                    ))
                                    .strong(),
                                );
                                ui.label(format!("Your answer: {}", row.your_answer));
                                if let Some(correct) = &row.correct_answer {
                                    ui.label(format!("Correct answer: {correct}"));
                                }
                                ui.label(RichText::new(&row.explanation).italics().weak());
                                ui.add_space(8.0);
                                ui.separator();
                                ui.add_space(8.0);
                            }
                        });

                    ui.add_space(10.0);

                    let (retake, learn_more) =
                        two_button_row(ui, panel_width, "Retake Quiz", "Learn More");
                    if retake {
                        app.retake_quiz();
                    }
                    if learn_more {
                        app.open_tips();
                    }
                });
        });
    });
}
