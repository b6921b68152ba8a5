use super::*;

impl TrainerApp {
    /// Descarta la sesión actual y vuelve a entrar en la primera pregunta
    /// con marcador a cero y sin opción seleccionada.
    pub fn retake_quiz(&mut self) {
        self.session = QuizSession::default();
        self.confirm_retake = false;
        self.message.clear();
        self.state = AppState::Quiz;
        log::info!("sesión de quiz reiniciada");
    }

    pub fn confirm_retake(&mut self, ctx: &egui::Context) {
        egui::Window::new("Start over?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("This will discard your current answers. Are you sure?");
                ui.horizontal(|ui| {
                    if ui.button("Yes, start over").clicked() {
                        self.retake_quiz();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_retake = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retake_from_complete_yields_fresh_session() {
        let mut app = TrainerApp::new();
        let total = app.total_questions();
        for _ in 0..total {
            let correct = app.questions[app.session.current].correct;
            app.select_option(correct);
            app.advance_question();
        }
        assert!(app.is_quiz_complete());

        app.retake_quiz();

        assert_eq!(app.session.current, 0);
        assert_eq!(app.session.score, 0);
        assert!(app.session.answers.is_empty());
        assert_eq!(app.session.selected, None);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn retake_works_as_explicit_reset_mid_run() {
        let mut app = TrainerApp::new();
        app.select_option(1);
        app.advance_question();
        assert_eq!(app.session.answers.len(), 1);

        app.retake_quiz();

        assert!(app.session.answers.is_empty());
        assert_eq!(app.session.current, 0);
    }
}
