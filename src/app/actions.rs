use super::*;

impl TrainerApp {
    /// Registra la elección tentativa y habilita el avance.
    /// Se puede llamar tantas veces como se quiera: la última selección gana.
    /// No toca `current`, `score` ni `answers`; con el quiz terminado no hace nada.
    pub fn select_option(&mut self, idx: usize) {
        if self.is_quiz_complete() {
            return;
        }
        self.session.selected = Some(idx);
    }

    /// Consolida la respuesta seleccionada y avanza a la siguiente pregunta.
    /// Sin selección previa es un no-op silencioso: la precondición la
    /// garantiza la UI deshabilitando el botón.
    pub fn advance_question(&mut self) {
        if self.is_quiz_complete() {
            return;
        }
        let chosen = match self.session.selected {
            Some(idx) => idx,
            None => return,
        };

        let question = &self.questions[self.session.current];
        let correct = chosen == question.correct;

        self.session.answers.push(AnswerRecord {
            question: self.session.current,
            chosen,
            correct,
            explanation: question.explanation.clone(),
        });
        if correct {
            self.session.score += 1;
        }

        // La siguiente pregunta arranca sin opción preseleccionada
        self.session.selected = None;
        self.session.current += 1;

        if self.session.current >= self.questions.len() {
            log::info!(
                "quiz completado: {}/{} correctas",
                self.session.score,
                self.questions.len()
            );
            self.state = AppState::Summary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TrainerApp {
        TrainerApp::new()
    }

    /// Responde la pregunta actual con la opción correcta y avanza.
    fn answer_current_correctly(app: &mut TrainerApp) {
        let correct = app.questions[app.session.current].correct;
        app.select_option(correct);
        app.advance_question();
    }

    #[test]
    fn full_run_completes_with_one_record_per_question() {
        let mut app = app();
        let total = app.total_questions();
        for _ in 0..total {
            answer_current_correctly(&mut app);
        }
        assert!(app.is_quiz_complete());
        assert_eq!(app.session.answers.len(), total);
        assert_eq!(app.state, AppState::Summary);
    }

    #[test]
    fn score_always_matches_correct_answer_count() {
        let mut app = app();
        let total = app.total_questions();
        for i in 0..total {
            // Alterna aciertos y fallos deliberados
            let correct = app.questions[i].correct;
            let chosen = if i % 2 == 0 { correct } else { (correct + 1) % 4 };
            app.select_option(chosen);
            app.advance_question();
            let counted = app.session.answers.iter().filter(|a| a.correct).count() as u32;
            assert_eq!(app.session.score, counted);
            assert_eq!(app.session.current, app.session.answers.len());
        }
    }

    #[test]
    fn advance_without_selection_changes_nothing() {
        let mut app = app();
        answer_current_correctly(&mut app);
        let before_current = app.session.current;
        let before_score = app.session.score;
        let before_answers = app.session.answers.len();

        app.advance_question();

        assert_eq!(app.session.current, before_current);
        assert_eq!(app.session.score, before_score);
        assert_eq!(app.session.answers.len(), before_answers);
    }

    #[test]
    fn last_selection_wins() {
        let mut app = app();
        app.select_option(0);
        app.select_option(3);
        app.select_option(1); // opción correcta de la primera pregunta
        app.advance_question();

        assert_eq!(app.session.answers[0].chosen, 1);
        assert!(app.session.answers[0].correct);
        assert_eq!(app.session.score, 1);
    }

    #[test]
    fn select_option_is_noop_once_complete() {
        let mut app = app();
        let total = app.total_questions();
        for _ in 0..total {
            answer_current_correctly(&mut app);
        }
        app.select_option(0);
        assert_eq!(app.session.selected, None);
        app.advance_question();
        assert_eq!(app.session.answers.len(), total);
    }

    #[test]
    fn selection_does_not_carry_over_to_next_question() {
        let mut app = app();
        answer_current_correctly(&mut app);
        assert_eq!(app.session.selected, None);
    }

    #[test]
    fn spoofed_domain_question_grades_both_ways() {
        // Pregunta 8 del banco: 'support@paypa1.com'
        let mut app = app();
        for _ in 0..7 {
            answer_current_correctly(&mut app);
        }
        assert_eq!(app.session.current, 7);
        app.select_option(2);
        app.advance_question();
        assert!(app.session.answers[7].correct);

        let mut app = TrainerApp::new();
        for _ in 0..7 {
            answer_current_correctly(&mut app);
        }
        app.select_option(0);
        app.advance_question();
        assert!(!app.session.answers[7].correct);
    }
}
