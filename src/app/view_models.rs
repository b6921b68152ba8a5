use super::*;

impl TrainerApp {
    /// Render-state de la pregunta en curso; None cuando la sesión terminó.
    /// La UI pinta exactamente esto y no mira la sesión directamente.
    pub fn question_view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        Some(QuestionView {
            number: self.session.current + 1,
            total: self.questions.len(),
            text: question.text.clone(),
            options: question.options.clone(),
            selected: self.session.selected,
            is_last: self.session.current + 1 == self.questions.len(),
        })
    }

    /// Render-state del resumen. Las filas se construyen recorriendo el
    /// banco: el contrato del repaso es orden de pregunta, no de envío.
    pub fn results_view(&self) -> ResultsView {
        let mut rows = Vec::new();
        for (qi, question) in self.questions.iter().enumerate() {
            if let Some(answer) = self.session.answers.iter().find(|a| a.question == qi) {
                let correct_answer = if answer.correct {
                    None
                } else {
                    Some(question.options[question.correct].clone())
                };
                rows.push(ReviewRow {
                    number: qi + 1,
                    question: question.text.clone(),
                    your_answer: question.options[answer.chosen].clone(),
                    correct_answer,
                    explanation: answer.explanation.clone(),
                    is_correct: answer.correct,
                });
            }
        }
        ResultsView {
            score: self.session.score,
            total: self.questions.len(),
            percentage: self.percentage(),
            tier: self.feedback_tier(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedbackTier;

    fn answer_current(app: &mut TrainerApp, chosen: usize) {
        app.select_option(chosen);
        app.advance_question();
    }

    #[test]
    fn question_view_starts_unselected_with_heading_and_labels() {
        let app = TrainerApp::new();
        let view = app.question_view().unwrap();
        assert_eq!(view.heading(), "Question 1 of 10");
        assert_eq!(view.selected, None);
        assert!(!view.can_advance());
        assert_eq!(view.advance_label(), "Next Question");
        assert_eq!(view.options.len(), 4);
    }

    #[test]
    fn last_question_advance_label_is_finish_quiz() {
        let mut app = TrainerApp::new();
        for _ in 0..9 {
            let correct = app.questions[app.session.current].correct;
            answer_current(&mut app, correct);
        }
        let view = app.question_view().unwrap();
        assert_eq!(view.heading(), "Question 10 of 10");
        assert!(view.is_last);
        assert_eq!(view.advance_label(), "Finish Quiz");
    }

    #[test]
    fn question_view_is_none_once_complete() {
        let mut app = TrainerApp::new();
        for _ in 0..10 {
            let correct = app.questions[app.session.current].correct;
            answer_current(&mut app, correct);
        }
        assert!(app.question_view().is_none());
    }

    #[test]
    fn review_rows_follow_question_order() {
        let mut app = TrainerApp::new();
        for _ in 0..app.total_questions() {
            let correct = app.questions[app.session.current].correct;
            answer_current(&mut app, correct);
        }
        let results = app.results_view();
        let numbers: Vec<usize> = results.rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn correct_answer_line_only_appears_on_misses() {
        let mut app = TrainerApp::new();
        for i in 0..app.total_questions() {
            let correct = app.questions[i].correct;
            // Falla solo la pregunta del dominio suplantado (índice 7)
            let chosen = if i == 7 { 0 } else { correct };
            answer_current(&mut app, chosen);
        }

        let results = app.results_view();
        assert_eq!(results.score, 9);
        assert_eq!(results.percentage, 90);
        assert_eq!(results.tier, FeedbackTier::Strong);

        for row in &results.rows {
            if row.number == 8 {
                assert!(!row.is_correct);
                assert_eq!(
                    row.correct_answer.as_deref(),
                    Some("Report it as a phishing attempt")
                );
            } else {
                assert!(row.is_correct);
                assert_eq!(row.correct_answer, None);
            }
        }
    }

    #[test]
    fn results_view_score_line_matches_reference_format() {
        let mut app = TrainerApp::new();
        for i in 0..app.total_questions() {
            let correct = app.questions[i].correct;
            let chosen = if i < 6 { correct } else { (correct + 1) % 4 };
            answer_current(&mut app, chosen);
        }
        let results = app.results_view();
        assert_eq!(results.score_line(), "6 / 10 (60%)");
        assert_eq!(results.tier, FeedbackTier::Basic);
    }
}
