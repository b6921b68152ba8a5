// src/view_models.rs

use crate::model::FeedbackTier;

/// Render-state de una pregunta en curso: todo lo que la UI necesita
/// para pintar la pantalla, sin tipos de egui ni markup.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // número "humano" (1..=total)
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub is_last: bool,
}

impl QuestionView {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// En la última pregunta el botón cierra el quiz.
    pub fn advance_label(&self) -> &'static str {
        if self.is_last {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    }

    pub fn can_advance(&self) -> bool {
        self.selected.is_some()
    }
}

/// Fila del repaso final, una por pregunta en orden de banco.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: Option<String>, // solo presente si falló
    pub explanation: String,
    pub is_correct: bool,
}

impl ReviewRow {
    pub fn status_label(&self) -> &'static str {
        if self.is_correct { "✅" } else { "❌" }
    }
}

/// Render-state del resumen final.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
    pub rows: Vec<ReviewRow>,
}

impl ResultsView {
    pub fn score_line(&self) -> String {
        format!("{} / {} ({}%)", self.score, self.total, self.percentage)
    }

    pub fn feedback(&self) -> &'static str {
        self.tier.message()
    }
}
