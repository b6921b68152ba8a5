use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub text: String,         // Enunciado
    pub options: Vec<String>, // 4 opciones, orden fijo
    pub correct: usize,       // Índice de la opción correcta
    pub explanation: String,
}

/// Registro de una respuesta consolidada. Se añade una vez por pregunta
/// al avanzar y no se modifica nunca después.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnswerRecord {
    pub question: usize, // Índice de la pregunta en el banco
    pub chosen: usize,   // Índice de la opción elegida
    pub correct: bool,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TipCard {
    pub title: String,
    pub body: String,
}

/// Tramo de feedback según el porcentaje final del quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Strong,
    Basic,
    AtRisk,
}

impl FeedbackTier {
    /// Umbrales: >=80 fuerte, >=60 básico, el resto en riesgo.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            FeedbackTier::Strong
        } else if percentage >= 60 {
            FeedbackTier::Basic
        } else {
            FeedbackTier::AtRisk
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Strong => {
                "Excellent! You have a strong understanding of phishing protection."
            }
            FeedbackTier::Basic => {
                "Good job! You have basic knowledge but could benefit from more practice."
            }
            FeedbackTier::AtRisk => {
                "You might be vulnerable to phishing attacks. Please review the educational materials."
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Summary,
    Tips,
    Simulation,
    Debrief,
    PendingUpdate,
}

// ¡Implementa Default!
impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackTier;

    #[test]
    fn feedback_tier_thresholds_are_inclusive() {
        assert_eq!(FeedbackTier::for_percentage(100), FeedbackTier::Strong);
        assert_eq!(FeedbackTier::for_percentage(80), FeedbackTier::Strong);
        assert_eq!(FeedbackTier::for_percentage(79), FeedbackTier::Basic);
        assert_eq!(FeedbackTier::for_percentage(60), FeedbackTier::Basic);
        assert_eq!(FeedbackTier::for_percentage(59), FeedbackTier::AtRisk);
        assert_eq!(FeedbackTier::for_percentage(0), FeedbackTier::AtRisk);
    }
}
