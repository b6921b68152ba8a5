// src/data.rs

use crate::model::{Question, TipCard};

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

/// Carga las tarjetas de consejos desde el YAML embebido
pub fn read_tips_embedded() -> Vec<TipCard> {
    let file_content = include_str!("data/tips.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el YAML de consejos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_bank_has_ten_well_formed_entries() {
        let questions = read_questions_embedded();
        assert_eq!(questions.len(), 10);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct < q.options.len());
            assert!(!q.text.is_empty());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn spoofed_domain_question_keeps_reference_content() {
        let questions = read_questions_embedded();
        let q = &questions[7];
        assert!(q.text.contains("support@paypa1.com"));
        assert_eq!(q.correct, 2);
        assert_eq!(q.options[2], "Report it as a phishing attempt");
    }

    #[test]
    fn tip_deck_is_non_empty() {
        let tips = read_tips_embedded();
        assert!(!tips.is_empty());
        for tip in &tips {
            assert!(!tip.title.is_empty());
            assert!(!tip.body.is_empty());
        }
    }
}
