use super::*;

impl TrainerApp {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Pregunta en curso, o None si la sesión ya terminó
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current)
    }

    /// La sesión está completa cuando hay un registro por pregunta
    pub fn is_quiz_complete(&self) -> bool {
        self.session.answers.len() >= self.questions.len()
    }

    /// Hay una sesión a medias que merece el botón de "continuar"
    pub fn has_saved_session(&self) -> bool {
        !self.session.answers.is_empty() && !self.is_quiz_complete()
    }

    /// Hay un resultado anterior que enseñar en el resumen
    pub fn has_finished_run(&self) -> bool {
        !self.session.answers.is_empty() && self.is_quiz_complete()
    }
}
