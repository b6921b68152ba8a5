use super::*;

impl TrainerApp {
    /// Continuar (o iniciar) el quiz en la primera pregunta sin responder.
    pub fn open_quiz(&mut self) {
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// Arranca un intento desde cero; si hay respuestas en la sesión pide
    /// confirmación antes de descartarlas.
    pub fn start_fresh(&mut self) {
        if self.session.answers.is_empty() {
            self.retake_quiz();
        } else {
            self.confirm_retake = true;
        }
    }

    pub fn open_tips(&mut self) {
        self.state = AppState::Tips;
        self.message.clear();
    }

    /// Entra en la simulación con el formulario limpio.
    pub fn open_simulation(&mut self) {
        self.sim = SimulationForm::default();
        self.state = AppState::Simulation;
        self.message.clear();
    }

    pub fn open_results(&mut self) {
        self.state = AppState::Summary;
        self.message.clear();
    }

    pub fn back_to_welcome(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }
}
