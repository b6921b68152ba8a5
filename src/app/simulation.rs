use super::*;

/// Duración del overlay de "signing in", en segundos.
/// La página original usaba un retardo artificial de 1500 ms.
const OVERLAY_SECS: f64 = 1.5;

impl TrainerApp {
    /// Envía el formulario falso. No se valida nada y no se guarda nada:
    /// tras el envío siempre llega el debrief. Solo se registran longitudes,
    /// nunca el contenido de los campos.
    pub fn submit_simulation(&mut self, now: f64) {
        if self.sim.submitted_at.is_some() {
            return;
        }
        log::info!(
            "intento de simulación: email de {} chars, contraseña de {} chars",
            self.sim.email.trim().len(),
            self.sim.password.len()
        );
        self.sim.submitted_at = Some(now);
    }

    /// Pasa al debrief cuando el overlay ha cumplido su tiempo.
    /// La contraseña se borra en el mismo instante; el email se mantiene
    /// para enseñarlo en la pantalla educativa.
    pub fn poll_simulation(&mut self, now: f64) {
        if let Some(started) = self.sim.submitted_at {
            if now - started >= OVERLAY_SECS {
                self.sim.submitted_at = None;
                self.sim.password.clear();
                self.state = AppState::Debrief;
            }
        }
    }

    pub fn simulation_pending(&self) -> bool {
        self.sim.submitted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_shows_overlay_until_delay_elapses() {
        let mut app = TrainerApp::new();
        app.open_simulation();
        app.sim.email = "user@example.com".into();
        app.sim.password = "hunter2".into();

        app.submit_simulation(10.0);
        assert!(app.simulation_pending());

        app.poll_simulation(10.4);
        assert_eq!(app.state, AppState::Simulation);
        assert!(app.simulation_pending());

        app.poll_simulation(11.6);
        assert_eq!(app.state, AppState::Debrief);
        assert!(!app.simulation_pending());
    }

    #[test]
    fn password_is_cleared_on_reveal_but_email_survives() {
        let mut app = TrainerApp::new();
        app.open_simulation();
        app.sim.email = "user@example.com".into();
        app.sim.password = "hunter2".into();

        app.submit_simulation(0.0);
        app.poll_simulation(2.0);

        assert!(app.sim.password.is_empty());
        assert_eq!(app.sim.email, "user@example.com");
    }

    #[test]
    fn double_submit_keeps_the_first_timestamp() {
        let mut app = TrainerApp::new();
        app.open_simulation();
        app.submit_simulation(5.0);
        app.submit_simulation(6.0);
        assert_eq!(app.sim.submitted_at, Some(5.0));
    }

    #[test]
    fn reentering_simulation_resets_the_form() {
        let mut app = TrainerApp::new();
        app.open_simulation();
        app.sim.email = "user@example.com".into();
        app.submit_simulation(0.0);
        app.poll_simulation(2.0);

        app.open_simulation();
        assert!(app.sim.email.is_empty());
        assert!(!app.simulation_pending());
        assert_eq!(app.state, AppState::Simulation);
    }
}
