use super::*;
use crate::update::{check_latest_release, download_new_binary};

impl TrainerApp {
    /// Lanza la comprobación de versión en un hilo aparte; el resultado
    /// se recoge con `poll_update_check` en frames posteriores.
    pub fn start_update_check(&mut self) {
        if self.update_check_rx.is_some() {
            return;
        }
        let (tx, rx) = std::sync::mpsc::channel::<Option<String>>();
        self.update_check_rx = Some(rx);
        self.message = "Checking for updates…".into();

        std::thread::spawn(move || {
            let result = match check_latest_release() {
                Ok(version) => version,
                Err(e) => {
                    log::warn!("fallo comprobando releases: {e}");
                    None
                }
            };
            let _ = tx.send(result);
        });
    }

    pub fn poll_update_check(&mut self) {
        let maybe_result = self
            .update_check_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            self.update_check_rx = None;
            match result {
                Some(version) => {
                    self.message.clear();
                    self.has_update = Some(version);
                }
                None => {
                    self.message = "You are running the latest version.".into();
                }
            }
        }
    }

    pub fn update_check_running(&self) -> bool {
        self.update_check_rx.is_some()
    }

    pub fn ensure_update_thread(&mut self) {
        if self.update_thread_launched {
            return;
        }
        self.update_thread_launched = true;

        // El nombre del updater según plataforma
        let updater = if cfg!(windows) {
            "phish_quiz_updater.exe".to_string()
        } else {
            "./phish_quiz_updater".to_string()
        };

        // Hilo que descarga y arranca el updater
        std::thread::spawn(move || {
            match download_new_binary() {
                Ok(()) => {
                    // Pequeña pausa para que el mensaje se vea
                    std::thread::sleep(std::time::Duration::from_secs(2));
                    // Lanza el updater y sale
                    std::process::Command::new(&updater)
                        .spawn()
                        .expect("No se pudo lanzar el updater");
                    std::process::exit(0);
                }
                Err(e) => {
                    log::error!("error al descargar actualización: {e}");
                }
            }
        });
    }
}
