use crate::data::{read_questions_embedded, read_tips_embedded};
use crate::model::{AnswerRecord, AppState, Question, TipCard};
use eframe::egui;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod simulation;
#[cfg(not(target_arch = "wasm32"))]
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{QuestionView, ResultsView, ReviewRow};

/// Sesión de un intento de quiz. Invariantes mientras corre:
/// `current == answers.len()` y `score` cuenta las respuestas acertadas.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct QuizSession {
    pub current: usize,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
    pub selected: Option<usize>, // elección tentativa; la última gana
}

/// Estado del formulario de la simulación. No se serializa nunca:
/// las credenciales introducidas no deben sobrevivir a la sesión.
#[derive(Default)]
pub struct SimulationForm {
    pub email: String,
    pub password: String,
    pub submitted_at: Option<f64>, // reloj de egui, en segundos
}

#[derive(Serialize, Deserialize)]
pub struct TrainerApp {
    #[serde(skip, default = "read_questions_embedded")]
    pub questions: Vec<Question>,
    #[serde(skip, default = "read_tips_embedded")]
    pub tips: Vec<TipCard>,
    pub session: QuizSession,
    pub message: String,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub sim: SimulationForm,
    #[serde(skip)]
    pub confirm_retake: bool,
    #[serde(skip)]
    pub has_update: Option<String>,
    #[serde(skip)]
    pub update_thread_launched: bool,
    #[cfg(not(target_arch = "wasm32"))]
    #[serde(skip)]
    update_check_rx: Option<std::sync::mpsc::Receiver<Option<String>>>,
}

impl TrainerApp {
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut app = Self {
            questions: read_questions_embedded(),
            tips: read_tips_embedded(),
            session: QuizSession::default(),
            message: String::new(),
            state: AppState::Welcome,
            sim: SimulationForm::default(),
            confirm_retake: false,
            has_update: None,
            update_thread_launched: false,
            #[cfg(not(target_arch = "wasm32"))]
            update_check_rx: None,
        };

        // Señal que deja el updater al terminar
        #[cfg(not(target_arch = "wasm32"))]
        {
            let signal_path = std::path::Path::new(".update_success");
            if signal_path.exists() {
                app.message = format!("Updated to version {}!", env!("CARGO_PKG_VERSION"));
                let _ = std::fs::remove_file(signal_path);
            }
        }

        app
    }
}

impl Default for TrainerApp {
    fn default() -> Self {
        Self::new()
    }
}
