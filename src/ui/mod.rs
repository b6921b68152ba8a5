pub mod layout;
pub mod views;

use crate::app::TrainerApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TrainerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BARRA SUPERIOR (solo visible durante el quiz y el resumen)
        if matches!(self.state, AppState::Quiz | AppState::Summary) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
            AppState::Tips => views::tips::ui_tips(self, ctx),
            AppState::Simulation => views::simulation::ui_simulation(self, ctx),
            AppState::Debrief => views::debrief::ui_debrief(self, ctx),
            AppState::PendingUpdate => views::pending::ui_pending_update(self, ctx),
        }

        if self.confirm_retake {
            self.confirm_retake(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
