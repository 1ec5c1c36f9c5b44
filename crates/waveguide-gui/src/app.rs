//! Main application state and egui integration.

use eframe::egui;
use waveguide_core::config::CalculatorConfig;
use waveguide_core::{Calculator, Notification};

use crate::panels;

/// The waveguide calculator window.
pub struct CalculatorApp {
    /// Engine state: fields, formula and history.
    calc: Calculator,
    /// Input form with entry rows and action buttons.
    pub form_state: panels::form::FormPanel,
    /// Scrolling history log.
    pub history_state: panels::history::HistoryPanel,
    /// Error dialog currently on screen.
    notification: Option<Notification>,
}

impl CalculatorApp {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            calc: Calculator::new(),
            form_state: panels::form::FormPanel::default(),
            history_state: panels::history::HistoryPanel::new(config.history.order),
            notification: None,
        }
    }

    fn error_dialog(&mut self, ctx: &egui::Context) {
        let Some(notification) = &self.notification else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notification.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notification.message.as_str());
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked();
            });
        if dismissed {
            self.notification = None;
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.notification.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.form_state.ui(ui, &self.calc);
                ui.add_space(12.0);
                self.history_state.ui(ui, self.calc.history());
            });
        });

        for event in self.form_state.take_events() {
            log::debug!("{event:?}");
            let outcome = self.calc.handle(event);
            if outcome.record.is_some() {
                self.history_state.scroll_to_latest();
            }
            if let Some(notification) = outcome.notification {
                self.notification = Some(notification);
                break;
            }
        }

        self.error_dialog(ctx);
    }
}
