//! History panel: monospace log of every successful solve.

use egui::Ui;
use waveguide_core::history::{History, HistoryOrder};

/// State for the history display.
#[derive(Debug)]
pub struct HistoryPanel {
    /// Presentation order, initialised from the configuration.
    pub order: HistoryOrder,
    /// Set when a new record arrived and the view should follow it.
    scroll_pending: bool,
}

impl HistoryPanel {
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            order,
            scroll_pending: false,
        }
    }

    pub fn scroll_to_latest(&mut self) {
        self.scroll_pending = true;
    }

    pub fn ui(&mut self, ui: &mut Ui, history: &History) {
        ui.horizontal(|ui| {
            ui.strong("History:");
            ui.separator();
            ui.selectable_value(&mut self.order, HistoryOrder::OldestFirst, "Oldest first");
            ui.selectable_value(&mut self.order, HistoryOrder::NewestFirst, "Newest first");
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(160.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if history.is_empty() {
                        ui.weak("No calculations yet.");
                        return;
                    }
                    let count = history.len();
                    for (i, record) in history.entries(self.order).enumerate() {
                        let response = ui.monospace(record.to_line());
                        let is_latest = match self.order {
                            HistoryOrder::OldestFirst => i + 1 == count,
                            HistoryOrder::NewestFirst => i == 0,
                        };
                        if is_latest && self.scroll_pending {
                            response.scroll_to_me(None);
                            self.scroll_pending = false;
                        }
                    }
                });
        });
    }
}
