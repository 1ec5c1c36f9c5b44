//! Input form: the four entry rows, clear buttons, formula line and actions.

use egui::Ui;
use waveguide_core::{Calculator, Event, Field};

/// State for the input form.
///
/// The form owns no field text; it renders the calculator's text each frame
/// and queues an [`Event`] for every user action.
#[derive(Debug, Default)]
pub struct FormPanel {
    events: Vec<Event>,
}

impl FormPanel {
    /// Events queued since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn ui(&mut self, ui: &mut Ui, calc: &Calculator) {
        ui.vertical_centered(|ui| {
            ui.heading("Enter any two quantities");
        });
        ui.add_space(12.0);

        egui::Grid::new("input_rows")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for field in Field::ALL {
                    ui.label(field.label());

                    let mut text = calc.text(field).to_owned();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        self.events.push(Event::Edit(field, text));
                    }

                    // λ and f share one clear button, shown on the λ row.
                    match field {
                        Field::Beta | Field::Neff => {
                            if clear_button(ui).clicked() {
                                self.events.push(Event::ClearField(field));
                            }
                        }
                        Field::Wavelength => {
                            if clear_button(ui)
                                .on_hover_text("Clear wavelength and frequency")
                                .clicked()
                            {
                                self.events.push(Event::ClearWavelengthAndFrequency);
                            }
                        }
                        Field::Frequency => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let formula = match calc.formula() {
                Some(_) => format!("Formula: {}", calc.formula_text()),
                None => calc.formula_text().to_owned(),
            };
            ui.label(
                egui::RichText::new(formula)
                    .italics()
                    .size(15.0)
                    .color(egui::Color32::from_rgb(0, 0, 139)),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                self.events.push(Event::Calculate);
            }
            if ui.button("Clear All").clicked() {
                self.events.push(Event::ClearAll);
            }
        });
    }
}

fn clear_button(ui: &mut Ui) -> egui::Response {
    ui.button(egui::RichText::new("X").strong().color(egui::Color32::RED))
}
