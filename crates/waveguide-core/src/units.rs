//! Wavelength/frequency conversion and the unit synchronizer.
//!
//! The wavelength (nm) and frequency (THz) fields describe the same physical
//! quantity and are linked through the vacuum speed of light, $f \lambda = c$.
//! Whenever one of them is written the [`UnitSynchronizer`] rewrites the
//! other. Writing the paired field is itself a field change, so the
//! synchronizer carries a single in-flight flag that turns the resulting
//! re-entrant call into a no-op.

use crate::types::{Field, FieldSet, SlotValue};

/// Vacuum speed of light (m/s).
pub const C_LIGHT: f64 = 299_792_458.0;

/// Metres per nanometre.
pub const METRES_PER_NM: f64 = 1e-9;

/// Nanometres per metre.
pub const NM_PER_METRE: f64 = 1e9;

/// Hertz per terahertz.
pub const HZ_PER_THZ: f64 = 1e12;

/// Format a value with a fixed number of decimals.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// $f = c / \lambda$, wavelength in nm to frequency in THz.
pub fn wavelength_nm_to_frequency_thz(wavelength_nm: f64) -> f64 {
    let wavelength_m = wavelength_nm * METRES_PER_NM;
    C_LIGHT / wavelength_m / HZ_PER_THZ
}

/// $\lambda = c / f$, frequency in THz to wavelength in nm.
pub fn frequency_thz_to_wavelength_nm(frequency_thz: f64) -> f64 {
    let frequency_hz = frequency_thz * HZ_PER_THZ;
    C_LIGHT / frequency_hz * NM_PER_METRE
}

/// Frequency text for a piece of wavelength text.
///
/// Returns the empty string when the wavelength is unparseable or not
/// positive; that clears the frequency field.
pub fn frequency_text_for(wavelength_text: &str) -> String {
    match SlotValue::parse(wavelength_text) {
        SlotValue::Value(nm) if nm > 0.0 => format_fixed(
            wavelength_nm_to_frequency_thz(nm),
            Field::Frequency.decimals(),
        ),
        _ => String::new(),
    }
}

/// Wavelength text for a piece of frequency text. Mirror of
/// [`frequency_text_for`].
pub fn wavelength_text_for(frequency_text: &str) -> String {
    match SlotValue::parse(frequency_text) {
        SlotValue::Value(thz) if thz > 0.0 => format_fixed(
            frequency_thz_to_wavelength_nm(thz),
            Field::Wavelength.decimals(),
        ),
        _ => String::new(),
    }
}

/// Owner of the calculator fields, as seen by the synchronizer.
///
/// A write must report wavelength and frequency changes back to the
/// synchronizer exactly as a user edit would. The synchronizer relies on its
/// guard, not on the host, to stop the ping-pong.
pub trait FieldHost {
    /// Store `text` in `field` and notify `sync` of the change.
    fn write_field(&mut self, field: Field, text: String, sync: &mut UnitSynchronizer);
}

/// Keeps the wavelength and frequency fields consistent.
///
/// Never fails: invalid or non-positive input clears the paired field,
/// since this runs on every keystroke and must not interrupt typing.
#[derive(Debug, Default)]
pub struct UnitSynchronizer {
    /// Set while the synchronizer is writing into a field.
    updating: bool,
}

impl UnitSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a synchronization write is in progress.
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Handle a change of the wavelength field.
    ///
    /// Returns the text written into the frequency field, or `None` if the
    /// call was suppressed because a synchronization write is in progress.
    pub fn on_wavelength_changed<H>(&mut self, text: &str, host: &mut H) -> Option<String>
    where
        H: FieldHost + ?Sized,
    {
        if self.updating {
            log::debug!("wavelength change suppressed during synchronization");
            return None;
        }
        let frequency = frequency_text_for(text);
        log::trace!("λ = {text:?} nm -> f = {frequency:?} THz");
        Some(self.write_paired(Field::Frequency, frequency, host))
    }

    /// Handle a change of the frequency field. Mirror of
    /// [`on_wavelength_changed`](Self::on_wavelength_changed).
    pub fn on_frequency_changed<H>(&mut self, text: &str, host: &mut H) -> Option<String>
    where
        H: FieldHost + ?Sized,
    {
        if self.updating {
            log::debug!("frequency change suppressed during synchronization");
            return None;
        }
        let wavelength = wavelength_text_for(text);
        log::trace!("f = {text:?} THz -> λ = {wavelength:?} nm");
        Some(self.write_paired(Field::Wavelength, wavelength, host))
    }

    fn write_paired<H>(&mut self, field: Field, text: String, host: &mut H) -> String
    where
        H: FieldHost + ?Sized,
    {
        self.updating = true;
        host.write_field(field, text.clone(), self);
        self.updating = false;
        text
    }
}

impl FieldHost for FieldSet {
    fn write_field(&mut self, field: Field, text: String, sync: &mut UnitSynchronizer) {
        self.set(field, text);
        let text = self.text(field).to_owned();
        match field {
            Field::Wavelength => {
                sync.on_wavelength_changed(&text, self);
            }
            Field::Frequency => {
                sync.on_frequency_changed(&text, self);
            }
            Field::Beta | Field::Neff => {}
        }
    }
}
