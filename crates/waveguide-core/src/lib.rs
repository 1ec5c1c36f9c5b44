//! # Waveguide Core
//!
//! The computation engine behind the waveguide calculator. Given any two of
//! the propagation constant $\beta$, the effective index $n_{\text{eff}}$ and
//! the free-space wavelength $\lambda$, it derives the third from the phase
//! relation
//!
//! $$\beta = n_{\text{eff}} \frac{2\pi}{\lambda}$$
//!
//! while keeping the wavelength and frequency fields consistent through
//! $f \lambda = c$.
//!
//! ## Architecture
//!
//! Front ends never touch the numbers directly. They feed raw field text and
//! button presses into a [`session::Calculator`] as [`session::Event`]s and
//! render whatever it reports back: field text, the formula line, modal
//! notifications and the history feed.
//!
//! ## Modules
//!
//! - [`types`] — Field identifiers and parsed text slots.
//! - [`units`] — Wavelength/frequency conversion and the [`units::UnitSynchronizer`].
//! - [`solver`] — The [`solver::RelationSolver`] and the formulas it applies.
//! - [`error`] — Error taxonomy and user-facing notifications.
//! - [`history`] — Append-only log of successful solves.
//! - [`session`] — Event handling that ties the pieces together.
//! - [`config`] — TOML display configuration shared by the front ends.

pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod solver;
pub mod types;
pub mod units;

pub use error::{Notification, SolveError};
pub use session::{Calculator, Event, Outcome};
pub use types::Field;
