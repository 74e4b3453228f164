//! # sevenguis-tasks
//!
//! The state layer behind each 7GUIs showcase task, kept free of any
//! widget or rendering concern. Every model receives its state explicitly
//! and exposes named operations; nothing captures hidden mutable state,
//! and anything clock- or date-driven takes "now" as an argument.

pub mod booking;
pub mod cells;
pub mod circles;
pub mod counter;
pub mod crud;
pub mod history;
pub mod temperature;
pub mod timer;

pub use booking::{BookingError, BookingForm, BookingMode, Itinerary};
pub use cells::{CellsStore, WatchGuard};
pub use circles::{Canvas, Circle};
pub use counter::Counter;
pub use crud::{Person, PersonList};
pub use history::History;
pub use temperature::Temperature;
pub use timer::Timer;

/// Round to one decimal place, the way the showcase displays readings.
pub(crate) fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}
