//! Flight booker task

use chrono::{Days, NaiveDate};
use thiserror::Error;

/// One-way or return trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingMode {
    #[default]
    OneWay,
    Return,
}

/// Why a booking attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("departure date {0} is in the past")]
    DepartureInPast(NaiveDate),

    #[error("return date {0} is before departure {1}")]
    ReturnBeforeDeparture(NaiveDate, NaiveDate),
}

/// A bookable trip, ready for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Itinerary {
    pub departure: NaiveDate,
    /// `None` for a one-way flight
    pub return_date: Option<NaiveDate>,
}

impl Itinerary {
    /// The confirmation line shown to the user.
    pub fn confirmation(&self) -> String {
        match self.return_date {
            Some(ret) => format!("Book {} - {}?", self.departure, ret),
            None => format!("Book {}?", self.departure),
        }
    }
}

/// The booking form state.
///
/// Defaults to a one-way flight departing a week from `today`, with a
/// return pencilled in three days after departure. `today` is supplied at
/// construction; the form never consults a clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingForm {
    today: NaiveDate,
    mode: BookingMode,
    departure: NaiveDate,
    return_date: NaiveDate,
}

impl BookingForm {
    pub fn new(today: NaiveDate) -> Self {
        let departure = today + Days::new(7);
        Self {
            today,
            mode: BookingMode::default(),
            departure,
            return_date: departure + Days::new(3),
        }
    }

    pub fn mode(&self) -> BookingMode {
        self.mode
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    pub fn set_mode(&mut self, mode: BookingMode) {
        self.mode = mode;
    }

    /// Pick a departure date. The pencilled-in return follows along when
    /// it would otherwise land before departure.
    pub fn set_departure(&mut self, date: NaiveDate) {
        self.departure = date;
        if self.return_date < date {
            self.return_date = date + Days::new(3);
        }
    }

    pub fn set_return(&mut self, date: NaiveDate) {
        self.return_date = date;
    }

    /// Validate the form and produce the trip to confirm.
    pub fn book(&self) -> Result<Itinerary, BookingError> {
        if self.departure < self.today {
            return Err(BookingError::DepartureInPast(self.departure));
        }
        let return_date = match self.mode {
            BookingMode::OneWay => None,
            BookingMode::Return => {
                if self.return_date < self.departure {
                    return Err(BookingError::ReturnBeforeDeparture(
                        self.return_date,
                        self.departure,
                    ));
                }
                Some(self.return_date)
            }
        };
        Ok(Itinerary {
            departure: self.departure,
            return_date,
        })
    }
}
