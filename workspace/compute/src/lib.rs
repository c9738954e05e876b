pub mod chart;
pub mod controller;
pub mod error;
pub mod interpretation;
pub mod sequencer;
pub mod validation;

#[cfg(test)]
mod testing;

pub use chart::{chart_series, ChartPoint, FALLBACK_LAST_YEAR};
pub use controller::{transition, ChartDisplay, ControllerState, Event, HistoricalStatus};
pub use error::ControllerError;
pub use interpretation::Outlook;
pub use sequencer::{RequestSequencer, RequestTicket};
