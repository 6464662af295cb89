//! Number utilities.
//!
//! Rounding, range normalisation and display formatting (thousands groups,
//! currency, percent, byte sizes).

mod format;
mod round;
mod stats;

pub use format::{format_bytes, format_currency, format_percent, format_thousands, CurrencyOptions};
pub use round::{ceil_to, clamp, floor_to, in_range, round};
pub use stats::{average, random_int, sum, to_number};
