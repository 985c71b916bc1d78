//! Runtime tables for language lexicons
//!
//! All tables are built once from configuration and are read-only afterwards.

pub mod fraction;
pub mod gender;
pub mod numeral;
pub mod temporal;

pub use fraction::FractionTable;
pub use gender::GenderTable;
pub use numeral::{NumeralClass, NumeralEntry, NumeralTable};
pub use temporal::{FixedTimeEntry, PeriodEntry, TemporalTable};
