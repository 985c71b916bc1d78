//! Resolvers that turn token runs into values
//!
//! All resolvers borrow the lexicon tables and hold no other state, so they
//! are built per call and thrown away.

pub mod fraction;
pub mod gender;
pub mod leftover;
pub mod numeral;
pub mod temporal;

pub use fraction::FractionResolver;
pub use gender::GenderResolver;
pub use leftover::{ConsumedSet, LeftoverAssembler};
pub use numeral::NumeralResolver;
pub use temporal::{next_weekday, previous_weekday, TemporalResolver};
