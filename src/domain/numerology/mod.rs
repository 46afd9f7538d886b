//! The karmic number derivation engine.
//!
//! A birth date in `DD/MM/YYYY` form becomes four small integers (the
//! karmic numbers), each drawn from 1-9 plus the master numbers 11, 22,
//! 33 and 44. Everything here is pure, synchronous computation.

mod birth_date;
pub mod calculator;
mod number_set;
mod reduction;

pub use birth_date::{days_in_month, BirthDate, MIN_BIRTH_YEAR};
pub use calculator::{calculate_all, calculate_all_from_text, PORTAL_ANCHOR_YEAR};
pub use number_set::{KarmicCategory, KarmicNumberSet};
pub use reduction::{is_master_number, reduce, MASTER_NUMBERS};
