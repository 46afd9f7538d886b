//! Email allow-list domain types.

mod allowed_email;

pub use allowed_email::{AccessSource, AllowedEmail};
