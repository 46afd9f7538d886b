//! Authentication use cases.

mod login;

pub use login::{LoginCommand, LoginHandler, LoginResult};
