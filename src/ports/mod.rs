//! Ports: trait boundaries between the application core and adapters.

mod allowed_email_repository;
mod interpretation_repository;
mod map_repository;
mod session;

pub use allowed_email_repository::AllowedEmailRepository;
pub use interpretation_repository::InterpretationRepository;
pub use map_repository::MapRepository;
pub use session::{IssuedToken, SessionIssuer, SessionValidator};
