//! PostgreSQL repository adapters.

mod email_repository;
mod interpretation_repository;
mod map_repository;

pub use email_repository::PostgresEmailRepository;
pub use interpretation_repository::PostgresInterpretationRepository;
pub use map_repository::PostgresMapRepository;
