//! Session token adapters.

mod jwt_session;
mod mock;

pub use jwt_session::JwtSessionService;
pub use mock::MockSessionValidator;
