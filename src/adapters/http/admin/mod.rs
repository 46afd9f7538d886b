//! Admin panel HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AdminHandlers;
pub use routes::admin_routes;
