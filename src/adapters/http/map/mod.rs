//! Map HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::MapHandlers;
pub use routes::map_routes;
