//! Karmic map aggregate and its variants.

mod aggregate;
mod variant;

pub use aggregate::KarmicMap;
pub use variant::MapVariant;
