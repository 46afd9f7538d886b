//! Map use cases: generate, fetch, list.

mod generate_map;
mod get_map;
mod list_maps;
mod readings;

pub use generate_map::{GenerateMapCommand, GenerateMapHandler, GenerateMapResult};
pub use get_map::{GetMapHandler, GetMapQuery, MapView};
pub use list_maps::{ListMapsHandler, ListMapsQuery};
pub use readings::Reading;
