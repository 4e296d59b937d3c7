mod geojson;
pub mod overlay;

pub use overlay::*;
