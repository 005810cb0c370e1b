pub mod config;
pub mod constants;
pub mod geometry;
pub mod registry;
pub mod state;
pub mod value;

pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use registry::*;
pub use state::*;
pub use value::*;
