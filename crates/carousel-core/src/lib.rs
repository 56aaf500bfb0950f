pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod state;
pub mod style;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use state::*;
pub use style::*;
