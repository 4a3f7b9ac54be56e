pub mod composer;
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod model;
pub mod obj;
pub mod orbit;
pub mod preference;
pub mod scheduler;
pub mod state;
pub mod theme;

pub use composer::*;
pub use config::*;
pub use constants::*;
pub use effect::*;
pub use error::*;
pub use geometry::*;
pub use model::*;
pub use obj::*;
pub use orbit::*;
pub use preference::*;
pub use scheduler::*;
pub use state::*;
pub use theme::*;

// Shaders bundled as string constants
pub static WAVES_WGSL: &str = include_str!("../../shaders/waves.wgsl");
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
