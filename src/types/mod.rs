//! Value types for bulb control parameters.

mod brightness;
mod scene;

pub use brightness::Brightness;
pub use scene::Scene;
