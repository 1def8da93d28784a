mod camera;
mod math;
mod motion;
mod node;
mod scene;
pub mod scenes;
pub mod svg;

pub use camera::*;
pub use math::*;
pub use motion::*;
pub use node::*;
pub use scene::*;
