pub mod animator;
pub mod constants;
pub mod content;
pub mod interaction;
pub mod marker;
pub mod markup;
pub mod navigation;
pub mod orbit;
pub mod page;
pub mod picking;
pub mod scene;

pub use animator::*;
pub use constants::*;
pub use interaction::*;
pub use marker::*;
pub use navigation::*;
pub use orbit::*;
pub use page::*;
pub use picking::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
