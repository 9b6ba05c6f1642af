pub mod camera;
pub mod choreographer;
pub mod constants;
pub mod detection;
pub mod field;
pub mod focus;
pub mod gesture;
pub mod landmarks;
pub mod pose;
pub mod scene;
pub mod snow;
pub mod star;
pub mod transform;

pub use camera::*;
pub use choreographer::*;
pub use constants::*;
pub use detection::*;
pub use field::*;
pub use focus::*;
pub use gesture::*;
pub use landmarks::*;
pub use pose::*;
pub use scene::*;
pub use snow::*;
pub use star::*;
pub use transform::*;
