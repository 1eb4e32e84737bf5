pub mod camera;
pub mod consts;
pub mod coordinate_system;
pub mod error;
pub mod object;
pub mod scene;

pub use camera::Camera;
pub use coordinate_system::CoordinateSystem;
pub use error::SceneError;
pub use object::{Object, ObjectId, ObjectInfo};
pub use scene::Scene;
