pub mod camera;
pub mod error;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod store;
pub mod tuning;
pub mod view;
pub mod zone;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use error::ParseError;
pub use material::{Appearance, Family, Material, MaterialId, CATALOG};
pub use mesh::{unit_cube, unit_cylinder, MeshData, Vertex};
pub use scene::{compose, Scene, SceneElement, Shape};
pub use store::{Action, Configuration, ConfiguratorStore, Selection};
pub use tuning::{CameraPreset, ParamRange, SceneTuning, TuningParam};
pub use view::ViewMode;
pub use zone::{SubPanel, Wall, Zone, LETTER_ZONES};
