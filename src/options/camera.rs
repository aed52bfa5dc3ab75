use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Closest the camera may zoom to the target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may zoom from the target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Distance multiplier for one zoom-in step.
    #[schemars(title = "Zoom Step", range(min = 0.5, max = 0.95), extend("step" = 0.05))]
    pub zoom_factor: f32,
    /// Radians added to the model's Y rotation per auto-rotate frame.
    #[schemars(title = "Rotate Speed", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 100.0],
            fovy: 50.0,
            min_distance: 10.0,
            max_distance: 500.0,
            zoom_factor: 0.8,
            auto_rotate_speed: 0.001,
        }
    }
}
