use cgmath::prelude::*;
use cgmath::Point3;

use crate::light::LightSource;
use crate::Float;

/// Settings for a single render.
///
/// Built by the caller before rendering and passed by reference to the
/// driver and the tracer; read-only for the duration of the render.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Vertical field-of-view in degrees, 0 < fov < 180
    pub fov: Float,
    /// Recursion budget for reflection and refraction rays
    pub max_ray_depth: usize,
    /// World space origin of all primary rays
    pub eye_origin: Point3<Float>,
    /// The single light source of the scene
    pub light_source: LightSource,
    /// Number of render threads. Zero uses one thread per physical core.
    pub max_threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 600,
            fov: 30.0,
            max_ray_depth: 5,
            eye_origin: Point3::origin(),
            light_source: LightSource::new(Point3::new(0.0, 20.0, -10.0), 1.0),
            max_threads: 0,
        }
    }
}
