use cgmath::{Point3, Vector3};

use crate::config::RenderConfig;
use crate::consts;
use crate::float::*;
use crate::intersect::Ray;

/// Pinhole camera that maps pixels to primary rays.
/// Pixel (0, 0) is the top left corner of the image and y grows downward.
pub struct Camera {
    eye: Point3<Float>,
    half_fov_tan: Float,
    aspect_ratio: Float,
    inv_width: Float,
    inv_height: Float,
}

impl Camera {
    pub fn new(config: &RenderConfig) -> Camera {
        Camera {
            eye: config.eye_origin,
            half_fov_tan: (consts::PI * 0.5 * config.fov / 180.0).tan(),
            aspect_ratio: config.width.to_float() / config.height.to_float(),
            inv_width: 1.0 / config.width.to_float(),
            inv_height: 1.0 / config.height.to_float(),
        }
    }

    /// Primary ray through the center of pixel (x, y)
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let dx = (2.0 * ((x.to_float() + 0.5) * self.inv_width) - 1.0)
            * self.half_fov_tan
            * self.aspect_ratio;
        let dy = (1.0 - 2.0 * ((y.to_float() + 0.5) * self.inv_height)) * self.half_fov_tan;
        Ray::from_dir(self.eye, Vector3::new(dx, dy, -1.0))
    }
}
