use cgmath::Point3;

use crate::Float;

/// Point light source. A render uses exactly one.
#[derive(Clone, Debug)]
pub struct LightSource {
    pub origin: Point3<Float>,
    pub brightness: Float,
}

impl LightSource {
    pub fn new(origin: Point3<Float>, brightness: Float) -> Self {
        Self { origin, brightness }
    }
}
