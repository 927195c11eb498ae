use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::surface::Surface;
use crate::Float;

/// Ray with a normalized direction
#[derive(Clone, Debug)]
pub struct Ray {
    pub orig: Point3<Float>,
    pub dir: Vector3<Float>,
}

impl Ray {
    /// Ray with a given direction. The direction must be nonzero.
    pub fn from_dir(orig: Point3<Float>, dir: Vector3<Float>) -> Ray {
        Ray {
            orig,
            dir: dir.normalize(),
        }
    }

    /// Ray from origin towards another point
    pub fn towards(orig: Point3<Float>, to: Point3<Float>) -> Ray {
        Ray::from_dir(orig, to - orig)
    }
}

/// Nearest intersection found for a ray
pub struct Hit<'a> {
    pub surface: &'a Surface,
    pub t: Float,
}

impl Hit<'_> {
    pub fn point(&self, ray: &Ray) -> Point3<Float> {
        ray.orig + self.t * ray.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn constructed_rays_are_normalized() {
        let ray = Ray::from_dir(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 3.0, -4.0));
        assert!((ray.dir.magnitude() - 1.0).abs() < consts::EPSILON);
        let ray = Ray::towards(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, -5.0, 2.0));
        assert!((ray.dir.magnitude() - 1.0).abs() < consts::EPSILON);
    }

    #[test]
    fn normalization_is_idempotent() {
        let v = Vector3::new(1.5, -2.5, 0.3);
        let n1 = v.normalize();
        let n2 = n1.normalize();
        assert!((n1 - n2).magnitude() < consts::EPSILON);
        assert!((n1.magnitude() - 1.0).abs() < consts::EPSILON);
    }
}
