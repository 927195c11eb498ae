use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::color::Color;
use crate::intersect::Ray;
use crate::material::Material;
use crate::Float;

/// Sphere defined by center and radius
#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3<Float>,
    pub radius: Float,
    radius_sq: Float,
}

impl Sphere {
    /// The radius must be positive
    pub fn new(center: Point3<Float>, radius: Float) -> Sphere {
        Sphere {
            center,
            radius,
            radius_sq: radius * radius,
        }
    }

    /// Distances to the near and far intersection along the ray.
    /// The near distance is negative when the ray starts inside the sphere.
    fn intersect(&self, ray: &Ray) -> Option<(Float, Float)> {
        let l = self.center - ray.orig;
        let tca = l.dot(ray.dir);
        // Sphere center is behind the ray origin
        if tca < 0.0 {
            return None;
        }
        let d_sq = l.dot(l) - tca * tca;
        if d_sq > self.radius_sq {
            return None;
        }
        let thc = (self.radius_sq - d_sq).sqrt();
        Some((tca - thc, tca + thc))
    }

    /// Outward normal at p. p is assumed to lie on the sphere.
    fn normal_at(&self, p: Point3<Float>) -> Vector3<Float> {
        (p - self.center).normalize()
    }
}

/// Closed set of shapes the tracer can intersect
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
}

/// Scene object: a shape with its appearance attributes.
/// Built once at scene construction and immutable for the render.
#[derive(Clone, Debug)]
pub struct Surface {
    pub shape: Shape,
    pub color: Color,
    pub is_diffuse: bool,
    pub transparency: Float,
    pub reflectivity: Float,
    pub material: Material,
}

impl Surface {
    pub fn new(
        shape: Shape,
        color: Color,
        is_diffuse: bool,
        transparency: Float,
        reflectivity: Float,
        material: Material,
    ) -> Surface {
        Surface {
            shape,
            color,
            is_diffuse,
            transparency,
            reflectivity,
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<(Float, Float)> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    pub fn normal_at(&self, p: Point3<Float>) -> Vector3<Float> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.normal_at(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    fn test_sphere() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, -30.0), 4.0)
    }

    #[test]
    fn ray_through_center_hits_both_roots() {
        let ray = Ray::from_dir(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        let (t1, t2) = test_sphere().intersect(&ray).expect("Should hit");
        assert!((t1 - 26.0).abs() < consts::EPSILON);
        assert!((t2 - 34.0).abs() < consts::EPSILON);
    }

    #[test]
    fn sphere_behind_origin_is_a_miss() {
        let ray = Ray::from_dir(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(test_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn ray_past_the_silhouette_is_a_miss() {
        let ray = Ray::from_dir(Point3::new(0.0, 10.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(test_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn origin_inside_yields_negative_near_root() {
        let ray = Ray::from_dir(Point3::new(0.0, 0.0, -30.0), Vector3::new(0.0, 0.0, -1.0));
        let (t1, t2) = test_sphere().intersect(&ray).expect("Should hit");
        assert!((t1 + 4.0).abs() < consts::EPSILON);
        assert!((t2 - 4.0).abs() < consts::EPSILON);
    }

    #[test]
    fn normal_is_radial_and_unit_length() {
        let sphere = test_sphere();
        let p = Point3::new(0.0, 4.0, -30.0);
        let n = sphere.normal_at(p);
        assert!((n.magnitude() - 1.0).abs() < consts::EPSILON);
        let radial = (p - sphere.center).normalize();
        assert!(n.dot(radial) > 1.0 - consts::EPSILON);
    }
}
