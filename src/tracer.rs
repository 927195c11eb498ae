//! The shading and recursion engine.
//!
//! A ray is shaded by the nearest surface it hits. Diffuse surfaces get
//! local Lambertian shading with a shadow test against the single light.
//! Other surfaces are shaded purely by recursive reflection and
//! refraction rays, blended with the Schlick approximation of the
//! Fresnel reflectance. Recursion is cut off at the configured depth by
//! falling back to local shading.

use cgmath::prelude::*;

use crate::color::Color;
use crate::config::RenderConfig;
use crate::consts;
use crate::intersect::Ray;
use crate::scene::Scene;
use crate::Float;

/// Background for rays that escape the scene
fn sky_color() -> Color {
    Color::from_rgb(130, 190, 255)
}

/// Schlick approximation of the Fresnel reflectance at a dielectric
/// boundary with indices n1 (incident) and n2 (transmitted).
/// When light passes into the optically thinner medium the exit angle
/// replaces the incident angle.
fn schlick_weight(n1: Float, n2: Float, cos_i: Float, sin_t_sq: Float) -> Float {
    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    let cos_x = if n1 > n2 {
        (1.0 - sin_t_sq).sqrt()
    } else {
        cos_i
    };
    r0 + (1.0 - r0) * (1.0 - cos_x).powi(5)
}

/// Trace a ray through the scene and return its color.
/// Primary rays start at depth 0.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: usize) -> Color {
    let hit = match scene.intersect(ray) {
        Some(hit) => hit,
        None => return sky_color(),
    };
    let p = hit.point(ray);
    let mut normal = hit.surface.normal_at(p);
    // The ray is exiting from inside the surface. Flip the normal so
    // the shadow offset and the refraction math stay on the right side.
    let inside = ray.dir.dot(normal) > 0.0;
    if inside {
        normal = -normal;
    }

    if hit.surface.is_diffuse || depth >= config.max_ray_depth {
        let light = &config.light_source;
        let shadow_ray = Ray::towards(p + normal * consts::BIAS, light.origin);
        if scene.intersect_shadow(&shadow_ray) {
            return Color::black();
        }
        let lambert = normal.dot(shadow_ray.dir).max(0.0);
        hit.surface.color * (light.brightness * lambert)
    } else {
        let mut reflection = Color::black();
        let mut refraction = Color::black();
        // Reflection carries all the energy until refraction is evaluated
        let mut weight = 1.0;

        if hit.surface.reflectivity > 0.0 {
            let dir = ray.dir - normal * 2.0 * ray.dir.dot(normal);
            let reflection_ray = Ray::from_dir(p + normal * consts::BIAS, dir);
            reflection = trace(&reflection_ray, scene, config, depth + 1);
        }

        if hit.surface.transparency > 0.0 {
            let n = if inside {
                hit.surface.material.refractive_index()
            } else {
                hit.surface.material.inv_refractive_index()
            };
            let cos_i = -ray.dir.dot(normal);
            let sin_t_sq = n * n * (1.0 - cos_i * cos_i);
            // Past the critical angle the boundary is purely reflective
            if sin_t_sq <= 1.0 {
                let dir = ray.dir * n + normal * (n * cos_i - (1.0 - sin_t_sq).sqrt());
                // Push the origin across the boundary, opposite to the reflection offset
                let refraction_ray = Ray::from_dir(p - normal * consts::BIAS, dir);
                let index = hit.surface.material.refractive_index();
                let (n1, n2) = if inside { (index, 1.0) } else { (1.0, index) };
                weight = schlick_weight(n1, n2, cos_i, sin_t_sq);
                refraction = trace(&refraction_ray, scene, config, depth + 1);
            }
        }

        hit.surface.color
            * (reflection * (weight * hit.surface.reflectivity)
                + refraction * ((1.0 - weight) * hit.surface.transparency))
    }
}
