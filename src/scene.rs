use crate::consts;
use crate::intersect::{Hit, Ray};
use crate::surface::Surface;

/// Scene containing all the surfaces of one render
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    pub fn new(surfaces: Vec<Surface>) -> Scene {
        Scene { surfaces }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Find the nearest intersection along the ray.
    ///
    /// The far root stands in for a negative near root so that rays
    /// starting inside a surface still register a hit. Exact distance
    /// ties go to the surface inserted first.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut min_t = consts::MAX;
        let mut min_surface = None;
        for surface in &self.surfaces {
            if let Some((t1, t2)) = surface.intersect(ray) {
                let t = if t1 < 0.0 { t2 } else { t1 };
                if t < min_t {
                    min_t = t;
                    min_surface = Some(surface);
                }
            }
        }
        min_surface.map(|surface| Hit {
            surface,
            t: min_t,
        })
    }

    /// Check whether the ray hits anything at all.
    /// Any hit fully occludes, so no nearest-hit search is needed.
    pub fn intersect_shadow(&self, ray: &Ray) -> bool {
        self.surfaces
            .iter()
            .any(|surface| surface.intersect(ray).is_some())
    }
}
