use crate::Float;

/// Materials known to the tracer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Diffuse,
    Glass,
}

impl Material {
    /// Absolute refractive index of the material
    pub fn refractive_index(self) -> Float {
        match self {
            Material::Diffuse => 1.0,
            Material::Glass => 1.52,
        }
    }

    /// Reciprocal of the refractive index,
    /// the relative index when entering the material from air
    pub fn inv_refractive_index(self) -> Float {
        match self {
            Material::Diffuse => 1.0,
            Material::Glass => 1.0 / 1.52,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn indices_are_reciprocal() {
        for mat in [Material::Diffuse, Material::Glass].iter() {
            let product = mat.refractive_index() * mat.inv_refractive_index();
            assert!((product - 1.0).abs() < consts::EPSILON);
        }
        assert!(Material::Glass.refractive_index() > 1.0);
    }
}
