use crate::float::*;

#[cfg(not(feature = "single_precision"))]
pub use self::double::*;
#[cfg(feature = "single_precision")]
pub use self::single::*;

/// Offset applied along the surface normal when spawning secondary rays
/// to avoid immediate self-intersection.
pub const BIAS: Float = 1e-4;

#[cfg(not(feature = "single_precision"))]
mod double {
    use super::*;

    pub const EPSILON: Float = 1e-10;
    pub const MAX: Float = std::f64::MAX;
    pub const PI: Float = std::f64::consts::PI;
}

#[cfg(feature = "single_precision")]
mod single {
    use super::*;

    pub const EPSILON: Float = 1e-5;
    pub const MAX: Float = std::f32::MAX;
    pub const PI: Float = std::f32::consts::PI;
}
