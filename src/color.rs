use std::ops::{Add, AddAssign, Mul, MulAssign};

use cgmath::prelude::*;
use cgmath::Vector3;

use crate::Float;

/// Convert u8 color channel to float in range [0, 1]
pub fn to_float(c: u8) -> Float {
    Float::from(c) / 255.0
}

/// RGB color with channels nominally in [0, 1].
///
/// Intermediate results of the tracer may exceed the range;
/// channels are only clamped on conversion to output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    color: Vector3<Float>,
}

impl Color {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            color: Vector3::new(r, g, b),
        }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(to_float(r), to_float(g), to_float(b))
    }

    /// Clamp channels to [0, 1] and quantize to 8-bit rgb
    pub fn to_rgb(self) -> [u8; 3] {
        let quantize = |c: Float| (255.0 * c.max(0.0).min(1.0)) as u8;
        [
            quantize(self.color.x),
            quantize(self.color.y),
            quantize(self.color.z),
        ]
    }

    pub fn luma(&self) -> Float {
        let luma_vec = Vector3::new(0.2126, 0.7152, 0.0722);
        luma_vec.dot(self.color)
    }

    pub fn is_black(&self) -> bool {
        self.color.x == 0.0 && self.color.y == 0.0 && self.color.z == 0.0
    }

    pub fn r(&self) -> Float {
        self.color.x
    }

    pub fn g(&self) -> Float {
        self.color.y
    }

    pub fn b(&self) -> Float {
        self.color.z
    }
}

// Arithmetic operations

impl Add for Color {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.color += rhs.color;
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.color.mul_assign_element_wise(rhs.color);
        self
    }
}

impl Mul<Float> for Color {
    type Output = Self;

    fn mul(mut self, rhs: Float) -> Self {
        self *= rhs;
        self
    }
}

impl MulAssign<Float> for Color {
    fn mul_assign(&mut self, rhs: Float) {
        self.color *= rhs;
    }
}

impl Mul<Color> for Float {
    type Output = Color;

    // Delegate to Color Mul
    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn rgb_round_trip() {
        let c = Color::from_rgb(130, 190, 255);
        assert_eq!(c.to_rgb(), [130, 190, 255]);
    }

    #[test]
    fn to_rgb_clamps_out_of_range_channels() {
        let c = Color::new(1.5, -0.2, 0.5);
        assert_eq!(c.to_rgb(), [255, 0, 127]);
    }

    #[test]
    fn elementwise_product_filters_channels() {
        let surface = Color::new(0.5, 1.0, 0.0);
        let light = Color::new(1.0, 0.5, 1.0);
        assert_eq!(surface * light, Color::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn luma_of_white_is_one() {
        assert!((Color::white().luma() - 1.0).abs() < consts::EPSILON);
        assert!(Color::black().is_black());
    }
}
