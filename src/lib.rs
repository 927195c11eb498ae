//! Recursive Whitted-style ray tracer for scenes of implicit spheres.
//!
//! The scene is a flat list of surfaces lit by a single point light.
//! Diffuse surfaces get local shading with shadow rays; glass surfaces
//! are shaded by recursive reflection and refraction rays blended with
//! the Schlick approximation. `renderer::render` drives one primary
//! ray per pixel and produces a `Film` that serializes to PPM or PNG.

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod film;
pub mod float;
pub mod intersect;
pub mod light;
pub mod material;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod tracer;

pub use crate::float::Float;
