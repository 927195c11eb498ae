use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use cgmath::Point3;

use log::{error, info};

use whitted::color::Color;
use whitted::config::RenderConfig;
use whitted::film::FilmError;
use whitted::light::LightSource;
use whitted::material::Material;
use whitted::renderer;
use whitted::scene::Scene;
use whitted::surface::{Shape, Sphere, Surface};

fn demo_scene() -> Scene {
    let sphere = |x, y, z, r| Shape::Sphere(Sphere::new(Point3::new(x, y, z), r));
    let surfaces = vec![
        // Giant glass sphere standing in for the floor
        Surface::new(
            sphere(0.0, -10008.0, -40.0, 10000.0),
            Color::from_rgb(170, 170, 170),
            false,
            0.7,
            0.5,
            Material::Glass,
        ),
        Surface::new(
            sphere(0.0, 0.0, -30.0, 4.0),
            Color::white(),
            false,
            1.0,
            0.5,
            Material::Glass,
        ),
        Surface::new(
            sphere(-10.0, -2.0, -50.0, 4.5),
            Color::from_rgb(120, 120, 220),
            true,
            0.8,
            0.5,
            Material::Diffuse,
        ),
        Surface::new(
            sphere(10.0, -2.0, -50.0, 4.5),
            Color::from_rgb(255, 0, 0),
            false,
            1.0,
            0.2,
            Material::Glass,
        ),
    ];
    Scene::new(surfaces)
}

fn run() -> Result<(), FilmError> {
    let config = RenderConfig {
        light_source: LightSource::new(Point3::new(0.0, 20.0, -10.0), 1.0),
        ..Default::default()
    };
    let scene = Arc::new(demo_scene());

    let render_start = Instant::now();
    let film = renderer::render(&scene, &config);
    info!("Rendered in {:#?}", render_start.elapsed());

    film.save_ppm(Path::new("output.ppm"))?;
    film.save_png(Path::new("output.png"))?;
    info!("Saved output.ppm and output.png");
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
