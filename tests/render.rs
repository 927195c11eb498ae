use std::sync::Arc;

use cgmath::Point3;

use whitted::color::Color;
use whitted::config::RenderConfig;
use whitted::light::LightSource;
use whitted::material::Material;
use whitted::renderer;
use whitted::scene::Scene;
use whitted::surface::{Shape, Sphere, Surface};

fn test_config(width: u32, height: u32) -> RenderConfig {
    RenderConfig {
        width,
        height,
        fov: 30.0,
        light_source: LightSource::new(Point3::new(0.0, 20.0, -10.0), 1.0),
        ..Default::default()
    }
}

fn single_sphere(is_diffuse: bool) -> Arc<Scene> {
    let shape = Shape::Sphere(Sphere::new(Point3::new(0.0, 0.0, -30.0), 4.0));
    let surface = if is_diffuse {
        Surface::new(shape, Color::white(), true, 0.0, 0.0, Material::Diffuse)
    } else {
        Surface::new(shape, Color::white(), false, 1.0, 1.0, Material::Glass)
    };
    Arc::new(Scene::new(vec![surface]))
}

#[test]
fn output_is_identical_for_any_thread_count() {
    let scene = Arc::new(Scene::new(vec![
        Surface::new(
            Shape::Sphere(Sphere::new(Point3::new(0.0, 0.0, -30.0), 4.0)),
            Color::white(),
            false,
            1.0,
            0.5,
            Material::Glass,
        ),
        Surface::new(
            Shape::Sphere(Sphere::new(Point3::new(-3.0, -2.0, -40.0), 4.5)),
            Color::from_rgb(120, 120, 220),
            true,
            0.0,
            0.0,
            Material::Diffuse,
        ),
    ]));
    let single = RenderConfig {
        max_threads: 1,
        ..test_config(64, 48)
    };
    let multi = RenderConfig {
        max_threads: 3,
        ..test_config(64, 48)
    };
    let film_single = renderer::render(&scene, &single);
    let film_multi = renderer::render(&scene, &multi);
    assert_eq!(film_single, film_multi);
}

#[test]
fn sphere_shows_up_at_the_image_center() {
    let config = test_config(101, 101);
    let film = renderer::render(&single_sphere(true), &config);
    let sky = Color::from_rgb(130, 190, 255);
    let center = film.pixel(50, 50);
    assert!(center != sky);
    assert!(center.luma() > 0.0);
    // With a 30 degree fov the sphere does not reach the corners
    assert_eq!(film.pixel(0, 0), sky);
    assert_eq!(film.pixel(100, 100), sky);
}

#[test]
fn zero_depth_budget_renders_glass_as_diffuse() {
    let config = RenderConfig {
        max_ray_depth: 0,
        ..test_config(32, 32)
    };
    let glass = renderer::render(&single_sphere(false), &config);
    let diffuse = renderer::render(&single_sphere(true), &config);
    assert_eq!(glass, diffuse);
}
