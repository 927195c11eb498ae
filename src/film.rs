use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::color::Color;
use crate::renderer::Block;

#[derive(Debug, Error)]
pub enum FilmError {
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Rendered image: row-major pixels with the origin at the top left
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Film {
        Film {
            width,
            height,
            pixels: vec![Color::black(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered block into the film
    pub fn set_block(&mut self, block: Block, colors: &[Color]) {
        for h in 0..block.height {
            for w in 0..block.width {
                let i = (h * block.width + w) as usize;
                self.set_pixel(block.left + w, block.top + h, colors[i]);
            }
        }
    }

    /// Write the image as a plain text PPM (P3) with 8-bit channels
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{}", self.width)?;
        writeln!(out, "{}", self.height)?;
        writeln!(out, "255")?;
        for pixel in &self.pixels {
            let [r, g, b] = pixel.to_rgb();
            writeln!(out, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }

    pub fn save_ppm(&self, path: &Path) -> Result<(), FilmError> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut file)?;
        file.flush()?;
        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> Result<(), FilmError> {
        let mut data = Vec::with_capacity(3 * self.pixels.len());
        for pixel in &self.pixels {
            data.extend_from_slice(&pixel.to_rgb());
        }
        image::save_buffer(path, &data, self.width, self.height, image::ColorType::Rgb8)?;
        Ok(())
    }
}
