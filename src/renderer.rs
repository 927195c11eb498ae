//! The raster driver.
//!
//! Pixels are handed out to worker threads in blocks. Each pixel is
//! traced independently, so the assembled film is identical for any
//! thread count.

mod render_worker;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use log::{debug, info};

use crate::config::RenderConfig;
use crate::film::Film;
use crate::scene::Scene;

use self::render_worker::RenderWorker;

/// Rectangular group of pixels handed to a worker
#[derive(Clone, Copy, Debug)]
pub struct Block {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

pub struct RenderCoordinator {
    width: u32,
    height: u32,
    block_width: u32,
    block_height: u32,
    x_blocks: usize,
    n_blocks: usize,
    current_block: AtomicUsize,
}

impl RenderCoordinator {
    fn new(config: &RenderConfig) -> RenderCoordinator {
        let block_width = 50;
        let block_height = 50;
        let x_blocks = (f64::from(config.width) / f64::from(block_width)).ceil() as usize;
        let y_blocks = (f64::from(config.height) / f64::from(block_height)).ceil() as usize;
        RenderCoordinator {
            width: config.width,
            height: config.height,
            block_width,
            block_height,
            x_blocks,
            n_blocks: x_blocks * y_blocks,
            current_block: AtomicUsize::new(0),
        }
    }

    fn next_block(&self) -> Option<Block> {
        let block_i = self.current_block.fetch_add(1, Ordering::Relaxed);
        if block_i >= self.n_blocks {
            return None;
        }
        let x_i = (block_i % self.x_blocks) as u32;
        let y_i = (block_i / self.x_blocks) as u32;
        let start_x = self.block_width * x_i;
        let end_x = (self.block_width * (x_i + 1)).min(self.width);
        let start_y = self.block_height * y_i;
        let end_y = (self.block_height * (y_i + 1)).min(self.height);
        Some(Block {
            left: start_x,
            top: start_y,
            width: end_x - start_x,
            height: end_y - start_y,
        })
    }
}

/// Render the scene into a film with the settings in config
pub fn render(scene: &Arc<Scene>, config: &RenderConfig) -> Film {
    let n_threads = if config.max_threads > 0 {
        config.max_threads
    } else {
        num_cpus::get_physical().max(1)
    };
    info!(
        "Rendering {}x{} with {} threads",
        config.width, config.height, n_threads
    );
    let start = Instant::now();

    let coordinator = Arc::new(RenderCoordinator::new(config));
    let (result_tx, result_rx) = mpsc::channel();
    let mut thread_handles = Vec::new();
    for _ in 0..n_threads {
        let result_tx = result_tx.clone();
        let coordinator = coordinator.clone();
        let config = config.clone();
        let scene = scene.clone();
        let handle = thread::spawn(move || {
            let worker = RenderWorker::new(scene, config, coordinator, result_tx);
            worker.run();
        });
        thread_handles.push(handle);
    }
    // Drop the original sender so the channel closes once all workers finish
    drop(result_tx);

    let mut film = Film::new(config.width, config.height);
    for (block, colors) in result_rx {
        film.set_block(block, &colors);
    }
    for handle in thread_handles {
        handle.join().expect("Render worker panicked!");
    }

    debug!("Render finished in {:#?}", start.elapsed());
    film
}
