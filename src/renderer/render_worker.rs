use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::camera::Camera;
use crate::color::Color;
use crate::config::RenderConfig;
use crate::scene::Scene;
use crate::tracer;

use super::{Block, RenderCoordinator};

pub struct RenderWorker {
    scene: Arc<Scene>,
    config: RenderConfig,
    coordinator: Arc<RenderCoordinator>,
    result_tx: Sender<(Block, Vec<Color>)>,
}

impl RenderWorker {
    pub(super) fn new(
        scene: Arc<Scene>,
        config: RenderConfig,
        coordinator: Arc<RenderCoordinator>,
        result_tx: Sender<(Block, Vec<Color>)>,
    ) -> RenderWorker {
        RenderWorker {
            scene,
            config,
            coordinator,
            result_tx,
        }
    }

    pub fn run(&self) {
        let camera = Camera::new(&self.config);
        while let Some(block) = self.coordinator.next_block() {
            let mut colors = Vec::with_capacity((block.width * block.height) as usize);
            for h in 0..block.height {
                for w in 0..block.width {
                    let ray = camera.primary_ray(block.left + w, block.top + h);
                    colors.push(tracer::trace(&ray, &self.scene, &self.config, 0));
                }
            }
            self.result_tx
                .send((block, colors))
                .expect("Receiver closed!");
        }
    }
}
