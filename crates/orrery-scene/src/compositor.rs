use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery_engine::coords::Viewport;
use orrery_engine::input::PointerState;
use orrery_engine::scene::DrawList;

use crate::config::{ConfigError, SceneConfig};
use crate::decor::{draw_background, draw_glow, draw_rings};
use crate::shape::Shape;

/// Paint layers, back to front.
pub mod layer {
    use orrery_engine::scene::ZIndex;

    pub const BACKGROUND: ZIndex = ZIndex(0);
    pub const RINGS: ZIndex = ZIndex(1);
    pub const SHAPES: ZIndex = ZIndex(2);
    pub const GLOW: ZIndex = ZIndex(3);
}

/// The full animated scene: configuration plus the blob collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    config: SceneConfig,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Validates `config` and creates its shapes, drawing initial
    /// orientations and rotation rates from `rng`.
    pub fn new<R: Rng + ?Sized>(config: SceneConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let shapes = (0..config.shape_count)
            .map(|i| Shape::new(i, &config, &mut *rng))
            .collect();

        log::debug!(
            "scene: {} shapes x {} segments, focal {}, depth ±{}",
            config.shape_count,
            config.segments,
            config.focal_length,
            config.depth
        );

        Ok(Self { config, shapes })
    }

    /// Like [`Scene::new`] with a deterministic generator.
    pub fn seeded(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, &mut StdRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Advances every shape by one frame and records the frame into `list`.
    ///
    /// `viewport` and `pointer` are read as given; nothing derived from them
    /// is kept between frames. The caller owns clearing `list`.
    pub fn frame(&mut self, time: f32, viewport: Viewport, pointer: &PointerState, list: &mut DrawList) {
        draw_background(time, viewport, list);
        draw_rings(time, viewport, &self.config, list);

        for shape in &mut self.shapes {
            shape.update(pointer, viewport, &self.config);
            shape.draw(time, viewport, &self.config, list);
        }

        draw_glow(time, pointer, &self.config, list);
    }
}
