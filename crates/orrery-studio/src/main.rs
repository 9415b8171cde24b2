use std::env::{self, VarError};

use anyhow::{Context, Result};
use rand::Rng;

use orrery_engine::core::{App, AppControl, FrameCtx};
use orrery_engine::device::GpuInit;
use orrery_engine::logging::{init_logging, LoggingConfig};
use orrery_engine::time::{FixedStepClock, TickSource};
use orrery_engine::window::{Runtime, RuntimeConfig};
use orrery_scene::{Scene, SceneConfig};

/// Fixes the shape seed for reproducible runs.
const SEED_VAR: &str = "ORRERY_SEED";

/// Drives one scene frame per presented window frame.
struct SceneDriver<C> {
    scene: Scene,
    clock: C,
}

impl<C: TickSource> App for SceneDriver<C> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let now = self.clock.tick();
        let pointer = ctx.input.pointer;
        let scene = &mut self.scene;

        ctx.render(|viewport, list| scene.frame(now.time, viewport, &pointer, list))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let seed = scene_seed()?;
    let config = SceneConfig::default();
    log::info!("seed {seed} ({SEED_VAR} to reproduce)");
    log::debug!("{config:?}");

    let clock = FixedStepClock::new(config.time_step);
    let scene = Scene::seeded(config, seed).context("invalid scene configuration")?;

    Runtime::run(
        RuntimeConfig::default().title("Orrery"),
        GpuInit::default(),
        SceneDriver { scene, clock },
    )
}

fn scene_seed() -> Result<u64> {
    match env::var(SEED_VAR) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{SEED_VAR}={raw:?} is not an unsigned 64-bit integer")),
        Err(VarError::NotPresent) => Ok(rand::thread_rng().r#gen()),
        Err(err) => Err(err).with_context(|| format!("reading {SEED_VAR}")),
    }
}
