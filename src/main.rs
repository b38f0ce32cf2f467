//! Treemorph headless demo
//!
//! Builds the full scene datasets, mounts every category and drives the
//! engine through a scatter -> tree -> scatter cycle, logging convergence.
//! The rendering collaborator is stood in for by draining each buffer's
//! dirty flag once per frame.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use treemorph::category::ParticleCategory;
use treemorph::core::error::Error;
use treemorph::core::logging;
use treemorph::core::time::FrameClock;
use treemorph::engine::MorphEngine;
use treemorph::morph::MorphState;

fn main() -> Result<(), Error> {
    logging::init();

    let mut rng = SmallRng::seed_from_u64(0x7ee);
    let mut engine = MorphEngine::new(&mut rng)?;
    engine.mount_all();

    let mut clock = FrameClock::new();
    let mut state = MorphState::Scattered;

    for frame in 0..1800u32 {
        if frame == 300 || frame == 1200 {
            state = state.toggled();
            log::info!("frame {frame}: morph target -> {state:?}");
        }

        clock.tick();
        engine.update(state, clock.elapsed_secs(), &mut rng);

        // Renderer stand-in: consume each category's upload flag.
        for category in ParticleCategory::ALL {
            if let Some(buffer) = engine.buffer_mut(category) {
                let _uploaded = buffer.take_dirty();
            }
        }

        if frame % 300 == 299 {
            for stats in engine.stats().categories {
                log::info!(
                    "frame {frame}: {} x{} mean progress {:.3}",
                    stats.name,
                    stats.count,
                    stats.mean_progress
                );
            }
        }
    }

    log::info!(
        "done: {} frames, {} particles",
        clock.frame_count(),
        engine.total_particles()
    );
    Ok(())
}
