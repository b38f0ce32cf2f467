//! Per-frame instance updater.
//!
//! `MorphEngine` owns the static datasets, the per-particle morph fractions
//! and the per-category instance buffers. Each frame it advances every
//! particle toward the externally supplied morph target and rewrites the
//! instance buffers; no per-particle heap allocation happens on that path.

use glam::Mat4;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::anim;
use crate::category::ParticleCategory;
use crate::config::{BASE_MORPH_RATE, CategoryConfig, MORPH_RATE_JITTER};
use crate::core::error::Error;
use crate::dataset::CategoryDataset;
use crate::instance::InstanceBuffer;
use crate::morph::{MorphState, MorphTracker};

/// Everything the updater touches for one category. The dataset is immutable
/// after build; the tracker and buffer are the only cross-frame mutable state.
struct CategorySlot {
    config: CategoryConfig,
    dataset: CategoryDataset,
    tracker: MorphTracker,
    buffer: Option<InstanceBuffer>,
}

/// Per-category summary for logging and inspection.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryStats {
    pub name: &'static str,
    pub count: usize,
    pub mean_progress: f32,
    pub mounted: bool,
}

/// Whole-engine summary.
#[derive(Clone, Debug, Serialize)]
pub struct EngineStats {
    pub total_particles: usize,
    pub categories: Vec<CategoryStats>,
}

pub struct MorphEngine {
    slots: Vec<CategorySlot>,
}

impl MorphEngine {
    /// Build all datasets with the documented per-category constants.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, Error> {
        Self::with_configs(ParticleCategory::ALL.map(CategoryConfig::for_category), rng)
    }

    /// Build all datasets from explicit configs. Validates every config and
    /// creates the paired progress arrays alongside the record arrays.
    pub fn with_configs<R: Rng>(
        configs: [CategoryConfig; ParticleCategory::COUNT],
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut slots = Vec::with_capacity(ParticleCategory::COUNT);
        for (category, config) in ParticleCategory::ALL.into_iter().zip(configs) {
            config.validate(category)?;
            let dataset = CategoryDataset::build(category, &config, rng);
            let tracker = MorphTracker::new(dataset.len());
            slots.push(CategorySlot {
                config,
                dataset,
                tracker,
                buffer: None,
            });
        }
        let engine = Self { slots };
        log::info!(
            "built {} particles across {} categories",
            engine.total_particles(),
            ParticleCategory::COUNT
        );
        Ok(engine)
    }

    /// Allocate the instance buffer for a category, making it eligible for
    /// per-frame updates.
    pub fn mount(&mut self, category: ParticleCategory) {
        let slot = &mut self.slots[category.index()];
        if slot.buffer.is_none() {
            slot.buffer = Some(InstanceBuffer::new(slot.dataset.len()));
            log::debug!("mounted {category} ({} instances)", slot.dataset.len());
        }
    }

    pub fn mount_all(&mut self) {
        for category in ParticleCategory::ALL {
            self.mount(category);
        }
    }

    /// Drop a category's instance buffer. Its progress is retained, but its
    /// update is skipped until it is mounted again.
    pub fn unmount(&mut self, category: ParticleCategory) {
        self.slots[category.index()].buffer = None;
    }

    /// Discard and regenerate one category's records together with its paired
    /// progress array and, if mounted, its instance buffer.
    pub fn rebuild<R: Rng>(&mut self, category: ParticleCategory, rng: &mut R) {
        let slot = &mut self.slots[category.index()];
        slot.dataset = CategoryDataset::build(category, &slot.config, rng);
        slot.tracker = MorphTracker::new(slot.dataset.len());
        if slot.buffer.is_some() {
            slot.buffer = Some(InstanceBuffer::new(slot.dataset.len()));
        }
        log::debug!("rebuilt {category}");
    }

    /// Swap in a new config (count change path) and rebuild the category.
    pub fn reconfigure<R: Rng>(
        &mut self,
        category: ParticleCategory,
        config: CategoryConfig,
        rng: &mut R,
    ) -> Result<(), Error> {
        config.validate(category)?;
        self.slots[category.index()].config = config;
        self.rebuild(category, rng);
        Ok(())
    }

    /// The per-frame step: advance every particle's morph fraction toward the
    /// state's target and rewrite every mounted category's instance buffer.
    /// Unmounted categories are skipped without affecting the others.
    pub fn update<R: Rng>(&mut self, state: MorphState, elapsed_secs: f32, rng: &mut R) {
        let target = state.target_fraction();
        for slot in &mut self.slots {
            update_slot(slot, target, elapsed_secs, rng);
        }
    }

    /// Category-parallel variant of [`update`](Self::update). Categories share
    /// no mutable state, so each runs on its own worker with a generator split
    /// off the caller's.
    pub fn par_update<R: Rng>(&mut self, state: MorphState, elapsed_secs: f32, rng: &mut R) {
        let target = state.target_fraction();
        let seeds: Vec<u64> = (0..self.slots.len()).map(|_| rng.random()).collect();
        self.slots
            .par_iter_mut()
            .zip(seeds)
            .for_each(|(slot, seed)| {
                let mut rng = SmallRng::seed_from_u64(seed);
                update_slot(slot, target, elapsed_secs, &mut rng);
            });
    }

    pub fn dataset(&self, category: ParticleCategory) -> &CategoryDataset {
        &self.slots[category.index()].dataset
    }

    pub fn config(&self, category: ParticleCategory) -> &CategoryConfig {
        &self.slots[category.index()].config
    }

    /// Morph fractions for a category, index-paired with its records.
    pub fn progress(&self, category: ParticleCategory) -> &[f32] {
        self.slots[category.index()].tracker.progress()
    }

    pub fn buffer(&self, category: ParticleCategory) -> Option<&InstanceBuffer> {
        self.slots[category.index()].buffer.as_ref()
    }

    pub fn buffer_mut(&mut self, category: ParticleCategory) -> Option<&mut InstanceBuffer> {
        self.slots[category.index()].buffer.as_mut()
    }

    pub fn total_particles(&self) -> usize {
        self.slots.iter().map(|s| s.dataset.len()).sum()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            total_particles: self.total_particles(),
            categories: self
                .slots
                .iter()
                .map(|slot| CategoryStats {
                    name: slot.dataset.category().name(),
                    count: slot.dataset.len(),
                    mean_progress: slot.tracker.mean(),
                    mounted: slot.buffer.is_some(),
                })
                .collect(),
        }
    }
}

/// Update one category: advance fractions, compose transforms, write slots,
/// then flag the buffer dirty exactly once.
fn update_slot<R: Rng>(slot: &mut CategorySlot, target: f32, elapsed_secs: f32, rng: &mut R) {
    // Buffer not mounted yet: skip this category for the frame.
    let Some(buffer) = slot.buffer.as_mut() else {
        return;
    };
    let category = slot.dataset.category();
    for (i, record) in slot.dataset.records().iter().enumerate() {
        let progress = slot
            .tracker
            .advance(i, target, BASE_MORPH_RATE, MORPH_RATE_JITTER, rng);
        let position = record.scatter_pos.lerp(record.tree_pos, progress);
        let pose = anim::animate(category, record, progress, elapsed_secs, i);
        let transform = Mat4::from_scale_rotation_translation(pose.scale, pose.rotation, position);
        buffer.write(i, transform, record.color);
    }
    buffer.mark_dirty();
}
