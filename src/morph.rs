//! Morph state and per-particle interpolation progress.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which spatial configuration the scene is converging toward. Owned by the
/// surrounding application and passed down by value each frame; the engine
/// never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MorphState {
    Scattered,
    TreeShape,
}

impl MorphState {
    /// Interpolation target for this state.
    pub fn target_fraction(self) -> f32 {
        match self {
            Self::Scattered => 0.0,
            Self::TreeShape => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Scattered => Self::TreeShape,
            Self::TreeShape => Self::Scattered,
        }
    }
}

/// One interpolation fraction per particle, paired 1:1 with a dataset.
/// Initialized to 0 (fully scattered) and persisted across frames.
pub struct MorphTracker {
    progress: Vec<f32>,
}

impl MorphTracker {
    pub fn new(len: usize) -> Self {
        Self {
            progress: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    pub fn progress(&self) -> &[f32] {
        &self.progress
    }

    pub fn get(&self, index: usize) -> f32 {
        self.progress[index]
    }

    /// Advance one particle toward the target and return the new fraction.
    ///
    /// The rate is the base damping constant plus a jitter component redrawn
    /// every call, so convergence staggers per particle instead of moving in
    /// lockstep. With target in {0, 1} and rate in (0, 1) the step is
    /// monotone and the fraction stays inside [0, 1]; it approaches the
    /// target asymptotically and never overshoots.
    #[inline]
    pub fn advance<R: Rng>(
        &mut self,
        index: usize,
        target: f32,
        base_rate: f32,
        jitter: f32,
        rng: &mut R,
    ) -> f32 {
        let rate = base_rate + rng.random::<f32>() * jitter;
        let p = &mut self.progress[index];
        *p += (target - *p) * rate;
        *p
    }

    pub fn mean(&self) -> f32 {
        if self.progress.is_empty() {
            return 0.0;
        }
        self.progress.iter().sum::<f32>() / self.progress.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const BASE: f32 = 0.015;
    const JITTER: f32 = 0.01;

    #[test]
    fn test_target_fractions() {
        assert_eq!(MorphState::Scattered.target_fraction(), 0.0);
        assert_eq!(MorphState::TreeShape.target_fraction(), 1.0);
        assert_eq!(MorphState::Scattered.toggled(), MorphState::TreeShape);
    }

    #[test]
    fn test_starts_at_zero() {
        let tracker = MorphTracker::new(16);
        assert!(tracker.progress().iter().all(|&p| p == 0.0));
        assert_eq!(tracker.mean(), 0.0);
    }

    #[test]
    fn test_progress_bounded_under_flips() {
        let mut tracker = MorphTracker::new(4);
        let mut rng = SmallRng::seed_from_u64(21);
        let mut target = 1.0;
        for frame in 0..5000 {
            // Flip direction on an irregular cadence.
            if frame % 37 == 0 {
                target = 1.0 - target;
            }
            for i in 0..4 {
                let p = tracker.advance(i, target, BASE, JITTER, &mut rng);
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_converges_toward_held_target() {
        let mut tracker = MorphTracker::new(1);
        let mut rng = SmallRng::seed_from_u64(22);
        for _ in 0..2000 {
            tracker.advance(0, 1.0, BASE, JITTER, &mut rng);
        }
        assert!(tracker.get(0) > 0.999);
        for _ in 0..2000 {
            tracker.advance(0, 0.0, BASE, JITTER, &mut rng);
        }
        assert!(tracker.get(0) < 0.001);
    }

    #[test]
    fn test_no_jump_on_flip() {
        let mut tracker = MorphTracker::new(1);
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..100 {
            tracker.advance(0, 1.0, BASE, JITTER, &mut rng);
        }
        let before = tracker.get(0);
        let after = tracker.advance(0, 0.0, BASE, JITTER, &mut rng);
        // Direction reverses, but the step stays a small fraction of the gap.
        assert!(after < before);
        assert!((before - after) <= before * (BASE + JITTER) + 1e-6);
    }

    #[test]
    fn test_monotone_while_target_held() {
        let mut tracker = MorphTracker::new(1);
        let mut rng = SmallRng::seed_from_u64(24);
        let mut last = 0.0;
        for _ in 0..500 {
            let p = tracker.advance(0, 1.0, BASE, JITTER, &mut rng);
            assert!(p >= last);
            last = p;
        }
    }
}
