use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::shapes::ShapeId;
use crate::task::angles::ANGLE_CATALOG;
use crate::task::spec::{CombinationKey, TaskSpec};

/// Random draws attempted before falling back to the exhaustive scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Size of the unique key space: ordered pairs of distinct shapes times catalog angles.
pub const fn max_keys() -> usize {
    let n = ShapeId::ALL.len();
    n * (n - 1) * ANGLE_CATALOG.len()
}

/// Keys emitted so far by one sampler. Grows monotonically for the sampler's lifetime.
#[derive(Debug, Default)]
pub struct SamplerState {
    seen: HashSet<CombinationKey>,
    exhausted: bool,
}

impl SamplerState {
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, key: &CombinationKey) -> bool {
        self.seen.contains(key)
    }

    /// `true` once the key space has been used up and the one-time notice was emitted.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Produces puzzle instances whose `(shape_a, shape_c, angle)` keys are unique until the key
/// space runs out.
///
/// Sampling is two-tier: up to [`MAX_RANDOM_ATTEMPTS`] uniform draws, then a deterministic scan
/// in catalog order that always terminates within [`max_keys`] steps.
#[derive(Debug)]
pub struct TaskSampler<R = ChaCha8Rng> {
    rng: R,
    state: SamplerState,
}

impl TaskSampler<ChaCha8Rng> {
    /// Reproducible sampler: the same seed yields the same task sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> TaskSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            state: SamplerState::default(),
        }
    }

    pub fn state(&self) -> &SamplerState {
        &self.state
    }

    /// Draw the next puzzle. Never fails.
    ///
    /// # Panics
    ///
    /// Panics if the exhaustive scan finds no unused key while the bookkeeping says one must
    /// exist. That indicates a bug in the key-space computation, not a runtime condition.
    pub fn sample(&mut self) -> TaskSpec {
        let max = max_keys();

        if self.state.seen.len() < max {
            for _ in 0..MAX_RANDOM_ATTEMPTS {
                let key = self.draw_key();
                if self.state.seen.insert(key) {
                    return TaskSpec::rotation(key);
                }
            }

            tracing::debug!(
                seen = self.state.seen.len(),
                max,
                "random draws exhausted, scanning for an unused combination"
            );
            let Some(key) = self.first_unseen() else {
                panic!(
                    "no unused combination found with {} of {max} keys seen (bug)",
                    self.state.seen.len()
                );
            };
            self.state.seen.insert(key);
            return TaskSpec::rotation(key);
        }

        if !self.state.exhausted {
            self.state.exhausted = true;
            tracing::warn!(
                max,
                "generated all unique combinations; allowing duplicates for remaining tasks"
            );
        }
        TaskSpec::rotation(self.draw_key())
    }

    /// Uniform draw: two distinct shapes without replacement, one catalog angle.
    fn draw_key(&mut self) -> CombinationKey {
        let picks = rand::seq::index::sample(&mut self.rng, ShapeId::ALL.len(), 2);
        let angle = ANGLE_CATALOG[self.rng.gen_range(0..ANGLE_CATALOG.len())];
        CombinationKey {
            shape_a: ShapeId::ALL[picks.index(0)],
            shape_c: ShapeId::ALL[picks.index(1)],
            angle,
        }
    }

    /// First key in catalog order (shape_a, then shape_c, then angle) not yet emitted.
    fn first_unseen(&self) -> Option<CombinationKey> {
        ShapeId::ALL
            .into_iter()
            .flat_map(|shape_a| {
                ShapeId::ALL
                    .into_iter()
                    .filter(move |&shape_c| shape_c != shape_a)
                    .flat_map(move |shape_c| {
                        ANGLE_CATALOG.into_iter().map(move |angle| CombinationKey {
                            shape_a,
                            shape_c,
                            angle,
                        })
                    })
            })
            .find(|key| !self.state.seen.contains(key))
    }
}

/// Sampler shared between concurrent puzzle builders.
///
/// The mutex keeps at most one `sample()` in flight, so uniqueness holds across workers.
#[derive(Debug)]
pub struct SharedSampler<R = ChaCha8Rng> {
    inner: Mutex<TaskSampler<R>>,
}

impl<R: Rng> SharedSampler<R> {
    pub fn new(sampler: TaskSampler<R>) -> Self {
        Self {
            inner: Mutex::new(sampler),
        }
    }

    pub fn sample(&self) -> TaskSpec {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .sample()
    }

    /// Number of distinct keys emitted so far.
    pub fn emitted(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
            .len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
            .is_exhausted()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/sampler.rs"]
mod tests;
