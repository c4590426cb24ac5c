use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0xB0A5_2026;

/// Criterion runtime presets shared by every benchmark in the workspace,
/// keyed by how long a single iteration is expected to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimePreset {
    Small,
    Medium,
    Large,
}

impl RuntimePreset {
    /// Preset for one input size: cheap runs get tighter timing windows.
    pub fn for_input_len(len: usize) -> Self {
        if len <= 4_096 {
            Self::Small
        } else if len <= 65_536 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        let (samples, warm_up_ms, measure_ms) = match self {
            Self::Small => (15, 100, 200),
            Self::Medium => (15, 500, 1_000),
            Self::Large => (10, 800, 1_500),
        };
        group.sample_size(samples);
        group.warm_up_time(Duration::from_millis(warm_up_ms));
        group.measurement_time(Duration::from_millis(measure_ms));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform non-negative heights in `[0, max]`, the input shape of the
/// terrain and histogram benchmarks.
pub fn random_heights<R: Rng + ?Sized>(rng: &mut R, n: usize, max: u64) -> Vec<u64> {
    (0..n).map(|_| rng.random_range(0..=max)).collect()
}

/// Uniform signed values, the input shape of the subarray-minimum and
/// sliding-window benchmarks.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: std::ops::RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}
