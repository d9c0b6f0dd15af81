use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const MEASURE_MS_SMALL: u64 = 120;
const MEASURE_MS_LARGE: u64 = 300;
const MEASURE_MS_XL: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Key distributions used by the pair-sort benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    FewDistinct,
    Descending,
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewDistinct,
    Distribution::Descending,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinct => "few_distinct",
            Self::Descending => "descending",
        }
    }
}

/// Scales sample count and measurement time with input size.
pub fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

/// Builds `size` keys following `dist`, with values `0..size` attached.
pub fn generate_pairs(dist: Distribution, size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(mix_seed(RNG_SEED ^ seed ^ size as u64));
    let keys = match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<f64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut keys: Vec<f64> = (0..size).map(|i| i as f64).collect();
            if size > 0 {
                for _ in 0..(size / 100).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    keys.swap(a, b);
                }
            }
            keys
        }
        Distribution::FewDistinct => (0..size).map(|_| rng.random_range(0..16_u32) as f64).collect(),
        Distribution::Descending => (0..size).rev().map(|i| i as f64).collect(),
    };
    let values = (0..size).map(|i| i as f64).collect();
    (keys, values)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_pairs_have_requested_shape() {
        for dist in DISTRIBUTIONS {
            for size in [0_usize, 1, 100, 1000] {
                let (keys, values) = generate_pairs(dist, size, 7);
                assert_eq!(keys.len(), size, "{}", dist.label());
                assert_eq!(values.len(), size, "{}", dist.label());
                assert!(values.iter().enumerate().all(|(i, &v)| v == i as f64));
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for dist in DISTRIBUTIONS {
            assert_eq!(generate_pairs(dist, 512, 3), generate_pairs(dist, 512, 3));
        }
    }

    #[test]
    fn descending_is_strictly_decreasing() {
        let (keys, _) = generate_pairs(Distribution::Descending, 64, 0);
        assert!(keys.windows(2).all(|w| w[0] > w[1]));
    }
}
