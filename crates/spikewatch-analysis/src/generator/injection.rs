//! Spike injection: sampling positions without replacement and adding
//! magnitudes in place.

use rand::distributions::Distribution;
use rand::seq::index;
use rand::Rng;

/// Number of spikes for a stream of `length` points: `floor(length · rate)`,
/// never more than `length`.
pub fn spike_count(length: usize, anomaly_rate: f64) -> usize {
    let raw = (length as f64 * anomaly_rate).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(length)
    }
}

/// Choose `count` distinct positions uniformly from `0..length`.
///
/// Positions are returned in sampling order, not sorted; spikes are applied
/// in this order so the magnitude draws line up with the seed.
pub(crate) fn choose_positions<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    count: usize,
) -> Vec<usize> {
    debug_assert!(count <= length);
    index::sample(rng, length, count).into_vec()
}

/// Add one independent draw from `magnitude` to each chosen position.
pub(crate) fn apply_spikes<R, D>(values: &mut [f64], positions: &[usize], magnitude: &D, rng: &mut R)
where
    R: Rng + ?Sized,
    D: Distribution<f64>,
{
    for &position in positions {
        values[position] += magnitude.sample(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_spike_count_floors() {
        assert_eq!(spike_count(500, 0.05), 25);
        assert_eq!(spike_count(10, 0.19), 1);
        assert_eq!(spike_count(10, 0.0), 0);
        assert_eq!(spike_count(10, 1.0), 10);
        assert_eq!(spike_count(3, 0.5), 1);
        assert_eq!(spike_count(1, 0.99), 0);
    }

    #[test]
    fn test_positions_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut positions = choose_positions(&mut rng, 100, 40);
        assert_eq!(positions.len(), 40);
        assert!(positions.iter().all(|&p| p < 100));
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 40);
    }

    #[test]
    fn test_full_rate_covers_every_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut positions = choose_positions(&mut rng, 17, 17);
        positions.sort_unstable();
        assert_eq!(positions, (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_apply_spikes_is_additive() {
        struct Constant(f64);
        impl Distribution<f64> for Constant {
            fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
                self.0
            }
        }

        let mut values = vec![1.0, 2.0, 3.0, 4.0];
        let mut rng = StdRng::seed_from_u64(0);
        apply_spikes(&mut values, &[3, 1], &Constant(10.0), &mut rng);
        assert_eq!(values, vec![1.0, 12.0, 3.0, 14.0]);
    }
}
