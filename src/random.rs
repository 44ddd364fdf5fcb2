//! Randomness helpers: inclusive integer sampling and Fisher–Yates shuffling.
//!
//! Both take the RNG explicitly so callers can pass `thread_rng()` for live
//! sheets or a seeded `StdRng` for reproducible ones.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// Panics if `min > max`; ranges are validated when the config is built.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// In-place Fisher–Yates: walks from the last index down to 1 and swaps each
/// slot with one drawn uniformly from `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_hits_both_bounds_and_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut saw_min, mut saw_max) = (false, false);
        for _ in 0..5_000 {
            let v = sample(&mut rng, 1, 11);
            assert!((1..=11).contains(&v), "{v} out of range");
            saw_min |= v == 1;
            saw_max |= v == 11;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn test_sample_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sample(&mut rng, 42, 42), 42);
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let original: Vec<u32> = (0..50).collect();
        let mut shuffled = original.clone();
        shuffle(&mut rng, &mut shuffled);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
        assert_ne!(shuffled, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut rng, &mut empty);
        assert!(empty.is_empty());

        let mut one = vec!['x'];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, vec!['x']);
    }
}
