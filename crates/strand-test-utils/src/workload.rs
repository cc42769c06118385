//! Seeded allocation workloads.
//!
//! Uses a ChaCha8 RNG so a given seed always yields the same request
//! sequence on every platform.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strand_arena::{AllocOptions, AllocRequest};

/// Element sizes drawn by [`seeded_requests`]; each is also its alignment.
pub const ELEMENT_SIZES: [usize; 5] = [1, 2, 4, 8, 16];

/// Largest element count drawn by [`seeded_requests`].
pub const MAX_COUNT: usize = 32;

/// Build `n` requests with sizes from [`ELEMENT_SIZES`], counts in
/// `0..=MAX_COUNT`, and occasional over-alignment up to 64 bytes.
pub fn seeded_requests(seed: u64, n: usize, options: AllocOptions) -> Vec<AllocRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let size = ELEMENT_SIZES[rng.next_u32() as usize % ELEMENT_SIZES.len()];
            let count = rng.next_u32() as usize % (MAX_COUNT + 1);
            let req = AllocRequest::new(size, size, count, options);
            // One request in eight asks for a cache line.
            if rng.next_u32() % 8 == 0 {
                req.aligned_to(64)
            } else {
                req
            }
        })
        .collect()
}

/// Capacity that fits `requests` regardless of where the block lands:
/// every request's bytes plus its worst-case padding.
pub fn padded_upper_bound(requests: &[AllocRequest]) -> usize {
    requests
        .iter()
        .map(|r| r.byte_len().unwrap_or(usize::MAX) + r.align() - 1)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        let a = seeded_requests(7, 50, AllocOptions::new());
        let b = seeded_requests(7, 50, AllocOptions::new());
        assert_eq!(a, b);
    }

    #[test]
    fn requests_are_well_formed() {
        for req in seeded_requests(3, 200, AllocOptions::new()) {
            assert!(req.align().is_power_of_two());
            assert!(req.align() >= req.size());
            assert!(req.count() <= MAX_COUNT);
        }
    }

    #[test]
    fn upper_bound_covers_padding() {
        let reqs = vec![
            AllocRequest::new(1, 1, 3, AllocOptions::new()),
            AllocRequest::new(8, 8, 2, AllocOptions::new()),
        ];
        assert_eq!(padded_upper_bound(&reqs), 3 + 16 + 7);
    }
}
