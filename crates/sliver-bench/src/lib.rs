//! Benchmark workloads for the Sliver view library.
//!
//! - [`grow_by_single_appends`]: `n` one-element appends from the absent view
//! - [`grow_by_chunks`]: appends of fixed-size chunks from the absent view
//! - [`reallocation_count`]: how many appends of a workload reallocate

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sliver::{GrowthPolicy, View};

/// Grow the absent view by appending `0..n` one element at a time.
pub fn grow_by_single_appends(n: u64, policy: &GrowthPolicy) -> View<u64> {
    let mut view = View::absent();
    for i in 0..n {
        view = view.append_with(policy, &[i]);
    }
    view
}

/// Grow the absent view by appending `chunks` copies of `chunk`.
pub fn grow_by_chunks(chunks: usize, chunk: &[u64], policy: &GrowthPolicy) -> View<u64> {
    let mut view = View::absent();
    for _ in 0..chunks {
        view = view.append_with(policy, chunk);
    }
    view
}

/// Number of reallocating appends when growing to `n` by single elements.
pub fn reallocation_count(n: u64, policy: &GrowthPolicy) -> usize {
    let mut view: View<u64> = View::absent();
    let mut count = 0;
    for i in 0..n {
        let next = view.append_with(policy, &[i]);
        if !next.shares_storage(&view) {
            count += 1;
        }
        view = next;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_appends_preserve_order() {
        let v = grow_by_single_appends(100, &GrowthPolicy::default());
        assert_eq!(v.to_vec(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn doubling_reallocates_logarithmically() {
        // New lengths at each reallocation: 1, 2, 5, 11, 23, 47, 95.
        assert_eq!(reallocation_count(100, &GrowthPolicy::default()), 7);
    }

    #[test]
    fn exact_fit_reallocates_every_time() {
        let policy = GrowthPolicy::with_factor(1).unwrap();
        assert_eq!(reallocation_count(20, &policy), 20);
    }

    #[test]
    fn chunked_growth_length() {
        let v = grow_by_chunks(10, &[1, 2, 3], &GrowthPolicy::default());
        assert_eq!(v.len(), 30);
    }
}
