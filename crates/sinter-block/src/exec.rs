//! Elementwise execution backends.
//!
//! Per-unit work in the update kernel is embarrassingly data-parallel:
//! unit `i` reads only unit-`i` inputs plus globally-immutable curve
//! banks and writes only unit-`i` outputs. The entry points here map a
//! kernel over all units either sequentially or across scoped threads,
//! with bitwise-identical results — the per-unit arithmetic is the
//! same and writes are disjoint row chunks, so no ordering or locking
//! is involved.
//!
//! Nothing here blocks, retries, or suspends; a kernel either runs for
//! every assigned unit or panics the step.

use std::num::NonZeroUsize;

/// Execution backend for elementwise kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Run on the calling thread.
    Sequential,
    /// Partition units into contiguous ranges across scoped threads.
    ///
    /// This is also the dispatch path for device-resident blocks: the
    /// lanes of the accelerator are modelled as host threads.
    Threaded {
        /// Number of worker threads. Clamped to at least 1.
        threads: usize,
    },
}

impl Backend {
    /// Threaded backend sized to the machine's available parallelism.
    pub fn threaded() -> Self {
        Self::Threaded {
            threads: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }

    fn parts(self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Threaded { threads } => threads.max(1),
        }
    }
}

/// Row counts per partition: as even as possible, summing to `n_rows`.
fn chunk_rows(n_rows: usize, parts: usize) -> Vec<usize> {
    let base = n_rows / parts;
    let rem = n_rows % parts;
    (0..parts)
        .map(|p| if p < rem { base + 1 } else { base })
        .collect()
}

/// Apply `f` to every row of a flat `(n_rows, width)` slice.
///
/// Each invocation receives the row index and exclusive access to that
/// row's `width` elements.
///
/// # Panics
///
/// Panics if `width` is zero or does not divide `data.len()`.
pub fn for_each_row<F>(backend: Backend, data: &mut [f64], width: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Sync,
{
    assert!(width > 0, "row width must be positive");
    assert_eq!(data.len() % width, 0, "slice length not a multiple of width");
    let n_rows = data.len() / width;

    match backend {
        Backend::Sequential => {
            for (i, row) in data.chunks_mut(width).enumerate() {
                f(i, row);
            }
        }
        Backend::Threaded { .. } => {
            let parts = backend.parts();
            std::thread::scope(|scope| {
                let mut rest = data;
                let mut start = 0;
                for rows in chunk_rows(n_rows, parts) {
                    if rows == 0 {
                        continue;
                    }
                    let (head, tail) = rest.split_at_mut(rows * width);
                    rest = tail;
                    let f = &f;
                    scope.spawn(move || {
                        for (k, row) in head.chunks_mut(width).enumerate() {
                            f(start + k, row);
                        }
                    });
                    start += rows;
                }
            });
        }
    }
}

/// Apply `f` to corresponding rows of two flat slices.
///
/// The slices must describe the same number of rows; `f` receives the
/// row index and exclusive access to both rows. This is the update
/// kernel's shape: one phase-fraction row and one property-value row
/// per unit.
///
/// # Panics
///
/// Panics if a width is zero, does not divide its slice, or the row
/// counts disagree.
pub fn for_each_row_pair<F>(
    backend: Backend,
    a: &mut [f64],
    width_a: usize,
    b: &mut [f64],
    width_b: usize,
    f: F,
) where
    F: Fn(usize, &mut [f64], &mut [f64]) + Sync,
{
    assert!(width_a > 0 && width_b > 0, "row widths must be positive");
    assert_eq!(a.len() % width_a, 0, "first slice length not a multiple of width");
    assert_eq!(b.len() % width_b, 0, "second slice length not a multiple of width");
    let n_rows = a.len() / width_a;
    assert_eq!(
        n_rows,
        b.len() / width_b,
        "row counts disagree between slices"
    );

    match backend {
        Backend::Sequential => {
            for (i, (row_a, row_b)) in a
                .chunks_mut(width_a)
                .zip(b.chunks_mut(width_b))
                .enumerate()
            {
                f(i, row_a, row_b);
            }
        }
        Backend::Threaded { .. } => {
            let parts = backend.parts();
            std::thread::scope(|scope| {
                let mut rest_a = a;
                let mut rest_b = b;
                let mut start = 0;
                for rows in chunk_rows(n_rows, parts) {
                    if rows == 0 {
                        continue;
                    }
                    let (head_a, tail_a) = rest_a.split_at_mut(rows * width_a);
                    let (head_b, tail_b) = rest_b.split_at_mut(rows * width_b);
                    rest_a = tail_a;
                    rest_b = tail_b;
                    let f = &f;
                    scope.spawn(move || {
                        for (k, (row_a, row_b)) in head_a
                            .chunks_mut(width_a)
                            .zip(head_b.chunks_mut(width_b))
                            .enumerate()
                        {
                            f(start + k, row_a, row_b);
                        }
                    });
                    start += rows;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_cover_all_rows() {
        for n in [0, 1, 7, 64, 1000] {
            for parts in [1, 2, 3, 8] {
                let chunks = chunk_rows(n, parts);
                assert_eq!(chunks.len(), parts);
                assert_eq!(chunks.iter().sum::<usize>(), n);
            }
        }
    }

    #[test]
    fn row_kernel_receives_correct_rows() {
        let mut data = vec![0.0; 10 * 3];
        for_each_row(Backend::Threaded { threads: 3 }, &mut data, 3, |i, row| {
            for v in row.iter_mut() {
                *v = i as f64;
            }
        });
        for (i, row) in data.chunks(3).enumerate() {
            assert!(row.iter().all(|&v| v == i as f64));
        }
    }

    #[test]
    fn threaded_matches_sequential() {
        let width_a = 3;
        let width_b = 5;
        let n = 97;

        let kernel = |i: usize, row_a: &mut [f64], row_b: &mut [f64]| {
            let t = i as f64 * 0.37;
            for (k, v) in row_a.iter_mut().enumerate() {
                *v = (t + k as f64).sin();
            }
            for (k, v) in row_b.iter_mut().enumerate() {
                *v = t.mul_add(k as f64, 1.0);
            }
        };

        let mut seq_a = vec![0.0; n * width_a];
        let mut seq_b = vec![0.0; n * width_b];
        for_each_row_pair(Backend::Sequential, &mut seq_a, width_a, &mut seq_b, width_b, kernel);

        let mut par_a = vec![0.0; n * width_a];
        let mut par_b = vec![0.0; n * width_b];
        for_each_row_pair(
            Backend::Threaded { threads: 7 },
            &mut par_a,
            width_a,
            &mut par_b,
            width_b,
            kernel,
        );

        assert_eq!(seq_a, par_a);
        assert_eq!(seq_b, par_b);
    }

    #[test]
    #[should_panic(expected = "row counts disagree")]
    fn mismatched_row_counts_panic() {
        let mut a = vec![0.0; 6];
        let mut b = vec![0.0; 9];
        for_each_row_pair(Backend::Sequential, &mut a, 3, &mut b, 3, |_, _, _| {});
    }

    #[test]
    fn zero_rows_is_a_no_op() {
        let mut a: Vec<f64> = Vec::new();
        for_each_row(Backend::Threaded { threads: 4 }, &mut a, 3, |_, _| {
            panic!("kernel must not run");
        });
    }
}
