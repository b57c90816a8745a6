//! Row-range partitioning for the parallel interior update.

/// A half-open row interval `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    pub start: usize,
    pub end: usize,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, n_rows)` into contiguous batches, one per worker.
///
/// Only the `n_rows - 2` interior rows carry work, so the worker count is
/// clamped to that many (or 1 for degenerate heights) to keep every batch
/// non-empty. Rows left over from the integer division go into one extra
/// batch at the end. The result covers `[0, n_rows)` in ascending order with
/// no gaps and no overlaps; every row belongs to exactly one batch.
pub fn batch_ranges(n_rows: usize, n_workers: usize) -> Vec<Batch> {
    let interior = n_rows.saturating_sub(2);
    let n_workers = if n_workers >= interior || n_workers == 0 {
        interior.max(1)
    } else {
        n_workers
    };
    let batch_size = n_rows / n_workers;
    let mut batches: Vec<Batch> = (0..n_workers)
        .map(|i| Batch {
            start: i * batch_size,
            end: (i + 1) * batch_size,
        })
        .collect();
    if batch_size * n_workers != n_rows {
        batches.push(Batch {
            start: batch_size * n_workers,
            end: n_rows,
        });
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(batches: &[Batch], n_rows: usize) {
        assert_eq!(batches[0].start, 0);
        assert_eq!(batches[batches.len() - 1].end, n_rows);
        for pair in batches.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(batches.iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn single_worker_gets_everything() {
        let batches = batch_ranges(100, 1);
        assert_eq!(batches, vec![Batch { start: 0, end: 100 }]);
    }

    #[test]
    fn even_split_has_no_remainder_batch() {
        let batches = batch_ranges(100, 4);
        assert_eq!(batches.len(), 4);
        assert_covers(&batches, 100);
        assert!(batches.iter().all(|b| b.len() == 25));
    }

    #[test]
    fn remainder_rows_form_a_trailing_batch() {
        let batches = batch_ranges(103, 4);
        assert_eq!(batches.len(), 5);
        assert_covers(&batches, 103);
        assert_eq!(batches[4], Batch { start: 100, end: 103 });
    }

    #[test]
    fn worker_count_clamped_to_interior_rows() {
        // 5 rows have 3 interior rows; 8 workers collapse to 3.
        let batches = batch_ranges(5, 8);
        assert_covers(&batches, 5);
        assert!(batches.len() <= 4);
    }

    #[test]
    fn degenerate_height_yields_one_batch() {
        for n_rows in 1..=3 {
            let batches = batch_ranges(n_rows, 16);
            assert_eq!(batches, vec![Batch { start: 0, end: n_rows }]);
        }
    }
}
