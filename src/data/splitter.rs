// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Randomly shuffles the encoded rows and partitions them:
//
//   1. test rows are taken from the full set
//      (count = round(total * test_fraction))
//   2. validation rows are then taken from the REMAINING
//      train rows (count = round(train_len * validation_fraction))
//
// So with 100 rows, test=0.33, validation=0.33:
//   test = 33, validation = round(67 * 0.33) = 22, train = 45.
//
// Rounding rule: f64::round on the fraction. Every row lands in
// exactly one partition — train + valid + test == total, always.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom. The RNG
// is injected by the caller: a fixed seed gives a reproducible
// split (used by tests), no seed gives a fresh one per run.
// Sampling is uniform — class balance across splits is NOT
// guaranteed (no stratification).

use rand::seq::SliceRandom;
use rand::Rng;

/// The partitions produced by a split. `valid` is None when no
/// validation fraction was requested.
#[derive(Debug)]
pub struct SplitSets<T> {
    pub train: Vec<T>,
    pub valid: Option<Vec<T>>,
    pub test: Vec<T>,
}

/// Shuffle `rows` and partition into train/validation/test.
///
/// Generic over the row type so tests can split plain integers.
pub fn split_patterns<T, R: Rng>(
    mut rows: Vec<T>,
    test_fraction: f64,
    validation_fraction: f64,
    rng: &mut R,
) -> SplitSets<T> {
    rows.shuffle(rng);

    let total  = rows.len();
    let test_n = ((total as f64) * test_fraction).round() as usize;
    let test_n = test_n.min(total);

    // split_off(n) removes elements [n..] and returns them
    let test = rows.split_off(total - test_n);

    let valid = if validation_fraction > 0.0 {
        let train_len = rows.len();
        let valid_n   = ((train_len as f64) * validation_fraction).round() as usize;
        let valid_n   = valid_n.min(train_len);
        Some(rows.split_off(train_len - valid_n))
    } else {
        None
    };

    tracing::debug!(
        "Split: {} train, {} validation, {} test",
        rows.len(),
        valid.as_ref().map_or(0, Vec::len),
        test.len(),
    );

    SplitSets {
        train: rows,
        valid,
        test,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes_without_validation() {
        let rows: Vec<usize> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let sets = split_patterns(rows, 0.3, 0.0, &mut rng);
        assert_eq!(sets.test.len(),  30);
        assert_eq!(sets.train.len(), 70);
        assert!(sets.valid.is_none());
    }

    #[test]
    fn test_validation_taken_from_reduced_train_set() {
        let rows: Vec<usize> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let sets  = split_patterns(rows, 0.33, 0.33, &mut rng);
        let valid = sets.valid.as_ref().unwrap();

        assert_eq!(sets.test.len(), 33);
        // round(67 * 0.33) = 22
        assert_eq!(valid.len(),     22);
        assert_eq!(sets.train.len(), 45);
    }

    #[test]
    fn test_no_row_duplicated_or_dropped() {
        let rows: Vec<usize> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let sets = split_patterns(rows, 0.33, 0.33, &mut rng);

        let mut all: Vec<usize> = sets.train.clone();
        all.extend(sets.valid.clone().unwrap());
        all.extend(sets.test.clone());
        assert_eq!(all.len(), 100);

        let unique: HashSet<usize> = all.into_iter().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn test_same_seed_gives_same_partition() {
        let rows: Vec<usize> = (0..50).collect();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = split_patterns(rows.clone(), 0.4, 0.25, &mut rng_a);
        let b = split_patterns(rows, 0.4, 0.25, &mut rng_b);

        assert_eq!(a.train, b.train);
        assert_eq!(a.valid, b.valid);
        assert_eq!(a.test,  b.test);
    }

    #[test]
    fn test_empty_dataset() {
        let rows: Vec<usize> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let sets = split_patterns(rows, 0.33, 0.33, &mut rng);
        assert!(sets.train.is_empty());
        assert!(sets.valid.unwrap().is_empty());
        assert!(sets.test.is_empty());
    }

    #[test]
    fn test_full_test_fraction() {
        let rows: Vec<usize> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let sets = split_patterns(rows, 1.0, 0.0, &mut rng);
        assert!(sets.train.is_empty());
        assert_eq!(sets.test.len(), 10);
    }
}
