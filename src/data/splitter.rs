// ============================================================
// Layer 4 — Train/Dev/Test Splitter
// ============================================================
// Randomly shuffles synsets and splits them into three sets:
//   - Training set:    used to fit the reverse-dictionary model
//   - Development set: used for tuning and early stopping
//   - Test set:        used exactly once, for the final numbers
//
// Why split along synsets and not along instances?
//   One synset fans out into one instance per lemma, all sharing
//   the same tokenized definition. If two lemmas of the same
//   synset landed in different sets, the test set would contain
//   descriptions seen verbatim during training. Splitting the
//   synsets first keeps the test data untainted. Two different
//   senses of the same word are distinct synsets and may still
//   land in different sets — that is intended.
//
// Why a seeded RNG instead of thread_rng?
//   The published dataset must be reproducible: the same seed,
//   fractions and WordNet copy must yield byte-identical files
//   on every machine.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom
// which is the standard unbiased shuffle algorithm.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// How the synset list is shuffled and cut into three sets.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    pub train_fraction: f64,
    pub dev_fraction:   f64,
    pub test_fraction:  f64,
    pub seed:           u64,
}

impl SplitConfig {
    pub fn new(train: f64, dev: f64, test: f64, seed: u64) -> Result<Self> {
        let cfg = Self {
            train_fraction: train,
            dev_fraction:   dev,
            test_fraction:  test,
            seed,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// The fractions must be valid proportions summing to 1.
    pub fn validate(&self) -> Result<()> {
        for (name, f) in [
            ("train", self.train_fraction),
            ("dev",   self.dev_fraction),
            ("test",  self.test_fraction),
        ] {
            ensure!(
                (0.0..=1.0).contains(&f),
                "{}_fraction must be between 0 and 1, got {}",
                name,
                f
            );
        }

        let sum = self.train_fraction + self.dev_fraction + self.test_fraction;
        ensure!(
            (sum - 1.0).abs() < 1e-9,
            "split fractions must sum to 1.0, got {}",
            sum
        );
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        // The 0.8/0.1/0.1 split and seed used for the published dataset
        Self {
            train_fraction: 0.8,
            dev_fraction:   0.1,
            test_fraction:  0.1,
            seed:           742382,
        }
    }
}

/// Shuffle `items` with a seeded RNG and cut into (train, dev, test).
///
/// Cut points are floor(n * train) and floor(n * (train + dev)),
/// so the three sets are always disjoint and jointly exhaustive.
///
/// # Example
/// ```
/// let (train, dev, test) = split_three_way(all_synsets, &SplitConfig::default());
/// ```
pub fn split_three_way<T>(mut items: Vec<T>, cfg: &SplitConfig) -> (Vec<T>, Vec<T>, Vec<T>) {
    // Fisher-Yates shuffle with a reproducible generator
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    items.shuffle(&mut rng);

    let total     = items.len();
    let train_end = ((total as f64) * cfg.train_fraction) as usize;
    let dev_end   = ((total as f64) * (cfg.train_fraction + cfg.dev_fraction)) as usize;

    // Clamp so rounding can never push a cut past the end
    let train_end = train_end.min(total);
    let dev_end   = dev_end.clamp(train_end, total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    let mut rest = items.split_off(train_end);
    let test     = rest.split_off(dev_end - train_end);

    tracing::debug!(
        "Synset split: {} train, {} dev, {} test",
        items.len(),
        rest.len(),
        test.len(),
    );

    (items, rest, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn default_cfg() -> SplitConfig {
        SplitConfig::default()
    }

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize>   = (0..100).collect();
        let (train, dev, test)  = split_three_way(items, &default_cfg());
        assert_eq!(train.len(), 80);
        assert_eq!(dev.len(),   10);
        assert_eq!(test.len(),  10);
    }

    #[test]
    fn test_disjoint_and_exhaustive() {
        // Every item appears in exactly one of the three sets
        let items: Vec<usize>  = (0..57).collect();
        let (train, dev, test) = split_three_way(items, &default_cfg());

        let mut all: Vec<usize> = train.iter().chain(&dev).chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let cfg = default_cfg();
        let a   = split_three_way((0..200).collect::<Vec<usize>>(), &cfg);
        let b   = split_three_way((0..200).collect::<Vec<usize>>(), &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let mut cfg_b = default_cfg();
        cfg_b.seed    = 1;
        let (train_a, _, _) = split_three_way((0..200).collect::<Vec<usize>>(), &default_cfg());
        let (train_b, _, _) = split_three_way((0..200).collect::<Vec<usize>>(), &cfg_b);
        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_empty_input() {
        let (train, dev, test) = split_three_way(Vec::<usize>::new(), &default_cfg());
        assert!(train.is_empty());
        assert!(dev.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_fractions_must_sum_to_one() {
        assert!(SplitConfig::new(0.8, 0.1, 0.2, 0).is_err());
        assert!(SplitConfig::new(0.8, 0.1, 0.1, 0).is_ok());
    }

    #[test]
    fn test_fractions_must_be_proportions() {
        assert!(SplitConfig::new(1.5, -0.25, -0.25, 0).is_err());
    }
}
