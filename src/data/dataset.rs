use serde::{Deserialize, Serialize};

use crate::domain::instance::Instance;

/// The names of the three splits, in the order they are written.
pub const SPLIT_NAMES: [&str; 3] = ["train", "dev", "test"];

/// The finished dataset: one instance list per split, ready to be
/// consumed in memory or serialized to the split files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSplits {
    pub train: Vec<Instance>,
    pub dev:   Vec<Instance>,
    pub test:  Vec<Instance>,
}

impl DatasetSplits {
    pub fn new(train: Vec<Instance>, dev: Vec<Instance>, test: Vec<Instance>) -> Self {
        Self { train, dev, test }
    }

    pub fn total_instances(&self) -> usize {
        self.train.len() + self.dev.len() + self.test.len()
    }

    /// The splits paired with their file-stem names, in write order.
    pub fn iter_named(&self) -> [(&'static str, &[Instance]); 3] {
        [
            ("train", self.train.as_slice()),
            ("dev",   self.dev.as_slice()),
            ("test",  self.test.as_slice()),
        ]
    }
}
