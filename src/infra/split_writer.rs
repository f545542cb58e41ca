// ============================================================
// Layer 6 — Split Writer
// ============================================================
// Serializes one split to a text file, one record per line:
//
//   <word>;<token token token ...>\n
//
// No header row; input order is preserved exactly, so a fixed
// seed yields byte-identical files across runs. Any failure to
// create or write a file is fatal — a partially written dataset
// must never look like a finished one.
//
// The reader half parses such a file back into instances and is
// used by the `inspect` command and by the round-trip tests.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::instance::Instance;

/// Writes split files into one destination directory.
pub struct SplitWriter {
    /// The directory receiving train.csv, dev.csv and test.csv
    dir: PathBuf,
}

impl SplitWriter {
    /// Create a new SplitWriter, creating the directory if needed.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write one split to `<dir>/<name>.csv`, one instance per line.
    /// Returns the path of the written file.
    pub fn write_split(&self, name: &str, instances: &[Instance]) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.csv"));

        let file = File::create(&path)
            .with_context(|| format!("Cannot create split file '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        for instance in instances {
            writeln!(writer, "{}", instance.to_csv_line())
                .with_context(|| format!("Cannot write to '{}'", path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", path.display()))?;

        tracing::info!(
            "Wrote {} instances to '{}'",
            instances.len(),
            path.display()
        );
        Ok(path)
    }

}

/// Parse a previously written split file back into instances.
/// A line that does not match the record format is an error —
/// it means the file is not one of ours or has been damaged.
pub fn read_split(path: &Path) -> Result<Vec<Instance>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open split file '{}'", path.display()))?;
    let reader = BufReader::new(file);

    let mut instances = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Cannot read '{}'", path.display()))?;
        let instance = Instance::parse_csv_line(&line).with_context(|| {
            format!("Malformed record at {}:{}", path.display(), line_no + 1)
        })?;
        instances.push(instance);
    }

    Ok(instances)
}
