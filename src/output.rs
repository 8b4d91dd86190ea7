//! Writes each point followed by its 1-indexed cluster label.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::points::PointStore;

/// Where the results ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Writes `x y label` lines for every point, in input order.
///
/// # Errors
/// Propagates write failures from `writer`.
pub fn write_labeled<W, L>(writer: &mut W, points: &PointStore, labels: L) -> io::Result<()>
where
    W: Write,
    L: IntoIterator<Item = usize>,
{
    for (point, label) in points.iter().zip(labels) {
        writeln!(writer, "{point} {label}")?;
    }
    writer.flush()
}

/// Writes the results to `path`, falling back to stdout when the file cannot
/// be created.
///
/// # Errors
/// Only write failures after a target has been opened are returned; a file
/// that cannot be created is not an error.
pub fn emit<L>(path: &Path, points: &PointStore, labels: L) -> io::Result<OutputTarget>
where
    L: IntoIterator<Item = usize>,
{
    match File::create(path) {
        Ok(file) => {
            write_labeled(&mut BufWriter::new(file), points, labels)?;
            info!(path = %path.display(), points = points.len(), "results written");
            Ok(OutputTarget::File(path.to_path_buf()))
        }
        Err(error) => {
            warn!(path = %path.display(), error = %error, "cannot create output file; using stdout");
            eprintln!("Error opening output file; printing to stdout.");
            let stdout = io::stdout();
            write_labeled(&mut BufWriter::new(stdout.lock()), points, labels)?;
            Ok(OutputTarget::Stdout)
        }
    }
}
