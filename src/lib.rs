pub mod engine;
pub mod error;

use std::io::Write;
use std::path::Path;

use engine::{DISPLAY_LIMIT, Feed, load_records};

/// Input file read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "operations.json";

/// Loads the operations at `path` and writes the most recent ones to `out`.
/// Nothing is written when loading fails.
pub fn run<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    log::debug!("Loading operations from {path:?}");
    let records = load_records(path)?;
    log::debug!("Loaded {} records", records.len());

    let mut feed = Feed::from_records(&records);
    feed.sort_by_date_desc();

    log::debug!("Writing the latest {DISPLAY_LIMIT} operations");
    feed.write_latest(out, DISPLAY_LIMIT)?;
    out.flush()?;

    Ok(())
}
