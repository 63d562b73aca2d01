use std::io;
use std::path;

use tracing::{info, warn};

use crate::error::AppError;
use crate::random::UniformIndex;
use crate::widget::RosterWidget;

/// Summary of seeding a widget from a names file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Seeded {
    pub added : usize,
    /// `(line, field)` of each cell that was empty after trimming.
    pub skipped : Vec<(u64, usize)>,
}

/// Submits every cell of the CSV at `path` to the widget, in file order.
pub fn from_path<R : UniformIndex>(path : &path::Path, widget : &mut RosterWidget<R>) -> Result<Seeded, AppError> {
    let reader =
        csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let seeded = seed(reader, widget)?;
    info!(path = %path.display(), added = seeded.added, skipped = seeded.skipped.len(), "seeded roster");
    Ok(seeded)
}

/// Same as `from_path`, for any reader.
pub fn from_reader<Rd : io::Read, R : UniformIndex>(reader : Rd, widget : &mut RosterWidget<R>) -> Result<Seeded, AppError> {
    let reader =
        csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    seed(reader, widget)
}

fn seed<Rd : io::Read, R : UniformIndex>(mut reader : csv::Reader<Rd>, widget : &mut RosterWidget<R>) -> Result<Seeded, AppError> {
    let mut seeded = Seeded::default();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        for (field, cell) in record.iter().enumerate() {
            match widget.add_name(cell) {
                Ok(_) => seeded.added += 1,
                Err(_) => {
                    warn!(line, field, "skipping empty cell");
                    seeded.skipped.push((line, field));
                },
            }
        }
    }

    // Skipped cells are reported as warnings, never through the indicator.
    widget.clear_error();

    Ok(seeded)
}
