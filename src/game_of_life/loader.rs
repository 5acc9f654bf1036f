//! Building the generation-0 world: random fill or a world file

use super::{CellState, Grid};
use crate::error::{FormatIssue, LoadError};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the initial world comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldSource {
    /// Every cell alive with probability 1/2; a seed makes the fill repeatable
    Random { seed: Option<u64> },
    /// A world file of `size` lines with `size` glyphs each
    File(PathBuf),
}

impl WorldSource {
    /// Build the initial grid of the given side length
    pub fn load(&self, size: usize) -> Result<Grid, LoadError> {
        match self {
            WorldSource::Random { seed: Some(seed) } => {
                info!(size, seed, "filling world from seeded random source");
                Ok(seeded_world(size, *seed))
            }
            WorldSource::Random { seed: None } => {
                info!(size, "filling world from thread random source");
                Ok(random_world(size, &mut rand::thread_rng()))
            }
            WorldSource::File(path) => load_world_from_file(path, size),
        }
    }
}

/// Fill a grid cell by cell, each independently alive with probability 1/2
pub fn random_world<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(size);
    for (row, col) in iproduct!(0..size, 0..size) {
        *grid.cell_mut(row, col) = CellState::from(rng.gen::<bool>());
    }
    grid
}

/// Deterministic random fill for a given seed
pub fn seeded_world(size: usize, seed: u64) -> Grid {
    random_world(size, &mut StdRng::seed_from_u64(seed))
}

/// Load a world file.
///
/// Format: exactly `size` lines, each holding at least `size` characters
/// from {'*', ' '}. Characters past column `size` and lines past line
/// `size` are ignored.
pub fn load_world_from_file<P: AsRef<Path>>(path: P, size: usize) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let unavailable = |source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    // Directories open fine on some platforms and only fail on the first read
    if file.metadata().map_err(unavailable)?.is_dir() {
        return Err(unavailable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }

    let grid = read_world(BufReader::new(file), size, path)?;
    info!(path = %path.display(), size, living = grid.living_count(), "loaded world file");
    Ok(grid)
}

/// Parse a world held in memory
pub fn parse_world(content: &str, size: usize) -> Result<Grid, LoadError> {
    read_world(content.as_bytes(), size, Path::new("<memory>"))
}

/// Read a world from any buffered source; `origin` names it in errors
pub fn read_world<R: BufRead>(mut reader: R, size: usize, origin: &Path) -> Result<Grid, LoadError> {
    let format_error = |issue: FormatIssue| LoadError::Format {
        path: origin.to_path_buf(),
        size,
        issue,
    };

    let unreadable = |source| LoadError::SourceUnreadable {
        path: origin.to_path_buf(),
        source,
    };

    // Room for a full row plus "\r\n"; longer lines are cut here and the
    // remainder is skipped once the row has been validated
    let limit = size + 2;
    let mut line = Vec::new();
    line.try_reserve(limit)?;

    let mut grid = Grid::new(size);
    for row in 0..size {
        line.clear();
        let read = (&mut reader)
            .take(limit as u64)
            .read_until(b'\n', &mut line)
            .map_err(unreadable)?;

        if read == 0 {
            return Err(format_error(FormatIssue::MissingLine {
                expected: size,
                found: row,
            }));
        }

        let content = strip_line_terminator(&line);
        if content.len() < size {
            return Err(format_error(FormatIssue::ShortLine {
                line: row + 1,
                length: content.len(),
                expected: size,
            }));
        }

        for (col, &byte) in content[..size].iter().enumerate() {
            let state = CellState::from_glyph(byte).ok_or_else(|| {
                format_error(FormatIssue::InvalidGlyph {
                    line: row + 1,
                    column: col + 1,
                    found: byte,
                })
            })?;
            *grid.cell_mut(row, col) = state;
        }

        if read == limit && !line.ends_with(b"\n") {
            reader.skip_until(b'\n').map_err(unreadable)?;
        }
    }

    debug!(origin = %origin.display(), size, "parsed world");
    Ok(grid)
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
