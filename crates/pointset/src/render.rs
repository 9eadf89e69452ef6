//! Layered ASCII diagram of a grid.
//!
//! Format (one block per z-layer, `z = 0..size`):
//!
//! ```text
//! Flow z=0:
//! Empty
//!
//! Flow z=1:
//! ....
//! .X..
//! ....
//! ....
//!
//! ```
//!
//! Row index is `y`, column index is `x`. Consumers parse this text, so it must
//! not change.

use crate::grid::{Cell, Grid3, Point};
use std::fmt;

const EMPTY_LAYER: &str = "Empty";

fn layer_header(z: usize) -> String {
    format!("Flow z={z}:")
}

/// Render all z-layers; the text ends with a single newline.
pub fn render_grid(grid: &Grid3) -> String {
    let n = grid.size();
    let mut lines: Vec<String> = Vec::with_capacity(n * (n + 2));
    for z in 0..n {
        lines.push(layer_header(z));
        if grid.layer_has_filled(z) {
            for y in 0..n {
                let row: String = (0..n)
                    .map(|x| grid.get(Point::new(x, y, z)).symbol())
                    .collect();
                lines.push(row);
            }
        } else {
            lines.push(EMPTY_LAYER.to_string());
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Why a diagram could not be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    NoLayers,
    BadHeader { line: usize, found: String },
    BadRow { line: usize, reason: String },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayers => write!(f, "diagram has no layers"),
            Self::BadHeader { line, found } => {
                write!(f, "line {line}: expected layer header, found {found:?}")
            }
            Self::BadRow { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl std::error::Error for DiagramError {}

/// Parse text produced by [`render_grid`] back into a grid.
///
/// The number of layers fixes the side length. Blank lines between layers are
/// optional.
pub fn parse_diagram(text: &str) -> Result<Grid3, DiagramError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end()))
        .filter(|(_, l)| !l.is_empty())
        .collect();
    let size = lines
        .iter()
        .filter(|(_, l)| l.starts_with("Flow z="))
        .count();
    if size == 0 {
        return Err(DiagramError::NoLayers);
    }

    let mut grid = Grid3::new(size);
    let mut rest = lines.into_iter().peekable();
    for z in 0..size {
        let (line, header) = rest.next().ok_or(DiagramError::NoLayers)?;
        if header != layer_header(z) {
            return Err(DiagramError::BadHeader {
                line,
                found: header.to_string(),
            });
        }
        if rest.peek().is_some_and(|(_, l)| *l == EMPTY_LAYER) {
            rest.next();
            continue;
        }
        for y in 0..size {
            let (line, row) = rest.next().ok_or(DiagramError::BadRow {
                line,
                reason: format!("layer z={z} ends after {y} rows"),
            })?;
            if row.chars().count() != size {
                return Err(DiagramError::BadRow {
                    line,
                    reason: format!("expected {size} cells, found {}", row.chars().count()),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Filled,
                    '.' => Cell::Empty,
                    other => {
                        return Err(DiagramError::BadRow {
                            line,
                            reason: format!("unexpected symbol {other:?}"),
                        })
                    }
                };
                grid.set(Point::new(x, y, z), cell);
            }
        }
    }
    if let Some((line, extra)) = rest.next() {
        return Err(DiagramError::BadHeader {
            line,
            found: extra.to_string(),
        });
    }
    Ok(grid)
}
