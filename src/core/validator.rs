//! Coverage check: the four generations of a grille must visit every cell
//! of the grid exactly once.

use crate::core::rotation;
use crate::domain::model::{cell_count, Grille, Position, RotationDirection, GENERATIONS};
use crate::utils::error::{GrilleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the sample positions carried in a report.
pub const SAMPLE_LIMIT: usize = 10;

/// Structured diagnostic for a grille that fails the coverage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// N² for the grid being checked.
    pub expected_cells: usize,
    /// Position-occurrences across all four generations, repeats included.
    pub visited_count: usize,
    /// Distinct cells visited more than once.
    pub duplicate_count: usize,
    /// Cells never visited.
    pub missing_count: usize,
    /// First duplicates in row-major order.
    pub duplicates: Vec<Position>,
    /// First missing cells in row-major order.
    pub missing: Vec<Position>,
}

impl CoverageReport {
    /// Total visits differ from the number of cells.
    pub fn count_mismatch(&self) -> bool {
        self.visited_count != self.expected_cells
    }

    pub fn has_overlap(&self) -> bool {
        self.duplicate_count > 0
    }

    pub fn has_gaps(&self) -> bool {
        self.missing_count > 0
    }

    pub fn is_exact_partition(&self) -> bool {
        !self.count_mismatch() && !self.has_overlap() && !self.has_gaps()
    }
}

fn join_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.count_mismatch() {
            parts.push(format!(
                "total visited positions through 4 rotations = {} != {}",
                self.visited_count, self.expected_cells
            ));
        }
        if self.has_overlap() {
            parts.push(format!(
                "{} cell(s) visited more than once, e.g. [{}]",
                self.duplicate_count,
                join_positions(&self.duplicates)
            ));
        }
        if self.has_gaps() {
            parts.push(format!(
                "{} cell(s) never visited, e.g. [{}]",
                self.missing_count,
                join_positions(&self.missing)
            ));
        }
        write!(f, "{}", parts.join("; "))
    }
}

/// Tallies how often each cell is visited by the four generations.
pub fn coverage(holes: &[Position], size: usize, direction: RotationDirection) -> Result<CoverageReport> {
    let cells = cell_count(size)?;
    if let Some(bad) = holes.iter().find(|p| !p.is_within(size)) {
        return Err(GrilleError::InvalidHoleCoordinate {
            row: bad.row as i64,
            col: bad.col as i64,
            size,
        });
    }

    let mut visits = vec![0usize; cells];
    let mut visited_count = 0;
    for generation in rotation::generations(holes, size, direction).iter() {
        for pos in generation {
            visits[pos.index(size)] += 1;
            visited_count += 1;
        }
    }

    let cell = |idx: usize| Position::new(idx / size, idx % size);
    let duplicates: Vec<Position> = visits
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 1)
        .map(|(idx, _)| cell(idx))
        .collect();
    let missing: Vec<Position> = visits
        .iter()
        .enumerate()
        .filter(|(_, n)| **n == 0)
        .map(|(idx, _)| cell(idx))
        .collect();

    Ok(CoverageReport {
        expected_cells: cells,
        visited_count,
        duplicate_count: duplicates.len(),
        missing_count: missing.len(),
        duplicates: duplicates.into_iter().take(SAMPLE_LIMIT).collect(),
        missing: missing.into_iter().take(SAMPLE_LIMIT).collect(),
    })
}

pub fn validate(holes: &[Position], size: usize, direction: RotationDirection) -> Result<()> {
    let report = coverage(holes, size, direction)?;
    if report.is_exact_partition() {
        Ok(())
    } else {
        tracing::warn!(
            "Grille {}x{} ({}) rejected: {}",
            size,
            size,
            direction,
            report
        );
        Err(GrilleError::InvalidGrilleCoverage(report))
    }
}

/// A grille that passed [`validate`]. The only input the block codec accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGrille {
    grille: Grille,
    block_len: usize,
    generations: [Vec<Position>; GENERATIONS],
}

impl ValidatedGrille {
    pub fn grille(&self) -> &Grille {
        &self.grille
    }

    pub fn size(&self) -> usize {
        self.grille.size
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Hole positions of generation `0..4`, sorted row-major.
    pub fn generations(&self) -> &[Vec<Position>; GENERATIONS] {
        &self.generations
    }
}

impl Grille {
    pub fn validate(self) -> Result<ValidatedGrille> {
        validate(&self.holes, self.size, self.direction)?;
        let block_len = self.checked_block_len()?;
        let mut generations = rotation::generations(&self.holes, self.size, self.direction);
        for generation in generations.iter_mut() {
            generation.sort();
        }
        tracing::debug!(
            "Grille {}x{} ({}) validated with {} holes",
            self.size,
            self.size,
            self.direction,
            self.holes.len()
        );
        Ok(ValidatedGrille {
            grille: self,
            block_len,
            generations,
        })
    }
}
