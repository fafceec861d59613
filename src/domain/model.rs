use crate::utils::error::{GrilleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Padding character used to fill the last plaintext chunk.
pub const PAD_CHAR: char = 'X';

/// Number of rotation generations per grille (0°, 90°, 180°, 270°).
pub const GENERATIONS: usize = 4;

/// Largest supported grid side.
pub const MAX_GRILLE_SIZE: usize = 256;

/// N² for a grid side in `1..=MAX_GRILLE_SIZE`.
pub fn cell_count(size: usize) -> Result<usize> {
    if size == 0 || size > MAX_GRILLE_SIZE {
        return Err(GrilleError::InvalidGrilleSize { size });
    }
    size.checked_mul(size)
        .ok_or(GrilleError::InvalidGrilleSize { size })
}

/// Zero-based grid cell. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Builds a position from signed input, rejecting anything outside `[0, size)`.
    pub fn checked(row: i64, col: i64, size: usize) -> Result<Self> {
        let in_range = |v: i64| v >= 0 && (v as u64) < size as u64;
        if !in_range(row) || !in_range(col) {
            return Err(GrilleError::InvalidHoleCoordinate { row, col, size });
        }
        Ok(Self::new(row as usize, col as usize))
    }

    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major offset into an N×N buffer.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// External numeric code: `1` clockwise, `0` counterclockwise.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Clockwise),
            0 => Ok(Self::CounterClockwise),
            other => Err(GrilleError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 0,
        }
    }
}

impl std::str::FromStr for RotationDirection {
    type Err = GrilleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "cw" | "clockwise" => Ok(Self::Clockwise),
            "0" | "ccw" | "counterclockwise" | "counter_clockwise" | "counter-clockwise" => {
                Ok(Self::CounterClockwise)
            }
            _ => Err(GrilleError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => write!(f, "clockwise"),
            Self::CounterClockwise => write!(f, "counterclockwise"),
        }
    }
}

/// Whether externally supplied hole coordinates start at 1 or 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoleBase {
    #[default]
    OneBased,
    ZeroBased,
}

impl HoleBase {
    pub fn offset(&self) -> i64 {
        match self {
            Self::OneBased => 1,
            Self::ZeroBased => 0,
        }
    }

    /// Shifts an external coordinate pair to zero-based and range-checks it.
    pub fn to_position(&self, row: i64, col: i64, size: usize) -> Result<Position> {
        let offset = self.offset();
        Position::checked(row.saturating_sub(offset), col.saturating_sub(offset), size)
    }
}

/// An N×N stencil. Coverage is not checked here; see `core::validator`.
///
/// Holes keep the caller's order and any repeats, so a grille that lists
/// the same hole twice is reported as overlapping rather than silently
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grille {
    pub size: usize,
    pub direction: RotationDirection,
    pub holes: Vec<Position>,
}

impl Grille {
    pub fn new(size: usize, direction: RotationDirection, holes: Vec<Position>) -> Self {
        Self {
            size,
            direction,
            holes,
        }
    }

    /// Characters per block (N²).
    pub fn checked_block_len(&self) -> Result<usize> {
        cell_count(self.size)
    }
}

/// One N×N block of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    size: usize,
    cells: Vec<char>,
}

impl Block {
    pub(crate) fn filled(size: usize, fill: char) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Loads `text` row by row. `text` must hold exactly N² characters.
    pub fn from_row_major(size: usize, text: &[char]) -> Result<Self> {
        let block_len = cell_count(size)?;
        if text.len() != block_len {
            return Err(GrilleError::CiphertextLengthMismatch {
                length: text.len(),
                block_len,
            });
        }
        Ok(Self {
            size,
            cells: text.to_vec(),
        })
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        if !pos.is_within(self.size) {
            return None;
        }
        self.cells.get(pos.index(self.size)).copied()
    }

    pub fn set(&mut self, pos: Position, ch: char) -> Result<()> {
        if !pos.is_within(self.size) {
            return Err(GrilleError::InvalidHoleCoordinate {
                row: pos.row as i64,
                col: pos.col as i64,
                size: self.size,
            });
        }
        let idx = pos.index(self.size);
        self.cells[idx] = ch;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Reads the block back out row 0 left-to-right, then row 1, and so on.
    pub fn to_row_major_string(&self) -> String {
        self.cells.iter().collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Result of transcoding a whole message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOutput {
    /// All blocks concatenated in chunk order.
    pub text: String,
    pub blocks: Vec<String>,
    pub matrices: Vec<Block>,
}

impl CipherOutput {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            blocks: Vec::new(),
            matrices: Vec::new(),
        }
    }

    pub fn push(&mut self, block_text: String, matrix: Block) {
        self.text.push_str(&block_text);
        self.blocks.push(block_text);
        self.matrices.push(matrix);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl std::str::FromStr for Mode {
    type Err = GrilleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "encrypt" | "enc" => Ok(Self::Encrypt),
            "0" | "decrypt" | "dec" => Ok(Self::Decrypt),
            _ => Err(GrilleError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: s.to_string(),
                reason: "Expected encrypt (1) or decrypt (0)".to_string(),
            }),
        }
    }
}
