//! Plain-value entry points for callers that hold a grid size, a numeric
//! direction code and a hole list, rather than the typed grille model.

use crate::core::message::MessageProcessor;
use crate::core::validator;
use crate::domain::model::{Grille, HoleBase, Position, RotationDirection};
use crate::utils::error::Result;

/// Converts raw `(row, col)` pairs to zero-based, range-checked positions.
pub fn holes_from_pairs(pairs: &[(i64, i64)], size: usize, base: HoleBase) -> Result<Vec<Position>> {
    pairs
        .iter()
        .map(|&(row, col)| base.to_position(row, col, size))
        .collect()
}

fn build_grille(size: usize, direction: u8, holes: &[(i64, i64)], base: HoleBase) -> Result<Grille> {
    let direction = RotationDirection::from_code(direction)?;
    Ok(Grille::new(size, direction, holes_from_pairs(holes, size, base)?))
}

pub fn validate_grille(size: usize, direction: u8, holes: &[(i64, i64)], base: HoleBase) -> Result<()> {
    let grille = build_grille(size, direction, holes, base)?;
    validator::validate(&grille.holes, grille.size, grille.direction)
}

/// Ciphertext length is `ceil(letters / N²) * N²`.
pub fn encrypt(
    size: usize,
    direction: u8,
    holes: &[(i64, i64)],
    base: HoleBase,
    plaintext: &str,
) -> Result<String> {
    let processor = MessageProcessor::new(build_grille(size, direction, holes, base)?)?;
    Ok(processor.encrypt(plaintext)?.text)
}

/// Padding inserted at encryption time is kept.
pub fn decrypt(
    size: usize,
    direction: u8,
    holes: &[(i64, i64)],
    base: HoleBase,
    ciphertext: &str,
) -> Result<String> {
    let processor = MessageProcessor::new(build_grille(size, direction, holes, base)?)?;
    Ok(processor.decrypt(ciphertext)?.text)
}
