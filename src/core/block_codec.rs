//! Fills and reads a single N×N block through the four grille generations.
//!
//! Encoding writes the padded chunk through the holes of generation 0, then
//! 1, 2 and 3, each generation walked in row-major order; the block is then
//! read out row by row. Decoding loads the block row by row and reads the
//! same hole sequence back, so the two walks are exact inverses.

use crate::core::validator::ValidatedGrille;
use crate::domain::model::{Block, Position};
use crate::utils::error::{GrilleError, Result};

/// Encodes at most N² characters, right-padding with `pad` up to N².
pub fn encode_block(grille: &ValidatedGrille, chunk: &[char], pad: char) -> Result<Block> {
    let capacity = grille.block_len();
    if chunk.len() > capacity {
        return Err(GrilleError::ChunkTooLong {
            length: chunk.len(),
            capacity,
        });
    }

    let padded = chunk
        .iter()
        .copied()
        .chain(std::iter::repeat(pad))
        .take(capacity);
    let mut block = Block::filled(grille.size(), pad);
    for (pos, ch) in hole_sequence(grille).zip(padded) {
        block.set(pos, ch)?;
    }

    tracing::debug!(
        "Encoded block of {} chars ({} padding)",
        capacity,
        capacity - chunk.len()
    );
    Ok(block)
}

/// Recovers the characters of one ciphertext block, filler included.
///
/// Returns the recovered text together with the matrix as loaded.
pub fn decode_block(grille: &ValidatedGrille, block_text: &[char]) -> Result<(String, Block)> {
    let block = Block::from_row_major(grille.size(), block_text)?;
    let mut recovered = String::with_capacity(block_text.len());
    for pos in hole_sequence(grille) {
        let ch = block.get(pos).ok_or(GrilleError::InvalidHoleCoordinate {
            row: pos.row as i64,
            col: pos.col as i64,
            size: grille.size(),
        })?;
        recovered.push(ch);
    }
    tracing::debug!("Decoded block of {} chars", recovered.chars().count());
    Ok((recovered, block))
}

/// Every hole of every generation, in fill order.
fn hole_sequence(grille: &ValidatedGrille) -> impl Iterator<Item = Position> + '_ {
    grille.generations().iter().flat_map(|g| g.iter().copied())
}
