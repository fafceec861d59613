use crate::core::block_codec::{decode_block, encode_block};
use crate::core::validator::ValidatedGrille;
use crate::domain::model::{Block, CipherOutput, Grille, PAD_CHAR};
use crate::utils::error::{GrilleError, Result};

/// Uppercases and keeps alphabetic characters only.
pub fn normalize_plaintext(text: &str) -> Vec<char> {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Ciphertext with all whitespace removed.
pub fn compact_ciphertext(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits whole messages into blocks and runs each through the block codec.
#[derive(Debug, Clone)]
pub struct MessageProcessor {
    grille: ValidatedGrille,
    pad: char,
}

impl MessageProcessor {
    /// Validates `grille` once; every later call reuses it read-only.
    pub fn new(grille: Grille) -> Result<Self> {
        Ok(Self::from_validated(grille.validate()?))
    }

    pub fn from_validated(grille: ValidatedGrille) -> Self {
        Self {
            grille,
            pad: PAD_CHAR,
        }
    }

    pub fn grille(&self) -> &ValidatedGrille {
        &self.grille
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    /// Normalized plaintext cut into N²-sized chunks; the last may be short.
    pub fn plaintext_chunks(&self, message: &str) -> Vec<Vec<char>> {
        normalize_plaintext(message)
            .chunks(self.grille.block_len())
            .map(<[char]>::to_vec)
            .collect()
    }

    /// Whitespace-free ciphertext cut into exact N²-sized blocks.
    pub fn ciphertext_blocks(&self, ciphertext: &str) -> Result<Vec<Vec<char>>> {
        let compact = compact_ciphertext(ciphertext);
        let block_len = self.grille.block_len();
        if compact.len() % block_len != 0 {
            return Err(GrilleError::CiphertextLengthMismatch {
                length: compact.len(),
                block_len,
            });
        }
        Ok(compact.chunks(block_len).map(<[char]>::to_vec).collect())
    }

    pub fn encode_chunk(&self, chunk: &[char]) -> Result<(String, Block)> {
        let block = encode_block(&self.grille, chunk, self.pad)?;
        Ok((block.to_row_major_string(), block))
    }

    pub fn decode_chunk(&self, block_text: &[char]) -> Result<(String, Block)> {
        decode_block(&self.grille, block_text)
    }

    pub fn encrypt(&self, message: &str) -> Result<CipherOutput> {
        let chunks = self.plaintext_chunks(message);
        tracing::info!("Encrypting {} block(s)", chunks.len());
        let mut output = CipherOutput::empty();
        for chunk in &chunks {
            let (text, matrix) = self.encode_chunk(chunk)?;
            output.push(text, matrix);
        }
        Ok(output)
    }

    /// Recovered text keeps the filler inserted at encryption time.
    pub fn decrypt(&self, ciphertext: &str) -> Result<CipherOutput> {
        let blocks = self.ciphertext_blocks(ciphertext)?;
        tracing::info!("Decrypting {} block(s)", blocks.len());
        let mut output = CipherOutput::empty();
        for block in &blocks {
            let (text, matrix) = self.decode_chunk(block)?;
            output.push(text, matrix);
        }
        Ok(output)
    }
}
