//! Opt-in filler removal for decrypted text.
//!
//! A recovered message cannot tell padding apart from a plaintext that
//! really ended in the pad letter, so this is a heuristic and is never
//! applied by the processor itself. It only trims trailing pad characters
//! inside the final block, since earlier blocks were full and carry none.

/// Drops trailing `pad` characters from the last `block_len` characters of `text`.
pub fn strip_trailing_padding(text: &str, block_len: usize, pad: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    if block_len == 0 || chars.is_empty() {
        return text.to_string();
    }
    let last_block_start = (chars.len() - 1) / block_len * block_len;
    let mut end = chars.len();
    while end > last_block_start && chars[end - 1] == pad {
        end -= 1;
    }
    chars[..end].iter().collect()
}
