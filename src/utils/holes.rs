use crate::domain::model::{HoleBase, Position};
use crate::utils::error::{GrilleError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(-?\d+)[,.](-?\d+)$").expect("static hole pattern"))
}

/// Parses one `row,col` (or `row.col`) token into a zero-based position.
pub fn parse_hole_token(token: &str, size: usize, base: HoleBase) -> Result<Position> {
    let invalid = || GrilleError::InvalidHoleToken {
        token: token.to_string(),
    };
    let caps = token_pattern().captures(token.trim()).ok_or_else(invalid)?;
    let row: i64 = caps[1].parse().map_err(|_| invalid())?;
    let col: i64 = caps[2].parse().map_err(|_| invalid())?;
    base.to_position(row, col, size)
}

/// Parses a hole list such as `"1,1 1,2 2,1 2,2"` or `"1.1;1.2"`.
pub fn parse_holes(text: &str, size: usize, base: HoleBase) -> Result<Vec<Position>> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
        .map(|t| parse_hole_token(t, size, base))
        .collect()
}

/// Parses already-split tokens (e.g. a TOML string array).
pub fn parse_hole_list<T: AsRef<str>>(tokens: &[T], size: usize, base: HoleBase) -> Result<Vec<Position>> {
    tokens
        .iter()
        .map(|t| parse_hole_token(t.as_ref(), size, base))
        .collect()
}
