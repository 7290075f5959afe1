//! Board coordinates in human notation: column letter, then row digit.
//!
//! `a`-`h` name columns 0-7 and `1`-`8` name rows 0-7, so `e3` is row 2,
//! column 4.

use crate::board::{Pos, BOARD_SIZE};
use crate::error::{GameError, Result};

pub fn to_notation(pos: Pos) -> String {
    format!("{}{}", (b'a' + pos.col) as char, pos.row + 1)
}

/// Longest row number accepted, so `a10` reports out of bounds
const MAX_ROW_DIGITS: usize = 2;

/// Parse a move such as `e3` or `E3`, surrounding whitespace ignored
pub fn parse(text: &str) -> Option<Result<Pos>> {
    let mut chars = text.trim().chars();
    let letter = chars.next()?.to_ascii_lowercase();
    let digits = chars.as_str();
    if !letter.is_ascii_alphabetic()
        || digits.is_empty()
        || digits.len() > MAX_ROW_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let row: i32 = digits.parse().ok()?;
    let col = letter as i32 - 'a' as i32;
    Some(Pos::try_new(row - 1, col))
}

/// Column label for the board frame
pub fn column_label(col: usize) -> char {
    debug_assert!(col < BOARD_SIZE);
    (b'a' + col as u8) as char
}

/// Human-readable error for a notation string
pub fn parse_error(text: &str, err: Option<&GameError>) -> String {
    match err {
        Some(err) => format!("'{}': {err}", text.trim()),
        None => format!("'{}' is not a move, expected e.g. d3", text.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_notation() {
        assert_eq!(to_notation(Pos::new(2, 4)), "e3");
        assert_eq!(to_notation(Pos::new(0, 0)), "a1");
        assert_eq!(to_notation(Pos::new(7, 7)), "h8");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("e3"), Some(Ok(Pos::new(2, 4))));
        assert_eq!(parse(" D6 "), Some(Ok(Pos::new(5, 3))));
        assert_eq!(parse("a1"), Some(Ok(Pos::new(0, 0))));
    }

    #[test]
    fn test_parse_out_of_bounds() {
        assert_eq!(parse("i1"), Some(Err(GameError::OutOfBounds { row: 0, col: 8 })));
        assert_eq!(parse("a9"), Some(Err(GameError::OutOfBounds { row: 8, col: 0 })));
        assert_eq!(parse("a0"), Some(Err(GameError::OutOfBounds { row: -1, col: 0 })));
        assert_eq!(parse("b10"), Some(Err(GameError::OutOfBounds { row: 9, col: 1 })));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("e"), None);
        assert_eq!(parse("3e"), None);
        assert_eq!(parse("ex"), None);
        assert_eq!(parse("a-2147483648"), None);
        assert_eq!(parse("a+3"), None);
        assert_eq!(parse("a123"), None);
    }

    #[test]
    fn test_round_trip_all_cells() {
        for pos in Pos::all() {
            assert_eq!(parse(&to_notation(pos)), Some(Ok(pos)));
        }
    }
}
