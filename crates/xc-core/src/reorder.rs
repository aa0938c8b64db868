//! Manual reordering of ranked runners.
//!
//! A judge can move a runner one position up or down to correct a photo
//! finish or a scoring mistake. Only the order changes; places and team
//! scores are re-derived by the caller from the new order, never by
//! re-sorting on time.

use xc_model::{Result, ScoringError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward place 1.
    Up,
    Down,
}

/// Swaps the row at `index` with its neighbour in `direction`.
///
/// Returns `false` without changing anything when the row is already at the
/// boundary it would move past.
pub fn swap_adjacent<T>(rows: &mut [T], index: usize, direction: Direction) -> Result<bool> {
    if index >= rows.len() {
        return Err(ScoringError::RowOutOfRange {
            index,
            len: rows.len(),
        });
    }
    let other = match direction {
        Direction::Up if index == 0 => return Ok(false),
        Direction::Up => index - 1,
        Direction::Down if index + 1 == rows.len() => return Ok(false),
        Direction::Down => index + 1,
    };
    rows.swap(index, other);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_with_neighbours() {
        let mut rows = vec!['a', 'b', 'c'];
        assert!(swap_adjacent(&mut rows, 1, Direction::Up).unwrap());
        assert_eq!(rows, vec!['b', 'a', 'c']);
        assert!(swap_adjacent(&mut rows, 1, Direction::Down).unwrap());
        assert_eq!(rows, vec!['b', 'c', 'a']);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut rows = vec!['a', 'b'];
        assert!(!swap_adjacent(&mut rows, 0, Direction::Up).unwrap());
        assert!(!swap_adjacent(&mut rows, 1, Direction::Down).unwrap());
        assert_eq!(rows, vec!['a', 'b']);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut rows = vec!['a'];
        assert_eq!(
            swap_adjacent(&mut rows, 3, Direction::Up).unwrap_err(),
            ScoringError::RowOutOfRange { index: 3, len: 1 }
        );
        let mut empty: Vec<char> = Vec::new();
        assert!(swap_adjacent(&mut empty, 0, Direction::Down).is_err());
    }
}
