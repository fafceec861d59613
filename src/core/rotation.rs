//! Quarter-turn coordinate transforms.

use crate::domain::model::{Position, RotationDirection, GENERATIONS};

/// Position of `pos` after one 90° turn of an N×N grid.
///
/// Caller guarantees `pos.row < size && pos.col < size`.
pub fn rotate(pos: Position, size: usize, direction: RotationDirection) -> Position {
    let last = size - 1;
    match direction {
        RotationDirection::Clockwise => Position::new(pos.col, last - pos.row),
        RotationDirection::CounterClockwise => Position::new(last - pos.col, pos.row),
    }
}

pub fn rotate_all(holes: &[Position], size: usize, direction: RotationDirection) -> Vec<Position> {
    holes.iter().map(|&p| rotate(p, size, direction)).collect()
}

/// The hole set after 0, 1, 2 and 3 turns, in the caller's order.
pub fn generations(
    holes: &[Position],
    size: usize,
    direction: RotationDirection,
) -> [Vec<Position>; GENERATIONS] {
    let mut out: [Vec<Position>; GENERATIONS] = Default::default();
    let mut current = holes.to_vec();
    for slot in out.iter_mut() {
        let next = rotate_all(&current, size, direction);
        *slot = std::mem::replace(&mut current, next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_corners() {
        let n = 4;
        let cw = RotationDirection::Clockwise;
        assert_eq!(rotate(Position::new(0, 0), n, cw), Position::new(0, 3));
        assert_eq!(rotate(Position::new(0, 3), n, cw), Position::new(3, 3));
        assert_eq!(rotate(Position::new(3, 3), n, cw), Position::new(3, 0));
        assert_eq!(rotate(Position::new(3, 0), n, cw), Position::new(0, 0));
    }

    #[test]
    fn test_counterclockwise_corners() {
        let n = 4;
        let ccw = RotationDirection::CounterClockwise;
        assert_eq!(rotate(Position::new(0, 0), n, ccw), Position::new(3, 0));
        assert_eq!(rotate(Position::new(1, 2), n, ccw), Position::new(1, 1));
    }

    #[test]
    fn test_four_turns_is_identity() {
        for n in 1..=9 {
            for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
                for row in 0..n {
                    for col in 0..n {
                        let start = Position::new(row, col);
                        let mut p = start;
                        for _ in 0..GENERATIONS {
                            p = rotate(p, n, direction);
                        }
                        assert_eq!(p, start, "n={} dir={} start={}", n, direction, start);
                    }
                }
            }
        }
    }

    #[test]
    fn test_directions_are_inverse() {
        let n = 5;
        for row in 0..n {
            for col in 0..n {
                let p = Position::new(row, col);
                let turned = rotate(p, n, RotationDirection::Clockwise);
                assert_eq!(rotate(turned, n, RotationDirection::CounterClockwise), p);
            }
        }
    }

    #[test]
    fn test_generations_of_single_hole() {
        let gens = generations(&[Position::new(0, 0)], 2, RotationDirection::Clockwise);
        assert_eq!(gens[0], vec![Position::new(0, 0)]);
        assert_eq!(gens[1], vec![Position::new(0, 1)]);
        assert_eq!(gens[2], vec![Position::new(1, 1)]);
        assert_eq!(gens[3], vec![Position::new(1, 0)]);
    }
}
