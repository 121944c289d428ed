//! World coordinates and the distance metric used to rank targets.
//!
//! Distance is the floor of the 3-D Euclidean distance. It is only ever
//! used as a sort key, so it is computed with an exact integer square
//! root: two positions that are `√k` apart must always compare the same
//! way regardless of floating-point rounding.

use serde::{Deserialize, Serialize};

/// A point in the game world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Saturates at `u128::MAX`; any pair that far apart is already beyond
    /// the range of [`distance`].
    #[must_use]
    pub fn distance_squared(self, other: Position) -> u128 {
        let axis = |a: i64, b: i64| {
            let d = (i128::from(a) - i128::from(b)).unsigned_abs();
            d * d
        };
        axis(self.x, other.x)
            .saturating_add(axis(self.y, other.y))
            .saturating_add(axis(self.z, other.z))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Distance between two positions, truncated toward zero.
///
/// ```
/// use basebot::core::{distance, Position};
///
/// assert_eq!(distance(Position::new(0, 0, 0), Position::new(3, 4, 0)), 5);
/// // floor(sqrt(3)), not round
/// assert_eq!(distance(Position::new(0, 0, 0), Position::new(1, 1, 1)), 1);
/// ```
#[must_use]
pub fn distance(a: Position, b: Position) -> u64 {
    let root = isqrt(a.distance_squared(b));
    u64::try_from(root).unwrap_or(u64::MAX)
}

/// Integer square root (largest `r` with `r * r <= n`).
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Float estimate, then correct in both directions.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut r = (n as f64).sqrt() as u128;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identity() {
        let p = Position::new(7, -3, 12);
        assert_eq!(distance(p, p), 0);
    }

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(Position::new(0, 0, 0), Position::new(3, 4, 0)), 5);
        assert_eq!(distance(Position::new(1, 2, 3), Position::new(3, 5, 9)), 7);
    }

    #[test]
    fn test_distance_truncates() {
        // sqrt(3) = 1.732...
        assert_eq!(distance(Position::new(0, 0, 0), Position::new(1, 1, 1)), 1);
        // sqrt(99) = 9.949...
        assert_eq!(distance(Position::new(0, 0, 0), Position::new(9, 3, 3)), 9);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Position::new(-5, 8, 2);
        let b = Position::new(4, -1, 20);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_extreme_coordinates() {
        let a = Position::new(i64::MIN, 0, 0);
        let b = Position::new(i64::MAX, 0, 0);
        assert_eq!(distance(a, b), u64::MAX);

        let a = Position::new(i64::MIN, i64::MIN, i64::MIN);
        let b = Position::new(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(distance(a, b), u64::MAX);
    }

    #[test]
    fn test_isqrt_perfect_squares() {
        for r in [0u128, 1, 2, 10, 1_000, 4_294_967_295, 1 << 62] {
            assert_eq!(isqrt(r * r), r);
            if r > 0 {
                assert_eq!(isqrt(r * r - 1), r - 1);
            }
        }
    }

    #[test]
    fn test_position_serialization() {
        let p = Position::new(1, -2, 3);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1,"y":-2,"z":3}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
