use crate::Vec3;

/// A rotation about +Y by a whole number of 90° steps.
///
/// Turn 0 faces +Z with +X to its right; each step turns clockwise when seen
/// from above, so turn 1 faces +X, turn 2 faces -Z and turn 3 faces -X.
/// Sine and cosine come from a table, so rotated axis vectors stay exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuarterTurn(u8);

impl QuarterTurn {
    pub const ZERO: QuarterTurn = QuarterTurn(0);
    pub const ALL: [QuarterTurn; 4] = [
        QuarterTurn(0),
        QuarterTurn(1),
        QuarterTurn(2),
        QuarterTurn(3),
    ];

    /// Wraps any integer step count into `[0, 4)`.
    #[inline]
    pub const fn new(steps: i32) -> Self {
        QuarterTurn(steps.rem_euclid(4) as u8)
    }

    #[inline]
    pub const fn steps(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn then(self, other: QuarterTurn) -> QuarterTurn {
        QuarterTurn((self.0 + other.0) % 4)
    }

    #[inline]
    pub const fn inverse(self) -> QuarterTurn {
        QuarterTurn((4 - self.0) % 4)
    }

    /// `(sin, cos)` of the turn angle.
    #[inline]
    const fn sin_cos(self) -> (f32, f32) {
        match self.0 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    }

    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let (s, c) = self.sin_cos();
        Vec3 {
            x: v.x * c + v.z * s,
            y: v.y,
            z: -v.x * s + v.z * c,
        }
    }

    /// The rotated facing axis (`+Z` at turn 0).
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.rotate(Vec3::FORWARD)
    }

    /// The rotated perpendicular axis (`+X` at turn 0).
    #[inline]
    pub fn right(self) -> Vec3 {
        self.rotate(Vec3::RIGHT)
    }
}
