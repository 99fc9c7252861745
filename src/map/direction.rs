use glam::{IVec2, Vec2};
use strum_macros::{AsRefStr, Display, EnumIter};

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The four cardinal directions, in tie-break priority order.
    ///
    /// Whenever two directions score the same, the one listed first wins.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the unit tile offset of this direction. `y` grows downward.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Returns the unit pixel vector of this direction.
    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// Returns the direction as a usize (0-3). Useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// True for `Left`/`Right`.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the two directions lie on different axes.
    pub const fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        dir.as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.as_ivec2() + dir.opposite().as_ivec2(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_direction_as_ivec2() {
        assert_eq!(Direction::Up.as_ivec2(), -IVec2::Y);
        assert_eq!(Direction::Down.as_ivec2(), IVec2::Y);
        assert_eq!(Direction::Left.as_ivec2(), -IVec2::X);
        assert_eq!(Direction::Right.as_ivec2(), IVec2::X);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Direction::DIRECTIONS,
            [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
        );
        for (i, dir) in Direction::DIRECTIONS.iter().enumerate() {
            assert_eq!(dir.as_usize(), i);
        }
    }

    #[test]
    fn test_perpendicular() {
        assert!(Direction::Up.is_perpendicular_to(Direction::Left));
        assert!(!Direction::Up.is_perpendicular_to(Direction::Down));
        assert!(!Direction::Right.is_perpendicular_to(Direction::Right));
    }

    #[test]
    fn test_as_ref_str() {
        assert_eq!(Direction::Left.as_ref(), "left");
    }
}
