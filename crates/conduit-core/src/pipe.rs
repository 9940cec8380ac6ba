//! Pipe tile variants and their flow capabilities.
//!
//! Every tile on the board is described by a single [`PipeVariant`] tag. The
//! sides a tile can carry flow through are a fixed property of its tag and are
//! looked up with [`PipeVariant::flow`]. Adding a new shape means adding one
//! variant and one table row.

use std::fmt::{self, Display};

use crate::{Direction, FlowFlags};

/// A tile variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum PipeVariant {
    /// An empty, replaceable cell.
    Basic,
    /// A wall. Never carries flow and is never replaced.
    Blocked,
    /// Straight pipe between the left and right sides.
    Horizontal,
    /// Straight pipe between the top and bottom sides.
    Vertical,
    /// Crossing pipe open on all four sides.
    Cross,
    /// Curved pipe drawn in the top-left corner, joining bottom and right.
    CircleTopLeft,
    /// Curved pipe drawn in the top-right corner, joining bottom and left.
    CircleTopRight,
    /// Curved pipe drawn in the bottom-left corner, joining top and right.
    CircleBottomLeft,
    /// Curved pipe drawn in the bottom-right corner, joining top and left.
    CircleBottomRight,
    /// Flow source facing up.
    StartingPointUp,
    /// Flow source facing down.
    StartingPointDown,
    /// Flow source facing left.
    StartingPointLeft,
    /// Flow source facing right.
    StartingPointRight,
}

impl PipeVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Basic,
        Self::Blocked,
        Self::Horizontal,
        Self::Vertical,
        Self::Cross,
        Self::CircleTopLeft,
        Self::CircleTopRight,
        Self::CircleBottomLeft,
        Self::CircleBottomRight,
        Self::StartingPointUp,
        Self::StartingPointDown,
        Self::StartingPointLeft,
        Self::StartingPointRight,
    ];

    /// Variants the conveyor may hand out for placement.
    ///
    /// Excludes [`Basic`](Self::Basic), [`Blocked`](Self::Blocked) and the
    /// starting points.
    pub const PLACEABLE: [Self; 7] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Cross,
        Self::CircleTopLeft,
        Self::CircleTopRight,
        Self::CircleBottomLeft,
        Self::CircleBottomRight,
    ];

    /// Returns the sides this variant carries flow through.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::{FlowFlags, PipeVariant};
    ///
    /// assert_eq!(PipeVariant::Blocked.flow(), FlowFlags::empty());
    /// assert_eq!(
    ///     PipeVariant::CircleTopRight.flow(),
    ///     FlowFlags::DOWN | FlowFlags::LEFT
    /// );
    /// ```
    #[must_use]
    pub const fn flow(self) -> FlowFlags {
        match self {
            Self::Basic | Self::Blocked => FlowFlags::empty(),
            Self::Horizontal => FlowFlags::LEFT.union(FlowFlags::RIGHT),
            Self::Vertical => FlowFlags::UP.union(FlowFlags::DOWN),
            Self::Cross => FlowFlags::all(),
            Self::CircleTopLeft => FlowFlags::DOWN.union(FlowFlags::RIGHT),
            Self::CircleTopRight => FlowFlags::DOWN.union(FlowFlags::LEFT),
            Self::CircleBottomLeft => FlowFlags::UP.union(FlowFlags::RIGHT),
            Self::CircleBottomRight => FlowFlags::UP.union(FlowFlags::LEFT),
            Self::StartingPointUp => FlowFlags::UP,
            Self::StartingPointDown => FlowFlags::DOWN,
            Self::StartingPointLeft => FlowFlags::LEFT,
            Self::StartingPointRight => FlowFlags::RIGHT,
        }
    }

    /// Returns the starting-point variant facing `direction`.
    #[must_use]
    pub const fn starting_point(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::StartingPointUp,
            Direction::Down => Self::StartingPointDown,
            Direction::Left => Self::StartingPointLeft,
            Direction::Right => Self::StartingPointRight,
        }
    }

    /// Returns the facing direction if this is a starting-point variant.
    #[must_use]
    pub const fn starting_direction(self) -> Option<Direction> {
        match self {
            Self::StartingPointUp => Some(Direction::Up),
            Self::StartingPointDown => Some(Direction::Down),
            Self::StartingPointLeft => Some(Direction::Left),
            Self::StartingPointRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns `true` for the four starting-point variants.
    #[must_use]
    pub const fn is_starting_point(self) -> bool {
        self.starting_direction().is_some()
    }

    /// Returns `true` if the conveyor may supply this variant.
    #[must_use]
    pub const fn is_placeable(self) -> bool {
        !matches!(self, Self::Basic | Self::Blocked) && !self.is_starting_point()
    }

    /// Returns `true` if flow leaving this tile through `direction` enters a
    /// neighbouring `other` tile.
    ///
    /// Both tiles have to be open on the shared side.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::{Direction, PipeVariant};
    ///
    /// let start = PipeVariant::StartingPointRight;
    /// assert!(start.connects(PipeVariant::Horizontal, Direction::Right));
    /// assert!(!start.connects(PipeVariant::Vertical, Direction::Right));
    /// ```
    #[must_use]
    pub const fn connects(self, other: Self, direction: Direction) -> bool {
        self.flow().carries(direction) && other.flow().carries(direction.opposite())
    }

    /// Returns the single-character symbol used in text grids.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Basic => '.',
            Self::Blocked => '#',
            Self::Horizontal => '-',
            Self::Vertical => '|',
            Self::Cross => '+',
            Self::CircleTopLeft => 'p',
            Self::CircleTopRight => 'q',
            Self::CircleBottomLeft => 'b',
            Self::CircleBottomRight => 'd',
            Self::StartingPointUp => '^',
            Self::StartingPointDown => 'v',
            Self::StartingPointLeft => '<',
            Self::StartingPointRight => '>',
        }
    }

    /// Parses a text-grid symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.symbol() == symbol)
    }
}

impl Display for PipeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Blocked => "blocked",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Cross => "cross",
            Self::CircleTopLeft => "circle top-left",
            Self::CircleTopRight => "circle top-right",
            Self::CircleBottomLeft => "circle bottom-left",
            Self::CircleBottomRight => "circle bottom-right",
            Self::StartingPointUp => "starting point up",
            Self::StartingPointDown => "starting point down",
            Self::StartingPointLeft => "starting point left",
            Self::StartingPointRight => "starting point right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_variants_have_no_flow() {
        assert!(PipeVariant::Basic.flow().is_empty());
        assert!(PipeVariant::Blocked.flow().is_empty());
    }

    #[test]
    fn test_starting_points_flow_one_way() {
        for direction in Direction::ALL {
            let variant = PipeVariant::starting_point(direction);
            assert!(variant.is_starting_point());
            assert_eq!(variant.starting_direction(), Some(direction));
            assert_eq!(variant.flow(), direction.flow());
        }
    }

    #[test]
    fn test_placeable_set_matches_predicate() {
        let placeable: Vec<_> = PipeVariant::ALL
            .into_iter()
            .filter(|v| v.is_placeable())
            .collect();
        assert_eq!(placeable, PipeVariant::PLACEABLE);
        for variant in PipeVariant::PLACEABLE {
            assert!(variant.flow().bits().count_ones() >= 2);
        }
    }

    #[test]
    fn test_circle_pipes_are_rotations() {
        let circles = [
            PipeVariant::CircleTopLeft,
            PipeVariant::CircleTopRight,
            PipeVariant::CircleBottomLeft,
            PipeVariant::CircleBottomRight,
        ];
        for (i, a) in circles.iter().enumerate() {
            assert_eq!(a.flow().bits().count_ones(), 2);
            for b in &circles[i + 1..] {
                assert_ne!(a.flow(), b.flow());
            }
        }
    }

    #[test]
    fn test_connects_requires_both_sides() {
        use PipeVariant::*;

        assert!(Horizontal.connects(Horizontal, Direction::Right));
        assert!(Horizontal.connects(Cross, Direction::Left));
        assert!(!Horizontal.connects(Vertical, Direction::Right));
        assert!(!Vertical.connects(Horizontal, Direction::Down));
        assert!(CircleTopRight.connects(Vertical, Direction::Down));
        assert!(!Cross.connects(Blocked, Direction::Up));
    }

    #[test]
    fn test_symbols_are_unique() {
        for variant in PipeVariant::ALL {
            assert_eq!(PipeVariant::from_symbol(variant.symbol()), Some(variant));
        }
        assert_eq!(PipeVariant::from_symbol('x'), None);
    }
}
