//! Per-side flow capability flags.

use std::fmt::{self, Display};

use crate::Direction;

bitflags::bitflags! {
    /// The set of sides through which a tile can carry flow.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::{Direction, FlowFlags};
    ///
    /// let elbow = FlowFlags::DOWN | FlowFlags::LEFT;
    /// assert!(elbow.carries(Direction::Down));
    /// assert!(!elbow.carries(Direction::Up));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FlowFlags: u8 {
        /// Flow through the top side.
        const UP = 0b0001;
        /// Flow through the bottom side.
        const DOWN = 0b0010;
        /// Flow through the left side.
        const LEFT = 0b0100;
        /// Flow through the right side.
        const RIGHT = 0b1000;
    }
}

impl FlowFlags {
    /// Returns `true` if flow can pass through the given side.
    #[must_use]
    pub const fn carries(self, direction: Direction) -> bool {
        self.contains(direction.flow())
    }

    /// Iterates the sides that carry flow, in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.carries(direction))
    }
}

impl Display for FlowFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, direction) in self.directions().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            Display::fmt(&direction, f)?;
        }
        Ok(())
    }
}
