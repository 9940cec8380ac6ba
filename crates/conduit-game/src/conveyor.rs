//! The queue of upcoming pipe tiles.

use std::{collections::VecDeque, fmt};

use conduit_core::PipeVariant;
use rand::Rng;

use crate::GameError;

/// Supplies fresh tiles for the conveyor tail.
///
/// Any `FnMut() -> PipeVariant` closure is a source, which keeps tests free of
/// randomness:
///
/// ```
/// use conduit_core::PipeVariant;
/// use conduit_game::VariantSource;
///
/// let mut source = || PipeVariant::Cross;
/// assert_eq!(source.next_variant(), PipeVariant::Cross);
/// ```
pub trait VariantSource {
    /// Draws the next tile.
    fn next_variant(&mut self) -> PipeVariant;
}

impl<F> VariantSource for F
where
    F: FnMut() -> PipeVariant,
{
    fn next_variant(&mut self) -> PipeVariant {
        self()
    }
}

/// Draws uniformly from [`PipeVariant::PLACEABLE`].
#[derive(Debug, Clone)]
pub struct RandomVariants<R> {
    rng: R,
}

impl<R> RandomVariants<R>
where
    R: Rng,
{
    /// Creates a source backed by `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> VariantSource for RandomVariants<R>
where
    R: Rng,
{
    fn next_variant(&mut self) -> PipeVariant {
        let index = self.rng.random_range(0..PipeVariant::PLACEABLE.len());
        PipeVariant::PLACEABLE[index]
    }
}

/// A fixed-length queue of upcoming tiles.
///
/// The head is the tile the next placement uses. Every consume is paired with
/// exactly one draw appended at the tail, so the length never changes.
///
/// # Examples
///
/// ```
/// use conduit_core::PipeVariant;
/// use conduit_game::Conveyor;
///
/// let mut tiles = [PipeVariant::Vertical, PipeVariant::Cross].into_iter().cycle();
/// let mut conveyor = Conveyor::new(3, move || tiles.next().unwrap_or(PipeVariant::Cross))?;
///
/// assert_eq!(conveyor.peek_next(), PipeVariant::Vertical);
/// assert_eq!(conveyor.consume_and_advance(), PipeVariant::Vertical);
/// assert_eq!(
///     conveyor.to_vec(),
///     [PipeVariant::Cross, PipeVariant::Vertical, PipeVariant::Cross]
/// );
/// # Ok::<(), conduit_game::GameError>(())
/// ```
pub struct Conveyor {
    queue: VecDeque<PipeVariant>,
    source: Box<dyn VariantSource + Send>,
}

impl Conveyor {
    /// Creates a conveyor of `len` tiles drawn from `source`, head first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConveyorLength`] if `len` is zero.
    pub fn new<S>(len: usize, mut source: S) -> Result<Self, GameError>
    where
        S: VariantSource + Send + 'static,
    {
        if len == 0 {
            return Err(GameError::InvalidConveyorLength);
        }
        let queue = (0..len).map(|_| source.next_variant()).collect();
        Ok(Self {
            queue,
            source: Box::new(source),
        })
    }

    /// Creates a conveyor holding `initial`, refilled from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConveyorLength`] if `initial` is empty.
    pub fn from_queue<I, S>(initial: I, source: S) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = PipeVariant>,
        S: VariantSource + Send + 'static,
    {
        let queue: VecDeque<_> = initial.into_iter().collect();
        if queue.is_empty() {
            return Err(GameError::InvalidConveyorLength);
        }
        Ok(Self {
            queue,
            source: Box::new(source),
        })
    }

    /// Returns the tile the next placement will use.
    #[must_use]
    pub fn peek_next(&self) -> PipeVariant {
        // The queue is never empty: construction rejects length zero and
        // every pop is followed by a push.
        self.queue[0]
    }

    /// Removes the head tile, appends one fresh draw and returns the removed
    /// tile.
    pub fn consume_and_advance(&mut self) -> PipeVariant {
        let next = self.source.next_variant();
        self.queue.push_back(next);
        let head = self.queue.pop_front().unwrap_or(next);
        log::trace!("conveyor consumed {head:?}, appended {next:?}");
        head
    }

    /// Iterates the queue from head to tail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PipeVariant> + '_ {
        self.queue.iter().copied()
    }

    /// Returns the queue from head to tail.
    #[must_use]
    pub fn to_vec(&self) -> Vec<PipeVariant> {
        self.iter().collect()
    }

    /// Number of tiles on the conveyor.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl fmt::Debug for Conveyor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conveyor")
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
