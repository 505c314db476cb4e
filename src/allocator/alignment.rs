//! Power-of-two alignment value type.

use core::fmt;

use crate::allocator::error::{AllocError, AllocResult};
use crate::utils::{WORD_SIZE, is_power_of_two, padding_needed};

/// A memory alignment: allocation addresses must be a multiple of it.
///
/// The wrapped value is always a power of two; the invariant is enforced
/// once at construction so everything downstream can assume validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment(usize);

impl Alignment {
    /// The weakest alignment; every address satisfies it.
    pub const MIN: Alignment = Alignment(1);

    /// Alignment of a machine word (pointer width).
    pub const WORD: Alignment = Alignment(WORD_SIZE);

    /// Wraps `value` as an alignment. `value` must be a power of two.
    pub fn new(value: usize) -> AllocResult<Self> {
        if !is_power_of_two(value) {
            return Err(AllocError::InvalidAlignment(value));
        }
        Ok(Self(value))
    }

    /// The alignment as an unsigned integer.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Bytes to skip forward so that `addr` becomes a multiple of this
    /// alignment. Always in `0..self.get()`.
    #[inline]
    pub(crate) const fn adjustment_for(self, addr: usize) -> usize {
        padding_needed(addr, self.0)
    }
}

impl From<Alignment> for usize {
    #[inline]
    fn from(alignment: Alignment) -> usize {
        alignment.get()
    }
}

impl TryFrom<usize> for Alignment {
    type Error = AllocError;

    fn try_from(value: usize) -> AllocResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
