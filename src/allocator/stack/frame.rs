//! RAII-based stack frame for automatic restoration.

use core::ops::{Deref, DerefMut};

use super::allocator::StackAllocator;
use super::marker::StackMarker;

/// Scope guard that rolls the stack back to where it was at construction.
///
/// Allocations made through the frame are released when it goes out of
/// scope, which keeps the rollback correct even on early returns.
pub struct StackFrame<'a> {
    allocator: &'a mut StackAllocator,
    marker: StackMarker,
}

impl<'a> StackFrame<'a> {
    /// Captures the current top; the allocator restores to it on drop.
    pub fn new(allocator: &'a mut StackAllocator) -> Self {
        let marker = allocator.mark();
        Self { allocator, marker }
    }

    /// Manually restore and consume this frame.
    pub fn restore(self) {
        drop(self);
    }
}

impl Drop for StackFrame<'_> {
    fn drop(&mut self) {
        // Nothing to roll back if the top never moved.
        if self.allocator.mark() != self.marker {
            let _ = self.allocator.release(self.marker);
        }
    }
}

impl Deref for StackFrame<'_> {
    type Target = StackAllocator;

    fn deref(&self) -> &StackAllocator {
        self.allocator
    }
}

impl DerefMut for StackFrame<'_> {
    fn deref_mut(&mut self) -> &mut StackAllocator {
        self.allocator
    }
}
