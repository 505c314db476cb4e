//! # region-alloc
//!
//! Region-style allocators that manage raw bytes inside a single
//! pre-reserved, aligned contiguous buffer:
//!
//! - [`LinearAllocator`] - bump pointer, freed all at once;
//! - [`StackAllocator`] - LIFO with metadata headers and markable rollback;
//! - [`PoolAllocator`] - fixed-size blocks over an intrusive free-list.
//!
//! The [`Alignment`] value type centralises the power-of-two invariant, and
//! the [`allocator::raw`] module wraps the platform's aligned allocation
//! primitives.
//!
//! The allocators hand out raw aligned byte ranges; they do not construct or
//! drop values, and handed-out pointers are invalidated by any covering
//! deallocation, by `clear`, by reallocation, and by destruction.
//!
//! ```
//! use region_alloc::{Alignment, LinearAllocator};
//!
//! let mut frame = LinearAllocator::new(4096, Alignment::new(16).unwrap()).unwrap();
//! let vertices = frame.allocate_aligned(256, Alignment::new(64).unwrap()).unwrap();
//! assert_eq!(vertices.len(), 256);
//! assert_eq!(vertices.cast::<u8>().as_ptr() as usize % 64, 0);
//!
//! // One call retires the whole frame.
//! frame.clear();
//! assert_eq!(frame.allocated_bytes(), 0);
//! ```

pub mod allocator;
pub mod utils;

pub use allocator::*;
