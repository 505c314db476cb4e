//! Platform aligned-allocation primitives and the backing-region type.
//!
//! The allocators in this crate acquire their internally owned buffers
//! through [`aligned_allocate`] and release them through [`aligned_free`];
//! both are thin wrappers over the platform allocator and surface failures
//! as `None` without retrying.

use core::ptr::NonNull;

use crate::allocator::Alignment;
use crate::utils::WORD_SIZE;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn platform_aligned_allocate(size: usize, alignment: usize) -> Option<NonNull<u8>> {
            let mut block: *mut libc::c_void = core::ptr::null_mut();
            // SAFETY: `block` is a valid out-pointer and `alignment` is a
            // power of two not smaller than sizeof(void*), as
            // posix_memalign requires.
            let rc = unsafe { libc::posix_memalign(&mut block, alignment, size) };
            if rc != 0 {
                return None;
            }
            NonNull::new(block.cast::<u8>())
        }

        unsafe fn platform_aligned_free(ptr: NonNull<u8>) {
            // SAFETY: posix_memalign blocks are released through free();
            // the caller passes the exact allocated address.
            unsafe { libc::free(ptr.as_ptr().cast()) }
        }
    } else if #[cfg(windows)] {
        fn platform_aligned_allocate(size: usize, alignment: usize) -> Option<NonNull<u8>> {
            // SAFETY: plain call into _aligned_malloc; a null return is
            // handled by the caller.
            let block = unsafe { libc::_aligned_malloc(size, alignment) };
            NonNull::new(block.cast::<u8>())
        }

        unsafe fn platform_aligned_free(ptr: NonNull<u8>) {
            // SAFETY: _aligned_malloc blocks are released through
            // _aligned_free(); the caller passes the exact allocated
            // address.
            unsafe { libc::_aligned_free(ptr.as_ptr().cast()) }
        }
    } else {
        compile_error!("aligned allocation is implemented for unix and windows targets only");
    }
}

/// Reserves `size` bytes whose address is a multiple of `alignment`.
///
/// Returns `None` when the platform allocator fails or `size` is zero.
/// Sub-word alignments are raised to the word size because the platform
/// allocators refuse them; callers only ever observe a stricter alignment,
/// never a weaker one.
pub fn aligned_allocate(size: usize, alignment: Alignment) -> Option<NonNull<u8>> {
    if size == 0 {
        debug_assert!(false, "aligned_allocate requires a non-zero size");
        return None;
    }
    platform_aligned_allocate(size, alignment.get().max(WORD_SIZE))
}

/// Releases a block produced by [`aligned_allocate`].
///
/// # Safety
/// `ptr` must be the exact address returned by a prior [`aligned_allocate`]
/// call and must not have been freed already.
pub unsafe fn aligned_free(ptr: NonNull<u8>) {
    // SAFETY: forwarded contract.
    unsafe { platform_aligned_free(ptr) }
}

/// A buffer acquired from the platform allocator, released exactly once on
/// drop.
pub(crate) struct OwnedRegion {
    ptr: NonNull<u8>,
}

impl OwnedRegion {
    pub(crate) fn allocate(size: usize, alignment: Alignment) -> Option<Self> {
        aligned_allocate(size, alignment).map(|ptr| Self { ptr })
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> NonNull<u8> {
        self.ptr
    }
}

impl Drop for OwnedRegion {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from aligned_allocate and this is the single
        // release path.
        unsafe { aligned_free(self.ptr) };
    }
}

/// Ownership of an allocator's backing buffer.
///
/// An owned region was acquired by the allocator itself and is released
/// when it is dropped; a borrowed region belongs to the caller and is never
/// freed here. Which reallocation flavor is legal follows structurally from
/// the variant.
pub(crate) enum Region {
    Owned(OwnedRegion),
    Borrowed,
}

impl Region {
    #[inline]
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Region::Owned(_))
    }
}
