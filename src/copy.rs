//! The unchecked copy.
//!
//! Nothing in this module knows how large a destination is. The copy runs
//! until it has stored the source's NUL terminator, wherever that lands.
//! Callers that hand it a destination shorter than the source get an
//! out-of-bounds write, and that write is the behavior the fixture exists to
//! provide.

use core::mem::MaybeUninit;
use core::ptr;
use libc::c_char;

const NUL: c_char = 0;

/// Capacity, in bytes, of the stack buffer the entry routine copies into.
pub const BUFFER_CAPACITY: usize = 10;

/// The fixture's stack buffer. Left uninitialized.
pub type StackBuffer = MaybeUninit<[c_char; BUFFER_CAPACITY]>;

/// Number of bytes the copy stores for a source of `len` data bytes.
#[inline]
pub const fn bytes_written(len: usize) -> usize {
    len + 1
}

/// Number of bytes the copy stores past the end of a [`StackBuffer`] for a
/// source of `len` data bytes.
#[inline]
pub const fn overflow_len(len: usize) -> usize {
    bytes_written(len).saturating_sub(BUFFER_CAPACITY)
}

/// Copy the NUL-terminated string at `s` to `d`, terminator included, and
/// return a pointer to the terminator stored in `d`.
///
/// # Safety
///
/// `s` must point to a NUL-terminated string. `d` receives
/// [`bytes_written`]`(strlen(s))` bytes with no check against the size of the
/// object it points into. If that object is smaller, this writes out of
/// bounds.
#[inline(never)]
pub unsafe fn unchecked_copy_end(mut d: *mut c_char, mut s: *const c_char) -> *mut c_char {
    libc!(libc::stpcpy(d, s));

    loop {
        let c = *s;

        // Volatile: the destination is usually never read again, and every
        // store has to reach memory anyway.
        ptr::write_volatile(d, c);

        if c == NUL {
            break;
        }

        d = d.wrapping_add(1);
        s = s.add(1);
    }

    d
}

/// Copy the NUL-terminated string at `s` to `d`, terminator included, and
/// return `d`.
///
/// # Safety
///
/// Same as [`unchecked_copy_end`].
#[inline(never)]
pub unsafe fn unchecked_copy(d: *mut c_char, s: *const c_char) -> *mut c_char {
    libc!(libc::strcpy(d, s));

    unchecked_copy_end(d, s);
    d
}
