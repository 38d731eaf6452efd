//! The entry routine.

use crate::copy::{unchecked_copy, StackBuffer};
#[cfg(feature = "log")]
use crate::copy::{bytes_written, overflow_len, BUFFER_CAPACITY};
use crate::usage::{UsageError, SUCCESS_STATUS};
use core::hint::black_box;
use libc::{c_char, c_int};
use std::io::{self, Write};

/// Return `argv[1]`, the first user-supplied argument.
///
/// # Safety
///
/// `argv` must be null or point to at least `argc` pointers, each null or
/// pointing to a NUL-terminated string.
pub unsafe fn first_argument(
    argc: c_int,
    argv: *const *const c_char,
) -> Result<*const c_char, UsageError> {
    if argc < 2 || argv.is_null() {
        return Err(UsageError::MissingArgument);
    }

    let arg = *argv.add(1);
    if arg.is_null() {
        return Err(UsageError::MissingArgument);
    }

    Ok(arg)
}

/// Run the fixture on a C-style argument vector and return the exit status.
///
/// Without an argument this prints the usage message to stdout and returns
/// [`USAGE_ERROR_STATUS`]. Otherwise it copies `argv[1]` into a
/// [`BUFFER_CAPACITY`]-byte buffer in its own frame with
/// [`unchecked_copy`] and returns [`SUCCESS_STATUS`]. Arguments of ten
/// bytes or more are written past the end of the buffer, over whatever the
/// compiler placed next to it; what happens after that is undefined.
///
/// [`USAGE_ERROR_STATUS`]: crate::USAGE_ERROR_STATUS
/// [`BUFFER_CAPACITY`]: crate::BUFFER_CAPACITY
///
/// # Safety
///
/// `argv` must satisfy the requirements of [`first_argument`]. Beyond that,
/// this function is unsound for any `argv[1]` longer than nine bytes, on
/// purpose.
#[inline(never)]
pub unsafe fn run(argc: c_int, argv: *const *const c_char) -> c_int {
    #[cfg(feature = "log")]
    log::trace!("`run({:?}, {:?})`", argc, argv);

    let arg = match first_argument(argc, argv) {
        Ok(arg) => arg,
        Err(err) => {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", err);
            let _ = stdout.flush();
            return err.exit_status();
        }
    };

    #[cfg(feature = "log")]
    {
        let len = core::ffi::CStr::from_ptr(arg).to_bytes().len();
        log::trace!(
            "Copying {} bytes into a {}-byte buffer ({} past the end)",
            bytes_written(len),
            BUFFER_CAPACITY,
            overflow_len(len)
        );
    }

    let mut buffer = StackBuffer::uninit();

    // Hide the buffer's provenance from the optimizer so the copy can't be
    // resolved at compile time.
    let d = black_box(buffer.as_mut_ptr().cast::<c_char>());
    unchecked_copy(d, arg);
    black_box(&mut buffer);

    #[cfg(feature = "log")]
    log::trace!("`run` returning `{:?}`", SUCCESS_STATUS);

    SUCCESS_STATUS
}
