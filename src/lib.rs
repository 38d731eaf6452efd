#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

#[macro_use]
mod use_libc;

mod copy;
mod fixture;
mod usage;

pub use copy::{
    bytes_written, overflow_len, unchecked_copy, unchecked_copy_end, StackBuffer, BUFFER_CAPACITY,
};
pub use fixture::{first_argument, run};
pub use usage::{UsageError, SUCCESS_STATUS, USAGE_ERROR_STATUS};
