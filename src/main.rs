//! The fixture binary.
//!
//! This exports the C `main` symbol itself, so `run` sees the argument
//! strings the C runtime was handed, in place.

#![no_main]

use libc::{c_char, c_int};

/// Initialize logging, if enabled.
#[cfg(feature = "env_logger")]
#[link_section = ".init_array.00099"]
#[used]
static INIT_ARRAY: unsafe extern "C" fn() = {
    unsafe extern "C" fn function() {
        env_logger::init();

        log::trace!(target: "bof_fixture::main", "Program started");
    }
    function
};

#[no_mangle]
unsafe extern "C" fn main(argc: c_int, argv: *const *const c_char, _envp: *const *const c_char) -> c_int {
    #[cfg(feature = "log")]
    log::trace!("Calling `run({:?}, {:?})`", argc, argv);

    bof_fixture::run(argc, argv)
}
