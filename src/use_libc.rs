//! Signature checks against the C functions our primitives stand in for.

/// Check that the enclosing function can stand in for the given libc call.
///
/// The call is type-checked but never executed.
macro_rules! libc {
    ($e:expr) => {
        #[allow(unreachable_code)]
        if false {
            return $e;
        }
    };
}
