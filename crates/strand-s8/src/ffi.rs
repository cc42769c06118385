//! Construction from raw C string pointers.

use std::ffi::CStr;
use std::os::raw::c_char;

use strand_arena::Arena;

use crate::view::S8;

impl<'a> S8<'a> {
    /// Copy a zero-terminated string received as a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a readable sequence of bytes ending in a zero
    /// byte, valid for the duration of the call.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is null.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw_cstr(arena: &'a Arena, ptr: *const c_char) -> S8<'a> {
        assert!(!ptr.is_null(), "null C string pointer");
        // SAFETY: non-null (asserted above); readability and termination are
        // the caller's contract.
        let cstr = unsafe { CStr::from_ptr(ptr) };
        Self::from_cstr(arena, cstr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(unsafe_code)]
    fn raw_pointer_round_trip() {
        let arena = Arena::new(32);
        let src = c"interop";
        // SAFETY: `src` is a valid C string literal.
        let s = unsafe { S8::from_raw_cstr(&arena, src.as_ptr()) };
        assert_eq!(s, "interop");
        assert_eq!(s.to_c_str(), src);
        assert_ne!(s.as_c_ptr(), src.as_ptr());
    }

    #[test]
    #[allow(unsafe_code)]
    #[should_panic(expected = "null C string pointer")]
    fn null_pointer_panics() {
        let arena = Arena::new(32);
        // SAFETY: the null check fires before any read.
        unsafe {
            S8::from_raw_cstr(&arena, std::ptr::null());
        }
    }
}
