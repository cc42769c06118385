//! The `S8` and `S8Mut` view types.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::os::raw::c_char;

/// An explicit-length, zero-terminated byte string borrowed from an arena.
///
/// Internally a slice of `len + 1` bytes whose last byte is zero. Equality,
/// ordering and hashing look at the content only.
#[derive(Clone, Copy)]
pub struct S8<'a> {
    /// Content followed by the terminator.
    pub(crate) bytes: &'a [u8],
}

/// A freshly allocated string whose content the caller is about to fill.
///
/// Returned by [`S8::new`]. The content is writable; the terminator is not,
/// so the string stays zero-terminated however it is filled.
pub struct S8Mut<'a> {
    pub(crate) bytes: &'a mut [u8],
}

impl<'a> S8<'a> {
    /// The empty string: no content, one terminator byte.
    pub const EMPTY: S8<'static> = S8 { bytes: &[0] };

    /// View a buffer whose last byte is the terminator.
    ///
    /// Returns `None` if `bytes` is empty or does not end in zero. Earlier
    /// zero bytes are content.
    pub const fn from_bytes_with_nul(bytes: &'a [u8]) -> Option<Self> {
        match bytes.last() {
            Some(&0) => Some(Self { bytes }),
            _ => None,
        }
    }

    /// Content length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// The content bytes followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &'a [u8] {
        self.bytes
    }

    /// Pointer to the first content byte.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// The string as a C string, ending at the first zero byte.
    ///
    /// Equal to the full content unless the content has embedded zeros.
    pub fn to_c_str(&self) -> &'a CStr {
        CStr::from_bytes_until_nul(self.bytes).unwrap_or_default()
    }

    /// Pointer suitable for APIs that take a zero-terminated `char*`.
    pub fn as_c_ptr(&self) -> *const c_char {
        self.bytes.as_ptr().cast()
    }
}

impl Default for S8<'_> {
    fn default() -> Self {
        S8::EMPTY
    }
}

impl<'a> S8Mut<'a> {
    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// The content bytes, writable. The terminator is not included.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.bytes.len() - 1;
        &mut self.bytes[..len]
    }

    /// Borrow as a read-only string.
    pub fn as_s8(&self) -> S8<'_> {
        S8 { bytes: self.bytes }
    }

    /// Give up write access, keeping the arena lifetime.
    pub fn freeze(self) -> S8<'a> {
        S8 { bytes: self.bytes }
    }
}

impl<'a> From<S8Mut<'a>> for S8<'a> {
    fn from(s: S8Mut<'a>) -> Self {
        s.freeze()
    }
}

impl AsRef<[u8]> for S8<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for S8<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Debug for S8Mut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_s8(), f)
    }
}

/// Non-printable bytes are shown as escapes (`\0`, `\xff`).
impl fmt::Display for S8<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_bytes().escape_ascii(), f)
    }
}

impl<'b> PartialEq<S8<'b>> for S8<'_> {
    fn eq(&self, other: &S8<'b>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for S8<'_> {}

impl PartialEq<[u8]> for S8<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for S8<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for S8<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for S8<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for S8<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for S8<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for S8<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for S8<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_with_nul_requires_terminator() {
        assert!(S8::from_bytes_with_nul(b"abc").is_none());
        assert!(S8::from_bytes_with_nul(b"").is_none());
        let s = S8::from_bytes_with_nul(b"abc\0").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s, "abc");
    }

    #[test]
    fn embedded_zero_is_content() {
        let s = S8::from_bytes_with_nul(b"a\0b\0").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"a\0b");
        assert_eq!(s.to_c_str().to_bytes(), b"a");
    }

    #[test]
    fn empty_string() {
        let s = S8::default();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s.to_c_str(), c"");
    }

    #[test]
    fn display_escapes_non_printable() {
        let s = S8::from_bytes_with_nul(b"hi\n\xff\0").unwrap();
        assert_eq!(s.to_string(), "hi\\n\\xff");
        assert_eq!(format!("{s:?}"), "\"hi\\n\\xff\"");
    }

    #[test]
    fn equality_ignores_backing_buffer() {
        let a = S8::from_bytes_with_nul(b"same\0").unwrap();
        let owned = b"same\0".to_vec();
        let b = S8::from_bytes_with_nul(&owned).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, b"same");
        assert!(S8::from_bytes_with_nul(b"a\0").unwrap() < a);
    }

    #[test]
    fn s8_mut_hides_terminator() {
        let mut buf = [0u8; 4];
        let mut s = S8Mut { bytes: &mut buf };
        s.as_bytes_mut().copy_from_slice(b"xyz");
        assert_eq!(s.len(), 3);
        let frozen = s.freeze();
        assert_eq!(frozen.as_bytes_with_nul(), b"xyz\0");
    }

    #[test]
    fn c_ptr_points_at_content() {
        let s = S8::from_bytes_with_nul(b"ok\0").unwrap();
        assert_eq!(s.as_c_ptr().cast::<u8>(), s.as_ptr());
    }
}
