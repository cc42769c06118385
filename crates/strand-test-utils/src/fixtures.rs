//! Byte-string corpora.

use std::ffi::CString;

/// C strings covering the interesting lengths and byte ranges.
pub fn cstr_corpus() -> Vec<CString> {
    let samples: [&[u8]; 7] = [
        b"",
        b"a",
        b"foo",
        b"bar",
        b"hello, arena",
        b"\x01\x7f\x80\xfe\xff",
        &[b'x'; 300],
    ];
    samples
        .iter()
        .filter_map(|s| CString::new(*s).ok())
        .collect()
}

/// Content with zero bytes before the declared end.
pub const EMBEDDED_NULS: [&[u8]; 4] = [b"\0", b"a\0b", b"\0\0\0", b"tail\0"];
