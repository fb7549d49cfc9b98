use crate::{ObjectId, OidError, HEX_SIZE};

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const HEX_DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            b'A'..=b'F' => table[i as usize] = i - b'A' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

/// The lowercase hex alphabet, indexed by nibble value.
pub const HEX_ENCODE: &[u8; 16] = b"0123456789abcdef";

/// Decode a single ASCII hex digit to its nibble value.
#[inline]
pub fn decode_nibble(c: u8) -> Option<u8> {
    match HEX_DECODE[c as usize] {
        255 => None,
        v => Some(v),
    }
}

/// Hex-encode `bytes` into `buf`. `buf` must be at least `bytes.len() * 2` bytes.
///
/// # Panics
///
/// Panics if `buf` is too short.
pub fn hex_encode(bytes: &[u8], buf: &mut [u8]) {
    assert!(
        buf.len() >= bytes.len() * 2,
        "hex_encode: buffer too short"
    );
    for (i, &b) in bytes.iter().enumerate() {
        buf[i * 2] = HEX_ENCODE[(b >> 4) as usize];
        buf[i * 2 + 1] = HEX_ENCODE[(b & 0x0f) as usize];
    }
}

/// Decode hex text into `buf`. The text length must be exactly `buf.len() * 2`.
///
/// The first invalid digit is reported with its position in `hex`.
pub fn hex_decode(hex: impl AsRef<[u8]>, buf: &mut [u8]) -> Result<(), OidError> {
    let hex = hex.as_ref();
    if hex.len() != buf.len() * 2 {
        return Err(OidError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: hex.len(),
        });
    }
    let digit = |position: usize| {
        decode_nibble(hex[position]).ok_or(OidError::InvalidHex {
            position,
            character: hex[position] as char,
        })
    };
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = (digit(i * 2)? << 4) | digit(i * 2 + 1)?;
    }
    Ok(())
}

/// Format `oid` into a caller-sized buffer as a NUL-terminated hex string.
///
/// At most `buf.len() - 1` digits (and never more than 40) are written,
/// followed by a `0` byte. The returned slice covers the digits only.
///
/// This never fails: a missing buffer, a missing id or an empty buffer all
/// yield `""`, so the result can always be printed.
pub fn format_bounded<'a>(buf: Option<&'a mut [u8]>, oid: Option<&ObjectId>) -> &'a str {
    let (Some(buf), Some(oid)) = (buf, oid) else {
        return "";
    };
    if buf.is_empty() {
        return "";
    }

    let n = (buf.len() - 1).min(HEX_SIZE);
    buf[..n].copy_from_slice(&oid.hex()[..n]);
    buf[n] = 0;
    std::str::from_utf8(&buf[..n]).unwrap_or_default()
}
