use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_encode};
use crate::{OidError, HEX_SIZE, PATH_SIZE, RAW_SIZE};

/// An object identifier: the 160-bit digest naming an object by its content.
///
/// Ordering is unsigned byte-wise lexicographic, most significant byte first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; RAW_SIZE]);

impl ObjectId {
    /// The null OID (all zeros).
    pub const NULL: Self = Self([0u8; RAW_SIZE]);

    /// Wrap raw digest bytes verbatim. No validation is performed.
    pub const fn from_raw(raw: [u8; RAW_SIZE]) -> Self {
        Self(raw)
    }

    /// Create an ObjectId from a byte slice of exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OidError> {
        let raw: [u8; RAW_SIZE] = bytes.try_into().map_err(|_| OidError::InvalidHashLength {
            expected: RAW_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    /// Create an ObjectId from a hex string of exactly 40 characters.
    pub fn from_hex(hex: &str) -> Result<Self, OidError> {
        if hex.len() != HEX_SIZE {
            return Err(OidError::InvalidHexLength {
                expected: HEX_SIZE,
                actual: hex.len(),
            });
        }
        Self::from_hex_bytes(hex.as_bytes())
    }

    /// Decode the leading 40 hex digits of `text`.
    ///
    /// Anything after the first 40 bytes is ignored, so this can parse an id
    /// at the start of a longer line. Upper and lower case are both accepted.
    pub fn from_hex_bytes(text: &[u8]) -> Result<Self, OidError> {
        let digits = text.get(..HEX_SIZE).ok_or(OidError::InvalidHexLength {
            expected: HEX_SIZE,
            actual: text.len(),
        })?;
        let mut raw = [0u8; RAW_SIZE];
        hex_decode(digits, &mut raw)?;
        Ok(Self(raw))
    }

    /// Get the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; RAW_SIZE] {
        &self.0
    }

    /// Check if this is the null (all-zeros) OID.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Value of the hex digit at `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 40`.
    #[inline]
    pub fn nibble(&self, index: usize) -> u8 {
        let byte = self.0[index / 2];
        if index % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }

    /// Write the 40 lowercase hex digits into `out`. No terminator is added.
    pub fn write_hex(&self, out: &mut [u8; HEX_SIZE]) {
        hex_encode(&self.0, out);
    }

    /// The 40 lowercase hex digits as a fixed-size array.
    pub fn hex(&self) -> [u8; HEX_SIZE] {
        let mut out = [0u8; HEX_SIZE];
        self.write_hex(&mut out);
        out
    }

    /// Write the loose-object path form `"xx/xxxx..."` into `out`.
    pub fn write_path(&self, out: &mut [u8; PATH_SIZE]) {
        let hex = self.hex();
        out[..2].copy_from_slice(&hex[..2]);
        out[2] = b'/';
        out[3..].copy_from_slice(&hex[2..]);
    }

    /// Get the loose object path component: `"xx/xxxx..."`.
    pub fn loose_path(&self) -> String {
        let mut out = [0u8; PATH_SIZE];
        self.write_path(&mut out);
        out.iter().map(|&b| b as char).collect()
    }

    /// Get the hex string representation (lowercase).
    pub fn to_hex(&self) -> String {
        self.hex().iter().map(|&b| b as char).collect()
    }

    /// Allocate the hex string, reporting allocation failure instead of aborting.
    ///
    /// The buffer is sized for the digits plus a terminator, so the string
    /// can be handed to C-style consumers without reallocating.
    pub fn try_to_hex(&self) -> Result<String, OidError> {
        let mut s = String::new();
        s.try_reserve_exact(HEX_SIZE + 1)
            .map_err(|_| OidError::AllocationFailed)?;
        s.extend(self.hex().iter().map(|&b| b as char));
        Ok(s)
    }

    /// Compare only the first `len` hex digits of two ids.
    ///
    /// An odd `len` compares the high nibble of the last byte and ignores its
    /// low nibble. Lengths above 40 compare the whole id.
    pub fn prefix_eq(&self, other: &Self, len: usize) -> bool {
        let len = len.min(HEX_SIZE);
        let full = len / 2;
        if self.0[..full] != other.0[..full] {
            return false;
        }
        len % 2 == 0 || (self.0[full] ^ other.0[full]) & 0xf0 == 0
    }

    /// Number of leading hex digits two ids have in common (40 if equal).
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        match self.0.iter().zip(other.0.iter()).position(|(a, b)| a != b) {
            None => HEX_SIZE,
            Some(i) if (self.0[i] ^ other.0[i]) & 0xf0 == 0 => i * 2 + 1,
            Some(i) => i * 2,
        }
    }
}

impl From<[u8; RAW_SIZE]> for ObjectId {
    fn from(raw: [u8; RAW_SIZE]) -> Self {
        Self::from_raw(raw)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.hex();
        // hex digits are always ASCII
        f.write_str(std::str::from_utf8(&hex).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = OidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
