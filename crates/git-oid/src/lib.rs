//! Object identity for content-addressed object stores.
//!
//! This crate provides the fixed-size `ObjectId` type, hex encoding and
//! decoding, SHA-1 hashing of object content, and the `Shortener` that
//! computes the shortest hex prefix keeping a set of ids unambiguous.

mod error;
pub mod hex;
mod oid;
pub mod hasher;
pub mod shorten;

pub use error::OidError;
pub use oid::ObjectId;
pub use shorten::{Shortener, ShortenerOptions};

/// Size in bytes of a raw object id.
pub const RAW_SIZE: usize = 20;

/// Size in characters of a hex formatted object id.
pub const HEX_SIZE: usize = RAW_SIZE * 2;

/// Size of the loose-object path form (`aa/` + 38 digits).
pub const PATH_SIZE: usize = HEX_SIZE + 1;

/// Minimum length, in hex digits, of an object id prefix.
pub const MIN_PREFIX_LEN: usize = 4;

/// Number of distinct ids a `Shortener` accepts unless configured otherwise.
pub const DEFAULT_SHORTENER_CAPACITY: usize = 22_000;
