use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xxhash_rust::xxh3::{xxh3_64, xxh3_128};

use super::PairHasher;

/// Splits one XXH3-128 digest into its low and high 64-bit halves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3Split;

impl PairHasher for Xxh3Split {
    #[inline]
    fn hash_pair(&self, element: &[u8]) -> (u64, u64) {
        let digest = xxh3_128(element);
        (digest as u64, (digest >> 64) as u64)
    }
}

/// Splits one MurmurHash3 x64-128 digest (seed 0) into `(h1, h2)`.
///
/// `h1` is the low half of the `u128` returned by the `murmur3` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Split;

impl PairHasher for Murmur3Split {
    #[inline]
    fn hash_pair(&self, element: &[u8]) -> (u64, u64) {
        let digest = murmur3_128(element);
        (digest as u64, (digest >> 64) as u64)
    }
}

/// Combines two unrelated 64-bit hashes: XXH3-64 and the `h1` word of MurmurHash3 x64-128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3Murmur3;

impl PairHasher for Xxh3Murmur3 {
    #[inline]
    fn hash_pair(&self, element: &[u8]) -> (u64, u64) {
        (xxh3_64(element), murmur3_128(element) as u64)
    }
}

fn murmur3_128(element: &[u8]) -> u128 {
    let mut reader = element;
    murmur3::murmur3_x64_128(&mut reader, 0).expect("reading a byte slice is infallible")
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown hash function `{0}` (expected one of: xxh3-128, murmur3-128, xxh3-murmur3)")]
pub struct UnknownHashKind(pub String);

/// The providers selectable by name, e.g. from the command line or a stored signature file.
///
/// `HashKind` is itself a [`PairHasher`] that forwards to the selected provider, so an engine can
/// be parameterised over it when the choice is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HashKind {
    #[default]
    #[serde(rename = "xxh3-128")]
    Xxh3,
    #[serde(rename = "murmur3-128")]
    Murmur3,
    #[serde(rename = "xxh3-murmur3")]
    Xxh3Murmur3,
}

impl HashKind {
    pub fn name(&self) -> &'static str {
        match self {
            HashKind::Xxh3 => "xxh3-128",
            HashKind::Murmur3 => "murmur3-128",
            HashKind::Xxh3Murmur3 => "xxh3-murmur3",
        }
    }
}

impl PairHasher for HashKind {
    #[inline]
    fn hash_pair(&self, element: &[u8]) -> (u64, u64) {
        match self {
            HashKind::Xxh3 => Xxh3Split.hash_pair(element),
            HashKind::Murmur3 => Murmur3Split.hash_pair(element),
            HashKind::Xxh3Murmur3 => Xxh3Murmur3.hash_pair(element),
        }
    }
}

impl FromStr for HashKind {
    type Err = UnknownHashKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xxh3-128" => Ok(HashKind::Xxh3),
            "murmur3-128" => Ok(HashKind::Murmur3),
            "xxh3-murmur3" => Ok(HashKind::Xxh3Murmur3),
            other => Err(UnknownHashKind(other.to_string())),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
