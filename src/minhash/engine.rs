use std::fmt;

use crate::hashing::PairHasher;
use crate::minhash::MinHashError;

/// A MinHash signature bound to the hash function that produces it.
///
/// Slot `i` holds the minimum of `v1 + i * v2` (wrapping) over every pushed element, where
/// `(v1, v2)` is the pair returned by the hasher for that element. A fresh signature is all
/// `u64::MAX`, the identity of `min`.
///
/// The signature length is fixed at construction. The engine compares sizes but cannot tell
/// whether two engines use equivalent hashers; mixing hashers yields meaningless estimates.
///
/// # Example
/// ```
/// use minwise::{hashing::Xxh3Split, minhash::MinHash};
///
/// let mut a = MinHash::new(Xxh3Split, 64);
/// let mut b = MinHash::new(Xxh3Split, 64);
/// a.push_strings(["the", "quick", "brown", "fox"]);
/// b.push_strings(["the", "quick", "brown", "dog"]);
///
/// let estimate = a.similarity(&b).unwrap();
/// assert!((0.0..=1.0).contains(&estimate));
/// ```
#[derive(Clone)]
pub struct MinHash<H> {
    signature: Vec<u64>,
    hasher: H,
}

impl<H: PairHasher> MinHash<H> {
    /// Creates an empty-set signature of `size` slots bound to `hasher`.
    ///
    /// # Panics
    /// Panics if `size == 0`
    pub fn new(hasher: H, size: usize) -> Self {
        assert!(size > 0, "signature size must be positive");
        MinHash {
            signature: vec![u64::MAX; size],
            hasher,
        }
    }

    /// Creates an engine holding an independent copy of `signature`.
    ///
    /// Used to resume from a signature computed earlier. The caller keeps ownership of its
    /// slice; later pushes or merges never write through to it.
    ///
    /// # Panics
    /// Panics if `signature` is empty
    pub fn from_signature(hasher: H, signature: &[u64]) -> Self {
        assert!(!signature.is_empty(), "signature size must be positive");
        MinHash {
            signature: signature.to_vec(),
            hasher,
        }
    }

    /// Adds one element to the set represented by this signature.
    ///
    /// The hasher runs once; slot `i` then sees `v1 + i * v2` computed modulo 2^64. Pushing an
    /// element that is already a member leaves the signature unchanged.
    pub fn push(&mut self, element: &[u8]) {
        let (v1, v2) = self.hasher.hash_pair(element);

        let mut simulated = v1;
        for slot in self.signature.iter_mut() {
            if simulated < *slot {
                *slot = simulated;
            }
            simulated = simulated.wrapping_add(v2);
        }
    }

    /// Pushes every element of `elements`, in order.
    pub fn push_all<I, B>(&mut self, elements: I)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        for element in elements {
            self.push(element.as_ref());
        }
    }

    /// Pushes the UTF-8 bytes of every string in `items`, in order.
    pub fn push_strings<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.push(item.as_ref().as_bytes());
        }
    }

    /// Folds `other` into this signature, which then represents the union of both sets.
    ///
    /// `other` is left untouched.
    ///
    /// # Errors
    /// Returns [`MinHashError::SignatureSizeMismatch`] when the sizes differ; the receiver is
    /// not modified in that case.
    pub fn merge(&mut self, other: &MinHash<H>) -> Result<(), MinHashError> {
        self.check_size(other)?;
        for (mine, &theirs) in self.signature.iter_mut().zip(other.signature.iter()) {
            if theirs < *mine {
                *mine = theirs;
            }
        }
        Ok(())
    }

    /// Estimates the Jaccard similarity between the sets behind `self` and `other`.
    ///
    /// The estimate is the fraction of slots holding equal values, always within `[0.0, 1.0]`.
    ///
    /// # Errors
    /// Returns [`MinHashError::SignatureSizeMismatch`] when the sizes differ, before looking
    /// at any slot.
    pub fn similarity(&self, other: &MinHash<H>) -> Result<f64, MinHashError> {
        self.check_size(other)?;
        let matching = self
            .signature
            .iter()
            .zip(other.signature.iter())
            .filter(|(a, b)| a == b)
            .count();
        Ok(matching as f64 / self.signature.len() as f64)
    }

    fn check_size(&self, other: &MinHash<H>) -> Result<(), MinHashError> {
        if self.signature.len() != other.signature.len() {
            return Err(MinHashError::SignatureSizeMismatch {
                expected: self.signature.len(),
                found: other.signature.len(),
            });
        }
        Ok(())
    }
}

impl<H> MinHash<H> {
    /// Current per-slot minimums.
    pub fn signature(&self) -> &[u64] {
        &self.signature
    }

    /// Consumes the engine, handing back its signature.
    pub fn into_signature(self) -> Vec<u64> {
        self.signature
    }

    /// Number of slots in the signature.
    pub fn len(&self) -> usize {
        self.signature.len()
    }

    /// Always false: signatures have at least one slot.
    pub fn is_empty(&self) -> bool {
        self.signature.is_empty()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H> fmt::Debug for MinHash<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHash")
            .field("size", &self.signature.len())
            .finish_non_exhaustive()
    }
}
