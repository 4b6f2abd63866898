/// A deterministic function from a byte sequence to a pair of 64-bit values.
///
/// The two outputs must behave as independent hashes of the element: the engine derives every
/// signature slot from the linear combination `v1 + i * v2`, so a provider returning correlated
/// halves (or a constant second value) collapses all slots onto the same permutation.
///
/// Any closure or function of shape `Fn(&[u8]) -> (u64, u64)` is a `PairHasher`:
///
/// ```
/// use minwise::hashing::PairHasher;
///
/// let hasher = |bytes: &[u8]| (bytes.len() as u64, 7u64);
/// assert_eq!(hasher.hash_pair(b"abc"), (3, 7));
/// ```
pub trait PairHasher {
    fn hash_pair(&self, element: &[u8]) -> (u64, u64);
}

impl<F> PairHasher for F
where
    F: Fn(&[u8]) -> (u64, u64),
{
    #[inline]
    fn hash_pair(&self, element: &[u8]) -> (u64, u64) {
        self(element)
    }
}
