use sha2::{Digest, Sha256};

/// Deterministic draw stream: each block is `sha256(seed || counter_be)`,
/// of which the first 16 bytes become a big-endian u128.
///
/// The same stream drives both share generation and the shuffle, so a fixed
/// seed reproduces an allocation exactly.
pub struct DrawRng {
    seed: [u8; 32],
    counter: u64,
}

impl DrawRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    /// Derive a seed by absorbing length-prefixed parts into sha256.
    ///
    /// The length prefix keeps distinct part boundaries from colliding
    /// (`["ab", "c"]` vs `["a", "bc"]`).
    pub fn from_entropy(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update((part.len() as u64).to_be_bytes());
            hasher.update(part);
        }
        Self::from_seed(hasher.finalize().into())
    }

    fn next_block(&mut self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.seed);
        hasher.update(self.counter.to_be_bytes());
        self.counter += 1;
        hasher.finalize().into()
    }

    pub fn next_u128(&mut self) -> u128 {
        let block = self.next_block();
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&block[0..16]);
        u128::from_be_bytes(bytes)
    }

    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u128) -> u128 {
        debug_assert!(bound > 0);
        self.next_u128() % bound
    }

    /// Fisher–Yates shuffle driven by this stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i as u128 + 1) as usize;
            items.swap(i, j);
        }
    }
}
