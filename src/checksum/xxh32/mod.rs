/*!

XXH32, a fast non-cryptographic 32-bit hash.

Input is consumed in 16-byte blocks spread over four independent lanes, and
whatever is left over is folded in at digest time. Feeding a `State32` the
same bytes always yields the same digest, however the bytes were split
between calls.

# Example

```rust
use xxhash32::checksum::xxh32;

let mut state = xxh32::State32::new(0);
state.update(b"abra");
state.update(b"cadabra");
assert_eq!(state.digest(), xxh32::hash(b"abracadabra", 0));
```

A `State32` must not be updated from several threads at once; the `&mut self`
receivers make the caller hold exclusive access.

*/

use std::hash::{BuildHasher, Hasher};
use std::io;
use std::slice;

use self::round::{finalize, Accumulator, BLOCK_LEN};
use crate::Error;

pub mod round;

pub use self::round::{PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5};

/// Hashes `input` in one go. Equivalent to a fresh `State32` with the same
/// seed, updated once with `input`.
pub fn hash(input: &[u8], seed: u32) -> u32 {
    let mut acc = Accumulator::new(seed);
    let tail = acc.mix_blocks(input);
    finalize(&acc, input.len() as u64, tail, seed)
}

/// Streaming XXH32 state
#[derive(Clone, Debug)]
pub struct State32 {
    seed: u32,
    acc: Accumulator,
    buf: [u8; BLOCK_LEN],
    buf_len: usize,
    total_len: u64,
}

impl State32 {
    /// Create a new state for the given seed
    pub fn new(seed: u32) -> State32 {
        State32 {
            seed: seed,
            acc: Accumulator::new(seed),
            buf: [0; BLOCK_LEN],
            buf_len: 0,
            total_len: 0,
        }
    }

    /// Restart hashing with a new seed, forgetting all input fed so far
    pub fn reset(&mut self, seed: u32) {
        trace!("xxh32 reset, seed {:#010x}", seed);
        *self = State32::new(seed);
    }

    /// Mutate the state for given data
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        if self.buf_len + input.len() < BLOCK_LEN {
            let end = self.buf_len + input.len();
            self.buf[self.buf_len..end].copy_from_slice(input);
            self.buf_len = end;
            return;
        }

        // Complete the pending block before going straight to the input.
        if self.buf_len > 0 {
            let (head, rest) = input.split_at(BLOCK_LEN - self.buf_len);
            self.buf[self.buf_len..].copy_from_slice(head);
            self.acc.mix_block(&self.buf);
            input = rest;
        }

        let tail = self.acc.mix_blocks(input);
        self.buf[..tail.len()].copy_from_slice(tail);
        self.buf_len = tail.len();
    }

    /// Same as `update`, for input handed over as a raw pointer and a length.
    ///
    /// A null pointer is accepted only together with a zero length; anything
    /// else is rejected with `Error::InvalidInput` and the state is left as
    /// it was.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must be valid for reads of `len` bytes.
    pub unsafe fn update_raw(&mut self, ptr: *const u8, len: usize) -> Result<(), Error> {
        if len == 0 {
            return Ok(());
        }
        if ptr.is_null() {
            debug!("xxh32 update rejected: null input with length {}", len);
            return Err(Error::InvalidInput);
        }
        self.update(slice::from_raw_parts(ptr, len));
        Ok(())
    }

    /// Hash of everything fed since the last reset. The state is not
    /// consumed, so more data may follow.
    pub fn digest(&self) -> u32 {
        finalize(&self.acc, self.total_len, &self.buf[..self.buf_len], self.seed)
    }

    /// Alias of `update`
    pub fn feed(&mut self, buf: &[u8]) {
        self.update(buf)
    }

    /// Alias of `digest`
    pub fn result(&self) -> u32 {
        self.digest()
    }

    /// Seed this state was last reset with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of bytes fed since the last reset
    pub fn total_len(&self) -> u64 {
        self.total_len
    }
}

impl Default for State32 {
    fn default() -> State32 {
        State32::new(0)
    }
}

impl Hasher for State32 {
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }

    fn finish(&self) -> u64 {
        self.digest() as u64
    }
}

impl io::Write for State32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds seeded `State32` hashers, e.g. for `HashMap::with_hasher`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildXxHash32 {
    seed: u32,
}

impl BuildXxHash32 {
    /// Hashers built from this will all start from `seed`
    pub fn with_seed(seed: u32) -> BuildXxHash32 {
        BuildXxHash32 { seed: seed }
    }
}

impl BuildHasher for BuildXxHash32 {
    type Hasher = State32;

    fn build_hasher(&self) -> State32 {
        State32::new(self.seed)
    }
}
