//! Readers and writers that hash the bytes passing through them.
//!
//! # Example
//!
//! ```rust
//! use std::io::Read;
//! use xxhash32::checksum::io::HashReader;
//!
//! let mut r = HashReader::new(&b"abc"[..], 0);
//! let mut out = Vec::new();
//! r.read_to_end(&mut out).unwrap();
//! assert_eq!(r.digest(), 0x32D153FF);
//! ```

use std::io::{self, Read, Write};

use super::xxh32::State32;

/// Wraps a reader; every byte read is also fed to an XXH32 state.
pub struct HashReader<R> {
    inner: R,
    hash: State32,
}

impl<R: Read> HashReader<R> {
    /// Creates a reader hashing with the given seed
    pub fn new(r: R, seed: u32) -> HashReader<R> {
        HashReader {
            inner: r,
            hash: State32::new(seed),
        }
    }

    /// Hash of the bytes read so far
    pub fn digest(&self) -> u32 {
        self.hash.digest()
    }

    /// Number of bytes read so far
    pub fn total_len(&self) -> u64 {
        self.hash.total_len()
    }

    /// Gets a reference to the wrapped reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Destroys this reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for HashReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hash.update(&buf[..n]);
        Ok(n)
    }
}

/// Wraps a writer; every byte accepted by the writer is also fed to an
/// XXH32 state.
pub struct HashWriter<W> {
    inner: W,
    hash: State32,
}

impl<W: Write> HashWriter<W> {
    /// Creates a writer hashing with the given seed
    pub fn new(w: W, seed: u32) -> HashWriter<W> {
        HashWriter {
            inner: w,
            hash: State32::new(seed),
        }
    }

    /// Hash of the bytes written so far
    pub fn digest(&self) -> u32 {
        self.hash.digest()
    }

    /// Gets a reference to the wrapped writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flushes and returns the wrapped writer along with the final digest.
    pub fn finish(mut self) -> io::Result<(W, u32)> {
        self.inner.flush()?;
        let digest = self.hash.digest();
        Ok((self.inner, digest))
    }
}

impl<W: Write> Write for HashWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Only what the inner writer took counts.
        let n = self.inner.write(buf)?;
        self.hash.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod test {
    use super::{HashReader, HashWriter};
    use crate::checksum::xxh32::hash;
    use rand::Rng;
    use std::io::{Read, Write};

    fn sample() -> Vec<u8> {
        (0..1000u32).map(|i| (i * 7 + i / 13) as u8).collect()
    }

    #[test]
    fn read_to_end() {
        let data = sample();
        let mut r = HashReader::new(&data[..], 11);
        let mut out = Vec::new();
        r.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
        assert_eq!(r.total_len(), data.len() as u64);
        assert_eq!(r.digest(), hash(&data, 11));
    }

    #[test]
    fn random_byte_lengths() {
        let data = sample();
        let mut r = HashReader::new(&data[..], 0);
        let mut buf = [0u8; 40];
        let mut rng = rand::thread_rng();
        loop {
            let len = rng.gen_range(1..=buf.len());
            match r.read(&mut buf[..len]) {
                Ok(0) => break,
                Ok(_) => (),
                Err(e) => panic!("error reading: {}", e),
            }
        }
        assert_eq!(r.digest(), hash(&data, 0));
    }

    #[test]
    fn write_through() {
        let data = sample();
        let mut w = HashWriter::new(Vec::new(), 3);
        for piece in data.chunks(33) {
            w.write_all(piece).unwrap();
        }
        let (out, digest) = w.finish().unwrap();
        assert_eq!(out, data);
        assert_eq!(digest, hash(&data, 3));
    }

    #[test]
    fn short_writes_hash_only_accepted_bytes() {
        let data = sample();
        let mut space = [0u8; 100];
        let mut w = HashWriter::new(&mut space[..], 0);
        let n = w.write(&data).unwrap();
        assert_eq!(n, 100);
        assert_eq!(w.digest(), hash(&data[..100], 0));
    }
}
