//! SHA-1 (FIPS 180-4), carried for legacy interop only.
//!
//! # Security
//!
//! SHA-1 has known collision attacks (SHAttered, 2017) and must not be used
//! for anything requiring collision resistance (signatures, content-
//! addressed storage, certificate hashing). It is included here purely
//! because some legacy protocols still require it for interop; nothing else
//! in this crate uses it internally.

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Incremental SHA-1 hasher.
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; BLOCK_LEN],
    filled: usize,
    len: u64,
}

impl Sha1 {
    /// Starts a new hash.
    pub fn new() -> Self {
        Sha1 {
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            filled: 0,
            len: 0,
        }
    }

    fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
        let mut w = [0u32; 80];
        for (i, word) in w.iter_mut().take(16).enumerate() {
            *word = u32::from_be_bytes(block[4 * i..4 * i + 4].try_into().unwrap());
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;
        for (i, &wi) in w.iter().enumerate() {
            let (f, k) = match i {
                0..=19 => ((b & c) | ((!b) & d), 0x5a827999u32),
                20..=39 => (b ^ c ^ d, 0x6ed9eba1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
    }

    /// Absorbs more input. May be called any number of times before
    /// [`Self::finish`].
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.filled).min(data.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
            if self.filled == BLOCK_LEN {
                let block = self.buffer;
                self.compress(&block);
                self.filled = 0;
            }
        }
    }

    /// Pads with the standard `0x80`-then-zeros-then-bit-length suffix and
    /// returns the 20-byte digest.
    pub fn finish(mut self) -> [u8; 20] {
        let bit_len = self.len.wrapping_mul(8);
        self.update(&[0x80]);
        while self.filled != 56 {
            self.update(&[0x00]);
        }
        let len_bytes = bit_len.to_be_bytes();
        // `update` would double-count `self.len`, so compress the final
        // block directly instead of routing the length suffix through it.
        self.buffer[56..64].copy_from_slice(&len_bytes);
        let block = self.buffer;
        self.compress(&block);

        let mut out = [0u8; 20];
        for (word, chunk) in self.state.iter().zip(out.chunks_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Convenience one-shot: hashes `data` and returns the digest.
    pub fn digest(data: &[u8]) -> [u8; 20] {
        let mut state = Self::new();
        state.update(data);
        state.finish()
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        assert_eq!(
            Sha1::digest(b""),
            [
                0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60,
                0x18, 0x90, 0xaf, 0xd8, 0x07, 0x09,
            ]
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            Sha1::digest(b"abc"),
            [
                0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50,
                0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
            ]
        );
    }

    #[test]
    fn multi_block_message() {
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(
            Sha1::digest(msg),
            [
                0x84, 0x98, 0x3e, 0x44, 0x1c, 0x3b, 0xd2, 0x6e, 0xba, 0xae, 0x4a, 0xa1, 0xf9, 0x51,
                0x29, 0xe5, 0xe5, 0x46, 0x70, 0xf1,
            ]
        );
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut incremental = Sha1::new();
        incremental.update(b"abc");
        incremental.update(b"def");
        assert_eq!(incremental.finish(), Sha1::digest(b"abcdef"));
    }
}
