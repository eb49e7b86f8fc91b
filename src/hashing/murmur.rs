//! MurmurHash3, x86 32-bit and x64 128-bit variants, seed 0.
//!
//! MurmurHash3 was written by Austin Appleby and placed in the public domain.
//! The output must match the reference implementation exactly since the
//! service computes the same hashes on its side.

const C1_32: u32 = 0xcc9e2d51;
const C2_32: u32 = 0x1b873593;

const C1_64: u64 = 0x87c37b91114253d5;
const C2_64: u64 = 0x4cf5ad432745937f;

/// Little-endian word from up to 8 bytes; missing high bytes are zero.
fn read_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

fn mix_k32(k: u32) -> u32 {
    k.wrapping_mul(C1_32)
        .rotate_left(15)
        .wrapping_mul(C2_32)
}

/// MurmurHash3_x86_32 with seed 0.
pub fn murmur_hash32(data: &[u8]) -> u32 {
    let mut h: u32 = 0;

    let blocks = data.chunks_exact(4);
    let tail = blocks.remainder();
    for block in blocks {
        h ^= mix_k32(read_le(block) as u32);
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xe6546b64);
    }

    if !tail.is_empty() {
        h ^= mix_k32(read_le(tail) as u32);
    }

    h ^= data.len() as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1_64)
        .rotate_left(31)
        .wrapping_mul(C2_64)
}

fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2_64)
        .rotate_left(33)
        .wrapping_mul(C1_64)
}

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

/// MurmurHash3_x64_128 with seed 0, returned as `(h1, h2)`.
pub fn murmur_hash3_x64_128(data: &[u8]) -> (u64, u64) {
    let mut h1: u64 = 0;
    let mut h2: u64 = 0;

    let blocks = data.chunks_exact(16);
    let tail = blocks.remainder();
    for block in blocks {
        let (lo, hi) = block.split_at(8);

        h1 ^= mix_k1(read_le(lo));
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= mix_k2(read_le(hi));
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    if tail.len() > 8 {
        h2 ^= mix_k2(read_le(&tail[8..]));
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(read_le(&tail[..tail.len().min(8)]));
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur32_empty_input() {
        assert_eq!(murmur_hash32(b""), 0);
    }

    #[test]
    fn test_murmur32_reference_vectors() {
        assert_eq!(murmur_hash32(b"hello"), 0x248bfa47);
        assert_eq!(
            murmur_hash32(b"The quick brown fox jumps over the lazy dog"),
            0x2e4ff723
        );
    }

    #[test]
    fn test_murmur32_every_tail_length() {
        assert_eq!(murmur_hash32(b"a"), 0x3c2569b2);
        assert_eq!(murmur_hash32(b"ab"), 0x9bbfd75f);
        assert_eq!(murmur_hash32(b"abc"), 0xb3dd93fa);
        assert_eq!(murmur_hash32(b"abcd"), 0x43ed676a);
    }

    #[test]
    fn test_murmur128_reference_vectors() {
        assert_eq!(murmur_hash3_x64_128(b""), (0, 0));
        assert_eq!(
            murmur_hash3_x64_128(b"hello"),
            (0xcbd8a7b341bd9b02, 0x5b1e906a48ae1d19)
        );
        assert_eq!(
            murmur_hash3_x64_128(b"The quick brown fox jumps over the lazy dog"),
            (0xe34bbc7bbc071b6c, 0x7a433ca9c49a9347)
        );
    }

    #[test]
    fn test_read_le_partial_word() {
        assert_eq!(read_le(&[0x01, 0x02, 0x03]), 0x030201);
        assert_eq!(read_le(&[]), 0);
    }
}
