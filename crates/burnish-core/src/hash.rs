use xxhash_rust::xxh64::xxh64;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx] as char);
        value /= 62;
    }
    while result.len() < 11 {
        result.push('0');
    }
    result.iter().rev().collect()
}

/// Hash a source text. Used by the convergence loop to recognise a text it
/// has already produced during the same run.
pub fn content_hash(text: &str) -> String {
    base62_encode(xxh64(text.as_bytes(), 0))
}
