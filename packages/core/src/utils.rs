// ABOUTME: Shared utility functions for Cookbook
// ABOUTME: Random suffix generation for slug disambiguation

use rand::Rng;

/// Suffix length appended to a tag name when deriving its slug.
pub const SLUG_SUFFIX_LEN: usize = 5;

/// Generate a random alphanumeric suffix of exactly `length` characters.
///
/// Draws uniformly from A-Z, a-z and 0-9 using the thread-local RNG, so
/// concurrent callers never observe a shared counter or clock-derived
/// sequence.
pub fn next_suffix(length: usize) -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
