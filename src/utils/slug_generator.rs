//! Random slug generation.
//!
//! Generated slugs are never checked against the store; uniqueness is enforced
//! only by the store's constraint at insertion time.

use rand::Rng;

/// Length of every generated slug.
pub const SLUG_LENGTH: usize = 5;

/// URL-safe alphabet: ASCII letters, digits, `_` and `-`.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random slug of [`SLUG_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 5);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
