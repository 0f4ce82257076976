//! Random alias generation.
//!
//! Aliases are drawn uniformly from the 62-symbol alphanumeric alphabet. With
//! the default length of 6 there are 62^6 (about 5.6 * 10^10) possible aliases,
//! so collisions are rare and are handled by regeneration rather than by
//! reserving keys up front.

use rand::Rng;

/// Upper-case letters, lower-case letters and digits.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default alias length.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Aliases that would be shadowed by fixed HTTP routes.
pub const RESERVED_ALIASES: &[&str] = &["health", "shorten", "stats"];

/// Generates a random alias of `length` characters using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use short_alias::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    generate_alias_with(&mut rand::rng(), length)
}

/// Generates a random alias from the provided RNG.
pub fn generate_alias_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if the alias collides with a fixed route segment.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}
