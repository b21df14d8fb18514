//! Random short code generation for links created without a custom slug.

use rand::Rng;

/// Characters a generated short code may contain.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric short code of `length` characters.
///
/// The caller supplies the random source so that one process-wide generator
/// can be shared (and replaced by a seeded one in tests).
///
/// # Examples
///
/// ```ignore
/// let mut rng = rand::rng();
/// let code = generate_code(&mut rng, 6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
