//! Random string generators.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Domain appended to generated e-mail local parts.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Generate a string of exactly `length` characters from `[A-Za-z0-9]`.
///
/// Each character is drawn uniformly and independently. Not suitable for
/// anything security related.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// [`random_string`] using the calling thread's RNG.
pub fn generate_random_string(length: usize) -> String {
    random_string(&mut rand::thread_rng(), length)
}

/// Random e-mail address with a local part of `local_length` characters.
pub fn random_email<R: Rng + ?Sized>(rng: &mut R, local_length: usize) -> String {
    let mut email = random_string(rng, local_length);
    email.push('@');
    email.push_str(EMAIL_DOMAIN);
    email
}

/// `count` independent random strings of `length` characters.
pub fn random_strings<R: Rng + ?Sized>(rng: &mut R, count: usize, length: usize) -> Vec<String> {
    (0..count).map(|_| random_string(rng, length)).collect()
}
