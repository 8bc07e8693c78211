use log::debug;
use rand::Rng;
use zeroize::Zeroizing;

use crate::{
    error::{Error, Result},
    options::Options,
};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*_-+=";

/// Builds the alphabet a password is sampled from.
///
/// Lowercase letters are always part of the alphabet, whatever the `lowercase` flag says, so the
/// result is never empty.
pub fn character_set(options: &Options) -> String {
    let mut characters = String::from(LOWERCASE);
    if options.uppercase() {
        characters.push_str(UPPERCASE);
    }
    if options.numbers() {
        characters.push_str(NUMBERS);
    }
    if options.symbols() {
        characters.push_str(SYMBOLS);
    }
    characters
}

/// Draws `length` characters from `alphabet`, each one picked independently and uniformly.
pub fn generate_with<R: Rng + ?Sized>(alphabet: &str, length: usize, rng: &mut R) -> Result<String> {
    let characters: Vec<char> = alphabet.chars().collect();
    if characters.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    Ok((0..length)
        .map(|_| characters[rng.gen_range(0..characters.len())])
        .collect())
}

/// Generates a new password for `options` using the thread local cryptographically secure
/// generator. The returned buffer is wiped when dropped.
pub fn password_generator(options: &Options) -> Result<Zeroizing<String>> {
    let alphabet = character_set(options);
    debug!(
        "generating a password of length {} from {} characters",
        options.length(),
        alphabet.chars().count()
    );

    let mut rng = rand::thread_rng();
    Ok(Zeroizing::new(generate_with(
        &alphabet,
        options.length(),
        &mut rng,
    )?))
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod tests;
