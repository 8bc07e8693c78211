use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 12;

/// One of the toggleable groups of characters a password can be drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// The key used for this class in the settings file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
        }
    }
}

/// The character classes in display order, together with the label shown next to their checkbox.
pub const CHARACTER_CLASSES: [(CharacterClass, &str); 4] = [
    (CharacterClass::Uppercase, "Include Uppercase"),
    (CharacterClass::Lowercase, "Include Lowercase"),
    (CharacterClass::Numbers, "Include Numbers"),
    (CharacterClass::Symbols, "Include Symbols"),
];

/// The parameters a password is generated from.
///
/// An `Options` value always has at least one character class enabled and a length inside
/// `MIN_LENGTH..=MAX_LENGTH`, the constructors and transitions refuse or clamp anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    length: usize,
    uppercase: bool,
    lowercase: bool,
    numbers: bool,
    symbols: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: false,
            lowercase: true,
            numbers: false,
            symbols: false,
        }
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

impl Options {
    pub fn new(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> Result<Self> {
        if !(uppercase || lowercase || numbers || symbols) {
            return Err(Error::NoCharacterClass);
        }

        Ok(Self {
            length: clamp_length(length),
            uppercase,
            lowercase,
            numbers,
            symbols,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn numbers(&self) -> bool {
        self.numbers
    }

    pub fn symbols(&self) -> bool {
        self.symbols
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn enabled_count(&self) -> usize {
        CHARACTER_CLASSES
            .iter()
            .filter(|(class, _)| self.is_enabled(*class))
            .count()
    }

    /// Returns a copy with `class` switched to `enabled`.
    ///
    /// Fails with `Error::NoCharacterClass` if that would leave every class deselected, in which
    /// case the caller keeps its current options.
    pub fn with_class(&self, class: CharacterClass, enabled: bool) -> Result<Self> {
        let mut next = *self;
        match class {
            CharacterClass::Uppercase => next.uppercase = enabled,
            CharacterClass::Lowercase => next.lowercase = enabled,
            CharacterClass::Numbers => next.numbers = enabled,
            CharacterClass::Symbols => next.symbols = enabled,
        }

        if next.enabled_count() == 0 {
            return Err(Error::NoCharacterClass);
        }

        Ok(next)
    }

    /// Length changes are always accepted, out of range values are clamped.
    pub fn with_length(&self, length: usize) -> Self {
        Self {
            length: clamp_length(length),
            ..*self
        }
    }
}

#[cfg(test)]
#[path = "tests/options.rs"]
mod tests;
