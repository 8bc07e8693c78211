use log::{debug, error, warn};
use zeroize::Zeroizing;

use crate::{
    clipboard::Clipboard,
    error::Result,
    options::{CharacterClass, Options},
    password_generator::password_generator,
    strength::{password_strength, strength_level, strength_meter, StrengthLevel},
};

/// A user visible message raised by the widget, shown by the front-end without blocking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A toggle was rejected because it would have deselected every character class.
    InvalidOptions,
    Copied,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidOptions => "Invalid Options",
            Self::Copied => "Copied!",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidOptions => "At least one option must be selected.",
            Self::Copied => "Password copied to clipboard.",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::InvalidOptions)
    }
}

/// The state behind one password generator: the current options, the password generated from
/// them and whether that password has been copied.
pub struct PasswordWidget {
    options: Options,
    password: Zeroizing<String>,
    is_copied: bool,
    clipboard: Box<dyn Clipboard>,
}

impl std::fmt::Debug for PasswordWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PasswordWidget")
            .field("options", &self.options)
            .field("is_copied", &self.is_copied)
            .finish_non_exhaustive()
    }
}

impl PasswordWidget {
    pub fn new(options: Options, clipboard: Box<dyn Clipboard>) -> Result<Self> {
        Ok(Self {
            password: password_generator(&options)?,
            options,
            is_copied: false,
            clipboard,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied
    }

    pub fn score(&self) -> u32 {
        password_strength(&self.options)
    }

    pub fn strength(&self) -> &'static StrengthLevel {
        strength_level(self.score())
    }

    pub fn meter(&self) -> [bool; 4] {
        strength_meter(self.score())
    }

    /// Replaces the password with a fresh one from the current options.
    pub fn regenerate(&mut self) -> Result<()> {
        self.is_copied = false;
        self.password = password_generator(&self.options)?;
        debug!("regenerated password, strength {}", self.strength().label);
        Ok(())
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        self.options = self.options.with_length(length);
        self.regenerate()
    }

    /// Switches one character class on or off.
    ///
    /// A change that would leave no class selected is refused: the options stay as they were and
    /// `Notification::InvalidOptions` is returned for the front-end to show.
    pub fn toggle(&mut self, class: CharacterClass, enabled: bool) -> Result<Option<Notification>> {
        match self.options.with_class(class, enabled) {
            Ok(options) => {
                self.options = options;
                self.regenerate()?;
                Ok(None)
            }
            Err(err) => {
                warn!("refusing to set {} to {}: {}", class.key(), enabled, err);
                Ok(Some(Notification::InvalidOptions))
            }
        }
    }

    /// Copies the password to the clipboard.
    ///
    /// Clipboard failures are only logged, the copy is always reported as successful.
    pub fn copy(&mut self) -> Notification {
        if let Err(err) = self.clipboard.set_contents(&self.password) {
            error!("Failed to copy password: {err}");
        }
        self.is_copied = true;
        Notification::Copied
    }
}

#[cfg(test)]
#[path = "tests/widget.rs"]
mod tests;
