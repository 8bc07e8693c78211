use crate::options::{Options, CHARACTER_CLASSES};

/// The points each enabled character class adds to the score.
const CLASS_BONUS: u32 = 2;
/// Width of one band of the strength meter.
const BAND_WIDTH: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    Green,
}

impl ColorTag {
    pub fn as_char(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::Green => 'g',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthLevel {
    pub label: &'static str,
    pub color: ColorTag,
}

pub static STRENGTH_LEVELS: [StrengthLevel; 4] = [
    StrengthLevel {
        label: "Too Weak",
        color: ColorTag::Red,
    },
    StrengthLevel {
        label: "Weak",
        color: ColorTag::Orange,
    },
    StrengthLevel {
        label: "Medium",
        color: ColorTag::Yellow,
    },
    StrengthLevel {
        label: "Strong",
        color: ColorTag::Green,
    },
];

/// Heuristic score: the length plus two points for every enabled character class.
pub fn password_strength(options: &Options) -> u32 {
    let bonus: u32 = CHARACTER_CLASSES
        .iter()
        .filter(|(class, _)| options.is_enabled(*class))
        .map(|_| CLASS_BONUS)
        .sum();

    options.length() as u32 + bonus
}

pub fn strength_level(score: u32) -> &'static StrengthLevel {
    match score {
        0..=8 => &STRENGTH_LEVELS[0],
        9..=16 => &STRENGTH_LEVELS[1],
        17..=24 => &STRENGTH_LEVELS[2],
        _ => &STRENGTH_LEVELS[3],
    }
}

/// Which of the four meter bars are lit for `score`, bar `i` lights up from `(i + 1) * 8`.
pub fn strength_meter(score: u32) -> [bool; 4] {
    let mut bars = [false; 4];
    for (i, bar) in bars.iter_mut().enumerate() {
        *bar = score >= (i as u32 + 1) * BAND_WIDTH;
    }
    bars
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod tests;
