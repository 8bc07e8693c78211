use super::*;

use crate::options::Options;

#[test]
fn password_strength_weak_example() {
    let options = Options::new(12, false, true, false, false).unwrap();

    let score = password_strength(&options);

    assert_eq!(14, score);
    assert_eq!("Weak", strength_level(score).label);
}

#[test]
fn password_strength_strong_example() {
    let options = Options::new(20, true, true, true, true).unwrap();

    let score = password_strength(&options);

    assert_eq!(28, score);
    assert_eq!("Strong", strength_level(score).label);
}

#[test]
fn password_strength_counts_every_class() {
    for length in [8, 33, 100] {
        for mask in 1..16u8 {
            let flags = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0];
            let options = Options::new(length, flags[0], flags[1], flags[2], flags[3]).unwrap();
            let enabled = flags.iter().filter(|f| **f).count() as u32;

            assert_eq!(length as u32 + 2 * enabled, password_strength(&options));
        }
    }
}

#[test]
fn password_strength_is_deterministic() {
    let options = Options::new(17, true, false, true, false).unwrap();

    assert_eq!(password_strength(&options), password_strength(&options));
    assert_eq!(
        strength_level(password_strength(&options)),
        strength_level(password_strength(&options))
    );
}

#[test]
fn strength_level_boundaries() {
    for score in 0..=8 {
        assert_eq!("Too Weak", strength_level(score).label);
    }
    for score in 9..=16 {
        assert_eq!("Weak", strength_level(score).label);
    }
    for score in 17..=24 {
        assert_eq!("Medium", strength_level(score).label);
    }
    for score in [25, 26, 108, u32::MAX] {
        assert_eq!("Strong", strength_level(score).label);
    }
}

#[test]
fn strength_levels_colors() {
    let colors: String = STRENGTH_LEVELS.iter().map(|l| l.color.as_char()).collect();

    assert_eq!("royg", colors);
}

#[test]
fn strength_meter_bars() {
    assert_eq!([false, false, false, false], strength_meter(7));
    assert_eq!([true, false, false, false], strength_meter(8));
    assert_eq!([true, true, false, false], strength_meter(16));
    assert_eq!([true, true, true, false], strength_meter(31));
    assert_eq!([true, true, true, true], strength_meter(32));
}
