use super::*;

impl std::cmp::PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        format!("{:?}", self) == format!("{:?}", *other)
    }
}

#[test]
fn default_is_lowercase_only() {
    let options = Options::default();

    assert_eq!(12, options.length());
    assert!(!options.uppercase());
    assert!(options.lowercase());
    assert!(!options.numbers());
    assert!(!options.symbols());
    assert_eq!(1, options.enabled_count());
}

#[test]
fn new_all_classes_disabled() {
    let result = Options::new(12, false, false, false, false);

    assert_eq!(result.unwrap_err(), Error::NoCharacterClass);
}

#[test]
fn new_clamps_length() {
    assert_eq!(8, Options::new(0, true, false, false, false).unwrap().length());
    assert_eq!(8, Options::new(8, true, false, false, false).unwrap().length());
    assert_eq!(100, Options::new(100, true, false, false, false).unwrap().length());
    assert_eq!(100, Options::new(1000, true, false, false, false).unwrap().length());
}

#[test]
fn with_class_rejects_last_class() {
    let options = Options::default();

    let result = options.with_class(CharacterClass::Lowercase, false);

    assert_eq!(result.unwrap_err(), Error::NoCharacterClass);
    assert_eq!(Options::default(), options);
}

#[test]
fn with_class_enable_then_disable_lowercase() -> Result<()> {
    let options = Options::default().with_class(CharacterClass::Symbols, true)?;
    let options = options.with_class(CharacterClass::Lowercase, false)?;

    assert!(options.symbols());
    assert!(!options.lowercase());
    assert_eq!(1, options.enabled_count());

    Ok(())
}

#[test]
fn with_class_setting_same_value_is_accepted() -> Result<()> {
    let options = Options::default().with_class(CharacterClass::Lowercase, true)?;

    assert_eq!(Options::default(), options);

    Ok(())
}

#[test]
fn with_class_each_class() -> Result<()> {
    let mut options = Options::default();
    for (class, _) in CHARACTER_CLASSES.iter() {
        options = options.with_class(*class, true)?;
        assert!(options.is_enabled(*class));
    }

    assert_eq!(4, options.enabled_count());

    Ok(())
}

#[test]
fn with_length_clamps() {
    let options = Options::default();

    assert_eq!(8, options.with_length(3).length());
    assert_eq!(42, options.with_length(42).length());
    assert_eq!(100, options.with_length(101).length());
}

#[test]
fn character_classes_labels() {
    let labels: Vec<&str> = CHARACTER_CLASSES.iter().map(|(_, l)| *l).collect();

    assert_eq!(
        vec![
            "Include Uppercase",
            "Include Lowercase",
            "Include Numbers",
            "Include Symbols"
        ],
        labels
    );
}
