use super::*;

use crate::{
    options::{CharacterClass, Options},
    test_helpers::MockClipboard,
};

fn widget(clipboard: &MockClipboard) -> PasswordWidget {
    PasswordWidget::new(Options::default(), Box::new(clipboard.clone())).unwrap()
}

#[test]
fn new_generates_password() {
    let w = widget(&MockClipboard::new());

    assert_eq!(12, w.password().len());
    assert!(!w.is_copied());
    assert_eq!(14, w.score());
    assert_eq!("Weak", w.strength().label);
    assert_eq!([true, false, false, false], w.meter());
}

#[test]
fn toggle_last_class_is_rejected() -> Result<()> {
    let mut w = widget(&MockClipboard::new());
    let password = w.password().to_owned();

    let notification = w.toggle(CharacterClass::Lowercase, false)?;

    assert_eq!(Some(Notification::InvalidOptions), notification);
    assert_eq!(&Options::default(), w.options());
    assert_eq!(password, w.password());

    Ok(())
}

#[test]
fn toggle_accepted_regenerates() -> Result<()> {
    let mut w = widget(&MockClipboard::new());
    w.copy();

    let notification = w.toggle(CharacterClass::Numbers, true)?;

    assert_eq!(None, notification);
    assert!(w.options().numbers());
    assert!(!w.is_copied());
    assert_eq!(16, w.score());

    Ok(())
}

#[test]
fn set_length_clamps_and_regenerates() -> Result<()> {
    let mut w = widget(&MockClipboard::new());

    w.set_length(200)?;
    assert_eq!(100, w.password().len());

    w.set_length(2)?;
    assert_eq!(8, w.password().len());
    // one class is always enabled, so the lowest reachable score is 8 + 2
    assert_eq!(10, w.score());
    assert_eq!("Weak", w.strength().label);

    Ok(())
}

#[test]
fn copy_writes_clipboard() {
    let clipboard = MockClipboard::new();
    let mut w = widget(&clipboard);

    let notification = w.copy();

    assert_eq!(Notification::Copied, notification);
    assert!(w.is_copied());
    assert_eq!(Some(w.password().to_owned()), *clipboard.contents.borrow());
}

#[test]
fn copy_failure_still_reports_copied() {
    let clipboard = MockClipboard::new().with_set_contents_error("no display");
    let mut w = widget(&clipboard);

    let notification = w.copy();

    assert_eq!(Notification::Copied, notification);
    assert!(w.is_copied());
    assert_eq!(None, *clipboard.contents.borrow());
}

#[test]
fn regenerate_clears_copied() -> Result<()> {
    let mut w = widget(&MockClipboard::new());
    w.copy();

    w.regenerate()?;

    assert!(!w.is_copied());

    Ok(())
}

#[test]
fn notification_texts() {
    assert_eq!("Invalid Options", Notification::InvalidOptions.title());
    assert_eq!(
        "At least one option must be selected.",
        Notification::InvalidOptions.description()
    );
    assert!(Notification::InvalidOptions.is_destructive());
    assert_eq!("Copied!", Notification::Copied.title());
    assert_eq!(
        "Password copied to clipboard.",
        Notification::Copied.description()
    );
    assert!(!Notification::Copied.is_destructive());
}
