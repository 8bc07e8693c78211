use crate::error::Result;

/// Somewhere a generated password can be copied to.
pub trait Clipboard {
    fn set_contents(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the desktop session, a new handle is opened for every write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, text: &str) -> Result<()> {
        let mut ctx = arboard::Clipboard::new()?;
        ctx.set_text(text)?;
        Ok(())
    }
}
