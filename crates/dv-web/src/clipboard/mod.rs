//! Writing text to the system clipboard.
//!
//! Browsers expose an async clipboard API in secure contexts only; elsewhere
//! we fall back to selecting a hidden textarea and running the legacy `copy`
//! command. [`WithFallback`] picks between the two per write, so callers never
//! see which one ran.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::{AsyncClipboard, LegacyCopy, SystemClipboard, detect_async_clipboard, system_clipboard};

/// Which mechanism attempted the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    AsyncApi,
    LegacyCommand,
}

impl fmt::Display for CopyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyPath::AsyncApi => f.write_str("navigator.clipboard"),
            CopyPath::LegacyCommand => f.write_str("execCommand(\"copy\")"),
        }
    }
}

/// The clipboard rejected the write, or the write threw.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write via {path} failed: {cause}")]
pub struct ClipboardWriteFailure {
    path: CopyPath,
    cause: String,
}

impl ClipboardWriteFailure {
    pub fn new(path: CopyPath, cause: impl Into<String>) -> Self {
        Self {
            path,
            cause: cause.into(),
        }
    }

    pub fn path(&self) -> CopyPath {
        self.path
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

pub trait ClipboardWriter {
    /// Whether this writer can be used in the current environment.
    fn is_available(&self) -> bool {
        true
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardWriteFailure>>;
}

/// Uses `primary` when it reports itself available, `fallback` otherwise.
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardWriter for WithFallback<P, F> {
    fn is_available(&self) -> bool {
        self.primary.is_available() || self.fallback.is_available()
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardWriteFailure>> {
        if self.primary.is_available() {
            self.primary.write_text(text)
        } else {
            self.fallback.write_text(text)
        }
    }
}

/// Result of a capability probe that can only run once mounted in a live
/// document. Reads `false` until [`Capability::set`] is called.
#[derive(Debug, Clone, Default)]
pub struct Capability(Rc<Cell<bool>>);

impl Capability {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, supported: bool) {
        self.0.set(supported);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prose::testing::MemoryClipboard;
    use futures::executor::block_on;

    #[test]
    fn prefers_primary_when_available() {
        let primary = MemoryClipboard::new(CopyPath::AsyncApi);
        let fallback = primary.sibling(CopyPath::LegacyCommand);
        let writer = WithFallback::new(primary.clone(), fallback.clone());

        block_on(writer.write_text("fn main() {}")).unwrap();
        assert_eq!(primary.writes(), 1);
        assert_eq!(fallback.writes(), 0);
    }

    #[test]
    fn falls_back_when_primary_missing() {
        let primary = MemoryClipboard::new(CopyPath::AsyncApi);
        primary.set_available(false);
        let fallback = primary.sibling(CopyPath::LegacyCommand);
        let writer = WithFallback::new(primary.clone(), fallback.clone());

        block_on(writer.write_text("ls -la")).unwrap();
        assert_eq!(primary.writes(), 0);
        assert_eq!(fallback.writes(), 1);
        assert_eq!(primary.read().as_deref(), Some("ls -la"));
    }

    #[test]
    fn primary_rejection_is_not_retried() {
        let primary = MemoryClipboard::new(CopyPath::AsyncApi);
        primary.reject_writes(true);
        let fallback = primary.sibling(CopyPath::LegacyCommand);
        let writer = WithFallback::new(primary, fallback.clone());

        let err = block_on(writer.write_text("x")).unwrap_err();
        assert_eq!(err.path(), CopyPath::AsyncApi);
        assert_eq!(fallback.writes(), 0);
    }

    #[test]
    fn failure_message_names_path_and_cause() {
        let err = ClipboardWriteFailure::new(CopyPath::LegacyCommand, "copy command was rejected");
        assert_eq!(
            err.to_string(),
            "clipboard write via execCommand(\"copy\") failed: copy command was rejected"
        );
        assert_eq!(err.cause(), "copy command was rejected");
    }

    #[test]
    fn capability_defaults_to_unsupported() {
        let capability = Capability::default();
        let shared = capability.clone();
        assert!(!capability.get());
        shared.set(true);
        assert!(capability.get());
    }
}
