//! Attribute file access — the seam between LED operations and the filesystem.

use std::fs::File;
use std::io::Write;
use std::path::Path;

// ── Trait ──

pub trait AttributeWriter {
    /// Truncate `path` and write `content` as raw bytes.
    fn write_attr(&self, path: &Path, content: &str) -> std::io::Result<()>;
    /// Read the whole contents of `path`.
    fn read_attr(&self, path: &Path) -> std::io::Result<String>;
}

// ── Real filesystem ──

/// Writes straight to the attribute files. The handle is dropped on every
/// exit path, so nothing stays open between calls.
///
/// `File` closes on drop and discards any close error, so only open and write
/// failures reach the caller. The LED class driver applies the value during
/// `write`, not on close.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsWriter;

impl AttributeWriter for SysfsWriter {
    fn write_attr(&self, path: &Path, content: &str) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())
    }

    fn read_attr(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

// ── Mock ──

pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory writer for tests. Records every write in order and serves
    /// reads from `files`, which writes also update.
    #[derive(Default)]
    pub struct RecordingWriter {
        /// Recorded writes: (path, content).
        pub writes: RefCell<Vec<(PathBuf, String)>>,
        /// Current file contents: path → content.
        pub files: RefCell<HashMap<PathBuf, String>>,
        /// If true, `write_attr` returns a permission error and records nothing.
        pub fail_writes: Cell<bool>,
    }

    impl RecordingWriter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a file so `read_attr` can return it.
        pub fn insert_file(&self, path: impl Into<PathBuf>, content: &str) {
            self.files.borrow_mut().insert(path.into(), content.into());
        }

        /// Recorded writes with paths rendered as strings.
        pub fn write_log(&self) -> Vec<(String, String)> {
            self.writes
                .borrow()
                .iter()
                .map(|(p, c)| (p.display().to_string(), c.clone()))
                .collect()
        }
    }

    impl AttributeWriter for RecordingWriter {
        fn write_attr(&self, path: &Path, content: &str) -> std::io::Result<()> {
            if self.fail_writes.get() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("mock write refused: {}", path.display()),
                ));
            }
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), content.to_string()));
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn read_attr(&self, path: &Path) -> std::io::Result<String> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such attribute: {}", path.display()),
                )
            })
        }
    }
}
