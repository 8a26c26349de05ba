use std::{fs, io};
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use serde::Serialize;

use crate::error::{Result, Chainable};

/// Somewhere a finished artifact can be written to.
///
/// Writes replace any previous contents. They are not atomic: a crash midway
/// may leave a truncated file behind.
pub trait Sink: Debug {
    fn write_str(&self, contents: &str) -> Result<()>;

    /// Writes `value` as pretty-printed JSON followed by a newline.
    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        self.write_str(&json)
    }
}

impl Sink for fs::File {
    fn write_str(&self, contents: &str) -> Result<()> {
        use io::Write;

        let mut file = io::BufWriter::new(self);
        file.write_all(contents.as_bytes())?;
        Ok(file.flush()?)
    }
}

impl Sink for &Path {
    fn write_str(&self, contents: &str) -> Result<()> {
        fs::File::create(self)
            .chain_with(|| error! {
                "failed to open/create file for writing",
                "file path" => self.display()
            })?
            .write_str(contents)
            .chain_with(|| error! {
                "failed to write file",
                "file path" => self.display()
            })
    }
}

impl Sink for PathBuf {
    fn write_str(&self, contents: &str) -> Result<()> {
        self.as_path().write_str(contents)
    }
}

impl<T: Sink> Sink for &T {
    fn write_str(&self, contents: &str) -> Result<()> {
        T::write_str(self, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_pretty_and_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        path.write_json(&serde_json::json!({ "generated": 2 })).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"generated\": 2\n}\n");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("page.html");
        let error = path.write_str("x").unwrap_err();

        assert!(error.message().starts_with("failed to open/create file for writing"));
    }
}
