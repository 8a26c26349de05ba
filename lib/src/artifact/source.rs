use std::{fs, io};
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// Something text can be read out of: a file on disk or an in-memory string.
pub trait Source: Debug {
    fn read(self) -> Result<String>;

    fn path(&self) -> Option<&Path> {
        None
    }
}

impl Source for &str {
    fn read(self) -> Result<String> {
        Ok(self.to_owned())
    }
}

impl Source for &fs::File {
    fn read(self) -> Result<String> {
        use io::Read;

        let mut string = String::new();
        io::BufReader::new(self).read_to_string(&mut string)?;
        Ok(string)
    }
}

impl Source for &Path {
    fn read(self) -> Result<String> {
        let file = fs::File::open(self).chain_with(|| error! {
            "failed to open file for reading",
            "file path" => self.display()
        })?;

        file.read().chain_with(|| error! {
            "failed to read file as UTF-8 text",
            "file path" => self.display()
        })
    }

    fn path(&self) -> Option<&Path> {
        Some(self)
    }
}

impl Source for &PathBuf {
    fn read(self) -> Result<String> {
        self.as_path().read()
    }

    fn path(&self) -> Option<&Path> {
        Some(self.as_path())
    }
}
