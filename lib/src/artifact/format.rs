use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, Result, Chainable};
use crate::artifact::Source;

pub trait Format: Sized {
    /// The data format's error type.
    type Error: serde::de::Error + ErrorDetail + 'static;

    /// Parses `string` as the data format `Self` into a `T`.
    fn from_str<T: DeserializeOwned>(string: &str) -> Result<T, Self::Error>;

    /// Reads all of `input` and parses it as a `T`. Errors name the path of
    /// `input` when it has one.
    fn read<I: Source, T: DeserializeOwned>(input: I) -> Result<T> {
        let path = input.path().map(|p| p.display().to_string());
        let string = input.read()?;
        Self::from_str(&string).chain_with(|| match path {
            Some(path) => error!("failed to parse input", "path" => path),
            None => error!("failed to parse input"),
        })
    }
}

macro_rules! impl_format {
    ($name:ident : $func:expr, $E:ty) => (
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Format for $name {
            type Error = $E;

            fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml: toml::from_str, toml::de::Error);
impl_format!(Json: serde_json::from_str, serde_json::Error);
