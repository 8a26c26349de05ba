use std::{fmt, io};
use std::panic::Location;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error with context, optionally raised on top of a lower-level error.
///
/// Errors are built with [`error!`] and [`err!`] and stacked with
/// [`Chainable::chain()`]. The `Display` implementation prints the outermost
/// message first followed by each chained error, indented one level deeper.
#[derive(Debug)]
pub struct Error {
    detail: Box<dyn ErrorDetail>,
    prev: Option<Box<Error>>,
    location: &'static Location<'static>,
}

pub trait ErrorDetail: fmt::Display + fmt::Debug + Send + Sync {
    fn context(&self) -> Vec<(Option<String>, String)> { vec![] }
}

impl Error {
    /// Stacks `self` underneath `other`, returning `other`.
    pub fn chain(self, mut other: Error) -> Self {
        fn _chain(error: Error, behind: &mut Error) {
            match behind.prev.as_mut() {
                Some(prev) => _chain(error, prev),
                None => behind.prev = Some(Box::new(error)),
            }
        }

        _chain(self, &mut other);
        other
    }

    /// Iterates over this error and every error chained beneath it.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |e| e.prev.as_deref())
    }

    /// A single-line rendition: every message in the chain joined with `: `.
    pub fn message(&self) -> String {
        self.iter()
            .map(|e| e.detail.to_string())
            .collect::<Vec<_>>()
            .join(": ")
    }
}

impl ErrorDetail for &(dyn StdError + Send + Sync) {
    fn context(&self) -> Vec<(Option<String>, String)> {
        let mut ctxt = vec![];
        let mut error = self.source();
        while let Some(e) = error {
            ctxt.push((None, e.to_string()));
            error = e.source();
        }

        ctxt
    }
}

macro_rules! impl_error_detail_with_std_error {
    ($($T:ty),* $(,)?) => ($(
        impl $crate::error::ErrorDetail for $T {
            fn context(&self) -> Vec<(Option<String>, String)> {
                let error: &(dyn std::error::Error + Send + Sync) = self;
                error.context()
            }
        }
    )*)
}

impl_error_detail_with_std_error! {
    io::Error,
    toml::de::Error,
    serde_json::Error,
    chrono::ParseError,
}

impl ErrorDetail for String { }
impl ErrorDetail for &str { }

impl<T: ErrorDetail + 'static> From<T> for Error {
    #[track_caller]
    fn from(detail: T) -> Self {
        Error {
            prev: None,
            detail: Box::new(detail),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backtrace = std::env::var_os("RUST_BACKTRACE").is_some();
        for (depth, error) in self.iter().enumerate() {
            let indent = " ".repeat(depth * 4);
            let newline = format!("\n{indent}");

            let message = error.detail.to_string().replace('\n', &newline);
            writeln!(f, "{indent}{message}")?;
            for (key, value) in error.detail.context() {
                let value = value.replace('\n', &newline);
                match key {
                    Some(key) => writeln!(f, "{indent}{key}: {value}")?,
                    None => writeln!(f, "{indent}{value}")?,
                }
            }

            if backtrace {
                writeln!(f, "{indent}[{}]", error.location)?;
            }
        }

        Ok(())
    }
}

/// An error detail made of a message and a list of key/value parameters.
#[derive(Debug)]
pub struct MakeshiftError {
    pub message: String,
    pub parameters: Vec<(Option<String>, String)>,
}

impl fmt::Display for MakeshiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl ErrorDetail for MakeshiftError {
    fn context(&self) -> Vec<(Option<String>, String)> {
        self.parameters.clone()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

/// Builds an [`Error`](crate::error::Error) from a message and parameters.
///
/// ```rust
/// let error = roadshow::error! {
///     "failed to write page",
///     "city" => "Boston",
///     "retry later",
/// };
///
/// assert_eq!(error.message(), "failed to write page");
/// ```
#[macro_export]
macro_rules! error {
    ($msg:expr, $($rest:tt)*) => (
        $crate::error::Error::from($crate::error::MakeshiftError {
            message: $msg.to_string(),
            parameters: {
                #[allow(unused_mut)]
                let mut v: Vec<(Option<String>, String)> = Vec::new();
                $crate::error!(@param v $($rest)*);
                v
            },
        })
    );

    (@param $v:ident $key:expr => $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $v $key => $value);
        $crate::error!(@param $v $($rest)*);
    };

    (@param $v:ident $key:expr => $value:expr) => {
        $v.push((Some($key.to_string()), $value.to_string()));
    };

    (@param $v:ident $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $v $value);
        $crate::error!(@param $v $($rest)*);
    };

    (@param $v:ident $value:expr) => {
        $v.push((None, $value.to_string()));
    };

    (@param $v:ident $(,)?) => { };

    ($msg:expr) => ( $crate::error!($msg,) );
}

pub trait Chainable<T> {
    fn chain(self, other: impl Into<Error>) -> Result<T>;

    fn chain_with<F, E>(self, f: F) -> Result<T>
        where F: FnOnce() -> E, E: Into<Error>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    #[track_caller]
    fn chain(self, other: impl Into<Error>) -> Result<T> {
        self.map_err(|e| e.into().chain(other.into()))
    }

    #[track_caller]
    fn chain_with<F, Err>(self, f: F) -> Result<T>
        where F: FnOnce() -> Err, Err: Into<Error>,
    {
        self.map_err(|e| e.into().chain(f().into()))
    }
}
