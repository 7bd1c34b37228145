// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    /// Input path does not reference an existing file. Never suppressed.
    FileNotFound(PathBuf),

    /// File exists but could not be read as an image container.
    /// Suppressed to "no coordinates" unless the caller opts out.
    UnreadableImage(String),

    /// Image container parsed but carries no EXIF block.
    /// Same suppression policy as `UnreadableImage`.
    NoMetadata(String),

    /// Provider selector outside the recognized set.
    UnknownProvider(String),

    /// Multi-point URL requested for an empty coordinate list.
    EmptyCoordinateList,

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::UnreadableImage(e) => write!(f, "Unreadable image: {}", e),
            Error::NoMetadata(e) => write!(f, "No EXIF metadata: {}", e),
            Error::UnknownProvider(selector) => write!(f, "Unknown map provider: {}", selector),
            Error::EmptyCoordinateList => write!(f, "No coordinates to place on the map"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
