//! Upload payloads.

use std::fmt;
use std::path::Path;

/// A packaged extension (normally a `.zip`) to upload to the store.
///
/// The bytes are sent as-is: the client checks neither content type nor
/// size. Files are streamed rather than read into memory.
///
/// ```rust
/// use chrome_webstore::Package;
///
/// let package = Package::from_bytes(b"PK\x03\x04".to_vec());
/// assert_eq!(package.len(), Some(4));
/// ```
pub struct Package {
    body: reqwest::Body,
}

impl Package {
    /// Wraps an in-memory package.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            body: reqwest::Body::from(bytes.into()),
        }
    }

    /// Streams an already-open file.
    #[must_use]
    pub fn from_file(file: tokio::fs::File) -> Self {
        Self {
            body: reqwest::Body::from(file),
        }
    }

    /// Opens the file at `path` for streaming.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Self::from_file(file))
    }

    /// Returns the size in bytes for in-memory packages, `None` for streams.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.body.as_bytes().map(<[u8]>::len)
    }

    /// Returns `true` for an in-memory package with no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub(crate) fn into_body(self) -> reqwest::Body {
        self.body
    }
}

impl From<Vec<u8>> for Package {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<tokio::fs::File> for Package {
    fn from(file: tokio::fs::File) -> Self {
        Self::from_file(file)
    }
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.len() {
            Some(len) => f.debug_struct("Package").field("len", &len).finish(),
            None => f.debug_struct("Package").field("len", &"stream").finish(),
        }
    }
}
