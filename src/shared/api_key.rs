//! Account API key with redacted `Debug`/`Display`.

use std::fmt;

use zeroize::Zeroize;

/// A Logentries API key that never exposes its value in logs or debug output.
///
/// Not `Serialize`. The value only leaves the process in the `x-api-key`
/// request header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// The raw key, for the request header only.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_redacted() {
        let key = ApiKey::new("secret-key-123");
        assert_eq!(format!("{:?}", key), "ApiKey([REDACTED])");
        assert_eq!(key.to_string(), "[REDACTED]");
        assert!(!format!("{:?}", key).contains("secret"));
    }

    #[test]
    fn test_expose_returns_raw_value() {
        let key: ApiKey = "secret-key-123".into();
        assert_eq!(key.expose(), "secret-key-123");
        assert_eq!(key.len(), 14);
        assert!(!key.is_empty());
    }

    #[test]
    fn test_empty_key() {
        let key = ApiKey::new(String::new());
        assert!(key.is_empty());
    }
}
