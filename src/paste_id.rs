use std::fmt;

use crate::error::ApiError;

/// Ways a paste link can start when it is given as a full URL.
const HOST_PREFIXES: [&str; 2] = ["https://pastefy.app/", "pastefy.app/"];

/// Shortest identifier worth asking the paste service about.
const MIN_LENGTH: usize = 3;

/// Turn a paste link or bare identifier into the identifier.
///
/// Links to the paste service yield their last path segment. Anything else is assumed to
/// already be an identifier and is returned as is.
pub fn resolve(input: &str) -> &str {
    if HOST_PREFIXES.iter().any(|prefix| input.starts_with(prefix)) {
        input.rsplit('/').next().unwrap_or_default()
    } else {
        input
    }
}

/// A paste identifier that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteId(String);

impl PasteId {
    pub fn parse(id: impl Into<String>) -> crate::ApiResult<Self> {
        let id = id.into();
        if id.chars().count() < MIN_LENGTH {
            return Err(ApiError::InvalidPasteId);
        }
        Ok(PasteId(id))
    }

    /// Pick the identifier out of a request's `url` and `id` parameters.
    ///
    /// A non-empty `url` takes precedence over `id`.
    pub fn from_request(url: Option<&str>, id: Option<&str>) -> crate::ApiResult<Self> {
        let id = match (url, id) {
            (Some(url), _) if !url.is_empty() => resolve(url),
            (_, Some(id)) if !id.is_empty() => id,
            _ => return Err(ApiError::MissingParameter),
        };
        Self::parse(id)
    }

    /// Wrap an identifier without checking it, for routes that take it from the path.
    pub fn unchecked(id: impl Into<String>) -> Self {
        PasteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PasteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
