use std::fmt;

/// NewType wrapper for a source location (`<file>:<line>:<column>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation(String);

impl SourceLocation {
    /// Validate and wrap a location token.
    ///
    /// The token must end in two `:`-separated unsigned integers preceded by a
    /// non-empty file component. Anything else (including the frontend's
    /// `<invalid loc>` marker) is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.rsplitn(3, ':');
        let column = parts.next()?;
        let line = parts.next()?;
        let file = parts.next()?;

        if file.is_empty() || line.parse::<u32>().is_err() || column.parse::<u32>().is_err() {
            return None;
        }

        Some(Self(token.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File component of the location
    pub fn file(&self) -> &str {
        // parse() guarantees two trailing ':' separators
        self.0.rsplitn(3, ':').nth(2).unwrap_or(&self.0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SourceLocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// NewType wrapper for the declaration text that follows a location
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Create a new Signature
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identity of one compiled entity: where it is, and what was declared there.
///
/// Ordering is location first, then signature, with a missing signature
/// sorting before any present one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    location: SourceLocation,
    signature: Option<Signature>,
}

impl EntryKey {
    pub fn new(location: SourceLocation, signature: Option<Signature>) -> Self {
        Self {
            location,
            signature,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.signature {
            Some(signature) => write!(f, "{}\t{}", self.location, signature),
            None => write!(f, "{}", self.location),
        }
    }
}
