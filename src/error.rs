use core::num::ParseIntError;

/// Detailed cause of a [`SyntaxError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The input does not match the URI reference grammar.
    Mismatch,
    /// The authority component does not match the authority grammar.
    MalformedAuthority,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    InvalidOctet {
        /// Index of the percent character "%" of the octet within the
        /// offending component.
        index: usize,
    },
    /// The port digit string does not fit in a `u32`.
    InvalidPort(ParseIntError),
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    pub(crate) input: String,
    pub(crate) kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Returns the string that failed to parse.
    ///
    /// For a percent-decoding error this is the offending raw component;
    /// otherwise it is the original input string.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Recovers the string that failed to parse.
    #[inline]
    pub fn into_input(self) -> String {
        self.input
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SyntaxErrorKind::InvalidPort(cause) => Some(cause),
            _ => None,
        }
    }
}
