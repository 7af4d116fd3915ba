use crate::{Scheme, SyntaxError, SyntaxErrorKind, Uri};
use core::fmt;

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::Mismatch => {
                write!(f, "does not match the URI reference grammar: {:?}", self.input)
            }
            SyntaxErrorKind::MalformedAuthority => {
                write!(f, "authority does not match the authority grammar: {:?}", self.input)
            }
            SyntaxErrorKind::InvalidOctet { index } => {
                write!(
                    f,
                    "invalid percent-encoded octet at index {index}: {:?}",
                    self.input
                )
            }
            SyntaxErrorKind::InvalidPort(_) => {
                write!(f, "port number out of range: {:?}", self.input)
            }
        }
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("user_info", &self.user_info())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
