//! The two-level grammar matcher for URI references.
//!
//! A URI reference is decomposed against the generic pattern
//!
//! ```text
//! ( scheme ":" )? ( "//" authority )? path ( "?" query )? ( "#" fragment )?
//! ```
//!
//! and a present authority is further decomposed against
//!
//! ```text
//! ( user_info "@" )? host ( ":" port )?
//! ```
//!
//! Both matchers consume their input in its entirety. A component is
//! reported as absent only when the component and its delimiter did not
//! appear at all; a component whose delimiter matched but whose text is
//! zero-length is reported as an empty string.

/// Raw components of a URI reference.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub scheme: Option<&'a str>,
    pub scheme_specific: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Raw subcomponents of an authority.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct AuthorityParts<'a> {
    pub user_info: Option<&'a str>,
    pub host: Option<&'a str>,
    /// The port digit string, possibly empty.
    pub port: Option<&'a str>,
}

/// A fragment may not contain a line terminator.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

fn scan(s: &str, delims: impl Fn(u8) -> bool) -> usize {
    s.bytes().position(delims).unwrap_or(s.len())
}

/// Matches an entire URI reference against the top-level pattern.
///
/// The pattern is total over its input except that the fragment may not
/// contain a line terminator; `None` is returned in that case.
pub(crate) fn split_uri(s: &str) -> Option<UriParts<'_>> {
    let mut parts = UriParts::default();
    let mut rest = s;

    // ( scheme ":" )?
    // The scheme is the longest nonempty run free of ":", "/", "?" and "#",
    // and participates only when terminated by ":".
    let end = scan(rest, |x| matches!(x, b':' | b'/' | b'?' | b'#'));
    if end > 0 && rest.as_bytes().get(end) == Some(&b':') {
        parts.scheme = Some(&rest[..end]);
        rest = &rest[end + 1..];
    }

    // Everything from here up to a "#" forms the scheme-specific part.
    parts.scheme_specific = Some(&rest[..scan(rest, |x| x == b'#')]);

    // ( "//" authority )?
    if let Some(r) = rest.strip_prefix("//") {
        let end = scan(r, |x| matches!(x, b'/' | b'?' | b'#'));
        parts.authority = Some(&r[..end]);
        rest = &r[end..];
    }

    // path
    let end = scan(rest, |x| matches!(x, b'?' | b'#'));
    parts.path = Some(&rest[..end]);
    rest = &rest[end..];

    // ( "?" query )?
    if let Some(r) = rest.strip_prefix('?') {
        let end = scan(r, |x| x == b'#');
        parts.query = Some(&r[..end]);
        rest = &r[end..];
    }

    // ( "#" fragment )?
    if let Some(r) = rest.strip_prefix('#') {
        if r.contains(LINE_TERMINATORS) {
            return None;
        }
        parts.fragment = Some(r);
    }

    Some(parts)
}

/// Matches an entire authority component against the authority pattern.
///
/// Returns `None` when the authority cannot be split, i.e., when the text
/// after the host colon contains a non-digit.
pub(crate) fn split_authority(s: &str) -> Option<AuthorityParts<'_>> {
    // The user-info subcomponent is greedy: the rightmost "@" that leaves a
    // well-formed remainder wins over any split further left, and any "@"
    // split wins over none.
    let mut end = s.len();
    while let Some(i) = s[..end].rfind('@') {
        if let Some((host, port)) = split_host_port(&s[i + 1..]) {
            return Some(assemble(Some(&s[..i]), host, port));
        }
        end = i;
    }
    let (host, port) = split_host_port(s)?;
    Some(assemble(None, host, port))
}

/// Splits `host ( ":" port )?` where the host may not contain a colon and
/// the port is a possibly empty digit string.
fn split_host_port(s: &str) -> Option<(&str, Option<&str>)> {
    match s.split_once(':') {
        None => Some((s, None)),
        Some((host, port)) if port.bytes().all(|x| x.is_ascii_digit()) => {
            Some((host, Some(port)))
        }
        Some(_) => None,
    }
}

fn assemble<'a>(
    user_info: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
) -> AuthorityParts<'a> {
    // An empty host counts as present only when preceded by a nonempty
    // user-info, per the absent-vs-empty rule applied to its neighbor group.
    let host = if !host.is_empty() {
        Some(host)
    } else if matches!(user_info, Some(u) if !u.is_empty()) {
        Some("")
    } else {
        None
    };
    AuthorityParts {
        user_info,
        host,
        port,
    }
}
