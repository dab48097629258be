use core::fmt;

/// An error raised while decoding a [`Node`][crate::Node].
///
/// Encoding cannot fail; every error in this crate comes out of
/// [`Convert::decode`][crate::Convert::decode] or the
/// [`Node::to`][crate::Node::to] projection built on top of it.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::{ErrorKind, Node};
    ///
    /// let error = Node::Null.to::<String>().unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::ExpectedScalar));
    /// ```
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The kind of a decode error.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Expected a scalar node.
    ExpectedScalar,
    /// Expected a sequence node.
    ExpectedSequence,
    /// Expected a mapping node.
    ExpectedMapping,
    /// Expected a sequence node of exactly two elements.
    ExpectedPair,
    /// A scalar payload was not valid UTF-8 where text was required.
    InvalidUtf8,
    /// A scalar payload could not be parsed as the requested number.
    InvalidNumber,
    /// A scalar payload was not `true` or `false`.
    InvalidBoolean,
    /// An undefined node where a defined value was required.
    Undefined,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedScalar => write!(f, "expected scalar"),
            ErrorKind::ExpectedSequence => write!(f, "expected sequence"),
            ErrorKind::ExpectedMapping => write!(f, "expected mapping"),
            ErrorKind::ExpectedPair => write!(f, "expected sequence of length 2"),
            ErrorKind::InvalidUtf8 => write!(f, "invalid utf-8 in scalar"),
            ErrorKind::InvalidNumber => write!(f, "invalid number"),
            ErrorKind::InvalidBoolean => write!(f, "invalid boolean"),
            ErrorKind::Undefined => write!(f, "undefined node"),
        }
    }
}
