use bstr::{BStr, BString, ByteSlice};

use crate::convert::Convert;
use crate::error::Error;

/// An owned YAML node tree.
///
/// This is the value representation every adapter in this crate encodes into
/// and decodes out of. Scalar payloads are byte strings, since YAML scalars
/// are not required to be UTF-8; interpretation as text happens in the
/// adapters and can fail.
///
/// # Examples
///
/// ```
/// use yaml_convert::Node;
///
/// let node = Node::scalar("hello");
/// assert_eq!(node.as_str(), Some("hello"));
/// assert!(node.as_sequence().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A scalar with a raw byte payload.
    Scalar(BString),
    /// An ordered sequence of nodes.
    Sequence(Vec<Node>),
    /// An ordered list of key-value node pairs.
    ///
    /// Key order is whatever the encoder produced; decoders resolve
    /// duplicate keys last-wins.
    Mapping(Vec<(Node, Node)>),
    /// An explicit null.
    Null,
    /// The absence of a node.
    Undefined,
}

impl Node {
    /// Construct a scalar node from raw payload bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Node;
    ///
    /// let node = Node::scalar("3.1415");
    /// assert_eq!(node.as_str(), Some("3.1415"));
    /// ```
    #[inline]
    pub fn scalar<P>(payload: P) -> Self
    where
        P: Into<BString>,
    {
        Node::Scalar(payload.into())
    }

    /// Get the raw payload of a scalar node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstr::BStr;
    /// use yaml_convert::Node;
    ///
    /// let node = Node::scalar("hello");
    /// assert_eq!(node.as_scalar(), Some(BStr::new("hello")));
    /// assert_eq!(Node::Null.as_scalar(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_scalar(&self) -> Option<&BStr> {
        match self {
            Node::Scalar(payload) => Some(payload.as_bstr()),
            _ => None,
        }
    }

    /// Get the payload of a scalar node as a [`str`]. This might fail if the
    /// payload is not valid UTF-8.
    ///
    /// See [`Node::as_scalar`] for an alternative.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(payload) => payload.to_str().ok(),
            _ => None,
        }
    }

    /// Get the children of a sequence node.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::{Convert, Node};
    ///
    /// let node = vec![1u32, 2, 3].encode();
    /// let children = node.as_sequence().ok_or("expected sequence")?;
    /// assert_eq!(children.len(), 3);
    /// assert_eq!(children[0].as_str(), Some("1"));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(children) => Some(children),
            _ => None,
        }
    }

    /// Get the entries of a mapping node, in encoded order.
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Test if the node is an explicit null.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Test if the node is defined, that is anything but [`Node::Undefined`].
    #[must_use]
    #[inline]
    pub fn is_defined(&self) -> bool {
        !matches!(self, Node::Undefined)
    }

    /// Decode the node into `T` through its [`Convert`] adapter.
    ///
    /// The value is decoded into a fresh default and only returned on
    /// success, so this never observes the partially filled state a failed
    /// container decode can leave behind.
    ///
    /// # Errors
    ///
    /// Errors if the shape of the node does not match `T`, or if any nested
    /// decode fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::{Convert, Node};
    ///
    /// let node = vec![1u32, 2, 3].encode();
    /// assert_eq!(node.to::<Vec<u32>>()?, vec![1, 2, 3]);
    /// assert!(node.to::<String>().is_err());
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn to<T>(&self) -> Result<T, Error>
    where
        T: Convert + Default,
    {
        let mut out = T::default();
        T::decode(self, &mut out)?;
        Ok(out)
    }
}
