use bstr::ByteSlice;
use indexmap::IndexMap;

use crate::convert::Convert;
use crate::error::{Error, ErrorKind};
use crate::node::Node;

/// A dynamically typed value.
///
/// This is a tagged union over every scalar and container shape the adapters
/// support, so a value whose type is only known at runtime can still cross
/// the YAML boundary.
///
/// Encoding maps every discriminator onto a node shape, with [`Variant::Empty`]
/// becoming [`Node::Null`]. Decoding goes by node shape instead and is
/// deliberately asymmetric for scalars: a scalar payload always comes back as
/// [`Variant::Text`] (or [`Variant::Bytes`] if it is not UTF-8), never as an
/// inferred number or boolean.
///
/// # Examples
///
/// ```
/// use yaml_convert::{Convert, Node, Variant};
///
/// assert_eq!(Variant::Bool(true).encode(), Node::scalar("true"));
/// assert_eq!(Variant::Int(42).encode(), Node::scalar("42"));
///
/// // Decoding does not infer scalar forms.
/// let decoded = Node::scalar("42").to::<Variant>()?;
/// assert_eq!(decoded, Variant::Text(String::from("42")));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    /// No value.
    #[default]
    Empty,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Double(f64),
    /// Unicode text.
    Text(String),
    /// A raw byte sequence.
    Bytes(Vec<u8>),
    /// An ordered list of variants.
    List(Vec<Variant>),
    /// An ordered text-to-variant mapping.
    Map(IndexMap<String, Variant>),
}

impl Variant {
    /// Test if the variant holds no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Variant;
    ///
    /// assert!(Variant::Empty.is_empty());
    /// assert!(!Variant::Int(0).is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    /// Coerce the variant to a boolean.
    ///
    /// Numbers coerce to `true` when non-zero. Text coerces to `false` when
    /// it is empty, `0` or `false`, and to `true` otherwise. Everything else
    /// is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Variant;
    ///
    /// assert!(Variant::Bool(true).to_bool());
    /// assert!(Variant::Int(-1).to_bool());
    /// assert!(Variant::Text(String::from("yes")).to_bool());
    /// assert!(!Variant::Text(String::from("false")).to_bool());
    /// assert!(!Variant::Empty.to_bool());
    /// ```
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Variant::Bool(value) => *value,
            Variant::Int(value) => *value != 0,
            Variant::Double(value) => *value != 0.0,
            Variant::Text(value) => !(value.is_empty() || value == "0" || value == "false"),
            _ => false,
        }
    }

    /// Coerce the variant to a signed integer.
    ///
    /// Booleans coerce to `0` or `1`, doubles truncate, and text is parsed
    /// as base-10. Anything that does not convert yields `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Variant;
    ///
    /// assert_eq!(Variant::Int(7).to_i64(), 7);
    /// assert_eq!(Variant::Bool(true).to_i64(), 1);
    /// assert_eq!(Variant::Text(String::from("-3")).to_i64(), -3);
    /// assert_eq!(Variant::Text(String::from("jazz")).to_i64(), 0);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        match self {
            Variant::Bool(value) => i64::from(*value),
            Variant::Int(value) => *value,
            Variant::Double(value) => *value as i64,
            Variant::Text(value) => lexical_core::parse(value.as_bytes()).unwrap_or_default(),
            _ => 0,
        }
    }

    /// Coerce the variant to a double-precision float.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Variant;
    ///
    /// assert_eq!(Variant::Double(2.5).to_f64(), 2.5);
    /// assert_eq!(Variant::Int(2).to_f64(), 2.0);
    /// assert_eq!(Variant::Text(String::from("0.25")).to_f64(), 0.25);
    /// ```
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Variant::Bool(value) => f64::from(u8::from(*value)),
            Variant::Int(value) => *value as f64,
            Variant::Double(value) => *value,
            Variant::Text(value) => lexical_core::parse(value.as_bytes()).unwrap_or_default(),
            _ => 0.0,
        }
    }

    /// Coerce the variant to text.
    ///
    /// Scalars render in their canonical form; containers, bytes and the
    /// empty variant yield an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaml_convert::Variant;
    ///
    /// assert_eq!(Variant::Int(42).to_text(), "42");
    /// assert_eq!(Variant::Bool(false).to_text(), "false");
    /// assert_eq!(Variant::Empty.to_text(), "");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Variant::Bool(value) => String::from(if *value { "true" } else { "false" }),
            Variant::Int(value) => {
                let mut buffer = itoa::Buffer::new();
                buffer.format(*value).to_owned()
            }
            Variant::Double(value) => {
                let mut buffer = ryu::Buffer::new();
                buffer.format(*value).to_owned()
            }
            Variant::Text(value) => value.clone(),
            _ => String::new(),
        }
    }

    /// Get the variant as a list of variants.
    #[must_use]
    #[inline]
    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Variant::List(value) => Some(value),
            _ => None,
        }
    }

    /// Get the variant as an ordered text-to-variant mapping.
    #[must_use]
    #[inline]
    pub fn as_map(&self) -> Option<&IndexMap<String, Variant>> {
        match self {
            Variant::Map(value) => Some(value),
            _ => None,
        }
    }
}

impl Convert for Variant {
    fn encode(&self) -> Node {
        match self {
            Variant::Empty => Node::Null,
            Variant::Bool(value) => value.encode(),
            Variant::Int(value) => value.encode(),
            Variant::Double(value) => value.encode(),
            Variant::Text(value) => value.encode(),
            Variant::Bytes(value) => Node::scalar(value.as_slice()),
            Variant::List(value) => value.encode(),
            Variant::Map(value) => value.encode(),
        }
    }

    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        match node {
            Node::Scalar(payload) => {
                // Shape-directed only: no numeric or boolean inference.
                *out = match payload.to_str() {
                    Ok(text) => Variant::Text(text.to_owned()),
                    Err(..) => Variant::Bytes(payload.to_vec()),
                };
            }
            Node::Mapping(..) => {
                *out = Variant::Map(node.to()?);
            }
            Node::Sequence(..) => {
                *out = Variant::List(node.to()?);
            }
            Node::Null => {
                *out = Variant::Empty;
            }
            Node::Undefined => {
                return Err(ErrorKind::Undefined.into());
            }
        }

        Ok(())
    }
}

/// Projection of a [`Variant`] into a statically known type.
///
/// The scalar implementations delegate to the variant's coercions, so they
/// are total and lossy in the same way. The identity implementation for
/// [`Variant`] lets generic callers take the value as-is and convert later.
///
/// # Examples
///
/// ```
/// use yaml_convert::{extract, Variant};
///
/// let value = Variant::Int(7);
/// assert_eq!(extract::<i64>(&value), 7);
/// assert!(extract::<bool>(&value));
/// assert_eq!(extract::<String>(&value), "7");
/// assert_eq!(extract::<Variant>(&value), value);
/// ```
pub trait FromVariant {
    /// Project `variant` into `Self`.
    fn from_variant(variant: &Variant) -> Self;
}

impl FromVariant for i64 {
    #[inline]
    fn from_variant(variant: &Variant) -> Self {
        variant.to_i64()
    }
}

impl FromVariant for bool {
    #[inline]
    fn from_variant(variant: &Variant) -> Self {
        variant.to_bool()
    }
}

impl FromVariant for String {
    #[inline]
    fn from_variant(variant: &Variant) -> Self {
        variant.to_text()
    }
}

impl FromVariant for Variant {
    #[inline]
    fn from_variant(variant: &Variant) -> Self {
        variant.clone()
    }
}

/// Project a [`Variant`] into a statically known type through
/// [`FromVariant`].
///
/// # Examples
///
/// ```
/// use yaml_convert::{extract, Variant};
///
/// assert_eq!(extract::<i64>(&Variant::Text(String::from("12"))), 12);
/// ```
#[inline]
pub fn extract<T>(variant: &Variant) -> T
where
    T: FromVariant,
{
    T::from_variant(variant)
}
