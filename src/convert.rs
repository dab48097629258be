mod mapping;
mod scalar;
mod sequence;

use crate::error::Error;
use crate::node::Node;

/// The conversion contract between a value type and [`Node`] trees.
///
/// Implementing this trait for a type is the only registration step needed
/// to make it YAML-convertible in both directions; generic adapters such as
/// the ones for [`Vec`] and [`IndexMap`][indexmap::IndexMap] pick nested
/// implementations up through the same trait.
///
/// Encoding is total and cannot fail. Decoding reports shape mismatches and
/// payload parse failures through [`Error`], and the partial-state contract
/// differs by adapter family:
///
/// * scalar and pair adapters leave `out` untouched on failure;
/// * sequence and mapping adapters clear `out` before populating it and may
///   leave it partially filled when a nested decode fails mid-stream.
///
/// Callers that need transactional semantics should use [`Node::to`], which
/// decodes into a local and returns it only on success.
///
/// # Examples
///
/// ```
/// use yaml_convert::{Convert, Error, Node};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Convert for Point {
///     fn encode(&self) -> Node {
///         (self.x, self.y).encode()
///     }
///
///     fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
///         let (x, y) = node.to::<(i32, i32)>()?;
///         *out = Point { x, y };
///         Ok(())
///     }
/// }
///
/// let node = Point { x: 1, y: -2 }.encode();
/// assert_eq!(node.to::<Point>()?, Point { x: 1, y: -2 });
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub trait Convert: Sized {
    /// Encode the value into a freshly constructed node tree owned by the
    /// caller.
    fn encode(&self) -> Node;

    /// Decode `node` into `out`.
    ///
    /// # Errors
    ///
    /// Errors if the shape of `node` does not match `Self`, if a scalar
    /// payload cannot be parsed, or if any nested decode fails.
    fn decode(node: &Node, out: &mut Self) -> Result<(), Error>;
}
