//! Type conversion adapters between application containers and YAML node
//! trees.
//!
//! The crate is built around a single contract, [`Convert`], which pairs an
//! `encode` operation producing an owned [`Node`] tree with a `decode`
//! operation reading one back. Implementing the trait for a type is the only
//! registration step needed to make it convertible in both directions, and
//! the generic adapters for sequences, pairs and mappings pick nested
//! implementations up through the same trait.
//!
//! Out of scope by design: tokenizing or emitting YAML text, preserving
//! comments, anchors, tags or node style, and schema enforcement. Adapters
//! are pure functions over values and nodes; every node an encode produces
//! is owned by the caller, and every node a decode consumes merely needs to
//! outlive the call.
//!
//! <br>
//!
//! ## Supported types
//!
//! * [`String`] and the primitive scalars (integers, floats, `bool`), which
//!   map to scalar nodes;
//! * [`Vec<T>`] and [`LinkedList<T>`][std::collections::LinkedList], which
//!   map to sequence nodes;
//! * `(T, U)`, which maps to a sequence node of exactly two elements;
//! * [`IndexMap<K, V>`][indexmap::IndexMap], which maps to a mapping node
//!   and preserves insertion order on encode;
//! * [`Variant`], a tagged union over all of the above for values whose type
//!   is only known at runtime.
//!
//! # Examples
//!
//! ```
//! use indexmap::IndexMap;
//! use yaml_convert::{Convert, Node};
//!
//! let mut map = IndexMap::new();
//! map.insert(String::from("a"), 1u32);
//! map.insert(String::from("b"), 2u32);
//!
//! let node = map.encode();
//!
//! // Entries come out in insertion order.
//! let entries = node.as_mapping().ok_or("expected mapping")?;
//! assert_eq!(entries[0].0.as_str(), Some("a"));
//! assert_eq!(entries[1].0.as_str(), Some("b"));
//!
//! // And the node round-trips.
//! assert_eq!(node.to::<IndexMap<String, u32>>()?, map);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Decoding reports shape mismatches instead of guessing:
//!
//! ```
//! use yaml_convert::{Convert, ErrorKind, Node};
//!
//! let node = vec![1u32, 2, 3].encode();
//!
//! let error = node.to::<(u32, u32)>().unwrap_err();
//! assert!(matches!(error.kind(), ErrorKind::ExpectedPair));
//! ```

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


mod convert;
pub use self::convert::Convert;

mod error;
pub use self::error::{Error, ErrorKind};

mod node;
pub use self::node::Node;

mod variant;
pub use self::variant::{extract, FromVariant, Variant};
