use core::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::convert::Convert;
use crate::error::{Error, ErrorKind};
use crate::node::Node;

impl<K, V, S> Convert for IndexMap<K, V, S>
where
    K: Convert + Default + Hash + Eq,
    V: Convert + Default,
    S: BuildHasher + Default,
{
    fn encode(&self) -> Node {
        // The source map already guarantees unique keys, so entries are
        // appended in iteration order without deduplication.
        Node::Mapping(
            self.iter()
                .map(|(key, value)| (key.encode(), value.encode()))
                .collect(),
        )
    }

    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        let Some(entries) = node.as_mapping() else {
            return Err(ErrorKind::ExpectedMapping.into());
        };

        out.clear();

        for (key, value) in entries {
            // Duplicate keys resolve last-wins.
            out.insert(key.to()?, value.to()?);
        }

        Ok(())
    }
}
