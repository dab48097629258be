use std::collections::LinkedList;

use crate::convert::Convert;
use crate::error::{Error, ErrorKind};
use crate::node::Node;

/// The capability set the generic sequence adapter needs out of a container:
/// clear it, then append decoded elements in node order. Iteration comes
/// from the container's own [`IntoIterator`] on references.
trait Seq {
    type Item;

    fn clear(&mut self);

    fn append(&mut self, item: Self::Item);
}

impl<T> Seq for Vec<T> {
    type Item = T;

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Seq for LinkedList<T> {
    type Item = T;

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

fn encode_elements<'a, T, I>(iter: I) -> Node
where
    T: Convert + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Node::Sequence(iter.into_iter().map(Convert::encode).collect())
}

fn decode_elements<C>(node: &Node, out: &mut C) -> Result<(), Error>
where
    C: Seq,
    C::Item: Convert + Default,
{
    let Some(children) = node.as_sequence() else {
        return Err(ErrorKind::ExpectedSequence.into());
    };

    out.clear();

    for child in children {
        out.append(child.to()?);
    }

    Ok(())
}

impl<T> Convert for Vec<T>
where
    T: Convert + Default,
{
    #[inline]
    fn encode(&self) -> Node {
        encode_elements(self)
    }

    #[inline]
    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        decode_elements(node, out)
    }
}

impl<T> Convert for LinkedList<T>
where
    T: Convert + Default,
{
    #[inline]
    fn encode(&self) -> Node {
        encode_elements(self)
    }

    #[inline]
    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        decode_elements(node, out)
    }
}

impl<T, U> Convert for (T, U)
where
    T: Convert + Default,
    U: Convert + Default,
{
    fn encode(&self) -> Node {
        Node::Sequence(vec![self.0.encode(), self.1.encode()])
    }

    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        let Some(children) = node.as_sequence() else {
            return Err(ErrorKind::ExpectedSequence.into());
        };

        // Arity is checked before any element is read.
        let [first, second] = children else {
            return Err(ErrorKind::ExpectedPair.into());
        };

        let first = first.to()?;
        let second = second.to()?;
        *out = (first, second);
        Ok(())
    }
}
