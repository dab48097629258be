use std::collections::LinkedList;

use anyhow::Result;

use crate::{Convert, ErrorKind, Node};

#[test]
fn vec_round_trip() -> Result<()> {
    let values = vec![1i64, -2, 3];
    let node = values.encode();

    let children = node.as_sequence().expect("expected sequence");
    assert_eq!(children.len(), 3);
    assert_eq!(children[0], Node::scalar("1"));
    assert_eq!(children[1], Node::scalar("-2"));
    assert_eq!(children[2], Node::scalar("3"));

    assert_eq!(node.to::<Vec<i64>>()?, values);
    Ok(())
}

#[test]
fn empty_sequence_round_trip() -> Result<()> {
    let values: Vec<String> = Vec::new();
    let node = values.encode();
    assert_eq!(node, Node::Sequence(Vec::new()));
    assert_eq!(node.to::<Vec<String>>()?, values);
    Ok(())
}

#[test]
fn linked_list_round_trip() -> Result<()> {
    let mut values = LinkedList::new();
    values.push_back(String::from("x"));
    values.push_back(String::from("y"));

    let node = values.encode();
    assert_eq!(node, vec![String::from("x"), String::from("y")].encode());
    assert_eq!(node.to::<LinkedList<String>>()?, values);
    Ok(())
}

#[test]
fn sequence_rejects_non_sequence() {
    let mut out = vec![1u32, 2];
    let error = Vec::<u32>::decode(&Node::scalar("nope"), &mut out).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedSequence));
}

#[test]
fn sequence_failure_leaves_partial_state() {
    let node = Node::Sequence(vec![
        Node::scalar("1"),
        Node::scalar("jazz"),
        Node::scalar("3"),
    ]);

    // The destination is cleared up front and filled until the failing
    // child, so the stale contents are gone and the first element remains.
    let mut out = vec![7i64, 8, 9];
    let error = Vec::<i64>::decode(&node, &mut out).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidNumber));
    assert_eq!(out, vec![1]);
}

#[test]
fn pair_round_trip() -> Result<()> {
    let pair = (1i32, -2i32);
    let node = pair.encode();
    assert_eq!(
        node,
        Node::Sequence(vec![Node::scalar("1"), Node::scalar("-2")])
    );
    assert_eq!(node.to::<(i32, i32)>()?, pair);

    let mixed = (String::from("key"), 42u64);
    assert_eq!(mixed.encode().to::<(String, u64)>()?, mixed);
    Ok(())
}

#[test]
fn pair_rejects_wrong_arity() {
    for len in [0u32, 1, 3, 4] {
        let node = Node::Sequence((0..len).map(|n| u32::encode(&n)).collect());
        let mut out = (77u32, 88u32);
        let error = <(u32, u32)>::decode(&node, &mut out).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::ExpectedPair));
        assert_eq!(out, (77, 88));
    }
}

#[test]
fn pair_rejects_non_sequence() {
    let mut out = (String::from("a"), String::from("b"));
    let error = <(String, String)>::decode(&Node::scalar("x"), &mut out).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedSequence));
    assert_eq!(out, (String::from("a"), String::from("b")));
}

#[test]
fn pair_untouched_on_child_failure() {
    let node = Node::Sequence(vec![Node::scalar("1"), Node::scalar("jazz")]);
    let mut out = (7u32, 8u32);
    let error = <(u32, u32)>::decode(&node, &mut out).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidNumber));
    assert_eq!(out, (7, 8));
}
