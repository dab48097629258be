use std::collections::LinkedList;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use yaml_convert::{Convert, Node, Variant};

#[test]
fn map_of_string_to_int() -> Result<()> {
    let mut map = IndexMap::new();
    map.insert(String::from("a"), 1i64);
    map.insert(String::from("b"), 2);

    let node = map.encode();
    let entries = node.as_mapping().context("expected mapping")?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], (Node::scalar("a"), Node::scalar("1")));
    assert_eq!(entries[1], (Node::scalar("b"), Node::scalar("2")));

    assert_eq!(node.to::<IndexMap<String, i64>>()?, map);
    Ok(())
}

#[test]
fn sequence_of_strings() -> Result<()> {
    let values = vec![String::from("x"), String::from("y"), String::from("z")];

    let node = values.encode();
    let children = node.as_sequence().context("expected sequence")?;

    assert_eq!(children.len(), 3);
    assert_eq!(children[0], Node::scalar("x"));
    assert_eq!(children[1], Node::scalar("y"));
    assert_eq!(children[2], Node::scalar("z"));

    assert_eq!(node.to::<Vec<String>>()?, values);

    // The same three-element node is not a pair.
    assert!(node.to::<(String, String)>().is_err());
    Ok(())
}

#[test]
fn pair_of_ints() -> Result<()> {
    let node = Node::Sequence(vec![Node::scalar("1"), Node::scalar("2")]);
    assert_eq!(node.to::<(i64, i64)>()?, (1, 2));

    let node = Node::Sequence(vec![
        Node::scalar("1"),
        Node::scalar("2"),
        Node::scalar("3"),
    ]);
    assert!(node.to::<(i64, i64)>().is_err());
    Ok(())
}

#[test]
fn long_sequences() -> Result<()> {
    let ints = (0..1000i64).collect::<Vec<_>>();
    assert_eq!(ints.encode().to::<Vec<i64>>()?, ints);

    let strings = (0..1000u32).map(|n| n.to_string()).collect::<Vec<_>>();
    assert_eq!(strings.encode().to::<Vec<String>>()?, strings);

    let bools = (0..1000).map(|n| n % 3 == 0).collect::<LinkedList<_>>();
    assert_eq!(bools.encode().to::<LinkedList<bool>>()?, bools);
    Ok(())
}

#[test]
fn long_map_round_trip() -> Result<()> {
    let mut map = IndexMap::new();

    for n in 0..1000u32 {
        map.insert(format!("key-{n}"), n);
    }

    let node = map.encode();
    let entries = node.as_mapping().context("expected mapping")?;
    assert_eq!(entries.len(), 1000);
    assert_eq!(entries[999].0, Node::scalar("key-999"));

    assert_eq!(node.to::<IndexMap<String, u32>>()?, map);
    Ok(())
}

#[test]
fn variant_tree() -> Result<()> {
    let mut inner = IndexMap::new();
    inner.insert(String::from("count"), Variant::Int(7));
    inner.insert(String::from("enabled"), Variant::Bool(true));

    let value = Variant::List(vec![
        Variant::Map(inner),
        Variant::Text(String::from("tail")),
        Variant::Empty,
    ]);

    let node = value.encode();

    // Every scalar becomes text on the way back, containers and empties
    // keep their shape.
    let mut expected_inner = IndexMap::new();
    expected_inner.insert(String::from("count"), Variant::Text(String::from("7")));
    expected_inner.insert(String::from("enabled"), Variant::Text(String::from("true")));

    let expected = Variant::List(vec![
        Variant::Map(expected_inner),
        Variant::Text(String::from("tail")),
        Variant::Empty,
    ]);

    assert_eq!(node.to::<Variant>()?, expected);
    Ok(())
}
