//! End-to-end API scenarios: parse, query, build, serialize, clone.

use jot_core::{parse, to_text, write, Value};
use pretty_assertions::assert_eq;

#[test]
fn parse_then_query_members() {
    let root = parse(r#"{"test": 1, "test2": 3}"#).unwrap();
    let obj = root.as_object();

    let member = obj.get("test").expect("member should exist");
    assert_eq!(member.as_integer(), 1);
    assert_eq!(obj.get("test2").unwrap().as_integer(), 3);
}

#[test]
fn parse_then_query_nested_path() {
    let root = parse(r#"{"test": { "test2": [1,2, {"test3": 4, "test4": 5}]}}"#).unwrap();
    assert_eq!(root.path(".test.test2[2].test3").as_integer(), 4);
}

#[test]
fn build_tree_by_hand() {
    let mut root = Value::object(10);
    {
        let obj = root.as_object_mut();
        obj.insert("f1", Value::Integer(42));
        obj.insert("f2", Value::string("42"));
        obj.insert("f3", Value::array());

        let arr = obj.get_mut("f3").unwrap().as_array_mut();
        arr.append(Value::Integer(1));
        arr.append(Value::string("2"));
        arr.append(Value::string("3"));
        arr.insert(Value::Integer(-1), 0);
        arr.insert(Value::Integer(0), 1);
        arr.insert(Value::Integer(5), 5);
        arr.insert(Value::Integer(4), 5);
    }

    assert_eq!(root.path(".f1").as_integer(), 42);
    assert_eq!(root.path(".f2").as_str(), "42");
    assert_eq!(
        to_text(root.path(".f3"), false),
        r#"[-1,0,1,"2","3",4,5]"#
    );
}

#[test]
fn duplicate_insert_releases_old_value_once() {
    let mut root = Value::object(8);
    let obj = root.as_object_mut();

    assert_eq!(obj.insert("k", Value::string("first")), None);
    let displaced = obj.insert("k", Value::Integer(2));

    // The displaced value comes back exactly once and is dropped here;
    // the map keeps only the replacement.
    assert_eq!(displaced, Some(Value::string("first")));
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("k"), Some(&Value::Integer(2)));
}

#[test]
fn fixed_document_round_trip() {
    let input = r#"{
        "glossary": {
            "title": "example glossary",
            "GlossDiv": {
                "title": "S",
                "GlossList": {
                    "GlossEntry": {
                        "ID": "SGML",
                        "GlossTerm": "Standard Generalized Markup Language",
                        "Abbrev": "ISO 8879:1986",
                        "GlossDef": {
                            "para": "A meta-markup language.",
                            "GlossSeeAlso": ["GML", "XML"]
                        },
                        "GlossSee": "markup"
                    }
                }
            }
        }
    }"#;

    let root = parse(input).unwrap();
    // Structural equality ignores object member order, so the round trip
    // holds even though serialization order differs from the source.
    assert_eq!(parse(&to_text(&root, false)).unwrap(), root);
    assert_eq!(parse(&to_text(&root, true)).unwrap(), root);
}

#[test]
fn dump_to_sink_matches_to_text() {
    let root = parse(r#"{"items": [1, 2.5, null, {"ok": true}]}"#).unwrap();
    for pretty in [false, true] {
        let mut sink = Vec::new();
        write(&root, pretty, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), to_text(&root, pretty));
    }
}

#[test]
fn clone_then_mutate_leaves_original_intact() {
    let root = parse(r#"{"a": [1, 2, 3], "b": "text"}"#).unwrap();
    let mut copy = root.clone();

    copy.as_object_mut().insert("b", Value::Null);
    copy.as_object_mut()
        .get_mut("a")
        .unwrap()
        .as_array_mut()
        .append(Value::Integer(4));

    assert_eq!(root.path(".b").as_str(), "text");
    assert_eq!(root.path(".a").as_array().len(), 3);
    assert_eq!(copy.path(".a").as_array().len(), 4);

    drop(copy);
    assert_eq!(root.path(".a[2]").as_integer(), 3);
}

#[test]
fn rejected_inputs_produce_no_tree() {
    for input in [
        r#"{"unterminated": "str"#,
        r#"{"trailing": 1,}"#,
        "[1, 2,]",
        r#"{"missing" 1}"#,
        "{\"esc\": \"\\u0041\"}",
    ] {
        assert!(parse(input).is_err(), "accepted malformed input {input:?}");
    }
}
