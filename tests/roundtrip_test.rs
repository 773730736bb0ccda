//! Parse/emit round trips and rejection of malformed literals.

use assert2::check;
use documenter_index::{CANONICAL_BINDING, IndexStore, ParseError, emit_index, parse_index};
use rstest::rstest;

const RAW: &str = include_str!("../assets/search_index.js");

/// Test: emitting the embedded index and reloading it yields an equivalent,
/// order-preserving sequence.
#[test]
fn embedded_round_trip() {
    let records = parse_index(RAW).expect("embedded index parses");
    let emitted = emit_index(&records);
    let reparsed = parse_index(&emitted).expect("emitted literal parses");

    check!(reparsed == records);
}

/// Test: emission uses the canonical binding name.
#[test]
fn emit_uses_canonical_binding() {
    let emitted = emit_index(&[]);

    check!(emitted.starts_with(&format!("var {} = ", CANONICAL_BINDING)));
    check!(emitted.ends_with("}\n"));
}

/// Test: a store built from emitted text equals the original store.
#[test]
fn store_round_trip() {
    let original = IndexStore::load();
    let rebuilt = IndexStore::from_source(&emit_index(original.records()))
        .expect("emitted literal parses");

    check!(&rebuilt == original);
}

/// Test: multi-line text with escapes survives the round trip byte-for-byte.
#[test]
fn text_escapes_survive() {
    let records = parse_index(RAW).unwrap();
    let with_newlines = records
        .iter()
        .filter(|r| r.text.contains('\n'))
        .count();
    // Doc excerpts end in blank lines; losing them would corrupt the round trip.
    check!(with_newlines > 0);

    let reparsed = parse_index(&emit_index(&records)).unwrap();
    for (a, b) in records.iter().zip(&reparsed) {
        check!(a.text == b.text);
    }
}

/// Test: literals that are not an index assignment are rejected.
#[rstest]
#[case::bare_json("{\"docs\": []}")]
#[case::no_assignment("var documenterSearchIndex")]
#[case::trailing_garbage("var x = {\"docs\": []} var y = 1")]
fn malformed_wrapper_is_rejected(#[case] source: &str) {
    check!(matches!(
        parse_index(source),
        Err(ParseError::MissingBinding)
    ));
}

/// Test: payloads violating the record schema are rejected.
#[rstest]
#[case::wrong_key("var x = {\"records\": []}")]
#[case::missing_field("var x = {\"docs\": [{\"location\":\"\"}]}")]
#[case::bad_category(
    "var x = {\"docs\": [{\"location\":\"\",\"page\":\"p\",\"title\":\"t\",\
     \"text\":\"\",\"category\":\"gadget\"}]}"
)]
fn malformed_payload_is_rejected(#[case] source: &str) {
    check!(matches!(parse_index(source), Err(ParseError::Json(_))));
}
