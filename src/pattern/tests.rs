use super::{compile_rule, flatten};

#[test]
fn test_flatten_capturing_groups() {
    assert_eq!(flatten(r"(?:aaa)(_bbb)"), "(?:aaa)(?:_bbb)");
    assert_eq!(flatten(r"(aaa)(_bbb)"), "(?:aaa)(?:_bbb)");
    assert_eq!(flatten(r"aaa)(_bbb)"), "aaa)(?:_bbb)");
    assert_eq!(flatten(r"aaa(_bbb)"), "aaa(?:_bbb)");
    assert_eq!(flatten(r"aaa_bbb"), "aaa_bbb");
}

#[test]
fn test_flatten_preserves_named_groups() {
    assert_eq!(flatten(r"(?P<id>\d+)/(tail)"), r"(?P<id>\d+)/(?:tail)");
}

#[test]
fn test_flatten_preserves_escaped_parens() {
    assert_eq!(flatten(r"a\(b\)c"), r"a\(b\)c");
    assert_eq!(flatten(r"\\(group)"), r"\\(?:group)");
}

#[test]
fn test_compile_rule_plain_segment() {
    let compiled = compile_rule("/wiki/<page>").expect("rule compiles");
    assert_eq!(compiled.params.as_slice(), ["page"]);
    assert!(compiled.regex.is_match("/wiki/Home"));
    assert!(!compiled.regex.is_match("/wiki/a/b"));
}

#[test]
fn test_compile_rule_int_filter() {
    let compiled = compile_rule("/object/<id:int>").expect("rule compiles");
    assert!(compiled.regex.is_match("/object/-42"));
    assert!(!compiled.regex.is_match("/object/x"));
}
