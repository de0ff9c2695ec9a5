use super::*;
use crate::error::BindError;

const COMMENTED: &str = "-- comment :var
    /* comment :var */
    SELECT field1, field2
    FROM table
    WHERE key1 = :var1 AND key2 = :var2 -- comment";

const COMMENTED_RESULT: &str = "-- comment :var
    /* comment :var */
    SELECT field1, field2
    FROM table
    WHERE key1 = 123 AND key2 = 456 -- comment";

fn names(template: &str) -> Vec<String> {
    Parser::new(template)
        .placeholders()
        .unwrap()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn substitutes_outside_comments() {
    let parser = Parser::new(COMMENTED);
    let sql = parser
        .substitute(&values(&[(":var1", "123"), (":var2", "456")]))
        .unwrap();
    assert_eq!(sql, COMMENTED_RESULT);
}

#[test]
fn skips_quoted_strings() {
    assert_eq!(
        names("SELECT ':no', 'it''s :no', :yes"),
        vec![":yes".to_string()]
    );
}

#[test]
fn dashes_inside_string_are_not_a_comment() {
    assert_eq!(names("SELECT '--', :a"), vec![":a"]);
    assert_eq!(names("SELECT '/*', :a, '*/'"), vec![":a"]);
}

#[test]
fn doubled_quote_does_not_close_string() {
    assert_eq!(names("SELECT 'a'':b' || :c"), vec![":c"]);
}

#[test]
fn cast_operator_is_not_a_placeholder() {
    let parser = Parser::new("SELECT * FROM t WHERE a=:x AND b::int=:y");
    let occ = parser.occurrences().unwrap();
    assert_eq!(occ.len(), 2);
    assert_eq!(occ[0].name(), ":x");
    assert_eq!(occ[0].position(), 24);
    assert_eq!(occ[1].name(), ":y");
    assert_eq!(occ[1].position(), 38);
}

#[test]
fn placeholder_followed_by_cast_or_comment() {
    assert_eq!(names("SELECT :a::int"), vec![":a"]);
    assert_eq!(names("SELECT :a-- :b"), vec![":a"]);
    assert_eq!(names("SELECT :a/* :b */, :c"), vec![":a", ":c"]);
    assert_eq!(names("SELECT :a':b'"), vec![":a"]);
}

#[test]
fn trailing_placeholder_keeps_last_byte() {
    let parser = Parser::new("SELECT * FROM users WHERE id=:id");
    let occ = parser.occurrences().unwrap();
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].name(), ":id");
    assert_eq!(occ[0].end(), parser.template().len());
}

#[test]
fn single_char_placeholder_at_end() {
    assert_eq!(names("SELECT :x"), vec![":x"]);
}

#[test]
fn repeated_placeholders_are_kept_in_order() {
    assert_eq!(names("SELECT :a + :b_2 + :a"), vec![":a", ":b_2", ":a"]);
}

#[test]
fn occurrences_are_strictly_increasing() {
    let parser = Parser::new("INSERT INTO t VALUES (:a, :b, :c, :a)");
    let occ = parser.occurrences().unwrap();
    for pair in occ.windows(2) {
        assert!(pair[0].end() <= pair[1].position());
    }
}

#[test]
fn line_comment_ends_at_newline() {
    assert_eq!(names("-- :a\nSELECT :b"), vec![":b"]);
}

#[test]
fn unterminated_comment_and_string_swallow_the_rest() {
    assert!(names("SELECT 1 /* :a").is_empty());
    assert!(names("SELECT 'abc :a").is_empty());
}

#[test]
fn non_ascii_text_ends_placeholder() {
    assert_eq!(names("SELECT 'é', :aé"), vec![":a"]);
}

#[test]
fn bare_marker_is_an_error() {
    for (template, position) in [("a = : b", 4), ("a = :", 4), ("a = :'x'", 4), ("x, :ok, :)", 8)] {
        let err = Parser::new(template).scan().unwrap_err();
        match err {
            BindError::EmptyPlaceholderMarker { position: p } => assert_eq!(p, position),
            other => panic!("unexpected error for {template:?}: {other}"),
        }
    }
}

#[test]
fn failed_scan_is_not_recorded() {
    let parser = Parser::new("SELECT :a, :");
    assert!(parser.scan().is_err());
    assert!(!parser.is_scanned());
    assert!(parser.placeholders().is_err());
    assert!(!parser.has_placeholder("a"));
}

#[test]
fn scan_is_idempotent() {
    let parser = Parser::new("SELECT :a, :b");
    assert!(!parser.is_scanned());
    parser.scan().unwrap();
    let first = parser.occurrences().unwrap().to_vec();
    parser.scan().unwrap();
    assert!(parser.is_scanned());
    assert_eq!(parser.occurrences().unwrap(), first.as_slice());
}

#[test]
fn has_placeholder_lowercases_its_argument() {
    let parser = Parser::new("SELECT :id, :UserId");
    assert!(parser.has_placeholder("id"));
    assert!(parser.has_placeholder(":id"));
    assert!(parser.has_placeholder(":ID"));
    assert!(!parser.has_placeholder("UserId"));
    assert!(!parser.has_placeholder("missing"));
}

#[test]
fn missing_value_names_placeholder() {
    let parser = Parser::new("SELECT :a, :b");
    let err = parser.substitute(&values(&[(":a", "1")])).unwrap_err();
    assert!(err.is_missing_value());
    assert_eq!(err.placeholder(), Some(":b"));
}

#[test]
fn template_without_placeholders_is_unchanged() {
    let template = "SELECT 1::int -- :nothing";
    let parser = Parser::new(template);
    let sql = parser.substitute(&values(&[(":unused", "1")])).unwrap();
    assert_eq!(sql, template);
}

#[test]
fn literal_may_differ_in_length() {
    let parser = Parser::new("(:a,:bb)");
    let sql = parser
        .substitute(&values(&[(":a", "'long literal'"), (":bb", "1")]))
        .unwrap();
    assert_eq!(sql, "('long literal',1)");
}
