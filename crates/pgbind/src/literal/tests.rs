use super::*;
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use uuid::Uuid;

fn sql(value: impl ToSqlValue) -> String {
    to_sql(&value).unwrap()
}

fn json_path(value: impl ToSqlValue) -> String {
    to_json_path(&value).unwrap()
}

fn standard(value: impl ToSqlValue) -> String {
    encode_value(&value, BindOptions::new().without_extended_strings())
        .unwrap()
        .into_string()
}

#[test]
fn integers_are_unquoted() {
    assert_eq!(sql(123), "123");
    assert_eq!(sql(-7_i8), "-7");
    assert_eq!(sql(u64::MAX), "18446744073709551615");
    assert_eq!(sql(i128::MIN), "-170141183460469231731687303715884105728");
    assert_eq!(json_path(42_usize), "42");
}

#[test]
fn floats_use_shortest_form() {
    assert_eq!(sql(123.456), "123.456");
    assert_eq!(sql(0.1_f32), "0.1");
    assert_eq!(sql(2.0_f64), "2");
    assert_eq!(sql(f64::NAN), "'NaN'");
    assert_eq!(sql(f64::INFINITY), "'Infinity'");
    assert_eq!(sql(f64::NEG_INFINITY), "'-Infinity'");
    assert_eq!(json_path(f64::NAN), "\"NaN\"");
}

#[test]
fn booleans_and_null() {
    assert_eq!(sql(true), "TRUE");
    assert_eq!(sql(false), "FALSE");
    assert_eq!(json_path(true), "true");
    assert_eq!(sql(None::<i32>), "NULL");
    assert_eq!(json_path(None::<&str>), "null");
    assert_eq!(sql(SqlValue::Null), "NULL");
}

#[test]
fn text_is_escaped_and_quoted() {
    assert_eq!(sql("12'3"), r"E'12\'3'");
    assert_eq!(sql(r"a\b"), r"E'a\\b'");
    assert_eq!(sql(r"\'"), r"E'\\\''");
    assert_eq!(sql(String::from("plain")), "E'plain'");
    assert_eq!(sql('x'), "E'x'");
}

#[test]
fn text_without_extended_prefix_doubles_quotes() {
    assert_eq!(standard("12'3"), "'12''3'");
    assert_eq!(standard(r"a\b"), r"'a\b'");
}

#[test]
fn text_in_json_path_mode_is_a_json_string() {
    assert_eq!(json_path("12'3"), r#""12'3""#);
    assert_eq!(json_path(r#"say "hi""#), r#""say \"hi\"""#);
}

#[test]
fn text_is_trimmed_and_empty_is_null() {
    assert_eq!(sql("  hi \n"), "E'hi'");
    assert_eq!(sql(""), "NULL");
    assert_eq!(sql(" \t "), "NULL");
    assert_eq!(json_path(""), "null");
}

#[test]
fn bytes_are_hex_literals() {
    assert_eq!(sql(b"qwerty".to_vec()), r"E'\\x717765727479'");
    assert_eq!(sql(&[0x71_u8, 0x77][..]), r"E'\\x7177'");
    assert_eq!(standard(vec![0x71_u8, 0x77]), r"'\x7177'");
    assert_eq!(json_path(vec![0x71_u8, 0x77]), r#""\\x7177""#);
}

#[test]
fn durations_render_as_time_of_day() {
    assert_eq!(sql(Duration::from_secs(3723)), "'01:02:03'");
    assert_eq!(sql(Duration::from_millis(59_999)), "'00:00:59'");
    assert_eq!(sql(MAX_INTERVAL), "'24:00:00'");
    assert_eq!(json_path(Duration::from_secs(60)), "\"00:01:00\"");
}

#[test]
fn durations_over_a_day_are_rejected() {
    let err = to_sql(&(MAX_INTERVAL + Duration::from_secs(1))).unwrap_err();
    assert!(matches!(err, BindError::UnsupportedDurationRange(d) if d.as_secs() == 86_401));
}

#[test]
fn timestamps_have_microseconds_and_offset() {
    let naive = NaiveDate::from_ymd_opt(2022, 5, 31)
        .unwrap()
        .and_hms_nano_opt(16, 15, 42, 234_567)
        .unwrap();
    let utc = Utc.from_utc_datetime(&naive);
    assert_eq!(sql(utc), "'2022-05-31 16:15:42.000234 +0000'");
    assert_eq!(sql(naive), "'2022-05-31 16:15:42.000234 +0000'");

    let plus3 = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(
        sql(utc.with_timezone(&plus3)),
        "'2022-05-31 19:15:42.000234 +0300'"
    );
    assert_eq!(
        json_path(utc),
        "\"2022-05-31 16:15:42.000234 +0000\""
    );
}

#[test]
fn dates_and_uuids_are_quoted() {
    assert_eq!(sql(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()), "'2024-02-29'");
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(sql(id), "'67e55044-10b1-426f-9247-bb680e5fe0c8'");
    assert_eq!(json_path(id), "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");
}

#[test]
fn raw_json_is_escaped_in_sql_and_passed_through_in_json_path() {
    let raw = RawJson::new(r#"{"name":"O'Brien"}"#);
    assert_eq!(sql(&raw), r#"E'{"name":"O\'Brien"}'"#);
    assert_eq!(json_path(&raw), r#"{"name":"O'Brien"}"#);
    assert_eq!(sql(RawJson::default()), "NULL");
    assert_eq!(json_path(RawJson::default()), "null");
}

#[test]
fn json_values_are_serialized() {
    let value = serde_json::json!({"a": 1});
    assert_eq!(sql(&value), r#"E'{"a":1}'"#);
    assert_eq!(json_path(&value), r#"{"a":1}"#);

    #[derive(Serialize)]
    struct Event<'a> {
        kind: &'a str,
        count: u32,
    }
    let event = Json(Event {
        kind: "login",
        count: 2,
    });
    assert_eq!(json_path(&event), r#"{"kind":"login","count":2}"#);
}

#[test]
fn json_serialization_failure_is_reported() {
    let bad = Json(HashMap::from([((1, 2), 3)]));
    let err = to_sql(&bad).unwrap_err();
    assert!(matches!(err, BindError::StructuredSerializationFailure(_)));
}

#[test]
fn display_fallback_is_text() {
    let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
    assert_eq!(sql(Displayed(ip)), "E'127.0.0.1'");
    assert_eq!(sql(SqlValue::display(" padded ")), "E'padded'");
}

#[test]
fn text_like_flag() {
    let opts = BindOptions::default();
    assert!(!encode_value(&1, opts).unwrap().is_text());
    assert!(!encode_value(&true, opts).unwrap().is_text());
    assert!(!encode_value(&None::<String>, opts).unwrap().is_text());
    assert!(encode_value("a", opts).unwrap().is_text());
    assert!(encode_value(&vec![1_u8], opts).unwrap().is_text());
    assert!(encode_value(&Duration::from_secs(1), opts).unwrap().is_text());
    assert!(encode_value(&Uuid::nil(), opts).unwrap().is_text());
}

#[test]
fn smart_pointers_delegate() {
    use std::borrow::Cow;
    use std::sync::Arc;

    assert_eq!(sql(Box::new(5)), "5");
    assert_eq!(sql(Arc::new("a")), "E'a'");
    assert_eq!(sql(Cow::Borrowed("b")), "E'b'");
    assert_eq!(sql(Some(Some(1))), "1");
}

#[cfg(feature = "rust_decimal")]
#[test]
fn decimals_are_unquoted() {
    let d = rust_decimal::Decimal::new(12345, 2);
    assert_eq!(sql(d), "123.45");
}

#[cfg(feature = "time")]
#[test]
fn time_offset_datetime() {
    let dt = time::OffsetDateTime::from_unix_timestamp(1_654_013_742).unwrap();
    assert_eq!(sql(dt), "'2022-05-31 16:15:42.000000 +0000'");
}
