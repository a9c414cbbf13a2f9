use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use super::ClockTime;
use crate::error::{ClockError, TimeField};

// -- new -------------------------------------------------------------------

#[test]
fn new_accepts_valid_times() {
    for (h, m, s) in [(1, 13, 16), (18, 1, 0), (0, 0, 0), (23, 59, 59)] {
        let t = ClockTime::new(h, m, s).unwrap();
        assert_eq!(
            (i64::from(t.hour()), i64::from(t.minute()), i64::from(t.second())),
            (h, m, s)
        );
    }
}

#[test]
fn new_round_trips_every_valid_input() {
    for h in 0..24 {
        for m in 0..60 {
            for s in 0..60 {
                let t = ClockTime::new(h, m, s).unwrap();
                assert_eq!(i64::from(t.hour()), h);
                assert_eq!(i64::from(t.minute()), m);
                assert_eq!(i64::from(t.second()), s);
            }
        }
    }
}

#[test]
fn new_rejects_out_of_range_fields() {
    let cases = [
        ((-1, 13, 16), TimeField::Hour, -1),
        ((24, 13, 16), TimeField::Hour, 24),
        ((12, -1, 16), TimeField::Minute, -1),
        ((12, 60, 16), TimeField::Minute, 60),
        ((12, 13, -1), TimeField::Second, -1),
        ((12, 13, 60), TimeField::Second, 60),
    ];
    for ((h, m, s), field, value) in cases {
        let err = ClockTime::new(h, m, s).unwrap_err();
        assert_eq!(err, ClockError::InvalidRange { field, value }, "input {h}:{m}:{s}");
    }
}

#[test]
fn new_reports_hour_before_minute_before_second() {
    let err = ClockTime::new(99, 99, 99).unwrap_err();
    assert_eq!(err.field(), Some(TimeField::Hour));

    let err = ClockTime::new(1, 99, 99).unwrap_err();
    assert_eq!(err.field(), Some(TimeField::Minute));
}

#[test]
fn invalid_range_message_names_field_and_value() {
    let err = ClockTime::new(12, 75, 0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid minute 75 (expected 0..=59)");
}

// -- from_host / matches ---------------------------------------------------

#[test]
fn from_host_ignores_date() {
    for (h, m, s) in [(1, 13, 16), (18, 1, 0)] {
        let host = Utc.with_ymd_and_hms(2018, 12, 25, h, m, s).unwrap();
        let expected = ClockTime::new(h.into(), m.into(), s.into()).unwrap();
        assert_eq!(ClockTime::from_host(&host), expected);
    }
}

#[test]
fn from_host_drops_sub_second_part() {
    let host = NaiveDate::from_ymd_opt(2018, 12, 25)
        .unwrap()
        .and_hms_milli_opt(7, 30, 5, 999)
        .unwrap();
    assert_eq!(ClockTime::from_host(&host), ClockTime::new(7, 30, 5).unwrap());
}

#[test]
fn matches_compares_all_three_fields() {
    let t = ClockTime::new(6, 45, 30).unwrap();
    assert!(t.matches(&NaiveTime::from_hms_opt(6, 45, 30).unwrap()));
    assert!(t.matches(&NaiveTime::from_hms_milli_opt(6, 45, 30, 500).unwrap()));
    assert!(!t.matches(&NaiveTime::from_hms_opt(6, 45, 31).unwrap()));
    assert!(!t.matches(&NaiveTime::from_hms_opt(6, 46, 30).unwrap()));
    assert!(!t.matches(&NaiveTime::from_hms_opt(18, 45, 30).unwrap()));
}

// -- formatting and parsing ------------------------------------------------

#[test]
fn display_is_zero_padded() {
    assert_eq!(ClockTime::new(1, 13, 16).unwrap().to_string(), "01:13:16");
    assert_eq!(ClockTime::new(18, 1, 0).unwrap().to_string(), "18:01:00");
    assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00:00");
}

#[test]
fn parse_accepts_short_and_long_forms() {
    assert_eq!("07:05:09".parse::<ClockTime>().unwrap(), ClockTime::new(7, 5, 9).unwrap());
    assert_eq!("7:05".parse::<ClockTime>().unwrap(), ClockTime::new(7, 5, 0).unwrap());
    assert_eq!(" 23:59:59 ".parse::<ClockTime>().unwrap(), ClockTime::new(23, 59, 59).unwrap());
}

#[test]
fn parse_rejects_garbage() {
    for input in ["", "12", "12:", "aa:bb:cc", "1:2:3:4", "+1:00:00", "123:00:00"] {
        assert!(
            matches!(input.parse::<ClockTime>(), Err(ClockError::Malformed(_))),
            "expected malformed for {input:?}"
        );
    }
}

#[test]
fn parse_range_checks_fields() {
    let err = "24:00:00".parse::<ClockTime>().unwrap_err();
    assert_eq!(err, ClockError::InvalidRange { field: TimeField::Hour, value: 24 });
}

#[test]
fn serde_uses_clock_string() {
    let t = ClockTime::new(9, 0, 5).unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:00:05\"");
    let back: ClockTime = serde_json::from_str("\"09:00:05\"").unwrap();
    assert_eq!(back, t);
    assert!(serde_json::from_str::<ClockTime>("\"25:00:00\"").is_err());
}

// -- arithmetic ------------------------------------------------------------

#[test]
fn offset_wraps_around_midnight() {
    let late = ClockTime::new(23, 59, 59).unwrap();
    assert_eq!(late.offset_seconds(1), ClockTime::MIDNIGHT);
    assert_eq!(ClockTime::MIDNIGHT.offset_seconds(-1), late);
    assert_eq!(
        ClockTime::new(10, 0, 0).unwrap().offset_seconds(90),
        ClockTime::new(10, 1, 30).unwrap()
    );
}

#[test]
fn offset_handles_extreme_deltas() {
    let t = ClockTime::new(12, 0, 0).unwrap();
    // i64::MAX is 55_807 s past a whole number of days.
    assert_eq!(t.offset_seconds(i64::MAX), ClockTime::new(3, 30, 7).unwrap());
    // i64::MIN is 30_592 s past a whole number of days.
    assert_eq!(t.offset_seconds(i64::MIN), ClockTime::new(20, 29, 52).unwrap());
}

#[test]
fn ordering_is_chronological() {
    let mut times = vec![
        ClockTime::new(18, 1, 0).unwrap(),
        ClockTime::new(1, 13, 16).unwrap(),
        ClockTime::new(1, 13, 15).unwrap(),
    ];
    times.sort();
    let rendered: Vec<String> = times.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["01:13:15", "01:13:16", "18:01:00"]);
}

#[test]
fn converts_into_naive_time() {
    let t = ClockTime::new(4, 5, 6).unwrap();
    assert_eq!(NaiveTime::from(t), NaiveTime::from_hms_opt(4, 5, 6).unwrap());
}
