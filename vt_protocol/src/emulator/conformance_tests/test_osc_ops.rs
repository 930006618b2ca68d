// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC titles and hyperlinks, and DCS strings (absorbed).

use super::test_fixtures::{SinkEvent, decode};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("\x1b]2;my title\x07" ; "bel terminated")]
#[test_case("\x1b]2;my title\x1b\\" ; "st terminated")]
fn test_window_title(input: &str) {
    assert_eq!(
        decode(input).events,
        vec![SinkEvent::WindowTitle("my title".into())]
    );
}

#[test]
fn test_icon_title() {
    assert_eq!(
        decode("\x1b]1;icon\x07").events,
        vec![SinkEvent::IconTitle("icon".into())]
    );
}

#[test]
fn test_osc_0_sets_both_titles() {
    assert_eq!(
        decode("\x1b]0;both\x07").events,
        vec![
            SinkEvent::IconTitle("both".into()),
            SinkEvent::WindowTitle("both".into()),
        ]
    );
}

#[test]
fn test_title_may_contain_semicolons_and_utf8() {
    assert_eq!(
        decode("\x1b]2;a;b → ü\x07").events,
        vec![SinkEvent::WindowTitle("a;b → ü".into())]
    );
}

#[test]
fn test_hyperlink_open_and_close() {
    let sink = decode("\x1b]8;;https://r3bl.com\x1b\\link\x1b]8;;\x1b\\");
    assert_eq!(
        sink.controls(),
        vec![
            SinkEvent::Hyperlink(Some("https://r3bl.com".into())),
            SinkEvent::Hyperlink(None),
        ]
    );
    assert_eq!(sink.text(), "link");
}

#[test]
fn test_hyperlink_with_id_param() {
    assert_eq!(
        decode("\x1b]8;id=42;file:///tmp/a.txt\x07").events,
        vec![SinkEvent::Hyperlink(Some("file:///tmp/a.txt".into()))]
    );
}

#[test]
fn test_unknown_osc_is_absorbed() {
    let sink = decode("\x1b]52;c;aGVsbG8=\x07ok");
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.text(), "ok");
}

#[test]
fn test_c0_inside_osc_is_ignored() {
    assert_eq!(
        decode("\x1b]2;a\x0db\x07").events,
        vec![SinkEvent::WindowTitle("ab".into())]
    );
}

#[test]
fn test_dcs_is_absorbed() {
    // BEL does not end DCS, only ST does.
    let sink = decode("\x1bP1$r0m\x07more\x1b\\after");
    assert_eq!(sink.text(), "after");
    assert_eq!(sink.controls(), vec![]);
}
