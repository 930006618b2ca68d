// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR through the full decode path. Parameter handling details are unit tested in
//! `sgr_ops`.

use super::test_fixtures::{SinkEvent, create_test_emulator, decode, run_to_end};
use crate::{Color, TextAttributes};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_sgr_is_reset() {
    let mut emulator = create_test_emulator("\x1b[1;31m\x1b[m");
    run_to_end(&mut emulator);
    assert!(emulator.attributes().is_default());
}

#[test]
fn test_each_sgr_reports_the_whole_pen() {
    let sink = decode("\x1b[1m\x1b[4m\x1b[38;2;255;128;0m");
    let expected = TextAttributes {
        bold: true,
        underline: true,
        foreground: Some(Color::Rgb(255, 128, 0)),
        ..TextAttributes::default()
    };
    assert_eq!(sink.events.last(), Some(&SinkEvent::SetAttributes(expected)));
    assert_eq!(sink.events.len(), 3, "one set_attributes call per sequence");
}

#[test]
fn test_ls_color_output() {
    // `ls --color` style: bold blue directory name, then reset.
    let sink = decode("\x1b[0m\x1b[01;34msrc\x1b[0m\n");
    let dir = TextAttributes {
        bold: true,
        foreground: Some(Color::Indexed(4)),
        ..TextAttributes::default()
    };
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::SetAttributes(TextAttributes::default()),
            SinkEvent::SetAttributes(dir),
            SinkEvent::Glyphs("s".into(), dir),
            SinkEvent::Glyphs("r".into(), dir),
            SinkEvent::Glyphs("c".into(), dir),
            SinkEvent::SetAttributes(TextAttributes::default()),
            SinkEvent::LineFeed,
        ]
    );
}

#[test]
fn test_colon_palette_color() {
    let mut emulator = create_test_emulator("\x1b[38:5:196m");
    run_to_end(&mut emulator);
    assert_eq!(emulator.attributes().foreground, Some(Color::Indexed(196)));
}

#[test]
fn test_colon_rgb_color_between_other_params() {
    let mut emulator = create_test_emulator("\x1b[1;38:2::255:0:0m");
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![]);
    let expected = TextAttributes {
        bold: true,
        foreground: Some(Color::Rgb(255, 0, 0)),
        ..TextAttributes::default()
    };
    assert_eq!(*emulator.attributes(), expected);
}

#[test]
fn test_curly_underline_from_neovim() {
    let sink = decode("\x1b[4:3mx\x1b[4:0my");
    let curly = TextAttributes {
        underline: true,
        ..TextAttributes::default()
    };
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::SetAttributes(curly),
            SinkEvent::Glyphs("x".into(), curly),
            SinkEvent::SetAttributes(TextAttributes::default()),
            SinkEvent::Glyphs("y".into(), TextAttributes::default()),
        ]
    );
}

#[test]
fn test_bright_background() {
    let mut emulator = create_test_emulator("\x1b[103m");
    run_to_end(&mut emulator);
    assert_eq!(emulator.attributes().background, Some(Color::Indexed(11)));
}
