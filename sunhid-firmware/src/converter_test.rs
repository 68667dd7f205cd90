extern crate std;
use std::{vec, vec::Vec};

use sunhid_common::keycodes::{modifier, usage};

use crate::{key_report::KeyboardReport, sink::HostEvent, sun_to_usb::SUN_TO_USB};

use super::*;

const SUN_A: u8 = 0x4d;
const SUN_S: u8 = 0x4e;
const SUN_CTRL: u8 = 0x4c;
const SUN_AGAIN: u8 = 0x03;
const SUN_UNDO: u8 = 0x1a;
const SUN_LINE_FEED: u8 = 0x6f;

fn report(modifiers: u8, keys: [u8; 6]) -> HostEvent {
    HostEvent::Keyboard(KeyboardReport { modifiers, keys })
}

macro_rules! setup {
    ($conv:ident, $sink:ident, $x:block) => {
        setup!(Config::default(), $conv, $sink, $x)
    };
    ($config:expr, $conv:ident, $sink:ident, $x:block) => {{
        let config = $config;
        #[allow(unused_mut)]
        let mut $conv = KeyboardConverter::new(&SUN_TO_USB, &config);
        #[allow(unused_mut)]
        let mut $sink: Vec<HostEvent> = Vec::new();
        $x
    }};
}

#[test]
fn unmapped_codes_are_ignored() {
    setup!(conv, sink, {
        for code in [0x00, 0x0f, 0x4b, SUN_LINE_FEED, 0x73, 0x7e, 0x7f] {
            conv.handle_key(code, true, &mut sink);
            conv.handle_key(code, false, &mut sink);
        }
        // out of table range
        conv.handle_key(0x85, true, &mut sink);

        assert!(sink.is_empty());
        assert!(conv.key_report().report().is_empty());
    });
}

#[test]
fn key_press_and_release() {
    setup!(conv, sink, {
        conv.handle_key(SUN_A, true, &mut sink);
        conv.handle_key(SUN_S, true, &mut sink);
        conv.handle_key(SUN_A, false, &mut sink);
        conv.handle_key(SUN_S, false, &mut sink);

        assert_eq!(sink, vec![
            report(0, [usage::A, 0, 0, 0, 0, 0]),
            report(0, [usage::A, usage::S, 0, 0, 0, 0]),
            report(0, [0, usage::S, 0, 0, 0, 0]),
            report(0, [0; 6]),
        ]);
    });
}

#[test]
fn one_report_per_event() {
    setup!(conv, sink, {
        conv.handle_key(SUN_CTRL, true, &mut sink);
        conv.handle_key(SUN_A, true, &mut sink);
        // modifier already set: still reported
        conv.handle_key(SUN_CTRL, true, &mut sink);
        // key already down: nothing changed
        conv.handle_key(SUN_A, true, &mut sink);
        // spurious release
        conv.handle_key(SUN_S, false, &mut sink);

        assert_eq!(sink, vec![
            report(modifier::LCTRL, [0; 6]),
            report(modifier::LCTRL, [usage::A, 0, 0, 0, 0, 0]),
            report(modifier::LCTRL, [usage::A, 0, 0, 0, 0, 0]),
        ]);
    });
}

#[test]
fn seven_keys() {
    setup!(conv, sink, {
        // q w e r t y u
        for code in 0x36..=0x3c {
            conv.handle_key(code, true, &mut sink);
        }

        assert_eq!(sink.len(), 6);
        assert_eq!(
            conv.key_report().report().keys,
            [usage::Q, usage::W, usage::E, usage::R, usage::T, usage::Y]
        );
    });
}

#[test]
fn macro_press_and_release() {
    setup!(conv, sink, {
        conv.handle_key(SUN_AGAIN, true, &mut sink);

        assert_eq!(sink, vec![
            report(modifier::LCTRL, [0; 6]),
            report(modifier::LCTRL, [usage::Y, 0, 0, 0, 0, 0]),
        ]);
        sink.clear();

        conv.handle_key(SUN_AGAIN, false, &mut sink);

        // same order on release
        assert_eq!(sink, vec![
            report(0, [usage::Y, 0, 0, 0, 0, 0]),
            report(0, [0; 6]),
        ]);
    });
}

#[test]
fn macro_steps_that_change_nothing_are_not_sent() {
    setup!(conv, sink, {
        conv.handle_key(0x64, true, &mut sink); // Z
        sink.clear();

        conv.handle_key(SUN_UNDO, true, &mut sink);

        assert_eq!(sink, vec![report(modifier::LCTRL, [usage::Z, 0, 0, 0, 0, 0])]);
    });
}

#[test]
fn macros_disabled() {
    let config = Config {
        use_macros: false,
        ..Default::default()
    };
    setup!(config, conv, sink, {
        conv.handle_key(SUN_AGAIN, true, &mut sink);
        conv.handle_key(SUN_AGAIN, false, &mut sink);

        assert_eq!(sink, vec![
            report(0, [usage::AGAIN, 0, 0, 0, 0, 0]),
            report(0, [0; 6]),
        ]);
    });
}

#[test]
fn layout_adjusts_macros_once() {
    setup!(conv, sink, {
        assert!(conv.set_layout(Layout::Germany));
        assert!(!conv.set_layout(Layout::UnitedStates));

        conv.handle_key(SUN_UNDO, true, &mut sink);

        assert_eq!(
            sink.last(),
            Some(&report(modifier::LCTRL, [usage::Y, 0, 0, 0, 0, 0]))
        );
    });
}

#[test]
fn release_all() {
    setup!(conv, sink, {
        conv.handle_key(SUN_CTRL, true, &mut sink);
        conv.handle_key(SUN_A, true, &mut sink);
        sink.clear();

        conv.release_all(&mut sink);

        assert_eq!(sink, vec![report(0, [0; 6])]);
    });
}

#[test]
fn lookup() {
    let config = Config::default();
    let conv = KeyboardConverter::new(&SUN_TO_USB, &config);

    assert_eq!(conv.lookup(SUN_A), EncodedTarget::Key(usage::A));
    assert_eq!(conv.lookup(SUN_CTRL), EncodedTarget::Modifier(modifier::LCTRL));
    assert_eq!(conv.lookup(0x49), EncodedTarget::Macro(MacroId::Paste));
    assert_eq!(conv.lookup(0x7f), EncodedTarget::None);
    assert_eq!(conv.lookup(0xff), EncodedTarget::None);
}

#[test]
fn custom_table() {
    let table = [
        0,
        EncodedTarget::key(usage::Y),
        EncodedTarget::modifier(modifier::RALT),
    ];
    let config = Config::default();
    let mut conv = KeyboardConverter::new(&table, &config);
    let mut sink = Vec::new();

    conv.handle_key(2, true, &mut sink);
    conv.handle_key(1, true, &mut sink);
    conv.handle_key(3, true, &mut sink);

    assert_eq!(sink, vec![
        report(modifier::RALT, [0; 6]),
        report(modifier::RALT, [usage::Y, 0, 0, 0, 0, 0]),
    ]);
}
