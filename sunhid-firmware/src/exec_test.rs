use embassy_futures::block_on;
use sunhid_common::{
    keycodes::{modifier, usage},
    layouts::Layout,
};

use crate::{
    key_report::KeyboardReport,
    sink::{HostEvent, MouseButton},
    test_stub::{MyDelay, MyEndpointIn, MyReader, MyWriter},
};

use super::*;

extern crate std;
use std::{vec, vec::Vec};

const GREETING: [u8; 6] = [0x0e, 0x0f, 0x02, 0x03, 0x0e, 0x00];

#[test]
fn greeting_blinks_and_beeps() {
    block_on(async {
        let mut tx = MyWriter::default();
        let mut delay = MyDelay::default();

        greeting(&mut tx, &mut delay).await.unwrap();

        assert_eq!(tx.take(), GREETING);
        assert_eq!(delay.total_ns, 500_000_000);
    });
}

#[test]
fn startup_requests_layout() {
    block_on(async {
        let config = Config::default();
        let mut converter = KeyboardConverter::new(&SUN_TO_USB, &config);
        let mut tx = MyWriter::default();
        let mut delay = MyDelay::default();

        startup(&mut tx, &mut delay, &config, &mut converter)
            .await
            .unwrap();

        let mut expected = vec![0x01];
        expected.extend_from_slice(&GREETING);
        expected.push(0x0f);
        assert_eq!(tx.take(), expected);
        assert!(!converter.macros().is_adjusted());
    });
}

#[test]
fn startup_with_forced_layout() {
    block_on(async {
        let config = Config {
            force_layout: Some(Layout::SwissGerman),
            startup_greeting: false,
            ..Default::default()
        };
        let mut converter = KeyboardConverter::new(&SUN_TO_USB, &config);
        let mut tx = MyWriter::default();
        let mut delay = MyDelay::default();

        startup(&mut tx, &mut delay, &config, &mut converter)
            .await
            .unwrap();

        assert_eq!(tx.take(), [0x01]);
        assert_eq!(delay.total_ns, 0);
        assert!(converter.macros().is_adjusted());
    });
}

#[test]
fn startup_with_key_click() {
    block_on(async {
        let config = Config {
            startup_greeting: false,
            key_click: true,
            ..Default::default()
        };
        let mut converter = KeyboardConverter::new(&SUN_TO_USB, &config);
        let mut tx = MyWriter::default();
        let mut delay = MyDelay::default();

        startup(&mut tx, &mut delay, &config, &mut converter)
            .await
            .unwrap();

        assert_eq!(tx.take(), [0x01, 0x0a, 0x0f]);
    });
}

#[test]
fn keyboard_stream() {
    block_on(async {
        let config = Config::default();
        let mut converter = KeyboardConverter::new(&SUN_TO_USB, &config);
        let mut rx = MyReader::new(&[&[0x4c, 0x4d], &[0xcd], &[0xcc]]);
        let mut sink = Vec::new();

        run_keyboard(&mut rx, &mut converter, &config, &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, vec![
            HostEvent::Keyboard(KeyboardReport {
                modifiers: modifier::LCTRL,
                keys: [0; 6]
            }),
            HostEvent::Keyboard(KeyboardReport {
                modifiers: modifier::LCTRL,
                keys: [usage::A, 0, 0, 0, 0, 0]
            }),
            HostEvent::Keyboard(KeyboardReport {
                modifiers: modifier::LCTRL,
                keys: [0; 6]
            }),
            HostEvent::Keyboard(KeyboardReport::default()),
        ]);
    });
}

#[test]
fn mouse_stream() {
    block_on(async {
        let mut decoder = PointerFrameDecoder::new();
        let mut rx = MyReader::new(&[&[0x80, 0x05], &[0xfb, 0x83, 0x00], &[0x00, 0x80]]);
        let mut sink = Vec::new();

        run_mouse(&mut rx, &mut decoder, &mut sink).await.unwrap();

        assert_eq!(sink, vec![
            HostEvent::MouseMove(5, 5),
            HostEvent::MouseButton(MouseButton::Middle, false),
            HostEvent::MouseButton(MouseButton::Right, false),
        ]);
    });
}

#[test]
fn host_leds() {
    block_on(async {
        let leds = LedSignal::<NoopRawMutex>::default();
        let mut tx = MyWriter::default();

        // num lock and caps lock
        leds.signal(0x03);
        select(run_leds(&mut tx, &leds), core::future::ready(())).await;

        assert_eq!(tx.take(), [0x0e, 0x09]);
    });
}

#[test]
fn run_until_keyboard_closes() {
    block_on(async {
        let tx = MyWriter::default();
        let ep_in = MyEndpointIn::default();
        let messages = ep_in.messages.clone();
        let leds = LedSignal::<NoopRawMutex>::default();
        let rx = MyReader::new(&[&[0xfe, 0x05], &[0x4d, 0xcd, 0x1a]]);

        let res = run(
            rx,
            tx.clone(),
            None::<MyReader>,
            MyDelay::default(),
            ep_in,
            &leds,
            Config::default(),
        )
        .await;

        assert_eq!(res, Ok(()));

        let mut expected = vec![0x01];
        expected.extend_from_slice(&GREETING);
        expected.push(0x0f);
        assert_eq!(tx.take(), expected);

        assert_eq!(messages.take(), vec![
            vec![2, 0, 0, usage::A, 0, 0, 0, 0, 0],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0],
            // german Undo
            vec![2, modifier::LCTRL, 0, 0, 0, 0, 0, 0, 0],
            vec![2, modifier::LCTRL, 0, usage::Y, 0, 0, 0, 0, 0],
        ]);
    });
}
