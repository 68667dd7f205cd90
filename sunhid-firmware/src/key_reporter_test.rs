use embassy_futures::{block_on, select::select};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use crate::{
    hid::HidWriter,
    sink::{MouseButton, ReportSink},
    test_stub::MyEndpointIn,
};

use super::*;

extern crate std;
use std::vec;

macro_rules! setup {
    ($messages:ident, $rep:ident, $x:tt) => {
        block_on(async {
            let ep_in = MyEndpointIn::default();
            let $messages = ep_in.messages.clone();
            let hid_writer = HidWriter::new(ep_in);
            let mut $rep = Reporter::new(hid_writer);

            $x
        });
    };
}

#[test]
fn keyboard() {
    setup!(messages, reporter, {
        reporter
            .report(HostEvent::Keyboard(KeyboardReport {
                modifiers: 0x22,
                keys: [4, 0, 5, 0, 0, 0x1d],
            }))
            .await;
        reporter
            .report(HostEvent::Keyboard(KeyboardReport::default()))
            .await;

        assert_eq!(messages.take(), vec![
            vec![2, 0x22, 0, 4, 0, 5, 0, 0, 0x1d],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0],
        ]);
    });
}

#[test]
fn mouse_buttons() {
    setup!(messages, reporter, {
        reporter
            .report(HostEvent::MouseButton(MouseButton::Left, true))
            .await;
        reporter
            .report(HostEvent::MouseButton(MouseButton::Middle, true))
            .await;
        // already down
        reporter
            .report(HostEvent::MouseButton(MouseButton::Left, true))
            .await;
        reporter
            .report(HostEvent::MouseButton(MouseButton::Left, false))
            .await;
        // already up
        reporter
            .report(HostEvent::MouseButton(MouseButton::Right, false))
            .await;
        reporter
            .report(HostEvent::MouseButton(MouseButton::Right, true))
            .await;

        assert_eq!(messages.take(), vec![
            vec![1, 1, 0, 0, 0, 0],
            vec![1, 5, 0, 0, 0, 0],
            vec![1, 4, 0, 0, 0, 0],
            vec![1, 6, 0, 0, 0, 0],
        ]);
    });
}

#[test]
fn mouse_move() {
    setup!(messages, reporter, {
        reporter
            .report(HostEvent::MouseButton(MouseButton::Right, true))
            .await;
        reporter.report(HostEvent::MouseMove(5, -2)).await;
        reporter.report(HostEvent::MouseMove(-128, 127)).await;

        assert_eq!(messages.take(), vec![
            vec![1, 2, 0, 0, 0, 0],
            vec![1, 2, 5, 0xfe, 0, 0],
            vec![1, 2, 0x80, 0x7f, 0, 0],
        ]);
    });
}

#[test]
fn write_errors_are_dropped() {
    block_on(async {
        let mut ep_in = MyEndpointIn::default();
        ep_in.fail = true;
        let messages = ep_in.messages.clone();
        let mut reporter = Reporter::new(HidWriter::new(ep_in));

        reporter.report(HostEvent::MouseMove(1, 1)).await;

        assert!(messages.take().is_empty());
    });
}

#[test]
fn drains_channel() {
    let channel = HostChannel::<NoopRawMutex, 4>::default();
    let mut sender = channel.sender();
    sender.mouse_move(3, 4);
    sender.keyboard(&KeyboardReport::default());

    setup!(messages, reporter, {
        // run stops at the first empty receive; select polls it before the ready future
        select(reporter.run(&channel), core::future::ready(())).await;

        assert_eq!(messages.take(), vec![
            vec![1, 0, 3, 4, 0, 0],
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0],
        ]);
    });
}
