use std::{cell::RefCell, rc::Rc};

use embassy_futures::block_on;
use embassy_usb::driver::{
    Endpoint, EndpointAddress, EndpointError, EndpointIn, EndpointInfo, EndpointType,
};
use log::debug;
use sunhid_firmware::{
    config::Config,
    converter::KeyboardConverter,
    hid::{HidWriter, KEYBOARD_REPORT_ID, MOUSE_REPORT_ID},
    key_reporter::Reporter,
    macro_table::MacroTable,
    pointer::PointerFrameDecoder,
    sink::{HostEvent, MouseButton, ReportSink},
    sun_keyboard::SunKeyboard,
    target::{EncodedTarget, MacroStep},
};

use crate::{
    capture::{Delivery, Source},
    keycodes::{describe_key, modifiers_to_string},
};

type Packets = Rc<RefCell<Vec<Vec<u8>>>>;

/// Interrupt endpoint that keeps what would have been sent to the host.
struct PacketLog {
    info: EndpointInfo,
    packets: Packets,
}

impl PacketLog {
    fn new(packets: Packets) -> Self {
        Self {
            info: EndpointInfo {
                addr: EndpointAddress::from(0x81),
                ep_type: EndpointType::Interrupt,
                max_packet_size: 64,
                interval_ms: 1,
            },
            packets,
        }
    }
}

impl Endpoint for PacketLog {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}

impl EndpointIn for PacketLog {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        self.packets.borrow_mut().push(buf.to_vec());
        Ok(())
    }
}

#[derive(Default)]
struct Recorder(Vec<HostEvent>);

impl ReportSink for Recorder {
    fn push_event(&mut self, event: HostEvent) {
        self.0.push(event);
    }
}

/// Runs captured bytes through the converter and collects the HID reports it writes.
pub struct Replay<'t> {
    config: Config,
    keyboard: SunKeyboard,
    converter: KeyboardConverter<'t>,
    pointer: PointerFrameDecoder,
    reporter: Reporter<PacketLog>,
    packets: Packets,
}

impl<'t> Replay<'t> {
    pub fn new(table: &'t [u16], config: Config) -> Self {
        let packets = Packets::default();
        let mut converter = KeyboardConverter::new(table, &config);
        if let Some(layout) = config.force_layout {
            converter.set_layout(layout);
        }
        Self {
            config,
            keyboard: SunKeyboard::new(),
            converter,
            pointer: PointerFrameDecoder::new(),
            reporter: Reporter::new(HidWriter::new(PacketLog::new(packets.clone()))),
            packets,
        }
    }

    pub fn macros(&self) -> &MacroTable {
        self.converter.macros()
    }

    /// Returns the reports written for `delivery`.
    pub fn feed(&mut self, delivery: &Delivery) -> Vec<Vec<u8>> {
        let mut events = Recorder::default();
        match delivery.source {
            Source::Keyboard => {
                for b in &delivery.bytes {
                    if let Some(event) = self.keyboard.decode(*b) {
                        debug!("line {}: {:?}", delivery.line, event);
                        event.apply(&mut self.converter, &self.config, &mut events);
                    }
                }
            }
            Source::Mouse if self.config.use_mouse => {
                self.pointer.update_all(&delivery.bytes, &mut events);
            }
            Source::Mouse => debug!("line {}: mouse disabled", delivery.line),
        }

        for event in events.0 {
            block_on(self.reporter.report(event));
        }
        self.packets.take()
    }
}

pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_keys(modifiers: u8, keys: &[u8]) -> String {
    let mut parts = Vec::new();
    if modifiers != 0 {
        parts.push(modifiers_to_string(modifiers));
    }
    parts.extend(keys.iter().filter(|k| **k != 0).map(|k| describe_key(*k)));
    if parts.is_empty() {
        "-".into()
    } else {
        parts.join(" ")
    }
}

fn describe_buttons(buttons: u8) -> String {
    let names: String = [
        (MouseButton::Left, 'L'),
        (MouseButton::Middle, 'M'),
        (MouseButton::Right, 'R'),
    ]
    .iter()
    .filter(|(b, _)| buttons & b.usb_bit() != 0)
    .map(|(_, c)| *c)
    .collect();
    if names.is_empty() {
        "-".into()
    } else {
        names
    }
}

/// A human readable form of a HID input report.
pub fn describe_report(report: &[u8]) -> String {
    match report {
        [KEYBOARD_REPORT_ID, modifiers, _, keys @ ..] if keys.len() == 6 => {
            format!("keyboard {}", describe_keys(*modifiers, keys))
        }
        [MOUSE_REPORT_ID, buttons, dx, dy, ..] => format!(
            "mouse {} {:+} {:+}",
            describe_buttons(*buttons),
            *dx as i8,
            *dy as i8
        ),
        _ => format!("unknown {}", hex(report)),
    }
}

fn describe_steps(steps: &[MacroStep]) -> String {
    steps
        .iter()
        .map(|s| match s {
            MacroStep::Modifier(m) => modifiers_to_string(*m),
            MacroStep::Key(k) => describe_key(*k),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per mapped scan code: `code: target`.
pub fn table_lines(table: &[u16], macros: &MacroTable, use_macros: bool) -> Vec<String> {
    table
        .iter()
        .enumerate()
        .filter_map(|(code, raw)| {
            let target = match EncodedTarget::decode(*raw) {
                EncodedTarget::None => return None,
                EncodedTarget::Key(k) => describe_key(k),
                EncodedTarget::Modifier(m) => modifiers_to_string(m),
                EncodedTarget::Macro(id) if use_macros => {
                    format!("{} [{}]", id.name(), describe_steps(macros.get(id)))
                }
                EncodedTarget::Macro(id) => describe_key(id.plain_key()),
            };
            Some(format!("{code:02x}: {target}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod test;
