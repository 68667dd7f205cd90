use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_usb::driver::EndpointIn;

use crate::{
    hid::{
        HidWriter, KEYBOARD_REPORT_ID, KEYBOARD_REPORT_SIZE, MOUSE_REPORT_ID, MOUSE_REPORT_SIZE,
    },
    key_report::KeyboardReport,
    sink::{HostChannel, HostEvent},
    warn,
};

/// Writes [`HostEvent`]s to the host as HID input reports.
pub struct Reporter<E: EndpointIn> {
    hid_writer: HidWriter<E, KEYBOARD_REPORT_SIZE>,
    mouse_buttons: u8,
}

impl<E: EndpointIn> Reporter<E> {
    pub fn new(hid_writer: HidWriter<E, KEYBOARD_REPORT_SIZE>) -> Self {
        Self {
            hid_writer,
            mouse_buttons: 0,
        }
    }

    pub async fn run<M: RawMutex, const N: usize>(&mut self, channel: &HostChannel<M, N>) -> ! {
        loop {
            self.report(channel.receive().await).await;
        }
    }

    async fn write_report(&mut self, report: &[u8]) {
        if let Err(e) = self.hid_writer.write(report).await {
            warn!("Failed to send report: {:?}", e);
        }
    }

    async fn write_mouse_report(&mut self, dx: i8, dy: i8) {
        let report: [u8; MOUSE_REPORT_SIZE] = [
            MOUSE_REPORT_ID,
            self.mouse_buttons,
            dx as u8,
            dy as u8,
            0,
            0,
        ];
        self.write_report(&report).await;
    }

    pub async fn report(&mut self, event: HostEvent) {
        match event {
            HostEvent::Keyboard(report) => {
                self.write_report(&keyboard_report(&report)).await;
            }
            HostEvent::MouseButton(button, pressed) => {
                let buttons = if pressed {
                    self.mouse_buttons | button.usb_bit()
                } else {
                    self.mouse_buttons & !button.usb_bit()
                };
                if buttons != self.mouse_buttons {
                    self.mouse_buttons = buttons;
                    self.write_mouse_report(0, 0).await;
                }
            }
            HostEvent::MouseMove(dx, dy) => self.write_mouse_report(dx, dy).await,
        }
    }
}

pub fn keyboard_report(report: &KeyboardReport) -> [u8; KEYBOARD_REPORT_SIZE] {
    let mut data = [0; KEYBOARD_REPORT_SIZE];
    data[0] = KEYBOARD_REPORT_ID;
    data[1] = report.modifiers;
    data[3..].copy_from_slice(&report.keys);
    data
}

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
