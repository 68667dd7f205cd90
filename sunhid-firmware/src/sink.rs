use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, Sender},
};

use crate::key_report::KeyboardReport;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The button's bit in a USB mouse report.
    pub fn usb_bit(self) -> u8 {
        match self {
            Self::Left => 0x01,
            Self::Right => 0x02,
            Self::Middle => 0x04,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostEvent {
    Keyboard(KeyboardReport),
    MouseButton(MouseButton, bool),
    MouseMove(i8, i8),
}

/// Queue of [`HostEvent`]s between the converter tasks and the USB reporter.
pub struct HostChannel<M: RawMutex, const N: usize>(Channel<M, HostEvent, N>);

impl<M: RawMutex, const N: usize> Default for HostChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}

impl<M: RawMutex, const N: usize> HostChannel<M, N> {
    pub async fn receive(&self) -> HostEvent {
        self.0.receive().await
    }

    pub fn try_receive(&self) -> Option<HostEvent> {
        self.0.try_receive().ok()
    }

    pub fn sender(&self) -> Sender<'_, M, HostEvent, N> {
        self.0.sender()
    }
}

/// Receives everything the converters want to tell the host.
pub trait ReportSink {
    fn push_event(&mut self, event: HostEvent);

    fn keyboard(&mut self, report: &KeyboardReport) {
        self.push_event(HostEvent::Keyboard(*report));
    }

    fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.push_event(HostEvent::MouseButton(button, pressed));
    }

    fn mouse_move(&mut self, dx: i8, dy: i8) {
        self.push_event(HostEvent::MouseMove(dx, dy));
    }
}

impl<T: ReportSink + ?Sized> ReportSink for &mut T {
    fn push_event(&mut self, event: HostEvent) {
        (**self).push_event(event);
    }
}

impl<M: RawMutex, const N: usize> ReportSink for Sender<'_, M, HostEvent, N> {
    fn push_event(&mut self, event: HostEvent) {
        if self.try_send(event).is_err() {
            crate::warn!("host channel full, dropping {:?}", event);
        }
    }
}

impl<const N: usize> ReportSink for heapless::Vec<HostEvent, N> {
    fn push_event(&mut self, event: HostEvent) {
        if self.push(event).is_err() {
            crate::warn!("event buffer full, dropping {:?}", event);
        }
    }
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod test;
