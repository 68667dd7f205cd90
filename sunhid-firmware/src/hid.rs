use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_usb::{
    class::hid::{ReportId, RequestHandler},
    control::OutResponse,
    driver::{EndpointError, EndpointIn},
};

pub const MOUSE_REPORT_ID: u8 = 1;
pub const KEYBOARD_REPORT_ID: u8 = 2;

/// `[id, modifiers, reserved, k0..k5]`
pub const KEYBOARD_REPORT_SIZE: usize = 9;
/// `[id, buttons, dx, dy, wheel, pan]`
pub const MOUSE_REPORT_SIZE: usize = 6;

pub struct HidWriter<E: EndpointIn, const N: usize> {
    ep_in: E,
}

impl<E: EndpointIn, const N: usize> HidWriter<E, N> {
    pub fn new(ep_in: E) -> Self {
        Self { ep_in }
    }

    /// Writes `report` to its interrupt endpoint.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        if report.len() > N {
            return Err(EndpointError::BufferOverflow);
        }

        let max_packet_size = usize::from(self.ep_in.info().max_packet_size);
        let zlp_needed = report.len() < N && report.len().is_multiple_of(max_packet_size);
        for chunk in report.chunks(max_packet_size) {
            self.ep_in.write(chunk).await?;
        }

        if zlp_needed {
            self.ep_in.write(&[]).await?;
        }

        Ok(())
    }
}

/// The LED state last set by the host, as a USB LED bit set.
pub struct LedSignal<M: RawMutex>(Signal<M, u8>);

impl<M: RawMutex> Default for LedSignal<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> LedSignal<M> {
    pub const fn new() -> Self {
        Self(Signal::new())
    }

    pub fn signal(&self, usb_leds: u8) {
        self.0.signal(usb_leds);
    }

    pub async fn wait(&self) -> u8 {
        self.0.wait().await
    }
}

/// Receives the keyboard's LED output report.
pub struct LedRequestHandler<'a, M: RawMutex> {
    leds: &'a LedSignal<M>,
}

impl<'a, M: RawMutex> LedRequestHandler<'a, M> {
    pub fn new(leds: &'a LedSignal<M>) -> Self {
        Self { leds }
    }
}

impl<M: RawMutex> RequestHandler for LedRequestHandler<'_, M> {
    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        let leds = match (id, data) {
            (ReportId::Out(_), [KEYBOARD_REPORT_ID, leds]) => *leds,
            (ReportId::Out(_), [leds]) => *leds,
            _ => {
                crate::debug!("Rejected report {:?}: {:?}", id, data);
                return OutResponse::Rejected;
            }
        };
        crate::debug!("host leds {:x}", leds);
        self.leds.signal(leds);
        OutResponse::Accepted
    }
}

#[cfg(test)]
#[path = "hid_test.rs"]
mod test;
