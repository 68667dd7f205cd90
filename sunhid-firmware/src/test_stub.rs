extern crate std;

use core::{cell::RefCell, convert::Infallible};
use embassy_usb::driver::{
    Endpoint, EndpointAddress, EndpointError, EndpointIn, EndpointInfo, EndpointType,
};
use std::{collections::VecDeque, rc::Rc, vec::Vec};

use crate::sink::{HostEvent, ReportSink};

impl ReportSink for Vec<HostEvent> {
    fn push_event(&mut self, event: HostEvent) {
        self.push(event);
    }
}

#[derive(Clone, Default)]
pub struct Messages(Rc<RefCell<Vec<Vec<u8>>>>);

impl Messages {
    pub fn take(&self) -> Vec<Vec<u8>> {
        self.0.take()
    }

    fn push(&self, msg: &[u8]) {
        self.0.borrow_mut().push(Vec::from(msg));
    }
}

/// Interrupt IN endpoint that records every packet written to it.
pub struct MyEndpointIn {
    pub messages: Messages,
    pub info: EndpointInfo,
    pub fail: bool,
}

impl MyEndpointIn {
    pub fn with_packet_size(max_packet_size: u16) -> Self {
        Self {
            messages: Messages::default(),
            info: EndpointInfo {
                addr: EndpointAddress::from(0x81),
                ep_type: EndpointType::Interrupt,
                max_packet_size,
                interval_ms: 1,
            },
            fail: false,
        }
    }
}

impl Default for MyEndpointIn {
    fn default() -> Self {
        Self::with_packet_size(64)
    }
}

impl Endpoint for MyEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}

impl EndpointIn for MyEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        if self.fail {
            return Err(EndpointError::Disabled);
        }
        self.messages.push(buf);
        Ok(())
    }
}

/// Serial receiver that hands out the queued deliveries one `read` at a time and then reports
/// end of stream.
#[derive(Default)]
pub struct MyReader {
    deliveries: VecDeque<Vec<u8>>,
}

impl MyReader {
    pub fn new(deliveries: &[&[u8]]) -> Self {
        Self {
            deliveries: deliveries.iter().map(|d| Vec::from(*d)).collect(),
        }
    }
}

impl embedded_io_async::ErrorType for MyReader {
    type Error = Infallible;
}

impl embedded_io_async::Read for MyReader {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let Some(mut delivery) = self.deliveries.pop_front() else {
            return Ok(0);
        };
        let n = delivery.len().min(buf.len());
        buf[..n].copy_from_slice(&delivery[..n]);
        if n < delivery.len() {
            self.deliveries.push_front(delivery.split_off(n));
        }
        Ok(n)
    }
}

/// Serial transmitter recording everything written to it.
#[derive(Clone, Default)]
pub struct MyWriter(pub Rc<RefCell<Vec<u8>>>);

impl MyWriter {
    pub fn take(&self) -> Vec<u8> {
        self.0.take()
    }
}

impl embedded_io_async::ErrorType for MyWriter {
    type Error = Infallible;
}

impl embedded_io_async::Write for MyWriter {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Returns immediately, keeping a total of the time asked for.
#[derive(Default)]
pub struct MyDelay {
    pub total_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for MyDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
