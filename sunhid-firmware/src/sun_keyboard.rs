use heapless::Vec;
use sunhid_common::{
    layouts::Layout,
    sun_protocol::{command, response},
};

use crate::{config::Config, converter::KeyboardConverter, sink::ReportSink};

/// Something the keyboard told us.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardEvent {
    Key { code: u8, pressed: bool },
    AllReleased,
    Reset { keyboard_type: u8 },
    Layout(Layout),
    Error(u8),
}

impl KeyboardEvent {
    /// Feeds the event to `converter`.
    pub fn apply(
        self,
        converter: &mut KeyboardConverter<'_>,
        config: &Config,
        sink: &mut impl ReportSink,
    ) {
        match self {
            Self::Key { code, pressed } => converter.handle_key(code, pressed, sink),
            Self::AllReleased => converter.release_all(sink),
            Self::Reset { keyboard_type } => {
                crate::info!("keyboard reset, type {}", keyboard_type);
                converter.release_all(sink);
            }
            Self::Layout(layout) => {
                if !converter.set_layout(config.layout(layout)) {
                    crate::debug!("ignoring layout {:?}", layout);
                }
            }
            Self::Error(code) => crate::warn!("keyboard error {:x}", code),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
enum Expect {
    #[default]
    ScanCode,
    KeyboardType,
    LayoutId,
    ErrorCode,
}

/// Splits the byte stream received from a Sun keyboard into [`KeyboardEvent`]s.
#[derive(Debug, Default)]
pub struct SunKeyboard {
    expect: Expect,
}

impl SunKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, byte: u8) -> Option<KeyboardEvent> {
        let expect = core::mem::take(&mut self.expect);
        match expect {
            Expect::KeyboardType => Some(KeyboardEvent::Reset {
                keyboard_type: byte,
            }),
            Expect::LayoutId => Some(KeyboardEvent::Layout(Layout::from_id(byte))),
            Expect::ErrorCode => Some(KeyboardEvent::Error(byte)),
            Expect::ScanCode => match byte {
                response::RESET => {
                    self.expect = Expect::KeyboardType;
                    None
                }
                response::LAYOUT => {
                    self.expect = Expect::LayoutId;
                    None
                }
                response::ERROR => {
                    self.expect = Expect::ErrorCode;
                    None
                }
                response::IDLE => Some(KeyboardEvent::AllReleased),
                b => Some(KeyboardEvent::Key {
                    code: b & !response::BREAK_BIT,
                    pressed: b & response::BREAK_BIT == 0,
                }),
            },
        }
    }
}

/// Commands understood by the keyboard.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Reset,
    Bell(bool),
    Click(bool),
    /// Sun LED bits, see [`sunhid_common::sun_protocol::led`].
    Leds(u8),
    RequestLayout,
}

impl Command {
    pub fn to_bytes(self) -> Vec<u8, 2> {
        let bytes: &[u8] = match self {
            Self::Reset => &[command::RESET],
            Self::Bell(true) => &[command::BELL_ON],
            Self::Bell(false) => &[command::BELL_OFF],
            Self::Click(true) => &[command::CLICK_ON],
            Self::Click(false) => &[command::CLICK_OFF],
            Self::Leds(leds) => &[command::LED, leds],
            Self::RequestLayout => &[command::LAYOUT],
        };
        Vec::from_slice(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "sun_keyboard_test.rs"]
mod test;
