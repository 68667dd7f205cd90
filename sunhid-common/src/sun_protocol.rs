//! Bytes exchanged with a Sun Type 4/5 keyboard over its 1200 baud serial line.

use crate::keycodes::led as usb_led;

/// Bytes sent by the keyboard.
pub mod response {
    /// Set on a scan code when the key is released.
    pub const BREAK_BIT: u8 = 0x80;
    /// All keys are up.
    pub const IDLE: u8 = 0x7f;
    /// Followed by an error code.
    pub const ERROR: u8 = 0x7e;
    /// Followed by the layout id.
    pub const LAYOUT: u8 = 0xfe;
    /// Followed by the keyboard type.
    pub const RESET: u8 = 0xff;

    pub const KEYBOARD_TYPE_4: u8 = 0x04;
}

/// Bytes sent to the keyboard.
pub mod command {
    pub const RESET: u8 = 0x01;
    pub const BELL_ON: u8 = 0x02;
    pub const BELL_OFF: u8 = 0x03;
    pub const CLICK_ON: u8 = 0x0a;
    pub const CLICK_OFF: u8 = 0x0b;
    /// Followed by a [`super::led`] bit set.
    pub const LED: u8 = 0x0e;
    pub const LAYOUT: u8 = 0x0f;
}

/// Bits of the byte following [`command::LED`].
pub mod led {
    pub const NUM_LOCK: u8 = 0x01;
    pub const COMPOSE: u8 = 0x02;
    pub const SCROLL_LOCK: u8 = 0x04;
    pub const CAPS_LOCK: u8 = 0x08;
    pub const ALL: u8 = NUM_LOCK | COMPOSE | SCROLL_LOCK | CAPS_LOCK;
}

/// Maps the host's LED output report onto the keyboard's LED bits.
pub fn leds_from_usb(usb: u8) -> u8 {
    [
        (usb_led::NUM_LOCK, led::NUM_LOCK),
        (usb_led::CAPS_LOCK, led::CAPS_LOCK),
        (usb_led::SCROLL_LOCK, led::SCROLL_LOCK),
        (usb_led::COMPOSE, led::COMPOSE),
    ]
    .iter()
    .fold(0, |acc, (from, to)| if usb & from != 0 { acc | to } else { acc })
}

#[cfg(test)]
#[path = "sun_protocol_test.rs"]
mod test;
