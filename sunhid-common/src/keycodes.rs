//! USB HID keyboard/keypad page usages (HID Usage Tables, page 0x07).

pub mod key_range {
    pub const BASIC_MIN: u8 = 0x04;
    pub const BASIC_A: u8 = 0x04;
    pub const BASIC_1: u8 = 0x1e;
    pub const BASIC_0: u8 = 0x27;
    pub const BASIC_MAX: u8 = 0xdd;
    pub const MODIFIER_MIN: u8 = 0xe0;
    pub const MODIFIER_MAX: u8 = 0xe7;

    /// Number of non-modifier keys a boot keyboard report carries.
    pub const REPORT_KEYS: usize = 6;
}

/// Bits of the modifier byte of a keyboard report.
pub mod modifier {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LMETA: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RMETA: u8 = 0x80;

    /// Converts a modifier usage (0xe0..=0xe7) to its bit in the modifier byte.
    pub const fn from_usage(usage: u8) -> u8 {
        if usage >= super::key_range::MODIFIER_MIN && usage <= super::key_range::MODIFIER_MAX {
            1 << (usage - super::key_range::MODIFIER_MIN)
        } else {
            0
        }
    }
}

/// Bits of the LED output report sent by the host.
pub mod led {
    pub const NUM_LOCK: u8 = 0x01;
    pub const CAPS_LOCK: u8 = 0x02;
    pub const SCROLL_LOCK: u8 = 0x04;
    pub const COMPOSE: u8 = 0x08;
    pub const KANA: u8 = 0x10;
}

pub mod usage {
    pub const A: u8 = 0x04;
    pub const B: u8 = 0x05;
    pub const C: u8 = 0x06;
    pub const D: u8 = 0x07;
    pub const E: u8 = 0x08;
    pub const F: u8 = 0x09;
    pub const G: u8 = 0x0a;
    pub const H: u8 = 0x0b;
    pub const I: u8 = 0x0c;
    pub const J: u8 = 0x0d;
    pub const K: u8 = 0x0e;
    pub const L: u8 = 0x0f;
    pub const M: u8 = 0x10;
    pub const N: u8 = 0x11;
    pub const O: u8 = 0x12;
    pub const P: u8 = 0x13;
    pub const Q: u8 = 0x14;
    pub const R: u8 = 0x15;
    pub const S: u8 = 0x16;
    pub const T: u8 = 0x17;
    pub const U: u8 = 0x18;
    pub const V: u8 = 0x19;
    pub const W: u8 = 0x1a;
    pub const X: u8 = 0x1b;
    pub const Y: u8 = 0x1c;
    pub const Z: u8 = 0x1d;

    pub const N1: u8 = 0x1e;
    pub const N2: u8 = 0x1f;
    pub const N3: u8 = 0x20;
    pub const N4: u8 = 0x21;
    pub const N5: u8 = 0x22;
    pub const N6: u8 = 0x23;
    pub const N7: u8 = 0x24;
    pub const N8: u8 = 0x25;
    pub const N9: u8 = 0x26;
    pub const N0: u8 = 0x27;

    pub const ENTER: u8 = 0x28;
    pub const ESC: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2a;
    pub const TAB: u8 = 0x2b;
    pub const SPACE: u8 = 0x2c;
    pub const MINUS: u8 = 0x2d;
    pub const EQUAL: u8 = 0x2e;
    pub const LEFTBRACE: u8 = 0x2f;
    pub const RIGHTBRACE: u8 = 0x30;
    pub const BACKSLASH: u8 = 0x31;
    pub const HASHTILDE: u8 = 0x32;
    pub const SEMICOLON: u8 = 0x33;
    pub const APOSTROPHE: u8 = 0x34;
    pub const GRAVE: u8 = 0x35;
    pub const COMMA: u8 = 0x36;
    pub const DOT: u8 = 0x37;
    pub const SLASH: u8 = 0x38;
    pub const CAPSLOCK: u8 = 0x39;

    pub const F1: u8 = 0x3a;
    pub const F2: u8 = 0x3b;
    pub const F3: u8 = 0x3c;
    pub const F4: u8 = 0x3d;
    pub const F5: u8 = 0x3e;
    pub const F6: u8 = 0x3f;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;
    pub const F11: u8 = 0x44;
    pub const F12: u8 = 0x45;

    pub const SYSRQ: u8 = 0x46;
    pub const SCROLLLOCK: u8 = 0x47;
    pub const PAUSE: u8 = 0x48;
    pub const INSERT: u8 = 0x49;
    pub const HOME: u8 = 0x4a;
    pub const PAGEUP: u8 = 0x4b;
    pub const DELETE: u8 = 0x4c;
    pub const END: u8 = 0x4d;
    pub const PAGEDOWN: u8 = 0x4e;
    pub const RIGHT: u8 = 0x4f;
    pub const LEFT: u8 = 0x50;
    pub const DOWN: u8 = 0x51;
    pub const UP: u8 = 0x52;

    pub const NUMLOCK: u8 = 0x53;
    pub const KPSLASH: u8 = 0x54;
    pub const KPASTERISK: u8 = 0x55;
    pub const KPMINUS: u8 = 0x56;
    pub const KPPLUS: u8 = 0x57;
    pub const KPENTER: u8 = 0x58;
    pub const KP1: u8 = 0x59;
    pub const KP2: u8 = 0x5a;
    pub const KP3: u8 = 0x5b;
    pub const KP4: u8 = 0x5c;
    pub const KP5: u8 = 0x5d;
    pub const KP6: u8 = 0x5e;
    pub const KP7: u8 = 0x5f;
    pub const KP8: u8 = 0x60;
    pub const KP9: u8 = 0x61;
    pub const KP0: u8 = 0x62;
    pub const KPDOT: u8 = 0x63;

    pub const K102ND: u8 = 0x64;
    pub const COMPOSE: u8 = 0x65;
    pub const POWER: u8 = 0x66;
    pub const KPEQUAL: u8 = 0x67;

    pub const OPEN: u8 = 0x74;
    pub const HELP: u8 = 0x75;
    pub const PROPS: u8 = 0x76;
    pub const FRONT: u8 = 0x77;
    pub const STOP: u8 = 0x78;
    pub const AGAIN: u8 = 0x79;
    pub const UNDO: u8 = 0x7a;
    pub const CUT: u8 = 0x7b;
    pub const COPY: u8 = 0x7c;
    pub const PASTE: u8 = 0x7d;
    pub const FIND: u8 = 0x7e;
    pub const MUTE: u8 = 0x7f;
    pub const VOLUMEUP: u8 = 0x80;
    pub const VOLUMEDOWN: u8 = 0x81;
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
