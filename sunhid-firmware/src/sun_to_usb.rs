//! Default translation from Sun Type 4/5 scan codes to USB usages.
//!
//! The index is the Sun scan code (the make code, without the break bit) and the value is an
//! [`EncodedTarget`] table entry. `0` means the code is not mapped.

use sunhid_common::keycodes::{modifier, usage::*};

use crate::target::{EncodedTarget, MacroId};

pub const SCAN_CODE_COUNT: usize = 0x80;

const fn k(code: u8) -> u16 {
    EncodedTarget::key(code)
}

const fn m(mask: u8) -> u16 {
    EncodedTarget::modifier(mask)
}

const fn mac(id: MacroId) -> u16 {
    EncodedTarget::macro_ref(id)
}

#[rustfmt::skip]
pub static SUN_TO_USB: [u16; SCAN_CODE_COUNT] = [
    0,                      // 0x00
    mac(MacroId::Stop),     // 0x01 Stop
    k(VOLUMEDOWN),          // 0x02 Volume down
    mac(MacroId::Again),    // 0x03 Again
    k(VOLUMEUP),            // 0x04 Volume up
    k(F1),                  // 0x05
    k(F2),                  // 0x06
    k(F10),                 // 0x07
    k(F3),                  // 0x08
    k(F11),                 // 0x09
    k(F4),                  // 0x0a
    k(F12),                 // 0x0b
    k(F5),                  // 0x0c
    m(modifier::RALT),      // 0x0d Alt Graph
    k(F6),                  // 0x0e
    0,                      // 0x0f
    k(F7),                  // 0x10
    k(F8),                  // 0x11
    k(F9),                  // 0x12
    m(modifier::LALT),      // 0x13 Alt
    k(UP),                  // 0x14
    k(PAUSE),               // 0x15
    k(SYSRQ),               // 0x16 Print Screen
    k(SCROLLLOCK),          // 0x17
    k(LEFT),                // 0x18
    mac(MacroId::Props),    // 0x19 Props
    mac(MacroId::Undo),     // 0x1a Undo
    k(DOWN),                // 0x1b
    k(RIGHT),               // 0x1c
    k(ESC),                 // 0x1d
    k(N1),                  // 0x1e
    k(N2),                  // 0x1f
    k(N3),                  // 0x20
    k(N4),                  // 0x21
    k(N5),                  // 0x22
    k(N6),                  // 0x23
    k(N7),                  // 0x24
    k(N8),                  // 0x25
    k(N9),                  // 0x26
    k(N0),                  // 0x27
    k(MINUS),               // 0x28
    k(EQUAL),               // 0x29
    k(GRAVE),               // 0x2a
    k(BACKSPACE),           // 0x2b
    k(INSERT),              // 0x2c
    k(MUTE),                // 0x2d
    k(KPSLASH),             // 0x2e
    k(KPASTERISK),          // 0x2f
    k(POWER),               // 0x30
    mac(MacroId::Front),    // 0x31 Front
    k(KPDOT),               // 0x32
    mac(MacroId::Copy),     // 0x33 Copy
    k(HOME),                // 0x34
    k(TAB),                 // 0x35
    k(Q),                   // 0x36
    k(W),                   // 0x37
    k(E),                   // 0x38
    k(R),                   // 0x39
    k(T),                   // 0x3a
    k(Y),                   // 0x3b
    k(U),                   // 0x3c
    k(I),                   // 0x3d
    k(O),                   // 0x3e
    k(P),                   // 0x3f
    k(LEFTBRACE),           // 0x40
    k(RIGHTBRACE),          // 0x41
    k(DELETE),              // 0x42
    k(COMPOSE),             // 0x43
    k(KP7),                 // 0x44
    k(KP8),                 // 0x45
    k(KP9),                 // 0x46
    k(KPMINUS),             // 0x47
    mac(MacroId::Open),     // 0x48 Open
    mac(MacroId::Paste),    // 0x49 Paste
    k(END),                 // 0x4a
    0,                      // 0x4b
    m(modifier::LCTRL),     // 0x4c Control
    k(A),                   // 0x4d
    k(S),                   // 0x4e
    k(D),                   // 0x4f
    k(F),                   // 0x50
    k(G),                   // 0x51
    k(H),                   // 0x52
    k(J),                   // 0x53
    k(K),                   // 0x54
    k(L),                   // 0x55
    k(SEMICOLON),           // 0x56
    k(APOSTROPHE),          // 0x57
    k(BACKSLASH),           // 0x58
    k(ENTER),               // 0x59 Return
    k(KPENTER),             // 0x5a
    k(KP4),                 // 0x5b
    k(KP5),                 // 0x5c
    k(KP6),                 // 0x5d
    k(KP0),                 // 0x5e
    mac(MacroId::Find),     // 0x5f Find
    k(PAGEUP),              // 0x60
    mac(MacroId::Cut),      // 0x61 Cut
    k(NUMLOCK),             // 0x62
    m(modifier::LSHIFT),    // 0x63
    k(Z),                   // 0x64
    k(X),                   // 0x65
    k(C),                   // 0x66
    k(V),                   // 0x67
    k(B),                   // 0x68
    k(N),                   // 0x69
    k(M),                   // 0x6a
    k(COMMA),               // 0x6b
    k(DOT),                 // 0x6c
    k(SLASH),               // 0x6d
    m(modifier::RSHIFT),    // 0x6e
    0,                      // 0x6f Line Feed
    k(KP1),                 // 0x70
    k(KP2),                 // 0x71
    k(KP3),                 // 0x72
    0,                      // 0x73
    0,                      // 0x74
    0,                      // 0x75
    mac(MacroId::Help),     // 0x76 Help
    k(CAPSLOCK),            // 0x77
    m(modifier::LMETA),     // 0x78 Left diamond
    k(SPACE),               // 0x79
    m(modifier::RMETA),     // 0x7a Right diamond
    k(PAGEDOWN),            // 0x7b
    k(K102ND),              // 0x7c
    k(KPPLUS),              // 0x7d
    0,                      // 0x7e error response
    0,                      // 0x7f idle
];
