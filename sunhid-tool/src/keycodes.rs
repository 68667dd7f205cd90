use std::collections::HashMap;

use lazy_static::lazy_static;
use sunhid_common::keycodes::key_range;

const DASH_USCORE: [char; 2] = ['_', '-'];

const MODIFIER_BITS: [&str; 8] = ["C", "S", "A", "M", "RC", "RS", "RA", "RM"];

// Keyboard page usages from 0x04 onwards. The first name of each entry is the one displayed.
const BASIC_NAMES: &str = r#"
A B C D E F G H I J K L M N O P Q R S T U V W X Y Z
1 2 3 4 5 6 7 8 9 0
Enter/Return/ent
Escape/esc
Backspace/bksp
Tab
Space/spacebar/spc
Minus/-/dash
Equal/=/equals
LeftBrace/[
RightBrace/]
Backslash/\
NonUsHash
Semicolon/;
Apostrophe/'
Grave/`
Comma/,
Dot/./period
Slash/forwardslash
CapsLock
F1 F2 F3 F4 F5 F6 F7 F8 F9 F10 F11 F12
PrintScreen/sysrq/print
ScrollLock
Pause
Insert
Home PageUp/pgup Delete/del End PageDown/pgdn
Right Left Down Up
NumLock
KpSlash KpAsterisk KpMinus KpPlus KpEnter
Kp1 Kp2 Kp3 Kp4 Kp5 Kp6 Kp7 Kp8 Kp9 Kp0
KpDot
NonUsBackslash/102nd
Compose/application/app
Power
KpEqual
F13 F14 F15 F16 F17 F18 F19 F20 F21 F22 F23 F24
Open/execute
Help
Props/menu
Front/select
Stop
Again Undo
Cut Copy Paste
Find
Mute
VolumeUp VolumeDown
"#;

const MODIFIER_NAMES: &str = r#"
LeftControl/lctrl
LeftShift/lshift
LeftAlt/lalt
LeftMeta/lgui
RightControl/rctrl
RightShift/rshift
RightAlt/altgr/ralt
RightMeta/rgui
"#;

pub struct KeycodeName {
    pub code: u8,
    pub name: &'static str,
}

lazy_static! {
    static ref KEYCODE_NAMES: Vec<KeycodeName> = {
        let basic = BASIC_NAMES
            .split_whitespace()
            .zip(key_range::BASIC_MIN..);
        let modifiers = MODIFIER_NAMES
            .split_whitespace()
            .zip(key_range::MODIFIER_MIN..=key_range::MODIFIER_MAX);
        basic
            .chain(modifiers)
            .flat_map(|(names, code)| names.split('/').map(move |name| KeycodeName { code, name }))
            .collect()
    };
    static ref KEY_NAMES: HashMap<String, u8> = {
        let mut m = HashMap::new();
        for k in KEYCODE_NAMES.iter() {
            let name = normalize(k.name);
            if m.contains_key(&name) {
                panic!("key already added {}", k.name);
            }
            m.insert(name, k.code);
        }
        m
    };
    static ref CODE_NAMES: HashMap<u8, &'static str> = {
        let mut m = HashMap::new();
        for k in KEYCODE_NAMES.iter() {
            m.entry(k.code).or_insert(k.name);
        }
        m
    };
}

fn normalize(name: &str) -> String {
    let name = if name.len() > 1 {
        name.replace(DASH_USCORE, "")
    } else {
        name.to_string()
    };
    name.to_lowercase()
}

/// Every known name, aliases included.
pub fn keycodes_iter() -> impl Iterator<Item = &'static KeycodeName> {
    KEYCODE_NAMES.iter()
}

pub fn key_code(name: &str) -> Option<u8> {
    KEY_NAMES.get(normalize(name).as_str()).copied()
}

pub fn key_name(code: u8) -> Option<&'static str> {
    CODE_NAMES.get(&code).copied()
}

/// `key_name` or the code in hex.
pub fn describe_key(code: u8) -> String {
    match key_name(code) {
        Some(name) => name.to_string(),
        None => format!("0x{code:02x}"),
    }
}

pub fn modifiers_to_bit_map(text: &str) -> Option<u8> {
    if text.is_empty() {
        return Some(0);
    }
    text.split('-').try_fold(0, |bm, s| {
        MODIFIER_BITS
            .iter()
            .position(|m| *m == s)
            .map(|i| bm | (1 << i))
    })
}

pub fn modifiers_to_string(mut modifiers: u8) -> String {
    let mut ans = String::new();

    for m in MODIFIER_BITS {
        if modifiers == 0 {
            return ans;
        }
        if modifiers & 1 == 1 {
            if !ans.is_empty() {
                ans += "-";
            }
            ans += m;
        }

        modifiers >>= 1;
    }
    ans
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
