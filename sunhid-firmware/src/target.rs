use sunhid_common::keycodes::usage;

/// High byte marking a translation table entry as a macro reference.
pub const MACRO_MARKER: u8 = 0xff;

/// The result of looking up a scan code in a translation table.
///
/// Table entries are 16 bit: modifiers live in the high byte, plain keys in the low byte and a
/// high byte of [`MACRO_MARKER`] turns the low byte into a macro id.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodedTarget {
    None,
    Modifier(u8),
    Key(u8),
    Macro(MacroId),
}

impl EncodedTarget {
    pub fn decode(raw: u16) -> Self {
        let [low, high] = raw.to_le_bytes();
        match high {
            MACRO_MARKER => match MacroId::from_index(low) {
                Some(id) => Self::Macro(id),
                None => Self::None,
            },
            0 if low == 0 => Self::None,
            0 => Self::Key(low),
            m => Self::Modifier(m),
        }
    }

    pub const fn key(code: u8) -> u16 {
        code as u16
    }

    pub const fn modifier(mask: u8) -> u16 {
        (mask as u16) << 8
    }

    pub const fn macro_ref(id: MacroId) -> u16 {
        ((MACRO_MARKER as u16) << 8) | id as u16
    }
}

/// A single step of a macro. Macros can not reference other macros.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroStep {
    Modifier(u8),
    Key(u8),
}

/// The special keys on the left hand "fun" cluster that are expanded to host shortcuts.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MacroId {
    Again = 0,
    Undo,
    Copy,
    Paste,
    Cut,
    Stop,
    Props,
    Front,
    Open,
    Find,
    Help,
}

impl MacroId {
    pub const COUNT: usize = 11;

    pub const ALL: [MacroId; Self::COUNT] = [
        Self::Again,
        Self::Undo,
        Self::Copy,
        Self::Paste,
        Self::Cut,
        Self::Stop,
        Self::Props,
        Self::Front,
        Self::Open,
        Self::Find,
        Self::Help,
    ];

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The key to send instead when macro expansion is disabled.
    pub fn plain_key(self) -> u8 {
        match self {
            Self::Again => usage::AGAIN,
            Self::Undo => usage::UNDO,
            Self::Copy => usage::COPY,
            Self::Paste => usage::PASTE,
            Self::Cut => usage::CUT,
            Self::Stop => usage::STOP,
            Self::Props => usage::PROPS,
            Self::Front => usage::FRONT,
            Self::Open => usage::OPEN,
            Self::Find => usage::FIND,
            Self::Help => usage::HELP,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Again => "Again",
            Self::Undo => "Undo",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::Cut => "Cut",
            Self::Stop => "Stop",
            Self::Props => "Props",
            Self::Front => "Front",
            Self::Open => "Open",
            Self::Find => "Find",
            Self::Help => "Help",
        }
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod test;
