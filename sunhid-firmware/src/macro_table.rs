use sunhid_common::{
    keycodes::{modifier, usage},
    layouts::Layout,
};

use crate::target::{MacroId, MacroStep};

pub type MacroSequence = &'static [MacroStep];

const CONTROL: MacroStep = MacroStep::Modifier(modifier::LCTRL);
const ALT: MacroStep = MacroStep::Modifier(modifier::LALT);

const fn key(code: u8) -> MacroStep {
    MacroStep::Key(code)
}

static MACRO_AGAIN: [MacroStep; 2] = [CONTROL, key(usage::Y)];
static MACRO_UNDO: [MacroStep; 2] = [CONTROL, key(usage::Z)];
static MACRO_UNDO_FR: [MacroStep; 2] = [CONTROL, key(usage::W)];
static MACRO_COPY: [MacroStep; 2] = [CONTROL, key(usage::C)];
static MACRO_PASTE: [MacroStep; 2] = [CONTROL, key(usage::V)];
static MACRO_CUT: [MacroStep; 2] = [CONTROL, key(usage::X)];
static MACRO_STOP: [MacroStep; 2] = [CONTROL, key(usage::SYSRQ)];
static MACRO_PROPS: [MacroStep; 2] = [ALT, key(usage::ENTER)];
static MACRO_FRONT: [MacroStep; 2] = [ALT, key(usage::TAB)];
static MACRO_OPEN: [MacroStep; 2] = [CONTROL, key(usage::O)];
static MACRO_FIND: [MacroStep; 2] = [CONTROL, key(usage::F)];
static MACRO_HELP: [MacroStep; 2] = [ALT, key(usage::H)];

/// Binds each [`MacroId`] to the keystrokes sent to the host.
///
/// The bindings can be adjusted once for the keyboard's layout; after that the table is fixed.
#[derive(Debug, Clone)]
pub struct MacroTable {
    table: [MacroSequence; MacroId::COUNT],
    adjusted: bool,
}

impl Default for MacroTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroTable {
    pub fn new() -> Self {
        crate::debug!("populating macro table");
        let mut table: [MacroSequence; MacroId::COUNT] = [&[]; MacroId::COUNT];
        table[MacroId::Again.index()] = &MACRO_AGAIN;
        table[MacroId::Undo.index()] = &MACRO_UNDO;
        table[MacroId::Copy.index()] = &MACRO_COPY;
        table[MacroId::Paste.index()] = &MACRO_PASTE;
        table[MacroId::Cut.index()] = &MACRO_CUT;
        table[MacroId::Stop.index()] = &MACRO_STOP;
        table[MacroId::Props.index()] = &MACRO_PROPS;
        table[MacroId::Front.index()] = &MACRO_FRONT;
        table[MacroId::Open.index()] = &MACRO_OPEN;
        table[MacroId::Find.index()] = &MACRO_FIND;
        table[MacroId::Help.index()] = &MACRO_HELP;
        Self {
            table,
            adjusted: false,
        }
    }

    pub fn get(&self, id: MacroId) -> MacroSequence {
        self.table[id.index()]
    }

    pub fn is_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Swap in the layout specific bindings. Only the first call has any effect; returns `false`
    /// if the table was already adjusted.
    pub fn adjust_to_layout(&mut self, layout: Layout) -> bool {
        if self.adjusted {
            crate::warn!("macro table already adjusted, ignoring layout {:?}", layout);
            return false;
        }
        self.adjusted = true;

        match layout {
            Layout::FrenchBelgium => {
                crate::debug!("adjusting macro for French/Belgium layout");
                self.table[MacroId::Undo.index()] = &MACRO_UNDO_FR;
            }
            Layout::Germany | Layout::SwissFrench | Layout::SwissGerman => {
                crate::debug!("adjusting macro for German/Swiss layout");
                self.table[MacroId::Again.index()] = &MACRO_UNDO;
                self.table[MacroId::Undo.index()] = &MACRO_AGAIN;
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
#[path = "macro_table_test.rs"]
mod test;
