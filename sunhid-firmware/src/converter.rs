use sunhid_common::layouts::Layout;

use crate::{
    config::Config,
    key_report::KeyReport,
    macro_table::MacroTable,
    sink::ReportSink,
    target::{EncodedTarget, MacroId, MacroStep},
};

/// Turns Sun scan codes into keyboard reports.
///
/// Owned by the task reading the keyboard; each call runs to completion and sends at most one
/// report per changed step.
pub struct KeyboardConverter<'t> {
    table: &'t [u16],
    macros: MacroTable,
    key_report: KeyReport,
    use_macros: bool,
}

impl<'t> KeyboardConverter<'t> {
    pub fn new(table: &'t [u16], config: &Config) -> Self {
        Self {
            table,
            macros: MacroTable::new(),
            key_report: KeyReport::new(),
            use_macros: config.use_macros,
        }
    }

    /// Adjust the macros to the keyboard layout. Only the first call has an effect.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        crate::info!("keyboard layout {:?}", layout);
        self.macros.adjust_to_layout(layout)
    }

    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    pub fn key_report(&self) -> &KeyReport {
        &self.key_report
    }

    pub fn lookup(&self, scan_code: u8) -> EncodedTarget {
        match self.table.get(scan_code as usize) {
            Some(raw) => EncodedTarget::decode(*raw),
            None => EncodedTarget::None,
        }
    }

    pub fn handle_key(&mut self, scan_code: u8, pressed: bool, sink: &mut impl ReportSink) {
        let target = self.lookup(scan_code);
        crate::debug!(
            "KeyboardConverter.handle_key: {:x} -> {:?}, {}",
            scan_code,
            target,
            pressed
        );

        let changed = match target {
            EncodedTarget::None => false,
            EncodedTarget::Macro(id) if self.use_macros => {
                self.handle_macro(id, pressed, sink);
                return;
            }
            EncodedTarget::Macro(id) => self.key_report.handle_key(id.plain_key(), pressed),
            EncodedTarget::Modifier(mask) => self.apply(MacroStep::Modifier(mask), pressed),
            EncodedTarget::Key(key) => self.apply(MacroStep::Key(key), pressed),
        };

        if changed {
            self.key_report.send(sink);
        }
    }

    /// Replays the macro's steps, sending a report after each one. A release replays the steps in
    /// the same order as the press.
    fn handle_macro(&mut self, id: MacroId, pressed: bool, sink: &mut impl ReportSink) {
        for step in self.macros.get(id) {
            if self.apply(*step, pressed) {
                self.key_report.send(sink);
            }
        }
    }

    fn apply(&mut self, step: MacroStep, pressed: bool) -> bool {
        let (mask, key) = match step {
            MacroStep::Modifier(mask) => (mask, 0),
            MacroStep::Key(key) => (0, key),
        };
        self.key_report.handle_modifier(mask, pressed) || self.key_report.handle_key(key, pressed)
    }

    /// Clear all keys and modifiers and tell the host.
    pub fn release_all(&mut self, sink: &mut impl ReportSink) {
        self.key_report.release_all();
        self.key_report.send(sink);
    }
}

#[cfg(test)]
#[path = "converter_test.rs"]
mod test;
