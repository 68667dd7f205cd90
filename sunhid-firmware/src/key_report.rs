use sunhid_common::keycodes::key_range::REPORT_KEYS;

use crate::sink::ReportSink;

/// The keyboard state the host sees: a modifier bit set and up to six pressed keys.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifiers: u8,
    pub keys: [u8; REPORT_KEYS],
}

impl KeyboardReport {
    pub fn is_empty(&self) -> bool {
        self.modifiers == 0 && self.keys.iter().all(|k| *k == 0)
    }
}

/// Accumulates key and modifier changes. Keys keep the slot they were added to; a key pressed
/// while all slots are in use is dropped.
#[derive(Debug, Default)]
pub struct KeyReport {
    data: KeyboardReport,
}

impl KeyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &KeyboardReport {
        &self.data
    }

    /// Sets or clears the bits of `mask`. Returns `false` if `mask` is empty.
    pub fn handle_modifier(&mut self, mask: u8, pressed: bool) -> bool {
        crate::debug!("KeyReport.handle_modifier: {:x}, {}", mask, pressed);
        if mask == 0 {
            return false;
        }
        if pressed {
            self.data.modifiers |= mask;
        } else {
            self.data.modifiers &= !mask;
        }
        true
    }

    /// Adds or removes `key`. Returns `true` if the report changed.
    pub fn handle_key(&mut self, key: u8, pressed: bool) -> bool {
        if key == 0 {
            return false;
        }
        if pressed {
            self.add_key(key)
        } else {
            self.remove_key(key)
        }
    }

    fn add_key(&mut self, key: u8) -> bool {
        let mut slot = None;
        for (i, k) in self.data.keys.iter().enumerate() {
            if *k == key {
                crate::debug!("KeyReport.add_key: {:x} already present", key);
                return false;
            }
            if slot.is_none() && *k == 0 {
                slot = Some(i);
            }
        }

        match slot {
            Some(i) => {
                crate::debug!("KeyReport.add_key: {:x} at slot {}", key, i);
                self.data.keys[i] = key;
                true
            }
            None => {
                crate::debug!("KeyReport.add_key: {:x} dropped, report full", key);
                false
            }
        }
    }

    fn remove_key(&mut self, key: u8) -> bool {
        match self.data.keys.iter().position(|k| *k == key) {
            Some(i) => {
                crate::debug!("KeyReport.remove_key: {:x} from slot {}", key, i);
                self.data.keys[i] = 0;
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        self.data = KeyboardReport::default();
    }

    pub fn send(&self, sink: &mut impl ReportSink) {
        sink.keyboard(&self.data);
    }
}

#[cfg(test)]
#[path = "key_report_test.rs"]
mod test;
