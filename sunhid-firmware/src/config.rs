use sunhid_common::layouts::Layout;

/// Startup settings for the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Expand the special keys of the left hand cluster into host shortcuts. When `false` they
    /// send their own USB usages.
    pub use_macros: bool,
    /// Forward events from a mouse plugged into the keyboard.
    pub use_mouse: bool,
    /// Use this layout instead of the one the keyboard reports.
    pub force_layout: Option<Layout>,
    /// Blink the LEDs and beep at startup.
    pub startup_greeting: bool,
    /// Have the keyboard click on every key press.
    pub key_click: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_macros: true,
            use_mouse: true,
            force_layout: None,
            startup_greeting: true,
            key_click: false,
        }
    }
}

impl Config {
    /// The layout to adjust the macros to, given what the keyboard reported.
    pub fn layout(&self, reported: Layout) -> Layout {
        self.force_layout.unwrap_or(reported)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod test;
