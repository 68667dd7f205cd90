#![no_std]
pub mod config;
pub mod converter;
pub mod exec;
pub mod hid;
pub mod key_report;
pub mod key_reporter;
pub mod macro_table;
pub mod pointer;
pub mod sink;
pub mod sun_keyboard;
pub mod sun_to_usb;
pub mod target;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_stub;

#[macro_use]
mod macros;

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
