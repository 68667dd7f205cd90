#![no_std]
pub mod keycodes;
pub mod layouts;
pub mod sun_protocol;
