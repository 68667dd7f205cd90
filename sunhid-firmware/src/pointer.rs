//! Decodes the byte stream of a Sun mouse.
//!
//! Sun mice send either 3 byte frames (`status, dx, dy`) or 5 byte frames
//! (`status, dx, dy, dx2, dy2`) where the second pair is added to the first. Nothing tells us
//! which kind of mouse is attached so the frame width is learned from the length of the last
//! frame seen, and a decoder fed a stream it has not seen yet assumes 3 bytes. A frame is only
//! complete once the next frame starts, so frames are decoded one start byte late.

use heapless::Vec;

use crate::sink::{MouseButton, ReportSink};

pub const FRAME_MAX: usize = 5;
pub const FRAME_SHORT: usize = 3;

const FRAME_START_MASK: u8 = 0xf8;
const FRAME_START: u8 = 0x80;

const BUTTON_LEFT_MASK: u8 = 0x04;
const BUTTON_MIDDLE_MASK: u8 = 0x02;
const BUTTON_RIGHT_MASK: u8 = 0x01;
const BUTTONS: [(u8, MouseButton); 3] = [
    (BUTTON_LEFT_MASK, MouseButton::Left),
    (BUTTON_MIDDLE_MASK, MouseButton::Middle),
    (BUTTON_RIGHT_MASK, MouseButton::Right),
];

pub fn is_frame_start(byte: u8) -> bool {
    byte & FRAME_START_MASK == FRAME_START
}

#[derive(Debug)]
pub struct PointerFrameDecoder {
    /// Never holds more than `width` bytes.
    frame: Vec<u8, FRAME_MAX>,
    /// Bytes seen since the frame started, including any not kept in `frame`.
    len: usize,
    open: bool,
    width: usize,
    buttons: u8,
}

impl Default for PointerFrameDecoder {
    fn default() -> Self {
        Self {
            frame: Vec::new(),
            len: 0,
            open: false,
            width: FRAME_SHORT,
            buttons: 0,
        }
    }
}

impl PointerFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame width expected for the open frame.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn update_all(&mut self, bytes: &[u8], sink: &mut impl ReportSink) {
        for b in bytes {
            self.update(*b, sink);
        }
    }

    pub fn update(&mut self, byte: u8, sink: &mut impl ReportSink) {
        if is_frame_start(byte) {
            self.flush(sink);
            self.frame.clear();
            // capacity is at least one
            let _ = self.frame.push(byte);
            self.len = 1;
            self.open = true;
            return;
        }

        if !self.open {
            return;
        }

        self.len += 1;
        if self.frame.len() < self.width {
            // width never exceeds capacity
            let _ = self.frame.push(byte);
        }
    }

    /// Ends the open frame. It is sent only if its length matches the width learned from the
    /// frame before it; its own length then becomes the width expected for the next frame.
    fn flush(&mut self, sink: &mut impl ReportSink) {
        if !self.open {
            return;
        }
        let len = self.len;
        if len == self.width {
            self.emit(sink);
        } else {
            crate::debug!("dropping mouse frame of {} bytes, expected {}", len, self.width);
        }
        if (len == FRAME_SHORT || len == FRAME_MAX) && len != self.width {
            crate::debug!("mouse frame width {}", len);
            self.width = len;
        }
    }

    fn emit(&mut self, sink: &mut impl ReportSink) {
        let frame = &self.frame;

        let buttons = frame[0] & 0x07;
        let changed = buttons ^ self.buttons;
        if changed != 0 {
            for (mask, button) in BUTTONS {
                if changed & mask != 0 {
                    sink.mouse_button(button, buttons & mask == 0);
                }
            }
            self.buttons = buttons;
        }

        let (dx, dy) = if frame.len() == FRAME_MAX {
            (frame[1].wrapping_add(frame[3]), frame[2].wrapping_add(frame[4]))
        } else {
            (frame[1], frame[2])
        };
        let dx = dx as i8;
        let dy = dy.wrapping_neg() as i8;
        if dx != 0 || dy != 0 {
            sink.mouse_move(dx, dy);
        }
    }
}

#[cfg(test)]
#[path = "pointer_test.rs"]
mod test;
