//! Capture files record the bytes a Sun keyboard and mouse sent, one delivery per line. A line
//! starts with `k` (keyboard) or `m` (mouse) followed by the bytes in hex. `#` starts a comment.
//!
//! ```text
//! # shift a
//! k 63 4d
//! k cd e3
//! m 87 05 fb
//! ```

use std::{fs, path::Path};

use crate::CaptureError;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Source {
    Keyboard,
    Mouse,
}

impl Source {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "k" | "kbd" | "keyboard" => Some(Self::Keyboard),
            "m" | "mouse" => Some(Self::Mouse),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Keyboard => "k",
            Self::Mouse => "m",
        }
    }
}

/// Bytes received together from one device.
#[derive(Debug, PartialEq, Eq)]
pub struct Delivery {
    pub source: Source,
    pub bytes: Vec<u8>,
    pub line: usize,
}

pub fn read(path: &Path) -> Result<Vec<Delivery>, CaptureError> {
    parse(&fs::read_to_string(path)?)
}

pub fn parse(src: &str) -> Result<Vec<Delivery>, CaptureError> {
    let mut deliveries = Vec::new();
    for (i, text) in src.lines().enumerate() {
        let line = i + 1;
        let text = match text.split_once('#') {
            Some((text, _)) => text,
            None => text,
        };
        let mut words = text.split_whitespace();
        let Some(tag) = words.next() else {
            continue;
        };
        let source = Source::from_tag(tag)
            .ok_or_else(|| CaptureError::new(format!("Unknown device {tag:?}"), line))?;
        let bytes = words
            .map(|w| parse_byte(w).ok_or_else(|| CaptureError::new(format!("Invalid byte {w:?}"), line)))
            .collect::<Result<Vec<_>, _>>()?;
        if bytes.is_empty() {
            return Err(CaptureError::new("Expected at least one byte".into(), line));
        }
        deliveries.push(Delivery {
            source,
            bytes,
            line,
        });
    }
    Ok(deliveries)
}

fn parse_byte(word: &str) -> Option<u8> {
    let hex = word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
        .unwrap_or(word);
    if hex.is_empty() || hex.len() > 2 {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod test;
