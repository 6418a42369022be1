//! Tactile feedback for scrubber key changes.
//!
//! Terminals have no haptic engine, so the closest equivalent is the bell.

use std::io::{self, Write};

use crate::config::HapticIntensity;

/// Fire-and-forget feedback pulse.
pub trait Haptics {
    fn pulse(&mut self, intensity: HapticIntensity);
}

/// Rings the terminal bell. Write errors are ignored.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&mut self, intensity: HapticIntensity) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
        tracing::trace!(?intensity, "Haptic pulse");
    }
}

/// Discards pulses.
#[derive(Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _intensity: HapticIntensity) {}
}
