//! Quick cycle
//!
//! Holding the alarm button on a settings page keeps incrementing the field
//! on every tick until the button is let go.

use super::editor::Editor;
use super::range::DateRange;

/// Tick rate while showing progress
pub const DISPLAY_TICK_HZ: u8 = 1;
/// Tick rate while editing, fast enough for a readable blink
pub const EDIT_TICK_HZ: u8 = 4;
/// Tick rate while quick cycling
pub const QUICK_CYCLE_TICK_HZ: u8 = 8;

/// What a tick did to quick cycling
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuickTick {
    /// Not quick cycling
    Inactive,
    /// Still held, the field moved on
    Incremented,
    /// No longer held, quick cycling stopped
    Released,
}

impl Editor {
    pub fn is_quick_cycling(&self) -> bool {
        matches!(self, Editor::Editing { quick_cycle: true, .. })
    }

    /// Start auto incrementing. Returns false when there is nothing to edit.
    pub fn start_quick_cycle(&mut self) -> bool {
        match self {
            Editor::Editing { quick_cycle, .. } => {
                *quick_cycle = true;
                true
            }
            Editor::Display => false,
        }
    }

    /// Stop auto incrementing. Returns true if it was running.
    pub fn abort_quick_cycle(&mut self) -> bool {
        match self {
            Editor::Editing { quick_cycle, .. } if *quick_cycle => {
                *quick_cycle = false;
                true
            }
            _ => false,
        }
    }

    /// Run one tick of quick cycling given whether the button is still held
    pub fn quick_cycle_tick(&mut self, range: &mut DateRange, held: bool, current_year: u16) -> QuickTick {
        if !self.is_quick_cycling() {
            return QuickTick::Inactive;
        }
        if held {
            self.increment(range, current_year);
            QuickTick::Incremented
        } else {
            self.abort_quick_cycle();
            QuickTick::Released
        }
    }
}
