//! Settings editor
//!
//! Walks the user through the five fields of the start, then the end of the
//! range. The light button moves to the next field, the alarm button bumps
//! the current one.

use super::datetime::Field;
use super::range::{DateRange, Endpoint};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Editor {
    /// Showing progress
    Display,
    /// Changing `field` of one end of the range
    Editing {
        endpoint: Endpoint,
        field: Field,
        /// The range changed since it was last saved
        dirty: bool,
        /// The alarm button is held down and the field auto increments
        quick_cycle: bool,
    },
}

/// What moving to the next field did
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Not editing
    Ignored,
    /// Moved to another field of the same endpoint
    Field,
    /// Finished the start, now editing the end
    EndPage,
    /// Finished the end, back to displaying. The range must be saved.
    Finished,
}

impl Editor {
    /// First field of the start of the range
    pub const fn start() -> Self {
        Editor::Editing {
            endpoint: Endpoint::Start,
            field: Field::Year,
            dirty: false,
            quick_cycle: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Editor::Editing { .. })
    }

    pub fn endpoint(&self) -> Option<Endpoint> {
        match *self {
            Editor::Editing { endpoint, .. } => Some(endpoint),
            Editor::Display => None,
        }
    }

    pub fn field(&self) -> Option<Field> {
        match *self {
            Editor::Editing { field, .. } => Some(field),
            Editor::Display => None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Editor::Editing { dirty: true, .. })
    }

    /// The range has been saved
    pub fn mark_clean(&mut self) {
        if let Editor::Editing { dirty, .. } = self {
            *dirty = false;
        }
    }

    /// Leave the progress display for the first start field. Returns false
    /// if already editing.
    pub fn enter_settings(&mut self) -> bool {
        match self {
            Editor::Display => {
                *self = Editor::start();
                true
            }
            Editor::Editing { .. } => false,
        }
    }

    /// Move to the next field, turning the page after the minute.
    ///
    /// Moving from the start to the end page pulls the end up to the start if
    /// needed.
    pub fn advance_field(&mut self, range: &mut DateRange) -> Advance {
        let Editor::Editing {
            endpoint,
            field,
            dirty,
            ..
        } = self
        else {
            return Advance::Ignored;
        };

        *field = field.next();
        if *field != Field::Year {
            return Advance::Field;
        }

        if *endpoint == Endpoint::Start {
            *endpoint = Endpoint::End;
            if range.clamp_end() {
                *dirty = true;
            }
            Advance::EndPage
        } else {
            *self = Editor::Display;
            Advance::Finished
        }
    }

    /// Step the field being edited. Returns false if not editing.
    pub fn increment(&mut self, range: &mut DateRange, current_year: u16) -> bool {
        let Editor::Editing {
            endpoint,
            field,
            dirty,
            ..
        } = self
        else {
            return false;
        };

        range.get_mut(*endpoint).increment(*field, current_year);
        *dirty = true;
        if *endpoint == Endpoint::End {
            range.clamp_end();
        }
        true
    }
}
