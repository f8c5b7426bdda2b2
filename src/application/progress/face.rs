//! Progress face state
//!
//! Dispatches host events to the editor, renderer and persistence.

use crate::application::prelude::*;

use super::datetime::DateTime;
use super::editor::{Advance, Editor};
use super::math;
use super::persistence;
use super::quick_cycle::{QuickTick, DISPLAY_TICK_HZ, EDIT_TICK_HZ, QUICK_CYCLE_TICK_HZ};
use super::range::DateRange;
use super::render;

const SLEEP_ANIMATION_PERIOD_MS: u32 = 1000;

fn current_year<H: Host>(system: &System<H>) -> u16 {
    DateTime::from(system.now()).year()
}

pub struct ProgressFace {
    index: FaceIndex,
    range: DateRange,
    editor: Editor,
}

impl ProgressFace {
    pub fn index(&self) -> FaceIndex {
        self.index
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    fn persist(&mut self, system: &mut System<impl Host>) {
        match persistence::save(&mut system.storage, self.index, &self.range) {
            Ok(_) => self.editor.mark_clean(),
            Err(e) => error!("Failed to save progress face {}: {:?}", self.index, e),
        }
    }

    fn show_progress(&self, system: &System<impl Host>, display: &mut impl SegmentDisplay) {
        let now = DateTime::from(system.now());
        let percent = math::percent_x10000(&self.range.start, &self.range.end, &now);
        trace!("Progress face {} at {}", self.index, percent);
        render::progress(display, percent);
    }

    fn show_editor(&self, display: &mut impl SegmentDisplay, subsecond: u8) {
        if let Editor::Editing {
            endpoint,
            field,
            quick_cycle,
            ..
        } = self.editor
        {
            render::field(
                display,
                self.range.get(endpoint),
                endpoint,
                field,
                subsecond,
                quick_cycle,
            );
        }
    }

    fn abort_quick_cycle(&mut self, system: &mut System<impl Host>) {
        if self.editor.abort_quick_cycle() {
            system.movement.request_tick_frequency(EDIT_TICK_HZ);
        }
    }

    fn tick(&mut self, event: Event, system: &mut System<impl Host>, display: &mut impl SegmentDisplay) {
        if self.editor.is_quick_cycling() {
            let year = current_year(system);
            let held = system.alarm_held();
            if self.editor.quick_cycle_tick(&mut self.range, held, year) == QuickTick::Released {
                system.movement.request_tick_frequency(EDIT_TICK_HZ);
            }
        }

        if self.editor.is_editing() {
            self.show_editor(display, event.subsecond);
            return;
        }

        // progress only moves once a minute
        if event.kind == EventKind::LowEnergyUpdate || system.now().second() == 0 {
            self.show_progress(system, display);
        }
        if display.lcd_type() == LcdType::Classic {
            // the sleep indicator lives where the seconds would be
            display.display_text(Position::Seconds, "  ");
        }
        if !display.sleep_animation_is_running() {
            display.start_sleep_animation(SLEEP_ANIMATION_PERIOD_MS);
        }
    }
}

impl WatchFace for ProgressFace {
    fn setup(index: FaceIndex, system: &mut System<impl Host>) -> Self {
        let year = current_year(system);
        let (mut range, found) = persistence::load(&mut system.storage, index, year);
        if range.clamp_end() {
            warn!("Progress face {} end preceded its start, clamped", index);
        }
        // nothing configured yet, go straight to setting the start
        let editor = if found { Editor::Display } else { Editor::start() };
        Self {
            index,
            range,
            editor,
        }
    }

    fn activate(&mut self, system: &mut System<impl Host>, display: &mut impl SegmentDisplay) {
        if self.editor.is_editing() {
            system.movement.request_tick_frequency(EDIT_TICK_HZ);
            self.show_editor(display, 0);
        } else {
            system.movement.request_tick_frequency(DISPLAY_TICK_HZ);
            self.show_progress(system, display);
        }
    }

    fn handle_event(
        &mut self,
        event: Event,
        system: &mut System<impl Host>,
        display: &mut impl SegmentDisplay,
    ) -> Option<Signal> {
        match event.kind {
            EventKind::Activate => {
                if self.editor.is_editing() {
                    self.show_editor(display, event.subsecond);
                } else {
                    self.show_progress(system, display);
                }
            }
            EventKind::Tick | EventKind::LowEnergyUpdate => self.tick(event, system, display),
            EventKind::LightButtonDown => {
                if !self.editor.is_editing() {
                    system.movement.illuminate_led();
                }
            }
            EventKind::LightButtonUp => match self.editor.advance_field(&mut self.range) {
                Advance::Finished => {
                    info!("Progress face {} configured: {:?}", self.index, self.range);
                    self.persist(system);
                    render::leave_settings(display);
                    self.show_progress(system, display);
                    system.movement.request_tick_frequency(DISPLAY_TICK_HZ);
                }
                Advance::EndPage => debug!("Progress face {} editing end", self.index),
                Advance::Field | Advance::Ignored => {}
            },
            EventKind::AlarmButtonUp => {
                if self.editor.is_editing() {
                    self.abort_quick_cycle(system);
                    let year = current_year(system);
                    self.editor.increment(&mut self.range, year);
                }
            }
            EventKind::AlarmLongPress => {
                if self.editor.enter_settings() {
                    render::leave_settings(display);
                    system.movement.request_tick_frequency(EDIT_TICK_HZ);
                } else if self.editor.start_quick_cycle() {
                    system.movement.request_tick_frequency(QUICK_CYCLE_TICK_HZ);
                }
            }
            EventKind::AlarmLongUp | EventKind::Timeout => self.abort_quick_cycle(system),
            _ => return system.movement.default_loop_handler(event),
        }
        None
    }

    fn resign(&mut self, system: &mut System<impl Host>) {
        self.editor.abort_quick_cycle();
        if self.editor.is_dirty() {
            self.persist(system);
        }
    }
}
