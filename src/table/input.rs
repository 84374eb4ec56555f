//! Key dispatch and the bubbletea-rs integration.

use super::pad::PadMotion;
use super::types::{TableEvent, TableEventMsg};
use super::Model;
use crate::menu::{self, MenuItem, MenuOutcome};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Title of the sort menu.
const SORT_MENU_TITLE: &str = "Sort by";

impl Model {
    /// Handles one key press and reports what it meant.
    ///
    /// While the sort menu is open every key goes to the menu. A disabled
    /// table ignores keys.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> TableEvent {
        if !self.enabled {
            return TableEvent::None;
        }
        if self.menu.is_some() {
            self.handle_menu_key(msg);
            return TableEvent::None;
        }

        let before = self.current_item();

        if self.keymap.next_column.matches(msg) {
            self.next_checkable_column();
        } else if self.keymap.prev_column.matches(msg) {
            self.prev_checkable_column();
        } else if self.keymap.sort.matches(msg) {
            if self.pad.keep_sorting() {
                log::debug!("table {}: sorting is pinned", self.id);
            } else {
                self.open_sort_menu();
            }
            return TableEvent::None;
        } else if self.keymap.activate.matches(msg) {
            if let Some(event) = self.activate(before) {
                return event;
            }
        } else if let Some(motion) = self.motion(msg) {
            self.pad.apply(motion);
        } else if let KeyCode::Char(c) = msg.key {
            if !msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.set_item_by_key(c);
            }
        }

        let mut event = TableEvent::None;
        if self.current_item() != before {
            if self.notify && self.immediate_mode {
                event = TableEvent::SelectionChanged;
            }
            if !self.columns.tagged() {
                self.select_current_item();
            }
        }
        event
    }

    /// Forwards a message from the program.
    ///
    /// Only key presses are handled, and only while the table is focused. An
    /// event is delivered as a [`TableEventMsg`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key = msg.downcast_ref::<KeyMsg>()?;
        let event = self.handle_key(key);
        if event == TableEvent::None {
            return None;
        }
        log::debug!("table {}: {event:?}", self.id);
        let id = self.id;
        Some(Box::pin(async move {
            Some(Box::new(TableEventMsg { id, event }) as Msg)
        }))
    }

    fn activate(&mut self, current: Option<usize>) -> Option<TableEvent> {
        if self.columns.tagged() {
            self.toggle_current_item();
            return None;
        }
        let col = self.pad.cur_pos().column;
        if self.checkable_physical(col) {
            self.toggle_current_item();
            if self.notify && current.is_some() {
                return Some(TableEvent::ValueChanged);
            }
        }
        if self.notify && current.is_some() {
            Some(TableEvent::Activated)
        } else {
            None
        }
    }

    fn motion(&self, msg: &KeyMsg) -> Option<PadMotion> {
        let km = &self.keymap;
        let motion = if km.line_up.matches(msg) {
            PadMotion::LineUp
        } else if km.line_down.matches(msg) {
            PadMotion::LineDown
        } else if km.page_up.matches(msg) {
            PadMotion::PageUp
        } else if km.page_down.matches(msg) {
            PadMotion::PageDown
        } else if km.go_to_start.matches(msg) {
            PadMotion::Start
        } else if km.go_to_end.matches(msg) {
            PadMotion::End
        } else if km.column_left.matches(msg) {
            PadMotion::Left
        } else if km.column_right.matches(msg) {
            PadMotion::Right
        } else {
            return None;
        };
        Some(motion)
    }

    fn next_checkable_column(&mut self) {
        if self.pad.current_line().is_none() {
            return;
        }
        let current = self.pad.cur_pos().column;
        let target = (current + 1..self.pad.cols()).find(|&c| self.checkable_physical(c));
        log::debug!("table {}: next checkable column from {current}: {target:?}", self.id);
        if let Some(col) = target {
            for _ in current..col {
                self.pad.scroll_right();
            }
        }
    }

    fn prev_checkable_column(&mut self) {
        if self.pad.current_line().is_none() {
            return;
        }
        let current = self.pad.cur_pos().column;
        let target = (0..current).rev().find(|&c| {
            if c == 0 {
                self.columns.tagged() || self.checkable_physical(0)
            } else {
                self.checkable_physical(c)
            }
        });
        log::debug!("table {}: previous checkable column from {current}: {target:?}", self.id);
        if let Some(col) = target {
            for _ in col..current {
                self.pad.scroll_left();
            }
        }
    }

    fn open_sort_menu(&mut self) {
        let items = self
            .headline
            .columns()
            .iter()
            .enumerate()
            .skip(self.columns.offset())
            .map(|(physical, c)| MenuItem::new(c.label.clone(), physical))
            .collect();
        let anchor = (self.size.height / 2, 1);
        self.menu = Some(menu::Model::new(items, anchor).with_title(SORT_MENU_TITLE));
    }

    fn handle_menu_key(&mut self, msg: &KeyMsg) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        match menu.update(msg) {
            MenuOutcome::Pending => {}
            MenuOutcome::Chosen(column) => {
                self.menu = None;
                if self.pad.set_order(column, true) {
                    log::info!("table {}: sorted by column {column}, descending", self.id);
                }
                self.draw();
            }
            MenuOutcome::Dismissed => {
                self.menu = None;
            }
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
