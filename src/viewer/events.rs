//! Keyboard, mouse, and input event handlers for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the closures
//! wired up in `mod.rs`. Each one borrows the shared state once,
//! applies a `GridState` transition, and re-renders.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::error::GridError;
#[cfg(target_arch = "wasm32")]
use crate::types::{Coordinate, NavKey};

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Global keydown: navigation and edit entry.
    ///
    /// Returns true when the key was consumed (so the caller can
    /// `preventDefault` and stop the page from scrolling).
    pub(crate) fn internal_key_down(state: &Rc<RefCell<SharedState>>, key: &str) -> bool {
        let Some(nav) = NavKey::from_key(key) else {
            return false;
        };
        let mut s = state.borrow_mut();
        if !s.state.handle_key(nav) {
            return false;
        }
        Self::render_state(&s);
        if s.state.editing.is_some() {
            Self::show_edit_overlay(&mut s);
        }
        Self::invoke_render_callback(&s);
        true
    }

    /// Single click: select the cell. Any open edit was already
    /// committed by the overlay's blur, which fires before the click.
    pub(crate) fn internal_cell_click(state: &Rc<RefCell<SharedState>>, coord: Coordinate) {
        let mut s = state.borrow_mut();
        s.state.click_cell(coord);
        Self::render_state(&s);
        Self::invoke_render_callback(&s);
    }

    /// Double click: enter editing on a data cell; identifier cells
    /// never edit.
    pub(crate) fn internal_cell_dblclick(state: &Rc<RefCell<SharedState>>, coord: Coordinate) {
        let mut s = state.borrow_mut();
        s.state.double_click_cell(coord);
        if s.state.editing.is_some() {
            Self::render_state(&s);
            Self::show_edit_overlay(&mut s);
            Self::invoke_render_callback(&s);
        }
    }

    /// Search box change: replace the query and re-render the body.
    pub(crate) fn internal_search_change(state: &Rc<RefCell<SharedState>>, query: &str) {
        let mut s = state.borrow_mut();
        s.state.set_filter(query);
        web_sys::console::log_1(&format!("Search: {query}").into());
        Self::render_state(&s);
        Self::invoke_render_callback(&s);
    }

    /// Live edit write: every keystroke in the overlay lands in the
    /// store immediately. Only the edited cell's text is refreshed; a
    /// full rebuild would tear down the focused overlay context.
    pub(crate) fn internal_edit_input(state: &Rc<RefCell<SharedState>>, value: &str) {
        let mut s = state.borrow_mut();
        if s.state.edit_write(value).is_ok() {
            Self::refresh_editing_cell(&s);
        }
    }

    /// Commit the open edit: editing cleared, selection retained.
    pub(crate) fn internal_edit_commit(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        if s.state.editing.is_none() {
            return;
        }
        s.state.commit_edit();
        s.overlay.hide();
        Self::render_state(&s);
        Self::invoke_render_callback(&s);
    }

    /// Add-column flow: prompt, validate, notify on duplicates.
    pub(crate) fn internal_add_column(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(name)) = window.prompt_with_message("Enter column name:") else {
            return;
        };
        let mut s = state.borrow_mut();
        match s.state.add_column(&name) {
            Ok(_) => {
                Self::render_state(&s);
                Self::invoke_render_callback(&s);
            }
            Err(GridError::DuplicateColumn(_)) => {
                s.notice.set_text_content(Some("Column already exists"));
            }
            // Empty name aborts silently
            Err(_) => {}
        }
    }

    /// Toolbar stubs: post a notification, change no grid state.
    pub(crate) fn internal_toolbar_action(state: &Rc<RefCell<SharedState>>, label: &str) {
        let s = state.borrow();
        s.notice.set_text_content(Some(&format!("{label} clicked")));
    }

    /// Position the overlay over the editing cell and focus it.
    pub(crate) fn show_edit_overlay(s: &mut SharedState) {
        let Some(coord) = s.state.editing else {
            return;
        };
        let Some(rect) = Self::cell_rect(s, coord) else {
            return;
        };
        let value = s.state.edit_value().unwrap_or_default().to_string();
        s.overlay.show(&rect, &value);
    }
}
