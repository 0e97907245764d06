//! Main GridView struct - the browser entry point for the grid widget.
//!
//! The WASM-exported `GridView` owns the DOM it renders into:
//! - Header bar with the global search box
//! - Stub toolbar (notification-only actions)
//! - The `<table>` itself, rebuilt from `GridState` on every change
//! - An input overlay positioned over the editing cell
//!
//! Event handlers (keyboard navigation, cell click/double-click, search,
//! add-column) are registered when the viewer is created - no manual
//! JavaScript wiring required. All mutation is synchronous on the event
//! thread; each handler mutates `GridState` and re-renders.

mod events;
mod overlay;
mod toolbar;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

#[cfg(target_arch = "wasm32")]
use overlay::InputOverlay;

use crate::state::GridState;
#[cfg(target_arch = "wasm32")]
use crate::types::{ColumnRef, Coordinate, PriorityKind, StatusKind};

/// Shared state that can be accessed by event handlers (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) state: GridState,
    pub(crate) document: Document,
    pub(crate) root: HtmlElement,
    pub(crate) thead: Element,
    pub(crate) tbody: Element,
    pub(crate) notice: HtmlElement,
    pub(crate) overlay: InputOverlay,
    pub(crate) render_callback: Option<Function>,
}

/// The main grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    key_closures: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    input_closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,

    // Non-wasm32 fields (for tests/CLI)
    #[cfg(not(target_arch = "wasm32"))]
    state: GridState,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Mount the grid into `root` and wire all event handlers.
    ///
    /// `root` becomes the positioning context for the edit overlay.
    #[wasm_bindgen(constructor)]
    pub fn new(root: HtmlElement) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let chrome = toolbar::build_chrome(&document, &root)?;
        let overlay = InputOverlay::new(&document, &root)?;

        // Listener targets, held outside the shared state so closures can
        // be attached after it is constructed.
        let thead = chrome.thead.clone();
        let tbody = chrome.tbody.clone();
        let overlay_input = overlay.input().clone();
        let key_target = document.clone();

        let state = Rc::new(RefCell::new(SharedState {
            state: GridState::sample(),
            document,
            root,
            thead: chrome.thead,
            tbody: chrome.tbody,
            notice: chrome.notice,
            overlay,
            render_callback: None,
        }));

        let mut mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();
        let mut key_closures: Vec<Closure<dyn FnMut(KeyboardEvent)>> = Vec::new();
        let mut input_closures: Vec<Closure<dyn FnMut(web_sys::Event)>> = Vec::new();

        // Cell click (select)
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if let Some(coord) = Self::coordinate_from_event(&event) {
                    Self::internal_cell_click(&state, coord);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            tbody
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Cell double-click (edit)
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if let Some(coord) = Self::coordinate_from_event(&event) {
                    Self::internal_cell_dblclick(&state, coord);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            tbody
                .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Header click (add-column button, via delegation so the header
        // row can be rebuilt freely)
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if Self::is_add_column_target(&event) {
                    Self::internal_add_column(&state);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            thead
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Toolbar stub actions
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if let Some(label) = Self::action_label_from_event(&event) {
                    Self::internal_toolbar_action(&state, &label);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            chrome
                .actions
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Global keyboard navigation
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if Self::internal_key_down(&state, &event.key()) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            key_target
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .ok();
            key_closures.push(closure);
        }

        // Search box
        {
            let state = Rc::clone(&state);
            let search = chrome.search.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                Self::internal_search_change(&state, &search.value());
            }) as Box<dyn FnMut(web_sys::Event)>);
            chrome
                .search
                .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
                .ok();
            input_closures.push(closure);
        }

        // Edit overlay: live writes on every keystroke
        {
            let state = Rc::clone(&state);
            let input = overlay_input.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                Self::internal_edit_input(&state, &input.value());
            }) as Box<dyn FnMut(web_sys::Event)>);
            overlay_input
                .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
                .ok();
            input_closures.push(closure);
        }

        // Edit overlay: Enter commits. Propagation is stopped so the
        // document-level handler does not immediately re-enter editing.
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    event.stop_propagation();
                    Self::internal_edit_commit(&state);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            overlay_input
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .ok();
            key_closures.push(closure);
        }

        // Edit overlay: blur commits (fires before any click elsewhere)
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                // Re-entrant blur fired by overlay.hide() finds the state
                // already borrowed; there is nothing left to commit then.
                if let Ok(mut s) = state.try_borrow_mut() {
                    if s.state.editing.is_some() {
                        s.state.commit_edit();
                        s.overlay.hide();
                        Self::render_state(&s);
                        Self::invoke_render_callback(&s);
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            overlay_input
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .ok();
            input_closures.push(closure);
        }

        {
            let s = state.borrow();
            Self::render_state(&s);
        }

        Ok(GridView {
            state,
            mouse_closures,
            key_closures,
            input_closures,
        })
    }

    /// Force a re-render from the current state.
    #[wasm_bindgen]
    pub fn render(&self) {
        let s = self.state.borrow();
        Self::render_state(&s);
    }

    /// Replace the filter query programmatically.
    #[wasm_bindgen]
    pub fn set_filter(&self, query: &str) {
        Self::internal_search_change(&self.state, query);
    }

    /// Snapshot of the filtered grid as a `JsValue`.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        serde_wasm_bindgen::to_value(&s.state.visible_snapshot())
            .map_err(|e| JsValue::from_str(&format!("serialization error: {e}")))
    }

    /// Currently selected cell as `[row, col]` (col `-1` for the
    /// identifier column), or `None`.
    #[wasm_bindgen]
    pub fn selection(&self) -> Option<Vec<i32>> {
        let s = self.state.borrow();
        s.state.selected.map(|coord| {
            let col = match coord.column {
                ColumnRef::Id => -1,
                ColumnRef::Data(c) => i32::try_from(c).unwrap_or(i32::MAX),
            };
            vec![i32::try_from(coord.row).unwrap_or(i32::MAX), col]
        })
    }

    /// Check if currently editing a cell.
    #[wasm_bindgen]
    pub fn is_editing(&self) -> bool {
        self.state.borrow().state.editing.is_some()
    }

    /// Register a callback invoked after every re-render.
    #[wasm_bindgen]
    pub fn set_render_callback(&self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Resolve the clicked `<td>` into a cell coordinate via its
    /// `data-row` / `data-col` attributes.
    fn coordinate_from_event(event: &MouseEvent) -> Option<Coordinate> {
        let target = event.target()?;
        let element: Element = target.dyn_into().ok()?;
        let td = element.closest("td[data-row]").ok()??;
        let row: usize = td.get_attribute("data-row")?.parse().ok()?;
        let col_attr = td.get_attribute("data-col")?;
        if col_attr == "id" {
            return Some(Coordinate::id(row));
        }
        let col: usize = col_attr.parse().ok()?;
        Some(Coordinate::data(row, col))
    }

    fn is_add_column_target(event: &MouseEvent) -> bool {
        let Some(target) = event.target() else {
            return false;
        };
        let Ok(element) = target.dyn_into::<Element>() else {
            return false;
        };
        element
            .closest("[data-action='add-column']")
            .ok()
            .flatten()
            .is_some()
    }

    fn action_label_from_event(event: &MouseEvent) -> Option<String> {
        let target = event.target()?;
        let element: Element = target.dyn_into().ok()?;
        let button = element.closest("button[data-action]").ok()??;
        button.get_attribute("data-action")
    }

    pub(crate) fn invoke_render_callback(s: &SharedState) {
        if let Some(ref callback) = s.render_callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }

    /// Rebuild the header row and the (filtered) body from state.
    ///
    /// The prototype rebuilds the whole table on every change; event
    /// listeners live on the persistent `thead`/`tbody` elements, so
    /// delegation survives the rebuild.
    pub(crate) fn render_state(s: &SharedState) {
        let grid = &s.state.grid;

        // Header: identifier column, data columns, add-column button.
        let mut head = String::from("<tr><th class=\"row-id\">#</th>");
        for key in &grid.columns {
            head.push_str("<th>");
            head.push_str(&escape_html(key));
            head.push_str("</th>");
        }
        head.push_str("<th><button data-action=\"add-column\" title=\"Add column\">+</button></th></tr>");
        s.thead.set_inner_html(&head);

        // Body: visible rows only, original order.
        let selected = s.state.selected;
        let mut body = String::new();
        for row_idx in s.state.visible_rows() {
            let Some(row) = grid.rows.get(row_idx) else {
                continue;
            };
            body.push_str("<tr>");
            push_cell(
                &mut body,
                row_idx,
                ColumnRef::Id,
                &row.id.to_string(),
                selected,
                "row-id",
            );
            for (col, key) in grid.columns.iter().enumerate() {
                let value = row.value(key);
                let hint = match key.as_str() {
                    "Status" => StatusKind::classify(value).css_class(),
                    "Priority" => PriorityKind::classify(value).css_class(),
                    _ => "",
                };
                push_cell(&mut body, row_idx, ColumnRef::Data(col), value, selected, hint);
            }
            // Filler under the add-column header
            body.push_str("<td></td></tr>");
        }
        s.tbody.set_inner_html(&body);
    }

    /// Update just the editing cell's text (used for live edit writes,
    /// where a full rebuild would drop the overlay's focus context).
    pub(crate) fn refresh_editing_cell(s: &SharedState) {
        let Some(coord) = s.state.editing else {
            return;
        };
        let ColumnRef::Data(col) = coord.column else {
            return;
        };
        let selector = format!("td[data-row='{}'][data-col='{col}']", coord.row);
        if let Ok(Some(td)) = s.tbody.query_selector(&selector) {
            td.set_text_content(Some(s.state.edit_value().unwrap_or_default()));
        }
    }

    /// Viewport rectangle of a cell, relative to the widget root.
    pub(crate) fn cell_rect(s: &SharedState, coord: Coordinate) -> Option<[f64; 4]> {
        let col = match coord.column {
            ColumnRef::Data(c) => c.to_string(),
            ColumnRef::Id => "id".to_string(),
        };
        let selector = format!("td[data-row='{}'][data-col='{col}']", coord.row);
        let td = s.tbody.query_selector(&selector).ok()??;
        let cell = td.get_bounding_client_rect();
        let origin = s.root.get_bounding_client_rect();
        Some([
            cell.left() - origin.left(),
            cell.top() - origin.top(),
            cell.width(),
            cell.height(),
        ])
    }
}

/// Append one `<td>` with coordinate attributes and style hints.
#[cfg(target_arch = "wasm32")]
fn push_cell(
    out: &mut String,
    row: usize,
    column: ColumnRef,
    value: &str,
    selected: Option<Coordinate>,
    hint: &str,
) {
    let col_attr = match column {
        ColumnRef::Id => "id".to_string(),
        ColumnRef::Data(c) => c.to_string(),
    };
    let is_selected = selected == Some(Coordinate { row, column });
    let mut classes = String::new();
    if !hint.is_empty() {
        classes.push_str(hint);
    }
    if is_selected {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str("selected");
    }
    out.push_str(&format!(
        "<td data-row=\"{row}\" data-col=\"{col_attr}\" class=\"{classes}\">{}</td>",
        escape_html(value)
    ));
}

/// Minimal HTML escaping for user-entered cell values.
#[cfg(target_arch = "wasm32")]
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a headless view over the sample dataset (non-WASM, for
    /// testing/CLI).
    #[must_use]
    pub fn new_test() -> Self {
        GridView {
            state: GridState::sample(),
        }
    }

    /// Mutable access to the underlying state.
    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }

    /// Shared access to the underlying state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Snapshot of the filtered grid as pretty JSON.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state.visible_snapshot())
    }
}
