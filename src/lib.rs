//! webgrid - editable spreadsheet grid prototype for the web
//!
//! Renders a single spreadsheet-like grid in the browser via WebAssembly
//! and the DOM:
//! - Keyboard-driven cell selection (arrows + Enter)
//! - Inline editing with live writes
//! - Append-only dynamic columns
//! - Case-insensitive global row filter
//!
//! The core (store, filter, selection/edit state machine) is pure Rust
//! and fully testable off the browser; only the `viewer` module touches
//! the DOM.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'webgrid';
//! await init();
//! const grid = new GridView(document.getElementById('grid'));
//! ```

pub mod error;
pub mod grid;
pub mod state;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main widget struct
pub use viewer::GridView;

pub use types::*;

/// The startup sample grid (unfiltered) as a JSON string.
///
/// # Errors
/// Returns an error if serialization fails.
#[wasm_bindgen]
pub fn sample_grid_json() -> Result<String, JsValue> {
    let state = state::GridState::sample();
    serde_json::to_string(&state.visible_snapshot())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
