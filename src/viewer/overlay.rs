//! DOM input overlay for cell editing.
//!
//! A single `<input>` element, created once and repositioned over
//! whichever cell is being edited. Its `input`/`keydown`/`blur`
//! listeners are wired by `GridView` at construction.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Input overlay for cell editing.
#[cfg(target_arch = "wasm32")]
pub(crate) struct InputOverlay {
    input: HtmlInputElement,
}

#[cfg(target_arch = "wasm32")]
impl InputOverlay {
    /// Create the hidden `<input>` and append it to `container`, which
    /// must be the positioning context (`position: relative`).
    pub(crate) fn new(document: &Document, container: &HtmlElement) -> Result<Self, JsValue> {
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("text");

        let style = input.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("z-index", "1000");
        let _ = style.set_property("box-sizing", "border-box");
        let _ = style.set_property("border", "2px solid #4285f4");
        let _ = style.set_property("outline", "none");
        let _ = style.set_property("padding", "0 4px");
        let _ = style.set_property("font-family", "inherit");
        let _ = style.set_property("font-size", "13px");
        let _ = style.set_property("background", "#fff");
        let _ = style.set_property("display", "none");

        container.append_child(&input)?;
        Ok(InputOverlay { input })
    }

    /// Show the overlay at `rect` (`[x, y, w, h]` in CSS pixels,
    /// relative to the container) with the cell's current value.
    pub(crate) fn show(&self, rect: &[f64; 4], current_value: &str) {
        let [x, y, w, h] = *rect;
        let style = self.input.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
        let _ = style.set_property("width", &format!("{w}px"));
        let _ = style.set_property("height", &format!("{h}px"));

        self.input.set_value(current_value);
        let _ = self.input.focus();
        self.input.select();
    }

    /// Hide the overlay. May fire a re-entrant blur; the blur handler
    /// tolerates that.
    pub(crate) fn hide(&self) {
        let _ = self.input.style().set_property("display", "none");
        let _ = self.input.blur();
    }

    /// The underlying `<input>` element, for event wiring.
    pub(crate) fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}
