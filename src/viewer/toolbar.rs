//! Static page chrome: header bar, stub toolbar, table scaffold, and
//! the notification line.
//!
//! Toolbar actions are stubs by design: they post a notification and
//! change no grid state. The action buttons carry a `data-action`
//! attribute so `GridView` can handle them through one delegated
//! listener.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Labels of the stub toolbar buttons, left group then right group.
#[cfg(target_arch = "wasm32")]
const TOOLBAR_ACTIONS: [&str; 9] = [
    "Tool bar",
    "Hide Fields",
    "Sort",
    "Filter",
    "Cell view",
    "Import",
    "Export",
    "Share",
    "New Action",
];

/// Handles to the persistent DOM elements `GridView` renders into.
#[cfg(target_arch = "wasm32")]
pub(crate) struct Chrome {
    pub(crate) search: HtmlInputElement,
    pub(crate) actions: HtmlElement,
    pub(crate) thead: Element,
    pub(crate) tbody: Element,
    pub(crate) notice: HtmlElement,
}

/// Build the widget's DOM under `root` and return the live handles.
#[cfg(target_arch = "wasm32")]
pub(crate) fn build_chrome(document: &Document, root: &HtmlElement) -> Result<Chrome, JsValue> {
    let _ = root.style().set_property("position", "relative");

    // Header bar: breadcrumb, search box, user label
    let header: HtmlElement = document.create_element("div")?.dyn_into()?;
    header.set_class_name("grid-header");

    let breadcrumb: HtmlElement = document.create_element("span")?.dyn_into()?;
    breadcrumb.set_class_name("breadcrumb");
    breadcrumb.set_text_content(Some("Workspace \u{203a} Folder 2 \u{203a} Spreadsheet 3"));
    header.append_child(&breadcrumb)?;

    let search: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    search.set_type("text");
    search.set_placeholder("Search within sheet");
    search.set_class_name("grid-search");
    header.append_child(&search)?;

    let user: HtmlElement = document.create_element("span")?.dyn_into()?;
    user.set_class_name("user-label");
    user.set_text_content(Some("John Doe"));
    header.append_child(&user)?;

    root.append_child(&header)?;

    // Stub action bar
    let actions: HtmlElement = document.create_element("div")?.dyn_into()?;
    actions.set_class_name("grid-actions");
    for label in TOOLBAR_ACTIONS {
        let button: HtmlElement = document.create_element("button")?.dyn_into()?;
        button.set_attribute("data-action", label)?;
        button.set_text_content(Some(label));
        actions.append_child(&button)?;
    }
    root.append_child(&actions)?;

    // The table itself; header and body are rebuilt on every render
    let table: Element = document.create_element("table")?;
    table.set_class_name("grid-table");
    let thead = document.create_element("thead")?;
    let tbody = document.create_element("tbody")?;
    table.append_child(&thead)?;
    table.append_child(&tbody)?;
    root.append_child(&table)?;

    // Notification line + static status
    let notice: HtmlElement = document.create_element("div")?.dyn_into()?;
    notice.set_class_name("grid-notice");
    root.append_child(&notice)?;

    let status: HtmlElement = document.create_element("div")?.dyn_into()?;
    status.set_class_name("grid-status");
    status.set_text_content(Some("Status: Online"));
    root.append_child(&status)?;

    Ok(Chrome {
        search,
        actions,
        thead,
        tbody,
        notice,
    })
}
