pub mod animator;
pub mod dom;
pub mod fetcher;
pub mod page;

use wasm_bindgen::prelude::*;

/// One-time module setup: panics and log records go to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("donut charts: ready");
}

/// Payloads arrive as strings or plain objects; normalize to text.
fn text_payload(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if value.is_null() || value.is_undefined() {
        return String::new();
    }
    js_sys::JSON::stringify(value)
        .ok()
        .map(String::from)
        .unwrap_or_default()
}

/// Register a chart with its category breakdown and active categories.
/// Safe to call before the svg exists; pair with `chartMounted`.
#[wasm_bindgen(js_name = initNestedDonut)]
pub fn init_nested_donut(chart_id: String, breakdown: JsValue, active_categories: JsValue) {
    page::init_chart(
        &chart_id,
        &text_payload(&breakdown),
        &text_payload(&active_categories),
    );
}

/// Signal that a chart svg is now in the DOM.
#[wasm_bindgen(js_name = chartMounted)]
pub fn chart_mounted(chart_id: String) {
    page::chart_mounted(&chart_id);
}

/// Mark one category lucky on a single chart and animate it in.
#[wasm_bindgen(js_name = addLuckyCategory)]
pub fn add_lucky_category(category: String, chart_id: String) {
    page::add_lucky(&chart_id, &category);
}

/// Redraw a chart, animated or immediate.
#[wasm_bindgen(js_name = redrawChart)]
pub fn redraw_chart(chart_id: String, animate: bool) {
    page::redraw(&chart_id, animate);
}

/// Fetch (or cycle to the next) lucky number for a badge container.
#[wasm_bindgen(js_name = toggleLuckyNumber)]
pub fn toggle_lucky_number(category: String, container_id: String) {
    fetcher::spawn_toggle(category, container_id);
}

/// Put a container back to its original badge markup.
#[wasm_bindgen(js_name = revertLuckyNumber)]
pub fn revert_lucky_number(container_id: String) {
    page::revert_container(&container_id);
}

/// Badge click entry point wired into the page templates.
#[wasm_bindgen(js_name = handleLuckyClick)]
pub fn handle_lucky_click(category: String, container_id: String, _chart_id: String) {
    fetcher::spawn_toggle(category, container_id);
}

/// Open the purchase modal primed with a phone number.
#[wasm_bindgen(js_name = openPurchaseModal)]
pub fn open_purchase_modal(phone_number: String) {
    dom::show_purchase_modal(&phone_number);
}
