//! All direct DOM access: painting a ChartFrame into an svg, skeleton
//! and modal visibility, and the small attribute/style helpers the
//! lucky-number flow needs. Nothing here owns state.

use donut_engine::bridge::naming;
use donut_engine::render::snippets;
use donut_engine::ChartFrame;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, SvgElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Hide a chart's server-rendered placeholder. Safe to call repeatedly
/// and before the placeholder exists.
pub fn hide_skeleton(skeleton_id: &str) {
    if let Some(skeleton) = html_by_id(skeleton_id) {
        let style = skeleton.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("display", "none");
    }
}

/// Paint one frame into a chart svg. Rebuilds the inner ring wholesale;
/// the static center text nodes are only retargeted, not recreated.
pub fn paint(svg: &Element, frame: &ChartFrame) -> Result<(), JsValue> {
    hide_skeleton(&frame.skeleton_id);
    show_center_text(svg)?;

    let Some(inner_ring) = svg.query_selector(".inner-ring")? else {
        return Ok(());
    };
    inner_ring.set_inner_html("");

    let doc = document();
    let defs = doc.create_element_ns(Some(SVG_NS), "defs")?;

    let filter = doc.create_element_ns(Some(SVG_NS), "filter")?;
    filter.set_attribute("id", &naming::filter_id(&frame.def_prefix))?;
    filter.set_inner_html(snippets::drop_shadow_filter());
    defs.append_child(&filter)?;

    for gradient in &frame.gradients {
        let grad = doc.create_element_ns(Some(SVG_NS), "linearGradient")?;
        grad.set_attribute("id", &gradient.id)?;
        grad.set_attribute("gradientTransform", &format!("rotate({})", gradient.rotation))?;
        let light = doc.create_element_ns(Some(SVG_NS), "stop")?;
        light.set_attribute("offset", "0%")?;
        light.set_attribute("stop-color", gradient.light)?;
        let dark = doc.create_element_ns(Some(SVG_NS), "stop")?;
        dark.set_attribute("offset", "100%")?;
        dark.set_attribute("stop-color", gradient.dark)?;
        grad.append_child(&light)?;
        grad.append_child(&dark)?;
        defs.append_child(&grad)?;
    }

    let gold = doc.create_element_ns(Some(SVG_NS), "linearGradient")?;
    gold.set_attribute("id", &naming::gold_gradient_id(&frame.def_prefix))?;
    gold.set_attribute("x1", "0%")?;
    gold.set_attribute("y1", "0%")?;
    gold.set_attribute("x2", "100%")?;
    gold.set_attribute("y2", "100%")?;
    gold.set_inner_html(snippets::gold_gradient_stops());
    defs.append_child(&gold)?;
    inner_ring.append_child(&defs)?;

    for wedge in &frame.wedges {
        let path = doc.create_element_ns(Some(SVG_NS), "path")?;
        path.set_attribute("d", &wedge.path)?;
        path.set_attribute("fill", &wedge.fill)?;
        inner_ring.append_child(&path)?;
    }

    for label in &frame.labels {
        let text = doc.create_element_ns(Some(SVG_NS), "text")?;
        text.set_attribute("x", &label.x.to_string())?;
        text.set_attribute("y", &label.y.to_string())?;
        text.set_attribute("text-anchor", "middle")?;
        text.set_attribute("dominant-baseline", "middle")?;
        text.set_attribute("font-size", "10px")?;
        text.set_attribute("font-weight", "bold")?;
        text.set_attribute("fill", "#FFFFFF")?;
        text.set_attribute(
            "style",
            "pointer-events: none; text-shadow: 0px 1px 2px rgba(0,0,0,0.3);",
        )?;
        text.set_text_content(Some(&label.text));
        inner_ring.append_child(&text)?;
    }

    let center_group = doc.create_element_ns(Some(SVG_NS), "g")?;
    let hole = doc.create_element_ns(Some(SVG_NS), "circle")?;
    hole.set_attribute("cx", &frame.hole_center.x.to_string())?;
    hole.set_attribute("cy", &frame.hole_center.y.to_string())?;
    hole.set_attribute("r", &frame.hole_radius.to_string())?;
    hole.set_attribute("fill", "white")?;
    hole.set_attribute("style", "filter: drop-shadow(0 4px 10px rgba(0,0,0,0.12));")?;
    center_group.append_child(&hole)?;
    inner_ring.append_child(&center_group)?;

    if let Some(center) = svg.query_selector(".donut-center-number")? {
        center.set_text_content(Some(&frame.center_text));
    }

    for badge in &frame.badges {
        if let Some(el) = element_by_id(&badge.element_id) {
            el.set_inner_html(&badge.html);
        }
    }

    set_total_scores(&frame.total_score_prefix, &frame.center_text)?;

    Ok(())
}

/// Un-hide the static center text group the page ships inside the svg.
fn show_center_text(svg: &Element) -> Result<(), JsValue> {
    let groups = svg.query_selector_all(".center-text-group")?;
    for i in 0..groups.length() {
        let Some(node) = groups.item(i) else { continue };
        if let Some(el) = node.dyn_ref::<SvgElement>() {
            el.style().set_property("display", "block")?;
        }
    }
    Ok(())
}

/// Push the rounded total into every external score element of the
/// chart (bottom bar, header, anything prefixed with its name).
fn set_total_scores(prefix: &str, text: &str) -> Result<(), JsValue> {
    let selector = format!("[id^=\"{prefix}\"] .score-value");
    let elements = document().query_selector_all(&selector)?;
    for i in 0..elements.length() {
        if let Some(node) = elements.item(i) {
            node.set_text_content(Some(text));
        }
    }
    Ok(())
}

/// Arm the container's css transition so later opacity writes fade.
pub fn prime_fade(container: &HtmlElement) -> Result<(), JsValue> {
    container
        .style()
        .set_property("transition", "opacity 0.3s ease-in-out")
}

pub fn set_opacity(container: &HtmlElement, opacity: &str) -> Result<(), JsValue> {
    container.style().set_property("opacity", opacity)
}

pub fn set_showing_attr(container: &Element, showing: bool) -> Result<(), JsValue> {
    container.set_attribute("data-showing-number", if showing { "true" } else { "false" })
}

/// Open the purchase modal primed with a phone number.
pub fn show_purchase_modal(phone_number: &str) {
    let Some(modal) = html_by_id("purchase-modal") else {
        log::warn!("purchase modal is not on this page");
        return;
    };
    if let Some(slot) = html_by_id("buy-modal-phone") {
        slot.set_inner_text(phone_number);
    }
    let _ = modal.style().set_property("display", "flex");
}
