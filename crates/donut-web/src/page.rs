// page.rs
//
// The page-wide registry: every mounted chart, charts still waiting for
// their svg, and the lucky-number interaction state. Lives in a
// thread_local because wasm-bindgen exports are free functions.

use std::cell::RefCell;
use std::collections::HashMap;

use donut_engine::bridge::naming::{self, ChartKey};
use donut_engine::{
    build_frame, decode_active, decode_breakdown, qualifying_categories, Category, CategorySet,
    ChartInstance, DonutConfig, InteractionState, LuckyOutcome, SlotPhase,
};
use web_sys::Element;

use crate::animator::{self, ActiveAnimation};
use crate::dom;

struct MountedChart {
    chart: ChartInstance,
    svg: Element,
    animation: Option<ActiveAnimation>,
}

/// Init data parked until the page signals the svg is in the DOM.
struct PendingChart {
    key: ChartKey,
    statuses: CategorySet,
    active: CategorySet,
}

#[derive(Default)]
struct PageState {
    charts: HashMap<String, MountedChart>,
    pending: HashMap<String, PendingChart>,
    interactions: InteractionState,
}

thread_local! {
    static PAGE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// What a toggle click committed to: which chart family it belongs to
/// and which result index to fetch.
pub struct ToggleTicket {
    pub name: String,
    pub index: u32,
}

/// Register a chart from its server payloads. Mounts immediately when
/// the svg already exists; otherwise parks the data for chart_mounted.
pub fn init_chart(chart_id: &str, payload: &str, active_raw: &str) {
    let Some(key) = naming::parse_chart_id(chart_id) else {
        log::warn!("ignoring init for unrecognized chart id {chart_id}");
        return;
    };
    dom::hide_skeleton(&naming::skeleton_id(&key.name));

    // An undecodable payload aborts this chart only; the rest of the
    // page keeps working.
    let breakdown = match decode_breakdown(payload) {
        Ok(map) => map,
        Err(err) => {
            log::error!("chart {chart_id}: breakdown payload unusable: {err}");
            return;
        }
    };
    let statuses = qualifying_categories(&breakdown);
    let active = match decode_active(active_raw) {
        Ok(set) => set,
        Err(err) => {
            log::error!("chart {chart_id}: active-category payload unusable: {err}");
            return;
        }
    };

    match dom::element_by_id(chart_id) {
        Some(svg) => mount(chart_id, key, statuses, active, svg),
        None => {
            PAGE.with(|cell| {
                cell.borrow_mut().pending.insert(
                    chart_id.to_owned(),
                    PendingChart {
                        key,
                        statuses,
                        active,
                    },
                );
            });
            log::debug!("chart {chart_id}: waiting for mount");
        }
    }
}

/// The page template calls this once a chart svg lands in the DOM.
pub fn chart_mounted(chart_id: &str) {
    let pending = PAGE.with(|cell| cell.borrow_mut().pending.remove(chart_id));
    if let Some(PendingChart {
        key,
        statuses,
        active,
    }) = pending
    {
        match dom::element_by_id(chart_id) {
            Some(svg) => mount(chart_id, key, statuses, active, svg),
            None => log::warn!("chart {chart_id}: mount signaled but element is missing"),
        }
        return;
    }

    let known = PAGE.with(|cell| cell.borrow().charts.contains_key(chart_id));
    if !known {
        log::warn!("chart {chart_id}: mounted without init");
        return;
    }
    // A remount replaces the svg node; re-grab it, drop any animation
    // aimed at the old one, and repaint from current state.
    if let Some(svg) = dom::element_by_id(chart_id) {
        PAGE.with(|cell| {
            if let Some(mounted) = cell.borrow_mut().charts.get_mut(chart_id) {
                mounted.svg = svg;
                mounted.animation = None;
                paint_now(mounted);
            }
        });
    }
}

fn mount(chart_id: &str, key: ChartKey, statuses: CategorySet, active: CategorySet, svg: Element) {
    dom::hide_skeleton(&naming::skeleton_id(&key.name));
    let chart = ChartInstance::new(key.name, key.modal, statuses, active, DonutConfig::default());
    let mut mounted = MountedChart {
        chart,
        svg,
        animation: None,
    };
    // First render is immediate; animation is reserved for score changes.
    paint_now(&mut mounted);
    PAGE.with(|cell| {
        cell.borrow_mut().charts.insert(chart_id.to_owned(), mounted);
    });
    log::info!("chart {chart_id}: mounted");
}

/// Add one lucky category to a chart and animate the change in.
pub fn add_lucky(chart_id: &str, label: &str) {
    let Some(category) = Category::from_label(label) else {
        log::warn!("chart {chart_id}: unknown category {label:?}");
        return;
    };
    with_chart(chart_id, |chart_id, mounted| {
        if mounted.chart.add_lucky(category) {
            start_animation(chart_id, mounted);
        }
    });
}

/// Redraw a chart from its current state.
pub fn redraw(chart_id: &str, animate: bool) {
    with_chart(chart_id, |chart_id, mounted| {
        if animate {
            start_animation(chart_id, mounted);
        } else {
            paint_now(mounted);
        }
    });
}

/// Move a container's slot into Loading and hand back the number index
/// to request. Returns None for an unrecognized container id. A click
/// while a fetch is still in flight starts another one; whichever
/// response lands last is the one that stays on screen.
pub fn begin_toggle(container_id: &str, current_html: &str) -> Option<ToggleTicket> {
    let Some(key) = naming::parse_lucky_container(container_id) else {
        log::warn!("ignoring toggle for unrecognized container {container_id}");
        return None;
    };
    PAGE.with(|cell| {
        let mut page = cell.borrow_mut();
        let slot = page
            .interactions
            .slot_mut(container_id, &key.name, key.category);
        if slot.phase() == SlotPhase::Empty {
            slot.capture_default(current_html);
        }
        let index = slot.begin_fetch();
        Some(ToggleTicket {
            name: key.name,
            index,
        })
    })
}

/// Settle a container's in-flight fetch.
pub fn finish_toggle(container_id: &str, outcome: &LuckyOutcome) -> SlotPhase {
    let Some(key) = naming::parse_lucky_container(container_id) else {
        return SlotPhase::Empty;
    };
    PAGE.with(|cell| {
        cell.borrow_mut()
            .interactions
            .slot_mut(container_id, &key.name, key.category)
            .finish_fetch(outcome)
    })
}

/// Restore a container to its captured badge markup and resync the
/// charts watching it. The slot reverts even when the element is gone,
/// so a dismissed modal cannot pin a category lucky forever.
pub fn revert_container(container_id: &str) {
    let Some(key) = naming::parse_lucky_container(container_id) else {
        log::warn!("ignoring revert for unrecognized container {container_id}");
        return;
    };
    let captured = PAGE.with(|cell| {
        cell.borrow_mut()
            .interactions
            .slot_mut(container_id, &key.name, key.category)
            .revert()
    });
    match dom::html_by_id(container_id) {
        Some(container) => {
            container.set_inner_html(captured.as_deref().unwrap_or(""));
            let _ = dom::set_showing_attr(&container, false);
            let _ = dom::set_opacity(&container, "1");
        }
        None => log::warn!("container {container_id}: gone before revert"),
    }
    resync_charts(&key.name);
}

/// Re-pull the lucky set from the interaction registry and animate
/// every variant of the chart toward it. Runs even when the set is
/// unchanged; the dip pulse is the user's feedback.
pub fn resync_charts(name: &str) {
    let lucky = PAGE.with(|cell| cell.borrow().interactions.lucky_for(name));
    for modal in [false, true] {
        let chart_id = naming::chart_id(name, modal);
        PAGE.with(|cell| {
            let mut page = cell.borrow_mut();
            if let Some(mounted) = page.charts.get_mut(&chart_id) {
                mounted.chart.set_lucky(lucky);
                start_animation(&chart_id, mounted);
            }
        });
    }
}

/// One animation tick. Samples the transition, paints, reschedules
/// until the transition reports finished.
pub(crate) fn animation_frame(chart_id: &str, timestamp: f64) {
    let painted = PAGE.with(|cell| {
        let mut page = cell.borrow_mut();
        let mounted = page.charts.get_mut(chart_id)?;
        let animation = mounted.animation.as_mut()?;
        let (allocation, finished) = animation.advance(timestamp);
        mounted.chart.mark_painted(allocation.clone());
        let frame = build_frame(&mounted.chart, &allocation);
        if finished {
            mounted.animation = None;
        } else if let Some(animation) = mounted.animation.as_mut() {
            animation.set_frame(animator::schedule(chart_id.to_owned()));
        }
        Some((mounted.svg.clone(), frame))
    });
    if let Some((svg, frame)) = painted {
        if let Err(err) = dom::paint(&svg, &frame) {
            log::error!("chart {chart_id}: paint failed: {err:?}");
        }
    }
}

fn with_chart(chart_id: &str, f: impl FnOnce(&str, &mut MountedChart)) {
    PAGE.with(|cell| {
        let mut page = cell.borrow_mut();
        match page.charts.get_mut(chart_id) {
            Some(mounted) => f(chart_id, mounted),
            None => log::warn!("chart {chart_id}: not mounted"),
        }
    });
}

/// Replace any running animation with a fresh transition from the
/// on-screen state. Dropping the old animation cancels its frame.
fn start_animation(chart_id: &str, mounted: &mut MountedChart) {
    let mut animation = ActiveAnimation::new(mounted.chart.begin_transition());
    animation.set_frame(animator::schedule(chart_id.to_owned()));
    mounted.animation = Some(animation);
}

fn paint_now(mounted: &mut MountedChart) {
    mounted.animation = None;
    let target = mounted.chart.target();
    mounted.chart.mark_painted(target.clone());
    let frame = build_frame(&mounted.chart, &target);
    if let Err(err) = dom::paint(&mounted.svg, &frame) {
        log::error!("chart {}: paint failed: {err:?}", mounted.chart.name());
    }
}
