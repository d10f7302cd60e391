// fetcher.rs
//
// The async lucky-number flow: fade out, show the skeleton, fetch, then
// either the number card or a short-lived notice that reverts itself.

use donut_engine::render::snippets;
use donut_engine::{LuckyNumberResponse, LuckyOutcome};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::{dom, page};

const LUCKY_ENDPOINT: &str = "/api/lucky-number";
/// Gap between opacity writes; paired with the css transition the
/// container gets primed with.
const FADE_MS: u32 = 200;
/// How long a not-found or error notice stays before reverting.
const REVERT_DELAY_MS: u32 = 2_000;

/// Kick off the fetch cycle for one container.
pub fn spawn_toggle(category_label: String, container_id: String) {
    spawn_local(async move {
        if let Err(err) = toggle(&category_label, &container_id).await {
            log::error!("container {container_id}: toggle failed: {err:?}");
        }
    });
}

async fn toggle(category_label: &str, container_id: &str) -> Result<(), JsValue> {
    let Some(container) = dom::html_by_id(container_id) else {
        return Ok(());
    };
    dom::prime_fade(&container)?;

    let Some(ticket) = page::begin_toggle(container_id, &container.inner_html()) else {
        return Ok(());
    };

    fade(&container, "0").await?;
    container.set_inner_html(&snippets::loading_skeleton());
    fade(&container, "1").await?;

    let outcome = request_number(category_label, ticket.index).await;
    page::finish_toggle(container_id, &outcome);

    match outcome {
        LuckyOutcome::Found(number) => {
            fade(&container, "0").await?;
            container.set_inner_html(&snippets::number_display(&number, container_id));
            dom::set_showing_attr(&container, true)?;
            fade(&container, "1").await?;
            page::resync_charts(&ticket.name);
        }
        LuckyOutcome::NotFound => {
            log::warn!("no lucky number for category {category_label:?}");
            fade(&container, "0").await?;
            container.set_inner_html(snippets::not_found_notice());
            fade(&container, "1").await?;
            schedule_revert(container_id);
        }
        LuckyOutcome::Failed => {
            fade(&container, "0").await?;
            container.set_inner_html(snippets::error_notice());
            fade(&container, "1").await?;
            schedule_revert(container_id);
        }
    }
    Ok(())
}

/// Ask the backend for the nth number of a category. Network and decode
/// problems all collapse to Failed; the caller only renders outcomes.
async fn request_number(category_label: &str, index: u32) -> LuckyOutcome {
    let encoded = String::from(js_sys::encode_uri_component(category_label));
    let url = format!("{LUCKY_ENDPOINT}?category={encoded}&index={index}");

    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            log::error!("lucky number request failed: {err}");
            return LuckyOutcome::Failed;
        }
    };
    if !response.ok() {
        log::warn!("lucky number endpoint answered {}", response.status());
        return LuckyOutcome::Failed;
    }
    match response.json::<LuckyNumberResponse>().await {
        Ok(body) => body.into_outcome(),
        Err(err) => {
            log::error!("lucky number response unreadable: {err}");
            LuckyOutcome::Failed
        }
    }
}

async fn fade(container: &HtmlElement, opacity: &str) -> Result<(), JsValue> {
    dom::set_opacity(container, opacity)?;
    TimeoutFuture::new(FADE_MS).await;
    Ok(())
}

fn schedule_revert(container_id: &str) {
    let id = container_id.to_owned();
    Timeout::new(REVERT_DELAY_MS, move || page::revert_container(&id)).forget();
}
