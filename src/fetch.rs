use crate::constants::CONTRIBUTIONS_ENDPOINT;
use crate::dom::js_err;
use anyhow::{anyhow, bail};
use folio_core::{parse_response, ContributionCalendar};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub fn contributions_url(user_name: &str) -> String {
    format!(
        "{}?userName={}",
        CONTRIBUTIONS_ENDPOINT,
        String::from(js_sys::encode_uri_component(user_name))
    )
}

/// Loads a user's contribution calendar from the site's endpoint.
pub async fn fetch_contributions(user_name: &str) -> anyhow::Result<ContributionCalendar> {
    if user_name.trim().is_empty() {
        bail!("userName is required");
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let url = contributions_url(user_name);

    let response: web::Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow!("response body is not text"))?;

    if !response.ok() {
        log::warn!("[fetch] {} answered {}", url, response.status());
    }
    // error bodies carry `{ error }`, which parses into a descriptive error
    let calendar = parse_response(&body)?;
    log::info!(
        "[fetch] {} contributions over {} weeks",
        calendar.total_contributions,
        calendar.weeks.len()
    );
    Ok(calendar)
}
