//! Events Grid

use web_sys::Document;

use super::{grid_html, Rendered};
use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::fetch::fetch_records;
use crate::markup::event_card;
use crate::models::EventRecord;
use crate::page::ids;

/// Fetch the events and replace the grid with one card per event, in file order.
/// The grid is left as it was if the fetch fails.
pub async fn load(document: &Document, config: &SiteConfig) -> Result<Rendered, LoadError> {
    let Some(grid) = document.get_element_by_id(ids::EVENTS_GRID) else {
        log::warn!("[Events] #{} not found, skipping fetch", ids::EVENTS_GRID);
        return Ok(Rendered::Events { cards: 0 });
    };

    let outcome = fetch_records::<EventRecord>(&config.events_data).await;
    if let Some(html) = grid_html(&outcome, &config.event_placeholder, event_card) {
        grid.set_inner_html(&html);
    }
    outcome.map(|events| Rendered::Events { cards: events.len() })
}
