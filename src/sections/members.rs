//! Members Grid

use web_sys::Document;

use super::{grid_html, Rendered};
use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::fetch::fetch_records;
use crate::markup::member_card;
use crate::models::MemberRecord;
use crate::page::ids;

/// Fetch the members and replace the grid with their cards.
/// The grid is left as it was if the fetch fails.
pub async fn load(document: &Document, config: &SiteConfig) -> Result<Rendered, LoadError> {
    let Some(grid) = document.get_element_by_id(ids::MEMBERS_GRID) else {
        log::warn!("[Members] #{} not found, skipping fetch", ids::MEMBERS_GRID);
        return Ok(Rendered::Members { cards: 0 });
    };

    let outcome = fetch_records::<MemberRecord>(&config.members_data).await;
    if let Some(html) = grid_html(&outcome, &config.member_placeholder, member_card) {
        grid.set_inner_html(&html);
    }
    outcome.map(|members| Rendered::Members { cards: members.len() })
}
