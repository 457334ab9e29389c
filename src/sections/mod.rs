//! Page Sections
//!
//! One module per region of the page. The data-driven sections expose a
//! `load` task that fetches its document and renders it, returning the
//! outcome instead of logging it.

pub mod events;
pub mod footer;
pub mod goal;
pub mod members;
pub mod nav;

use std::fmt;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::markup::cards;

/// The data-driven sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Goal,
    Events,
    Members,
}

impl Section {
    /// Log prefix
    pub fn tag(self) -> &'static str {
        match self {
            Section::Goal => "[Goal]",
            Section::Events => "[Events]",
            Section::Members => "[Members]",
        }
    }

    /// The data file this section is built from
    pub fn data_path(self, config: &SiteConfig) -> &str {
        match self {
            Section::Goal => &config.site_data,
            Section::Events => &config.events_data,
            Section::Members => &config.members_data,
        }
    }

    pub async fn load(self, document: &Document, config: &SiteConfig) -> Result<Rendered, LoadError> {
        match self {
            Section::Goal => goal::load(document, config).await,
            Section::Events => events::load(document, config).await,
            Section::Members => members::load(document, config).await,
        }
    }
}

/// What a successful `load` put on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Goal { percentage: i64 },
    Events { cards: usize },
    Members { cards: usize },
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Goal { percentage } => write!(f, "goal at {}%", percentage),
            Rendered::Events { cards } => write!(f, "{} event cards", cards),
            Rendered::Members { cards } => write!(f, "{} member cards", cards),
        }
    }
}

/// Markup for a grid given the outcome of its fetch. `None` means the grid
/// must be left untouched; an empty list still clears it.
pub fn grid_html<T>(
    outcome: &Result<Vec<T>, LoadError>,
    placeholder: &str,
    card: fn(&T, &str) -> String,
) -> Option<String> {
    outcome.as_ref().ok().map(|records| cards(records, placeholder, card))
}

/// Set an element's text if the element exists
pub(crate) fn set_text(document: &Document, id: &str, text: &str) -> Option<Element> {
    let el = document.get_element_by_id(id)?;
    el.set_text_content(Some(text));
    Some(el)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{event_card, member_card};
    use crate::models::{EventRecord, MemberRecord};

    #[test]
    fn test_data_paths_follow_config() {
        let config = SiteConfig { members_data: "data/team.json".to_string(), ..SiteConfig::default() };
        assert_eq!(Section::Goal.data_path(&config), "data/site.json");
        assert_eq!(Section::Events.data_path(&config), "data/events.json");
        assert_eq!(Section::Members.data_path(&config), "data/team.json");
    }

    #[test]
    fn test_rendered_display() {
        assert_eq!(Rendered::Goal { percentage: 25 }.to_string(), "goal at 25%");
        assert_eq!(Rendered::Events { cards: 3 }.to_string(), "3 event cards");
    }

    #[test]
    fn test_failed_fetch_leaves_grid_untouched() {
        let failed: Result<Vec<EventRecord>, LoadError> = Err(LoadError::Status {
            path: "data/events.json".to_string(),
            status: 404,
        });
        assert_eq!(grid_html(&failed, "assets/event-placeholder.jpg", event_card), None);

        let failed: Result<Vec<MemberRecord>, LoadError> = Err(LoadError::Parse {
            path: "data/members.json".to_string(),
            message: "Unexpected token".to_string(),
        });
        assert_eq!(grid_html(&failed, "assets/member-placeholder.jpg", member_card), None);
    }

    #[test]
    fn test_successful_fetch_replaces_grid() {
        let events = vec![
            EventRecord { title: "Walk".to_string(), ..Default::default() },
            EventRecord { title: "Gala".to_string(), ..Default::default() },
        ];
        let html = grid_html(&Ok(events), "assets/event-placeholder.jpg", event_card).unwrap();
        assert_eq!(html.matches("<article").count(), 2);

        let empty: Result<Vec<MemberRecord>, LoadError> = Ok(Vec::new());
        assert_eq!(grid_html(&empty, "assets/member-placeholder.jpg", member_card), Some(String::new()));
    }
}
