//! Page Descriptor
//!
//! Which parts of the site a page carries: the nav entry it highlights and
//! the data sections it renders.

use web_sys::Document;

use crate::sections::Section;

/// Element ids the renderers write into
pub mod ids {
    pub const YEAR: &str = "year";
    pub const GOAL_AMOUNT: &str = "goalAmount";
    pub const RAISED_AMOUNT: &str = "raisedAmount";
    pub const GOAL_PCT: &str = "goalPct";
    pub const KPI_EVENTS: &str = "kpiEvents";
    pub const KPI_VOLUNTEERS: &str = "kpiVolunteers";
    pub const KPI_RAISED: &str = "kpiRaised";
    pub const EVENTS_GRID: &str = "eventsGrid";
    pub const MEMBERS_GRID: &str = "membersGrid";
}

/// Selector for the goal progress bar
pub const PROGRESS_BAR_SELECTOR: &str = ".progress__bar";

/// `<body>` attribute that declares the data sections explicitly
pub const SECTIONS_ATTRIBUTE: &str = "data-sections";

const HOME_PAGE: &str = "index.html";

/// Pages with a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Events,
    Members,
}

impl NavPage {
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "index.html" => Some(NavPage::Home),
            "events.html" => Some(NavPage::Events),
            "members.html" => Some(NavPage::Members),
            _ => None,
        }
    }

    /// Map a location pathname to its page; "/" and "" mean the home page
    pub fn from_pathname(pathname: &str) -> Option<Self> {
        let last = pathname.rsplit('/').next().unwrap_or_default();
        Self::from_file_name(if last.is_empty() { HOME_PAGE } else { last })
    }

    pub fn element_id(self) -> &'static str {
        match self {
            NavPage::Home => "nav-home",
            NavPage::Events => "nav-events",
            NavPage::Members => "nav-members",
        }
    }
}

/// Data-driven sections a page includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSections {
    pub goal: bool,
    pub events: bool,
    pub members: bool,
}

impl PageSections {
    /// Parse a `data-sections` value such as `"goal events"`.
    /// Returns the sections plus any names that were not recognized.
    pub fn parse(value: &str) -> (Self, Vec<String>) {
        let mut sections = Self::default();
        let mut unknown = Vec::new();
        for name in value.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "goal" => sections.goal = true,
                "events" => sections.events = true,
                "members" => sections.members = true,
                _ => unknown.push(name.to_string()),
            }
        }
        (sections, unknown)
    }

    /// Sections to load, in boot order
    pub fn enabled(&self) -> Vec<Section> {
        [(self.goal, Section::Goal), (self.events, Section::Events), (self.members, Section::Members)]
            .into_iter()
            .filter_map(|(on, section)| on.then_some(section))
            .collect()
    }

    /// Use the body's declaration if present, otherwise look for the containers
    pub fn from_document(document: &Document) -> Self {
        let declared = document.body().and_then(|body| body.get_attribute(SECTIONS_ATTRIBUTE));
        if let Some(value) = declared {
            let (sections, unknown) = Self::parse(&value);
            for name in unknown {
                log::warn!("[Boot] Unknown section '{}' in {}", name, SECTIONS_ATTRIBUTE);
            }
            return sections;
        }

        let has = |id: &str| document.get_element_by_id(id).is_some();
        Self {
            goal: has(ids::GOAL_AMOUNT),
            events: has(ids::EVENTS_GRID),
            members: has(ids::MEMBERS_GRID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_from_pathname() {
        assert_eq!(NavPage::from_pathname("/events.html"), Some(NavPage::Events));
        assert_eq!(NavPage::from_pathname("/site/members.html"), Some(NavPage::Members));
        assert_eq!(NavPage::from_pathname("/index.html"), Some(NavPage::Home));
        assert_eq!(NavPage::from_pathname("/"), Some(NavPage::Home));
        assert_eq!(NavPage::from_pathname(""), Some(NavPage::Home));
        assert_eq!(NavPage::from_pathname("/repo/"), Some(NavPage::Home));
    }

    #[test]
    fn test_nav_unknown_page() {
        assert_eq!(NavPage::from_pathname("/about.html"), None);
        assert_eq!(NavPage::from_pathname("/Events.html"), None);
    }

    #[test]
    fn test_nav_element_ids() {
        assert_eq!(NavPage::Home.element_id(), "nav-home");
        assert_eq!(NavPage::Events.element_id(), "nav-events");
        assert_eq!(NavPage::Members.element_id(), "nav-members");
    }

    #[test]
    fn test_parse_sections() {
        let (sections, unknown) = PageSections::parse("goal events");
        assert_eq!(sections, PageSections { goal: true, events: true, members: false });
        assert!(unknown.is_empty());

        let (sections, unknown) = PageSections::parse(" Members,, gallery ");
        assert_eq!(sections, PageSections { goal: false, events: false, members: true });
        assert_eq!(unknown, vec!["gallery".to_string()]);

        let (sections, _) = PageSections::parse("");
        assert_eq!(sections, PageSections::default());
    }

    #[test]
    fn test_enabled_order() {
        let (sections, _) = PageSections::parse("members goal");
        assert_eq!(sections.enabled(), vec![Section::Goal, Section::Members]);
        assert!(PageSections::default().enabled().is_empty());
    }
}
