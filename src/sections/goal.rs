//! Goal Widget
//!
//! Fundraising goal, amount raised, the progress bar and the KPI counters
//! under the hero.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{set_text, Rendered};
use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::fetch::fetch_json;
use crate::format::{format_count, format_money};
use crate::models::SiteSummary;
use crate::page::{ids, PROGRESS_BAR_SELECTOR};
use crate::progress::percentage;

/// Everything the widget displays, computed before touching the DOM
#[derive(Debug, Clone, PartialEq)]
pub struct GoalView {
    pub goal_text: String,
    pub raised_text: String,
    pub percentage: i64,
    pub kpi_events: String,
    pub kpi_volunteers: String,
    pub kpi_raised: String,
}

impl GoalView {
    pub fn new(site: &SiteSummary, config: &SiteConfig) -> Self {
        // Zero counts as unset, like a missing field
        let counter = |value: Option<f64>, fallback: f64| {
            format_count(value.filter(|v| *v != 0.0 && !v.is_nan()).unwrap_or(fallback))
        };
        Self {
            goal_text: format_money(site.goal),
            raised_text: format_money(site.raised),
            percentage: percentage(site.goal, site.raised, config.clamp),
            kpi_events: counter(site.events_run, config.default_events_run),
            kpi_volunteers: counter(site.volunteers, config.default_volunteers),
            kpi_raised: format_money(site.raised),
        }
    }

    /// CSS width of the progress bar
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Text of the percentage label next to the bar
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn aria_value(&self) -> String {
        self.percentage.to_string()
    }

    /// Write the view into whichever widget elements the page has
    pub fn apply(&self, document: &Document) {
        set_text(document, ids::GOAL_AMOUNT, &self.goal_text);
        set_text(document, ids::RAISED_AMOUNT, &self.raised_text);

        if let Ok(Some(bar)) = document.query_selector(PROGRESS_BAR_SELECTOR) {
            if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                if let Err(e) = bar.style().set_property("width", &self.bar_width()) {
                    log::warn!("[Goal] Could not size progress bar: {:?}", e);
                }
            }
            if let Err(e) = bar.set_attribute("aria-valuenow", &self.aria_value()) {
                log::warn!("[Goal] Could not set aria-valuenow: {:?}", e);
            }
        }
        set_text(document, ids::GOAL_PCT, &self.label());

        set_text(document, ids::KPI_EVENTS, &self.kpi_events);
        set_text(document, ids::KPI_VOLUNTEERS, &self.kpi_volunteers);
        set_text(document, ids::KPI_RAISED, &self.kpi_raised);
    }
}

pub async fn load(document: &Document, config: &SiteConfig) -> Result<Rendered, LoadError> {
    let site: SiteSummary = fetch_json(&config.site_data).await?;
    let view = GoalView::new(&site, config);
    view.apply(document);
    Ok(Rendered::Goal { percentage: view.percentage })
}
