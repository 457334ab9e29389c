//! Site Boot
//!
//! Runs once per page load: cosmetic tweaks first, then one independent
//! fetch-and-render task per data section the page declares.

use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::page::PageSections;
use crate::sections::{footer, nav, Rendered, Section};

/// Entry point once the DOM is parsed
pub fn boot() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let (config, config_problem) = SiteConfig::from_document(&document);
    if console_logger::init(config.log_level()).is_err() {
        web_sys::console::warn_1(&"[Boot] Logger already installed".into());
    }
    if let Some(problem) = config_problem {
        log::warn!("[Boot] {}", problem);
    }

    let pathname = window.location().pathname().unwrap_or_default();
    let page = PageSections::from_document(&document);
    log::debug!("[Boot] {} with sections {:?}", pathname, page);

    start(document, &pathname, page, config);
}

/// Highlight nav, stamp the year, then spawn the section tasks
pub fn start(document: Document, pathname: &str, page: PageSections, config: SiteConfig) {
    match nav::highlight(&document, pathname) {
        Some(active) => log::debug!("[Nav] Active: {:?}", active),
        None => log::debug!("[Nav] No nav entry for {}", pathname),
    }
    footer::stamp_year(&document, footer::current_year());

    let config = Rc::new(config);
    for section in page.enabled() {
        let document = document.clone();
        let config = Rc::clone(&config);
        spawn_local(async move {
            let outcome = section.load(&document, &config).await;
            report(section, &config, &outcome);
        });
    }
}

/// Log a section outcome. Failures stop here; the section stays unrendered.
pub fn report(section: Section, config: &SiteConfig, outcome: &Result<Rendered, LoadError>) {
    match outcome {
        Ok(rendered) => log::info!("{} Rendered {}", section.tag(), rendered),
        Err(e) => log::error!("{} Missing or invalid {}: {}", section.tag(), section.data_path(config), e),
    }
}
