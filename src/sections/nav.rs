//! Active navigation link

use web_sys::Document;

use crate::page::NavPage;

pub const ACTIVE_CLASS: &str = "active";

/// Mark the nav link of the current page. Unknown pages and missing links are ignored.
pub fn highlight(document: &Document, pathname: &str) -> Option<NavPage> {
    let page = NavPage::from_pathname(pathname)?;
    let link = document.get_element_by_id(page.element_id())?;
    if let Err(e) = link.class_list().add_1(ACTIVE_CLASS) {
        log::warn!("[Nav] Could not mark {} active: {:?}", page.element_id(), e);
        return None;
    }
    Some(page)
}
