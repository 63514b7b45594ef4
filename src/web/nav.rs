//! Navigation highlight binding

use web_sys::{Document, Window};

use crate::pages::nav::active_links;

use super::{dom, BindError};

/// Add the `active` class to nav links pointing at the current page
pub fn highlight(window: &Window, document: &Document) -> Result<(), BindError> {
    let path = window.location().pathname()?;

    let links = dom::select_all(document, "nav ul li a")?;
    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();

    for i in active_links(&path, hrefs.iter().map(String::as_str)) {
        links[i].class_list().add_1("active")?;
    }

    Ok(())
}
