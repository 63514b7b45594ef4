//! Active navigation link detection

/// Whether a nav link pointing at `href` is the current page.
///
/// The current path must contain the link target. Empty and `#` links never
/// match, a leading `./` is ignored, a directory path (`/`, `/trips/`) stands
/// for its `index.html`, and `/` only matches the site root.
pub fn is_active(current_path: &str, href: &str) -> bool {
    let href = href.trim();
    let href = href.strip_prefix("./").unwrap_or(href);
    if href.is_empty() || href.starts_with('#') {
        return false;
    }

    let path = if current_path.is_empty() || current_path.ends_with('/') {
        format!("{}index.html", if current_path.is_empty() { "/" } else { current_path })
    } else {
        current_path.to_string()
    };

    if href == "/" {
        return path == "/index.html";
    }

    path.contains(href)
}

/// Indexes of the links to mark active, in the order given
pub fn active_links<'a, I>(current_path: &str, hrefs: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_active(current_path, href))
        .map(|(i, _)| i)
        .collect()
}
