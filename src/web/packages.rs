//! Package table binding

use web_sys::{Document, Element};

use crate::models::Catalog;
use crate::pages::packages::render_rows;

use super::{dom, BindError};

const TABLE_BODY: &str = "packages-tbody";

/// Replace the package table body with freshly computed rows
pub fn render(document: &Document) -> Result<(), BindError> {
    let body: Element = dom::by_id(document, TABLE_BODY)?;
    body.set_text_content(None);

    for row in render_rows(&Catalog::default()) {
        let tr = document.create_element("tr")?;
        for cell in row.cells() {
            let td = document.create_element("td")?;
            td.set_text_content(Some(cell));
            tr.append_child(&td)?;
        }
        body.append_child(&tr)?;
    }

    Ok(())
}
