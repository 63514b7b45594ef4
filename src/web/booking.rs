//! Booking form binding

use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};

use crate::models::{Catalog, FormState};
use crate::pages::booking::{booking_view, BookingView};

use super::{dom, BindError};

/// Handles to every booking form control the page reads or writes
struct BookingFields {
    name: HtmlInputElement,
    email: HtmlInputElement,
    start_date: HtmlInputElement,
    end_date: HtmlInputElement,
    package: HtmlSelectElement,
    guests: HtmlInputElement,
    promo: HtmlInputElement,
    total: Element,
    submit: HtmlButtonElement,
}

impl BookingFields {
    fn lookup(document: &Document) -> Result<Self, BindError> {
        Ok(Self {
            name: dom::by_id(document, "name")?,
            email: dom::by_id(document, "email")?,
            start_date: dom::by_id(document, "start-date")?,
            end_date: dom::by_id(document, "end-date")?,
            package: dom::by_id(document, "package")?,
            guests: dom::by_id(document, "guests")?,
            promo: dom::by_id(document, "promo")?,
            total: dom::by_id(document, "estimated-total")?,
            submit: dom::by_id(document, "submit-btn")?,
        })
    }

    fn read(&self) -> FormState {
        FormState {
            name: self.name.value(),
            email: self.email.value(),
            start_date: self.start_date.value(),
            end_date: self.end_date.value(),
            package_id: self.package.value(),
            guests: self.guests.value(),
            promo_code: self.promo.value(),
        }
    }

    fn write(&self, view: &BookingView) {
        self.total.set_text_content(Some(&view.total_text));
        self.submit.set_disabled(view.submit_disabled);
    }

    fn refresh(&self, catalog: &Catalog) {
        self.write(&booking_view(catalog, &self.read()));
    }
}

/// Recompute the estimate on every input and once on load
pub fn bind(document: &Document) -> Result<(), BindError> {
    let form = document
        .query_selector(".booking-form")?
        .ok_or_else(|| BindError::MissingElement(".booking-form".to_string()))?;

    let fields = BookingFields::lookup(document)?;
    let catalog = Catalog::default();

    fields.refresh(&catalog);

    dom::listen(&form, "input", move |_| fields.refresh(&catalog))
}
