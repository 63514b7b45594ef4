//! Gallery modal binding

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::models::{ClickTarget, GalleryItem, ModalEvent, ModalState};

use super::{dom, BindError};

/// Modal elements plus the current modal state
struct Modal {
    backdrop: HtmlElement,
    image: HtmlImageElement,
    caption: Element,
    state: RefCell<ModalState>,
}

impl Modal {
    fn lookup(document: &Document) -> Result<Self, BindError> {
        Ok(Self {
            backdrop: dom::by_id(document, "modal-backdrop")?,
            image: dom::by_id(document, "modal-image")?,
            caption: dom::by_id(document, "modal-caption")?,
            state: RefCell::new(ModalState::Closed),
        })
    }

    fn dispatch(&self, event: ModalEvent) {
        let next = self.state.take().apply(event);
        tracing::debug!(open = next.is_open(), "Gallery modal updated");
        if let Err(e) = self.render(&next) {
            tracing::warn!("Failed to update gallery modal: {}", e);
        }
        *self.state.borrow_mut() = next;
    }

    fn render(&self, state: &ModalState) -> Result<(), BindError> {
        if let ModalState::Open { image_src, caption } = state {
            self.image.set_src(image_src);
            self.image.set_alt(caption);
            self.caption.set_text_content(Some(caption));
        }
        self.backdrop.style().set_property("display", state.display())?;
        Ok(())
    }

    fn is_backdrop(&self, target: &JsValue) -> bool {
        let backdrop: &JsValue = self.backdrop.as_ref();
        target == backdrop
    }
}

/// Open the modal from gallery items; close it from the button or backdrop
pub fn bind(document: &Document) -> Result<(), BindError> {
    let modal = Rc::new(Modal::lookup(document)?);

    for item in dom::select_all(document, ".gallery-item")? {
        let modal = Rc::clone(&modal);
        let source = item.clone();
        dom::listen(&item, "click", move |_| {
            let parsed = GalleryItem::from_attributes(
                source.get_attribute("data-large"),
                source.get_attribute("data-caption"),
            );
            match parsed {
                Some(item) => modal.dispatch(ModalEvent::Activate(item)),
                None => tracing::warn!("Gallery item without data-large ignored"),
            }
        })?;
    }

    let close: Element = dom::by_id(document, "modal-close")?;
    let on_close = Rc::clone(&modal);
    dom::listen(&close, "click", move |_| {
        on_close.dispatch(ModalEvent::CloseButton)
    })?;

    let on_backdrop = Rc::clone(&modal);
    dom::listen(&modal.backdrop, "click", move |event| {
        let target = match event.target() {
            Some(target) if on_backdrop.is_backdrop(target.as_ref()) => ClickTarget::Backdrop,
            _ => ClickTarget::Content,
        };
        on_backdrop.dispatch(ModalEvent::Click(target));
    })
}
