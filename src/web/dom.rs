//! Small DOM helpers shared by the page bindings

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget};

use super::BindError;

/// Fetch an element by id and cast it to the expected type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType(id.to_string()))
}

/// Every element matching a CSS selector, in document order
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let nodes = document.query_selector_all(selector)?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    Ok(elements)
}

/// Attach an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // The page never unbinds, so the closure must outlive this scope.
    closure.forget();
    Ok(())
}
