//! Small DOM helpers shared by the views.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Keyboard modifier state of a DOM event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }

    pub fn from_keyboard(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        }
    }

    pub fn from_mouse(ev: &web_sys::MouseEvent) -> Self {
        Self {
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Activate and focus an element, as a keyboard user would
pub fn click_and_focus(id: &str) {
    match element_by_id(id) {
        Some(el) => {
            el.click();
            let _ = el.focus();
        }
        None => log::warn!("click_and_focus: element #{} not found", id),
    }
}

/// Currently focused element, if it sits inside an element matching `container_selector`
pub fn focused_within(container_selector: &str) -> Option<HtmlElement> {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())?;
    let inside = active.closest(container_selector).ok().flatten().is_some();
    if !inside {
        return None;
    }
    active.dyn_into::<HtmlElement>().ok()
}
