use crate::constants::{HIDDEN_CLASS, HINT_ELEMENT_ID};
use web_sys as web;

/// Update the hint overlay with the current settings line
pub fn update_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ELEMENT_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_ELEMENT_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ELEMENT_ID) {
        let cl = el.class_list();
        if is_hint_hidden(document) {
            _ = cl.remove_1(HIDDEN_CLASS);
        } else {
            _ = cl.add_1(HIDDEN_CLASS);
        }
    }
}
