//! The document: an owned element tree plus window-level side channels.

use log::debug;

use crate::element::{collect_by_class, find_element, find_element_mut, insert_after, walk_mut};
use crate::text_input::clamp_cursor;
use crate::Element;

/// An in-memory document.
///
/// Holds the element tree and the dialogs raised against it. A front end
/// renders the tree and forwards user input as [`crate::Event`]s.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    dialogs: Vec<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            dialogs: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// IDs of every element with `class`, in document order.
    pub fn ids_by_class(&self, class: &str) -> Vec<String> {
        let mut out = Vec::new();
        collect_by_class(&self.root, class, &mut out);
        out
    }

    /// IDs of elements with `class` inside the element `container_id`.
    pub fn ids_by_class_within(&self, container_id: &str, class: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(container) = self.get(container_id) {
            collect_by_class(container, class, &mut out);
        }
        out
    }

    /// Current value of a control.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(|el| el.value.as_str())
    }

    /// Set a control's value. Returns `false` if there is no such element.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn cursor(&self, id: &str) -> Option<usize> {
        self.get(id).map(|el| el.cursor)
    }

    /// Move the caret of a text input, clamped to its value.
    pub fn set_cursor(&mut self, id: &str, cursor: usize) {
        if let Some(el) = self.get_mut(id) {
            el.cursor = clamp_cursor(&el.value, cursor);
        }
    }

    /// Insert `element` right after `sibling_id`.
    ///
    /// Returns `false` when the sibling doesn't exist.
    pub fn insert_after(&mut self, sibling_id: &str, element: Element) -> bool {
        match insert_after(&mut self.root, sibling_id, element) {
            Ok(()) => true,
            Err(element) => {
                debug!("insert_after: no sibling {sibling_id} for {}", element.id);
                false
            }
        }
    }

    /// Replace a select's options and select the first one.
    pub fn replace_options(&mut self, select_id: &str, options: Vec<Element>) -> bool {
        match self.get_mut(select_id) {
            Some(el) => {
                el.replace_options(options);
                true
            }
            None => false,
        }
    }

    /// Restore every control inside `form_id` to its initial value.
    pub fn reset_form(&mut self, form_id: &str) -> bool {
        match self.get_mut(form_id) {
            Some(form) => {
                walk_mut(form, &mut Element::reset_value);
                true
            }
            None => false,
        }
    }

    /// Raise a blocking message dialog.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("alert: {message}");
        self.dialogs.push(message);
    }

    /// Dialogs raised so far, oldest first.
    pub fn dialogs(&self) -> &[String] {
        &self.dialogs
    }

    /// Drain the dialog queue, as a front end does after showing them.
    pub fn take_dialogs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.dialogs)
    }
}
