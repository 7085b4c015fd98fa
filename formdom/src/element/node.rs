use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{InputType, Tag};
use crate::text_input::char_len;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,

    // Content
    /// Current control value. For selects this is the value of the selected option.
    pub value: String,
    /// Text content (labels, error messages, option labels, button captions).
    pub text: String,
    pub children: Vec<Element>,

    // State
    /// Caret position in characters. Only meaningful for text inputs.
    pub cursor: usize,
    /// Disabled elements don't receive input.
    pub disabled: bool,
    /// Equivalent of `display: none`.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            value: String::new(),
            text: String::new(),
            children: Vec::new(),
            cursor: 0,
            disabled: false,
            hidden: false,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            tag: Tag::Form,
            ..Default::default()
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            tag: Tag::Label,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create an input control of the given type.
    pub fn input(kind: InputType) -> Self {
        Self {
            id: generate_id("input"),
            tag: Tag::Input(kind),
            ..Default::default()
        }
    }

    pub fn select() -> Self {
        Self {
            id: generate_id("select"),
            tag: Tag::Select,
            ..Default::default()
        }
    }

    /// Create an `<option>` whose value and label may differ.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: generate_id("option"),
            tag: Tag::Option,
            value: value.into(),
            text: label.into(),
            ..Default::default()
        }
    }

    pub fn button(caption: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            text: caption.into(),
            ..Default::default()
        }
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        if self.tag == Tag::Select && self.children.len() == 1 {
            self.value = self.children[0].value.clone();
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // Attributes

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    // Values

    /// Set the control value.
    ///
    /// Text inputs take the value verbatim and move the cursor to the end.
    /// Selects only accept values matching one of their options; anything
    /// else leaves the select with an empty value, like a browser does.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.tag {
            Tag::Select => {
                self.value = if self.options().any(|(v, _)| v == value) {
                    value
                } else {
                    String::new()
                };
            }
            _ => {
                self.cursor = char_len(&value);
                self.value = value;
            }
        }
    }

    /// Iterate over `(value, label)` pairs of a select's options.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.children
            .iter()
            .filter(|c| c.tag == Tag::Option)
            .map(|c| (c.value.as_str(), c.text.as_str()))
    }

    /// Replace a select's options, selecting the first one.
    pub fn replace_options(&mut self, options: Vec<Element>) {
        self.value = options
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default();
        self.children = options;
    }

    /// Restore the control to its initial value.
    pub fn reset_value(&mut self) {
        match self.tag {
            Tag::Select => {
                let first = self
                    .options()
                    .next()
                    .map(|(v, _)| v.to_string())
                    .unwrap_or_default();
                self.value = first;
            }
            Tag::Input(_) => {
                self.value.clear();
                self.cursor = 0;
            }
            _ => {}
        }
    }
}
