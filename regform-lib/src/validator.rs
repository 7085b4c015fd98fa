//! Field validation: pure evaluation plus document presentation.
//!
//! [`FieldValidator::evaluate`] answers "is this value acceptable" without
//! touching the document. [`FieldValidator::present`] and
//! [`FieldValidator::clear`] only mutate presentation. [`FieldValidator::validate`]
//! composes the two so every validation call keeps the document in sync.

use std::collections::HashMap;
use std::sync::Arc;

use formdom::{Document, Element};
use log::{debug, warn};

use crate::clock::Clock;
use crate::field::FieldId;
use crate::normalize::normalize;
use crate::rules::{RuleContext, RuleRegistry};

/// Class set on a control that passed validation.
pub const VALID_CLASS: &str = "valid";
/// Class set on a control that failed validation.
pub const INVALID_CLASS: &str = "invalid";

const ARIA_INVALID: &str = "aria-invalid";
const ARIA_DESCRIBEDBY: &str = "aria-describedby";

/// Outcome of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Failed, with the rule's message.
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Error message to display; empty when valid.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::Invalid(message) => message,
        }
    }
}

/// Checks fields against the rule registry and reflects the result in the document.
pub struct FieldValidator {
    registry: RuleRegistry,
    clock: Arc<dyn Clock>,
    /// Error element ID per field, filled by [`FieldValidator::attach_error_element`].
    error_elements: HashMap<FieldId, String>,
}

impl FieldValidator {
    pub fn new(registry: RuleRegistry, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            error_elements: HashMap::new(),
        }
    }

    pub fn context(&self) -> RuleContext {
        RuleContext {
            today: self.clock.today(),
        }
    }

    /// Check a raw value for `field`.
    pub fn evaluate(&self, field: FieldId, raw: &str) -> Verdict {
        let rule = self.registry.rule(field);
        let value = normalize(field, raw);
        if rule.check(&value, &self.context()) {
            Verdict::Valid
        } else {
            Verdict::Invalid(rule.message)
        }
    }

    /// Check the live value of the control `id`.
    ///
    /// Controls without a rule, and rules without a control, are valid.
    pub fn evaluate_control(&self, document: &Document, id: &str) -> Verdict {
        let Some(rule) = self.registry.lookup(id) else {
            return Verdict::Valid;
        };
        match document.value(id) {
            Some(raw) => self.evaluate(rule.field, raw),
            None => {
                warn!(
                    "No control #{id} for field {}, treating as valid",
                    rule.field
                );
                Verdict::Valid
            }
        }
    }

    /// Validate the control `id` and update its presentation.
    pub fn validate(&self, document: &mut Document, id: &str) -> bool {
        let verdict = self.evaluate_control(document, id);
        if let Some(field) = FieldId::from_dom_id(id) {
            self.present(document, field, verdict);
        }
        verdict.is_valid()
    }

    /// Make sure `field` has a live-region error element right after it.
    ///
    /// An existing element with the field's error ID is reused.
    pub fn attach_error_element(&mut self, document: &mut Document, field: FieldId, class: &str) {
        let error_id = field.error_id();

        match document.get_mut(&error_id) {
            Some(existing) => {
                existing.add_class(class);
                existing.set_attribute("role", "alert");
                existing.set_attribute("aria-live", "polite");
            }
            None => {
                let element = Element::div()
                    .id(error_id.clone())
                    .class(class)
                    .attr("role", "alert")
                    .attr("aria-live", "polite")
                    .hidden(true);
                if !document.insert_after(field.dom_id(), element) {
                    warn!("Could not place error element for {field}");
                    return;
                }
            }
        }

        debug!("Attached error element #{error_id}");
        self.error_elements.insert(field, error_id);
    }

    pub fn error_element(&self, field: FieldId) -> Option<&str> {
        self.error_elements.get(&field).map(String::as_str)
    }

    /// Reflect `verdict` on the control and its error element.
    pub fn present(&self, document: &mut Document, field: FieldId, verdict: Verdict) {
        let error_id = self.error_elements.get(&field);

        if let Some(error) = error_id.and_then(|id| document.get_mut(id)) {
            error.text = verdict.message().to_string();
            error.hidden = verdict.is_valid();
        }

        let Some(control) = document.get_mut(field.dom_id()) else {
            return;
        };
        match verdict {
            Verdict::Valid => {
                control.add_class(VALID_CLASS);
                control.remove_class(INVALID_CLASS);
                control.set_attribute(ARIA_INVALID, "false");
                control.remove_attribute(ARIA_DESCRIBEDBY);
            }
            Verdict::Invalid(_) => {
                control.add_class(INVALID_CLASS);
                control.remove_class(VALID_CLASS);
                control.set_attribute(ARIA_INVALID, "true");
                if let Some(error_id) = error_id {
                    control.set_attribute(ARIA_DESCRIBEDBY, error_id.clone());
                }
            }
        }
    }

    /// Drop any validity presentation from `field`, leaving its value alone.
    pub fn clear(&self, document: &mut Document, field: FieldId) {
        if let Some(error) = self
            .error_elements
            .get(&field)
            .and_then(|id| document.get_mut(id))
        {
            error.text.clear();
            error.hidden = true;
        }

        if let Some(control) = document.get_mut(field.dom_id()) {
            control.remove_class(VALID_CLASS);
            control.remove_class(INVALID_CLASS);
            control.remove_attribute(ARIA_INVALID);
            control.remove_attribute(ARIA_DESCRIBEDBY);
        }
    }
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("error_elements", &self.error_elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use formdom::InputType;

    use super::*;
    use crate::clock::FixedClock;

    fn validator() -> FieldValidator {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        FieldValidator::new(RuleRegistry::new(), Arc::new(FixedClock(today)))
    }

    fn document() -> Document {
        Document::new(
            Element::form().id("form").children([
                Element::input(InputType::Email).id("email").class("field"),
                Element::input(InputType::Text).id("nickname").class("field"),
            ]),
        )
    }

    #[test]
    fn test_evaluate_is_pure() {
        let validator = validator();
        let verdict = validator.evaluate(FieldId::Email, " a@b.co ");
        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(
            validator.evaluate(FieldId::Email, "a@b"),
            Verdict::Invalid("Email address is not valid.")
        );
    }

    #[test]
    fn test_unregistered_and_missing_controls_are_valid() {
        let validator = validator();
        let mut doc = document();
        assert!(validator.validate(&mut doc, "nickname"));
        assert!(validator.validate(&mut doc, "phone"));
        assert!(doc.get("nickname").unwrap().classes == vec!["field"]);
    }

    #[test]
    fn test_invalid_presentation_links_error_element() {
        let mut validator = validator();
        let mut doc = document();
        validator.attach_error_element(&mut doc, FieldId::Email, "error");

        doc.set_value("email", "nope");
        assert!(!validator.validate(&mut doc, "email"));

        let control = doc.get("email").unwrap();
        assert!(control.has_class(INVALID_CLASS));
        assert_eq!(control.attribute("aria-invalid"), Some("true"));
        assert_eq!(control.attribute("aria-describedby"), Some("email-error"));

        let error = doc.get("email-error").unwrap();
        assert_eq!(error.text, "Email address is not valid.");
        assert!(!error.hidden);
        assert_eq!(error.attribute("role"), Some("alert"));
    }

    #[test]
    fn test_valid_presentation_clears_error() {
        let mut validator = validator();
        let mut doc = document();
        validator.attach_error_element(&mut doc, FieldId::Email, "error");

        doc.set_value("email", "nope");
        validator.validate(&mut doc, "email");
        doc.set_value("email", "a@b.co");
        assert!(validator.validate(&mut doc, "email"));

        let control = doc.get("email").unwrap();
        assert!(control.has_class(VALID_CLASS));
        assert!(!control.has_class(INVALID_CLASS));
        assert_eq!(control.attribute("aria-invalid"), Some("false"));
        assert_eq!(control.attribute("aria-describedby"), None);
        assert!(doc.get("email-error").unwrap().text.is_empty());
    }

    #[test]
    fn test_clear_is_neutral() {
        let mut validator = validator();
        let mut doc = document();
        validator.attach_error_element(&mut doc, FieldId::Email, "error");
        doc.set_value("email", "nope");
        validator.validate(&mut doc, "email");

        validator.clear(&mut doc, FieldId::Email);
        let control = doc.get("email").unwrap();
        assert_eq!(control.value, "nope");
        assert!(!control.has_class(VALID_CLASS));
        assert!(!control.has_class(INVALID_CLASS));
        assert_eq!(control.attribute("aria-invalid"), None);
        assert!(doc.get("email-error").unwrap().hidden);
    }

    #[test]
    fn test_existing_error_element_is_reused() {
        let mut validator = validator();
        let mut doc = Document::new(
            Element::form().id("form").children([
                Element::input(InputType::Email).id("email").class("field"),
                Element::div().id("email-error"),
            ]),
        );
        validator.attach_error_element(&mut doc, FieldId::Email, "error");
        assert_eq!(doc.get("form").unwrap().children.len(), 2);
        assert!(doc.get("email-error").unwrap().has_class("error"));
    }
}
