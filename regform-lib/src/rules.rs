//! Validation rules for each field.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

use crate::field::FieldId;

/// Minimum age, in years, to register.
pub const MINIMUM_AGE: i32 = 18;

/// Format of the value produced by a date control.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Everything a predicate may depend on besides the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub today: NaiveDate,
}

/// Predicate over a normalized value.
pub type Predicate = fn(&str, &RuleContext) -> bool;

/// Declarative rule governing one field's acceptable values.
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub field: FieldId,
    pub required: bool,
    pub message: &'static str,
    predicate: Predicate,
}

impl ValidationRule {
    /// Check a normalized value against this rule.
    ///
    /// Empty values fail required rules and pass optional ones without
    /// consulting the predicate.
    pub fn check(&self, value: &str, cx: &RuleContext) -> bool {
        if value.is_empty() {
            return !self.required;
        }
        (self.predicate)(value, cx)
    }
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .field("required", &self.required)
            .field("message", &self.message)
            .finish()
    }
}

/// The rule for a field. Adding a field without a rule doesn't compile.
pub fn rule_for(field: FieldId) -> ValidationRule {
    match field {
        FieldId::Name => required(field, "Name is required.", non_empty),
        FieldId::Surname => required(field, "Surname is required.", non_empty),
        FieldId::NationalId => required(
            field,
            "National ID must have exactly 10 digits.",
            ten_digits,
        ),
        FieldId::BirthDate => required(
            field,
            "Date of birth is required and must be valid (18 or older).",
            adult_birth_date,
        ),
        FieldId::Country => required(field, "Select a country.", non_empty),
        FieldId::Gender => required(field, "Select a gender.", non_empty),
        FieldId::Phone => required(
            field,
            "Phone number must have exactly 10 digits.",
            ten_digits,
        ),
        FieldId::Email => required(field, "Email address is not valid.", email),
    }
}

fn required(field: FieldId, message: &'static str, predicate: Predicate) -> ValidationRule {
    ValidationRule {
        field,
        required: true,
        message,
        predicate,
    }
}

/// Immutable mapping from field to rule.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: [ValidationRule; FieldId::COUNT],
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: FieldId::ALL.map(rule_for),
        }
    }

    pub fn rule(&self, field: FieldId) -> &ValidationRule {
        &self.rules[field.index()]
    }

    /// Look up a rule by control ID. `None` means the control is not validated.
    pub fn lookup(&self, id: &str) -> Option<&ValidationRule> {
        FieldId::from_dom_id(id).map(|field| self.rule(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Predicates
// =============================================================================

fn non_empty(value: &str, _cx: &RuleContext) -> bool {
    !value.is_empty()
}

fn ten_digits(value: &str, _cx: &RuleContext) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

fn email(value: &str, _cx: &RuleContext) -> bool {
    EMAIL.is_match(value)
}

fn adult_birth_date(value: &str, cx: &RuleContext) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .is_ok_and(|birth| is_adult(birth, cx.today))
}

/// The latest birth date that still counts as adult on `today`.
///
/// Same month and day, `MINIMUM_AGE` years back. A day that doesn't exist in
/// the target year (29 February) overflows into the next month.
pub fn age_limit(today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(today.year() - MINIMUM_AGE, today.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(today.day0()))))
}

/// Born no later than `today` and no later than [`age_limit`].
pub fn is_adult(birth: NaiveDate, today: NaiveDate) -> bool {
    birth <= today && age_limit(today).is_some_and(|limit| birth <= limit)
}
