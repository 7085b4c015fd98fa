//! Data collected from a successful submission.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldId;

/// Heading of the success dialog.
pub const SUCCESS_HEADING: &str = "Registration successful";

/// Normalized values of every field, keyed in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<FieldId, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text of the confirmation dialog: a heading, then one labeled line per field.
    pub fn summary(&self) -> String {
        let mut out = format!("{SUCCESS_HEADING}\n");
        for field in FieldId::ALL {
            out.push('\n');
            out.push_str(field.label());
            out.push_str(": ");
            out.push_str(self.get(field).unwrap_or_default());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_has_fixed_order() {
        let mut data = FormData::new();
        // Inserted out of order on purpose
        data.insert(FieldId::Email, "ana@example.com");
        data.insert(FieldId::Name, "Ana");
        data.insert(FieldId::Surname, "Pérez");
        data.insert(FieldId::NationalId, "1234567890");
        data.insert(FieldId::BirthDate, "1990-05-01");
        data.insert(FieldId::Country, "Ecuador");
        data.insert(FieldId::Gender, "female");
        data.insert(FieldId::Phone, "0991234567");

        assert_eq!(
            data.summary(),
            "Registration successful\n\n\
             Name: Ana\n\
             Surname: Pérez\n\
             National ID: 1234567890\n\
             Date: 1990-05-01\n\
             Country: Ecuador\n\
             Gender: female\n\
             Phone: 0991234567\n\
             Email: ana@example.com"
        );
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut data = FormData::new();
        data.insert(FieldId::NationalId, "1234567890");
        data.insert(FieldId::Name, "Ana");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"name":"Ana","national-id":"1234567890"}"#);
    }
}
