//! The fields of the registration form.

use std::fmt;

use serde::Serialize;

/// A field of the registration form.
///
/// The declaration order is the order fields are validated in and the order
/// they appear in the submission summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    Name,
    Surname,
    NationalId,
    BirthDate,
    Country,
    Gender,
    Phone,
    Email,
}

impl FieldId {
    /// Number of fields.
    pub const COUNT: usize = 8;

    /// Every field, in form order.
    pub const ALL: [FieldId; Self::COUNT] = [
        Self::Name,
        Self::Surname,
        Self::NationalId,
        Self::BirthDate,
        Self::Country,
        Self::Gender,
        Self::Phone,
        Self::Email,
    ];

    /// ID of the control bound to this field.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::NationalId => "national-id",
            Self::BirthDate => "birth-date",
            Self::Country => "country",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Resolve a control ID back to its field.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }

    /// Label used in the submission summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::NationalId => "National ID",
            Self::BirthDate => "Date",
            Self::Country => "Country",
            Self::Gender => "Gender",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }

    /// ID of the live-region element carrying this field's error.
    pub fn error_id(self) -> String {
        format!("{}-error", self.dom_id())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_id_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_dom_id(field.dom_id()), Some(field));
        }
        assert_eq!(FieldId::from_dom_id("nickname"), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, field) in FieldId::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
