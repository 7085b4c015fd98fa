//! Raw control value → canonical value passed to a rule.

use formdom::char_len;

use crate::field::FieldId;

/// Digits in a national ID.
pub const NATIONAL_ID_DIGITS: usize = 10;

/// Separator inserted before the check digit of a national ID.
pub const NATIONAL_ID_SEPARATOR: char = '-';

/// Canonical value of a field.
///
/// Identifier-like fields keep only their digits, free text is trimmed, and
/// date and selection values pass through untouched since their native
/// controls already constrain the format.
pub fn normalize(field: FieldId, raw: &str) -> String {
    match field {
        FieldId::NationalId | FieldId::Phone => digits_only(raw),
        FieldId::Name | FieldId::Surname | FieldId::Email => raw.trim().to_string(),
        FieldId::BirthDate | FieldId::Country | FieldId::Gender => raw.to_string(),
    }
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A rewritten text input value together with where its caret goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedInput {
    pub value: String,
    pub cursor: usize,
}

/// Rewrite a national ID as the user types.
///
/// Non-digits are dropped and the value is capped at ten digits. Once all ten
/// are present the separator goes in after the ninth (`#########-#`). The
/// caret lands right after the digit that preceded it in `raw`, stepping over
/// the separator when needed.
pub fn format_national_id(raw: &str, cursor: usize) -> FormattedInput {
    let mut digits = digits_only(raw);
    digits.truncate(NATIONAL_ID_DIGITS);

    let separated = digits.len() == NATIONAL_ID_DIGITS;
    let value = if separated {
        let (body, check) = digits.split_at(NATIONAL_ID_DIGITS - 1);
        format!("{body}{NATIONAL_ID_SEPARATOR}{check}")
    } else {
        digits.clone()
    };

    let digits_before = raw
        .chars()
        .take(cursor)
        .filter(char::is_ascii_digit)
        .count()
        .min(digits.len());
    let mut cursor = digits_before;
    if separated && digits_before >= NATIONAL_ID_DIGITS {
        cursor += 1;
    }

    FormattedInput {
        cursor: cursor.min(char_len(&value)),
        value,
    }
}
