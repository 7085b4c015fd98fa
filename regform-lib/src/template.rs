//! The registration form document.

use formdom::{Document, Element, InputType};

use crate::config::FormConfig;
use crate::field::FieldId;

/// Caption of the submit control.
pub const SUBMIT_LABEL: &str = "Register";

/// `(value, label)` pairs of the gender selection, placeholder first.
pub const GENDER_OPTIONS: [(&str, &str); 4] = [
    ("", "Select a gender"),
    ("female", "Female"),
    ("male", "Male"),
    ("other", "Other"),
];

/// Build the registration form: one labeled control per field and a submit
/// button, all inside the configured form container.
pub fn registration_form(config: &FormConfig) -> Document {
    let mut form = Element::form().id(config.form_id.clone());

    for field in FieldId::ALL {
        form = form
            .child(Element::label(field.label()).attr("for", field.dom_id()))
            .child(control(field).id(field.dom_id()).class(config.field_class.clone()));
    }

    form = form.child(
        Element::button(SUBMIT_LABEL)
            .id("submit")
            .class(config.button_class.clone())
            .attr("type", "submit"),
    );

    Document::new(Element::div().id("page").child(form))
}

fn control(field: FieldId) -> Element {
    match field {
        FieldId::Name | FieldId::Surname => Element::input(InputType::Text),
        FieldId::NationalId => Element::input(InputType::Text).attr("inputmode", "numeric"),
        FieldId::BirthDate => Element::input(InputType::Date),
        FieldId::Country => Element::select().child(Element::option("", "Select a country")),
        FieldId::Gender => Element::select().children(
            GENDER_OPTIONS
                .iter()
                .map(|(value, label)| Element::option(*value, *label)),
        ),
        FieldId::Phone => Element::input(InputType::Tel),
        FieldId::Email => Element::input(InputType::Email),
    }
}
