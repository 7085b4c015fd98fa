use formdom::{Document, Element, InputType, Tag};

fn sample() -> Document {
    Document::new(
        Element::form().id("form").children([
            Element::input(InputType::Text).id("name").class("field"),
            Element::select()
                .id("color")
                .class("field")
                .child(Element::option("", "Pick one"))
                .child(Element::option("red", "Red"))
                .child(Element::option("blue", "Blue")),
            Element::div()
                .id("wrapper")
                .child(Element::input(InputType::Date).id("day").class("field")),
            Element::button("Send").id("send").class("button"),
        ]),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_by_id() {
    let doc = sample();
    assert_eq!(
        doc.get("name").map(|e| e.tag),
        Some(Tag::Input(InputType::Text))
    );
    assert_eq!(
        doc.get("day").map(|e| e.tag),
        Some(Tag::Input(InputType::Date))
    );
    assert!(doc.get("missing").is_none());
}

#[test]
fn test_ids_by_class_in_document_order() {
    let doc = sample();
    assert_eq!(doc.ids_by_class("field"), vec!["name", "color", "day"]);
    assert_eq!(doc.ids_by_class_within("wrapper", "field"), vec!["day"]);
    assert!(doc.ids_by_class_within("nowhere", "field").is_empty());
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_set_value_moves_cursor_to_end() {
    let mut doc = sample();
    assert!(doc.set_value("name", "Ana"));
    assert_eq!(doc.value("name"), Some("Ana"));
    assert_eq!(doc.cursor("name"), Some(3));

    doc.set_cursor("name", 99);
    assert_eq!(doc.cursor("name"), Some(3));
}

#[test]
fn test_select_rejects_unknown_value() {
    let mut doc = sample();
    assert_eq!(doc.value("color"), Some(""));

    doc.set_value("color", "red");
    assert_eq!(doc.value("color"), Some("red"));

    doc.set_value("color", "green");
    assert_eq!(doc.value("color"), Some(""));
}

#[test]
fn test_replace_options_selects_first() {
    let mut doc = sample();
    doc.set_value("color", "blue");
    doc.replace_options("color", vec![Element::option("", "Loading...")]);

    let select = doc.get("color").unwrap();
    assert_eq!(select.value, "");
    assert_eq!(
        select.options().collect::<Vec<_>>(),
        vec![("", "Loading...")]
    );
}

#[test]
fn test_reset_form_clears_controls() {
    let mut doc = sample();
    doc.set_value("name", "Ana");
    doc.set_value("color", "red");
    doc.set_value("day", "2000-01-01");

    assert!(doc.reset_form("form"));
    assert_eq!(doc.value("name"), Some(""));
    assert_eq!(doc.cursor("name"), Some(0));
    assert_eq!(doc.value("color"), Some(""));
    assert_eq!(doc.value("day"), Some(""));
    // Non-controls keep their content
    assert_eq!(doc.get("send").unwrap().text, "Send");
}

#[test]
fn test_reset_form_selects_first_replaced_option() {
    let mut doc = sample();
    doc.replace_options(
        "color",
        vec![
            Element::option("", "Choose a color"),
            Element::option("green", "Green"),
        ],
    );
    doc.set_value("color", "green");
    assert_eq!(doc.value("color"), Some("green"));

    assert!(doc.reset_form("form"));
    assert_eq!(doc.value("color"), Some(""));
    assert_eq!(doc.get("color").unwrap().options().count(), 2);
}

#[test]
fn test_reset_select_without_leading_placeholder() {
    let mut select = Element::select()
        .child(Element::option("red", "Red"))
        .child(Element::option("blue", "Blue"));
    select.set_value("blue");

    select.reset_value();
    assert_eq!(select.value, "red");
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_insert_after_nested_sibling() {
    let mut doc = sample();
    assert!(doc.insert_after("day", Element::div().id("day-error")));

    let wrapper = doc.get("wrapper").unwrap();
    let ids: Vec<_> = wrapper.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["day", "day-error"]);

    assert!(!doc.insert_after("missing", Element::div()));
}

#[test]
fn test_classes_and_attributes() {
    let mut doc = sample();
    let name = doc.get_mut("name").unwrap();
    name.add_class("invalid");
    name.add_class("invalid");
    name.set_attribute("aria-invalid", "true");
    assert_eq!(name.classes, vec!["field", "invalid"]);

    name.remove_class("invalid");
    name.remove_attribute("aria-invalid");
    assert!(!name.has_class("invalid"));
    assert_eq!(name.attribute("aria-invalid"), None);
}

#[test]
fn test_dialogs_queue() {
    let mut doc = sample();
    doc.alert("first");
    doc.alert("second");
    assert_eq!(doc.dialogs(), ["first", "second"]);
    assert_eq!(doc.take_dialogs().len(), 2);
    assert!(doc.dialogs().is_empty());
}
