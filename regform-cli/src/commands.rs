//! Line commands and how they map onto form events.
//!
//! Commands return the text to print so the driver stays a thin loop.

use std::fmt::Write;

use formdom::Event;
use regform_lib::{EventOutcome, FieldId, FormCoordinator, SubmitOutcome};

/// How many country names `countries` prints.
const COUNTRY_PREVIEW: usize = 10;

pub const HELP: &str = "\
Commands:
  set <field> <value>   type a value (selects and dates fire change)
  focus <field>         focus a field, clearing its error
  blur <field>          leave a field, validating it
  submit                submit the form
  show                  print every field and the submit state
  countries             print the loaded countries
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FieldId, value: String },
    Focus(FieldId),
    Blur(FieldId),
    Submit,
    Show,
    Countries,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

        match verb {
            "set" => {
                let (id, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Self::Set {
                    field: field(id)?,
                    value: value.to_string(),
                })
            }
            "focus" => Ok(Self::Focus(field(rest.trim())?)),
            "blur" => Ok(Self::Blur(field(rest.trim())?)),
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "countries" => Ok(Self::Countries),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(String::new()),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

fn field(id: &str) -> Result<FieldId, String> {
    FieldId::from_dom_id(id).ok_or_else(|| {
        let known: Vec<_> = FieldId::ALL.iter().map(|f| f.dom_id()).collect();
        let known = known.join(", ");
        format!("unknown field `{id}`, expected one of: {known}")
    })
}

/// Run `command` against the form and describe what happened.
pub fn execute(form: &mut FormCoordinator, command: Command) -> String {
    match command {
        Command::Set { field, value } => {
            form.document_mut().set_value(field.dom_id(), value);
            let event = edit_event(form, field);
            let outcome = form.handle_event(&event);
            report(form, outcome, field)
        }
        Command::Focus(field) => {
            let outcome = form.handle_event(&Event::focus(field.dom_id()));
            report(form, outcome, field)
        }
        Command::Blur(field) => {
            let outcome = form.handle_event(&Event::blur(field.dom_id()));
            report(form, outcome, field)
        }
        Command::Submit => submit(form),
        Command::Show => show(form),
        Command::Countries => countries(form),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

/// The event a browser fires when the user edits `field`.
///
/// Native pickers commit with `change`, free text fires `input` per keystroke.
fn edit_event(form: &FormCoordinator, field: FieldId) -> Event {
    let id = field.dom_id();
    let constrained = form
        .document()
        .get(id)
        .is_some_and(|el| el.tag.is_constrained());
    if constrained {
        Event::change(id)
    } else {
        Event::input(id)
    }
}

fn report(form: &FormCoordinator, outcome: EventOutcome, field: FieldId) -> String {
    let value = form.document().value(field.dom_id()).unwrap_or_default();
    let mut out = match outcome {
        EventOutcome::Validated { valid: true, .. } => format!("  {field} = {value:?} ok"),
        EventOutcome::Validated { valid: false, .. } => {
            format!("  {field} = {value:?} {}", error_text(form, field))
        }
        EventOutcome::Cleared { .. } => format!("  {field} = {value:?}"),
        other => format!("  {other:?}"),
    };
    out.push('\n');
    out.push_str(submit_state(form));
    out
}

fn submit(form: &mut FormCoordinator) -> String {
    let form_id = form.config().form_id.clone();
    let mut out = String::new();

    match form.handle_event(&Event::submit(form_id)) {
        EventOutcome::Submitted(SubmitOutcome::Accepted(_)) => {}
        EventOutcome::Submitted(SubmitOutcome::Rejected(fields)) => {
            for field in fields {
                let _ = writeln!(out, "  {field}: {}", error_text(form, field));
            }
        }
        other => {
            let _ = writeln!(out, "  {other:?}");
        }
    }
    for dialog in form.document_mut().take_dialogs() {
        let _ = writeln!(out, "----\n{dialog}\n----");
    }
    out.push_str(submit_state(form));
    out
}

fn error_text(form: &FormCoordinator, field: FieldId) -> String {
    form.validator()
        .error_element(field)
        .and_then(|id| form.document().get(id))
        .map(|el| el.text.clone())
        .unwrap_or_default()
}

fn submit_state(form: &FormCoordinator) -> &'static str {
    if form.is_ready() {
        "  submit enabled"
    } else {
        "  submit disabled"
    }
}

fn show(form: &FormCoordinator) -> String {
    let doc = form.document();
    let mut out = String::new();
    for field in FieldId::ALL {
        let Some(control) = doc.get(field.dom_id()) else {
            let _ = writeln!(out, "  {}: <missing>", field.label());
            continue;
        };
        let disabled = if control.disabled { " (disabled)" } else { "" };
        let _ = write!(out, "  {}: {:?}{disabled}", field.label(), control.value);
        let error = error_text(form, field);
        if !error.is_empty() {
            let _ = write!(out, " - {error}");
        }
        out.push('\n');
    }
    out.push_str(submit_state(form));
    out
}

/// Summary of the country control's options.
pub fn countries(form: &FormCoordinator) -> String {
    let Some(select) = form.document().get(FieldId::Country.dom_id()) else {
        return "countries: <missing>".to_string();
    };
    let names: Vec<_> = select
        .options()
        .map(|(value, _)| value)
        .filter(|value| !value.is_empty())
        .collect();
    if names.is_empty() {
        let label = select.options().next().map(|(_, l)| l).unwrap_or_default();
        return format!("countries: {label}");
    }
    let preview: Vec<_> = names.iter().take(COUNTRY_PREVIEW).copied().collect();
    format!(
        "countries: {} loaded ({}, ...)",
        names.len(),
        preview.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use regform_lib::clock::FixedClock;
    use regform_lib::template::registration_form;
    use regform_lib::{FormConfig, OptionList};

    use super::*;

    fn form() -> FormCoordinator {
        let config = FormConfig::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut form = FormCoordinator::attach_with_clock(
            registration_form(&config),
            config,
            Arc::new(FixedClock(today)),
        )
        .unwrap();
        form.begin_option_load();
        form.finish_option_load(Ok(OptionList::sorted(vec![
            "Peru".to_string(),
            "Ecuador".to_string(),
        ])));
        form
    }

    fn set(form: &mut FormCoordinator, field: FieldId, value: &str) -> String {
        let command = Command::Set {
            field,
            value: value.to_string(),
        };
        execute(form, command)
    }

    fn fill_valid(form: &mut FormCoordinator) {
        set(form, FieldId::Name, "Ana");
        set(form, FieldId::Surname, "Pérez");
        set(form, FieldId::NationalId, "1234567890");
        set(form, FieldId::BirthDate, "1990-05-01");
        set(form, FieldId::Country, "Ecuador");
        set(form, FieldId::Gender, "female");
        set(form, FieldId::Phone, "0991234567");
        set(form, FieldId::Email, "ana@example.com");
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set name Ana María"),
            Ok(Command::Set {
                field: FieldId::Name,
                value: "Ana María".to_string()
            })
        );
    }

    #[test]
    fn test_parse_set_without_value() {
        assert_eq!(
            Command::parse("set email"),
            Ok(Command::Set {
                field: FieldId::Email,
                value: String::new()
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("  submit "), Ok(Command::Submit));
        assert_eq!(
            Command::parse("focus phone"),
            Ok(Command::Focus(FieldId::Phone))
        );
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        let err = Command::parse("set nickname Bob").unwrap_err();
        assert!(err.contains("national-id"));
        let err = Command::parse("dance").unwrap_err();
        assert!(err.starts_with("unknown command"));
    }

    #[test]
    fn test_pickers_fire_change_and_text_fires_input() {
        let form = form();
        assert_eq!(
            edit_event(&form, FieldId::Country),
            Event::change("country")
        );
        assert_eq!(
            edit_event(&form, FieldId::BirthDate),
            Event::change("birth-date")
        );
        assert_eq!(edit_event(&form, FieldId::Gender), Event::change("gender"));
        assert_eq!(edit_event(&form, FieldId::Name), Event::input("name"));
        assert_eq!(
            edit_event(&form, FieldId::NationalId),
            Event::input("national-id")
        );
    }

    #[test]
    fn test_set_national_id_reformats_while_typing() {
        let mut form = form();
        let out = set(&mut form, FieldId::NationalId, "1234567890");
        assert!(out.contains("\"123456789-0\" ok"), "{out}");
        assert_eq!(form.document().value("national-id"), Some("123456789-0"));
    }

    #[test]
    fn test_set_reports_error_text() {
        let mut form = form();
        let out = set(&mut form, FieldId::Email, "a@b");
        assert!(out.contains("Email address is not valid."), "{out}");
        assert!(out.ends_with("submit disabled"), "{out}");
    }

    #[test]
    fn test_set_select_commits_choice() {
        let mut form = form();
        let out = set(&mut form, FieldId::Country, "Peru");
        assert!(out.contains("\"Peru\" ok"), "{out}");
        assert_eq!(form.document().value("country"), Some("Peru"));
    }

    #[test]
    fn test_submit_rejected_lists_errors() {
        let mut form = form();
        fill_valid(&mut form);
        form.document_mut().set_value("phone", "123");

        let out = execute(&mut form, Command::Submit);
        assert!(
            out.contains("phone: Phone number must have exactly 10 digits."),
            "{out}"
        );
        assert!(!out.contains("----"));
        assert_eq!(form.document().value("name"), Some("Ana"));
    }

    #[test]
    fn test_submit_accepted_drains_dialog() {
        let mut form = form();
        fill_valid(&mut form);
        assert!(form.is_ready());

        let out = execute(&mut form, Command::Submit);
        assert!(out.contains("----\nRegistration successful\n"), "{out}");
        assert!(out.contains("National ID: 1234567890"), "{out}");
        assert!(form.document().dialogs().is_empty());
        assert_eq!(form.document().value("name"), Some(""));
        assert!(out.ends_with("submit disabled"));
    }

    #[test]
    fn test_focus_clears_error() {
        let mut form = form();
        set(&mut form, FieldId::Phone, "12");
        let out = execute(&mut form, Command::Focus(FieldId::Phone));
        assert!(out.starts_with("  phone = \"12\"\n"), "{out}");
        let shown = execute(&mut form, Command::Show);
        assert!(!shown.contains("Phone number must"), "{shown}");
    }

    #[test]
    fn test_countries_preview() {
        let summary = countries(&form());
        assert_eq!(summary, "countries: 2 loaded (Ecuador, Peru, ...)");
    }
}
