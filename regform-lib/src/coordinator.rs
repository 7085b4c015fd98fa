//! The form coordinator: event dispatch, submit readiness and the
//! submission lifecycle.

use std::sync::Arc;

use formdom::{Document, Element, Event};
use log::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::error::{DocumentError, Error, LoadError};
use crate::field::FieldId;
use crate::normalize::{format_national_id, normalize};
use crate::options::{OptionList, OptionLoader};
use crate::rules::RuleRegistry;
use crate::submission::FormData;
use crate::validator::FieldValidator;

/// Re-entrancy guard for submit handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in progress.
    Ignored,
    /// Some fields failed; their errors are now displayed.
    Rejected(Vec<FieldId>),
    /// Everything passed; the form has been reset.
    Accepted(FormData),
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event didn't concern this form's fields.
    Ignored,
    /// A field was validated.
    Validated { target: String, valid: bool },
    /// A field's error presentation was cleared.
    Cleared { target: String },
    /// The form was submitted.
    Submitted(SubmitOutcome),
}

/// Owns one form instance and keeps its document in sync with the rules.
///
/// Constructed once per form with [`FormCoordinator::attach`] and torn down
/// by dropping it.
///
/// # Example
///
/// ```ignore
/// let document = template::registration_form(&FormConfig::default());
/// let mut form = FormCoordinator::attach(document, FormConfig::default())?;
///
/// form.document_mut().set_value("name", "Ana");
/// form.handle_event(&Event::input("name"));
///
/// if let EventOutcome::Submitted(SubmitOutcome::Accepted(data)) =
///     form.handle_event(&Event::submit("registration"))
/// {
///     println!("{}", data.summary());
/// }
/// ```
#[derive(Debug)]
pub struct FormCoordinator {
    document: Document,
    config: FormConfig,
    validator: FieldValidator,
    button_id: String,
    submit_label: String,
    submission: SubmissionState,
    ready: bool,
}

impl FormCoordinator {
    /// Bind to the form in `document`, using the system date for age checks.
    pub fn attach(document: Document, config: FormConfig) -> Result<Self, Error> {
        Self::attach_with_clock(document, config, Arc::new(SystemClock))
    }

    /// Bind to the form in `document`.
    ///
    /// Creates the error elements, then computes the initial readiness. An
    /// empty form starts with its submit control disabled.
    pub fn attach_with_clock(
        mut document: Document,
        config: FormConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Error> {
        if !document.contains(&config.form_id) {
            return Err(DocumentError::missing(config.form_id.clone()).into());
        }

        let button_id = document
            .ids_by_class_within(&config.form_id, &config.button_class)
            .into_iter()
            .next()
            .ok_or_else(|| {
                DocumentError::missing_marker(config.button_class.clone(), config.form_id.clone())
            })?;

        let controls = document.ids_by_class_within(&config.form_id, &config.field_class);
        if controls.is_empty() {
            return Err(DocumentError::missing_marker(
                config.field_class.clone(),
                config.form_id.clone(),
            )
            .into());
        }

        let mut validator = FieldValidator::new(RuleRegistry::new(), clock);
        for id in &controls {
            match FieldId::from_dom_id(id) {
                Some(field) => {
                    validator.attach_error_element(&mut document, field, &config.error_class)
                }
                None => debug!("Control #{id} has no rule, always valid"),
            }
        }
        for field in FieldId::ALL {
            if !controls.iter().any(|id| id == field.dom_id()) {
                warn!("Field {field} has no control in #{}", config.form_id);
            }
        }

        let submit_label = document
            .get(&button_id)
            .map(|button| button.text.clone())
            .unwrap_or_default();

        let mut coordinator = Self {
            document,
            config,
            validator,
            button_id,
            submit_label,
            submission: SubmissionState::Idle,
            ready: false,
        };
        coordinator.refresh_readiness();
        info!("Attached to form #{}", coordinator.config.form_id);
        Ok(coordinator)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for the front end to write user input.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// Whether every field currently validates.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch a user event.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match event {
            Event::Submit { target } => {
                if *target == self.config.form_id {
                    EventOutcome::Submitted(self.submit())
                } else {
                    EventOutcome::Ignored
                }
            }
            Event::Focus { target } => {
                if !self.is_field(target) {
                    return EventOutcome::Ignored;
                }
                if let Some(field) = FieldId::from_dom_id(target) {
                    self.validator.clear(&mut self.document, field);
                }
                EventOutcome::Cleared {
                    target: target.clone(),
                }
            }
            Event::Input { target } | Event::Change { target } | Event::Blur { target } => {
                if !self.is_field(target) {
                    return EventOutcome::Ignored;
                }
                if matches!(event, Event::Input { .. }) && target == FieldId::NationalId.dom_id() {
                    self.reformat_national_id();
                }
                let valid = self.validate_field(target);
                self.refresh_readiness();
                EventOutcome::Validated {
                    target: target.clone(),
                    valid,
                }
            }
        }
    }

    fn is_field(&self, id: &str) -> bool {
        self.document
            .get(id)
            .is_some_and(|el| el.has_class(&self.config.field_class))
    }

    /// Rewrite the national ID into its display form and fix up the caret.
    fn reformat_national_id(&mut self) {
        let id = FieldId::NationalId.dom_id();
        let Some(control) = self.document.get_mut(id) else {
            return;
        };
        let formatted = format_national_id(&control.value, control.cursor);
        control.value = formatted.value;
        control.cursor = formatted.cursor;
    }

    /// Validate one control and update its presentation.
    ///
    /// Controls without a rule, or missing from the document, are valid.
    pub fn validate_field(&mut self, id: &str) -> bool {
        self.validator.validate(&mut self.document, id)
    }

    /// Recompute readiness and enable or disable the submit control.
    ///
    /// Purely evaluates every field; no error is shown or hidden.
    pub fn refresh_readiness(&mut self) -> bool {
        let ready = FieldId::ALL.into_iter().all(|field| {
            self.validator
                .evaluate_control(&self.document, field.dom_id())
                .is_valid()
        });

        self.ready = ready;
        if let Some(button) = self.document.get_mut(&self.button_id) {
            button.disabled = !ready;
        }
        ready
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Run the submission lifecycle.
    ///
    /// Every field is validated again with presentation. Only when all pass
    /// are values collected, confirmed with a dialog and the form reset.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submission == SubmissionState::Submitting {
            debug!("Submission already in progress, ignoring");
            return SubmitOutcome::Ignored;
        }

        self.submission = SubmissionState::Submitting;
        self.set_button(true, self.config.processing_label.clone());

        let invalid: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|field| !self.validate_field(field.dom_id()))
            .collect();

        let outcome = if invalid.is_empty() {
            let data = self.collect();
            self.document.alert(data.summary());
            info!(
                "Registration submitted: {}",
                serde_json::to_string(&data).unwrap_or_default()
            );
            self.reset();
            SubmitOutcome::Accepted(data)
        } else {
            debug!("Submission rejected, invalid fields: {invalid:?}");
            SubmitOutcome::Rejected(invalid)
        };

        self.submission = SubmissionState::Idle;
        self.set_button(false, self.submit_label.clone());
        self.refresh_readiness();
        outcome
    }

    fn set_button(&mut self, disabled: bool, caption: String) {
        if let Some(button) = self.document.get_mut(&self.button_id) {
            button.disabled = disabled;
            button.text = caption;
        }
    }

    /// Normalized value of every field present in the document.
    pub fn collect(&self) -> FormData {
        let mut data = FormData::new();
        for field in FieldId::ALL {
            if let Some(raw) = self.document.value(field.dom_id()) {
                data.insert(field, normalize(field, raw));
            }
        }
        data
    }

    /// Clear every value and all validity presentation.
    pub fn reset(&mut self) {
        self.document.reset_form(&self.config.form_id);
        for field in FieldId::ALL {
            self.validator.clear(&mut self.document, field);
        }
        self.refresh_readiness();
    }

    // =========================================================================
    // Remote options
    // =========================================================================

    /// Put the country control into its loading state.
    pub fn begin_option_load(&mut self) {
        let id = FieldId::Country.dom_id();
        let placeholder = Element::option("", self.config.loading_label.clone());
        if let Some(select) = self.document.get_mut(id) {
            select.disabled = true;
            select.replace_options(vec![placeholder]);
        }
        self.refresh_readiness();
    }

    /// Fill the country control from a finished load.
    ///
    /// Failures leave a single placeholder. Either way the control is
    /// re-enabled and readiness recomputed.
    pub fn finish_option_load(&mut self, result: Result<OptionList, LoadError>) {
        let options: Vec<Element> = match result {
            Ok(list) => {
                info!("Populating {} countries", list.len());
                std::iter::once(Element::option("", self.config.select_label.clone()))
                    .chain(list.iter().map(|name| Element::option(name, name)))
                    .collect()
            }
            Err(err) => {
                error!("Failed to load countries: {err}");
                vec![Element::option("", self.config.failed_label.clone()).disabled(true)]
            }
        };

        if let Some(select) = self.document.get_mut(FieldId::Country.dom_id()) {
            select.replace_options(options);
            select.disabled = false;
        }
        self.refresh_readiness();
    }

    /// Load the country list in place.
    ///
    /// Returns whether the list loaded. The form can't process other events
    /// while this runs; front ends that need to should call
    /// [`Self::begin_option_load`] and [`Self::finish_option_load`] around a
    /// spawned [`OptionLoader::load`] instead.
    pub async fn load_options(&mut self, loader: &OptionLoader) -> bool {
        self.begin_option_load();
        let result = loader.load().await;
        let loaded = result.is_ok();
        self.finish_option_load(result);
        loaded
    }
}
