//! Registration form validation library
//!
//! Binds to a registration form held in a [`formdom::Document`], validates
//! each field against declarative rules, keeps error presentation and the
//! submit control in sync, and fills the country selection from a remote
//! service.

pub mod clock;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod field;
pub mod normalize;
pub mod options;
pub mod rules;
pub mod submission;
pub mod template;
pub mod validator;

pub use config::{Config, FormConfig, LoaderConfig};
pub use coordinator::{EventOutcome, FormCoordinator, SubmissionState, SubmitOutcome};
pub use field::FieldId;
pub use options::{OptionList, OptionLoader};
pub use submission::FormData;
