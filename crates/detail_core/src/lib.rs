//! Detail view and annotation submission core.
//!
//! [`detail::render_detail`] turns what the data collaborator supplies into a view
//! model; [`form::AnnotationForm`] drives the modal that collects a new annotation and
//! hands it to an [`mutation::AnnotationMutator`].

pub mod annotations;
pub mod config;
pub mod detail;
pub mod error;
pub mod form;
pub mod mutation;
pub mod store;
pub mod text;
pub mod validators;

pub use annotations::{format_date, render_annotations, AnnotationEntry, AnnotationListView};
pub use config::{load_settings, Settings};
pub use detail::{presentation_status, render_detail, DetailView, ParentLink, PresentationStatus};
pub use error::DetailError;
pub use form::{AnnotationForm, Field, FieldErrors, FormDraft, FormRules, SubmitOutcome, Violation};
pub use mutation::{AnnotationMutator, RecordingMutator};
pub use store::MemoryStore;
