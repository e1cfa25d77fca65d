//! Annotation form state machine.
//!
//! The form is either closed or open with a [`FormDraft`]. Every transition takes the
//! form by value and returns the next one, so a caller holds exactly one current state.
//! Opening always starts from a fresh draft; closing drops it.

use std::fmt;

use shared::{
    domain::{Rating, ResourceId},
    error::ApiError,
    protocol::AnnotationSubmission,
};

use crate::{
    mutation::AnnotationMutator,
    validators::{max_length, min_length, required},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Rating,
    Author,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Rating, Field::Author, Field::Body];

    pub fn label(self) -> &'static str {
        match self {
            Field::Rating => "Rating",
            Field::Author => "Your Name",
            Field::Body => "Comments",
        }
    }
}

/// Per-field touched flags. Rating has a default selection and is always touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    author: bool,
    body: bool,
}

impl Touched {
    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Rating => true,
            Field::Author => self.author,
            Field::Body => self.body,
        }
    }

    fn mark(mut self, field: Field) -> Self {
        match field {
            Field::Rating => {}
            Field::Author => self.author = true,
            Field::Body => self.body = true,
        }
        self
    }

    fn all() -> Self {
        Self {
            author: true,
            body: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => f.write_str("Required"),
            Violation::MinLength(n) => write!(f, "Must be at least {n} characters"),
            Violation::MaxLength(n) => write!(f, "Must be {n} characters or less"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, Violation)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = Violation> + '_ {
        self.entries
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, Violation)> {
        self.entries.iter()
    }

    fn push(&mut self, field: Field, violation: Violation) {
        self.entries.push((field, violation));
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (field, violation)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {violation}", field.label())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub author_min_len: usize,
    pub author_max_len: usize,
    pub require_body: bool,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            author_min_len: 2,
            author_max_len: 15,
            require_body: false,
        }
    }
}

impl FormRules {
    pub fn validate(&self, draft: &FormDraft) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let author = draft.author.trim();
        if !required(author) {
            errors.push(Field::Author, Violation::Required);
        } else {
            if !min_length(self.author_min_len)(author) {
                errors.push(Field::Author, Violation::MinLength(self.author_min_len));
            }
            if !max_length(self.author_max_len)(author) {
                errors.push(Field::Author, Violation::MaxLength(self.author_max_len));
            }
        }

        if self.require_body && !required(draft.body.trim()) {
            errors.push(Field::Body, Violation::Required);
        }

        errors
    }
}

/// In-progress values for a new annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    /// `None` until the user picks an option; resolves to the first option on submit.
    pub rating: Option<Rating>,
    pub author: String,
    pub body: String,
    pub touched: Touched,
    /// Set when the mutation collaborator refused the last accepted draft.
    pub submit_error: Option<String>,
}

impl FormDraft {
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Rating => self.rating.unwrap_or_default().to_string(),
            Field::Author => self.author.clone(),
            Field::Body => self.body.clone(),
        }
    }

    pub fn to_submission(
        &self,
        resource_id: ResourceId,
        rules: &FormRules,
    ) -> Result<AnnotationSubmission, FieldErrors> {
        let errors = rules.validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(AnnotationSubmission {
            resource_id,
            rating: self.rating.unwrap_or_default(),
            author: self.author.trim().to_string(),
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ModalState {
    Closed,
    Open(FormDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was closed; nothing happened.
    Ignored,
    /// Validation failed; the modal stays open and every field is now touched.
    Rejected(FieldErrors),
    /// Handed to the mutation collaborator, which accepted it; the modal is closed.
    Accepted(AnnotationSubmission),
    /// Valid, but the collaborator refused it; the modal stays open with the draft intact.
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationForm {
    resource_id: ResourceId,
    rules: FormRules,
    modal: ModalState,
}

impl AnnotationForm {
    pub fn new(resource_id: ResourceId) -> Self {
        Self::with_rules(resource_id, FormRules::default())
    }

    pub fn with_rules(resource_id: ResourceId, rules: FormRules) -> Self {
        Self {
            resource_id,
            rules,
            modal: ModalState::Closed,
        }
    }

    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn is_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.modal {
            ModalState::Open(draft) => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn toggle(self) -> Self {
        let modal = match self.modal {
            ModalState::Closed => ModalState::Open(FormDraft::default()),
            ModalState::Open(_) => ModalState::Closed,
        };
        tracing::debug!(
            resource_id = self.resource_id.0,
            open = matches!(modal, ModalState::Open(_)),
            "annotation modal toggled"
        );
        Self { modal, ..self }
    }

    pub fn open(self) -> Self {
        if self.is_open() {
            self
        } else {
            self.toggle()
        }
    }

    /// Cancel or dismiss. The draft is discarded and nothing is emitted.
    pub fn dismiss(self) -> Self {
        Self {
            modal: ModalState::Closed,
            ..self
        }
    }

    pub fn change(self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        self.map_draft(|mut draft| {
            match field {
                Field::Rating => {
                    // Only the five option values can arrive from the select.
                    if let Some(rating) = Rating::parse(&value) {
                        draft.rating = Some(rating);
                    }
                }
                Field::Author => draft.author = value,
                Field::Body => draft.body = value,
            }
            draft
        })
    }

    pub fn select_rating(self, rating: Rating) -> Self {
        self.map_draft(|mut draft| {
            draft.rating = Some(rating);
            draft
        })
    }

    /// The user left `field`; from now on its validation messages may show.
    pub fn blur(self, field: Field) -> Self {
        self.map_draft(|mut draft| {
            draft.touched = draft.touched.mark(field);
            draft
        })
    }

    /// Current failures regardless of touched state. Empty when closed.
    pub fn errors(&self) -> FieldErrors {
        self.draft()
            .map(|draft| self.rules.validate(draft))
            .unwrap_or_default()
    }

    /// Messages to render under `field`: only when it is touched and invalid.
    pub fn visible_messages(&self, field: Field) -> Vec<String> {
        let Some(draft) = self.draft() else {
            return Vec::new();
        };
        if !draft.touched.is_touched(field) {
            return Vec::new();
        }
        self.rules
            .validate(draft)
            .for_field(field)
            .map(|violation| violation.to_string())
            .collect()
    }

    pub fn submit(self, mutator: &mut dyn AnnotationMutator) -> (Self, SubmitOutcome) {
        let draft = match self.modal {
            ModalState::Open(draft) => draft,
            ModalState::Closed => {
                let closed = Self {
                    modal: ModalState::Closed,
                    ..self
                };
                return (closed, SubmitOutcome::Ignored);
            }
        };

        let submission = match draft.to_submission(self.resource_id, &self.rules) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::debug!(
                    resource_id = self.resource_id.0,
                    errors = %errors,
                    "annotation submit rejected"
                );
                let draft = FormDraft {
                    touched: Touched::all(),
                    ..draft
                };
                let form = Self {
                    modal: ModalState::Open(draft),
                    ..self
                };
                return (form, SubmitOutcome::Rejected(errors));
            }
        };

        match mutator.add_annotation(
            submission.resource_id,
            submission.rating,
            &submission.author,
            &submission.body,
        ) {
            Ok(()) => {
                tracing::info!(
                    resource_id = submission.resource_id.0,
                    rating = submission.rating.get(),
                    "annotation submitted"
                );
                let form = Self {
                    modal: ModalState::Closed,
                    ..self
                };
                (form, SubmitOutcome::Accepted(submission))
            }
            Err(err) => {
                tracing::warn!(
                    resource_id = submission.resource_id.0,
                    code = ?err.code,
                    "annotation submission refused: {}",
                    err.message
                );
                let draft = FormDraft {
                    submit_error: Some(err.message.clone()),
                    ..draft
                };
                let form = Self {
                    modal: ModalState::Open(draft),
                    ..self
                };
                (form, SubmitOutcome::Failed(err))
            }
        }
    }

    fn map_draft(self, f: impl FnOnce(FormDraft) -> FormDraft) -> Self {
        match self.modal {
            ModalState::Open(draft) => Self {
                modal: ModalState::Open(f(draft)),
                ..self
            },
            ModalState::Closed => Self {
                modal: ModalState::Closed,
                ..self
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
