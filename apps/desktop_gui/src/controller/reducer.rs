//! Maps widget interactions onto annotation form transitions.

use detail_core::{AnnotationForm, AnnotationMutator, Field, SubmitOutcome};
use shared::domain::Rating;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Toggle,
    Dismiss,
    Change(Field, String),
    Blur(Field),
    SelectRating(Rating),
    Submit,
}

pub fn reduce_form(
    form: AnnotationForm,
    action: FormAction,
    mutator: &mut dyn AnnotationMutator,
) -> (AnnotationForm, Option<SubmitOutcome>) {
    match action {
        FormAction::Toggle => (form.toggle(), None),
        FormAction::Dismiss => (form.dismiss(), None),
        FormAction::Change(field, value) => (form.change(field, value), None),
        FormAction::Blur(field) => (form.blur(field), None),
        FormAction::SelectRating(rating) => (form.select_rating(rating), None),
        FormAction::Submit => {
            let (form, outcome) = form.submit(mutator);
            (form, Some(outcome))
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
