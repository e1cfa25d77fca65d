//! Outbound contract to the collaborator that persists new annotations.

use shared::{
    domain::{Rating, ResourceId},
    error::ApiError,
    protocol::AnnotationSubmission,
};

pub trait AnnotationMutator {
    /// Called exactly once per accepted submission.
    fn add_annotation(
        &mut self,
        resource_id: ResourceId,
        rating: Rating,
        author: &str,
        body: &str,
    ) -> Result<(), ApiError>;
}

impl<F> AnnotationMutator for F
where
    F: FnMut(ResourceId, Rating, &str, &str) -> Result<(), ApiError>,
{
    fn add_annotation(
        &mut self,
        resource_id: ResourceId,
        rating: Rating,
        author: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        self(resource_id, rating, author, body)
    }
}

/// Records every call instead of forwarding it. Handy for dry runs.
#[derive(Debug, Default)]
pub struct RecordingMutator {
    pub calls: Vec<AnnotationSubmission>,
    pub fail_with: Option<ApiError>,
}

impl RecordingMutator {
    pub fn failing(err: ApiError) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(err),
        }
    }
}

impl AnnotationMutator for RecordingMutator {
    fn add_annotation(
        &mut self,
        resource_id: ResourceId,
        rating: Rating,
        author: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        self.calls.push(AnnotationSubmission {
            resource_id,
            rating,
            author: author.to_string(),
            body: body.to_string(),
        });
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
