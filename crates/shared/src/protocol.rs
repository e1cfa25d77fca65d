use serde::{Deserialize, Serialize};

use crate::domain::{Annotation, Rating, Resource, ResourceId};

/// Normalized payload handed to the mutation collaborator after a valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSubmission {
    pub resource_id: ResourceId,
    pub rating: Rating,
    pub author: String,
    pub body: String,
}

/// Fixture format loaded by the in-memory store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// What the data collaborator hands the detail renderer on each render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailProps {
    pub loading: bool,
    pub error_message: Option<String>,
    pub resource: Option<Resource>,
    pub annotations: Option<Vec<Annotation>>,
}

impl DetailProps {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn loaded(resource: Resource, annotations: Vec<Annotation>) -> Self {
        Self {
            resource: Some(resource),
            annotations: Some(annotations),
            ..Self::default()
        }
    }
}
