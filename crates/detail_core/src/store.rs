//! In-memory directory store.
//!
//! Stands in for the external data and mutation collaborators: it supplies
//! [`DetailProps`] for a resource and accepts new annotations. Nothing is written
//! back to disk.

use std::{fs, path::Path};

use chrono::{SecondsFormat, Utc};
use shared::{
    domain::{Annotation, AnnotationId, Rating, Resource, ResourceId},
    error::ApiError,
    protocol::{DetailProps, DirectorySnapshot},
};

use crate::{error::DetailError, mutation::AnnotationMutator};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: Vec<Resource>,
    annotations: Vec<Annotation>,
}

impl MemoryStore {
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            resources: snapshot.resources,
            annotations: snapshot.annotations,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DetailError> {
        let raw = fs::read_to_string(path).map_err(|source| DetailError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: DirectorySnapshot =
            serde_json::from_str(&raw).map_err(|source| DetailError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            resources = snapshot.resources.len(),
            annotations = snapshot.annotations.len(),
            "loaded directory snapshot"
        );
        Ok(Self::new(snapshot))
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id == id)
    }

    /// Annotations for `id` in insertion order.
    pub fn annotations_for(&self, id: ResourceId) -> Vec<Annotation> {
        self.annotations
            .iter()
            .filter(|annotation| annotation.resource_id == id)
            .cloned()
            .collect()
    }

    /// One past the highest id in use; snapshot ids need not be contiguous.
    fn next_annotation_id(&self) -> AnnotationId {
        AnnotationId(
            self.annotations
                .iter()
                .map(|annotation| annotation.id.0)
                .max()
                .map_or(0, |max| max + 1),
        )
    }

    /// A missing resource yields empty props, which render as the empty state.
    pub fn detail_props(&self, id: ResourceId) -> DetailProps {
        match self.resource(id) {
            Some(resource) => DetailProps::loaded(resource.clone(), self.annotations_for(id)),
            None => DetailProps::default(),
        }
    }
}

impl AnnotationMutator for MemoryStore {
    fn add_annotation(
        &mut self,
        resource_id: ResourceId,
        rating: Rating,
        author: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        if self.resource(resource_id).is_none() {
            return Err(ApiError::not_found(format!(
                "no resource with id {resource_id}"
            )));
        }
        let id = self.next_annotation_id();
        self.annotations.push(Annotation {
            id,
            resource_id,
            rating,
            author: author.to_string(),
            body: body.to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        tracing::debug!(resource_id = resource_id.0, annotation_id = id.0, "annotation stored");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
