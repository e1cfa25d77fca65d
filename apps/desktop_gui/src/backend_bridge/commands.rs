//! Backend commands queued from UI to backend worker.

use shared::{domain::ResourceId, protocol::AnnotationSubmission};

pub enum BackendCommand {
    ListResources,
    LoadResource { resource_id: ResourceId },
    SubmitAnnotation(AnnotationSubmission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ListResources => "list_resources",
            BackendCommand::LoadResource { .. } => "load_resource",
            BackendCommand::SubmitAnnotation(_) => "submit_annotation",
        }
    }
}
