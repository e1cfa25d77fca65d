//! Worker thread standing in for the external data and mutation collaborators.

use std::{path::PathBuf, thread};

use crossbeam_channel::{Receiver, Sender};
use detail_core::{AnnotationMutator, MemoryStore};
use shared::protocol::DetailProps;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Store state as seen by the worker: loaded, or the reason it could not be.
pub enum Backend {
    Ready(MemoryStore),
    Unavailable(String),
}

impl Backend {
    pub fn open(data_path: &std::path::Path) -> Self {
        match MemoryStore::load(data_path) {
            Ok(store) => Backend::Ready(store),
            Err(err) => Backend::Unavailable(err.to_string()),
        }
    }

    pub fn handle(&mut self, cmd: BackendCommand) -> Vec<UiEvent> {
        let store = match self {
            Backend::Ready(store) => store,
            Backend::Unavailable(reason) => {
                return match cmd {
                    BackendCommand::LoadResource { resource_id } => vec![UiEvent::DetailLoaded {
                        resource_id,
                        props: DetailProps::failed(reason.clone()),
                    }],
                    _ => vec![UiEvent::Error(UiError::from_message(
                        UiErrorContext::General,
                        reason.clone(),
                    ))],
                };
            }
        };

        match cmd {
            BackendCommand::ListResources => {
                vec![UiEvent::ResourcesListed(store.resources().to_vec())]
            }
            BackendCommand::LoadResource { resource_id } => vec![UiEvent::DetailLoaded {
                resource_id,
                props: store.detail_props(resource_id),
            }],
            BackendCommand::SubmitAnnotation(submission) => {
                let resource_id = submission.resource_id;
                match store.add_annotation(
                    resource_id,
                    submission.rating,
                    &submission.author,
                    &submission.body,
                ) {
                    Ok(()) => vec![
                        UiEvent::Info("Comment added".to_string()),
                        UiEvent::DetailLoaded {
                            resource_id,
                            props: store.detail_props(resource_id),
                        },
                    ],
                    Err(err) => vec![UiEvent::Error(UiError::from_message(
                        UiErrorContext::SubmitAnnotation,
                        err.message,
                    ))],
                }
            }
        }
    }
}

pub fn launch(
    data_path: PathBuf,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut backend = Backend::open(&data_path);
        match &backend {
            Backend::Ready(store) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Loaded {} resources from {}",
                    store.resources().len(),
                    data_path.display()
                )));
            }
            Backend::Unavailable(reason) => {
                tracing::error!("backend worker startup failure: {reason}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    reason.clone(),
                )));
            }
        }

        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend command received");
            for event in backend.handle(cmd) {
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event channel closed; stopping backend worker");
                    return;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use shared::{
        domain::{Rating, Resource, ResourceId},
        protocol::{AnnotationSubmission, DirectorySnapshot},
    };

    use super::*;

    fn backend() -> Backend {
        Backend::Ready(MemoryStore::new(DirectorySnapshot {
            resources: vec![Resource {
                id: ResourceId(1),
                name: "Redux Woods".to_string(),
                description: "Deep in the woods".to_string(),
                image: "images/redux-woods.jpg".to_string(),
            }],
            annotations: Vec::new(),
        }))
    }

    fn submission(resource_id: i64) -> AnnotationSubmission {
        AnnotationSubmission {
            resource_id: ResourceId(resource_id),
            rating: Rating::ALL[3],
            author: "Al".to_string(),
            body: "Nice spot".to_string(),
        }
    }

    #[test]
    fn stored_submission_resupplies_detail() {
        let mut backend = backend();
        let events = backend.handle(BackendCommand::SubmitAnnotation(submission(1)));
        let reloaded = events.iter().find_map(|event| match event {
            UiEvent::DetailLoaded { props, .. } => props.annotations.clone(),
            _ => None,
        });
        let annotations = reloaded.expect("detail reloaded");
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].author, "Al");
    }

    #[test]
    fn refused_submission_reports_error() {
        let mut backend = backend();
        let events = backend.handle(BackendCommand::SubmitAnnotation(submission(5)));
        assert!(matches!(
            events.as_slice(),
            [UiEvent::Error(err)] if err.context() == UiErrorContext::SubmitAnnotation
        ));
    }

    #[test]
    fn unavailable_store_fails_detail_loads() {
        let mut backend = Backend::Unavailable("failed to read 'missing.json'".to_string());
        let events = backend.handle(BackendCommand::LoadResource {
            resource_id: ResourceId(1),
        });
        match events.as_slice() {
            [UiEvent::DetailLoaded { props, .. }] => {
                assert_eq!(
                    props.error_message.as_deref(),
                    Some("failed to read 'missing.json'")
                );
            }
            _ => panic!("expected a failed detail load"),
        }
    }
}
