//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use detail_core::AnnotationMutator;
use shared::{
    domain::{Rating, ResourceId},
    error::{ApiError, ErrorCode},
    protocol::AnnotationSubmission,
};

use crate::backend_bridge::commands::BackendCommand;

fn queue_command(cmd_tx: &Sender<BackendCommand>, cmd: BackendCommand) -> Result<(), ApiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(ApiError::new(
            ErrorCode::Unavailable,
            "Backend command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(ApiError::new(
            ErrorCode::Unavailable,
            "Backend command processor disconnected; restart the app",
        )),
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    if let Err(err) = queue_command(cmd_tx, cmd) {
        *status = err.message;
    }
}

/// Mutation collaborator for the form: hands the submission to the backend worker.
/// Success means the command was queued; the store's verdict arrives later as a `UiEvent`.
pub struct CommandQueue<'a> {
    cmd_tx: &'a Sender<BackendCommand>,
}

impl<'a> CommandQueue<'a> {
    pub fn new(cmd_tx: &'a Sender<BackendCommand>) -> Self {
        Self { cmd_tx }
    }
}

impl AnnotationMutator for CommandQueue<'_> {
    fn add_annotation(
        &mut self,
        resource_id: ResourceId,
        rating: Rating,
        author: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        queue_command(
            self.cmd_tx,
            BackendCommand::SubmitAnnotation(AnnotationSubmission {
                resource_id,
                rating,
                author: author.to_string(),
                body: body.to_string(),
            }),
        )
    }
}
