use crossbeam_channel::bounded;
use detail_core::RecordingMutator;
use shared::domain::ResourceId;

use super::*;
use crate::{backend_bridge::commands::BackendCommand, controller::orchestration::CommandQueue};

fn run(
    actions: Vec<FormAction>,
    mutator: &mut dyn AnnotationMutator,
) -> (AnnotationForm, Vec<SubmitOutcome>) {
    let mut form = AnnotationForm::new(ResourceId(7));
    let mut outcomes = Vec::new();
    for action in actions {
        let (next, outcome) = reduce_form(form, action, mutator);
        form = next;
        outcomes.extend(outcome);
    }
    (form, outcomes)
}

#[test]
fn typing_then_submitting_closes_the_modal() {
    let mut mutator = RecordingMutator::default();
    let (form, outcomes) = run(
        vec![
            FormAction::Toggle,
            FormAction::SelectRating(Rating::ALL[3]),
            FormAction::Change(Field::Author, "Al".to_string()),
            FormAction::Blur(Field::Author),
            FormAction::Change(Field::Body, "Nice spot".to_string()),
            FormAction::Submit,
        ],
        &mut mutator,
    );
    assert!(!form.is_open());
    assert!(matches!(outcomes.as_slice(), [SubmitOutcome::Accepted(_)]));
    assert_eq!(mutator.calls.len(), 1);
    assert_eq!(mutator.calls[0].rating.get(), 4);
}

#[test]
fn dismiss_discards_without_emitting() {
    let mut mutator = RecordingMutator::default();
    let (form, outcomes) = run(
        vec![
            FormAction::Toggle,
            FormAction::Change(Field::Author, "Al".to_string()),
            FormAction::Dismiss,
            FormAction::Toggle,
        ],
        &mut mutator,
    );
    assert!(outcomes.is_empty());
    assert!(mutator.calls.is_empty());
    assert_eq!(form.draft().map(|d| d.author.as_str()), Some(""));
}

#[test]
fn command_queue_hands_submission_to_backend() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    let mut queue = CommandQueue::new(&cmd_tx);
    let (_, outcomes) = run(
        vec![
            FormAction::Toggle,
            FormAction::Change(Field::Author, "Jo".to_string()),
            FormAction::Submit,
        ],
        &mut queue,
    );
    assert!(matches!(outcomes.as_slice(), [SubmitOutcome::Accepted(_)]));
    match cmd_rx.try_recv() {
        Ok(BackendCommand::SubmitAnnotation(submission)) => {
            assert_eq!(submission.resource_id, ResourceId(7));
            assert_eq!(submission.author, "Jo");
        }
        _ => panic!("expected a queued submission"),
    }
}

#[test]
fn full_queue_keeps_the_draft_open() {
    let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
    cmd_tx
        .try_send(BackendCommand::ListResources)
        .expect("fill queue");
    let mut queue = CommandQueue::new(&cmd_tx);
    let (form, outcomes) = run(
        vec![
            FormAction::Toggle,
            FormAction::Change(Field::Author, "Jo".to_string()),
            FormAction::Submit,
        ],
        &mut queue,
    );
    assert!(matches!(outcomes.as_slice(), [SubmitOutcome::Failed(_)]));
    assert!(form.is_open());
    assert_eq!(
        form.draft().and_then(|d| d.submit_error.as_deref()),
        Some("Backend command queue is full; please retry")
    );
}
