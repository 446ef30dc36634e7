//! Create/update/delete funnel shared by the management pages.
//!
//! A mutation reports its outcome exactly once through a [`Notifier`] and,
//! only on success, bumps the table's [`RefetchTrigger`]. Confirmation of
//! destructive actions happens before [`MutationCoordinator::execute`] is
//! called; the coordinator itself never prompts.

use std::rc::Rc;

use crate::api::{ApiError, RecordId};
use crate::table::RefetchTrigger;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<P> {
    Create(P),
    Update { id: RecordId, payload: P },
    Delete { id: RecordId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl<P> Mutation<P> {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update { .. } => MutationKind::Update,
            Mutation::Delete { .. } => MutationKind::Delete,
        }
    }
}

/// Applies mutations against a resource.
#[allow(async_fn_in_trait)]
pub trait MutationBackend {
    type Payload;

    async fn apply(&self, mutation: Mutation<Self::Payload>) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            description: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            description: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Success text and failure description for one kind of mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeText {
    pub success: String,
    pub failure: String,
}

impl OutcomeText {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationMessages {
    pub create: OutcomeText,
    pub update: OutcomeText,
    pub delete: OutcomeText,
}

impl MutationMessages {
    pub fn for_kind(&self, kind: MutationKind) -> &OutcomeText {
        match kind {
            MutationKind::Create => &self.create,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
        }
    }
}

/// Text shown to the user for a failed mutation. Transport details are
/// not user-facing, so network failures use the generic message.
pub struct MutationCoordinator<B: MutationBackend> {
    backend: Rc<B>,
    notifier: Rc<dyn Notifier>,
    trigger: RefetchTrigger,
    messages: MutationMessages,
}

impl<B: MutationBackend> Clone for MutationCoordinator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            notifier: self.notifier.clone(),
            trigger: self.trigger.clone(),
            messages: self.messages.clone(),
        }
    }
}

impl<B: MutationBackend> MutationCoordinator<B> {
    pub fn new(
        backend: B,
        notifier: Rc<dyn Notifier>,
        trigger: RefetchTrigger,
        messages: MutationMessages,
    ) -> Self {
        Self {
            backend: Rc::new(backend),
            notifier,
            trigger,
            messages,
        }
    }

    pub fn trigger(&self) -> &RefetchTrigger {
        &self.trigger
    }

    pub async fn execute(&self, mutation: Mutation<B::Payload>) -> Result<(), ApiError> {
        let kind = mutation.kind();
        let text = self.messages.for_kind(kind);
        match self.backend.apply(mutation).await {
            Ok(()) => {
                let count = self.trigger.bump();
                log::debug!("{:?} succeeded, refetch trigger now {}", kind, count);
                self.notifier.notify(Notification::success(&text.success));
                Ok(())
            }
            Err(error) => {
                log::warn!("{:?} failed: {}", kind, error);
                self.notifier.notify(
                    Notification::error(error.user_message()).with_description(&text.failure),
                );
                Err(error)
            }
        }
    }
}
