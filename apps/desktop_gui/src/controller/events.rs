//! Backend-to-UI events and error modeling for the desktop GUI.

use shared::{
    domain::{Resource, ResourceId},
    error::ApiError,
    protocol::DetailProps,
};

pub enum UiEvent {
    Info(String),
    ResourcesListed(Vec<Resource>),
    DetailLoaded {
        resource_id: ResourceId,
        props: DetailProps,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    NotFound,
    Data,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadResource,
    SubmitAnnotation,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("not found")
            || message_lower.contains("no resource")
            || message_lower.contains("no such file")
        {
            UiErrorCategory::NotFound
        } else if message_lower.contains("parse")
            || message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("expected")
        {
            UiErrorCategory::Data
        } else if message_lower.contains("disconnected")
            || message_lower.contains("queue")
            || message_lower.contains("unavailable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// A submit the form rejected before anything reached the backend.
    pub fn submission_refused(err: &ApiError) -> Self {
        Self::from_message(UiErrorContext::SubmitAnnotation, err.message.clone())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short prefix for the status banner.
    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::NotFound => "Not found",
            UiErrorCategory::Data => "Data error",
            UiErrorCategory::Transport => "Backend unavailable",
            UiErrorCategory::Unknown => "Error",
        }
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
