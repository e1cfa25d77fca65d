//! Detail view: picks exactly one presentation branch per render.

use shared::{domain::Resource, protocol::DetailProps};

use crate::annotations::{render_annotations, AnnotationListView};

pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStatus {
    Loading,
    Error,
    Loaded,
    Empty,
}

/// Precedence: loading, then error, then resource present, then empty.
pub fn presentation_status(props: &DetailProps) -> PresentationStatus {
    if props.loading {
        PresentationStatus::Loading
    } else if props.error_message.is_some() {
        PresentationStatus::Error
    } else if props.resource.is_some() {
        PresentationStatus::Loaded
    } else {
        PresentationStatus::Empty
    }
}

/// Static link back to the parent listing. Routing belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    pub label: String,
    pub target: String,
}

impl Default for ParentLink {
    fn default() -> Self {
        Self {
            label: "Directory".to_string(),
            target: "/home".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` marks the active (current) item.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePanel {
    pub image: String,
    pub alt: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDetail {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub heading: String,
    pub panel: ResourcePanel,
    pub annotations: Option<AnnotationListView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    Error(String),
    Loaded(LoadedDetail),
    Empty,
}

impl DetailView {
    pub fn status(&self) -> PresentationStatus {
        match self {
            DetailView::Loading => PresentationStatus::Loading,
            DetailView::Error(_) => PresentationStatus::Error,
            DetailView::Loaded(_) => PresentationStatus::Loaded,
            DetailView::Empty => PresentationStatus::Empty,
        }
    }
}

pub fn render_detail(props: &DetailProps, parent: &ParentLink) -> DetailView {
    match presentation_status(props) {
        PresentationStatus::Loading => DetailView::Loading,
        PresentationStatus::Error => {
            DetailView::Error(props.error_message.clone().unwrap_or_default())
        }
        PresentationStatus::Loaded => match &props.resource {
            Some(resource) => DetailView::Loaded(render_loaded(resource, props, parent)),
            None => DetailView::Empty,
        },
        PresentationStatus::Empty => DetailView::Empty,
    }
}

fn render_loaded(resource: &Resource, props: &DetailProps, parent: &ParentLink) -> LoadedDetail {
    LoadedDetail {
        breadcrumbs: vec![
            Breadcrumb {
                label: parent.label.clone(),
                target: Some(parent.target.clone()),
            },
            Breadcrumb {
                label: resource.name.clone(),
                target: None,
            },
        ],
        heading: resource.name.clone(),
        panel: ResourcePanel {
            image: resource.image.clone(),
            alt: resource.name.clone(),
            description: resource.description.clone(),
        },
        annotations: render_annotations(props.annotations.as_deref(), resource.id),
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
