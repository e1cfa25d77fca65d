//! Plain-text rendering of the detail view and the annotation modal.

use std::fmt::Write as _;

use crate::{
    detail::{DetailView, LoadedDetail, LOADING_PLACEHOLDER},
    form::{AnnotationForm, Field},
};

pub const SUBMIT_LABEL: &str = "Submit comment";

pub fn render_text(view: &DetailView) -> String {
    match view {
        DetailView::Loading => format!("{LOADING_PLACEHOLDER}\n"),
        DetailView::Error(message) => format!("{message}\n"),
        DetailView::Loaded(detail) => render_loaded(detail),
        DetailView::Empty => String::new(),
    }
}

fn render_loaded(detail: &LoadedDetail) -> String {
    let mut out = String::new();

    let trail: Vec<String> = detail
        .breadcrumbs
        .iter()
        .map(|crumb| match &crumb.target {
            Some(target) => format!("{} <{target}>", crumb.label),
            None => crumb.label.clone(),
        })
        .collect();
    let _ = writeln!(out, "{}", trail.join(" / "));
    let _ = writeln!(out, "{}", detail.heading);
    let _ = writeln!(out, "{}", "-".repeat(detail.heading.chars().count().max(3)));
    let _ = writeln!(out, "[image {} \"{}\"]", detail.panel.image, detail.panel.alt);
    let _ = writeln!(out, "{}", detail.panel.description);

    if let Some(list) = &detail.annotations {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", list.header);
        for entry in &list.entries {
            let _ = writeln!(out, "  {}", entry.body);
            let _ = writeln!(out, "  -- {}, {}", entry.author, entry.date);
        }
        let _ = writeln!(out, "[{SUBMIT_LABEL}]");
    }

    out
}

/// Renders the modal when it is open; a closed form renders nothing.
pub fn render_form_text(form: &AnnotationForm) -> String {
    let Some(draft) = form.draft() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "== {SUBMIT_LABEL} ==");
    for field in Field::ALL {
        let _ = writeln!(out, "{}: {}", field.label(), draft.value(field));
        for message in form.visible_messages(field) {
            let _ = writeln!(out, "  ! {message}");
        }
    }
    if let Some(err) = &draft.submit_error {
        let _ = writeln!(out, "! {err}");
    }
    out
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
