use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use detail_core::{
    detail::{LoadedDetail, LOADING_PLACEHOLDER},
    render_detail,
    text::SUBMIT_LABEL,
    AnnotationForm, AnnotationListView, DetailView, Field, Settings, SubmitOutcome,
};
use eframe::egui;
use shared::{
    domain::{Rating, Resource, ResourceId},
    protocol::DetailProps,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiError, UiEvent},
    orchestration::{dispatch_backend_command, CommandQueue},
    reducer::{reduce_form, FormAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppViewState {
    Directory,
    Detail(ResourceId),
}

pub struct DetailApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    settings: Settings,

    view_state: AppViewState,
    resources: Vec<Resource>,
    props: DetailProps,
    /// Present only while a resource is selected.
    form: Option<AnnotationForm>,

    status: String,
    last_error: Option<UiError>,
}

impl DetailApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: Settings,
        initial_resource: Option<ResourceId>,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            settings,
            form: None,
            view_state: AppViewState::Directory,
            resources: Vec::new(),
            props: DetailProps::default(),
            status: String::new(),
            last_error: None,
        };
        dispatch_backend_command(&app.cmd_tx, BackendCommand::ListResources, &mut app.status);
        if let Some(resource_id) = initial_resource {
            app.select_resource(resource_id);
        }
        app
    }

    fn select_resource(&mut self, resource_id: ResourceId) {
        self.view_state = AppViewState::Detail(resource_id);
        self.props = DetailProps::loading();
        self.form = Some(AnnotationForm::with_rules(
            resource_id,
            self.settings.form_rules,
        ));
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadResource { resource_id },
            &mut self.status,
        );
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::ResourcesListed(resources) => {
                    self.resources = resources;
                }
                UiEvent::DetailLoaded { resource_id, props } => {
                    if self.view_state == AppViewState::Detail(resource_id) {
                        self.props = props;
                    } else {
                        tracing::debug!(resource_id = resource_id.0, "dropping stale detail");
                    }
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        context = ?err.context(),
                        category = ?err.category(),
                        "{}",
                        err.message()
                    );
                    self.status = format!("{}: {}", err.label(), err.message());
                    self.last_error = Some(err);
                }
            }
        }
    }

    fn apply_form_action(&mut self, action: FormAction) {
        let Some(form) = self.form.take() else {
            return;
        };
        let mut queue = CommandQueue::new(&self.cmd_tx);
        let (form, outcome) = reduce_form(form, action, &mut queue);
        self.form = Some(form);
        match outcome {
            Some(SubmitOutcome::Accepted(_)) => {
                self.status = "Submitting comment...".to_string();
                self.last_error = None;
            }
            Some(SubmitOutcome::Failed(err)) => {
                let err = UiError::submission_refused(&err);
                self.status = format!("{}: {}", err.label(), err.message());
                self.last_error = Some(err);
            }
            _ => {}
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.last_error.is_some() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.status);
                } else {
                    ui.label(egui::RichText::new(&self.status).small());
                }
            });
        });
    }

    fn show_directory(&mut self, ctx: &egui::Context) {
        let mut selected = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.settings.parent_link.label);
            ui.separator();
            if self.resources.is_empty() {
                ui.label(egui::RichText::new("No resources loaded").weak());
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for resource in &self.resources {
                    if ui.link(&resource.name).clicked() {
                        selected = Some(resource.id);
                    }
                }
            });
        });
        if let Some(resource_id) = selected {
            self.select_resource(resource_id);
        }
    }

    fn show_detail(&mut self, ctx: &egui::Context) {
        let view = render_detail(&self.props, &self.settings.parent_link);
        let mut back_to_directory = false;
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| match &view {
            DetailView::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(LOADING_PLACEHOLDER);
                });
            }
            DetailView::Error(message) => {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            DetailView::Loaded(detail) => {
                back_to_directory = show_loaded(ui, detail, &mut actions);
            }
            DetailView::Empty => {}
        });

        if let Some(form) = self.form.as_ref().filter(|form| form.is_open()) {
            show_form_modal(ctx, form, &mut actions);
        }

        for action in actions {
            self.apply_form_action(action);
        }
        if back_to_directory {
            self.view_state = AppViewState::Directory;
            self.form = None;
            dispatch_backend_command(&self.cmd_tx, BackendCommand::ListResources, &mut self.status);
        }
    }
}

/// Returns true when the parent breadcrumb was clicked.
fn show_loaded(ui: &mut egui::Ui, detail: &LoadedDetail, actions: &mut Vec<FormAction>) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        for (idx, crumb) in detail.breadcrumbs.iter().enumerate() {
            if idx > 0 {
                ui.label("/");
            }
            match &crumb.target {
                Some(target) => {
                    if ui.link(&crumb.label).on_hover_text(target).clicked() {
                        back = true;
                    }
                }
                None => {
                    ui.label(egui::RichText::new(&crumb.label).strong());
                }
            }
        }
    });
    ui.heading(&detail.heading);
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.group(|ui| {
            ui.label(egui::RichText::new(format!("[{}]", detail.panel.image)).weak())
                .on_hover_text(&detail.panel.alt);
            ui.label(&detail.panel.description);
        });
        ui.add_space(12.0);
        if let Some(list) = &detail.annotations {
            show_annotation_list(ui, list, actions);
        }
    });
    back
}

fn show_annotation_list(ui: &mut egui::Ui, list: &AnnotationListView, actions: &mut Vec<FormAction>) {
    ui.label(egui::RichText::new(list.header).size(18.0).strong());
    for entry in &list.entries {
        ui.add_space(4.0);
        ui.label(&entry.body);
        ui.label(egui::RichText::new(format!("-- {}, {}", entry.author, entry.date)).weak());
    }
    ui.add_space(8.0);
    if ui.button(format!("✏ {SUBMIT_LABEL}")).clicked() {
        actions.push(FormAction::Toggle);
    }
}

fn show_form_modal(ctx: &egui::Context, form: &AnnotationForm, actions: &mut Vec<FormAction>) {
    let Some(draft) = form.draft() else {
        return;
    };
    let mut open = true;

    egui::Window::new(SUBMIT_LABEL)
        .id(egui::Id::new("annotation_form_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(Field::Rating.label());
            let current = draft.rating.unwrap_or_default();
            let mut rating = current;
            egui::ComboBox::from_id_salt("annotation_rating")
                .selected_text(rating.to_string())
                .show_ui(ui, |ui| {
                    for option in Rating::ALL {
                        ui.selectable_value(&mut rating, option, option.to_string());
                    }
                });
            if rating != current {
                actions.push(FormAction::SelectRating(rating));
            }

            ui.add_space(6.0);
            ui.label(Field::Author.label());
            let mut author = draft.author.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut author)
                    .hint_text(Field::Author.label())
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                actions.push(FormAction::Change(Field::Author, author));
            }
            if response.lost_focus() {
                actions.push(FormAction::Blur(Field::Author));
            }
            show_field_messages(ui, form, Field::Author);

            ui.add_space(6.0);
            ui.label(Field::Body.label());
            let mut body = draft.body.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut body)
                    .hint_text(Field::Body.label())
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                actions.push(FormAction::Change(Field::Body, body));
            }
            if response.lost_focus() {
                actions.push(FormAction::Blur(Field::Body));
            }
            show_field_messages(ui, form, Field::Body);

            if let Some(err) = &draft.submit_error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }

            ui.add_space(8.0);
            if ui.button(SUBMIT_LABEL).clicked() {
                actions.push(FormAction::Submit);
            }
        });

    if !open {
        actions.push(FormAction::Dismiss);
    }
}

fn show_field_messages(ui: &mut egui::Ui, form: &AnnotationForm, field: Field) {
    for message in form.visible_messages(field) {
        ui.colored_label(ui.visuals().error_fg_color, message);
    }
}

impl eframe::App for DetailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        match self.view_state {
            AppViewState::Directory => self.show_directory(ctx),
            AppViewState::Detail(_) => self.show_detail(ctx),
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
