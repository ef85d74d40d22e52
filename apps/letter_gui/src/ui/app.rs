use std::time::Instant;

use eframe::egui;
use letter_core::{assignments, Assignment, NameId, NameList};

use crate::config::Settings;
use crate::controller::drag::DragReorderController;
use crate::controller::events::{apply_list_event, ListEvent};
use crate::controller::export::{ClipboardExporter, SystemClipboard};
use crate::controller::form::NameInputForm;
use crate::ui::theme::{apply_view_settings, PersistedViewSettings, ACCENT, DANGER};

pub const VIEW_STORAGE_KEY: &str = "letter_gui.view";
const ADD_BUTTON_WIDTH: f32 = 96.0;
const REMOVE_BUTTON_SIZE: f32 = 24.0;

fn name_input_id() -> egui::Id {
    egui::Id::new("letter_gui_name_input")
}

fn row_drag_id(id: NameId) -> egui::Id {
    egui::Id::new(("letter_gui_row", id))
}

fn row_remove_id(id: NameId) -> egui::Id {
    row_drag_id(id).with("remove")
}

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub settings: Settings,
    pub initial_names: Vec<String>,
}

pub struct LetterAssignerApp {
    names: NameList,
    form: NameInputForm,
    drag: DragReorderController,
    exporter: ClipboardExporter,
    clipboard: SystemClipboard,
    view: PersistedViewSettings,
    applied_view: Option<PersistedViewSettings>,
}

impl LetterAssignerApp {
    pub fn new(startup: StartupConfig, persisted: Option<PersistedViewSettings>) -> Self {
        let names = NameList::from_names(&startup.initial_names);
        if names.len() < startup.initial_names.len() {
            tracing::warn!(
                skipped = startup.initial_names.len() - names.len(),
                "skipped blank names passed on the command line"
            );
        }
        let view = persisted
            .unwrap_or_else(|| PersistedViewSettings::from_settings(&startup.settings))
            .clamped();

        Self {
            names,
            form: NameInputForm::default(),
            drag: DragReorderController::default(),
            exporter: ClipboardExporter::default(),
            clipboard: SystemClipboard::default(),
            view,
            applied_view: None,
        }
    }

    #[cfg(test)]
    pub fn names(&self) -> &NameList {
        &self.names
    }

    fn apply_view_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_view == Some(self.view) {
            return;
        }
        apply_view_settings(ctx, self.view);
        self.applied_view = Some(self.view);
    }

    fn sync_drag_state(&mut self, ctx: &egui::Context) {
        let payload = egui::DragAndDrop::payload::<usize>(ctx).map(|index| *index);
        let pointer_down = ctx.input(|i| i.pointer.any_down());
        self.drag.sync_with_pointer(payload, pointer_down);
    }

    /// Draws one frame. Kept apart from `eframe::App::update` so it can run against a
    /// bare `egui::Context`.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.apply_view_if_needed(ctx);
        self.sync_drag_state(ctx);

        self.show_header(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_input_row(ui);
            ui.add_space(12.0);
            self.show_name_rows(ui);
        });

        if let Some(left) = self.exporter.confirmation().remaining(Instant::now()) {
            ctx.request_repaint_after(left);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("letter_gui_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Letter Assigner");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(self.view.theme.toggle_label())
                        .on_hover_text("Switch theme")
                        .clicked()
                    {
                        self.view.theme = self.view.theme.toggled();
                    }

                    if self.names.is_empty() {
                        return;
                    }
                    let now = Instant::now();
                    let label = if self.exporter.confirmation().is_visible(now) {
                        "✓ Copied!"
                    } else {
                        "📋 Copy"
                    };
                    if ui.button(label).clicked() {
                        self.exporter.copy(&self.names, &mut self.clipboard, now);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_input_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let edit_width =
                (ui.available_width() - ADD_BUTTON_WIDTH - ui.spacing().item_spacing.x).max(80.0);
            let edit_resp = ui.add(
                egui::TextEdit::singleline(&mut self.form.text)
                    .id(name_input_id())
                    .hint_text("Enter a name")
                    .desired_width(edit_width),
            );
            let enter_pressed =
                edit_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let add_btn =
                egui::Button::new("Add Name").min_size(egui::vec2(ADD_BUTTON_WIDTH, 0.0));
            let clicked = ui.add_enabled(self.form.can_submit(), add_btn).clicked();

            if enter_pressed || clicked {
                self.form.submit(&mut self.names);
            }
            if enter_pressed {
                edit_resp.request_focus();
            }
        });
    }

    fn show_name_rows(&mut self, ui: &mut egui::Ui) {
        if self.names.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.weak("Add some names to get started!");
            });
            return;
        }

        let view = assignments(&self.names);
        let mut events = Vec::new();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, assignment) in view.iter().enumerate() {
                    self.show_name_row(ui, index, assignment, &mut events);
                    ui.add_space(4.0);
                }
            });

        for event in events {
            apply_list_event(event, &mut self.names, &mut self.drag);
        }
    }

    /// Row layout: a drag source holding the handle, name and letters, then a separate
    /// remove target. The remove target stays outside the drag source so its clicks are
    /// not swallowed by the row's drag sense.
    fn show_name_row(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        assignment: &Assignment,
        events: &mut Vec<ListEvent>,
    ) {
        let dragged = self.drag.is_dragged(index);

        let frame = egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                if dragged {
                    ui.multiply_opacity(0.5);
                }
                ui.horizontal(|ui| {
                    let source_width = (ui.available_width()
                        - REMOVE_BUTTON_SIZE
                        - ui.spacing().item_spacing.x)
                        .max(0.0);
                    let row = ui.dnd_drag_source(row_drag_id(assignment.id), index, |ui| {
                        ui.set_width(source_width);
                        ui.horizontal(|ui| {
                            row_label(ui, egui::RichText::new("⋮⋮").weak());
                            row_label(ui, egui::RichText::new(&assignment.name).strong());
                            row_label(ui, egui::RichText::new("-"));
                            row_label(
                                ui,
                                egui::RichText::new(assignment.letters_label()).color(ACCENT),
                            );
                        });
                    });
                    let remove = remove_button(ui, row_remove_id(assignment.id));
                    (row.response, remove)
                })
                .inner
            });
        let (row, remove) = frame.inner;

        if remove.clicked() {
            events.push(ListEvent::Remove(assignment.id));
        }
        if row.drag_started() {
            events.push(ListEvent::BeginDrag(index));
        }

        let drop_zone = row | remove;
        if self.drag.accepts_drop() && drop_zone.dnd_hover_payload::<usize>().is_some() {
            ui.painter().rect_stroke(
                frame.response.rect,
                6.0,
                egui::Stroke::new(1.5, ACCENT),
                egui::StrokeKind::Outside,
            );
        }
        if drop_zone.dnd_release_payload::<usize>().is_some() {
            events.push(ListEvent::DropOn(index));
        }
    }
}

fn row_label(ui: &mut egui::Ui, text: egui::RichText) {
    ui.add(egui::Label::new(text).selectable(false));
}

fn remove_button(ui: &mut egui::Ui, id: egui::Id) -> egui::Response {
    let (rect, _) =
        ui.allocate_exact_size(egui::Vec2::splat(REMOVE_BUTTON_SIZE), egui::Sense::hover());
    let response = ui
        .interact(rect, id, egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text("Remove");
    let color = if response.hovered() {
        DANGER
    } else {
        DANGER.gamma_multiply(0.7)
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "×",
        egui::FontId::proportional(REMOVE_BUTTON_SIZE * 0.75),
        color,
    );
    response
}

impl eframe::App for LetterAssignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.view) {
            Ok(serialized) => storage.set_string(VIEW_STORAGE_KEY, serialized),
            Err(err) => tracing::warn!(%err, "failed to serialize view settings"),
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
