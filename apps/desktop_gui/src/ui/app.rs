//! eframe app shell: composer, transcript view, and item-card widgets.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::transcript::{EntryBody, ItemCard, Origin, Transcript, TranscriptEntry};
use shared::domain::SubmissionId;

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

pub struct TaskChatApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    transcript: Transcript,
    composer: String,
    status: String,

    next_submission: u64,
}

impl TaskChatApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            transcript: Transcript::default(),
            composer: String::new(),
            status: "Connecting to backend worker...".to_string(),
            next_submission: 1,
        }
    }

    fn allocate_submission(&mut self) -> SubmissionId {
        let submission = SubmissionId(self.next_submission);
        self.next_submission += 1;
        submission
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::TaskCompleted {
                    submission,
                    task_name,
                    items,
                } => {
                    let cards = items.iter().map(ItemCard::from_spec).collect();
                    if self
                        .transcript
                        .resolve(submission, EntryBody::TaskResult { task_name, cards })
                    {
                        self.status = "Task resolved".to_string();
                    }
                }
                UiEvent::TaskRejected {
                    submission,
                    message,
                } => {
                    self.transcript
                        .resolve(submission, EntryBody::Text(format!("Error: {message}")));
                    self.status = "Server rejected the task".to_string();
                }
                UiEvent::TaskUnreachable { submission, detail } => {
                    self.transcript.resolve(
                        submission,
                        EntryBody::Text(format!("Network error: {detail}")),
                    );
                    self.status = "Request did not complete".to_string();
                }
                UiEvent::Error(err) => {
                    self.status = if err.context() == UiErrorContext::BackendStartup {
                        format!("Backend startup error: {}", err.message())
                    } else {
                        format!("{} error: {}", err_label(err.category()), err.message())
                    };
                }
            }
        }
    }

    /// Submission handler: user entry, then placeholder, then exactly one
    /// queued request. The composer is cleared unconditionally.
    fn submit(&mut self) {
        let text = std::mem::take(&mut self.composer);
        let submission = self.allocate_submission();

        self.transcript.push_user(text.clone());
        self.transcript.push_pending(submission);

        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::ProcessTask { submission, text },
            &mut self.status,
        );
        if !queued {
            // The request never left the app; resolve the placeholder through
            // the same generic path a transport failure would take.
            let detail = self.status.clone();
            self.transcript
                .resolve(submission, EntryBody::Text(format!("Network error: {detail}")));
        }
    }

    fn show_composer_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("composer_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            let mut submit_requested = false;
            ui.horizontal(|ui| {
                let edit = egui::TextEdit::singleline(&mut self.composer)
                    .id_salt("task_composer")
                    .hint_text("Describe a task, e.g. \"host a pizza night\"")
                    .desired_width(ui.available_width() - 64.0);
                let response = ui.add(edit);

                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if response.lost_focus() && enter_pressed {
                    submit_requested = true;
                    response.request_focus();
                }
                if ui.button("Send").clicked() {
                    submit_requested = true;
                }
            });
            if submit_requested {
                self.submit();
            }

            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
            ui.add_space(4.0);
        });
    }

    fn show_transcript_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.transcript.entries().is_empty() {
                ui.add_space(12.0);
                ui.weak("Describe a task below to get a list of items for it.");
                return;
            }
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in self.transcript.entries_mut() {
                        render_entry(ui, entry);
                    }
                });
        });
    }
}

impl eframe::App for TaskChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Events arrive from the worker thread; keep polling while a request
        // is outstanding so resolutions show up without user interaction.
        if self.transcript.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.show_composer_panel(ctx);
        self.show_transcript_panel(ctx);
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &mut TranscriptEntry) {
    ui.add_space(6.0);
    let author = match entry.origin {
        Origin::User => "You",
        Origin::Assistant => "Assistant",
    };
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(author).strong().size(12.0));
        ui.small(
            egui::RichText::new(entry.sent_at.format("%H:%M").to_string()).weak(),
        );
    });

    match &mut entry.body {
        EntryBody::Text(text) => {
            ui.label(text.as_str());
        }
        EntryBody::Pending(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Thinking...");
            });
        }
        EntryBody::TaskResult { task_name, cards } => {
            ui.label(egui::RichText::new(task_name.as_str()).strong());
            ui.horizontal_wrapped(|ui| {
                for card in cards.iter_mut() {
                    render_item_card(ui, card);
                }
            });
        }
    }
}

fn render_item_card(ui: &mut egui::Ui, card: &mut ItemCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(150.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(card.name()).strong());
                ui.small(egui::RichText::new(card.amount()).weak());
                ui.horizontal(|ui| {
                    if ui.button("-").clicked() {
                        card.decrement();
                    }
                    ui.label(card.quantity().to_string());
                    if ui.button("+").clicked() {
                        card.increment();
                    }
                });
            });
        });
}
