use crate::config::DashboardConfig;
use crate::logic::{DashboardController, FetchOutcome, MachinesClient, POLL_INTERVAL, poller_task};
use crate::model::{CheckTag, MachinesView, OsFilter, StatusCard, StatusFilter, os_options};
use eframe::egui;
use eframe::egui::{Color32, RichText};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tr::tr;
use tracing::error;

pub struct ComplianceDashboard {
    pub(crate) controller: DashboardController,
    pub(crate) outcomes: Option<UnboundedReceiver<FetchOutcome>>,
}

/// Helper for application-specific colors adapted for light/dark themes.
struct StatusVisuals {
    pub is_dark: bool,
}

impl StatusVisuals {
    fn from_ctx(ctx: &egui::Context) -> Self {
        Self {
            is_dark: ctx.style().visuals.dark_mode,
        }
    }

    fn ok_color(&self) -> Color32 {
        if self.is_dark {
            Color32::from_rgb(0, 255, 100)
        } else {
            Color32::from_rgb(0, 150, 0)
        }
    }

    fn issue_color(&self) -> Color32 {
        if self.is_dark {
            Color32::RED
        } else {
            Color32::from_rgb(200, 0, 0)
        }
    }

    fn glyph_color(&self, has_issue: bool) -> Color32 {
        if has_issue {
            self.issue_color()
        } else {
            self.ok_color()
        }
    }

    fn tag_color(&self, tag: CheckTag) -> Color32 {
        match tag {
            CheckTag::Ok => self.ok_color(),
            CheckTag::Issue => self.issue_color(),
        }
    }
}

fn status_filter_label(status: StatusFilter) -> String {
    match status {
        StatusFilter::All => tr!("All"),
        StatusFilter::Ok => tr!("OK"),
        StatusFilter::Issue => tr!("Issues"),
    }
}

fn os_filter_label(os: &OsFilter) -> String {
    match os {
        OsFilter::All => tr!("All"),
        OsFilter::Only(name) => name.clone(),
    }
}

impl ComplianceDashboard {
    /// Starts the poller on its own runtime thread and wires its outcomes to
    /// the UI.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let client = MachinesClient::new(config.base_url);
        let ctx = cc.egui_ctx.clone();

        std::thread::spawn(move || {
            match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(poller_task(
                    client,
                    POLL_INTERVAL,
                    sender,
                    move || ctx.request_repaint(),
                )),
                Err(e) => {
                    error!(error = %e, "Failed to start polling runtime");
                    // Disconnects the channel; the UI turns that into the error view
                    drop(sender);
                    ctx.request_repaint();
                }
            }
        });

        Self::with_receiver(DashboardController::new(), receiver)
    }

    /// Dashboard without a poller, showing whatever the controller holds.
    pub fn from_controller(controller: DashboardController) -> Self {
        Self {
            controller,
            outcomes: None,
        }
    }

    pub fn with_receiver(
        controller: DashboardController,
        receiver: UnboundedReceiver<FetchOutcome>,
    ) -> Self {
        Self {
            controller,
            outcomes: Some(receiver),
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Applies every fetch outcome received so far, oldest first. A poller
    /// that has gone away leaves the error view up.
    pub fn pump_outcomes(&mut self) {
        let Some(receiver) = self.outcomes.as_mut() else {
            return;
        };
        loop {
            match receiver.try_recv() {
                Ok(outcome) => self.controller.apply_fetch(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.outcomes = None;
                    self.controller.poller_stopped();
                    break;
                }
            }
        }
    }

    pub fn ui_layout(&mut self, ctx: &egui::Context) {
        let visuals = StatusVisuals::from_ctx(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.filter_controls(ui);

                // Theme switch (right side)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut theme = ui.ctx().options(|o| o.theme_preference);
                    let old_theme = theme;
                    theme.radio_buttons(ui);
                    if theme != old_theme {
                        ui.ctx().options_mut(|o| o.theme_preference = theme);
                    }
                });
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.controller.view() {
                MachinesView::Loading => {
                    ui.label(tr!("Loading…"));
                }
                MachinesView::Error => {
                    ui.colored_label(
                        visuals.issue_color(),
                        tr!("Failed to load data. Is the backend server running?"),
                    );
                }
                MachinesView::NoResults => {
                    ui.label(tr!("No machines found matching your criteria."));
                }
                MachinesView::Cards(cards) => {
                    for card in cards {
                        status_card(ui, &visuals, card);
                        ui.add_space(6.0);
                    }
                }
            });
        });
    }

    /// OS and status combo boxes. Any change re-renders from the current
    /// snapshot.
    fn filter_controls(&mut self, ui: &mut egui::Ui) {
        let mut os = self.controller.filters().os.clone();
        let options = os_options(self.controller.snapshot());

        ui.label(format!("{}:", tr!("OS")));
        egui::ComboBox::from_id_salt("os_filter")
            .selected_text(os_filter_label(&os))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut os, OsFilter::All, tr!("All"));
                for name in &options {
                    ui.selectable_value(&mut os, OsFilter::Only(name.clone()), name.as_str());
                }
            });
        if os != self.controller.filters().os {
            self.controller.set_os_filter(os);
        }

        let mut status = self.controller.filters().status;
        ui.label(format!("{}:", tr!("Status")));
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(status_filter_label(status))
            .show_ui(ui, |ui| {
                for choice in [StatusFilter::All, StatusFilter::Ok, StatusFilter::Issue] {
                    ui.selectable_value(&mut status, choice, status_filter_label(choice));
                }
            });
        if status != self.controller.filters().status {
            self.controller.set_status_filter(status);
        }

        let shown = match self.controller.view() {
            MachinesView::Cards(cards) => cards.len(),
            _ => 0,
        };
        ui.label(format!(
            "{}: {} / {}",
            tr!("Shown"),
            shown,
            self.controller.snapshot().len()
        ));
    }
}

fn status_card(ui: &mut egui::Ui, visuals: &StatusVisuals, card: &StatusCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.colored_label(
                visuals.glyph_color(card.has_issue),
                RichText::new("●").strong(),
            );
            ui.label(RichText::new(format!("{}  (ID: {})", card.os, card.short_id)).strong());
        });
        ui.label(
            RichText::new(format!("{}: {}", tr!("Last check-in"), card.checked_in)).small(),
        );

        for line in &card.checks {
            ui.horizontal(|ui| {
                ui.label(format!("{}:", line.name));
                ui.colored_label(
                    visuals.tag_color(line.tag),
                    RichText::new(&line.value).monospace(),
                );
            });
        }
    });
}

impl eframe::App for ComplianceDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_outcomes();
        self.ui_layout(ctx);
    }
}
