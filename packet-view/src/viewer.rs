//! Interactive packet traffic viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (compositor, traffic source, label table) and implements [`eframe::App`]
//! to drive and render the simulation through an egui UI.

use eframe::App;
use packet_core::{Compositor, FrameStats, SimConfig, labels::LabelTable};

use crate::{
    painter::PainterSurface,
    traffic::{LOCAL_HOST, Replay, SyntheticTraffic, TrafficSource},
};

/// Step used by the "Step" button and as the upper bound for frame deltas.
const FIXED_DT: f32 = 1.0 / 60.0;
const MAX_DT: f32 = 0.1;
/// Sends allowed to pile up while the source has nothing to give.
const MAX_SEND_BURST: f32 = 32.0;

/// Startup options assembled by `main` from the command line.
pub struct Settings {
    pub cfg: SimConfig,
    /// Remote hosts in the synthetic traffic mix.
    pub remotes: usize,
    pub labels: LabelTable,
    /// JSON-lines event log to replay instead of synthetic traffic.
    pub replay: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cfg: SimConfig::default(),
            remotes: 8,
            labels: LabelTable::default(),
            replay: None,
        }
    }
}

/// Main application state for the interactive viewer.
///
/// The per-frame order is: handle UI input, advance the simulation if
/// `running` (traffic, forces, integration, packet motion), then render
/// the compositor into the central panel.
pub struct Viewer {
    comp: Compositor,
    labels: LabelTable,
    source: Box<dyn TrafficSource>,
    settings: Settings,

    running: bool,
    /// Run the node force pass; packets still move when off.
    physics: bool,
    sends_per_second: f32,
    send_budget: f32,

    last_stats: FrameStats,
    last_retired: usize,
    last_step_dt: f32,
}

impl Viewer {
    pub fn new(settings: Settings) -> Self {
        let mut viewer = Self {
            comp: Compositor::new(settings.cfg.clone()),
            labels: settings.labels.clone(),
            source: Box::new(Replay::default()),
            settings,
            running: true,
            physics: true,
            sends_per_second: 20.0,
            send_budget: 0.0,
            last_stats: FrameStats::default(),
            last_retired: 0,
            last_step_dt: 0.0,
        };
        viewer.reset();
        viewer
    }

    /// Rebuilds the compositor and the traffic source from the startup settings.
    ///
    /// Synthetic traffic starts with every host already placed; a replay
    /// adds nodes as their first event arrives.
    fn reset(&mut self) {
        let cfg = self.comp.cfg.clone();
        self.comp = Compositor::new(cfg);
        self.labels = self.settings.labels.clone();
        self.send_budget = 0.0;
        self.last_stats = FrameStats::default();
        self.last_retired = 0;

        self.source = match &self.settings.replay {
            Some(text) => Box::new(Replay::from_jsonl(text)),
            None => {
                let synthetic = SyntheticTraffic::new(self.settings.remotes, self.comp.cfg.seed);
                for host in synthetic.hosts() {
                    self.comp.ensure_node(host);
                }
                self.labels.mark_local(LOCAL_HOST);
                Box::new(synthetic)
            }
        };
    }

    /// Removes every node and packet but keeps the traffic source.
    fn clear(&mut self) {
        self.comp.clear();
        self.send_budget = 0.0;
    }

    /// Pulls due events from the source and advances the simulation by `dt`.
    ///
    /// Returns the number of events shown this step.
    fn step_once(&mut self, dt: f32) -> usize {
        let dt = dt.clamp(0.0, MAX_DT);

        self.send_budget = (self.send_budget + self.sends_per_second * dt).min(MAX_SEND_BURST);
        let mut sent = 0;
        while self.send_budget >= 1.0 {
            let Some(event) = self.source.next_event() else {
                break;
            };
            self.send_budget -= 1.0;
            self.comp.ingest(&event);
            sent += 1;
        }

        self.last_retired = if self.physics {
            self.comp.step(dt)
        } else {
            self.comp.update(dt)
        };
        self.last_step_dt = dt;
        sent
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once(FIXED_DT);
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.comp.zoom, 0.1..=5.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("retired = {}", self.last_retired));
                ui.label(format!("packets = {}", self.last_stats.packets));
                ui.label(format!("nodes = {}", self.last_stats.nodes));
            });
        });
    }

    /// Builds the right-hand panel for simulation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Traffic");
                Self::labeled_drag_f32(
                    ui,
                    "sends/s:",
                    &mut self.sends_per_second,
                    0.0..=500.0,
                    0.5,
                );

                ui.separator();
                ui.label("Forces");
                ui.checkbox(&mut self.physics, "node physics");
                let cfg = &mut self.comp.cfg;
                Self::labeled_drag_f32(ui, "spread:", &mut cfg.spread, 1.0..=1000.0, 1.0);
                Self::labeled_drag_f32(
                    ui,
                    "repel_force:",
                    &mut cfg.repel_force,
                    1.0..=20000.0,
                    10.0,
                );
                Self::labeled_drag_f32(ui, "damping:", &mut cfg.damping, 0.0..=1.0, 0.01);

                ui.separator();
                ui.label("Motion");
                ui.checkbox(&mut cfg.clamp_ease, "clamp packet ease");
                Self::labeled_drag_f32(
                    ui,
                    "view_smoothing:",
                    &mut cfg.view_smoothing,
                    0.0..=1.0,
                    0.01,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    let seed = self.comp.cfg.seed;
                    self.comp.cfg = SimConfig {
                        seed,
                        ..SimConfig::default()
                    };
                    self.comp.zoom = self.comp.cfg.zoom;
                }
            });
    }

    /// Builds the central panel: advances the simulation and paints the scene.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                if response.hovered() {
                    let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                    if scroll != 0.0 {
                        let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                        self.comp.zoom = (self.comp.zoom * factor).clamp(0.1, 5.0);
                    }
                }

                // Physics before paint.
                if self.running {
                    let dt = ctx.input(|i| i.stable_dt);
                    self.step_once(dt);
                    ctx.request_repaint();
                }

                let painter = ui.painter_at(rect);
                let mut surface = PainterSurface::new(&painter, rect);
                self.last_stats = self.comp.render(&mut surface, &self.labels);
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
