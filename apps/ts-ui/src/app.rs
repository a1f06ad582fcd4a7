use crate::views::{ControlsView, PlotView};
use ts_app::{ControlSettings, ControlSurface};

pub struct TankSimApp {
    surface: ControlSurface,
    controls_view: ControlsView,
    plot_view: PlotView,
}

impl TankSimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            surface: ControlSurface::new(ControlSettings::default()),
            controls_view: ControlsView,
            plot_view: PlotView::default(),
        };
        if let Err(e) = app.surface.refresh(&mut app.plot_view) {
            tracing::warn!("Initial sequence failed: {}", e);
        }
        app
    }
}

impl eframe::App for TankSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            let changes = self.controls_view.show(ui, self.surface.settings());
            for change in changes {
                tracing::debug!("Applying {:?}", change);
                if let Err(e) = self.surface.apply(change, &mut self.plot_view) {
                    tracing::warn!("Change rejected: {}", e);
                }
            }
            if let Some(e) = self.surface.last_error() {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_view.show(ui);
        });
    }
}
