use egui::Color32;
use egui_plot::{Legend, Plot, PlotBounds, PlotPoints, Points};
use ts_app::{RenderFrame, Renderer, SeriesKind};

/// Tooltip reach as a fraction of the plot extents.
const HOVER_RADIUS: f64 = 0.05;

/// Scatter plot of the two daily series.
#[derive(Default)]
pub struct PlotView {
    frame: Option<RenderFrame>,
}

impl Renderer for PlotView {
    fn render(&mut self, frame: &RenderFrame) {
        self.frame = Some(frame.clone());
    }
}

fn series_color(kind: SeriesKind) -> Color32 {
    match kind {
        SeriesKind::Dirty => Color32::BLUE,
        SeriesKind::Clean => Color32::RED,
    }
}

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Volume on day t");

        let Some(frame) = self.frame.clone() else {
            ui.label("No sequence computed yet");
            return;
        };

        let (x_min, x_max) = frame.x_extent;
        let (y_min, y_max) = frame.y_extent;
        let hover_frame = frame.clone();

        Plot::new("volume_plot")
            .legend(Legend::default())
            .x_axis_label("t")
            .y_axis_label("v")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .label_formatter(move |name, value| {
                if name.is_empty() {
                    return String::new();
                }
                hover_frame
                    .hover(value.x, value.y, HOVER_RADIUS)
                    .map(|info| info.to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
                for kind in SeriesKind::ALL {
                    let points: PlotPoints = frame.points(kind).into();
                    plot_ui.points(
                        Points::new(points)
                            .radius(4.0)
                            .color(series_color(kind))
                            .name(kind.legend()),
                    );
                }
            });
    }
}
