//! Renders sampled curves and root estimates produced by the `raiz`
//! solvers. This crate only consumes final numbers; it knows nothing
//! about methods or traces.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, Points};

/// A runnable egui application for plotting curves and root markers.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    markers: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named curve from sampled `[x, y]` points.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    /// Marks a root estimate as a single highlighted point.
    #[must_use]
    pub fn mark_root(mut self, name: &str, x: f64, y: f64) -> Self {
        self.markers.push(Series {
            name: name.to_string(),
            points: vec![[x, y].into()],
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                    }

                    for marker in &self.markers {
                        let points = marker.points.as_slice();
                        let name = &marker.name;

                        plot_ui.points(Points::new(points).name(name).radius(4.0));
                    }
                });
        });
    }
}
