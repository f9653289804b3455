use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use exoquest::ResultPresenter;

use crate::color::ClassColors;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Class charts (central panel)
// ---------------------------------------------------------------------------

/// One bar per class, each as its own series so the legend names it.
fn class_bars<'a>(
    entries: impl Iterator<Item = (&'a str, f64)>,
    colors: &ClassColors,
) -> Vec<BarChart> {
    entries
        .enumerate()
        .map(|(i, (label, value))| {
            let color = colors.color_for(label);
            let bar = Bar::new(i as f64, value).name(label).fill(color).width(0.7);
            BarChart::new(vec![bar]).name(label).color(color)
        })
        .collect()
}

/// Record count per classification.
pub fn distribution_chart(ui: &mut Ui, state: &ResultPresenter, colors: &ClassColors) {
    ui.strong("Classification distribution");
    let charts = class_bars(
        state
            .distribution()
            .iter()
            .map(|c| (c.label.as_str(), c.count as f64)),
        colors,
    );

    Plot::new("distribution_plot")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label("Observations")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Mean of the selected metric per classification.
pub fn metric_chart(ui: &mut Ui, state: &ResultPresenter, colors: &ClassColors) {
    let Some(label) = state.selected_metric_label() else {
        ui.strong("Metric means");
        ui.label("No metric selected.");
        return;
    };
    ui.strong(format!("Mean {label} by class"));

    if state.metric_means().is_empty() {
        ui.label("No numeric values for this metric in the current results.");
        return;
    }

    let charts = class_bars(
        state
            .metric_means()
            .iter()
            .map(|m| (m.label.as_str(), m.mean)),
        colors,
    );

    Plot::new("metric_plot")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(label)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
