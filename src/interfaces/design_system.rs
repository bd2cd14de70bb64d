//! Look of the estimator window: one light palette and the two frames the
//! form and result panels sit in.

use eframe::egui::{Color32, Frame, Margin, Stroke, Visuals};

pub struct EstimatorStyle;

impl EstimatorStyle {
    pub const PAGE: Color32 = Color32::from_rgb(247, 245, 240);
    pub const PANEL: Color32 = Color32::WHITE;
    pub const PANEL_EDGE: Color32 = Color32::from_rgb(214, 208, 196);
    pub const FIELD: Color32 = Color32::from_rgb(238, 234, 226);

    pub const INK: Color32 = Color32::from_rgb(38, 34, 30);
    pub const CAPTION: Color32 = Color32::from_rgb(120, 112, 102);

    /// Point estimate headline.
    pub const ESTIMATE: Color32 = Color32::from_rgb(46, 125, 50);
    /// Rejected queries.
    pub const REJECTED: Color32 = Color32::from_rgb(198, 40, 40);
    /// Depreciation summary under the chart.
    pub const SUMMARY: Color32 = Color32::from_rgb(21, 101, 192);
    pub const CURVE: Color32 = Color32::from_rgb(141, 85, 36);

    pub const GAP: f32 = 8.0;
    pub const SECTION_GAP: f32 = 16.0;
    pub const HEADING_SIZE: f32 = 18.0;
    pub const CHART_HEIGHT: f32 = 280.0;

    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.panel_fill = Self::PAGE;
        visuals.window_fill = Self::PAGE;
        visuals.extreme_bg_color = Self::FIELD;
        visuals.override_text_color = Some(Self::INK);
        visuals.widgets.inactive.bg_fill = Self::FIELD;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Self::PANEL_EDGE);
        visuals.selection.bg_fill = Self::CURVE.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::CURVE);
        visuals
    }

    /// White panel holding the form or the estimate.
    pub fn panel() -> Frame {
        Frame::NONE
            .fill(Self::PANEL)
            .stroke(Stroke::new(1.0, Self::PANEL_EDGE))
            .corner_radius(6.0)
            .inner_margin(Margin::same(14))
    }

    pub fn page() -> Frame {
        Frame::NONE
            .fill(Self::PAGE)
            .inner_margin(Margin::symmetric(28, 20))
    }
}
