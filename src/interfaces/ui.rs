use super::design_system::EstimatorStyle;
use super::formatting::format_currency;
use super::report::{depreciation_sentence, describe_query_error};
use crate::application::valuation::DepreciationEngine;
use crate::config::FormEnvConfig;
use crate::domain::errors::QueryError;
use crate::domain::valuation::query::{PredictionQuery, ValuationReport};
use crate::domain::valuation::record::CategoricalAttribute;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Form-driven estimator window.
///
/// The engine is trained before the window opens; the window only builds
/// queries from the form and renders what the engine returns.
pub struct PricerApp {
    engine: DepreciationEngine,
    form: FormEnvConfig,
    purchase_year: i32,
    target_year: i32,
    original_price: u64,
    furniture_type: String,
    material: String,
    quality: String,
    color: String,
    last: Option<(PredictionQuery, Result<ValuationReport, QueryError>)>,
}

impl PricerApp {
    pub fn new(engine: DepreciationEngine, form: FormEnvConfig) -> Self {
        let first_label = |attribute: CategoricalAttribute| {
            engine
                .labels(attribute)
                .first()
                .cloned()
                .unwrap_or_default()
        };
        let furniture_type = first_label(CategoricalAttribute::FurnitureType);
        let material = first_label(CategoricalAttribute::Material);
        let quality = first_label(CategoricalAttribute::Quality);
        let color = first_label(CategoricalAttribute::Color);
        let purchase_year = engine
            .purchase_years()
            .first()
            .copied()
            .unwrap_or(form.target_year_min);

        Self {
            purchase_year,
            target_year: form.target_year_default,
            original_price: form.price_default,
            furniture_type,
            material,
            quality,
            color,
            engine,
            form,
            last: None,
        }
    }

    fn query(&self) -> PredictionQuery {
        PredictionQuery {
            purchase_year: self.purchase_year,
            target_year: self.target_year,
            original_price: self.original_price,
            furniture_type: self.furniture_type.clone(),
            material: self.material.clone(),
            quality: self.quality.clone(),
            color: self.color.clone(),
        }
    }

    /// Re-runs the sweep only when the form changed since the last frame.
    fn refresh(&mut self) {
        let query = self.query();
        let stale = match &self.last {
            Some((previous, _)) => *previous != query,
            None => true,
        };
        if stale {
            let result = self.engine.estimate(query.clone());
            if let Err(e) = &result {
                tracing::warn!("Query rejected: {}", e);
            }
            self.last = Some((query, result));
        }
    }

    fn category_combo(
        ui: &mut egui::Ui,
        attribute: CategoricalAttribute,
        selected: &mut String,
        options: &[String],
    ) {
        egui::ComboBox::from_label(attribute.column_name().replace('_', " "))
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut *selected, option.clone(), option.as_str());
                }
            });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let symbol = self.form.currency_symbol.clone();
        EstimatorStyle::panel().show(ui, |ui| {
            ui.label(egui::RichText::new("Enter Furniture Details").size(EstimatorStyle::HEADING_SIZE).strong());
            ui.add_space(EstimatorStyle::GAP);

            let years = self.engine.purchase_years().to_vec();
            egui::ComboBox::from_label("Purchase Year")
                .selected_text(self.purchase_year.to_string())
                .show_ui(ui, |ui| {
                    for year in years {
                        ui.selectable_value(&mut self.purchase_year, year, year.to_string());
                    }
                });

            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut self.target_year)
                        .range(self.form.target_year_min..=self.form.target_year_max)
                        .speed(1.0),
                );
                ui.label("Target Year");
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut self.original_price)
                        .range(self.form.price_min..=self.form.price_max)
                        .speed(self.form.price_step as f64)
                        .prefix(symbol.as_str()),
                );
                ui.label(format!("Original Price ({})", symbol));
            });

            for attribute in CategoricalAttribute::ALL {
                let options = self.engine.labels(attribute).to_vec();
                let selected = match attribute {
                    CategoricalAttribute::FurnitureType => &mut self.furniture_type,
                    CategoricalAttribute::Material => &mut self.material,
                    CategoricalAttribute::Quality => &mut self.quality,
                    CategoricalAttribute::Color => &mut self.color,
                };
                Self::category_combo(ui, attribute, selected, &options);
            }
        });
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let symbol = self.form.currency_symbol.as_str();
        let Some((_, result)) = &self.last else {
            return;
        };

        match result {
            Err(e) => {
                ui.label(
                    egui::RichText::new(describe_query_error(e))
                        .color(EstimatorStyle::REJECTED)
                        .strong(),
                );
            }
            Ok(report) => {
                EstimatorStyle::panel().show(ui, |ui| {
                    ui.label(egui::RichText::new("Predicted Output").size(EstimatorStyle::HEADING_SIZE).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "Estimated Price in {}: {}",
                            report.query.target_year,
                            format_currency(report.point_estimate, symbol)
                        ))
                        .color(EstimatorStyle::ESTIMATE)
                        .size(16.0),
                    );
                });

                ui.add_space(EstimatorStyle::SECTION_GAP);
                ui.label(
                    egui::RichText::new("ML-Based Depreciation Over Time")
                        .size(EstimatorStyle::HEADING_SIZE)
                        .strong(),
                );

                let curve: Vec<[f64; 2]> = report
                    .trajectory
                    .points()
                    .iter()
                    .map(|p| [f64::from(p.year), p.price.trunc()])
                    .collect();
                let line = Line::new("ML Predicted Value", PlotPoints::from(curve.clone()))
                    .color(EstimatorStyle::CURVE)
                    .width(2.0);
                let markers = Points::new("Yearly estimate", PlotPoints::from(curve))
                    .color(EstimatorStyle::CURVE)
                    .radius(3.0);

                Plot::new("depreciation_plot")
                    .height(EstimatorStyle::CHART_HEIGHT)
                    .show_grid([true, true])
                    .legend(Legend::default())
                    .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
                    .show(ui, |plot_ui| {
                        plot_ui.line(line);
                        plot_ui.points(markers);
                    });

                ui.add_space(EstimatorStyle::GAP);
                ui.label(
                    egui::RichText::new(depreciation_sentence(report, symbol))
                        .color(EstimatorStyle::SUMMARY),
                );
            }
        }
    }
}

impl eframe::App for PricerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(EstimatorStyle::visuals());
        self.refresh();

        egui::CentralPanel::default()
            .frame(EstimatorStyle::page())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Furniture Price Predictor");
                    ui.label(
                        egui::RichText::new(
                            "Estimate the resale value of your furniture in the future based on its age, material, and quality.",
                        )
                        .color(EstimatorStyle::CAPTION),
                    );
                    ui.add_space(EstimatorStyle::SECTION_GAP);

                    self.render_form(ui);
                    ui.add_space(EstimatorStyle::SECTION_GAP);
                    ui.separator();
                    self.render_result(ui);
                });
            });
    }
}
