//! Human and JSON renderings of command results

use console::style;
use serde::Serialize;
use voyage_adapter::record::RouteRecord;
use voyage_domain::{ComparisonReport, Route};

/// Output format selected with `--json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRowView {
    #[serde(flatten)]
    pub route: RouteRecord,
    pub percent_diff: Option<f64>,
    pub compliant: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub baseline: RouteRecord,
    pub baseline_compliant: bool,
    pub target_intensity: f64,
    pub comparison: Vec<ComparisonRowView>,
}

impl From<&ComparisonReport> for ComparisonView {
    fn from(report: &ComparisonReport) -> Self {
        Self {
            baseline: RouteRecord::from(&report.baseline),
            baseline_compliant: report.baseline_compliant,
            target_intensity: report.target_intensity,
            comparison: report
                .rows
                .iter()
                .map(|row| ComparisonRowView {
                    route: RouteRecord::from(&row.route),
                    percent_diff: row.percent_diff,
                    compliant: row.compliant,
                })
                .collect(),
        }
    }
}

pub fn routes_json(routes: &[Route]) -> serde_json::Result<String> {
    let records: Vec<RouteRecord> = routes.iter().map(RouteRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

pub fn comparison_json(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ComparisonView::from(report))
}

fn verdict(compliant: bool) -> String {
    if compliant {
        style("✓ compliant").green().to_string()
    } else {
        style("✗ over target").red().to_string()
    }
}

pub fn routes_table(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes match.\n".to_string();
    }

    let mut out = format!(
        "{:<8} {:<12} {:<6} {:>6} {:>10} {:>10} {:>10} {:>10}\n",
        "ROUTE", "VESSEL", "FUEL", "YEAR", "GHG", "FUEL(t)", "DIST(km)", "CO2e(t)"
    );

    for route in routes {
        let marker = if route.is_baseline() { " *" } else { "" };
        out.push_str(&format!(
            "{:<8} {:<12} {:<6} {:>6} {:>10.2} {:>10.1} {:>10.1} {:>10.1}{}\n",
            route.id().as_str(),
            route.vessel_type().as_str(),
            route.fuel_type().as_str(),
            route.year(),
            route.ghg_intensity(),
            route.fuel_consumption(),
            route.distance(),
            route.total_emissions(),
            marker,
        ));
    }

    out.push_str(&format!("{} route(s); * = baseline\n", routes.len()));
    out
}

pub fn comparison_table(report: &ComparisonReport) -> String {
    let mut out = format!(
        "Baseline {} ({} / {} / {}): {:.2} gCO2e/MJ, {}\n",
        style(report.baseline.id()).bold(),
        report.baseline.vessel_type(),
        report.baseline.fuel_type(),
        report.baseline.year(),
        report.baseline.ghg_intensity(),
        verdict(report.baseline_compliant),
    );
    out.push_str(&format!("Target {:.4} gCO2e/MJ\n\n", report.target_intensity));

    if report.rows.is_empty() {
        out.push_str("No other routes to compare.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<8} {:<12} {:<6} {:>6} {:>10} {:>9}  {}\n",
        "ROUTE", "VESSEL", "FUEL", "YEAR", "GHG", "DIFF", "VERDICT"
    ));

    for row in &report.rows {
        let diff = row
            .percent_diff
            .map(|d| format!("{:+.2}%", d))
            .unwrap_or_else(|| "n/a".to_string());

        out.push_str(&format!(
            "{:<8} {:<12} {:<6} {:>6} {:>10.2} {:>9}  {}\n",
            row.route.id().as_str(),
            row.route.vessel_type().as_str(),
            row.route.fuel_type().as_str(),
            row.route.year(),
            row.route.ghg_intensity(),
            diff,
            verdict(row.compliant),
        ));
    }

    out.push_str(&format!(
        "{}/{} route(s) at or below target\n",
        report.compliant_count(),
        report.rows.len()
    ));
    out
}
