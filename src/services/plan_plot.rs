use plotters::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::domain::spending_plan::SpendingPlan;

#[derive(Error, Debug)]
pub enum PlanPlotError {
    #[error("spending plan has no months to plot")]
    EmptyPlan,
    #[error("failed to render plan chart: {0}")]
    Render(String),
}

/// Renders the phase totals as a bar chart and the monthly amounts as a line
/// chart ordered by progressive month.
pub fn write_plan_charts(
    plan: &SpendingPlan,
    phase_chart_path: &str,
    monthly_chart_path: &str,
) -> Result<(), PlanPlotError> {
    if plan.months.is_empty() {
        return Err(PlanPlotError::EmptyPlan);
    }
    render_phase_chart_png(phase_chart_path, plan)?;
    render_monthly_chart_png(monthly_chart_path, plan)?;
    tracing::info!(phase_chart_path, monthly_chart_path, "plan charts written");
    Ok(())
}

fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

fn upper_bound(values: impl Iterator<Item = f64>) -> f64 {
    let max_value = values.fold(0.0_f64, f64::max);
    if max_value <= 0.0 { 1.0 } else { max_value * 1.1 }
}

fn render_phase_chart_png(output_path: &str, plan: &SpendingPlan) -> Result<(), PlanPlotError> {
    let totals: Vec<f64> = plan.phases.iter().map(|phase| to_f64(phase.total)).collect();
    let max_y = upper_bound(totals.iter().copied());
    let phase_count = totals.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Cost per phase", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0..phase_count, 0.0..max_y)
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Phase")
        .y_desc("Phase total (€)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(totals.len())
        .x_label_formatter(&|index| {
            if *index < 0 || *index >= phase_count {
                return String::new();
            }
            format!("{}", index + 1)
        })
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(totals.iter().enumerate().map(|(idx, total)| {
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, *total)], bar_style)
        }))
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;
    Ok(())
}

fn render_monthly_chart_png(output_path: &str, plan: &SpendingPlan) -> Result<(), PlanPlotError> {
    let points: Vec<(i32, f64)> = plan
        .months
        .iter()
        .map(|month| (month.progressive_month as i32, to_f64(month.amount)))
        .collect();
    let max_y = upper_bound(points.iter().map(|(_, amount)| *amount));
    let max_x = plan.duration as i32 + 1;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Monthly cost", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Progressive month")
        .y_desc("Expected monthly cost (€)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(points.len().min(12).max(1))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ShapeStyle::from(&line_color).stroke_width(2),
        ))
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 3, line_color.filled())),
        )
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PlanPlotError::Render(e.to_string()))?;
    Ok(())
}
