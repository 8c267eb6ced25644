// Mapper to convert chart specs to Plotly figure JSON
use crate::application::controller::{ChartSpec, ChartUpdate};
use crate::domain::chart::{PieSpec, ScatterSpec};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
pub struct FigureUpdate {
    pub output: &'static str,
    pub figure: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureUpdates {
    pub updates: Vec<FigureUpdate>,
}

pub fn updates_to_figures(updates: Vec<ChartUpdate>) -> FigureUpdates {
    FigureUpdates {
        updates: updates
            .into_iter()
            .map(|u| FigureUpdate {
                output: u.output,
                figure: chart_to_figure(&u.chart),
            })
            .collect(),
    }
}

pub fn chart_to_figure(chart: &ChartSpec) -> Value {
    match chart {
        ChartSpec::Pie(pie) => pie_to_figure(pie),
        ChartSpec::Scatter(scatter) => scatter_to_figure(scatter),
    }
}

fn pie_to_figure(pie: &PieSpec) -> Value {
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
        }],
        "layout": {
            "title": { "text": pie.title },
            "legend": { "tracegroupgap": 0 },
        },
    })
}

fn scatter_to_figure(scatter: &ScatterSpec) -> Value {
    // One trace per booster category gives the colour grouping
    let traces: Vec<Value> = scatter
        .categories()
        .into_iter()
        .map(|category| {
            let (x, y): (Vec<f64>, Vec<u8>) = scatter
                .points
                .iter()
                .filter(|p| p.category == category)
                .map(|p| (p.payload_mass_kg, p.outcome))
                .unzip();

            json!({
                "type": "scatter",
                "mode": "markers",
                "name": category,
                "legendgroup": category,
                "x": x,
                "y": y,
            })
        })
        .collect();

    let axis = &scatter.outcome_axis;
    json!({
        "data": traces,
        "layout": {
            "title": { "text": scatter.title },
            "legend": { "title": { "text": "Booster Version Category" } },
            "xaxis": { "title": { "text": "Payload Mass (kg)" } },
            "yaxis": {
                "title": { "text": axis.label },
                "tickmode": "array",
                "tickvals": axis.tick_values,
                "ticktext": axis.tick_labels,
            },
        },
    })
}
