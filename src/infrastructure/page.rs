// HTML shell for the dashboard page
use crate::domain::layout::DashboardLayout;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const SCRIPT: &str = r#"
const dropdown = document.getElementById(DROPDOWN_ID);
const low = document.getElementById(SLIDER_ID + "-low");
const high = document.getElementById(SLIDER_ID + "-high");
const readout = document.getElementById(SLIDER_ID + "-value");
const search = document.getElementById(DROPDOWN_ID + "-search");
let range = INITIAL_RANGE;

function showRange() {
  if (readout) {
    readout.textContent = range[0] + " - " + range[1];
  }
}

function snap(input) {
  const step = Number(input.dataset.step);
  input.value = Math.round(Number(input.value) / step) * step;
}

function publish(body) {
  for (const update of body.updates) {
    Plotly.react(update.output, update.figure.data, update.figure.layout);
  }
}

function update(trigger) {
  fetch("/api/update", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify({ trigger, state: { site: dropdown.value, payload_range: range } }),
  }).then((r) => r.json()).then(publish);
}

function onSlide(event) {
  // Only the moved thumb snaps; the other keeps its exact value
  snap(event.target);
  const a = Number(low.value);
  const b = Number(high.value);
  range = [Math.min(a, b), Math.max(a, b)];
  showRange();
  update(SLIDER_ID);
}

if (search) {
  search.addEventListener("input", () => {
    const needle = search.value.toLowerCase();
    for (const option of dropdown.options) {
      option.hidden = !option.text.toLowerCase().includes(needle);
    }
  });
}

dropdown.addEventListener("change", () => update(DROPDOWN_ID));
low.addEventListener("change", onSlide);
high.addEventListener("change", onSlide);
showRange();

const query = new URLSearchParams({ site: dropdown.value, low: range[0], high: range[1] });
fetch("/api/figures?" + query).then((r) => r.json()).then(publish);
"#;

/// Render the static page for a layout. Built once at startup.
pub fn render_index(layout: &DashboardLayout) -> String {
    let dropdown = &layout.site_dropdown;
    let slider = &layout.payload_slider;

    let mut options = String::new();
    for option in &dropdown.options {
        let selected = if option.value == dropdown.value { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            encode_double_quoted_attribute(&option.value),
            selected,
            encode_text(&option.label)
        );
    }

    let mut marks = String::new();
    for mark in &slider.marks {
        let _ = write!(
            marks,
            "<option value=\"{}\" label=\"{}\"></option>",
            mark.value,
            encode_double_quoted_attribute(&mark.label)
        );
    }

    // step="any" keeps off-step data bounds intact; dragging snaps via data-step
    let slider_input = |suffix: &str, value: f64| {
        format!(
            "<input type=\"range\" id=\"{id}-{suffix}\" min=\"{min}\" max=\"{max}\" \
             step=\"any\" data-step=\"{step}\" value=\"{value}\" list=\"{id}-marks\">",
            id = slider.id,
            min = slider.min,
            max = slider.max,
            step = slider.step,
        )
    };

    let search = if dropdown.searchable {
        format!(
            "<input type=\"search\" id=\"{}-search\" placeholder=\"{}\">",
            dropdown.id,
            encode_double_quoted_attribute(dropdown.placeholder)
        )
    } else {
        String::new()
    };

    let readout = if slider.tooltip_always_visible {
        format!("<output id=\"{}-value\"></output>", slider.id)
    } else {
        String::new()
    };

    let script = SCRIPT
        .replace("DROPDOWN_ID", &format!("\"{}\"", dropdown.id))
        .replace("SLIDER_ID", &format!("\"{}\"", slider.id))
        .replace(
            "INITIAL_RANGE",
            &format!("[{}, {}]", slider.value[0], slider.value[1]),
        );

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly}"></script>
</head>
<body>
<h1 style="text-align: center; color: #503D36; font-size: 40px">{title}</h1>
<div style="margin: 20px">
<label for="{dropdown_id}" style="margin-right: 10px">Launch Site:</label>
{search}
<select id="{dropdown_id}" title="{placeholder}">{options}</select>
</div>
<br>
<div id="{pie_id}"></div>
<br>
<p style="margin-left: 20px">Payload range (Kg):</p>
<div style="margin: 20px">
{low_input}
{high_input}
<datalist id="{slider_id}-marks">{marks}</datalist>
{readout}
</div>
<div id="{scatter_id}"></div>
<script>{script}</script>
</body>
</html>
"#,
        title = encode_text(layout.title),
        plotly = PLOTLY_CDN,
        dropdown_id = dropdown.id,
        placeholder = encode_double_quoted_attribute(dropdown.placeholder),
        search = search,
        options = options,
        pie_id = layout.pie_chart.id,
        low_input = slider_input("low", slider.value[0]),
        high_input = slider_input("high", slider.value[1]),
        slider_id = slider.id,
        marks = marks,
        readout = readout,
        scatter_id = layout.scatter_chart.id,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::layout_builder::build_layout;
    use crate::domain::launch::{Dataset, LaunchRecord, Outcome};
    use crate::domain::launch::fixtures::sample_dataset;

    #[test]
    fn test_page_contains_controls() {
        let html = render_index(&build_layout(&sample_dataset()));
        assert!(html.contains("<title>SpaceX Launch Records Dashboard</title>"));
        assert!(html.contains("<option value=\"ALL\" selected>All Sites</option>"));
        assert!(html.contains("<option value=\"KSC\">KSC</option>"));
        assert!(html.contains("id=\"success-pie-chart\""));
        assert!(html.contains("id=\"success-payload-scatter-chart\""));
        assert!(html.contains("id=\"payload-slider-low\""));
        assert!(html.contains("let range = [500, 5000];"));
    }

    #[test]
    fn test_slider_keeps_off_step_bounds() {
        let html = render_index(&build_layout(&sample_dataset()));
        assert!(html.contains(
            "id=\"payload-slider-low\" min=\"0\" max=\"10000\" \
             step=\"any\" data-step=\"1000\" value=\"500\""
        ));
        assert!(html.contains("step=\"any\" data-step=\"1000\" value=\"5000\""));
        assert!(!html.contains(" step=\"1000\""));
        assert!(html.contains("<option value=\"1000\" label=\"1000\"></option>"));
    }

    #[test]
    fn test_search_and_readout_follow_layout() {
        let mut layout = build_layout(&sample_dataset());
        let html = render_index(&layout);
        assert!(html.contains(
            "<input type=\"search\" id=\"site-dropdown-search\" \
             placeholder=\"Select a Launch Site here\">"
        ));
        assert!(html.contains("<output id=\"payload-slider-value\"></output>"));

        layout.site_dropdown.searchable = false;
        layout.payload_slider.tooltip_always_visible = false;
        let html = render_index(&layout);
        assert!(!html.contains("type=\"search\""));
        assert!(!html.contains("<output"));
    }

    #[test]
    fn test_site_names_are_escaped() {
        let dataset = Dataset::new(vec![LaunchRecord::new(
            "<script>",
            100.0,
            "FT",
            Outcome::Success,
        )]);
        let html = render_index(&build_layout(&dataset));
        assert!(html.contains(">&lt;script&gt;</option>"));
    }
}
