// SVG and HTML serialisation of the heatmap render model
use crate::domain::heatmap::{
    Axis, AxisOrient, Heatmap, LEGEND_SWATCH_HEIGHT, LEGEND_SWATCH_WIDTH, Legend,
};
use crate::domain::tooltip::{POINTER_OFFSET, TooltipContent, TooltipState};
use std::fmt::{self, Write};

const LABEL_STYLE: &str = "font-size: 12px; fill: #666;";

/// Standalone SVG document for the chart.
pub fn render_svg(heatmap: &Heatmap) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_svg(&mut out, heatmap)?;
    Ok(out)
}

fn write_svg(out: &mut String, heatmap: &Heatmap) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        heatmap.width, heatmap.height
    )?;

    for cell in &heatmap.cells {
        writeln!(
            out,
            r#"  <rect class="cell" x="{}" y="{}" width="{}" height="{}" data-month="{}" data-year="{}" data-temp="{}" fill="{}"></rect>"#,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.month.number(),
            cell.year,
            cell.temperature,
            cell.fill
        )?;
    }

    write_axis(out, &heatmap.x_axis)?;
    write_axis(out, &heatmap.y_axis)?;

    for title in &heatmap.titles {
        let transform = title
            .rotate
            .map(|degrees| format!(r#" transform="rotate({})""#, degrees))
            .unwrap_or_default();
        writeln!(
            out,
            r#"  <text{} x="{}" y="{}" text-anchor="middle" style="{}">{}</text>"#,
            transform, title.x, title.y, LABEL_STYLE, title.text
        )?;
    }

    write_legend(out, &heatmap.legend)?;
    writeln!(out, "</svg>")
}

fn write_axis(out: &mut String, axis: &Axis) -> fmt::Result {
    let anchor = match axis.orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
    };
    writeln!(
        out,
        r#"  <g id="{}" transform="translate({},{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        axis.id, axis.translate.0, axis.translate.1, anchor
    )?;
    writeln!(
        out,
        r#"    <path class="domain" stroke="currentColor" d="{}"></path>"#,
        axis.domain_path()
    )?;

    for tick in &axis.ticks {
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                r#"    <g class="tick" opacity="1" transform="translate({},0)"><line stroke="currentColor" y2="{}"></line><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
                tick.position,
                axis.tick_size(),
                axis.label_offset(),
                tick.label
            )?,
            AxisOrient::Left => writeln!(
                out,
                r#"    <g class="tick" opacity="1" transform="translate(0,{})"><line stroke="currentColor" x2="{}"></line><text fill="currentColor" x="{}" dy="0.32em">{}</text></g>"#,
                tick.position,
                -axis.tick_size(),
                -axis.label_offset(),
                tick.label
            )?,
        }
    }

    writeln!(out, "  </g>")
}

fn write_legend(out: &mut String, legend: &Legend) -> fmt::Result {
    writeln!(
        out,
        r#"  <g id="legend" transform="translate({},{})">"#,
        legend.translate.0, legend.translate.1
    )?;
    for (i, entry) in legend.entries.iter().enumerate() {
        let (label_x, label_y) = Legend::label_position(i);
        writeln!(
            out,
            r#"    <rect x="{}" y="0" width="{}" height="{}" fill="{}"></rect>"#,
            Legend::swatch_x(i),
            LEGEND_SWATCH_WIDTH,
            LEGEND_SWATCH_HEIGHT,
            entry.fill
        )?;
        writeln!(
            out,
            r#"    <text x="{}" y="{}" text-anchor="middle" style="{}">{}</text>"#,
            label_x,
            label_y,
            LABEL_STYLE,
            entry.label()
        )?;
    }
    writeln!(out, "  </g>")
}

/// Tooltip element in the given state.
pub fn render_tooltip(state: &TooltipState) -> String {
    match state {
        TooltipState::Hidden => {
            r#"<div id="tooltip" style="visibility: hidden;"></div>"#.to_string()
        }
        TooltipState::Visible { content, left, top } => format!(
            r#"<div id="tooltip" data-year="{}" style="visibility: visible; left: {}px; top: {}px;">{}</div>"#,
            content.year,
            left,
            top,
            content.lines().join("<br>")
        ),
    }
}

/// Full page: heading, tooltip and chart. Without a heatmap the chart is simply absent.
///
/// `fallback_baseline` is only shown when there is no heatmap; otherwise the
/// baseline the chart was built with is used.
pub fn render_page(
    heatmap: Option<&Heatmap>,
    fallback_baseline: f64,
) -> Result<String, fmt::Error> {
    let (description, chart, tooltips) = match heatmap {
        Some(heatmap) => (
            format!(
                "{} - {}: base temperature {}°C",
                heatmap.years.min, heatmap.years.max, heatmap.baseline
            ),
            render_svg(heatmap)?,
            tooltip_lines(heatmap),
        ),
        None => (
            format!("base temperature {}°C", fallback_baseline),
            String::new(),
            Vec::new(),
        ),
    };

    // tooltips[i] belongs to the i-th rect.cell in document order
    let script_config = serde_json::json!({
        "tooltips": tooltips,
        "offset": { "x": POINTER_OFFSET.0, "y": POINTER_OFFSET.1 },
    });

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Monthly Global Land-Surface Temperature</title>
    <style>{css}</style>
</head>
<body>
    <h1 id="title">Monthly Global Land-Surface Temperature</h1>
    <p id="description">{description}</p>
    {tooltip}
{chart}
    <script>const HEATMAP = {config};
{js}</script>
</body>
</html>
"#,
        css = PAGE_CSS,
        description = description,
        tooltip = render_tooltip(&TooltipState::default()),
        chart = chart,
        config = script_config,
        js = TOOLTIP_SCRIPT,
    ))
}

fn tooltip_lines(heatmap: &Heatmap) -> Vec<[String; 3]> {
    heatmap
        .cells
        .iter()
        .map(|cell| TooltipContent::from_cell(cell).lines())
        .collect()
}

const PAGE_CSS: &str = r#"
body { font-family: sans-serif; margin: 20px; }
#title, #description { text-align: center; }
#tooltip {
    position: absolute;
    padding: 6px 10px;
    background: rgba(30, 30, 30, 0.85);
    color: #fff;
    border-radius: 4px;
    font-size: 12px;
    pointer-events: none;
}
"#;

// Mirrors TooltipState: hover replaces content, exit hides.
const TOOLTIP_SCRIPT: &str = r#"
const tooltip = document.getElementById("tooltip");
document.querySelectorAll("rect.cell").forEach((cell, index) => {
    cell.addEventListener("mouseover", (event) => {
        tooltip.innerHTML = HEATMAP.tooltips[index].join("<br>");
        tooltip.setAttribute("data-year", cell.getAttribute("data-year"));
        tooltip.style.left = (event.pageX + HEATMAP.offset.x) + "px";
        tooltip.style.top = (event.pageY + HEATMAP.offset.y) + "px";
        tooltip.style.visibility = "visible";
    });
    cell.addEventListener("mouseout", () => {
        tooltip.style.visibility = "hidden";
    });
});
"#;
