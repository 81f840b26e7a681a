// Chart rasterizer - draws a prepared chart view into an RGB pixel buffer
use crate::domain::chart::ChartView;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::{AreaSeries, LineSeries};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;

const NO_DATA_MESSAGE: &str = "Not enough data points for selected range.";
const FALLBACK_COLOR: RGBColor = RGBColor(0x6e, 0x59, 0xa5);
const GRID_COLOR: RGBColor = RGBColor(0xe5, 0xe7, 0xeb);
const NOTICE_COLOR: RGBColor = RGBColor(0x6b, 0x72, 0x80);

/// Renders the view into an owned `width * height * 3` RGB8 buffer on a
/// white background. Encoding to PNG or JPEG happens in the caller.
pub fn render_chart(
    view: &ChartView,
    window_dates: &[NaiveDate],
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        if view.has_enough_points {
            draw_chart(&root, view, window_dates)?;
        } else {
            draw_no_data_notice(&root, width, height)?;
        }

        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buffer)
}

fn draw_no_data_notice(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    width: u32,
    height: u32,
) -> Result<()> {
    let style = TextStyle::from((FontFamily::SansSerif, 32).into_font())
        .color(&NOTICE_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(
        NO_DATA_MESSAGE,
        &style,
        ((width / 2) as i32, (height / 2) as i32),
    )
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_chart(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    view: &ChartView,
    window_dates: &[NaiveDate],
) -> Result<()> {
    let Some(domain) = view.y_domain else {
        return Ok(());
    };
    // has_enough_points guarantees at least two window entries
    let x_max = (view.window_len - 1) as f64;
    let color = parse_hex_color(&view.color).unwrap_or(FALLBACK_COLOR);

    let mut chart = ChartBuilder::on(root)
        .caption(&view.title, (FontFamily::SansSerif, 36))
        .margin(24)
        .x_label_area_size(56)
        .y_label_area_size(88)
        .build_cartesian_2d(0f64..x_max, domain.min..domain.max)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .bold_line_style(&GRID_COLOR)
        .light_line_style(&WHITE)
        .x_labels(view.ticks.len().max(2))
        .x_label_formatter(&|x| {
            let index = x.round() as usize;
            window_dates
                .get(index)
                .map(|date| date.format("%Y-%m").to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format_y_label(*y))
        .label_style((FontFamily::SansSerif, 22))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for segment in &view.segments {
        let points: Vec<(f64, f64)> = segment
            .points
            .iter()
            .map(|point| (point.index as f64, point.value))
            .collect();

        chart
            .draw_series(AreaSeries::new(
                points.iter().copied(),
                domain.baseline,
                color.mix(0.1).filled(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(2),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        if view.show_points {
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                )
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    Ok(())
}

fn parse_hex_color(raw: &str) -> Option<RGBColor> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

fn format_y_label(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        trim_decimal(format!("{:.1}", value / 1_000_000.0)) + "M"
    } else if value.abs() >= 1_000.0 {
        trim_decimal(format!("{:.1}", value / 1_000.0)) + "k"
    } else {
        trim_decimal(format!("{:.2}", value))
    }
}

fn trim_decimal(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
