// Chart transform core - window selection, gap segmentation, axis resolution
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::series::{Series, SeriesPoint};
use crate::domain::settings::{Bound, DisplaySettings};

/// Upper bound on x-axis labels; the tick stride is derived from it.
pub const MAX_X_LABELS: usize = 12;

/// Minimum number of present values a window needs before a line is drawable.
pub const MIN_DRAWABLE_POINTS: usize = 2;

/// Clamps a requested `[start, end]` index pair into the valid range for a
/// sequence of `len` points. An inverted pair after clamping degrades to the
/// single-point window `[start, start]`. Returns `None` only for `len == 0`.
pub fn clamp_window(len: usize, start: i64, end: i64) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let last = (len - 1) as i64;
    let start = start.clamp(0, last) as usize;
    let end = end.clamp(0, last) as usize;
    Some((start, end.max(start)))
}

pub fn select_window(points: &[SeriesPoint], start: i64, end: i64) -> &[SeriesPoint] {
    match clamp_window(points.len(), start, end) {
        Some((start, end)) => &points[start..=end],
        None => &[],
    }
}

/// One point of a gap-free run, carrying its index within the window so the
/// renderer can place it on the x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPoint {
    pub index: usize,
    pub date: NaiveDate,
    pub value: f64,
}

/// A maximal gap-free run of present values inside the selected window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub points: Vec<SegmentPoint>,
}

/// Splits the window into maximal runs of present values. Every gap closes
/// the current run; a run still open at the end of the window is flushed.
pub fn build_segments(window: &[SeriesPoint]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Vec<SegmentPoint> = Vec::new();
    for (index, point) in window.iter().enumerate() {
        match point.value {
            Some(value) => current.push(SegmentPoint {
                index,
                date: point.date,
                value,
            }),
            None => {
                if !current.is_empty() {
                    segments.push(Segment {
                        points: std::mem::take(&mut current),
                    });
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(Segment { points: current });
    }
    segments
}

pub fn present_count(window: &[SeriesPoint]) -> usize {
    window.iter().filter(|point| point.value.is_some()).count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub index: usize,
    pub date: NaiveDate,
}

/// Picks evenly strided tick dates, always including the final date of the
/// window.
pub fn tick_dates(window: &[SeriesPoint]) -> Vec<Tick> {
    if window.is_empty() {
        return Vec::new();
    }
    let stride = window.len().div_ceil(MAX_X_LABELS).max(1);
    let mut ticks: Vec<Tick> = window
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(index, point)| Tick {
            index,
            date: point.date,
        })
        .collect();
    let last = window.len() - 1;
    if ticks.last().map(|tick| tick.index) != Some(last) {
        ticks.push(Tick {
            index: last,
            date: window[last].date,
        });
    }
    ticks
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YDomain {
    pub min: f64,
    pub max: f64,
    /// Lower edge the area fill is anchored to; always the resolved minimum.
    pub baseline: f64,
}

/// Resolves the drawable y range from the user bounds and the window's
/// present values. Returns `None` when the window has no present values.
pub fn resolve_y_domain(window: &[SeriesPoint], y_min: Bound, y_max: Bound) -> Option<YDomain> {
    let mut data_min = f64::INFINITY;
    let mut data_max = f64::NEG_INFINITY;
    let mut present = 0usize;
    for point in window {
        if let Some(value) = point.value {
            data_min = data_min.min(value);
            data_max = data_max.max(value);
            present += 1;
        }
    }
    if present == 0 {
        return None;
    }

    let min = match y_min {
        Bound::Fixed(value) => value,
        Bound::Auto => data_min,
    };
    let mut max = match y_max {
        Bound::Fixed(value) => value,
        Bound::Auto => data_max,
    };
    if max <= min {
        let both_auto = y_min == Bound::Auto && y_max == Bound::Auto;
        max = if both_auto {
            // both bounds came from the data, so the span here is zero or
            // near it; widen by 10% of the span with a floor of one unit
            min + (0.1 * (data_max - data_min)).max(1.0)
        } else {
            min + 1.0
        };
    }

    Some(YDomain {
        min,
        max,
        baseline: min,
    })
}

/// The fully prepared, renderer-facing description of one series chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub series_id: String,
    pub title: String,
    pub color: String,
    pub show_points: bool,
    pub has_enough_points: bool,
    pub window_len: usize,
    pub segments: Vec<Segment>,
    pub ticks: Vec<Tick>,
    pub y_domain: Option<YDomain>,
}

impl ChartView {
    /// Runs the window, segment and axis transforms over the series under
    /// the given settings. Recomputed from scratch on every call.
    pub fn prepare(series: &Series, settings: &DisplaySettings) -> Self {
        let window = select_window(
            &series.points,
            settings.window_start as i64,
            settings.window_end as i64,
        );
        let has_enough_points = present_count(window) >= MIN_DRAWABLE_POINTS;
        let (segments, ticks, y_domain) = if has_enough_points {
            (
                build_segments(window),
                tick_dates(window),
                resolve_y_domain(window, settings.y_min, settings.y_max),
            )
        } else {
            (Vec::new(), Vec::new(), None)
        };
        Self {
            series_id: series.id.clone(),
            title: settings.title.clone(),
            color: settings.color.clone(),
            show_points: settings.show_points,
            has_enough_points,
            window_len: window.len(),
            segments,
            ticks,
            y_domain,
        }
    }
}
