// Export service - CSV and chart image downloads for one series
use crate::domain::chart::{select_window, ChartView};
use crate::domain::series::Series;
use crate::domain::settings::DisplaySettings;
use crate::infrastructure::chart_render;
use bytes::Bytes;
use chrono::NaiveDate;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

const JPEG_QUALITY: u8 = 90;
const EXPORT_SCALE: u32 = 2;

#[derive(Debug, Clone)]
pub struct Export {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown series: {0}")]
    UnknownSeries(String),
    #[error("series {0} has no data to export")]
    NoData(String),
    #[error("chart render failed: {0}")]
    Render(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Encode(#[from] image::ImageError),
}

pub struct ExportService {
    chart_width: u32,
    chart_height: u32,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            chart_width: 800,
            chart_height: 350,
        }
    }

    /// Writes the full series as `date,value` rows, with an empty value
    /// field for reporting gaps.
    pub fn csv(&self, series: &Series) -> Result<Export, ExportError> {
        if series.points.is_empty() {
            return Err(ExportError::NoData(series.id.clone()));
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["date", "value"])?;
        for point in &series.points {
            let value = point.value.map(|v| v.to_string()).unwrap_or_default();
            writer.write_record([point.date.to_string(), value])?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;

        Ok(Export {
            filename: format!("{}.csv", series.id),
            content_type: "text/csv",
            bytes: Bytes::from(buffer),
        })
    }

    pub fn png(&self, series: &Series, settings: &DisplaySettings) -> Result<Export, ExportError> {
        let (buffer, width, height) = self.render(series, settings)?;
        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded).write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;
        Ok(Export {
            filename: format!("{}.png", series.id),
            content_type: "image/png",
            bytes: Bytes::from(encoded),
        })
    }

    pub fn jpg(&self, series: &Series, settings: &DisplaySettings) -> Result<Export, ExportError> {
        let (buffer, width, height) = self.render(series, settings)?;
        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY).write_image(
            &buffer,
            width,
            height,
            ExtendedColorType::Rgb8,
        )?;
        Ok(Export {
            filename: format!("{}.jpg", series.id),
            content_type: "image/jpeg",
            bytes: Bytes::from(encoded),
        })
    }

    /// Rasterizes the prepared chart at double scale on a white background.
    fn render(
        &self,
        series: &Series,
        settings: &DisplaySettings,
    ) -> Result<(Vec<u8>, u32, u32), ExportError> {
        if series.points.is_empty() {
            return Err(ExportError::NoData(series.id.clone()));
        }

        let view = ChartView::prepare(series, settings);
        let window = select_window(
            &series.points,
            settings.window_start as i64,
            settings.window_end as i64,
        );
        let dates: Vec<NaiveDate> = window.iter().map(|point| point.date).collect();

        let width = self.chart_width * EXPORT_SCALE;
        let height = self.chart_height * EXPORT_SCALE;
        let buffer = chart_render::render_chart(&view, &dates, width, height)
            .map_err(|error| ExportError::Render(format!("{:#}", error)))?;
        Ok((buffer, width, height))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
