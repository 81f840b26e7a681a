// Economic series domain models
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone)]
pub struct Series {
    pub id: String,
    pub description: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(id: String, description: String, points: Vec<SeriesPoint>) -> Self {
        Self {
            id,
            description,
            points,
        }
    }
}
