use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Clone)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub read_minutes: u32,
}

#[derive(Serialize, Clone)]
pub struct SubjectInfo {
    pub key: String,
    pub label: String,
    pub overall: u32,
}

#[derive(Serialize, Clone)]
pub struct ChartCell {
    pub subject: String,
    pub label: String,
    pub percent: u32,
}

#[derive(Serialize, Clone)]
pub struct ChartRow {
    pub metric: String,
    pub cells: Vec<ChartCell>,
}

#[derive(Serialize)]
pub struct ChartReport {
    pub selection: Vec<String>,
    pub rows: Vec<ChartRow>,
}

#[derive(Serialize, Clone)]
pub struct MetricScore {
    pub metric: String,
    pub percent: u32,
}

#[derive(Serialize, Clone)]
pub struct WeightEntry {
    pub metric: String,
    pub weight: f64,
}

#[derive(Serialize, Clone)]
pub struct ScoreCard {
    pub subject: String,
    pub label: String,
    pub overall: u32,
    pub weighted_overall: u32,
    pub breakdown: Vec<MetricScore>,
}

#[derive(Serialize)]
pub struct ScoreReport {
    pub weights: Vec<WeightEntry>,
    pub cards: Vec<ScoreCard>,
}
