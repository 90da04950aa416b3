use crate::catalog::{Catalog, CatalogError, Metric, Subject};
use crate::domain::models::{ChartCell, ChartRow, MetricScore, ScoreCard, WeightEntry};
use std::collections::HashMap;

pub const WEIGHT_MIN: f64 = 0.4;
pub const WEIGHT_MAX: f64 = 1.0;
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Rounds a normalized 0..=1 value to a whole percentage, halves up.
pub fn pct(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

pub struct CompareSession<'a> {
    metrics: &'a [Metric],
    subjects: &'a [Subject],
    selection: Vec<String>,
    weights: HashMap<String, f64>,
}

impl<'a> CompareSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            metrics: &catalog.metrics,
            subjects: &catalog.subjects,
            selection: catalog.default_selection.clone(),
            weights: HashMap::new(),
        }
    }

    pub fn subjects(&self) -> &'a [Subject] {
        self.subjects
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    fn subject(&self, key: &str) -> Result<&'a Subject, CatalogError> {
        self.subjects
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| CatalogError::SubjectNotFound(key.to_string()))
    }

    pub fn overall_score(&self, key: &str) -> Result<u32, CatalogError> {
        let subject = self.subject(key)?;
        let mut sum = 0.0;
        for metric in self.metrics {
            sum += metric_value(subject, metric)?;
        }
        Ok(pct(sum / self.metrics.len() as f64))
    }

    /// Weighted variant. The denominator stays the metric count, not the
    /// weight sum, so raising every weight raises the score.
    pub fn weighted_overall_score(&self, key: &str) -> Result<u32, CatalogError> {
        let subject = self.subject(key)?;
        let mut sum = 0.0;
        for metric in self.metrics {
            sum += metric_value(subject, metric)? * self.weight(&metric.key);
        }
        Ok(pct(sum / self.metrics.len() as f64))
    }

    pub fn weight(&self, key: &str) -> f64 {
        self.weights.get(key).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Out-of-range values are clamped into [`WEIGHT_MIN`]..=[`WEIGHT_MAX`],
    /// never rejected; returns the value actually stored.
    pub fn set_weight(&mut self, key: &str, value: f64) -> Result<f64, CatalogError> {
        if !self.metrics.iter().any(|m| m.key == key) {
            return Err(CatalogError::MetricNotFound(key.to_string()));
        }
        // NaN cannot be clamped; treat it as an untouched weight
        let stored = if value.is_nan() {
            DEFAULT_WEIGHT
        } else {
            value.clamp(WEIGHT_MIN, WEIGHT_MAX)
        };
        self.weights.insert(key.to_string(), stored);
        Ok(stored)
    }

    pub fn toggle_selection(&mut self, key: &str) -> Result<bool, CatalogError> {
        self.subject(key)?;
        if let Some(pos) = self.selection.iter().position(|k| k == key) {
            self.selection.remove(pos);
            Ok(false)
        } else {
            self.selection.push(key.to_string());
            Ok(true)
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.subjects.iter().map(|s| s.key.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn weights(&self) -> Vec<WeightEntry> {
        self.metrics
            .iter()
            .map(|m| WeightEntry {
                metric: m.key.clone(),
                weight: self.weight(&m.key),
            })
            .collect()
    }

    pub fn chart_rows(&self) -> Result<Vec<ChartRow>, CatalogError> {
        let mut rows = Vec::new();
        for metric in self.metrics {
            let mut cells = Vec::new();
            for key in &self.selection {
                let subject = self.subject(key)?;
                cells.push(ChartCell {
                    subject: subject.key.clone(),
                    label: subject.label.clone(),
                    percent: pct(metric_value(subject, metric)?),
                });
            }
            rows.push(ChartRow {
                metric: metric.label.clone(),
                cells,
            });
        }
        Ok(rows)
    }

    pub fn score_card(&self, key: &str) -> Result<ScoreCard, CatalogError> {
        let subject = self.subject(key)?;
        let mut breakdown = Vec::new();
        for metric in self.metrics {
            breakdown.push(MetricScore {
                metric: metric.label.clone(),
                percent: pct(metric_value(subject, metric)?),
            });
        }
        Ok(ScoreCard {
            subject: subject.key.clone(),
            label: subject.label.clone(),
            overall: self.overall_score(key)?,
            weighted_overall: self.weighted_overall_score(key)?,
            breakdown,
        })
    }
}

fn metric_value(subject: &Subject, metric: &Metric) -> Result<f64, CatalogError> {
    subject
        .scores
        .get(&metric.key)
        .copied()
        .ok_or_else(|| CatalogError::MissingMetric {
            subject: subject.key.clone(),
            metric: metric.key.clone(),
        })
}
