use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Sentinel tag meaning "no tag filter". Not part of the vocabulary.
pub const TAG_ALL: &str = "All";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub tags: Vec<String>,
    pub posts: Vec<Post>,
    pub metrics: Vec<Metric>,
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub default_selection: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub read_minutes: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Metric {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Subject {
    pub key: String,
    pub label: String,
    pub scores: HashMap<String, f64>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("subject not found: {0}")]
    SubjectNotFound(String),
    #[error("metric not found: {0}")]
    MetricNotFound(String),
    #[error("duplicate tag in vocabulary: {0}")]
    DuplicateTag(String),
    #[error("duplicate post id: {0}")]
    DuplicatePost(String),
    #[error("duplicate metric key: {0}")]
    DuplicateMetric(String),
    #[error("duplicate subject key: {0}")]
    DuplicateSubject(String),
    #[error("post has no tags: {0}")]
    UntaggedPost(String),
    #[error("post {post} uses tag outside the vocabulary: {tag}")]
    UnknownTag { post: String, tag: String },
    #[error("post has non-positive read_minutes: {0}")]
    InvalidReadMinutes(String),
    #[error("metric set is empty")]
    EmptyMetricSet,
    #[error("subject {subject} is missing a score for metric: {metric}")]
    MissingMetric { subject: String, metric: String },
    #[error("subject {subject} scores unknown metric: {metric}")]
    StrayMetric { subject: String, metric: String },
    #[error("subject {subject} score for {metric} is outside 0..=1: {value}")]
    ScoreOutOfRange {
        subject: String,
        metric: String,
        value: f64,
    },
    #[error("default selection references unknown subject: {0}")]
    UnknownDefaultSubject(String),
    #[error("default selection repeats subject: {0}")]
    DuplicateDefaultSubject(String),
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::PostNotFound(_) => "POST_NOT_FOUND",
            CatalogError::SubjectNotFound(_) => "SUBJECT_NOT_FOUND",
            CatalogError::MetricNotFound(_) => "METRIC_NOT_FOUND",
            _ => "CATALOG_INVALID",
        }
    }
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: Option<&str>) -> anyhow::Result<Catalog> {
    match source {
        None => Ok(serde_json::from_str(BUILTIN_CATALOG)?),
        Some(source) => {
            let file = resolve_catalog_file(source);
            let raw = std::fs::read_to_string(file)?;
            Ok(serde_json::from_str(&raw)?)
        }
    }
}

pub fn find_post<'a>(catalog: &'a Catalog, id: &str) -> anyhow::Result<&'a Post> {
    catalog
        .posts
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::PostNotFound(id.to_string()).into())
}

pub fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    let mut tags = HashSet::new();
    for t in &catalog.tags {
        if !tags.insert(t) {
            return Err(CatalogError::DuplicateTag(t.clone()).into());
        }
    }

    let mut ids = HashSet::new();
    for p in &catalog.posts {
        if !ids.insert(&p.id) {
            return Err(CatalogError::DuplicatePost(p.id.clone()).into());
        }
        if p.tags.is_empty() {
            return Err(CatalogError::UntaggedPost(p.id.clone()).into());
        }
        for t in &p.tags {
            if !tags.contains(t) {
                return Err(CatalogError::UnknownTag {
                    post: p.id.clone(),
                    tag: t.clone(),
                }
                .into());
            }
        }
        if p.read_minutes == 0 {
            return Err(CatalogError::InvalidReadMinutes(p.id.clone()).into());
        }
    }

    if catalog.metrics.is_empty() {
        return Err(CatalogError::EmptyMetricSet.into());
    }
    let mut metric_keys = HashSet::new();
    for m in &catalog.metrics {
        if !metric_keys.insert(&m.key) {
            return Err(CatalogError::DuplicateMetric(m.key.clone()).into());
        }
    }

    let mut subject_keys = HashSet::new();
    for s in &catalog.subjects {
        if !subject_keys.insert(&s.key) {
            return Err(CatalogError::DuplicateSubject(s.key.clone()).into());
        }
        for m in &catalog.metrics {
            match s.scores.get(&m.key) {
                None => {
                    return Err(CatalogError::MissingMetric {
                        subject: s.key.clone(),
                        metric: m.key.clone(),
                    }
                    .into())
                }
                Some(v) if !(0.0..=1.0).contains(v) => {
                    return Err(CatalogError::ScoreOutOfRange {
                        subject: s.key.clone(),
                        metric: m.key.clone(),
                        value: *v,
                    }
                    .into())
                }
                Some(_) => {}
            }
        }
        for k in s.scores.keys() {
            if !metric_keys.contains(k) {
                return Err(CatalogError::StrayMetric {
                    subject: s.key.clone(),
                    metric: k.clone(),
                }
                .into());
            }
        }
    }

    let mut seen = HashSet::new();
    for key in &catalog.default_selection {
        if !subject_keys.contains(key) {
            return Err(CatalogError::UnknownDefaultSubject(key.clone()).into());
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateDefaultSubject(key.clone()).into());
        }
    }

    Ok(())
}
