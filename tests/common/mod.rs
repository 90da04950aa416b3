use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = write_fixture_catalog(tmp.path());

        Self {
            _tmp: tmp,
            home,
            catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("neon");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_catalog(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn write_fixture_catalog(base: &Path) -> PathBuf {
    let catalog = serde_json::json!({
        "name": "fixture-catalog",
        "tags": ["News", "Guides", "Benchmarks"],
        "posts": [
            {
                "id": "alpha-launch",
                "title": "Alpha Launch Notes",
                "excerpt": "Everything shipped in the alpha.",
                "body": "## Alpha\nShipped the first cut.",
                "tags": ["News"],
                "date": "2025-07-01",
                "read_minutes": 4
            },
            {
                "id": "tuning-guide",
                "title": "A Tuning Guide",
                "excerpt": "Dial in the sampler.",
                "body": "## Tuning\nStart from defaults.",
                "tags": ["Guides"],
                "date": "2025-07-03",
                "read_minutes": 6
            },
            {
                "id": "bench-roundup",
                "title": "Benchmark Roundup",
                "excerpt": "Numbers for the quarter.",
                "body": "## Bench\nAll runs, five seeds.",
                "tags": ["Benchmarks", "News"],
                "date": "2025-07-03",
                "read_minutes": 5
            }
        ],
        "metrics": [
            {"key": "reasoning", "label": "Reasoning"},
            {"key": "speed", "label": "Speed"}
        ],
        "subjects": [
            {"key": "orion", "label": "Orion", "scores": {"reasoning": 0.9, "speed": 0.8}},
            {"key": "lyra", "label": "Lyra", "scores": {"reasoning": 0.7, "speed": 0.6}}
        ],
        "default_selection": ["orion"]
    });

    let path = base.join("catalog.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write catalog");
    path
}
