// crates/bundle-report/src/report.rs
// Build and write the bundle report (static HTML or JSON)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::assets::{self, Asset, AssetKind};
use crate::error::{ReportError, Result};

/// Output format of the report file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    /// Self-contained HTML page
    #[default]
    Static,
    Json,
}

impl ReportMode {
    pub const ALL: [ReportMode; 2] = [ReportMode::Static, ReportMode::Json];

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportMode::Static => "report.html",
            ReportMode::Json => "report.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub dist: PathBuf,
    /// Output path; defaults to `<dist>/report.html` (or `.json`)
    pub report: Option<PathBuf>,
    pub mode: ReportMode,
}

impl ReportOptions {
    pub fn new(dist: impl Into<PathBuf>) -> Self {
        Self {
            dist: dist.into(),
            report: None,
            mode: ReportMode::default(),
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| self.dist.join(self.mode.default_file_name()))
    }

    /// Files never counted as assets: this run's output plus the default
    /// report of every mode, so earlier runs in another mode are skipped too.
    pub fn excluded_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.report_path()];
        paths.extend(
            ReportMode::ALL
                .iter()
                .map(|mode| self.dist.join(mode.default_file_name())),
        );
        paths
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub kind: AssetKind,
    pub count: usize,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub dist: String,
    pub total_size: u64,
    pub assets: Vec<Asset>,
    pub by_kind: Vec<KindSummary>,
}

impl Report {
    pub fn from_assets(dist: &Path, assets: Vec<Asset>) -> Self {
        let total_size = assets.iter().map(|a| a.size).sum();

        let mut by_kind: Vec<KindSummary> = Vec::new();
        for asset in &assets {
            match by_kind.iter_mut().find(|s| s.kind == asset.kind) {
                Some(summary) => {
                    summary.count += 1;
                    summary.size += asset.size;
                }
                None => by_kind.push(KindSummary {
                    kind: asset.kind,
                    count: 1,
                    size: asset.size,
                }),
            }
        }
        by_kind.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.kind.cmp(&b.kind)));

        Self {
            generated_at: Utc::now(),
            dist: dist.display().to_string(),
            total_size,
            assets,
            by_kind,
        }
    }

    /// Percentage of the total bundle taken by `size`
    pub fn share(&self, size: u64) -> f64 {
        if self.total_size == 0 {
            0.0
        } else {
            size as f64 * 100.0 / self.total_size as f64
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_html(&self) -> String {
        let mut rows = String::new();
        for asset in &self.assets {
            let share = self.share(asset.size);
            rows.push_str(&format!(
                "<tr><td class=\"path\">{}</td><td>{}</td><td class=\"num\">{}</td>\
                 <td class=\"num\">{:.1}%</td><td><div class=\"bar {}\" style=\"width:{:.1}%\"></div></td></tr>\n",
                html_escape(&asset.path),
                asset.kind.as_str(),
                format_size(asset.size),
                share,
                asset.kind.as_str(),
                share,
            ));
        }

        let mut kinds = String::new();
        for summary in &self.by_kind {
            kinds.push_str(&format!(
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}%</td></tr>\n",
                summary.kind.as_str(),
                summary.count,
                format_size(summary.size),
                self.share(summary.size),
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Bundle report - {dist}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; color: #222; }}
table {{ border-collapse: collapse; width: 100%; margin-bottom: 2rem; }}
th, td {{ padding: 4px 8px; border-bottom: 1px solid #ddd; text-align: left; }}
td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
td.path {{ font-family: monospace; }}
.bar {{ height: 10px; background: #888; }}
.bar.wasm {{ background: #654ff0; }}
.bar.js {{ background: #f0db4f; }}
.bar.css {{ background: #2965f1; }}
.bar.html {{ background: #e34c26; }}
</style>
</head>
<body>
<h1>Bundle report</h1>
<p>Directory <code>{dist}</code>: {count} assets, {total} total. Generated {generated}.</p>
<h2>By kind</h2>
<table>
<tr><th>Kind</th><th>Files</th><th>Size</th><th>Share</th></tr>
{kinds}</table>
<h2>Assets</h2>
<table>
<tr><th>Path</th><th>Kind</th><th>Size</th><th>Share</th><th></th></tr>
{rows}</table>
</body>
</html>
"#,
            dist = html_escape(&self.dist),
            count = self.assets.len(),
            total = format_size(self.total_size),
            generated = self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            kinds = kinds,
            rows = rows,
        )
    }
}

/// Scan `opts.dist` and write the report. Never opens a browser.
pub fn generate(opts: &ReportOptions) -> Result<Report> {
    let out = opts.report_path();
    let assets = assets::scan(&opts.dist, &opts.excluded_paths())?;
    if assets.is_empty() {
        return Err(ReportError::EmptyBundle(opts.dist.clone()));
    }

    let report = Report::from_assets(&opts.dist, assets);
    let body = match opts.mode {
        ReportMode::Static => report.to_html(),
        ReportMode::Json => report.to_json()?,
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out, body)?;

    info!(
        path = %out.display(),
        assets = report.assets.len(),
        total = %format_size(report.total_size),
        "Wrote bundle report"
    );
    Ok(report)
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str, size: u64) -> Asset {
        Asset {
            path: path.to_string(),
            size,
            kind: AssetKind::from_path(Path::new(path)),
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(1024 * 1024), "1.0 MiB");
    }

    #[test]
    fn test_default_report_path() {
        let mut opts = ReportOptions::new("dist");
        assert_eq!(opts.report_path(), PathBuf::from("dist/report.html"));

        opts.mode = ReportMode::Json;
        assert_eq!(opts.report_path(), PathBuf::from("dist/report.json"));

        opts.report = Some(PathBuf::from("out/size.html"));
        assert_eq!(opts.report_path(), PathBuf::from("out/size.html"));
    }

    #[test]
    fn test_excluded_paths_cover_every_mode() {
        let mut opts = ReportOptions::new("dist");
        opts.report = Some(PathBuf::from("out/size.html"));

        let excluded = opts.excluded_paths();
        assert!(excluded.contains(&PathBuf::from("out/size.html")));
        assert!(excluded.contains(&PathBuf::from("dist/report.html")));
        assert!(excluded.contains(&PathBuf::from("dist/report.json")));
    }

    #[test]
    fn test_summary_by_kind() {
        let report = Report::from_assets(
            Path::new("dist"),
            vec![
                asset("app_bg.wasm", 600),
                asset("app.js", 200),
                asset("vendor.js", 100),
                asset("index.html", 100),
            ],
        );

        assert_eq!(report.total_size, 1000);
        assert_eq!(
            report.by_kind,
            vec![
                KindSummary { kind: AssetKind::Wasm, count: 1, size: 600 },
                KindSummary { kind: AssetKind::Js, count: 2, size: 300 },
                KindSummary { kind: AssetKind::Html, count: 1, size: 100 },
            ]
        );
        assert!((report.share(300) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_html_escapes_paths() {
        let report = Report::from_assets(Path::new("dist"), vec![asset("<odd>&name.js", 10)]);
        let html = report.to_html();
        assert!(html.contains("&lt;odd&gt;&amp;name.js"));
        assert!(!html.contains("<odd>"));
    }

    #[test]
    fn test_json_lists_assets() {
        let report = Report::from_assets(Path::new("dist"), vec![asset("app_bg.wasm", 42)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["total_size"], 42);
        assert_eq!(json["assets"][0]["path"], "app_bg.wasm");
        assert_eq!(json["assets"][0]["kind"], "wasm");
    }
}
