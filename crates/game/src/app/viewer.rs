use std::fs;
use std::io::Write;
use std::path::PathBuf;

use boxisle_engine::{
    load_level_document, CatalogEntry, Level, LevelCatalog, LevelFingerprint, RenderPlan,
    TileSelector,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use super::bootstrap::ViewerError;
use super::config::ViewerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewerSettings {
    pub(crate) config: ViewerConfig,
    pub(crate) levels_path: PathBuf,
    pub(crate) level_name: Option<String>,
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewerSummary {
    pub(crate) shown: usize,
    pub(crate) skipped: usize,
}

#[derive(Serialize)]
struct LevelReport<'a> {
    index: usize,
    name: &'a str,
    fingerprint: &'a LevelFingerprint,
    level: &'a Level,
    render_plan: RenderPlan,
}

#[derive(Serialize)]
struct SkippedReport<'a> {
    index: usize,
    name: &'a str,
    line: usize,
    error: String,
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    source: String,
    levels: Vec<LevelReport<'a>>,
    skipped: Vec<SkippedReport<'a>>,
}

pub(crate) fn run_viewer<W: Write>(
    settings: &ViewerSettings,
    out: &mut W,
) -> Result<ViewerSummary, ViewerError> {
    let document =
        fs::read_to_string(&settings.levels_path).map_err(|source| ViewerError::ReadLevels {
            path: settings.levels_path.clone(),
            source,
        })?;
    let options = settings.config.options;
    let catalog = load_level_document(&document, &options, settings.config.batch_policy)?;
    let shown = pick_entries(&catalog, settings)?;

    let mut rng = match settings.config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let selector = TileSelector::new(options.pillars);
    let mut reports = Vec::with_capacity(shown.len());
    for entry in &shown {
        let render_plan =
            selector
                .select(&entry.level, &mut rng)
                .map_err(|source| ViewerError::Select {
                    name: entry.name.clone(),
                    source,
                })?;
        reports.push(LevelReport {
            index: entry.index,
            name: &entry.name,
            fingerprint: &entry.fingerprint,
            level: &entry.level,
            render_plan,
        });
    }

    if settings.json {
        let report = DocumentReport {
            source: settings.levels_path.display().to_string(),
            levels: reports,
            skipped: catalog
                .failures()
                .iter()
                .map(|failure| SkippedReport {
                    index: failure.index,
                    name: &failure.name,
                    line: failure.line,
                    error: failure.error.to_string(),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for report in &reports {
            write_ascii(out, report)?;
        }
        for failure in catalog.failures() {
            writeln!(out, "skipped {failure}")?;
        }
    }

    let summary = ViewerSummary {
        shown: shown.len(),
        skipped: catalog.failures().len(),
    };
    info!(
        path = %settings.levels_path.display(),
        shown = summary.shown,
        skipped = summary.skipped,
        seed = ?settings.config.seed,
        "viewer_finished"
    );
    Ok(summary)
}

fn pick_entries<'a>(
    catalog: &'a LevelCatalog,
    settings: &ViewerSettings,
) -> Result<Vec<&'a CatalogEntry>, ViewerError> {
    match &settings.level_name {
        Some(name) => catalog
            .find_by_name(name)
            .map(|entry| vec![entry])
            .ok_or_else(|| ViewerError::LevelNotFound {
                name: name.clone(),
                path: settings.levels_path.clone(),
            }),
        None => Ok(catalog.entries().iter().collect()),
    }
}

fn write_ascii<W: Write>(out: &mut W, report: &LevelReport<'_>) -> Result<(), ViewerError> {
    let level = report.level;
    writeln!(
        out,
        "#{} {} [{}] {}x{} boxes={} layers={}",
        report.index,
        report.name,
        report.fingerprint.short(),
        level.columns(),
        level.rows(),
        level.box_positions().len(),
        report.render_plan.layer_count()
    )?;
    write!(out, "{}", level.to_ascii())?;
    writeln!(out)?;
    Ok(())
}
