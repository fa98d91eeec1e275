//! `synchro-gen` — build a Synchro network file for a list of intersections.
//!
//! ```text
//! synchro-gen specs.csv --connect 1:2 --out-dir out --email eng@example.com
//! ```
//!
//! Writes `{name}.txt` (tab-delimited UTDF) and `{name}.csv` into `--out-dir`.
//! Archiving and audit logging are optional and never fail the run.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod cli;

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;

use sn_core::GeneratorConfig;
use sn_geocode::{ArcGisGeocoder, Geocoder, TableGeocoder};
use sn_network::{load_specs_csv, Connections, Generation, IntersectionSpec, NetworkGenerator};
use sn_output::{
    archive_file_name, Archive, AuditLog, AuditRecord, CsvAuditLog, DirArchive, UtdfWriter,
};

use crate::cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let specs = load_specs_csv(&args.specs)
        .with_context(|| format!("loading intersection specs from {}", args.specs.display()))?;
    log::info!("loaded {} intersections from {}", specs.len(), args.specs.display());

    let connections = connections(&args, specs.len());
    let geocoder = geocoder(&args, &config)?;

    let generator = NetworkGenerator::new(config.clone(), geocoder);
    let generation = generator.generate(&specs, &connections);
    report(&generation, &specs);

    let writer = UtdfWriter::now();
    let names: Vec<String> = specs.iter().map(|s| s.name.clone()).collect();

    if generation.network.is_empty() {
        audit(&args, writer.scenario(), &names, None, "Failed: no intersections geocoded");
        bail!("no intersection could be geocoded; check the intersection names");
    }

    let base = args.name.clone().unwrap_or(config.output_base_name);
    let (txt, csv) = match writer.write_files(&generation.network, &args.out_dir, &base) {
        Ok(paths) => paths,
        Err(e) => {
            audit(&args, writer.scenario(), &names, None, &format!("Failed: {e}"));
            return Err(e).context("writing network files");
        }
    };
    println!("{}", txt.display());
    println!("{}", csv.display());

    let link = archive(&args, writer.scenario(), &txt, &base);
    audit(&args, writer.scenario(), &names, link, "Success");
    Ok(())
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(d) = args.approach_distance {
        config.approach_distance_ft = d;
    }
    config.validate()?;
    Ok(config)
}

/// Connections from `--connect`, dropping self-pairs and repeats with a
/// warning.  Numbers past the end of the specs file are kept; the merge step
/// ignores them like any unresolved index.
fn connections(args: &Args, spec_count: usize) -> Connections {
    let mut connections = Connections::new();
    for &(i, j) in &args.connections {
        if i.index() >= spec_count || j.index() >= spec_count {
            log::warn!("connection {}:{} refers past the {spec_count} specs", i.0 + 1, j.0 + 1);
        }
        if !connections.add(i, j) {
            log::warn!("connection {}:{} is a self-pair or duplicate; skipped", i.0 + 1, j.0 + 1);
        }
    }
    connections
}

fn geocoder(args: &Args, config: &GeneratorConfig) -> Result<Box<dyn Geocoder>> {
    Ok(match &args.geocode_table {
        Some(path) => {
            let table = TableGeocoder::from_csv(path)
                .with_context(|| format!("loading geocode table {}", path.display()))?;
            log::info!("geocoding offline from {} ({} entries)", path.display(), table.len());
            Box::new(table)
        }
        None => {
            log::info!("geocoding via {}", config.geocoder_url);
            Box::new(ArcGisGeocoder::new(
                config.geocoder_url.clone(),
                Duration::from_secs(config.geocoder_timeout_secs),
            ))
        }
    })
}

fn report(generation: &Generation, specs: &[IntersectionSpec]) {
    let r = &generation.report;
    for (idx, name) in &r.dropped {
        log::warn!("intersection {} ({name:?}) was not found and is left out", idx.0 + 1);
    }
    log::info!(
        "{} of {} intersections placed, {} corridor merges ({} ignored), {} nodes",
        generation.network.intersection_count(),
        specs.len(),
        r.merges.merged(),
        r.merges.ignored(),
        generation.network.node_count(),
    );
}

// ── Best-effort side outputs ──────────────────────────────────────────────────

fn archive(args: &Args, at: NaiveDateTime, txt: &Path, base: &str) -> Option<String> {
    let dir = args.archive_dir.as_ref()?;
    let contents = match std::fs::read(txt) {
        Ok(c) => c,
        Err(e) => {
            log::error!("archive skipped: cannot read {}: {e}", txt.display());
            return None;
        }
    };
    let name = archive_file_name(&args.email, at, &format!("{base}.txt"));
    match DirArchive::new(dir).store(&name, &contents) {
        Ok(link) => {
            log::info!("archived to {link}");
            Some(link)
        }
        Err(e) => {
            log::error!("archive to {} failed: {e}", dir.display());
            None
        }
    }
}

fn audit(args: &Args, at: NaiveDateTime, names: &[String], link: Option<String>, status: &str) {
    let record = AuditRecord {
        timestamp:     at,
        email:         args.email.clone(),
        intersections: names.to_vec(),
        file_link:     link,
        status:        status.to_string(),
    };

    if let Some(path) = &args.audit_log {
        let result = CsvAuditLog::open(path).and_then(|mut sink| {
            sink.append(&record)?;
            sink.finish()
        });
        if let Err(e) = result {
            log::error!("audit log {} not updated: {e}", path.display());
        }
    }

    #[cfg(feature = "sqlite")]
    if let Some(path) = &args.audit_db {
        let result = sn_output::SqliteAuditLog::open(path).and_then(|mut sink| {
            sink.append(&record)?;
            sink.finish()
        });
        if let Err(e) = result {
            log::error!("audit db {} not updated: {e}", path.display());
        }
    }
}
