//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use sn_core::IntersectionIdx;

#[derive(Parser, Debug)]
#[command(name = "synchro-gen", about = "Generate Synchro UTDF network files from intersection specs")]
pub struct Args {
    /// CSV of intersection specs (`name,nb_lanes,nb_speed,…`).
    pub specs: PathBuf,

    /// Merge the facing approaches of two intersections, numbered from 1 in
    /// spec order, e.g. `--connect 1:2`.  Repeatable.
    #[arg(long = "connect", value_name = "I:J", value_parser = parse_connection)]
    pub connections: Vec<(IntersectionIdx, IntersectionIdx)>,

    /// JSON generator config; missing fields take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Geocode from a `name,lat,lon,address` CSV instead of the ArcGIS service.
    #[arg(long, value_name = "CSV")]
    pub geocode_table: Option<PathBuf>,

    /// Approach stub length in feet (overrides the config file).
    #[arg(long, value_name = "FEET")]
    pub approach_distance: Option<i64>,

    /// Output directory for the `.txt` and `.csv` documents.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output base name (overrides the config file).
    #[arg(long)]
    pub name: Option<String>,

    /// User email recorded in the archive file name and the audit log.
    #[arg(long, default_value = "anonymous")]
    pub email: String,

    /// Keep a timestamped copy of each document in this directory.
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Append one row per run to this CSV file.
    #[arg(long, value_name = "CSV")]
    pub audit_log: Option<PathBuf>,

    /// Append one row per run to this SQLite database.
    #[cfg(feature = "sqlite")]
    #[arg(long, value_name = "DB")]
    pub audit_db: Option<PathBuf>,
}

/// `"1:2"` → `(IntersectionIdx(0), IntersectionIdx(1))`.
pub fn parse_connection(s: &str) -> Result<(IntersectionIdx, IntersectionIdx), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected I:J, got {s:?}"))?;
    Ok((parse_position(a)?, parse_position(b)?))
}

fn parse_position(s: &str) -> Result<IntersectionIdx, String> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("intersection number {s:?} is not a positive integer"))?;
    if n == 0 {
        return Err("intersection numbers start at 1".into());
    }
    Ok(IntersectionIdx(n - 1))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use sn_core::IntersectionIdx;

    use super::{parse_connection, Args};

    #[test]
    fn connection_is_one_based() {
        assert_eq!(parse_connection("1:2"), Ok((IntersectionIdx(0), IntersectionIdx(1))));
        assert_eq!(parse_connection(" 3 : 1 "), Ok((IntersectionIdx(2), IntersectionIdx(0))));
    }

    #[test]
    fn bad_connections() {
        assert!(parse_connection("12").is_err());
        assert!(parse_connection("0:1").is_err());
        assert!(parse_connection("a:b").is_err());
        assert!(parse_connection("-1:2").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "synchro-gen", "specs.csv",
            "--connect", "1:2", "--connect", "2:3",
            "--geocode-table", "table.csv",
            "--out-dir", "out",
            "--email", "eng@example.com",
        ])
        .unwrap();
        assert_eq!(args.specs.to_str(), Some("specs.csv"));
        assert_eq!(args.connections.len(), 2);
        assert_eq!(args.connections[1], (IntersectionIdx(1), IntersectionIdx(2)));
        assert!(args.geocode_table.is_some());
        assert!(args.archive_dir.is_none());
        assert_eq!(args.email, "eng@example.com");
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["synchro-gen", "specs.csv"]).unwrap();
        assert!(args.connections.is_empty());
        assert_eq!(args.out_dir.to_str(), Some("."));
        assert_eq!(args.email, "anonymous");
    }
}
