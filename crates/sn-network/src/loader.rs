//! CSV intersection-spec loader.
//!
//! # CSV format
//!
//! One row per intersection.  Only `name` is required; every per-direction
//! column may be omitted from the header or left blank, in which case the
//! [`ApproachSpec`] default applies (2 lanes, 30 mph, no TWLTL, shared right
//! turn, 150 ft storage).
//!
//! ```csv
//! name,nb_lanes,nb_speed,nb_twltl,nb_rt_shared,nb_rt_storage,sb_lanes,...
//! "Main St and 1st Ave, City, State",2,35,0,true,,2,35,0,false,200,...
//! ```
//!
//! `*_rt_shared` accepts `true/false`, `1/0`, or `yes/no`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sn_core::Direction;

use crate::spec::{ApproachSpec, IntersectionSpec};
use crate::{NetworkError, NetworkResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SpecRecord {
    name: String,

    nb_lanes:      Option<u32>,
    nb_speed:      Option<u32>,
    nb_twltl:      Option<u8>,
    nb_rt_shared:  Option<String>,
    nb_rt_storage: Option<u32>,

    sb_lanes:      Option<u32>,
    sb_speed:      Option<u32>,
    sb_twltl:      Option<u8>,
    sb_rt_shared:  Option<String>,
    sb_rt_storage: Option<u32>,

    eb_lanes:      Option<u32>,
    eb_speed:      Option<u32>,
    eb_twltl:      Option<u8>,
    eb_rt_shared:  Option<String>,
    eb_rt_storage: Option<u32>,

    wb_lanes:      Option<u32>,
    wb_speed:      Option<u32>,
    wb_twltl:      Option<u8>,
    wb_rt_shared:  Option<String>,
    wb_rt_storage: Option<u32>,
}

struct RawApproach<'a> {
    lanes:      Option<u32>,
    speed:      Option<u32>,
    twltl:      Option<u8>,
    rt_shared:  Option<&'a str>,
    rt_storage: Option<u32>,
}

impl SpecRecord {
    fn raw(&self, dir: Direction) -> RawApproach<'_> {
        match dir {
            Direction::NB => RawApproach {
                lanes: self.nb_lanes, speed: self.nb_speed, twltl: self.nb_twltl,
                rt_shared: self.nb_rt_shared.as_deref(), rt_storage: self.nb_rt_storage,
            },
            Direction::SB => RawApproach {
                lanes: self.sb_lanes, speed: self.sb_speed, twltl: self.sb_twltl,
                rt_shared: self.sb_rt_shared.as_deref(), rt_storage: self.sb_rt_storage,
            },
            Direction::EB => RawApproach {
                lanes: self.eb_lanes, speed: self.eb_speed, twltl: self.eb_twltl,
                rt_shared: self.eb_rt_shared.as_deref(), rt_storage: self.eb_rt_storage,
            },
            Direction::WB => RawApproach {
                lanes: self.wb_lanes, speed: self.wb_speed, twltl: self.wb_twltl,
                rt_shared: self.wb_rt_shared.as_deref(), rt_storage: self.wb_rt_storage,
            },
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate intersection specs from a CSV file, preserving row order.
pub fn load_specs_csv(path: &Path) -> NetworkResult<Vec<IntersectionSpec>> {
    let file = std::fs::File::open(path)?;
    load_specs_reader(file)
}

/// Like [`load_specs_csv`] but accepts any `Read` source.
pub fn load_specs_reader<R: Read>(reader: R) -> NetworkResult<Vec<IntersectionSpec>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut specs = Vec::new();

    for result in csv_reader.deserialize::<SpecRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let mut spec = IntersectionSpec::new(row.name.clone());
        for dir in Direction::ALL {
            spec.approaches[dir.column()] = approach_from_raw(&row.name, dir, row.raw(dir))?;
        }
        spec.validate()?;
        specs.push(spec);
    }

    log::debug!("loaded {} intersection specs", specs.len());
    Ok(specs)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn approach_from_raw(name: &str, dir: Direction, raw: RawApproach<'_>) -> NetworkResult<ApproachSpec> {
    let default = ApproachSpec::default();
    let right_turn_shared = match raw.rt_shared.map(str::trim).filter(|s| !s.is_empty()) {
        None => default.right_turn_shared,
        Some(s) => parse_flag(s).ok_or_else(|| NetworkError::InvalidSpec {
            name:   name.to_string(),
            reason: format!("{dir} rt_shared {s:?}: expected true/false, 1/0, or yes/no"),
        })?,
    };
    Ok(ApproachSpec {
        lanes:                 raw.lanes.unwrap_or(default.lanes),
        speed_mph:             raw.speed.unwrap_or(default.speed_mph),
        twltl:                 raw.twltl.unwrap_or(default.twltl),
        right_turn_shared,
        right_turn_storage_ft: raw.rt_storage.unwrap_or(default.right_turn_storage_ft),
    })
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
