//! UTDF document rendering.
//!
//! # Section order
//!
//! ```text
//! [Network]    global settings + scenario date/time
//! [Nodes]      one row per live node
//! [Links]      one 20-row block per upstream node
//! [Lanes]      one 46-row block per intersection        (see `lanes`)
//! [Timeplans]  one 10-row block per intersection        (see `timing`)
//! [Phases]     one 23-row block per intersection        (see `timing`)
//! ```
//!
//! Rendering is a pure function of the network and the scenario timestamp:
//! the same inputs always produce byte-identical text.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use sn_core::{Direction, NodeId};
use sn_network::{Link, Network};

use crate::lanes::push_lanes;
use crate::row::{push_row, push_separator, push_title, TITLE_WIDTH};
use crate::timing::{push_phases, push_timeplans};
use crate::OutputResult;

// ── Constants ─────────────────────────────────────────────────────────────────

const NETWORK_WIDTH: usize = TITLE_WIDTH;

/// `[Network]` settings written verbatim, in order.
const NETWORK_SETTINGS: [(&str, &str); 19] = [
    ("UTDFVERSION",        "8"),
    ("Metric",             "0"),
    ("yellowTime",         "3.5"),
    ("allRedTime",         "1"),
    ("Walk",               "7"),
    ("DontWalk",           "11"),
    ("HV",                 "0.02"),
    ("PHF",                "0.92"),
    ("DefWidth",           "12"),
    ("DefFlow",            "1900"),
    ("vehLength",          "25"),
    ("heavyvehlength",     "45"),
    ("criticalgap",        "4.5"),
    ("followuptime",       "2.5"),
    ("stopthresholdspeed", "5"),
    ("criticalmergegap",   "3.7"),
    ("growth",             "1"),
    ("PedSpeed",           "3.5"),
    ("LostTimeAdjust",     "0"),
];

const NODE_HEADER: [&str; 11] = [
    "INTID", "TYPE", "X", "Y", "Z", "DESCRIPTION", "CBD",
    "Inside Radius", "Outside Radius", "Roundabout Lanes", "Circle Speed",
];
const NODE_WIDTH: usize = 14;

const LINK_WIDTH: usize = 10;

/// Per-link rows whose four values never vary.
const LINK_FIXED_TAIL: [(&str, &str); 10] = [
    ("Crosswalk Width",       "16"),
    ("Mandatory Distance",    "200"),
    ("Mandatory Distance2",   "1320"),
    ("Positioning Distance",  "880"),
    ("Positioning Distance2", "1760"),
    ("Curve Pt X",            ""),
    ("Curve Pt Y",            ""),
    ("Curve Pt Z",            ""),
    ("Link Is Hidden",        "FALSE"),
    ("Street Name Is Hidden", "FALSE"),
];

// ── UtdfWriter ────────────────────────────────────────────────────────────────

/// Renders a [`Network`] as a UTDF text document.
///
/// The scenario timestamp is injected rather than read from the clock so
/// that output is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct UtdfWriter {
    scenario: NaiveDateTime,
}

impl UtdfWriter {
    pub fn new(scenario: NaiveDateTime) -> Self {
        Self { scenario }
    }

    /// A writer stamped with the local wall-clock time.
    pub fn now() -> Self {
        Self::new(chrono::Local::now().naive_local())
    }

    pub fn scenario(&self) -> NaiveDateTime {
        self.scenario
    }

    /// Render the complete six-section document.
    pub fn render(&self, network: &Network) -> String {
        let mut out = String::with_capacity(4_096 + network.node_count() * 1_024);
        self.push_network(&mut out);
        push_nodes(&mut out, network);
        push_links(&mut out, network);
        push_lanes(&mut out, network);
        push_timeplans(&mut out, network);
        push_phases(&mut out, network);
        out
    }

    /// Render and write `{base}.txt` (tab-delimited) and `{base}.csv`
    /// (comma-delimited) into `dir`.  Returns both paths.
    pub fn write_files(&self, network: &Network, dir: &Path, base: &str) -> OutputResult<(PathBuf, PathBuf)> {
        let doc = self.render(network);
        std::fs::create_dir_all(dir)?;
        let txt = dir.join(format!("{base}.txt"));
        let csv = dir.join(format!("{base}.csv"));
        std::fs::write(&txt, &doc)?;
        std::fs::write(&csv, to_csv_variant(&doc))?;
        log::info!("wrote {} and {}", txt.display(), csv.display());
        Ok((txt, csv))
    }

    fn push_network(&self, out: &mut String) {
        push_title(out, "[Network]", "Network Settings");
        push_row(out, NETWORK_WIDTH, ["RECORDNAME", "DATA"]);
        for (name, value) in NETWORK_SETTINGS {
            push_row(out, NETWORK_WIDTH, [name, value]);
        }
        let date = self.scenario.format("%m/%d/%Y").to_string();
        let time = self.scenario.format("%I:%M %p").to_string();
        push_row(out, NETWORK_WIDTH, ["ScenarioDate", date.as_str()]);
        push_row(out, NETWORK_WIDTH, ["ScenarioTime", time.as_str()]);
        push_separator(out);
    }
}

/// Comma-delimited variant of a rendered document: every tab becomes a
/// comma, nothing is re-derived or quoted.
pub fn to_csv_variant(doc: &str) -> String {
    doc.replace('\t', ",")
}

// ── [Nodes] ───────────────────────────────────────────────────────────────────

fn push_nodes(out: &mut String, network: &Network) {
    push_title(out, "[Nodes]", "Node Data");
    push_row(out, NODE_WIDTH, NODE_HEADER);
    for node in network.nodes().iter() {
        push_row(out, NODE_WIDTH, [
            node.id.0.to_string(),
            node.type_code().to_string(),
            node.pos.x.to_string(),
            node.pos.y.to_string(),
            node.pos.z.to_string(),
        ]);
    }
    push_separator(out);
}

// ── [Links] ───────────────────────────────────────────────────────────────────

/// Outbound links of every upstream node, by direction column.  A later
/// link with the same label replaces an earlier one.
fn links_by_upstream(network: &Network) -> BTreeMap<NodeId, [Option<&Link>; 4]> {
    let mut by_node: BTreeMap<NodeId, [Option<&Link>; 4]> = BTreeMap::new();
    for link in network.links() {
        by_node.entry(link.from).or_default()[link.direction.column()] = Some(link);
    }
    by_node
}

/// One cell per direction column, blank where the node has no such link.
fn column_cells(cols: &[Option<&Link>; 4], cell: impl Fn(Direction, &Link) -> String) -> [String; 4] {
    Direction::ALL.map(|d| cols[d.column()].map_or_else(String::new, |l| cell(d, l)))
}

fn push_link_row(out: &mut String, name: &str, id: &str, cells: &[String; 4]) {
    push_row(out, LINK_WIDTH, [name, id].into_iter().chain(cells.iter().map(String::as_str)));
}

fn push_links(out: &mut String, network: &Network) {
    push_title(out, "[Links]", "Link Data");
    push_row(out, LINK_WIDTH, ["RECORDNAME", "INTID", "NB", "SB", "EB", "WB"]);

    for (up, cols) in links_by_upstream(network) {
        let id = up.0.to_string();
        let id = id.as_str();
        let streets = network.streets_of(up);

        push_link_row(out, "Up ID", id, &column_cells(&cols, |_, l| l.to.0.to_string()));
        push_link_row(out, "Lanes", id, &column_cells(&cols, |_, l| l.lanes.to_string()));
        push_link_row(out, "Name", id, &column_cells(&cols, |d, _| {
            let name = match streets {
                Some(s) if d.is_north_south() => s.north_south(),
                Some(s) => s.east_west(),
                None => "",
            };
            name.to_string()
        }));
        push_link_row(out, "Distance", id, &column_cells(&cols, |_, l| l.distance_ft.to_string()));
        push_link_row(out, "Speed", id, &column_cells(&cols, |_, l| l.speed_mph.to_string()));
        push_link_row(out, "Time", id, &column_cells(&cols, |_, l| format!("{:.1}", l.travel_time_secs())));

        push_row(out, LINK_WIDTH, ["Grade", id, "0", "0", "0", "0"]);
        push_row(out, LINK_WIDTH, ["Median", id, "12", "12", "12", "12"]);
        push_row(out, LINK_WIDTH, ["Offset", id, "0", "0", "0", "0"]);
        push_link_row(out, "TWLTL", id, &column_cells(&cols, |_, l| l.twltl.to_string()));

        for (name, value) in LINK_FIXED_TAIL {
            push_row(out, LINK_WIDTH, [name, id, value, value, value, value]);
        }
    }
    push_separator(out);
}
