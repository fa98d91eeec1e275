//! `[Timeplans]` and `[Phases]` sections.
//!
//! Every intersection gets the same pretimed starting point: a 90 s
//! dual-ring plan, phases 2 and 6 coordinated, left-turn phases (odd) split
//! 11 s and through phases (even) split 34 s.  Engineers retime in the
//! consuming software; these rows only have to load cleanly.

use sn_network::{Intersection, Network};

use crate::row::{push_row, push_separator, push_title};

const TIMEPLAN_WIDTH: usize = 9;
const PHASE_WIDTH: usize = 14;

/// `(row, value)`; `Node 0` is filled with the center id at render time.
const TIMEPLAN_ROWS: [(&str, &str); 9] = [
    ("Control Type",    "3"),
    ("Cycle Length",    "90"),
    ("Lock Timings",    "0"),
    ("Referenced To",   "0"),
    ("Reference Phase", "2"),
    ("Offset",          "0"),
    ("Master",          "0"),
    ("Yield",           "0"),
    ("Node 1",          "0"),
];

const START: [&str; 8] = ["0", "11", "45", "56", "0", "11", "45", "56"];
const END:   [&str; 8] = ["11", "45", "56", "0", "11", "45", "56", "0"];
/// End of green: phase end less yellow and all-red.
const YIELD: [&str; 8] = ["6.5", "40.5", "51.5", "85.5", "6.5", "40.5", "51.5", "85.5"];

/// `(row, D1..D8)`.
const PHASE_ROWS: [(&str, [&str; 8]); 23] = [
    ("BRP",              ["111", "112", "211", "212", "121", "122", "221", "222"]),
    ("MinGreen",         ["4"; 8]),
    ("MaxGreen",         ["6.5", "29.5", "6.5", "29.5", "6.5", "29.5", "6.5", "29.5"]),
    ("VehExt",           ["3"; 8]),
    ("TimeBeforeReduce", ["0"; 8]),
    ("TimeToReduce",     ["0"; 8]),
    ("MinGap",           ["3"; 8]),
    ("Yellow",           ["3.5"; 8]),
    ("AllRed",           ["1"; 8]),
    ("Recall",           ["0", "3", "0", "0", "0", "3", "0", "0"]),
    ("Walk",             ["", "7", "", "7", "", "7", "", "7"]),
    ("DontWalk",         ["", "11", "", "11", "", "11", "", "11"]),
    ("PedCalls",         ["0"; 8]),
    ("MinSplit",         ["9.5", "22.5", "9.5", "22.5", "9.5", "22.5", "9.5", "22.5"]),
    ("DualEntry",        ["0", "1", "0", "1", "0", "1", "0", "1"]),
    ("InhibitMax",       ["1"; 8]),
    ("Start",            START),
    ("End",              END),
    ("Yield",            YIELD),
    ("Yield170",         YIELD),
    ("LocalStart",       START),
    ("LocalYield",       YIELD),
    ("LocalYield170",    YIELD),
];

fn by_center(network: &Network) -> Vec<&Intersection> {
    let mut ints: Vec<&Intersection> = network.intersections().collect();
    ints.sort_by_key(|i| i.center);
    ints
}

pub(crate) fn push_timeplans(out: &mut String, network: &Network) {
    push_title(out, "[Timeplans]", "Timing Plan Settings");
    push_row(out, TIMEPLAN_WIDTH, ["RECORDNAME", "INTID", "DATA"]);
    for int in by_center(network) {
        let id = int.center.0.to_string();
        let id = id.as_str();
        for (name, value) in &TIMEPLAN_ROWS[..8] {
            push_row(out, TIMEPLAN_WIDTH, [*name, id, *value]);
        }
        push_row(out, TIMEPLAN_WIDTH, ["Node 0", id, id]);
        let (name, value) = TIMEPLAN_ROWS[8];
        push_row(out, TIMEPLAN_WIDTH, [name, id, value]);
    }
    push_separator(out);
}

pub(crate) fn push_phases(out: &mut String, network: &Network) {
    push_title(out, "[Phases]", "Phasing Data");
    push_row(out, PHASE_WIDTH, ["RECORDNAME", "INTID", "D1", "D2", "D3", "D4", "D5", "D6", "D7", "D8"]);
    for int in by_center(network) {
        let id = int.center.0.to_string();
        for (name, values) in PHASE_ROWS {
            push_row(out, PHASE_WIDTH, [name, id.as_str()].into_iter().chain(values));
        }
    }
    push_separator(out);
}
