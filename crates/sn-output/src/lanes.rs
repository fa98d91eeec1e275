//! `[Lanes]` section: one block of lane-group rows per intersection.
//!
//! Each row holds twelve movement cells (`NBL NBT NBR … WBL WBT WBR`)
//! followed by blank `PED` and `HOLD` cells.  Only a handful of rows depend
//! on the network (node ids, lane counts, speeds, inbound link length); the
//! rest are the fixed engineering defaults the consuming software expects.
//! An approach that a corridor merge absorbed renders all three of its
//! cells blank.

use sn_core::{Direction, NodeId};
use sn_network::{movements, ApproachSpec, Intersection, Link, Network, Turn};

use crate::row::{push_row, push_separator, push_title};

const LANE_WIDTH: usize = 16;

const LANE_HEADER: [&str; 16] = [
    "RECORDNAME", "INTID",
    "NBL", "NBT", "NBR", "SBL", "SBT", "SBR",
    "EBL", "EBT", "EBR", "WBL", "WBT", "WBR",
    "PED", "HOLD",
];

/// Row names, in output order.
const LANE_ROWS: [&str; 46] = [
    "Up Node", "Dest Node", "Lanes", "Shared", "Width", "Storage", "Taper",
    "StLanes", "Grade", "Speed", "FirstDetect", "LastDetect", "Phase1",
    "PermPhase1", "LostTime", "Lost Time Adjust", "IdealFlow", "SatFlow",
    "SatFlowPerm", "Allow RTOR", "SatFlowRTOR", "Volume", "Peds", "Bicycles",
    "PHF", "Growth", "HeavyVehicles", "BusStops", "Midblock", "Distance",
    "TravelTime", "Right Channeled", "Right Radius", "Add Lanes", "Alignment",
    "Enter Blocked", "HeadwayFact", "Turning Speed", "Lane Util",
    "DetectPhase1", "Switch Phase", "numDetects", "DetectPos1", "DetectSize1",
    "DetectType1", "DetectExtend1",
];

/// Left-turn storage bay length in feet.
const LEFT_STORAGE_FT: u32 = 150;

/// One movement of one present approach.
struct LaneGroup<'a> {
    direction: Direction,
    turn:      Turn,
    up_node:   NodeId,
    dest:      Option<NodeId>,
    approach:  &'a ApproachSpec,
    /// Approach → center link, if it still exists.
    inbound:   Option<&'a Link>,
}

/// Standard dual-ring NEMA phase serving `turn` from `direction`.
pub(crate) fn nema_phase(direction: Direction, turn: Turn) -> u8 {
    match (direction, turn) {
        (Direction::NB, Turn::Left) => 5,
        (Direction::NB, _)          => 2,
        (Direction::SB, Turn::Left) => 1,
        (Direction::SB, _)          => 6,
        (Direction::EB, Turn::Left) => 7,
        (Direction::EB, _)          => 4,
        (Direction::WB, Turn::Left) => 3,
        (Direction::WB, _)          => 8,
    }
}

/// Pick the left/through/right value.
fn ltr(turn: Turn, left: &str, through: &str, right: &str) -> String {
    let value = match turn {
        Turn::Left    => left,
        Turn::Through => through,
        Turn::Right   => right,
    };
    value.to_string()
}

fn cell(row: &str, g: &LaneGroup<'_>) -> String {
    let shared = g.approach.right_turn_shared;
    match row {
        "Up Node"    => g.up_node.0.to_string(),
        "Dest Node"  => g.dest.map(|n| n.0.to_string()).unwrap_or_default(),
        "Lanes"      => match g.turn {
            Turn::Left    => "1".into(),
            Turn::Through => g.approach.lanes.to_string(),
            Turn::Right   => if shared { "0".into() } else { "1".into() },
        },
        "Shared"     => match g.turn {
            Turn::Through if shared => "2".into(),
            _ => "0".into(),
        },
        "Storage"    => match g.turn {
            Turn::Left => LEFT_STORAGE_FT.to_string(),
            Turn::Right if !shared => g.approach.right_turn_storage_ft.to_string(),
            _ => String::new(),
        },
        "Taper"      => ltr(g.turn, "25", "", "25"),
        "StLanes"    => match g.turn {
            Turn::Left => "1".into(),
            Turn::Right if !shared => "1".into(),
            _ => String::new(),
        },
        "Speed"      => g.approach.speed_mph.to_string(),
        "FirstDetect" => ltr(g.turn, "20", "100", "20"),
        "Phase1" | "DetectPhase1" => nema_phase(g.direction, g.turn).to_string(),
        "PermPhase1" | "Right Radius" => String::new(),
        "LostTime"   => "4".into(),
        "IdealFlow"  => "1900".into(),
        "SatFlow" | "SatFlowPerm" => ltr(g.turn, "1770", "3539", "1583"),
        "Allow RTOR" => ltr(g.turn, "", "", "1"),
        "SatFlowRTOR" | "Right Channeled" | "Add Lanes" => ltr(g.turn, "", "", "0"),
        "Volume"     => ltr(g.turn, "50", "300", "50"),
        "PHF"        => "0.92".into(),
        "Growth"     => "100".into(),
        "HeavyVehicles" => "2".into(),
        "Distance"   => match (g.turn, g.inbound) {
            (Turn::Through, Some(l)) => l.distance_ft.to_string(),
            _ => String::new(),
        },
        "TravelTime" => match (g.turn, g.inbound) {
            (Turn::Through, Some(l)) => format!("{:.1}", l.travel_time_secs()),
            _ => String::new(),
        },
        "Width"      => "12".into(),
        "HeadwayFact" => "1.00".into(),
        "Turning Speed" => ltr(g.turn, "15", "", "9"),
        "Lane Util"  => ltr(g.turn, "1.00", "0.95", "1.00"),
        "numDetects" => "1".into(),
        "DetectSize1" => ltr(g.turn, "20", "6", "20"),
        "DetectType1" => "3".into(),
        // Grade, LastDetect, Lost Time Adjust, Peds, Bicycles, BusStops,
        // Midblock, Alignment, Enter Blocked, Switch Phase, DetectPos1,
        // DetectExtend1
        _ => "0".into(),
    }
}

/// The twelve lane groups of `int` in column order; `None` for movements of
/// an approach the intersection no longer has.
fn lane_groups<'a>(network: &'a Network, int: &'a Intersection) -> Vec<Option<LaneGroup<'a>>> {
    let table = movements(int);
    let mut groups = Vec::with_capacity(12);
    for direction in Direction::ALL {
        let up = int.approach(direction);
        for turn in Turn::ALL {
            groups.push(up.map(|up_node| LaneGroup {
                direction,
                turn,
                up_node,
                dest:     table.get(direction).get(turn),
                approach: int.spec.approach(direction),
                inbound:  network.link_between(up_node, int.center),
            }));
        }
    }
    groups
}

pub(crate) fn push_lanes(out: &mut String, network: &Network) {
    push_title(out, "[Lanes]", "Lane Group Data");
    push_row(out, LANE_WIDTH, LANE_HEADER);

    let mut ints: Vec<&Intersection> = network.intersections().collect();
    ints.sort_by_key(|i| i.center);

    for int in ints {
        let id = int.center.0.to_string();
        let groups = lane_groups(network, int);
        for row in LANE_ROWS {
            let cells = groups
                .iter()
                .map(|g| g.as_ref().map(|g| cell(row, g)).unwrap_or_default());
            push_row(out, LANE_WIDTH, [row.to_string(), id.clone()].into_iter().chain(cells));
        }
    }
    push_separator(out);
}
