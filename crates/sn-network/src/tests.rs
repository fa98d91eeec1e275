//! Unit tests for sn-network.
//!
//! All tests geocode through a `TableGeocoder`, so nothing touches the
//! network and coordinates are exact.

#[cfg(test)]
mod helpers {
    use sn_core::{GeneratorConfig, IntersectionIdx};
    use sn_geocode::TableGeocoder;

    use crate::{Connections, Generation, IntersectionSpec, NetworkGenerator};

    pub const FIRST:  &str = "Main St and 1st Ave, City, State";
    pub const SECOND: &str = "Main St and 2nd Ave, City, State";

    /// Two intersections ~1352 ft apart on an east–west line.
    pub fn corridor_geocoder() -> TableGeocoder {
        TableGeocoder::new()
            .with(FIRST, 42.0, -83.0)
            .with(SECOND, 42.0, -82.995)
    }

    pub fn idx(i: u32) -> IntersectionIdx {
        IntersectionIdx(i)
    }

    pub fn run(geocoder: TableGeocoder, names: &[&str], pairs: &[(u32, u32)]) -> Generation {
        let specs: Vec<IntersectionSpec> = names.iter().map(|n| IntersectionSpec::new(*n)).collect();
        let connections: Connections = pairs.iter().map(|&(i, j)| (idx(i), idx(j))).collect();
        NetworkGenerator::new(GeneratorConfig::default(), geocoder).generate(&specs, &connections)
    }
}

// ── Street-name parsing ───────────────────────────────────────────────────────

#[cfg(test)]
mod naming {
    use crate::parse_intersection_name;

    #[test]
    fn and_separator_with_location() {
        let s = parse_intersection_name("Main St and 1st Ave, City, State");
        assert_eq!(s.street1.as_deref(), Some("Main St"));
        assert_eq!(s.street2.as_deref(), Some("1st Ave"));
        assert_eq!(s.location.as_deref(), Some("City, State"));
    }

    #[test]
    fn separators_are_case_insensitive() {
        let s = parse_intersection_name("MAIN ST AND OAK AVE");
        assert_eq!(s.street1.as_deref(), Some("MAIN ST"));
        assert_eq!(s.street2.as_deref(), Some("OAK AVE"));
        assert!(s.location.is_none());
    }

    #[test]
    fn separator_priority_follows_list_order() {
        // " and " is tried before " & " even though " & " appears first.
        let s = parse_intersection_name("A & B and C");
        assert_eq!(s.street1.as_deref(), Some("A & B"));
        assert_eq!(s.street2.as_deref(), Some("C"));
    }

    #[test]
    fn other_separators() {
        for name in ["Elm @ Pine", "Elm at Pine", "Elm & Pine"] {
            let s = parse_intersection_name(name);
            assert_eq!(s.street1.as_deref(), Some("Elm"), "{name}");
            assert_eq!(s.street2.as_deref(), Some("Pine"), "{name}");
        }
    }

    #[test]
    fn second_part_location_wins() {
        let s = parse_intersection_name("Elm, Springfield and Pine, Shelbyville");
        assert_eq!(s.street1.as_deref(), Some("Elm"));
        assert_eq!(s.street2.as_deref(), Some("Pine"));
        assert_eq!(s.location.as_deref(), Some("Shelbyville"));
    }

    #[test]
    fn first_part_location_used_as_fallback() {
        let s = parse_intersection_name("Elm, Springfield and Pine");
        assert_eq!(s.location.as_deref(), Some("Springfield"));
    }

    #[test]
    fn no_separator_leaves_everything_unset() {
        let s = parse_intersection_name("Downtown Plaza, City, State");
        assert!(!s.is_parsed());
        assert!(s.street1.is_none() && s.street2.is_none() && s.location.is_none());
        assert_eq!(s.north_south(), "");
        assert_eq!(s.east_west(), "");
    }
}

// ── Specs and CSV loading ─────────────────────────────────────────────────────

#[cfg(test)]
mod specs {
    use std::io::Cursor;

    use sn_core::Direction;

    use crate::{load_specs_reader, ApproachSpec, IntersectionSpec, NetworkError};

    #[test]
    fn defaults_match_form_defaults() {
        let a = ApproachSpec::default();
        assert_eq!(a.lanes, 2);
        assert_eq!(a.speed_mph, 30);
        assert_eq!(a.twltl, 0);
        assert!(a.right_turn_shared);
        assert_eq!(a.right_turn_storage_ft, 150);
    }

    #[test]
    fn validate_rejects_zero_lanes() {
        let spec = IntersectionSpec::new("A and B").with_approach(Direction::EB, ApproachSpec::new(0, 30));
        assert!(matches!(spec.validate(), Err(NetworkError::InvalidSpec { .. })));
    }

    #[test]
    fn validate_rejects_bad_twltl() {
        let mut spec = IntersectionSpec::new("A and B");
        spec.approaches[0].twltl = 2;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn csv_with_partial_columns() {
        let csv = "\
name,nb_lanes,nb_speed,eb_twltl,wb_rt_shared,wb_rt_storage
\"Main St and 1st Ave, City, State\",3,45,1,no,220
Elm and Pine,,,,,
";
        let specs = load_specs_reader(Cursor::new(csv)).unwrap();
        assert_eq!(specs.len(), 2);

        let first = &specs[0];
        assert_eq!(first.name, "Main St and 1st Ave, City, State");
        assert_eq!(first.approach(Direction::NB).lanes, 3);
        assert_eq!(first.approach(Direction::NB).speed_mph, 45);
        assert_eq!(first.approach(Direction::SB).lanes, 2);
        assert_eq!(first.approach(Direction::EB).twltl, 1);
        assert!(!first.approach(Direction::WB).right_turn_shared);
        assert_eq!(first.approach(Direction::WB).right_turn_storage_ft, 220);

        assert_eq!(specs[1].approaches, [ApproachSpec::default(); 4]);
    }

    #[test]
    fn csv_bad_flag_is_invalid_spec() {
        let csv = "name,nb_rt_shared\nElm and Pine,maybe\n";
        let err = load_specs_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidSpec { .. }));
    }

    #[test]
    fn csv_non_numeric_is_parse_error() {
        let csv = "name,nb_lanes\nElm and Pine,two\n";
        let err = load_specs_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sn_core::{Direction, GeneratorConfig, GeoPoint, IntersectionIdx, LocalPoint, NodeId};

    use crate::{ApproachSpec, IntersectionSpec, NetworkBuilder, NodeKind};

    fn single() -> crate::Network {
        let spec = IntersectionSpec::new("Main St and 1st Ave")
            .with_approach(Direction::NB, ApproachSpec::new(3, 45).with_twltl(true))
            .with_approach(Direction::SB, ApproachSpec::new(1, 25));
        let mut b = NetworkBuilder::new(&GeneratorConfig::default());
        b.add_intersection(IntersectionIdx(0), spec, GeoPoint::new(42.0, -83.0), "addr");
        b.build()
    }

    #[test]
    fn ids_follow_creation_order() {
        let net = single();
        let ids: Vec<u32> = net.nodes().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(net.node(NodeId(1)).unwrap().is_center());
        let dirs: Vec<_> = (2..=5).map(|i| net.node(NodeId(i)).unwrap().direction().unwrap()).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn approach_positions() {
        let net = single();
        let pos = |i| net.node(NodeId(i)).unwrap().pos;
        assert_eq!(pos(1), LocalPoint::ORIGIN);
        assert_eq!(pos(2), LocalPoint::new(0, 1500));
        assert_eq!(pos(3), LocalPoint::new(0, -1500));
        assert_eq!(pos(4), LocalPoint::new(1500, 0));
        assert_eq!(pos(5), LocalPoint::new(-1500, 0));
    }

    #[test]
    fn inbound_uses_own_spec_outbound_uses_opposite() {
        let net = single();
        let nb_in = net.link_between(NodeId(2), NodeId(1)).unwrap();
        assert_eq!(nb_in.direction, Direction::NB);
        assert_eq!((nb_in.lanes, nb_in.speed_mph, nb_in.twltl), (3, 45, 1));

        let nb_out = net.link_between(NodeId(1), NodeId(2)).unwrap();
        assert_eq!(nb_out.direction, Direction::SB);
        assert_eq!((nb_out.lanes, nb_out.speed_mph, nb_out.twltl), (1, 25, 0));

        assert!(net.links().iter().all(|l| l.distance_ft == 1500));
    }

    #[test]
    fn center_carries_streets_and_geo() {
        let net = single();
        let center = net.node(NodeId(1)).unwrap();
        let NodeKind::Center(info) = &center.kind else { panic!("not a center") };
        assert_eq!(info.streets.street1.as_deref(), Some("Main St"));
        assert_eq!(info.geo, GeoPoint::new(42.0, -83.0));
        assert_eq!(info.address, "addr");
        assert_eq!(net.streets_of(NodeId(4)).unwrap().east_west(), "1st Ave");
    }

    #[test]
    fn custom_approach_distance() {
        let config = GeneratorConfig { approach_distance_ft: 800, ..GeneratorConfig::default() };
        let mut b = NetworkBuilder::new(&config);
        b.add_intersection(IntersectionIdx(0), IntersectionSpec::new("A and B"), GeoPoint::new(0.0, 0.0), "");
        let net = b.build();
        assert_eq!(net.node(NodeId(4)).unwrap().pos, LocalPoint::new(800, 0));
    }

    #[test]
    fn travel_time() {
        let net = single();
        let l = net.link_between(NodeId(2), NodeId(1)).unwrap();
        // 1500 ft at 45 mph ≈ 22.7 s
        assert!((l.travel_time_secs() - 22.727).abs() < 0.01);
    }
}

// ── Node arena ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arena {
    use sn_core::{Direction, LocalPoint, NodeId};

    use crate::{NodeArena, NodeKind};

    #[test]
    fn allocation_starts_at_first_id() {
        let mut a = NodeArena::new();
        assert_eq!(a.next_id(), NodeId::FIRST);
        let k = NodeKind::Approach { direction: Direction::SB, center: NodeId::FIRST };
        assert_eq!(a.alloc(LocalPoint::ORIGIN, k), NodeId::FIRST);
        assert_eq!(a.next_id(), NodeId(2));
        assert!(a.get(NodeId::FIRST).is_some());
    }

    #[test]
    fn removal_leaves_tombstone() {
        let mut a = NodeArena::new();
        let k = NodeKind::Approach { direction: Direction::NB, center: NodeId(1) };
        let n1 = a.alloc(LocalPoint::ORIGIN, k.clone());
        let n2 = a.alloc(LocalPoint::ORIGIN, k.clone());
        assert!(a.remove(n1).is_some());
        assert!(a.remove(n1).is_none());
        assert_eq!(a.len(), 1);
        assert_eq!(a.allocated(), 2);
        assert!(!a.contains(n1));
        assert!(a.contains(n2));
        // Ids are never reused.
        assert_eq!(a.alloc(LocalPoint::ORIGIN, k), NodeId(3));
    }

    #[test]
    fn zero_id_is_never_live() {
        let a = NodeArena::new();
        assert!(a.get(NodeId(0)).is_none());
    }
}

// ── Corridor merge ────────────────────────────────────────────────────────────

#[cfg(test)]
mod merge {
    use sn_core::{Direction, LocalPoint, NodeId};
    use sn_geocode::TableGeocoder;

    use super::helpers::{corridor_geocoder, idx, run, FIRST, SECOND};
    use crate::merge::facing_directions;
    use crate::MergeOutcome;

    #[test]
    fn corridor_scenario() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 1)]);
        let net = &g.network;
        assert_eq!(net.node_count(), 9);
        assert_eq!(
            g.report.merges.outcomes[0].1,
            MergeOutcome::Merged { kept: NodeId(4), removed: NodeId(10) }
        );

        // East–west: the first intersection's EB approach survives.
        let kept = net.node(NodeId(4)).unwrap();
        assert_eq!(kept.direction(), Some(Direction::EB));
        assert_eq!(kept.pos, LocalPoint::new(676, 0));
        assert!(net.node(NodeId(10)).is_none());

        let touching: Vec<_> = net.links().iter().filter(|l| l.touches(NodeId(4))).collect();
        assert_eq!(touching.len(), 4);
        for l in touching {
            assert!(l.distance_ft < 1500, "{l:?}");
            assert_eq!(l.distance_ft, 676);
        }
    }

    #[test]
    fn merged_links_keep_spec_values() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 1)]);
        let l = g.network.link_between(NodeId(4), NodeId(6)).unwrap();
        assert_eq!(l.direction, Direction::WB);
        assert_eq!((l.lanes, l.speed_mph), (2, 30));
    }

    #[test]
    fn no_dangling_references() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 1)]);
        let net = &g.network;
        for l in net.links() {
            assert_ne!(l.from, NodeId(10));
            assert_ne!(l.to, NodeId(10));
            assert!(net.node(l.from).is_some() && net.node(l.to).is_some());
        }
    }

    #[test]
    fn absorbed_leg_is_cleared() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 1)]);
        let second = g.network.intersection(idx(1)).unwrap();
        assert!(second.approach(Direction::WB).is_none());
        assert!(!second.is_full());
        assert!(g.network.intersection(idx(0)).unwrap().is_full());
    }

    #[test]
    fn reversed_connection_keeps_first_named() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(1, 0)]);
        // Second intersection is "first" here; it lies east, so its WB leg
        // (node 10) survives and the other's EB leg (node 4) goes.
        assert_eq!(
            g.report.merges.outcomes[0].1,
            MergeOutcome::Merged { kept: NodeId(10), removed: NodeId(4) }
        );
        assert_eq!(g.network.node(NodeId(10)).unwrap().pos, LocalPoint::new(676, 0));
    }

    #[test]
    fn unknown_index_is_noop() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 7)]);
        assert_eq!(g.network.node_count(), 10);
        assert_eq!(g.report.merges.outcomes[0].1, MergeOutcome::UnknownIntersection(idx(7)));
    }

    #[test]
    fn dropped_index_is_noop() {
        let g = run(corridor_geocoder(), &[FIRST, "Nowhere and Nothing", SECOND], &[(0, 1), (0, 2)]);
        assert_eq!(g.report.dropped.len(), 1);
        assert_eq!(g.report.merges.merged(), 1);
        assert_eq!(g.report.merges.ignored(), 1);
        assert_eq!(g.network.node_count(), 9);
    }

    #[test]
    fn self_and_duplicate_connections_rejected() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(g.report.merges.outcomes.len(), 1);
        assert_eq!(g.network.node_count(), 9);
    }

    #[test]
    fn north_south_merge() {
        let geocoder = TableGeocoder::new()
            .with("A and B", 42.0, -83.0)
            .with("A and C", 42.001, -83.0);
        let g = run(geocoder, &["A and B", "A and C"], &[(0, 1)]);
        // Second lies north: first's NB (2) keeps, second's SB (8) goes.
        assert_eq!(
            g.report.merges.outcomes[0].1,
            MergeOutcome::Merged { kept: NodeId(2), removed: NodeId(8) }
        );
        assert!(g.network.intersection(idx(1)).unwrap().approach(Direction::SB).is_none());
    }

    #[test]
    fn axis_selection_and_ties() {
        let o = LocalPoint::ORIGIN;
        assert_eq!(facing_directions(o, LocalPoint::new(100, 10)), (Direction::EB, Direction::WB));
        assert_eq!(facing_directions(o, LocalPoint::new(-100, 10)), (Direction::WB, Direction::EB));
        assert_eq!(facing_directions(o, LocalPoint::new(10, 100)), (Direction::NB, Direction::SB));
        assert_eq!(facing_directions(o, LocalPoint::new(10, -100)), (Direction::SB, Direction::NB));
        // |Δx| == |Δy| resolves north–south.
        assert_eq!(facing_directions(o, LocalPoint::new(50, 50)), (Direction::NB, Direction::SB));
    }

    #[test]
    fn coincident_centers_keep_positive_length() {
        let geocoder = TableGeocoder::new().with("A and B", 42.0, -83.0).with("C and D", 42.0, -83.0);
        let g = run(geocoder, &["A and B", "C and D"], &[(0, 1)]);
        assert!(g.network.links().iter().all(|l| l.distance_ft > 0));
    }
}

// ── Turning movements ─────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use sn_core::{Direction, NodeId};

    use super::helpers::{corridor_geocoder, idx, run, FIRST, SECOND};
    use crate::{movements, Turn};

    #[test]
    fn full_intersection() {
        let g = run(corridor_geocoder(), &[FIRST], &[]);
        let table = movements(g.network.intersection(idx(0)).unwrap());
        // Approaches: NB=2, SB=3, EB=4, WB=5.
        let nb = table.get(Direction::NB);
        assert_eq!(nb.through, Some(NodeId(3)));
        assert_eq!(nb.left, Some(NodeId(5)));
        assert_eq!(nb.right, Some(NodeId(4)));
        let eb = table.get(Direction::EB);
        assert_eq!(eb.get(Turn::Through), Some(NodeId(5)));
        assert_eq!(eb.get(Turn::Left), Some(NodeId(2)));
        assert_eq!(eb.get(Turn::Right), Some(NodeId(3)));
    }

    #[test]
    fn through_is_always_opposite_approach() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[]);
        for int in g.network.intersections() {
            let table = movements(int);
            for (d, m) in table.iter() {
                assert_eq!(m.through, int.approach(d.opposite()));
            }
        }
    }

    #[test]
    fn merged_leg_leaves_gaps() {
        let g = run(corridor_geocoder(), &[FIRST, SECOND], &[(0, 1)]);
        let table = movements(g.network.intersection(idx(1)).unwrap());
        assert_eq!(table.get(Direction::EB).through, None);
        assert_eq!(table.get(Direction::NB).left, None);
        assert_eq!(table.get(Direction::SB).right, None);
        assert!(table.get(Direction::SB).through.is_some());
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use sn_core::{GeneratorConfig, GeoPoint, LocalPoint, NodeId};
    use sn_geocode::{GeocodeError, GeocodeHit, GeocodeResult, Geocoder, TableGeocoder};

    use super::helpers::{corridor_geocoder, idx, run, FIRST, SECOND};
    use crate::{Connections, IntersectionSpec, NetworkGenerator};

    struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn geocode(&self, _query: &str) -> GeocodeResult<Option<GeocodeHit>> {
            Err(GeocodeError::Status(503))
        }
    }

    #[test]
    fn first_hit_is_origin() {
        let g = run(corridor_geocoder(), &[SECOND, FIRST], &[]);
        assert_eq!(g.network.node(NodeId(1)).unwrap().pos, LocalPoint::ORIGIN);
        let center = g.network.node(NodeId(1)).unwrap().center_info().unwrap();
        assert_eq!(center.geo, GeoPoint::new(42.0, -82.995));
    }

    #[test]
    fn misses_are_dropped_and_indices_kept() {
        let g = run(corridor_geocoder(), &["Nowhere", FIRST], &[]);
        assert_eq!(g.report.requested, 2);
        assert_eq!(g.report.built, vec![idx(1)]);
        assert_eq!(g.report.dropped, vec![(idx(0), "Nowhere".to_string())]);
        assert!(g.network.intersection(idx(0)).is_none());
        assert_eq!(g.network.intersection(idx(1)).unwrap().center, NodeId(1));
        assert_eq!(g.network.node_count(), 5);
    }

    #[test]
    fn transport_errors_count_as_misses() {
        let specs = vec![IntersectionSpec::new(FIRST)];
        let g = NetworkGenerator::new(GeneratorConfig::default(), FailingGeocoder)
            .generate(&specs, &Connections::new());
        assert!(g.network.is_empty());
        assert_eq!(g.report.dropped.len(), 1);
    }

    #[test]
    fn unparseable_name_keeps_lane_data() {
        let geocoder = TableGeocoder::new().with("Downtown Plaza, City, State", 42.0, -83.0);
        let g = run(geocoder, &["Downtown Plaza, City, State"], &[]);
        let net = &g.network;
        let streets = net.streets_of(NodeId(1)).unwrap();
        assert!(streets.street1.is_none() && streets.street2.is_none());
        assert_eq!(net.link_count(), 8);
        assert!(net.links().iter().all(|l| l.lanes == 2 && l.speed_mph == 30));
    }

    #[test]
    fn runs_are_independent() {
        let generator = NetworkGenerator::new(GeneratorConfig::default(), corridor_geocoder());
        let specs = vec![IntersectionSpec::new(SECOND)];
        let a = generator.generate(&specs, &Connections::new());
        let b = generator.generate(&specs, &Connections::new());
        // Each run starts its own id counter and origin.
        assert_eq!(a.network.node(NodeId(1)).unwrap().pos, LocalPoint::ORIGIN);
        assert_eq!(b.network.node(NodeId(1)).unwrap().pos, LocalPoint::ORIGIN);
    }
}

// ── Randomized invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use sn_core::{GeneratorConfig, IntersectionIdx};
    use sn_geocode::TableGeocoder;

    use crate::{Connections, IntersectionSpec, NetworkGenerator};

    fn random_batch(rng: &mut SmallRng, n: usize) -> (TableGeocoder, Vec<IntersectionSpec>, usize) {
        let mut geocoder = TableGeocoder::new();
        let mut specs = Vec::with_capacity(n);
        let mut resolvable = 0;
        for i in 0..n {
            let name = format!("Street {i} and Avenue {i}");
            // About one in five names does not resolve.
            if rng.gen_range(0..5) != 0 {
                let lat = 42.0 + rng.gen_range(-0.02..0.02);
                let lon = -83.0 + rng.gen_range(-0.02..0.02);
                geocoder = geocoder.with(&name, lat, lon);
                resolvable += 1;
            }
            specs.push(IntersectionSpec::new(name));
        }
        (geocoder, specs, resolvable)
    }

    #[test]
    fn five_nodes_per_intersection_without_merges() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let n = rng.gen_range(1..12);
            let (geocoder, specs, resolvable) = random_batch(&mut rng, n);
            let g = NetworkGenerator::new(GeneratorConfig::default(), geocoder)
                .generate(&specs, &Connections::new());
            let net = &g.network;
            assert_eq!(net.node_count(), 5 * resolvable);
            for int in net.intersections() {
                assert_eq!(net.links_from(int.center).count(), 4);
                assert_eq!(net.links_to(int.center).count(), 4);
            }
        }
    }

    #[test]
    fn each_merge_removes_exactly_one_node() {
        let mut rng = SmallRng::seed_from_u64(29);
        for _ in 0..20 {
            let n = rng.gen_range(2..10);
            let (geocoder, specs, resolvable) = random_batch(&mut rng, n);
            let mut connections = Connections::new();
            for _ in 0..n {
                let i = rng.gen_range(0..n + 2) as u32;
                let j = rng.gen_range(0..n + 2) as u32;
                connections.add(IntersectionIdx(i), IntersectionIdx(j));
            }
            let g = NetworkGenerator::new(GeneratorConfig::default(), geocoder)
                .generate(&specs, &connections);
            let net = &g.network;

            assert_eq!(net.node_count(), 5 * resolvable - g.report.merges.merged());
            for l in net.links() {
                assert!(net.node(l.from).is_some(), "dangling from {:?}", l);
                assert!(net.node(l.to).is_some(), "dangling to {:?}", l);
                assert!(l.distance_ft > 0 && l.speed_mph > 0);
            }
        }
    }
}
