//! Unit tests for sn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IntersectionIdx, NodeId};

    #[test]
    fn first_is_one() {
        assert_eq!(NodeId::FIRST, NodeId(1));
    }

    #[test]
    fn ordering() {
        assert!(NodeId(9) < NodeId(10));
        assert!(IntersectionIdx(0) < IntersectionIdx(1));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(IntersectionIdx(3).to_string(), "IntersectionIdx(3)");
    }

    #[test]
    fn index_roundtrip() {
        let idx = IntersectionIdx::try_from(4usize).unwrap();
        assert_eq!(idx.index(), 4);
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn opposite_is_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::NB.opposite(), Direction::SB);
        assert_eq!(Direction::EB.opposite(), Direction::WB);
    }

    #[test]
    fn left_table() {
        assert_eq!(Direction::NB.left_of(), Direction::WB);
        assert_eq!(Direction::WB.left_of(), Direction::SB);
        assert_eq!(Direction::SB.left_of(), Direction::EB);
        assert_eq!(Direction::EB.left_of(), Direction::NB);
    }

    #[test]
    fn right_is_inverse_of_left() {
        for d in Direction::ALL {
            assert_eq!(d.left_of().right_of(), d);
            assert_eq!(d.right_of().left_of(), d);
        }
        assert_eq!(Direction::NB.right_of(), Direction::EB);
    }

    #[test]
    fn columns_follow_all() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.column(), i);
        }
    }

    #[test]
    fn offsets_lie_on_axes() {
        for d in Direction::ALL {
            let (dx, dy) = d.unit_offset();
            if d.is_north_south() {
                assert_eq!(dx, 0);
            } else {
                assert_eq!(dy, 0);
            }
        }
    }
}

#[cfg(test)]
mod geo {
    use crate::LocalPoint;

    #[test]
    fn midpoint_floors() {
        let a = LocalPoint::new(1500, 0);
        let b = LocalPoint::new(-148, 3);
        assert_eq!(a.midpoint(b), LocalPoint::new(676, 1));
        assert_eq!(LocalPoint::new(-1, 0).midpoint(LocalPoint::new(0, 0)).x, -1);
    }

    #[test]
    fn distance() {
        let a = LocalPoint::new(0, 0);
        let b = LocalPoint::new(300, 400);
        assert_eq!(a.distance_ft(b), 500.0);
    }
}

#[cfg(test)]
mod projection {
    use crate::{GeoPoint, LocalPoint, LocalProjector};

    #[test]
    fn first_point_is_origin() {
        let mut p = LocalProjector::default();
        assert!(p.origin().is_none());
        assert_eq!(p.project(GeoPoint::new(42.0, -83.0)), LocalPoint::ORIGIN);
        assert_eq!(p.project(GeoPoint::new(42.0, -83.0)), LocalPoint::ORIGIN);
        assert_eq!(p.origin(), Some(GeoPoint::new(42.0, -83.0)));
    }

    #[test]
    fn east_offset_scaled_by_latitude() {
        let mut p = LocalProjector::default();
        p.project(GeoPoint::new(42.0, -83.0));
        let q = p.project(GeoPoint::new(42.0, -82.995));
        // 0.005° * 364000 * cos(42°) ≈ 1352.5
        assert_eq!(q.x, 1352);
        assert_eq!(q.y, 0);
    }

    #[test]
    fn north_offset_truncates() {
        let mut p = LocalProjector::default();
        p.project(GeoPoint::new(42.0, -83.0));
        let q = p.project(GeoPoint::new(42.001, -83.0));
        assert_eq!(q.x, 0);
        assert!((363..=364).contains(&q.y), "got {}", q.y);
    }

    #[test]
    fn negative_offsets() {
        let mut p = LocalProjector::default();
        p.project(GeoPoint::new(42.0, -83.0));
        let q = p.project(GeoPoint::new(41.99, -83.01));
        assert!(q.x < 0 && q.y < 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{GeneratorConfig, SnError};

    #[test]
    fn defaults() {
        let c = GeneratorConfig::default();
        assert_eq!(c.approach_distance_ft, 1_500);
        assert_eq!(c.feet_per_degree, 364_000.0);
        assert_eq!(c.geocoder_timeout_secs, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: GeneratorConfig = serde_json::from_str(r#"{"approach_distance_ft": 1000}"#).unwrap();
        assert_eq!(c.approach_distance_ft, 1_000);
        assert_eq!(c.output_base_name, "synchro_network");
    }

    #[test]
    fn rejects_non_positive_distance() {
        let c = GeneratorConfig { approach_distance_ft: 0, ..GeneratorConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let c = GeneratorConfig { geocoder_timeout_secs: 0, ..GeneratorConfig::default() };
        assert!(matches!(c.validate(), Err(SnError::Config(_))));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"geocoder_timeout_secs": 3}"#).unwrap();
        let c = GeneratorConfig::from_json_file(&path).unwrap();
        assert_eq!(c.geocoder_timeout_secs, 3);
    }

    #[test]
    fn from_file_rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"geocoder_timeout_secs": 0}"#).unwrap();
        assert!(GeneratorConfig::from_json_file(&path).is_err());
    }
}
