//! Unit tests for sn-geocode.  Nothing here touches the network.

#[cfg(test)]
mod table {
    use std::io::Cursor;

    use crate::{Geocoder, TableGeocoder};

    const TABLE_CSV: &str = "\
name,lat,lon,address
\"Main St and 1st Ave, City, State\",42.0,-83.0,\"Main St & 1st Ave\"
\"Main St and 2nd Ave, City, State\",42.0,-82.995,
";

    #[test]
    fn lookup_is_case_and_space_insensitive() {
        let g = TableGeocoder::new().with("Main St and 1st Ave", 42.0, -83.0);
        let hit = g.geocode("  main st AND 1st ave ").unwrap().unwrap();
        assert_eq!(hit.location.lat, 42.0);
        assert_eq!(hit.location.lon, -83.0);
    }

    #[test]
    fn miss_is_none_not_error() {
        let g = TableGeocoder::new();
        assert!(g.geocode("Nowhere").unwrap().is_none());
    }

    #[test]
    fn loads_csv() {
        let g = TableGeocoder::from_reader(Cursor::new(TABLE_CSV)).unwrap();
        assert_eq!(g.len(), 2);
        let first = g.geocode("Main St and 1st Ave, City, State").unwrap().unwrap();
        assert_eq!(first.address, "Main St & 1st Ave");
        // Empty address echoes the name.
        let second = g.geocode("Main St and 2nd Ave, City, State").unwrap().unwrap();
        assert_eq!(second.address, "Main St and 2nd Ave, City, State");
        assert_eq!(second.location.lon, -82.995);
    }

    #[test]
    fn bad_csv_is_table_error() {
        let bad = "name,lat,lon,address\nX,not-a-number,1,\n";
        let err = TableGeocoder::from_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, crate::GeocodeError::Table(_)));
    }

    #[test]
    fn usable_through_reference_and_box() {
        let g = TableGeocoder::new().with("A and B", 1.0, 2.0);
        let by_ref: &dyn Geocoder = &g;
        assert!(by_ref.geocode("a and b").unwrap().is_some());
        let boxed: Box<dyn Geocoder> = Box::new(g);
        assert!(boxed.geocode("A and B").unwrap().is_some());
    }
}

#[cfg(all(test, feature = "arcgis"))]
mod arcgis {
    use crate::arcgis::CandidatesResponse;

    #[test]
    fn first_candidate_wins() {
        let body = r#"{"candidates":[
            {"address":"Main St & 1st Ave","location":{"x":-83.0,"y":42.0},"score":100},
            {"address":"Other","location":{"x":0.0,"y":0.0},"score":50}
        ]}"#;
        let resp: CandidatesResponse = serde_json::from_str(body).unwrap();
        let hit = resp.first_hit().unwrap().unwrap();
        assert_eq!(hit.location.lat, 42.0);
        assert_eq!(hit.location.lon, -83.0);
        assert_eq!(hit.address, "Main St & 1st Ave");
    }

    #[test]
    fn no_candidates_is_none() {
        let resp: CandidatesResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(resp.first_hit().unwrap().is_none());
    }

    #[test]
    fn in_band_error_is_err() {
        let body = r#"{"error":{"code":498,"message":"Invalid token"}}"#;
        let resp: CandidatesResponse = serde_json::from_str(body).unwrap();
        assert!(resp.first_hit().is_err());
    }
}
