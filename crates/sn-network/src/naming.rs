//! Splitting an intersection description into its two cross streets.
//!
//! The first street is the north–south road (NB/SB legs), the second the
//! east–west road (EB/WB legs).  A description with no recognised separator
//! is not an error: the street names simply stay unset and render blank.

/// Separator phrases, tried in order.  Matching is case-insensitive.
pub const SEPARATORS: [&str; 4] = [" and ", " & ", " at ", " @ "];

/// Street names parsed from an intersection description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetNames {
    /// North–south street.
    pub street1:  Option<String>,
    /// East–west street.
    pub street2:  Option<String>,
    /// Trailing location, e.g. `"Novi, Michigan"`.
    pub location: Option<String>,
}

impl StreetNames {
    pub fn is_parsed(&self) -> bool {
        self.street1.is_some() || self.street2.is_some()
    }

    /// Street carried by links labelled with a north/south direction.
    pub fn north_south(&self) -> &str {
        self.street1.as_deref().unwrap_or("")
    }

    /// Street carried by links labelled with an east/west direction.
    pub fn east_west(&self) -> &str {
        self.street2.as_deref().unwrap_or("")
    }
}

/// Parse `name` into its cross streets and optional location suffix.
///
/// ```
/// use sn_network::parse_intersection_name;
///
/// let s = parse_intersection_name("Haggerty Road and 10 Mile Road, Novi, Michigan");
/// assert_eq!(s.street1.as_deref(), Some("Haggerty Road"));
/// assert_eq!(s.street2.as_deref(), Some("10 Mile Road"));
/// assert_eq!(s.location.as_deref(), Some("Novi, Michigan"));
/// ```
pub fn parse_intersection_name(name: &str) -> StreetNames {
    // ASCII lowercasing keeps byte offsets aligned with `name`.
    let lower = name.to_ascii_lowercase();

    for sep in SEPARATORS {
        let Some(pos) = lower.find(sep) else {
            continue;
        };
        let (first, rest) = (&name[..pos], &name[pos + sep.len()..]);
        let (street1, loc1) = split_location(first);
        let (street2, loc2) = split_location(rest);
        return StreetNames {
            street1:  Some(street1),
            street2:  Some(street2),
            location: loc2.or(loc1),
        };
    }

    StreetNames::default()
}

/// `"1st Ave, City, State"` → `("1st Ave", Some("City, State"))`.
fn split_location(part: &str) -> (String, Option<String>) {
    let mut pieces = part.trim().split(',').map(str::trim);
    let street = pieces.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = pieces.collect();
    let location = (!rest.is_empty()).then(|| rest.join(", "));
    (street, location)
}
