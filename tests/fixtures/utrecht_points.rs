//! Real Utrecht city-centre locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, closely spaced
//! urban locations of the kind the planner routes in production.

use collection_planner::point::PointRecord;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// City-centre container sites
// ============================================================================

pub const CENTRE_SITES: &[Location] = &[
    Location::new("Domplein", 52.0907374, 5.1214201),
    Location::new("Neude", 52.0930789, 5.1186700),
    Location::new("Vredenburg", 52.0935617, 5.1123051),
    Location::new("Janskerkhof", 52.0926067, 5.1210884),
    Location::new("Mariaplaats", 52.0895659, 5.1180356),
    Location::new("Stadhuisbrug", 52.0920066, 5.1185726),
    Location::new("Ledig Erf", 52.0832936, 5.1254391),
    Location::new("Wittevrouwen", 52.0948641, 5.1282040),
    Location::new("Lucasbolwerk", 52.0922790, 5.1262693),
    Location::new("Catharijnesingel", 52.0872292, 5.1150126),
    Location::new("Twijnstraat", 52.0851153, 5.1222363),
    Location::new("Breedstraat", 52.0948294, 5.1201497),
];

/// Builds eligible point records from the fixture sites, in listing order.
pub fn centre_records() -> Vec<PointRecord> {
    CENTRE_SITES
        .iter()
        .enumerate()
        .map(|(index, site)| PointRecord {
            id: format!("utc-{:02}", index + 1),
            location: site.name.to_string(),
            category: if index % 3 == 0 { "glass" } else { "general" }.to_string(),
            latitude: Some(site.lat),
            longitude: Some(site.lng),
            group_id: Some("centre".to_string()),
        })
        .collect()
}

/// A record with the given coordinates; `None` models an un-geocoded point.
pub fn record(id: &str, latitude: Option<f64>, longitude: Option<f64>) -> PointRecord {
    PointRecord {
        id: id.to_string(),
        location: format!("{} Teststraat", id),
        category: "general".to_string(),
        latitude,
        longitude,
        group_id: None,
    }
}

/// A record in the given collection group.
pub fn grouped_record(id: &str, group: &str, latitude: f64, longitude: f64) -> PointRecord {
    PointRecord {
        group_id: Some(group.to_string()),
        ..record(id, Some(latitude), Some(longitude))
    }
}
