//! CSV registry loader.
//!
//! # CSV format
//!
//! One row per stop.  Anchors are percent offsets `[0, 100]` from the
//! top-left of the respective map asset.
//!
//! ```csv
//! id,title,short_title,lat,lon,trigger_radius_m,audio,land_x,land_y,port_x,port_y
//! 1,Begin audiotour,Stop 1,51.449560,5.494960,25,/audio/stop1.mp3,42.0,55.0,45.0,42.0
//! 2,Batterij & Proeftuin,Stop 2,51.450216,5.496373,25,/audio/stop2.mp3,61.0,48.0,52.0,61.0
//! ```
//!
//! Rows may appear in any order; [`StopRegistry::new`] sorts by ID and
//! enforces uniqueness and radius positivity.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tour_core::{GeoPoint, MapPoint, StopId};

use crate::{StopRegistry, StopsError, TourStop};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    id:               u32,
    title:            String,
    short_title:      String,
    lat:              f64,
    lon:              f64,
    trigger_radius_m: f64,
    audio:            String,
    land_x:           f64,
    land_y:           f64,
    port_x:           f64,
    port_y:           f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`StopRegistry`] from a CSV file.
pub fn load_stops_csv(path: &Path) -> Result<StopRegistry, StopsError> {
    let file = std::fs::File::open(path).map_err(StopsError::Io)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding the registry
/// in the binary as a string constant.
pub fn load_stops_reader<R: Read>(reader: R) -> Result<StopRegistry, StopsError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut stops = Vec::new();
    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| StopsError::Parse(e.to_string()))?;
        stops.push(TourStop {
            id:               StopId(row.id),
            title:            row.title,
            short_title:      row.short_title,
            location:         GeoPoint::new(row.lat, row.lon),
            trigger_radius_m: row.trigger_radius_m,
            audio:            row.audio,
            anchor_landscape: MapPoint::new(row.land_x, row.land_y),
            anchor_portrait:  MapPoint::new(row.port_x, row.port_y),
        });
    }

    StopRegistry::new(stops)
}
