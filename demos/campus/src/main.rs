//! campus — smallest runnable demo of the tour engine workspace.
//!
//! Walks a synthetic visitor along an eight-stop university campus route:
//! GPS fixes arrive every few seconds, notifications fire as geofences are
//! entered, opened stops are marked visited, and progress persists to a JSON
//! file so re-running against the same file resumes the tour.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;

use tour_core::{GeoPoint, Orientation, StopId, Timestamp};
use tour_engine::{ClearReason, TourController, TourObserver};
use tour_map::MapBounds;
use tour_progress::JsonStore;
use tour_proximity::ProximitySet;
use tour_stops::load_stops_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const FIX_INTERVAL_MS: u64 = 5_000; // one GPS fix every 5 s

// Geographic rectangle covered by the campus map asset.
const MAP_NORTH: f64 = 51.4520;
const MAP_SOUTH: f64 = 51.4440;
const MAP_WEST:  f64 = 5.4880;
const MAP_EAST:  f64 = 5.5000;

// ── Stop registry ─────────────────────────────────────────────────────────────

// Eight stops across the campus, 25 m geofences.  Anchors are calibrated
// percent positions on the landscape asset and on the portrait asset (the
// landscape one rotated a quarter-turn clockwise).
const STOPS_CSV: &str = "\
id,title,short_title,lat,lon,trigger_radius_m,audio,land_x,land_y,port_x,port_y
1,Begin audiotour,Stop 1,51.44956011298008,5.4949600537464685,25,/audio/stop1.mp3,58.0,30.5,69.5,58.0
2,Batterij & Proeftuin,Stop 2,51.45021598420962,5.496372603037956,25,/audio/stop2.mp3,69.8,22.3,77.7,69.8
3,Woontorens,Stop 3,51.450425498630175,5.49272101284826,25,/audio/stop3.mp3,39.3,19.7,80.3,39.3
4,Koeltorens en WKO-systeem,Stop 4,51.44666334838292,5.495005135106835,25,/audio/stop4.mp3,58.4,66.7,33.3,58.4
5,Zonnepark,Stop 5,51.45115,5.49095,25,/audio/stop5.mp3,24.6,10.6,89.4,24.6
6,Warmtepompen,Stop 6,51.45052,5.49405,25,/audio/stop6.mp3,50.4,18.5,81.5,50.4
7,Hoofdgebouw,Stop 7,51.44832,5.49310,25,/audio/stop7.mp3,42.5,46.0,54.0,42.5
8,Einde audiotour,Stop 8,51.44905,5.49550,25,/audio/stop8.mp3,62.5,36.9,63.1,62.5
";

// ── Scripted walk ─────────────────────────────────────────────────────────────

// Fixes roughly every 40 m along the route: start → stop 1 → stop 2 →
// stop 6 → stop 3 → stop 8, with a short GPS dropout in the middle.
const WALK: &[Option<(f64, f64)>] = &[
    Some((51.44920, 5.49440)),
    Some((51.44956, 5.49496)), // inside stop 1
    Some((51.44990, 5.49560)),
    Some((51.45022, 5.49637)), // inside stop 2
    None,                      // underpass: fix lost
    Some((51.45040, 5.49430)), // grazes stop 6's fence
    Some((51.45043, 5.49272)), // inside stop 3
    Some((51.44970, 5.49400)),
    Some((51.44905, 5.49550)), // inside stop 8
];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every engine transition.
#[derive(Default)]
struct Narrator {
    opened: Vec<StopId>,
}

impl TourObserver for Narrator {
    fn on_proximity_update(&mut self, proximity: &ProximitySet) {
        if !proximity.is_empty() {
            let stops: Vec<String> = proximity
                .iter()
                .map(|(id, d)| format!("{id} at {d:.0} m"))
                .collect();
            println!("  in range: {}", stops.join(", "));
        }
    }

    fn on_notification_raised(&mut self, stop: StopId, distance_m: f64) {
        println!("  notify: {distance_m:.0} m from {stop}");
    }

    fn on_notification_cleared(&mut self, stop: StopId, reason: ClearReason) {
        let why = match reason {
            ClearReason::Dismissed => "dismissed",
            ClearReason::Opened    => "opened",
            ClearReason::TimedOut  => "timed out",
        };
        println!("  notification for {stop} {why}");
    }

    fn on_visited(&mut self, stop: StopId) {
        println!("  {stop} marked visited");
    }

    fn on_reset(&mut self) {
        println!("  progress reset");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let registry = load_stops_reader(Cursor::new(STOPS_CSV))?;
    let bounds   = MapBounds::new(MAP_SOUTH, MAP_NORTH, MAP_WEST, MAP_EAST)?;

    let progress_path = progress_file();
    println!("progress file: {}", progress_path.display());

    let mut tour = TourController::builder(registry, JsonStore::new(&progress_path))
        .bounds(bounds)
        .build()?;

    if tour.visited_count() > 0 {
        println!("resuming: {} stops already visited", tour.visited_count());
    }

    let mut narrator = Narrator::default();
    let mut now = Timestamp::ZERO;

    for fix in WALK {
        now = now.offset(FIX_INTERVAL_MS);
        let pos = fix.map(|(lat, lon)| GeoPoint::new(lat, lon));

        match pos {
            Some(p) => println!("fix {p} at {now}"),
            None    => println!("fix lost at {now}"),
        }
        tour.update_position(pos, now, &mut narrator)?;

        if let Some(pt) = tour.projected_position() {
            println!("  map dot (landscape): {pt}");
        }

        // The visitor opens every notification and listens to the stop.
        if let Some(stop) = tour.open_notification(&mut narrator) {
            narrator.opened.push(stop);
            tour.mark_visited(stop, &mut narrator)?;
            tour.clear_selection();
        }
    }

    // Rotate the phone at the end of the walk.
    tour.set_orientation(Orientation::Portrait);
    if let Some(pt) = tour.projected_position() {
        println!("map dot (portrait): {pt}");
    }

    println!(
        "visited {} of {} stops{}",
        tour.visited_count(),
        tour.registry.len(),
        if tour.is_complete() { " — tour complete!" } else { "" },
    );

    if let Some(last) = narrator.opened.last() {
        match tour.next_stop(*last)? {
            Some(next) => println!("next up: {next}"),
            None       => println!("that was the last stop"),
        }
    }

    Ok(())
}

/// Progress lives in the system temp dir so repeated runs resume; delete the
/// file (or call `reset`) for a fresh tour.
fn progress_file() -> PathBuf {
    std::env::temp_dir().join("campus-tour-progress.json")
}
