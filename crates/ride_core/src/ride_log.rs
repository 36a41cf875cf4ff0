//! Append-only plain-text ride log.
//!
//! One block per terminal ride. Field labels and order are fixed; existing
//! log consumers parse them, so `format_record` must not change shape.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::ride::Ride;

const RECORD_SEPARATOR: &str = "------------------------------";

#[derive(Debug, Clone)]
pub struct RideLog {
    path: PathBuf,
}

impl RideLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file on first use. The file is
    /// opened and closed within this call; there is no concurrent writer.
    pub fn append(&self, ride: &Ride) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_record(ride).as_bytes())
    }
}

/// Render one log block. An unassigned driver is written as `-1`.
pub fn format_record(ride: &Ride) -> String {
    let driver_id = ride.driver.map_or(-1, |d| i64::from(d.0));
    let mut out = String::new();
    let _ = writeln!(out, "Ride ID: {}", ride.id);
    let _ = writeln!(out, "User: {}", ride.user.username());
    let _ = writeln!(out, "Request Time: {}", ride.request_time);
    let _ = writeln!(
        out,
        "Pickup: ({},{}) - {}",
        ride.pickup.point.x,
        ride.pickup.point.y,
        ride.pickup.display_name()
    );
    let _ = writeln!(
        out,
        "Dropoff: ({},{}) - {}",
        ride.dropoff.point.x,
        ride.dropoff.point.y,
        ride.dropoff.display_name()
    );
    let _ = writeln!(out, "Driver ID: {driver_id}");
    let _ = writeln!(out, "Status: {}", ride.status);
    let _ = writeln!(out, "Fare: ${:.2}", ride.fare);
    let _ = writeln!(out, "{RECORD_SEPARATOR}");
    out
}
