//! Interactive single-ride session driver.
//!
//! One linear transaction per process: login, pickup, drop-off choice,
//! driver assignment, fare, confirmation, log append. In-flow failures
//! (bad input, no driver) print a message and end the run normally; the
//! process still exits 0.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ride_core::clock::{Clock, FixedClock, SystemClock};
use ride_core::pathfind::grid_route_steps;
use ride_core::ride_log::RideLog;
use ride_core::session::Session;
use ride_core::spatial::GridPoint;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ride_cli",
    about = "Interactive single-ride ride-hailing session"
)]
struct Cli {
    /// Path of the append-only ride log
    #[arg(long, default_value = "ride_logs.txt")]
    log_file: PathBuf,
    /// Log in as this user instead of prompting
    #[arg(long)]
    username: Option<String>,
    /// Freeze the wall clock at "YYYY-MM-DD HH:MM:SS" for reproducible runs
    #[arg(long)]
    now: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let clock: Box<dyn Clock> = match cli.now.as_deref() {
        Some(value) => Box::new(
            FixedClock::parse(value).context("--now must be formatted as YYYY-MM-DD HH:MM:SS")?,
        ),
        None => Box::new(SystemClock),
    };
    let mut session = Session::new(clock);
    let log = RideLog::new(&cli.log_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut session,
        &log,
        cli.username.as_deref(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn run(
    session: &mut Session,
    log: &RideLog,
    scripted_username: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    banner(session, out)?;

    let username = match scripted_username {
        Some(name) => name.to_string(),
        None => {
            write!(out, "Please enter your username to login: ")?;
            out.flush()?;
            read_line(input)?
        }
    };
    if let Err(err) = session.login(username.trim()) {
        writeln!(out, "Error: {err}.")?;
        writeln!(out, "Login failed. Exiting application.")?;
        return Ok(());
    }
    banner(session, out)?;

    write!(out, "\nEnter your current location (x y): ")?;
    out.flush()?;
    let passenger = match parse_point(&read_line(input)?) {
        Some(point) => point,
        None => {
            writeln!(out, "Invalid input. Please enter numeric coordinates.")?;
            return Ok(());
        }
    };
    if !passenger.in_bounds() {
        writeln!(
            out,
            "Location coordinates out of bounds. Please enter valid coordinates."
        )?;
        return Ok(());
    }

    let Some(pickup_index) = session.closest_preset(passenger) else {
        writeln!(out, "Error: Could not find a suitable pickup point.")?;
        return Ok(());
    };
    let pickup = session.presets()[pickup_index].clone();
    writeln!(
        out,
        "Closest pickup point: {} at {}",
        pickup.display_name(),
        pickup.point
    )?;

    writeln!(out, "Choose drop-off location:")?;
    for (index, preset) in session.presets().iter().enumerate() {
        writeln!(out, "{index}: {} at {}", preset.display_name(), preset.point)?;
    }
    write!(out, "Enter your choice (0-{}): ", session.presets().len() - 1)?;
    out.flush()?;
    let choice_line = read_line(input)?;
    let Ok(choice) = choice_line.trim().parse::<usize>() else {
        writeln!(out, "Invalid drop-off point selected.")?;
        return Ok(());
    };
    let dropoff = match session.preset(choice) {
        Ok(preset) => preset.clone(),
        Err(_) => {
            writeln!(out, "Invalid drop-off point selected.")?;
            return Ok(());
        }
    };
    writeln!(
        out,
        "\nDrop-off point: {} at {}",
        dropoff.display_name(),
        dropoff.point
    )?;

    let ride_id = session.request_ride(pickup.clone(), dropoff.clone())?;

    match session.assign_closest_driver(passenger) {
        None => {
            writeln!(out, "Sorry, no drivers are available at the moment.")?;
            session.cancel_ride(ride_id)?;
        }
        Some(driver) => {
            session.confirm_ride(ride_id, driver)?;
            writeln!(out, "Assigned Driver: Driver {driver}")?;

            match grid_route_steps(pickup.point, dropoff.point) {
                Some(steps) => writeln!(out, "Estimated travel distance: {steps} units")?,
                None => writeln!(out, "No route found between pickup and drop-off.")?,
            }
            let fare = session.ride(ride_id).context("ride record missing")?.fare;
            writeln!(out, "Estimated fare: ${fare:.2}")?;

            write!(out, "\nConfirm ride? (y/n): ")?;
            out.flush()?;
            if read_line(input)?.trim().eq_ignore_ascii_case("y") {
                writeln!(out, "\nRide confirmed!")?;
                writeln!(out, "Driver is on the way to pick you up.")?;
                session.start_ride(ride_id)?;
            } else {
                writeln!(out, "\nRide cancelled by user.")?;
                session.cancel_ride(ride_id)?;
            }
        }
    }

    let ride = session.ride(ride_id).context("ride record missing")?;
    if let Err(err) = log.append(ride) {
        // Best-effort logging: report and finish the run normally.
        warn!(path = %log.path().display(), %err, "could not append ride log");
        eprintln!("Error opening log file!");
    }

    writeln!(out, "\nThank you for using our Ride-Sharing Service!")?;
    Ok(())
}

fn banner(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out, "===============================================")?;
    writeln!(out, "   Welcome to the Ride-Sharing Application")?;
    writeln!(out, "===============================================")?;
    writeln!(out, "Current Date & Time: {}", session.clock().timestamp())?;
    if session.user().is_authenticated() {
        writeln!(out, "Logged in as: {}", session.user().username())?;
        writeln!(out, "Login time: {}", session.user().login_time())?;
    }
    writeln!(out, "-----------------------------------------------")?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parse exactly two whitespace-separated integers.
fn parse_point(line: &str) -> Option<GridPoint> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GridPoint::new(x, y))
}
