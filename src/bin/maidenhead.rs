//! Command-line frontend for the locator encoding.
//!
//! Takes one coordinate as eight positional arguments
//! (degrees, minutes, seconds and a direction letter per axis,
//! longitude first), prints the decimal coordinates and the locator.
//! All the input validation lives here: the library itself
//! trusts the values it is given.

use std::{convert::TryFrom, env, process};

use maidenhead::{Dms, Latitude, Longitude, Point, Pole, RotationalDirection};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <longitude> <latitude>");
    eprintln!();
    eprintln!("Latitude and longitude are specified in");
    eprintln!("degree, minute and second plus direction:");
    eprintln!("   N - North");
    eprintln!("   S - South");
    eprintln!("   W - West");
    eprintln!("   E - East");
    eprintln!();
    eprintln!("Example: {program} 9 57 60 E 53 32 37 N");
    process::exit(1);
}

/// Three consecutive arguments into a sexagesimal angle
fn parse_angle(parts: &[String]) -> Result<Dms, String> {
    let numbers: Result<Vec<u16>, _> = parts.iter().map(|part| part.parse()).collect();
    let numbers = numbers.map_err(|_| parts.join(" "))?;

    match numbers[..] {
        [degrees, minutes, seconds] => Ok(Dms::new(degrees, minutes, seconds)),
        _ => Err(parts.join(" ")),
    }
}

/// The first character of the argument into a direction enum,
/// so the library never sees an invalid tag
fn parse_direction<D: TryFrom<char>>(arg: &str) -> Option<D> {
    let letter = arg.chars().next()?;
    D::try_from(letter).ok()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("maidenhead", String::as_str);

    if args.len() < 9 {
        usage(program);
    }

    let lon_angle = parse_angle(&args[1..4]).unwrap_or_else(|bad| {
        eprintln!("Error: Longitude needs three whole numbers. Got: '{bad}'\n");
        usage(program);
    });
    let lon_direction: RotationalDirection = parse_direction(&args[4]).unwrap_or_else(|| {
        eprintln!(
            "Error: Longitude direction needs to be W or E. Got: '{}'\n",
            args[4]
        );
        usage(program);
    });

    let lat_angle = parse_angle(&args[5..8]).unwrap_or_else(|bad| {
        eprintln!("Error: Latitude needs three whole numbers. Got: '{bad}'\n");
        usage(program);
    });
    let lat_direction: Pole = parse_direction(&args[8]).unwrap_or_else(|| {
        eprintln!(
            "Error: Latitude direction needs to be N or S. Got: '{}'\n",
            args[8]
        );
        usage(program);
    });

    println!(
        "longitude: {:.6} {}, latitude: {:.6} {}",
        lon_angle.to_degrees(),
        lon_direction,
        lat_angle.to_degrees(),
        lat_direction,
    );

    let point = Point::new(
        Latitude::new(lat_angle, lat_direction),
        Longitude::new(lon_angle, lon_direction),
    );
    println!("Locator: {}", point.locator());
}
