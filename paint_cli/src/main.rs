//! # Roomcoat CLI Application
//!
//! Terminal front end for the room paint estimator. Prompts for each field
//! of the estimate form, runs the calculation, and prints the results.
//! An optional room photo can be run through the edge-detection preview,
//! with the edge map written next to the input file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use paint_core::calculations::estimate::{calculate, EstimateInput};
use paint_core::photo::{annotate_photo, EdgeParams};
use paint_core::room::{FinishOptions, Opening, RoomSpec};
use paint_core::EstimateError;

fn read_line() -> Option<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    match read_line() {
        Some(line) => line.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    match read_line() {
        Some(line) => line.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    match read_line().as_deref() {
        Some("y") | Some("Y") | Some("yes") => true,
        Some("n") | Some("N") | Some("no") => false,
        _ => default,
    }
}

/// Prompt for an opening group. Dimension prompts only appear when the
/// count is positive; a zero count yields the zero opening either way.
fn prompt_opening(kind: &str, default_w: f64, default_h: f64) -> Opening {
    let count = prompt_u32(&format!("Number of {}s [0]: ", kind), 0);
    if count == 0 {
        return Opening::none();
    }
    let width = prompt_f64(
        &format!("{} width (ft) [{:.1}]: ", kind, default_w),
        default_w,
    );
    let height = prompt_f64(
        &format!("{} height (ft) [{:.1}]: ", kind, default_h),
        default_h,
    );
    Opening::group(count, width, height)
}

fn main() {
    println!("Roomcoat CLI - Room Paint Estimator");
    println!("===================================");
    println!();

    println!("Room Dimensions");
    let room = RoomSpec::new(
        prompt_f64("Room length (ft) [12.0]: ", 12.0),
        prompt_f64("Room width (ft) [10.0]: ", 10.0),
        prompt_f64("Ceiling height (ft) [8.0]: ", 8.0),
    );

    println!();
    println!("Openings");
    let windows = prompt_opening("window", 3.0, 4.0);
    let doors = prompt_opening("door", 3.0, 7.0);

    println!();
    println!("Options");
    let options = FinishOptions {
        include_baseboard: prompt_bool("Include baseboards? [Y/n]: ", true),
        include_frames: prompt_bool("Include window/door casings? [Y/n]: ", true),
        include_ceiling: prompt_bool("Include ceiling? [y/N]: ", false),
    };

    let input = EstimateInput {
        label: "CLI estimate".to_string(),
        room,
        windows,
        doors,
        options,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  PAINT ESTIMATE RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!(
                "  Room:     {:.1} x {:.1} ft, {:.1} ft ceiling",
                room.length_ft, room.width_ft, room.height_ft
            );
            println!(
                "  Windows:  {} @ {:.1} x {:.1} ft",
                windows.count, windows.width_ft, windows.height_ft
            );
            println!(
                "  Doors:    {} @ {:.1} x {:.1} ft",
                doors.count, doors.width_ft, doors.height_ft
            );
            println!();
            println!("Estimate:");
            println!("  Wall area: {} sq ft", result.wall_area_display());
            if options.wants_trim() {
                println!("  Linear trim (baseboards + casings): {} ft", result.trim_display());
            }
            if options.include_ceiling {
                println!("  Ceiling area: {} sq ft", result.ceiling_display());
            }

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            print_error(&e);
            return;
        }
    }

    println!();
    print!("Room photo for edge preview (path, blank to skip): ");
    if io::stdout().flush().is_err() {
        return;
    }
    let path = match read_line() {
        Some(p) if !p.is_empty() => p,
        _ => return,
    };

    match run_edge_preview(&path) {
        Ok(out_path) => {
            println!("Edge preview written to {}", out_path);
        }
        Err(e) => print_error(&e),
    }
}

/// Read a photo, run edge detection, and write `<stem>_edges.png`
/// next to the input. Returns the output path.
fn run_edge_preview(path: &str) -> Result<String, EstimateError> {
    let bytes = std::fs::read(path)
        .map_err(|e| EstimateError::file_error("read", path, e.to_string()))?;

    let preview = annotate_photo(&bytes, &EdgeParams::default())?;
    let (width, height) = preview.dimensions();
    println!("Decoded {} ({} x {} px)", path, width, height);

    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    let out_path = Path::new(path)
        .with_file_name(format!("{}_edges.png", stem))
        .to_string_lossy()
        .into_owned();

    preview
        .edges
        .save(&out_path)
        .map_err(|e| EstimateError::file_error("write", &out_path, e.to_string()))?;

    Ok(out_path)
}

fn print_error(e: &EstimateError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
