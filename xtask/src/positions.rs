//! Fuse four camera captures of the tree into `data/positions.csv`.
//!
//! Each capture is taken with the tree in spotlight mode, lighting one pixel at a time and
//! recording where the camera sees it. A capture file has one line per pixel,
//! `<index> = <column>,<row>`. The four views are taken from the front, the left, the
//! back and the right (0°, 90°, 180°, 270°), so opposite views see each pixel mirrored.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;

/// Rows further apart than this between two views mean a pixel was probably misdetected.
pub const DODGY_ROW_DIFFERENCE: i32 = 60;

/// Image coordinates of each pixel, `(column, row)`, in strip order.
pub type Capture = Vec<(i32, i32)>;

/// Parses a capture file.
///
/// The first line is replaced by the second: the capture run records pixel 0 last, after
/// the strip has wrapped, so its reading is unusable.
pub fn parse_capture(text: &str) -> Result<Capture, Box<dyn Error>> {
    let mut capture = Capture::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let coords = line.rsplit(' ').next().unwrap_or(line);
        let (column, row) = coords
            .split_once(',')
            .ok_or_else(|| format!("line {}: expected `index = column,row`", line_number + 1))?;
        capture.push((column.trim().parse()?, row.trim().parse()?));
    }
    if capture.len() >= 2 {
        capture[0] = capture[1];
    }
    Ok(capture)
}

/// Two opposite views combined into one.
#[derive(Debug, PartialEq, Eq)]
pub struct Fused {
    /// `(horizontal, row)` per pixel, horizontal measured from the mirror pixel.
    pub coords: Vec<(i32, i32)>,
    /// The pixel whose rows agree best; both views are centered on it.
    pub mirror: usize,
    /// Pixels whose rows disagree by more than [`DODGY_ROW_DIFFERENCE`].
    pub dodgy: Vec<usize>,
}

/// Combines a view with the view from directly behind it.
///
/// The back view is mirrored around the pixel whose rows agree best between the two
/// views, then both are averaged.
pub fn fuse_opposite(front: &[(i32, i32)], back: &[(i32, i32)]) -> Fused {
    let mut mirror = 0;
    let mut best_difference = i32::MAX;
    let mut dodgy = Vec::new();
    for (index, (front_coord, back_coord)) in front.iter().zip(back).enumerate() {
        let difference = (front_coord.1 - back_coord.1).abs();
        if difference < best_difference {
            best_difference = difference;
            mirror = index;
        }
        if difference > DODGY_ROW_DIFFERENCE {
            dodgy.push(index);
        }
    }

    let front_offset = front.get(mirror).map_or(0, |coord| coord.0);
    let back_offset = back.get(mirror).map_or(0, |coord| coord.0);

    let coords = front
        .iter()
        .zip(back)
        .map(|(&(x1, y1), &(x2, y2))| {
            (((x1 - front_offset) + (back_offset - x2)) / 2, (y1 + y2) / 2)
        })
        .collect();

    Fused {
        coords,
        mirror,
        dodgy,
    }
}

/// The fused table plus everything worth warning about.
#[derive(Debug, PartialEq, Eq)]
pub struct Fusion {
    /// `(x, y, z)` per pixel, `y` growing upward from 0 at the lowest pixel.
    pub positions: Vec<(i32, i32, i32)>,
    /// Human-readable warnings, in the order found.
    pub warnings: Vec<String>,
}

/// Fuses the four views into 3D positions.
///
/// The front/back pair gives `x`, the left/right pair gives `z`, and `y` is the average row
/// of both pairs flipped so that it points up.
pub fn fuse(
    first: &[(i32, i32)],
    second: &[(i32, i32)],
    third: &[(i32, i32)],
    fourth: &[(i32, i32)],
) -> Result<Fusion, Box<dyn Error>> {
    let len = first.len();
    if [second.len(), third.len(), fourth.len()] != [len; 3] {
        return Err(format!(
            "captures have different lengths: {}, {}, {}, {}",
            first.len(),
            second.len(),
            third.len(),
            fourth.len()
        )
        .into());
    }

    let x_facing = fuse_opposite(first, third);
    let z_facing = fuse_opposite(second, fourth);

    let mut warnings = Vec::new();
    for (pair, fused) in [("first/third", &x_facing), ("second/fourth", &z_facing)] {
        warnings.push(format!("{pair}: mirrored around pixel {}", fused.mirror));
        for index in &fused.dodgy {
            warnings.push(format!("{pair}: pixel {index} seems dodgy"));
        }
    }

    let mut positions: Vec<(i32, i32, i32)> = Vec::with_capacity(len);
    for (index, (&(x, row1), &(z, row2))) in x_facing.coords.iter().zip(&z_facing.coords).enumerate() {
        if (row1 - row2).abs() > DODGY_ROW_DIFFERENCE {
            warnings.push(format!("pixel {index} looks very dodgy"));
        }
        positions.push((x, (row1 + row2) / 2, z));
    }

    // Image rows grow downward.
    let bottom = positions.iter().map(|position| position.1).max().unwrap_or(0);
    for position in &mut positions {
        position.1 = bottom - position.1;
    }

    Ok(Fusion {
        positions,
        warnings,
    })
}

/// Formats positions as `x,y,z` lines.
pub fn to_csv(positions: &[(i32, i32, i32)]) -> String {
    let mut csv = String::new();
    for (x, y, z) in positions {
        // Writing to a String cannot fail.
        let _ = writeln!(csv, "{x},{y},{z}");
    }
    csv
}

/// Reads four capture files and writes the fused CSV to `output`.
pub fn generate(captures: [&Path; 4], output: &Path) -> Result<(), Box<dyn Error>> {
    let mut parsed = Vec::with_capacity(captures.len());
    for path in captures {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("reading {}: {err}", path.display()))?;
        parsed.push(parse_capture(&text)?);
    }
    let [first, second, third, fourth] = &parsed[..] else {
        return Err("expected four captures".into());
    };

    let fusion = fuse(first, second, third, fourth)?;
    for warning in &fusion.warnings {
        println!("  {}", warning.yellow());
    }

    fs::write(output, to_csv(&fusion.positions))?;
    println!(
        "{}",
        format!("Wrote {} positions to {}", fusion.positions.len(), output.display()).green()
    );
    Ok(())
}
