//! Find the lit pixel in photos of the tree and write the capture files `positions` reads.
//!
//! With the tree in spotlight mode each photo shows one lit pixel. The photo is blurred so
//! that reflections and hot camera pixels fade, then the brightest point is taken as the
//! pixel's image position and recorded as `<index> = <column>,<row>`. An annotated copy of
//! the blurred photo, with a crosshair on the detected point, is saved for checking by eye.

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;
use owo_colors::OwoColorize;

/// Standard deviation of the blur applied before searching, in image pixels.
pub const BLUR_SIGMA: f32 = 10.0;

/// Length of each crosshair arm, in image pixels.
pub const CROSSHAIR_REACH: u32 = 10;

const CROSSHAIR_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

const PHOTO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// `(column, row)` of the brightest point, summing the three channels.
///
/// The first such point in row-major order wins ties. Returns `None` for an all-black image.
pub fn brightest_point(image: &RgbImage) -> Option<(u32, u32)> {
    let mut best = None;
    let mut best_brightness = 0;
    for (column, row, pixel) in image.enumerate_pixels() {
        let brightness: u32 = pixel.0.iter().map(|&channel| u32::from(channel)).sum();
        if brightness > best_brightness {
            best_brightness = brightness;
            best = Some((column, row));
        }
    }
    best
}

/// Draws a red crosshair centered on `(column, row)`, clipped to the image.
pub fn mark_crosshair(image: &mut RgbImage, (column, row): (u32, u32)) {
    if column >= image.width() || row >= image.height() {
        return;
    }
    let right = column.saturating_add(CROSSHAIR_REACH).min(image.width() - 1);
    let bottom = row.saturating_add(CROSSHAIR_REACH).min(image.height() - 1);
    for x in column.saturating_sub(CROSSHAIR_REACH)..=right {
        image.put_pixel(x, row, CROSSHAIR_COLOR);
    }
    for y in row.saturating_sub(CROSSHAIR_REACH)..=bottom {
        image.put_pixel(column, y, CROSSHAIR_COLOR);
    }
}

/// A photo after detection.
pub struct Located {
    /// Where the lit pixel is, or `None` if the photo is black.
    pub point: Option<(u32, u32)>,
    /// The blurred photo, with a crosshair on `point`.
    pub annotated: RgbImage,
}

/// Blurs `photo` by [`BLUR_SIGMA`] and finds the lit pixel in it.
pub fn locate(photo: &RgbImage) -> Located {
    let mut annotated = gaussian_blur_f32(photo, BLUR_SIGMA);
    let point = brightest_point(&annotated);
    if let Some(point) = point {
        mark_crosshair(&mut annotated, point);
    }
    Located { point, annotated }
}

/// One line of a capture file.
pub fn capture_line(index: usize, (column, row): (u32, u32)) -> String {
    format!("{index} = {column},{row}")
}

/// Locates the lit pixel in `photo`, appends its capture line to `log` and saves the
/// annotated photo as `result-<index>.png` under `annotated_dir`.
fn record(
    photo: &RgbImage,
    index: usize,
    log: &mut impl Write,
    annotated_dir: &Path,
) -> Result<(u32, u32), Box<dyn Error>> {
    let located = locate(photo);
    let point = located
        .point
        .ok_or_else(|| format!("pixel {index}: nothing lit in the photo"))?;
    writeln!(log, "{}", capture_line(index, point))?;
    located
        .annotated
        .save(annotated_dir.join(format!("result-{index:03}.png")))?;
    Ok(point)
}

/// Photos in `dir`, sorted by file name.
fn photos_in(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut photos = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_photo = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                PHOTO_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
            });
        if is_photo {
            photos.push(path);
        }
    }
    photos.sort();
    Ok(photos)
}

/// Locates the lit pixel in every photo in `dir` and writes the capture file `output`.
///
/// Photos are taken in file-name order and numbered from `first`, so name them by pixel.
pub fn locate_dir(
    dir: &Path,
    first: usize,
    output: &Path,
    annotated_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let photos = photos_in(dir)?;
    if photos.is_empty() {
        return Err(format!("no photos ({}) in {}", PHOTO_EXTENSIONS.join(", "), dir.display()).into());
    }
    fs::create_dir_all(annotated_dir)?;
    let mut log = BufWriter::new(File::create(output)?);
    for (index, path) in (first..).zip(&photos) {
        let photo = image::open(path)
            .map_err(|err| format!("reading {}: {err}", path.display()))?
            .into_rgb8();
        let (column, row) = record(&photo, index, &mut log, annotated_dir)?;
        println!("  {}", format!("pixel {index}: {column},{row}").bright_black());
    }
    log.flush()?;
    println!(
        "{}",
        format!("Wrote {} captures to {}", photos.len(), output.display()).green()
    );
    Ok(())
}

/// Photographs the tree with the first camera once per line typed on stdin.
///
/// Light the pixel first (send its index to the tree's serial port), then press Enter.
/// Typing a number before Enter jumps to that pixel; otherwise the index counts up from
/// `first`.
#[cfg(feature = "camera")]
pub fn capture_from_camera(
    first: usize,
    output: &Path,
    annotated_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    use nokhwa::Camera;
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};

    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = Camera::new(CameraIndex::Index(0), requested)?;
    camera.open_stream()?;
    let format = camera.camera_format();
    println!(
        "{}",
        format!("Camera at {}x{}, {}", format.width(), format.height(), format.format())
            .bright_black()
    );

    fs::create_dir_all(annotated_dir)?;
    let mut log = File::create(output)?;
    let mut index = first;
    for line in std::io::stdin().lines() {
        if let Ok(jump) = line?.trim().parse() {
            index = jump;
        }
        let decoded = camera.frame()?.decode_image::<RgbFormat>()?;
        let photo = RgbImage::from_raw(decoded.width(), decoded.height(), decoded.into_raw())
            .ok_or("camera frame does not match its size")?;
        let (column, row) = record(&photo, index, &mut log, annotated_dir)?;
        println!("  {}", format!("pixel {index}: {column},{row}").bright_black());
        index += 1;
    }
    Ok(())
}
