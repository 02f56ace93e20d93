//! Wavefront OBJ export of a hull.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::math::Point3;
use crate::topology::Hull;

/// Writes `points` and the faces of `hull` as Wavefront OBJ.
///
/// Every point is written, including interior ones, so that OBJ vertex
/// `i + 1` is point `i` and face indices carry over unchanged.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_obj<W: Write>(points: &[Point3], hull: &Hull, mut writer: W) -> Result<()> {
    writeln!(writer, "# hull3d: {} points, {} faces", points.len(), hull.len())?;
    for p in points {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for face in hull {
        writeln!(writer, "f {} {} {}", face.a + 1, face.b + 1, face.c + 1)?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves `points` and `hull` to an OBJ file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(points: &[Point3], hull: &Hull, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_obj(points, hull, BufWriter::new(file))
}
