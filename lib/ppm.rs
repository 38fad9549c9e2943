use std::io::{self, Write};

use crate::render::Image;

/// Writes `image` as a plain-text (P3) PPM, one pixel per line.
pub fn write_ppm<W: Write>(image: &Image, w: &mut W) -> io::Result<()> {
    writeln!(w, "P3")?;
    writeln!(w, "{} {}", image.width, image.height)?;
    writeln!(w, "255")?;

    for [r, g, b] in &image.pixels {
        writeln!(w, "{} {} {}", r, g, b)?;
    }

    w.flush()
}
