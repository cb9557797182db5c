use std::io::{self, Write};

use incometax_types::Banner;

/// Write each banner line, then flush so the banner is visible before any log output.
pub fn write_banner<W: Write>(out: &mut W, banner: &Banner) -> io::Result<()> {
    for line in banner.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
