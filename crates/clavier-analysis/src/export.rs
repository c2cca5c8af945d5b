//! Export formats for analysis results.
//!
//! Plotting happens outside this crate. These writers hand the data over:
//! - CSV for spreadsheets and gnuplot
//! - JSON for web front ends

use crate::error::Result;
use crate::{Spectrum, WaveformPreview};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a spectrum as CSV with a `frequency_hz,magnitude` header.
///
/// With `db_scale` the second column holds dBFS values and is headed
/// `magnitude_db`.
///
/// # Example
///
/// ```rust,ignore
/// use clavier_analysis::{analyze, export::export_spectrum_csv};
///
/// let spectrum = analyze(chord.samples(), 44100.0)?;
/// export_spectrum_csv(&spectrum, "chord.csv", false)?;
/// ```
pub fn export_spectrum_csv(
    spectrum: &Spectrum,
    path: impl AsRef<Path>,
    db_scale: bool,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_spectrum_csv(spectrum, BufWriter::new(file), db_scale)
}

/// Write a spectrum as CSV to any writer.
pub fn write_spectrum_csv<W: Write>(spectrum: &Spectrum, mut out: W, db_scale: bool) -> Result<()> {
    if db_scale {
        writeln!(out, "frequency_hz,magnitude_db")?;
        for (freq, db) in spectrum.frequencies().iter().zip(spectrum.magnitudes_db()) {
            writeln!(out, "{:.6},{:.6}", freq, db)?;
        }
    } else {
        writeln!(out, "frequency_hz,magnitude")?;
        for (freq, mag) in spectrum.iter() {
            writeln!(out, "{:.6},{:.9}", freq, mag)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write a waveform preview as CSV with a `time_s,amplitude` header.
pub fn export_preview_csv(preview: &WaveformPreview, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "time_s,amplitude")?;
    for (t, s) in preview.times().iter().zip(preview.samples()) {
        writeln!(out, "{:.9},{:.9}", t, s)?;
    }
    out.flush()?;
    Ok(())
}

/// Serialize any analysis result to pretty-printed JSON.
pub fn export_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn spectrum_csv_has_header_and_rows() {
        let spectrum = analyze(&[1.0, 0.0, -1.0, 0.0], 4.0).unwrap();
        let mut buf = Vec::new();
        write_spectrum_csv(&spectrum, &mut buf, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "frequency_hz,magnitude");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("2.000000,1.0"), "got: {}", lines[2]);
    }

    #[test]
    fn spectrum_csv_db_header() {
        let spectrum = analyze(&[0.0; 8], 8.0).unwrap();
        let mut buf = Vec::new();
        write_spectrum_csv(&spectrum, &mut buf, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("frequency_hz,magnitude_db\n"));
        assert!(text.contains("-200.000000"));
    }
}
