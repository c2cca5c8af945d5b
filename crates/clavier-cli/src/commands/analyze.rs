//! Spectral analysis command.

use super::common::{PEAK_MIN_DISTANCE_HZ, PEAK_THRESHOLD, SynthArgs, parse_notes, print_peaks};
use clap::Args;
use clavier_analysis::export::{export_json, export_preview_csv, export_spectrum_csv};
use clavier_analysis::{Spectrum, SpectrumAnalyzer, WaveformPreview};
use clavier_io::{ChordEngine, read_wav};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Note identifiers to synthesize and analyze, e.g. C4 E4 G4
    #[arg(value_name = "NOTE", required_unless_present = "input", conflicts_with = "input")]
    notes: Vec<String>,

    /// Analyze a WAV file instead of synthesized notes
    #[arg(short, long, value_name = "WAV")]
    input: Option<PathBuf>,

    /// Show top N peaks
    #[arg(long, default_value = "10")]
    peaks: usize,

    /// Write the spectrum as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Use dB instead of linear magnitude in the CSV
    #[arg(long, requires = "csv")]
    db: bool,

    /// Write the waveform preview as CSV
    #[arg(long, value_name = "FILE")]
    preview_csv: Option<PathBuf>,

    /// Write peaks, spectrum and preview as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    #[command(flatten)]
    synth: SynthArgs,
}

#[derive(Serialize)]
struct Report<'a> {
    source: String,
    sample_rate: f64,
    samples: usize,
    peaks: Vec<Peak>,
    centroid_hz: f64,
    preview: &'a WaveformPreview,
    spectrum: &'a Spectrum,
}

#[derive(Serialize)]
struct Peak {
    frequency_hz: f64,
    magnitude: f64,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = args.synth.load_config()?;

    let (source, sample_rate, samples, preview, spectrum) = match &args.input {
        Some(path) => {
            println!("Analyzing spectrum of {}...", path.display());
            let (samples, spec) = read_wav(path)?;
            let sample_rate = f64::from(spec.sample_rate);
            let preview = WaveformPreview::capture(&samples, sample_rate, config.preview_samples)?;
            let spectrum = SpectrumAnalyzer::new()
                .with_window(args.synth.window)
                .analyze(&samples, sample_rate)?;
            (
                path.display().to_string(),
                sample_rate,
                samples.len(),
                preview,
                spectrum,
            )
        }
        None => {
            let held = parse_notes(&args.notes)?;
            let engine = ChordEngine::new(args.synth.engine_settings(&config))?;
            let frame = engine.render(&held)?;
            let names: Vec<String> = frame.notes().iter().map(ToString::to_string).collect();
            println!("Analyzing chord {}...", names.join(" "));
            for (note, freq) in frame.notes().iter().zip(frame.frequencies()) {
                println!("  {:<4} {:>8.2} Hz", note.to_string(), freq);
            }
            (
                names.join(" "),
                frame.signal().sample_rate(),
                frame.signal().len(),
                frame.preview().clone(),
                frame.spectrum().clone(),
            )
        }
    };

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples,
        sample_rate,
        samples as f64 / sample_rate
    );
    println!(
        "  {} bins, {:.3} Hz resolution, centroid {:.1} Hz",
        spectrum.len(),
        spectrum.bin_width(),
        spectrum.centroid()
    );
    println!("\nTop {} peaks:", args.peaks);
    print_peaks(&spectrum, args.peaks);

    if let Some(path) = &args.csv {
        export_spectrum_csv(&spectrum, path, args.db)?;
        println!("\nSpectrum written to {}", path.display());
    }

    if let Some(path) = &args.preview_csv {
        export_preview_csv(&preview, path)?;
        println!("Waveform preview written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let peaks = spectrum
            .peaks(PEAK_THRESHOLD, PEAK_MIN_DISTANCE_HZ)
            .into_iter()
            .take(args.peaks)
            .map(|(frequency_hz, magnitude)| Peak {
                frequency_hz,
                magnitude,
            })
            .collect();
        let report = Report {
            source,
            sample_rate,
            samples,
            peaks,
            centroid_hz: spectrum.centroid(),
            preview: &preview,
            spectrum: &spectrum,
        };
        export_json(&report, path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
