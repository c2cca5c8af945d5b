//! Render a chord to a WAV file.

use super::common::{SynthArgs, parse_notes};
use anyhow::Context;
use clap::Args;
use clavier_config::validate_bits_per_sample;
use clavier_io::{ChordEngine, WavSink};
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Note identifiers, e.g. C4 E4 G4
    #[arg(required = true, value_name = "NOTE")]
    notes: Vec<String>,

    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Bit depth: 16 (PCM) or 32 (float)
    #[arg(long)]
    bits: Option<u16>,

    #[command(flatten)]
    synth: SynthArgs,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.synth.load_config()?;
    let bits = args.bits.unwrap_or(config.bits_per_sample);
    validate_bits_per_sample(bits)?;

    let held = parse_notes(&args.notes)?;
    let sink = WavSink::new(&args.output, bits)?;
    let mut engine = ChordEngine::new(args.synth.engine_settings(&config))?
        .with_playback(Box::new(sink));

    let frame = engine
        .on_active_set_changed(&held)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let names: Vec<String> = frame.notes().iter().map(ToString::to_string).collect();
    println!("Rendered {} to {}", names.join(" "), args.output.display());
    println!(
        "  {} samples, {} Hz, {:.2}s, {}-bit",
        frame.signal().len(),
        config.sample_rate,
        frame.signal().duration(),
        bits
    );
    if frame.signal().exceeds_unit_range() {
        println!(
            "  peak {:.3} exceeds full scale; samples were clipped (use --normalize to avoid)",
            frame.signal().peak_amplitude()
        );
    }

    Ok(())
}
