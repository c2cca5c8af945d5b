//! Play a note or chord on an audio device.

use super::common::{SynthArgs, parse_notes};
use clap::Args;
use clavier_io::{ChordEngine, CpalPlayback, PlaybackSink};

#[derive(Args)]
pub struct PlayArgs {
    /// Note identifiers, e.g. A4 or C4 E4 G4
    #[arg(required = true, value_name = "NOTE")]
    notes: Vec<String>,

    /// Output device (index or partial name)
    #[arg(short, long)]
    output: Option<String>,

    #[command(flatten)]
    synth: SynthArgs,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    let config = args.synth.load_config()?;
    let held = parse_notes(&args.notes)?;

    let engine = ChordEngine::new(args.synth.engine_settings(&config))?;
    let frame = engine.render(&held)?;
    let buffer = frame.playback_buffer()?;

    let names: Vec<String> = frame.notes().iter().map(ToString::to_string).collect();
    println!(
        "Playing {} ({:.2}s at {} Hz)",
        names.join(" "),
        buffer.duration(),
        buffer.sample_rate()
    );
    if buffer.clipped_samples() > 0 {
        println!(
            "  {} samples clip at full scale (use --normalize to avoid)",
            buffer.clipped_samples()
        );
    }

    let mut playback = CpalPlayback::new(args.output.or(config.output_device));
    playback.play(&buffer)?;
    playback.wait();

    Ok(())
}
