//! Interactive keyboard session.
//!
//! Each line on stdin names a key. Typing a key presses it, typing it again
//! releases it, and every change recomputes and replays the held chord.

use super::common::{SynthArgs, print_peaks};
use clap::Args;
use clavier_io::{ChordEngine, ChordFrame, CpalPlayback, VisualizationSink, WavSink};
use clavier_synth::{ActiveNoteSet, Note};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Args)]
pub struct KeysArgs {
    /// Output device (index or partial name)
    #[arg(short, long, conflicts_with_all = ["silent", "wav"])]
    output: Option<String>,

    /// Write each chord to this WAV file instead of playing it
    #[arg(long, value_name = "FILE", conflicts_with = "silent")]
    wav: Option<PathBuf>,

    /// Do not play audio; only print the analysis
    #[arg(long)]
    silent: bool,

    /// Number of spectral peaks to show after each change
    #[arg(long, default_value = "5")]
    peaks: usize,

    #[command(flatten)]
    synth: SynthArgs,
}

/// Prints the held chord and its strongest partials.
struct ConsoleView {
    peaks: usize,
}

impl VisualizationSink for ConsoleView {
    fn name(&self) -> &'static str {
        "console"
    }

    fn show(&mut self, frame: &ChordFrame) -> clavier_io::Result<()> {
        if frame.is_empty() {
            println!("  (silence)");
            return Ok(());
        }

        let names: Vec<String> = frame.notes().iter().map(ToString::to_string).collect();
        println!("  held: {}", names.join(" "));
        if let Some((lo, hi)) = frame.preview().range() {
            println!(
                "  waveform: {} samples over {:.1} ms, range [{:.3}, {:.3}]",
                frame.preview().len(),
                frame.preview().span() * 1000.0,
                lo,
                hi
            );
        }
        print_peaks(frame.spectrum(), self.peaks);
        Ok(())
    }
}

enum Input {
    Toggle(Note),
    Clear,
    Quit,
    Skip,
}

fn parse_line(line: &str) -> Result<Input, String> {
    match line.trim() {
        "" => Ok(Input::Skip),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        "clear" => Ok(Input::Clear),
        id => id.parse().map(Input::Toggle).map_err(|e| e.to_string()),
    }
}

pub fn run(args: KeysArgs) -> anyhow::Result<()> {
    let config = args.synth.load_config()?;

    let mut engine = ChordEngine::new(args.synth.engine_settings(&config))?
        .with_visualization(Box::new(ConsoleView { peaks: args.peaks }));
    if let Some(path) = &args.wav {
        engine = engine.with_playback(Box::new(WavSink::new(path, config.bits_per_sample)?));
    } else if !args.silent {
        let device = args.output.clone().or(config.output_device.clone());
        engine = engine.with_playback(Box::new(CpalPlayback::new(device)));
    }

    println!("Type a note (e.g. C4, F#3) to press or release it.");
    println!("'clear' releases all keys, 'quit' exits.");

    let mut held = ActiveNoteSet::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match parse_line(&line?) {
            Ok(Input::Skip) => continue,
            Ok(Input::Quit) => break,
            Ok(Input::Clear) => {
                held.clear();
                println!("released all");
            }
            Ok(Input::Toggle(note)) => {
                let state = if held.toggle(note) {
                    "pressed"
                } else {
                    "released"
                };
                println!("{state} {note}");
            }
            Err(message) => {
                println!("error: {message}");
                continue;
            }
        }

        if let Err(e) = engine.on_active_set_changed(&held) {
            tracing::error!(error = %e, "chord update failed");
            println!("error: {e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands_and_notes() {
        assert!(matches!(parse_line("  "), Ok(Input::Skip)));
        assert!(matches!(parse_line("quit"), Ok(Input::Quit)));
        assert!(matches!(parse_line("clear"), Ok(Input::Clear)));
        assert!(matches!(parse_line("A4"), Ok(Input::Toggle(n)) if n.to_string() == "A4"));
        assert!(parse_line("H2").is_err());
    }
}
