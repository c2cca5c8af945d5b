//! Note table listing command.

use clap::Args;
use clavier_synth::NoteTable;

#[derive(Args)]
pub struct NotesArgs {
    /// Only show notes in this octave (0-8)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=8))]
    octave: Option<u8>,

    /// Only show white keys
    #[arg(long, conflicts_with = "black")]
    white: bool,

    /// Only show black keys
    #[arg(long)]
    black: bool,
}

pub fn run(args: NotesArgs) -> anyhow::Result<()> {
    let table = NoteTable::standard();

    let notes = table.iter().filter(|(note, _)| {
        args.octave.is_none_or(|o| note.octave() == o)
            && (!args.white || !note.is_black())
            && (!args.black || note.is_black())
    });

    println!("{:<6} {:>5} {:>10}", "Note", "MIDI", "Hz");
    let mut count = 0;
    for (note, freq) in notes {
        println!("{:<6} {:>5} {:>10.2}", note.to_string(), note.midi(), freq);
        count += 1;
    }
    println!("\n{} notes", count);

    Ok(())
}
