//! Audio output device listing command.

use clap::{Args, Subcommand};
use clavier_io::{default_output_device, list_output_devices};

#[derive(Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    command: Option<DevicesCommand>,
}

#[derive(Subcommand)]
enum DevicesCommand {
    /// List all output devices
    List,

    /// Show the default output device
    Info,
}

pub fn run(args: DevicesArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(DevicesCommand::List) {
        DevicesCommand::List => {
            let devices = list_output_devices()?;

            if devices.is_empty() {
                println!("No audio output devices found.");
                return Ok(());
            }

            println!("Output Devices");
            println!("==============\n");
            for device in &devices {
                println!(
                    "  [{}] {} ({} Hz, {} ch)",
                    device.index, device.name, device.default_sample_rate, device.channels
                );
            }
            println!();
            println!("Tip: Use device index or partial name with --output:");
            println!("  clavier play A4 --output 0");
            println!("  clavier keys --output \"USB\"");
        }

        DevicesCommand::Info => match default_output_device()? {
            Some(device) => {
                println!("Default Output:");
                println!("  Name: {}", device.name);
                println!("  Index: {}", device.index);
                println!("  Sample Rate: {} Hz", device.default_sample_rate);
                println!("  Channels: {}", device.channels);
            }
            None => println!("Default Output: None"),
        },
    }

    Ok(())
}
