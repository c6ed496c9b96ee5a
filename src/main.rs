//! tabtip: command-line front end for the touch keyboard controller

use clap::{Parser, Subcommand};

use tabtip_win::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "tabtip", version, about = "Control the Windows touch keyboard")]
struct Cli {
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the keyboard
    Open,
    /// Open the keyboard floating, restarting it if it is docked
    OpenUndocked,
    /// Close the keyboard
    Close,
    /// Print whether the keyboard is showing and where
    Status,
    /// Open the keyboard floating and wait until it is closed
    Watch,
}

#[cfg(windows)]
fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    use tabtip_win::TabTip;

    let tabtip = TabTip::new();
    tabtip.on_exception(|e| eprintln!("warning: {e}"));

    match command {
        Command::Open => tabtip.open(),
        Command::OpenUndocked => tabtip.open_undocked(),
        Command::Close => tabtip.close(),
        Command::Status => {
            let rect = tabtip.rectangle();
            println!("window present: {}", tabtip.is_running());
            println!("closed: {}", tabtip.is_closed());
            println!("rectangle: ({}, {}) {}x{}", rect.x, rect.y, rect.w, rect.h);
        }
        Command::Watch => {
            tabtip.on_closed(|| println!("keyboard closed"));
            let handle = tabtip.open_undocked_and_start_polling_for_closed_event();
            println!("waiting for the keyboard to close...");
            handle.join()?;
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn run(_command: Command) -> Result<(), Box<dyn std::error::Error>> {
    Err(Box::new(tabtip_win::TabTipError::Unsupported))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    run(cli.command)
}
