use clap::{Args, Parser, Subcommand};
use sunhid_common::layouts::Layout;
use sunhid_firmware::{config::Config, macro_table::MacroTable, sun_to_usb::SUN_TO_USB};
use sunhid_tool::{
    capture,
    keycodes::{self, KeycodeName},
    replay::{self, Replay},
};
use std::{path::PathBuf, process};

use anyhow::{anyhow, Result};
use log::warn;

fn parse_number(v: &str) -> Result<u8> {
    let v = v.to_lowercase();
    match v.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => v.parse(),
    }
    .map_err(|_| anyhow!("Invalid number {v:?}"))
}

fn parse_layout(v: &str) -> Result<Layout> {
    match Layout::from_name(v) {
        Some(layout) => Ok(layout),
        None if v.starts_with(|c: char| c.is_ascii_digit()) => Ok(Layout::from_id(parse_number(v)?)),
        None => Err(anyhow!(
            "Unknown layout {v:?}; use a name from the layouts command or a layout id"
        )),
    }
}

/// Inspect what the sunhid converter sends to the host
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a capture of keyboard and mouse bytes and print the HID reports
    Replay(ReplayArgs),
    /// Print the scan code translation table
    Table(TableArgs),
    /// List the Sun keyboard layouts
    Layouts,
    /// List keycode names
    KeycodesList(ListKeycodesArgs),
}

#[derive(Args)]
struct ConverterArgs {
    /// Use this layout instead of the one the keyboard reports
    #[clap(long, short)]
    layout: Option<String>,

    /// Send the special keys' own usages instead of expanding them to shortcuts
    #[clap(long)]
    no_macros: bool,
}

impl ConverterArgs {
    fn config(&self) -> Result<Config> {
        Ok(Config {
            use_macros: !self.no_macros,
            force_layout: self.layout.as_deref().map(parse_layout).transpose()?,
            startup_greeting: false,
            ..Default::default()
        })
    }
}

#[derive(Args)]
struct ReplayArgs {
    #[command(flatten)]
    converter: ConverterArgs,

    /// Ignore mouse bytes
    #[clap(long)]
    no_mouse: bool,

    /// Include the report bytes
    #[clap(long, short)]
    verbose: bool,

    /// capture file
    file: PathBuf,
}

#[derive(Args)]
struct TableArgs {
    #[command(flatten)]
    converter: ConverterArgs,
}

#[derive(Args)]
struct ListKeycodesArgs {
    /// Include the keycode hex value
    #[clap(long, short)]
    verbose: bool,

    /// Sort results by keycode; Defaults to sorting by name
    #[clap(long, short)]
    sort_by_keycode: bool,

    /// Only list key names than contains pattern (case insensitive) if pattern starts with 0x then
    /// key names matching the key code will be shown.
    #[clap()]
    pattern: Option<String>,
}

fn replay(args: &ReplayArgs) -> Result<()> {
    let deliveries = capture::read(&args.file)
        .map_err(|err| anyhow!("Failed to read \"{}\"!\n    {}", args.file.display(), err))?;
    let config = Config {
        use_mouse: !args.no_mouse,
        ..args.converter.config()?
    };
    let mut replay = Replay::new(&SUN_TO_USB, config);

    for delivery in &deliveries {
        let reports = replay.feed(delivery);
        println!(
            "{:>4}: {} {}",
            delivery.line,
            delivery.source.tag(),
            replay::hex(&delivery.bytes)
        );
        for report in reports {
            if args.verbose {
                println!(
                    "      {:<27} {}",
                    replay::hex(&report),
                    replay::describe_report(&report)
                );
            } else {
                println!("      {}", replay::describe_report(&report));
            }
        }
    }
    if !replay.macros().is_adjusted() {
        warn!("no layout reported; special keys used the default shortcuts");
    }
    Ok(())
}

fn table(args: &TableArgs) -> Result<()> {
    let config = args.converter.config()?;
    let mut macros = MacroTable::new();
    if let Some(layout) = config.force_layout {
        macros.adjust_to_layout(layout);
    }
    for line in replay::table_lines(&SUN_TO_USB, &macros, config.use_macros) {
        println!("{line}");
    }
    Ok(())
}

fn list_layouts() -> Result<()> {
    for layout in Layout::ALL {
        println!("{:02X}: {}", layout.id(), layout.name());
    }
    Ok(())
}

fn list_keycodes(args: &ListKeycodesArgs) -> Result<()> {
    let iter = keycodes::keycodes_iter();
    let mut codes: Vec<&KeycodeName> = if let Some(pattern) = &args.pattern {
        let pattern = pattern.to_lowercase();
        if let Some(hex) = pattern.strip_prefix("0x") {
            let pattern = u8::from_str_radix(hex, 16)?;
            iter.filter(|p| p.code == pattern).collect()
        } else {
            let pattern = pattern.as_str();
            iter.filter(|p| p.name.to_lowercase().contains(pattern))
                .collect()
        }
    } else {
        iter.collect()
    };
    if args.sort_by_keycode {
        codes.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.name.cmp(b.name)));
    } else {
        codes.sort_by_key(|k| k.name.to_lowercase());
    }
    for d in codes {
        if args.verbose {
            println!("{:02X}: {}", d.code, d.name);
        } else {
            println!("{}", d.name);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay(args) => replay(args),
        Commands::Table(args) => table(args),
        Commands::Layouts => list_layouts(),
        Commands::KeycodesList(args) => list_keycodes(args),
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod test;
