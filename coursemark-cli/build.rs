use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["line-classes", "block-actions", "outline-tree"];

const FORMATS: &[&str] = &["html", "metadata", "outline", "toc"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input lecture markup file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("coursemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lecture markup into HTML, tables of contents and metadata")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a coursemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a lecture to another format")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("toc")
                .about("Output the table of contents for a lecture")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("metadata")
                .about("Output the lecture metadata as JSON")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how the converter reads a lecture")
                .arg(
                    Arg::new("path")
                        .help("Path to the lecture file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css").about("Output the baseline CSS used for standalone HTML"),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "coursemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "coursemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "coursemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
