// Command-line interface for coursemark
//
// This binary converts lecture markup files into HTML and the derived views (table of
// contents, heading outline, lecture metadata).
//
// Converting:
//
// The target format is taken from --to. Without it, the format is detected from the
// extension of the --output file, and HTML is used when neither is given.
// Usage:
//  coursemark <input> [--to <format>] [--output <file>]          - Convert (default)
//  coursemark convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  coursemark toc <input>                   - Table of contents fragment
//  coursemark metadata <input>              - Lecture metadata as JSON
//  coursemark inspect <path> [<transform>]  - Execute a transform (defaults to "line-classes")
//  coursemark generate-css                  - Print the baseline stylesheet
//  coursemark --list-formats                - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Keys that mirror configuration settings
// (standalone, toc, theme, css, toc-title, toc-indent) update the loaded configuration;
// the rest are passed to the format or transform.
// Example:
//  coursemark lecture.md --to html --extra-standalone --extra-theme serif

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use coursemark::formats::{HtmlFormat, TocFormat};
use coursemark::registry::is_markup_file;
use coursemark::{FormatRegistry, TocOptions};
use coursemark_config::{CoursemarkConfig, Loader};
use std::collections::HashMap;
use std::fs;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &[
    "convert",
    "toc",
    "metadata",
    "inspect",
    "generate-css",
    "help",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

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

fn build_cli() -> Command {
    Command::new("coursemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lecture markup into HTML, tables of contents and metadata")
        .long_about(
            "coursemark converts lecture notes written in a small markdown dialect.\n\n\
            Commands:\n  \
            - convert:      Render to a registered format (html, toc, outline, metadata)\n  \
            - toc:          Table of contents fragment\n  \
            - metadata:     Lecture metadata as JSON\n  \
            - inspect:      View line classes and block transitions\n  \
            - generate-css: Print the baseline stylesheet\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            coursemark lecture.md                              # HTML fragment to stdout\n  \
            coursemark lecture.md -o lecture.html --extra-standalone\n  \
            coursemark lecture.md --to outline                 # Headings as JSON\n  \
            coursemark inspect lecture.md block-actions        # Debug block structure",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Convert a lecture to another format (default command)")
                .long_about(
                    "Convert a lecture markup file.\n\n\
                    Formats:\n  \
                    - html:     HTML fragment, or a standalone page (.html)\n  \
                    - toc:      Table of contents HTML fragment\n  \
                    - outline:  Heading outline as JSON (.json)\n  \
                    - metadata: Lecture metadata as JSON\n\n\
                    Without --to, the format is detected from the --output extension,\n\
                    falling back to html. Output goes to stdout by default.\n\n\
                    Examples:\n  \
                    coursemark convert lecture.md --to html\n  \
                    coursemark convert lecture.md -o lecture.html --extra-theme serif\n  \
                    coursemark lecture.md --to outline         # 'convert' is optional",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output if omitted)")
                        .value_hint(ValueHint::Other),
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
                .long_about(
                    "View the converter's intermediate steps.\n\n\
                    Transforms:\n  \
                    - line-classes:  Block state and classification per line (default)\n  \
                    - block-actions: State transitions and emitted actions per line\n  \
                    - outline-tree:  Headings as an indented tree\n\n\
                    Extra Parameters:\n  \
                    --extra-show-linum false   Hide the line number column",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the lecture file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'line-classes'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for standalone HTML")
                .long_about(
                    "Outputs the baseline CSS embedded into standalone HTML pages.\n\n\
                    Use this as a starting point for custom styling. Save it, edit it and\n\
                    pass it back with --extra-css <path> or `custom_css` in coursemark.toml.\n\n\
                    Examples:\n  \
                    coursemark generate-css > custom.css",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // A bare file argument means "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = build_registry(&config);
            let to = resolve_target_format(
                &registry,
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
            );
            let options = format_options(&config, &to, &extra_params);
            handle_convert_command(&registry, input, &to, output, &options);
        }
        Some((format @ ("toc" | "metadata"), sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = build_registry(&config);
            let options = format_options(&config, format, &extra_params);
            handle_convert_command(&registry, input, format, output, &options);
        }
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("line-classes");
            handle_inspect_command(path, transform, &extra_params);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn resolve_target_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
) -> String {
    if let Some(to) = explicit {
        return to.to_string();
    }
    match output.and_then(|path| registry.detect_format_from_filename(path)) {
        Some(detected) => {
            tracing::debug!(format = %detected, "detected target format from output filename");
            detected
        }
        None => "html".to_string(),
    }
}

/// Registry whose html and toc formats carry the loaded configuration.
fn build_registry(config: &CoursemarkConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(HtmlFormat::new(config.html_options()));
    registry.register(TocFormat::new(TocOptions::from(&config.convert.toc)));
    registry
}

/// Options handed to the target format. The custom stylesheet is only passed to `html`,
/// which reads it, so other targets never touch the file.
fn format_options(
    config: &CoursemarkConfig,
    to: &str,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = extra_params.clone();
    if to == "html" {
        if let Some(css_path) = &config.convert.html.custom_css {
            options.insert("css-path".to_string(), css_path.clone());
        }
    }
    options
}

/// Handle the convert command (also backs `toc` and `metadata`)
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if !is_markup_file(input) {
        tracing::warn!(input, "input does not have a markdown extension, converting anyway");
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&source, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::info!(input, output = path, format = to, "wrote output");
        }
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, extra_params: &HashMap<String, String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, extra_params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", coursemark::formats::get_default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<10} {}", format.description());
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> CoursemarkConfig {
    let loader = Loader::new().with_optional_file("coursemark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut CoursemarkConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = extra_params.remove("standalone") {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(raw) = extra_params.remove("toc") {
        config.convert.html.toc = parse_bool_arg("toc", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.convert.html.theme = raw;
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = Some(path);
    }

    if let Some(title) = extra_params.remove("toc-title") {
        config.convert.toc.title = title;
    }
    if let Some(raw) = extra_params.remove("toc-indent") {
        config.convert.toc.indent_px = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid pixel value '{raw}' for --extra-toc-indent");
            std::process::exit(1);
        });
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
