use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

use gumlang::config::{ColorChoice, Config};
use gumlang::interpreter;
use gumlang::output::Output;

#[derive(Parser, Debug)]
#[command(name = "gum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the GUM scripting language", long_about = None)]
struct Args {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    #[arg(long = "color", value_name = "WHEN")]
    color: Option<ColorChoice>,

    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

struct AppConfig {
    color_enabled: bool,
    verbose: bool,
}

impl AppConfig {
    fn from_args(args: &Args, config: &Config) -> Self {
        let choice = args.color.unwrap_or(config.color);
        let color_enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr),
        };
        Self {
            color_enabled,
            verbose: args.verbose || config.verbose,
        }
    }
}

fn main() {
    let args = Args::parse();
    let config = AppConfig::from_args(&args, &Config::load());

    verbose_log(&config, &format!("Running {}", args.file.display()));

    let mut output = Output::stdout();
    if let Err(error) = interpreter::run_file(&args.file, &mut output) {
        error_message(&config, &format!("error: {}", error));
        process::exit(1);
    }

    verbose_log(&config, "Finished");
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[gum:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
