use clap::{Parser, Subcommand};
use logo_forge::catalog::GenerateOptions;
use logo_forge::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logo-forge")]
#[command(about = "Generate favicons, app icons and social cards from one logo")]
#[command(long_about = "\
Generate favicons, app icons and social cards from one logo

One source image (PNG, JPEG, WebP, ...) becomes a fixed tree of web assets:

  <output>/
  ├── favicon/     16/32/48 PNGs, multi-size favicon.ico, favicon.svg
  ├── header/      32/40/64 logos + 256px high-res versions for tracing
  ├── social/      OpenGraph (1200x630) and Twitter (1200x600) JPEG cards
  ├── app-icons/   128/192/256/512 icons, rounded and solid-background variants
  └── brand/       100/200/400 logos

Rounded and circular variants are produced unless disabled.

Run 'logo-forge gen-config' to print a documented style file.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every asset from a source logo
    Generate(GenerateArgs),
    /// Print a stock style config with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Source logo image
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "public/images/logo")]
    output: PathBuf,

    /// Skip rounded-corner variants
    #[arg(long)]
    no_rounded: bool,

    /// Skip circular variants
    #[arg(long)]
    no_circle: bool,

    /// Only the plain variants (same as --no-rounded --no-circle)
    #[arg(long)]
    only_basic: bool,

    /// Style config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            rounded: !(self.no_rounded || self.only_basic),
            circle: !(self.no_circle || self.only_basic),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", error_report(err.as_ref()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Generate(args) => {
            let style = config::load_config(args.config.as_deref())?;
            println!("==> Generating from {}", args.input.display());
            let assets = generate::generate(&args.input, &args.output, args.options(), style)?;
            output::print_generate_output(&assets, &args.output);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The user-facing error line: the error's message, not its debug form.
fn error_report(err: &dyn std::error::Error) -> String {
    format!("Error: {err}")
}
