//! Marble World Inspector CLI

use clap::{Parser, Subcommand};
use colored::*;
use marble_inspector::cli::{run_preview, HttpWorldSource};
use marble_inspector::packager::{build_extension, PackageOptions};
use marble_inspector::parser::parse_options_from_file;
use marble_inspector::view::panel::PanelContent;
use marble_inspector::{extract_world_id, InspectorOptions, Language, Translator};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "marble-inspector")]
#[command(about = "World details sidebar for marble.worldlabs.ai", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the world identifier found in a page URL
    Extract {
        /// Page URL, e.g. https://marble.worldlabs.ai/world/<uuid>
        url: String,
    },

    /// Open the sidebar for a world page and print what it shows
    Preview {
        /// Page URL of the world
        url: String,

        /// Display language (en, zh_CN)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// JSON5 options file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the sidebar markup instead of its text
        #[arg(long)]
        html: bool,
    },

    /// Build the unpacked extension and its zip archive
    Package {
        /// Output directory for the unpacked extension
        #[arg(short, long)]
        output: PathBuf,

        /// wasm-pack output directory to bundle
        #[arg(long)]
        wasm_pkg: Option<PathBuf>,

        /// Version written to the manifest
        #[arg(long)]
        version: Option<String>,

        /// Skip the zip archive
        #[arg(long)]
        no_archive: bool,

        /// JSON5 options file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { url } => match extract_world_id(&url) {
            Some(id) => println!("{}", id),
            None => {
                eprintln!("{}", "❌ No world identifier in URL".red().bold());
                std::process::exit(1);
            }
        },

        Commands::Preview { url, language, config, html } => {
            let language = match language.parse::<Language>() {
                Ok(language) => language,
                Err(e) => fail("Invalid language", e),
            };
            let options = load_options(config.as_deref());
            let source = match HttpWorldSource::new(options.api_base_url.clone()) {
                Ok(source) => source,
                Err(e) => fail("Failed to set up HTTP client", e),
            };
            let t = Translator::new(language);

            let runtime = tokio::runtime::Runtime::new()
                .expect("failed to initialize async runtime");

            match runtime.block_on(run_preview(&options, &source, &url, &t)) {
                Ok(preview) => {
                    let status = match &preview.content {
                        Some(PanelContent::Loaded(_)) => "✅ Loaded".green().bold(),
                        Some(PanelContent::Error) => "⚠️  Failed to load".yellow().bold(),
                        _ => "ℹ️  Nothing rendered".blue().bold(),
                    };
                    println!("{} {}", status, format!("({:?})", preview.completion).dimmed());
                    println!("{}", "=".repeat(50).blue());
                    if html {
                        println!("{}", preview.sidebar_html);
                    } else {
                        println!("{}", preview.sidebar_text);
                    }
                }
                Err(e) => fail("Preview failed!", e),
            }
        }

        Commands::Package { output, wasm_pkg, version, no_archive, config } => {
            println!("{}", "Packaging Marble World Inspector".bold().blue());
            println!("{}", "=".repeat(50).blue());
            println!();

            let options = load_options(config.as_deref());
            let mut package = PackageOptions {
                wasm_pkg,
                create_archive: !no_archive,
                ..Default::default()
            };
            if let Some(version) = version {
                package.version = version;
            }
            if package.wasm_pkg.is_none() {
                println!("{}", "⚠️  No --wasm-pkg given, the package will not load until pkg/ is added".yellow());
            }

            let archive = match build_extension(&options, &package, &output) {
                Ok(archive) => archive,
                Err(e) => fail("Packaging failed!", e),
            };

            if let Err(e) = marble_inspector::validator::validate_extension(&output) {
                fail("Package failed validation!", e);
            }

            println!("{}", "✅ Extension built successfully!".green().bold());
            println!("  - Version: {}", package.version);
            println!("  - Directory: {}", output.display());
            if let Some(archive) = archive {
                println!("  - Archive: {}", archive.display());
            }
        }
    }
}

fn load_options(config: Option<&Path>) -> InspectorOptions {
    match config {
        Some(path) => match parse_options_from_file(path) {
            Ok(options) => options,
            Err(e) => fail("Failed to load options!", e),
        },
        None => InspectorOptions::default(),
    }
}

fn fail(headline: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}", format!("❌ {}", headline).red().bold());
    eprintln!("{}", format!("Error: {:#}", error).red());
    std::process::exit(1);
}
