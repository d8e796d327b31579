//! resume-ats: ATS compatibility analyzer for structured resume data

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_ats::analysis::keywords::KeywordCategory;
use resume_ats::analysis::AtsAnalyzer;
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::AtsError;
use resume_ats::input::InputManager;
use resume_ats::output::{save_report_to_file, suggest_filename, AtsReport, ReportGenerator};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            detailed,
            save,
            save_dir,
            no_color,
        } => {
            info!("Starting ATS compatibility analysis");

            // Validate input file
            cli::validate_file_extension(&resume, &config.allowed_extensions())
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;

            // CLI flags override configuration
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let use_colors = config.output.color_output && !no_color && save.is_none() && save_dir.is_none();

            let start_time = Instant::now();

            let mut input_manager = InputManager::new();
            let resume_data = input_manager
                .load_resume(&resume)
                .await
                .with_context(|| format!("Failed to load resume from {}", resume.display()))?;

            let analyzer = AtsAnalyzer::new()?;
            let analysis = analyzer.analyze(&resume_data);
            info!(
                "Analysis complete: overall score {}% ({})",
                analysis.score.overall, analysis.estimated_ats_compatibility
            );

            let report = AtsReport::new(
                analysis,
                &resume.to_string_lossy(),
                &resume_data.personal_info.full_name,
                start_time.elapsed().as_millis() as u64,
            );

            let generator = ReportGenerator::with_options(
                use_colors,
                detailed,
                config.output.pretty_json,
                true,
                config.output.include_styles,
            );
            let content = generator
                .generate_report(&report, output_format)
                .context("Failed to format report")?;

            let target = match (save, save_dir) {
                (Some(path), _) => Some(path),
                (None, Some(dir)) => Some(dir.join(suggest_filename(
                    output_format,
                    &resume.to_string_lossy(),
                    config.output.timestamp_filenames,
                ))),
                (None, None) => None,
            };

            match target {
                Some(path) => {
                    save_report_to_file(&content, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Keywords { category } => {
            let selected = match category {
                Some(name) => Some(KeywordCategory::parse(&name).ok_or_else(|| {
                    AtsError::InvalidInput(format!(
                        "Unknown keyword category: {}. Supported: technology, academic, executive, general",
                        name
                    ))
                })?),
                None => None,
            };

            for category in KeywordCategory::ALL {
                if selected.is_some_and(|s| s != category) {
                    continue;
                }
                let keywords = category.keywords();
                println!("📚 {} ({} keywords)", category, keywords.len());
                println!("  {}\n", keywords.join(", "));
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    print_config(&config);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default()
                        .save_to(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    let format = match config.output.format {
        OutputFormat::Console => "console",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "markdown",
        OutputFormat::Html => "html",
    };
    println!("Output:");
    println!("  Format: {}", format);
    println!("  Detailed: {}", config.output.detailed);
    println!("  Colors: {}", config.output.color_output);
    println!("  Pretty JSON: {}", config.output.pretty_json);
    println!("  HTML styles: {}", config.output.include_styles);
    println!("  Timestamped file names: {}", config.output.timestamp_filenames);
    println!("\nInput:");
    println!(
        "  Allowed extensions: {}",
        config.input.allowed_extensions.join(", ")
    );
}
