use clap::Parser;
use turning_grille::config::OutputFormat;
use turning_grille::core::{ConfigProvider, MessageSource};
use turning_grille::utils::error::ErrorSeverity;
use turning_grille::utils::{logger, validation::Validate};
use turning_grille::{
    CipherOutput, CliConfig, GrilleEngine, GrilleError, InlineMessage, StdinMessage, TomlConfig,
};

struct OutputOptions {
    format: OutputFormat,
    show_blocks: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting turning-grille");
    tracing::debug!("CLI config: {:?}", cli);

    let code = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            cli.apply_overrides(&mut config);
            let options = OutputOptions {
                format: if cli.format == OutputFormat::Json {
                    OutputFormat::Json
                } else {
                    config.output_format()
                },
                show_blocks: cli.show_blocks || config.show_blocks(),
            };
            let message = cli.message.clone().or_else(|| config.message().map(str::to_string));
            execute(config, message, options).await?
        }
        None => {
            let options = OutputOptions {
                format: cli.format,
                show_blocks: cli.show_blocks,
            };
            let message = cli.message.clone();
            execute(cli, message, options).await?
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn execute<C>(config: C, message: Option<String>, options: OutputOptions) -> anyhow::Result<i32>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return Ok(1);
    }

    let result = match message {
        Some(text) => run(config, InlineMessage::new(text)).await,
        None => run(config, StdinMessage).await,
    };

    match result {
        Ok(output) => {
            render(&output, &options)?;
            Ok(0)
        }
        Err(e) => {
            tracing::error!(
                "❌ Grille operation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            if let (OutputFormat::Json, GrilleError::InvalidGrilleCoverage(report)) = (options.format, &e) {
                println!("{}", serde_json::to_string_pretty(report)?);
            }

            Ok(match e.severity() {
                ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            })
        }
    }
}

async fn run<C: ConfigProvider, S: MessageSource>(config: C, source: S) -> turning_grille::Result<CipherOutput> {
    GrilleEngine::new(config, source).run().await
}

fn render(output: &CipherOutput, options: &OutputOptions) -> anyhow::Result<()> {
    match options.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(output)?);
        }
        OutputFormat::Text => {
            println!("{}", output.text);
            if options.show_blocks {
                println!("{}", output.blocks.join(" "));
                for (i, matrix) in output.matrices.iter().enumerate() {
                    println!("\nBlock {}:", i + 1);
                    print!("{}", matrix);
                }
            }
        }
    }
    Ok(())
}
