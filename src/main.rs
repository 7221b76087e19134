use clap::Parser;
use guided_tour::utils::{logger, validation::Validate};
use guided_tour::{build_sections, CliConfig, OutputFormat, TourEngine, TourError, Transcript};

fn print_text(transcripts: &[Transcript]) {
    for transcript in transcripts {
        println!("==== {} ====", transcript.section);
        for line in &transcript.lines {
            println!("{}", line);
        }
        println!();
    }
}

fn fail(e: &TourError) -> ! {
    tracing::error!("❌ Tour failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.format {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose),
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting guided-tour");
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.resolve().unwrap_or_else(|e| fail(&e));

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let sections = build_sections(&config).unwrap_or_else(|e| fail(&e));
    let engine = TourEngine::new(sections);

    match engine.run().await {
        Ok(transcripts) => match cli.format {
            OutputFormat::Text => print_text(&transcripts),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&transcripts)?),
        },
        Err(e) => fail(&e),
    }

    Ok(())
}
