use anyhow::Context;
use clap::{command, value_parser, Arg, ArgMatches, Command};
use gesture_annotator::config::{normalize_host, Config, DEFAULT_DATASET, DEFAULT_OUTPUT};
use gesture_annotator::describer::{OllamaClient, DEFAULT_HOST, DEFAULT_MODEL};
use gesture_annotator::pipeline::annotate_dataset;
use gesture_annotator::writer::AnnotationWriter;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn cli() -> Command {
    command!().args([
        Arg::new("dataset")
            .long("dataset")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_DATASET)
            .help("Dataset root with one directory per user"),
        Arg::new("output")
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_OUTPUT)
            .help("CSV file to write (truncated)"),
        Arg::new("model")
            .long("model")
            .default_value(DEFAULT_MODEL)
            .help("Vision-language model identifier"),
        Arg::new("host")
            .long("host")
            .env("OLLAMA_HOST")
            .default_value(DEFAULT_HOST)
            .help("Ollama server URL"),
    ])
}

fn config_from_matches(matches: &ArgMatches) -> Config {
    let mut config = Config::default();
    if let Some(dataset) = matches.get_one::<PathBuf>("dataset") {
        config.dataset = dataset.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(host) = matches.get_one::<String>("host") {
        config.host = normalize_host(host);
    }
    config
}

fn run(config: &Config) -> anyhow::Result<usize> {
    let mut describer = OllamaClient::new(config.host.as_str(), config.model.as_str())
        .context("Couldn't build HTTP client")?;
    let mut writer = AnnotationWriter::create(&config.output)
        .with_context(|| format!("Couldn't create {}", config.output.display()))?;

    let rows = annotate_dataset(&config.dataset, &mut describer, &mut writer)
        .with_context(|| format!("Annotation of {} aborted", config.dataset.display()))?;
    writer.into_inner()?;
    Ok(rows)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_annotator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config_from_matches(&cli().get_matches());
    tracing::info!(
        dataset = %config.dataset.display(),
        output = %config.output.display(),
        model = %config.model,
        host = %config.host,
        "Initializing..."
    );

    let rows = run(&config)?;
    tracing::info!("Wrote {} rows to {}", rows, config.output.display());
    Ok(())
}
