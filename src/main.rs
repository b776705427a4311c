use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use embheat::{HeatmapConfig, HeatmapRenderer, HttpRowSource, display_label};

fn usage() -> ! {
    eprintln!(
        "usage: embheat [--config <file>] [--sorted] [--normalized] [-o <out.png>] [dataset]"
    );
    process::exit(2);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut output = PathBuf::from("heatmap.png");
    let mut sorted = None;
    let mut normalized = None;
    let mut dataset = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(args.next().map(PathBuf::from).unwrap_or_else(|| usage())),
            "-o" | "--output" => output = args.next().map(PathBuf::from).unwrap_or_else(|| usage()),
            "--sorted" => sorted = Some(true),
            "--normalized" => normalized = Some(true),
            "-h" | "--help" => usage(),
            other if !other.starts_with('-') => dataset = Some(other.to_string()),
            _ => usage(),
        }
    }

    let mut config = match config_path {
        Some(path) => HeatmapConfig::from_file(&path)?,
        None => HeatmapConfig::default(),
    };
    if let Some(dataset) = dataset {
        config.dataset = dataset;
    }
    if let Some(sorted) = sorted {
        config.sorted = sorted;
    }
    if let Some(normalized) = normalized {
        config.normalized = normalized;
    }
    config.validate()?;

    let source = HttpRowSource::new(&config)?;
    let mut renderer = HeatmapRenderer::new(source, &config);

    info!(
        dataset = %display_label(&config.dataset),
        sorted = config.sorted,
        normalized = config.normalized,
        base_url = %config.base_url,
        "rendering heatmap"
    );
    renderer.load_and_render().await?;

    let frame = renderer.frame().ok_or("no frame rendered")?;
    frame.save(&output)?;
    info!(
        width = frame.width(),
        height = frame.height(),
        output = %output.display(),
        "wrote heatmap"
    );
    Ok(())
}
