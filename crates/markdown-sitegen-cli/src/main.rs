use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::site;
use std::{env, path::PathBuf, process};

/// Copies the static assets, then renders every content page.
fn build_site(config: &Config) -> Result<Vec<PathBuf>> {
    site::copy_static(&config.static_dir, &config.public_dir).with_context(|| {
        format!(
            "Failed to copy static files from {}",
            config.static_dir.display()
        )
    })?;

    let pages = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
        &config.base_path,
    )
    .with_context(|| {
        format!(
            "Failed to generate pages from {}",
            config.content_dir.display()
        )
    })?;

    Ok(pages)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("markdown-sitegen", String::as_str);
    let config_path = Config::config_path();

    let base_path = match args.len() {
        0 | 1 => None,
        2 => Some(args[1].clone()),
        _ => {
            eprintln!("Usage: {program} [base-path]");
            process::exit(1);
        }
    };

    // Config file is optional; defaults describe the usual site layout
    let mut config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Using config file {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} [base-path]");
            process::exit(1);
        }
    };
    if let Some(base_path) = base_path {
        config.base_path = base_path;
    }

    let pages = build_site(&config)?;
    log::info!(
        "Generated {} page(s) into {} with base path {}",
        pages.len(),
        config.public_dir.display(),
        config.base_path
    );

    Ok(())
}
