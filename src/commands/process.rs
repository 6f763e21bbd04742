use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{playlist, writer, Config, PlaylistFetcher, Transformed};

/// Fetch `url`, filter and renumber it, and write the result to `output`.
///
/// The destination is only opened once the playlist has been fetched and
/// validated, so any earlier failure leaves it untouched.
pub fn run(url: &str, output: &Path, config: &Config) -> Result<Transformed> {
    eprintln!("{} {}", "Fetching playlist:".cyan(), url.yellow());

    let fetcher = PlaylistFetcher::new(Duration::from_secs(config.timeout_secs), &config.user_agent)?;
    let original = fetcher.fetch(url)?;

    eprintln!("{}", "Playlist fetched, processing...".cyan());

    let denylist = config.denylist();
    log::debug!("Denylist keywords: {:?}", denylist.keywords());
    let transformed = playlist::transform(&original, &denylist)?;

    writer::write_playlist(output, &transformed.text)?;

    eprintln!(
        "{} {}",
        "✓ Wrote processed playlist to".green(),
        output.display().to_string().bold()
    );
    eprintln!(
        "  {} {}  {} {}  {} {}",
        "channels:".dimmed(),
        transformed.channels,
        "filtered:".dimmed(),
        transformed.filtered,
        "ignored lines:".dimmed(),
        transformed.ignored
    );

    Ok(transformed)
}

/// Resolve the effective config from `--config`, `--keyword` and `--timeout`.
pub fn resolve_config(matches: &clap::ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(keywords) = matches.get_many::<String>("keyword") {
        config.set_keywords(keywords.cloned().collect());
    }

    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.set_timeout_secs(*timeout)?;
    }

    Ok(config)
}

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let url = matches
        .get_one::<String>("url")
        .context("URL argument is required")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("Output argument is required")?;

    let config = resolve_config(matches)?;
    run(url, output, &config)?;
    Ok(())
}
