mod cli;
mod session;
mod settings;
mod watch;

use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use document_engine::{DocumentFormat, DocumentLoader, HtmlPlainTextExtractor};
use status_logging::{status_info, status_warn, LevelFilter};

use cli::Cli;
use session::Session;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = init_config(&cli)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let (mut settings, settings_error) = match Settings::load(&cli.config) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    cli.apply_to(&mut settings);

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    status_logging::initialize(settings.log.into(), level, &settings.log_file);
    if let Some(err) = settings_error {
        status_warn!("{}; using default settings", err);
    }

    let loader = DocumentLoader::new(Box::new(HtmlPlainTextExtractor), settings.encoding.clone());
    let session = Session::new(loader, settings.character_limit, settings.report_dir.clone());
    let format = DocumentFormat::from(cli.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.watch {
        let [path] = cli.files.as_slice() else {
            bail!("--watch takes exactly one file");
        };
        status_info!("Watching {}", path.display());
        return watch::watch(
            &session,
            path,
            format,
            Duration::from_millis(cli.interval_ms.max(1)),
            &mut out,
        );
    }

    if cli.files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("reading document from stdin")?;
        let doc = session.loader().load_bytes("<stdin>", &bytes, format)?;
        let line = session.analyse(&doc)?;
        return Session::print(&mut out, &doc, &line, false);
    }

    let failures = session.run_files(&cli.files, format, &mut out);
    if failures > 0 {
        bail!("{} of {} documents failed", failures, cli.files.len());
    }
    Ok(())
}

/// Writes the effective settings to `--config`. An existing config that fails
/// to load is left as it is and the load error is returned.
fn init_config(cli: &Cli) -> Result<PathBuf> {
    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("refusing to overwrite {}", cli.config.display()))?;
    cli.apply_to(&mut settings);
    Ok(settings.save(&cli.config)?)
}
