mod cli;
mod error;

use crate::cli::Cli;
use crate::error::{ErrorKind, Result};
use canvas_config::{Config, SessionConfig};
use canvas_crawl::{CourseFilter, Crawler};
use canvas_session::{Browser, ClientOptions, Credentials, Session, Url};
use canvas_storage::LocalBackend;
use clap::Parser;
use exn::ResultExt;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = canvas_config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let base = Url::parse(&config.base_url).or_raise(|| ErrorKind::Config)?;
    let session = Session::connect(
        base,
        &credentials(&config.session)?,
        config.session.domain.as_deref(),
        &client_options(&config.session),
    )
    .or_raise(|| ErrorKind::Session)?;

    let cwd = std::env::current_dir().or_raise(|| ErrorKind::Storage)?;
    let storage = LocalBackend::new(output_dir(&cwd, &cli, &config)).or_raise(|| ErrorKind::Storage)?;

    let filter = if cli.courses.is_empty() {
        CourseFilter::all()
    } else {
        CourseFilter::only(cli.courses)
    };
    Crawler::new(&session, &storage)
        .with_filter(filter)
        .run()
        .or_raise(|| ErrorKind::Crawl)?;
    Ok(())
}

/// A raw cookie header takes precedence over a cookie file; with neither,
/// cookies are read from the browser.
fn credentials(session: &SessionConfig) -> Result<Credentials> {
    match (&session.cookie, &session.cookie_file) {
        (Some(cookie), _) => Ok(Credentials::Header(cookie.clone())),
        (None, Some(path)) => Ok(Credentials::CookieFile(path.clone())),
        (None, None) => {
            let browser = match &session.browser {
                Some(name) => name.parse::<Browser>().or_raise(|| ErrorKind::Config)?,
                None => Browser::default(),
            };
            Ok(Credentials::Browser(browser))
        },
    }
}

fn client_options(session: &SessionConfig) -> ClientOptions {
    let defaults = ClientOptions::default();
    ClientOptions {
        user_agent: session.user_agent.clone().unwrap_or(defaults.user_agent),
        timeout: session.timeout(),
    }
}

/// `--output` wins over the config; relative paths hang off the working directory.
fn output_dir(cwd: &Path, cli: &Cli, config: &Config) -> PathBuf {
    cwd.join(cli.output.as_ref().unwrap_or(&config.output))
}
