//! MedConf content server
//!
//! Serves resolved bilingual page content as JSON, or renders a single page
//! to stdout.
//!
//! Usage:
//!   medconf-site serve --port 8080 --cms-url https://cms.medconf-eval.com/api
//!   medconf-site render about --lang en

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use medconf_cms::{
    CmsConfig, HttpOverrideSource, LoadOutcome, OfflineSource, OverrideSource, PageSession,
};
use medconf_content::{
    EscapeMarkup, MediaConfig, RenderContext, Sanitizer, TrustedMarkup, resolve_page,
};
use medconf_pages::Page;
use medconf_site::{AppState, build_router};
use medconf_types::{Language, Preferences};
use std::{path::PathBuf, sync::Arc};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "medconf-site")]
#[command(about = "MedConf bilingual content server")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Content-management API base URL (offline mode when omitted)
    #[arg(long, global = true)]
    cms_url: Option<String>,

    /// Domain prefix for relative media paths
    #[arg(long, global = true, default_value = "https://api.medconf-eval.com")]
    media_domain: String,

    /// Saved language/font preferences
    #[arg(long, global = true, default_value = "preferences.json")]
    preferences: PathBuf,

    /// Escape backend markup instead of trusting it
    #[arg(long, global = true)]
    escape_markup: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API
    Serve {
        /// HTTP port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Resolve one page and print it as JSON
    Render {
        /// Page slug (home, about, contact, founder, conferences, articles)
        page: String,

        /// Language tag; defaults to the saved preference
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let prefs = Preferences::load(&args.preferences);
    debug!(language = %prefs.language, font = %prefs.font_family, "Loaded preferences");

    let source = build_source(args.cms_url.as_deref())?;
    let media = MediaConfig::with_domain(args.media_domain.clone());
    let sanitizer: Arc<dyn Sanitizer> = if args.escape_markup {
        Arc::new(EscapeMarkup)
    } else {
        Arc::new(TrustedMarkup)
    };

    match args.command {
        Command::Serve { port } => {
            let state = AppState::new(source, media, sanitizer, prefs.language);
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
                .await
                .with_context(|| format!("failed to bind port {}", port))?;
            info!("MedConf content API listening on port {}", port);
            axum::serve(listener, build_router(state)).await?;
        }
        Command::Render { page, lang } => {
            let Some(page) = Page::from_slug(&page) else {
                bail!("unknown page: {}", page);
            };
            let lang = lang.as_deref().map_or(prefs.language, Language::from_tag);

            let session = PageSession::from_arc(source);
            let visit = session.navigate(page.slug()).await;
            if let LoadOutcome::Failed(reason) = session.load(&visit).await {
                info!("Rendering defaults, override fetch failed: {}", reason);
            }
            let overrides = session.overrides().await;
            let ctx = RenderContext::new(&media, sanitizer.as_ref());
            let resolved = resolve_page(&page.spec(), lang, overrides.as_deref(), &ctx);
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }

    Ok(())
}

fn build_source(cms_url: Option<&str>) -> Result<Arc<dyn OverrideSource>> {
    match cms_url {
        Some(url) => {
            let source = HttpOverrideSource::new(CmsConfig::with_base_url(url))
                .context("failed to create CMS client")?;
            info!("Using content-management API at {}", url);
            Ok(Arc::new(source))
        }
        None => {
            info!("No CMS configured, serving static content");
            Ok(Arc::new(OfflineSource))
        }
    }
}
