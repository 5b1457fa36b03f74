//! # CLI Dispatch
//!
//! Turns parsed arguments into one API call and prints the result:
//!
//! - `--update` → sync upstream pages with git
//! - `--edit NAME` → editor round-trip for a user page
//! - `--dirs` → print candidate directories
//! - `NAME` → look up, parse and render a page
//!
//! Lookup settings resolve flag → config file → environment default
//! (host OS for the platform, `$LANG` for the language).

use super::render::{print_messages, render_dirs};
use super::setup::Cli;
use clap::Parser;
use console::Term;
use tldrpage::api::LookupOptions;
use tldrpage::config::TldrConfig;
use tldrpage::editor::SystemEditor;
use tldrpage::error::{Result, TldrError};
use tldrpage::init::{initialize, TldrContext};
use tldrpage::location::{default_platform, language_from_locale};
use tldrpage::render::render;
use tldrpage::upstream::SystemGit;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(None)?;
    let use_color = !cli.no_color && ctx.config.color && Term::stdout().features().colors_supported();
    let upstream_url = cli
        .remote
        .clone()
        .unwrap_or_else(|| ctx.config.upstream_url.clone());

    if cli.update {
        return handle_update(&ctx, &upstream_url, use_color);
    }
    if let Some(name) = &cli.edit {
        return handle_edit(&ctx, name, use_color);
    }

    let env_lang = std::env::var("LANG").unwrap_or_default();
    let options = lookup_options(&cli, &ctx.config, upstream_url, &env_lang);

    if cli.dirs {
        return handle_dirs(&ctx, &options);
    }

    match &cli.name {
        Some(name) => handle_show(&ctx, &options, name, use_color),
        None => Err(TldrError::Usage("command name not specified".to_string())),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn lookup_options(
    cli: &Cli,
    config: &TldrConfig,
    upstream_url: String,
    env_lang: &str,
) -> LookupOptions {
    let platform = cli
        .platform
        .clone()
        .or_else(|| config.platform.clone())
        .unwrap_or_else(|| default_platform().to_string());
    let language = cli
        .lang
        .clone()
        .or_else(|| config.language.clone())
        .unwrap_or_else(|| language_from_locale(env_lang));

    LookupOptions::new(upstream_url)
        .with_platform(platform)
        .with_language(language)
        .with_index(cli.index)
}

fn handle_show(ctx: &TldrContext, options: &LookupOptions, name: &str, use_color: bool) -> Result<()> {
    let result = ctx.api.show(options, name)?;
    if let Some(page) = &result.page {
        print!("{}", render(page, use_color));
    }
    print_messages(&result.messages, use_color);
    Ok(())
}

fn handle_dirs(ctx: &TldrContext, options: &LookupOptions) -> Result<()> {
    let result = ctx.api.candidate_dirs(options)?;
    println!("{}", render_dirs(&result.candidate_dirs));
    Ok(())
}

fn handle_edit(ctx: &TldrContext, name: &str, use_color: bool) -> Result<()> {
    let editor = SystemEditor::detect()?;
    let result = ctx.api.edit(&editor, &std::env::temp_dir(), name)?;
    print_messages(&result.messages, use_color);
    Ok(())
}

fn handle_update(ctx: &TldrContext, url: &str, use_color: bool) -> Result<()> {
    let result = ctx.api.update(&SystemGit, url)?;
    print_messages(&result.messages, use_color);
    Ok(())
}
