use datasrc::consts::STORAGE_KEY;
use datasrc::source::{infer_from_location, normalize_source_key};
use datasrc::{
    AppError, Defaults, JsonFileStore, PageLocation, PreferenceStore, Resolution, SourceKey,
    resolve, toggle,
};
use serde_json::json;

use crate::cli::{Cli, Commands};
use crate::output::{
    data_url_json, infer_json, navigation_json, print_infer_table, print_resolution_table,
    resolution_json,
};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) location: PageLocation,
    pub(crate) store: JsonFileStore,
    pub(crate) defaults: Defaults,
}

impl CommandContext<'_> {
    fn resolve(&self) -> Resolution {
        resolve(&self.location, &self.store, &self.defaults)
    }
}

fn open_store(cli: &Cli) -> Result<JsonFileStore, AppError> {
    match &cli.storage {
        Some(path) => Ok(JsonFileStore::new(path)),
        None => Ok(JsonFileStore::open_default()?),
    }
}

/// Fallback identity for resolution: CLI flags merged with config, built-in values where unset
pub(crate) fn defaults(cli: &Cli) -> Defaults {
    let builtin = Defaults::default();
    Defaults {
        repo_owner: cli.owner.clone().unwrap_or(builtin.repo_owner),
        repo_name: cli.repo.clone().unwrap_or(builtin.repo_name),
        data_branch: cli.branch.clone().unwrap_or(builtin.data_branch),
    }
}

fn handle_resolve(ctx: &CommandContext<'_>) {
    let resolution = ctx.resolve();
    if ctx.cli.json {
        println!("{}", resolution_json(&resolution));
    } else {
        print_resolution_table(&resolution, ctx.cli.use_color());
    }
}

fn handle_data_url(ctx: &CommandContext<'_>, path: &str) {
    let resolution = ctx.resolve();
    if ctx.cli.json {
        println!("{}", data_url_json(&resolution, path));
    } else {
        println!("{}", resolution.config.data_url(path));
    }
}

fn handle_toggle(ctx: &CommandContext<'_>) {
    let current = ctx.resolve().key;
    let nav = toggle(current, &ctx.location, &ctx.store);
    if ctx.cli.json {
        println!("{}", navigation_json(&nav));
    } else {
        println!("Switched {} -> {}", current, nav.key);
        println!("{}", nav.href);
    }
}

fn handle_set(ctx: &CommandContext<'_>, source: &str) -> Result<(), AppError> {
    let key: SourceKey = source.parse()?;
    ctx.store.set(STORAGE_KEY, key.as_str())?;
    if ctx.cli.json {
        println!("{}", json!({ "saved": key, "storage": ctx.store.path() }));
    } else {
        println!("Saved preference: {key} ({})", ctx.store.path().display());
    }
    Ok(())
}

fn handle_infer(cli: &Cli) -> Result<(), AppError> {
    let location = PageLocation::parse(cli.page_url())?;
    let info = infer_from_location(&location);
    if cli.json {
        println!("{}", infer_json(location.href(), &info));
    } else {
        print_infer_table(location.href(), &info, cli.use_color());
    }
    Ok(())
}

fn handle_normalize(cli: &Cli, value: &str) {
    let key = normalize_source_key(Some(value));
    if cli.json {
        println!("{}", json!({ "input": value, "source": key }));
        return;
    }
    match key {
        Some(key) => println!("{key}"),
        None => println!("No match for \"{value}\" (falls through to the next input)"),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let command = cli.command.clone().unwrap_or(Commands::Resolve);

    // commands that need neither storage nor a resolved source
    match &command {
        Commands::Normalize { value } => {
            handle_normalize(cli, value);
            return Ok(());
        }
        Commands::Infer => return handle_infer(cli),
        _ => {}
    }

    let ctx = CommandContext {
        cli,
        location: PageLocation::parse(cli.page_url())?,
        store: open_store(cli)?,
        defaults: defaults(cli),
    };

    match command {
        Commands::Resolve => handle_resolve(&ctx),
        Commands::DataUrl { path } => handle_data_url(&ctx, &path),
        Commands::Toggle => handle_toggle(&ctx),
        Commands::Set { source } => handle_set(&ctx, &source)?,
        Commands::Normalize { .. } | Commands::Infer => unreachable!(),
    }
    Ok(())
}
