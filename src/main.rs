use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;
use serde::Serialize;
use thiserror::Error;

use release_catalog::catalog::{Catalog, WayContent};
use release_catalog::render;
use release_catalog::storage::{self, ManifestStore, StoreError};
use release_catalog::{env, util};

#[derive(Parser, Debug)]
#[command(
    name = "release-catalog",
    author,
    version,
    about = "Browse download manifests as one normalized release tree"
)]
struct Cli {
    /// Print the version and exit.
    #[arg(long)]
    version_only: bool,

    /// Content root holding software-config.json (defaults to $RELEASE_CATALOG_ROOT or ./public).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List enabled apps in display order.
    Apps,
    /// List the download ways of an app.
    Ways { app: String },
    /// Show the releases published by one download way.
    Show {
        app: String,
        way: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show a manifest file directly, without a catalog.
    Inspect {
        file: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(clap::Args, Debug)]
struct ViewArgs {
    /// Directory names to drill into, separated by `/`.
    #[arg(long, default_value = "")]
    path: String,
    /// Print the normalized content as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown app {0:?}")]
    UnknownApp(String),
    #[error("app {app:?} has no download way {way:?}")]
    UnknownWay { app: String, way: String },
    #[error("unable to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.version_only {
        println!("release-catalog {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let store = ManifestStore::new(env::content_root(cli.root));
    let command = cli.command.unwrap_or(Command::Apps);
    match run(&store, command).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(store: &ManifestStore, command: Command) -> Result<String, CliError> {
    match command {
        Command::Apps => {
            let catalog = store.load_catalog().await?;
            Ok(list_apps(&catalog))
        }
        Command::Ways { app } => {
            let catalog = store.load_catalog().await?;
            list_ways(&catalog, &app)
        }
        Command::Show { app, way, view } => {
            let catalog = store.load_catalog().await?;
            let selected = catalog
                .way(&app, &way)
                .ok_or_else(|| CliError::UnknownWay {
                    app: app.clone(),
                    way: way.clone(),
                })?;
            let content = store.load_way(selected, &util::split_path(&view.path)).await?;
            let title = format!(
                "{} - {}",
                catalog.app_display_name(&app),
                catalog.way_display_name(&app, &way)
            );
            present(&title, &content, view.json)
        }
        Command::Inspect { file, view } => {
            let raw = storage::read_manifest_file(&file).await?;
            let manifest = release_catalog::load(&raw, &util::split_path(&view.path));
            present(
                &file.display().to_string(),
                &WayContent::Tree(manifest),
                view.json,
            )
        }
    }
}

fn present(title: &str, content: &WayContent, json: bool) -> Result<String, CliError> {
    if json {
        to_json(content)
    } else {
        Ok(render::format_content(title, content))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn list_apps(catalog: &Catalog) -> String {
    let default_id = catalog.default_app().map(|app| app.id.as_str());
    catalog
        .visible_apps()
        .into_iter()
        .map(|app| {
            let marker = if Some(app.id.as_str()) == default_id { "*" } else { " " };
            format!("{marker} {:<12} {}\n", app.id, app.name)
        })
        .collect()
}

fn list_ways(catalog: &Catalog, app_id: &str) -> Result<String, CliError> {
    let app = catalog
        .app(app_id)
        .ok_or_else(|| CliError::UnknownApp(app_id.to_owned()))?;
    Ok(app
        .children
        .iter()
        .map(|way| {
            let mut line = format!("  {:<12} {}", way.id, way.name);
            if let Some(provider) = &way.provider {
                line.push_str(&format!(" ({provider})"));
            }
            if way.is_external() {
                line.push_str(" [remote]");
            }
            line.push('\n');
            line
        })
        .collect())
}
