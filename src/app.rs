use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::{self, Catalog};
use crate::config;
use crate::controller::{self, Controller, ControllerError};
use crate::logging;
use crate::navigator::Navigator;
use crate::ui;
use crate::view::ViewState;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_file: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

pub fn run(options: RunOptions) -> Result<()> {
    let cfg = load_config(&options)?;
    if let Err(err) = logging::init() {
        eprintln!("warning: logging disabled: {err:#}");
    }
    tracing::info!(version = crate::VERSION, "Ani Vision starting");

    let catalog_path = options.catalog_path.or(cfg.catalog.path.clone());
    let (catalog, load_error) = match catalog_path.as_deref() {
        Some(path) => match Catalog::from_path(path) {
            Ok(catalog) => (Arc::new(catalog), None),
            Err(err) => {
                let detail = format!("catalog {} ({err})", friendly_path(path));
                (Catalog::embedded(), Some(ControllerError::MissingDependency(detail)))
            }
        },
        None => (Catalog::embedded(), None),
    };

    let status = match (&load_error, catalog_path.as_deref()) {
        (Some(_), _) => "Catalog failed to load; showing the built-in catalog".to_string(),
        (None, Some(path)) => format!("Catalog: {}", friendly_path(path)),
        (None, None) => "Catalog: built-in".to_string(),
    };

    let viewport_width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(u16::MAX);
    let controller_options = controller::Options {
        narrow_width: cfg.ui.narrow_width,
        notice_ttl: cfg.notifications.ttl,
        viewport_width,
    };

    let mut controller = Controller::new(
        Navigator::new(catalog),
        ViewState::new(),
        ui::TerminalSink::new(),
        controller_options,
    );
    if let Some(err) = load_error {
        controller.report(err);
    }

    let mut model = ui::Model::new(
        controller,
        ui::Options {
            theme: cfg.ui.theme.clone(),
            tick_rate: cfg.ui.tick_rate,
            qualities: cfg.download.qualities.clone(),
            status_message: status,
        },
    );
    model.run()?;

    tracing::info!("Ani Vision exiting");
    Ok(())
}

/// One line per category: id, display name and video count.
pub fn list_categories(options: &RunOptions) -> Result<String> {
    let cfg = load_config(options)?;
    let catalog = match options.catalog_path.as_ref().or(cfg.catalog.path.as_ref()) {
        Some(path) => Arc::new(
            Catalog::from_path(path)
                .with_context(|| format!("load catalog {}", path.display()))?,
        ),
        None => Catalog::embedded(),
    };

    let mut out = String::new();
    let ids = std::iter::once(catalog::ALL)
        .chain(catalog.categories().iter().map(|entry| entry.id.as_str()));
    for id in ids {
        out.push_str(&format!(
            "{id}\t{}\t{}\n",
            catalog.display_name(id),
            catalog.videos(id).len()
        ));
    }
    Ok(out)
}

fn load_config(options: &RunOptions) -> Result<config::Config> {
    config::load(config::LoadOptions {
        config_file: options.config_file.clone(),
        env_prefix: None,
    })
    .context("load config")
}

fn friendly_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            let mut display = String::from("~");
            if !stripped.as_os_str().is_empty() {
                display.push_str(&format!("/{}", stripped.display()));
            }
            return display;
        }
    }
    path.display().to_string()
}
