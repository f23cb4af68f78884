use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard)> {
    let context = build_context(config_path)?;
    let log_guard = infra::logging::init(&context.config.logging)?;

    Ok((context, log_guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().context("loading configuration")?;

    Ok(AppContext::new(config))
}
