//! Controller tuning from parameter overrides.

use std::fmt;

use align_shoot_core::command::AlignShootConfig;
use align_shoot_core::parameters::{AlignParams, ParameterStore};
use log::info;

use crate::error::SimulatorError;

/// Split a `NAME=VALUE` override.
pub fn parse_override(arg: &str) -> Result<(String, String), SimulatorError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(SimulatorError::InvalidArgument(format!(
            "expected NAME=VALUE, got '{arg}'"
        ))),
    }
}

/// One tuning parameter as registered.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Parameter name.
    pub name: String,
    /// Default value.
    pub value: f32,
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
    /// Overrides are rejected.
    pub read_only: bool,
}

impl fmt::Display for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:>8} [{} .. {}]{}",
            self.name,
            self.value,
            self.min,
            self.max,
            if self.read_only { " read-only" } else { "" }
        )
    }
}

fn default_store() -> Result<ParameterStore, SimulatorError> {
    let mut store = ParameterStore::new();
    AlignParams::register_defaults(&mut store)?;
    Ok(store)
}

/// Tuning parameters with their defaults and bounds, in registration order.
pub fn list_parameters() -> Result<Vec<ParameterInfo>, SimulatorError> {
    let store = default_store()?;
    let params: Vec<ParameterInfo> = store
        .iter_names()
        .filter_map(|name| {
            let value = store.get(name)?;
            let meta = store.get_metadata(name)?;
            Some(ParameterInfo {
                name: name.to_string(),
                value,
                min: meta.min,
                max: meta.max,
                read_only: meta.is_read_only(),
            })
        })
        .collect();
    Ok(params)
}

/// Build the controller configuration from defaults plus overrides.
///
/// Overrides go through the parameter store, so unknown names, read-only entries,
/// and out-of-range values are rejected.
pub fn load_controller_config(
    overrides: &[(String, String)],
) -> Result<AlignShootConfig, SimulatorError> {
    let mut store = default_store()?;

    for (name, value) in overrides {
        store
            .set_from_str(name, value)
            .map_err(|error| SimulatorError::Parameter {
                name: name.clone(),
                error,
            })?;
        info!("Parameter {} = {}", name, value);
    }

    let params = AlignParams::from_store(&store);
    if !params.is_valid() {
        return Err(SimulatorError::InvalidConfig(format!(
            "parameters out of range: {params:?}"
        )));
    }
    Ok(params.to_config())
}
