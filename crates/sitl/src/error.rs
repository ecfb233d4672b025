use align_shoot_core::interpolation::TableError;
use align_shoot_core::parameters::ParameterError;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("Parameter {name}: {error}")]
    Parameter {
        name: String,
        error: ParameterError,
    },

    #[error("Parameter store: {0}")]
    Store(ParameterError),

    #[error("Shot table: {0}")]
    Table(TableError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ParameterError> for SimulatorError {
    fn from(error: ParameterError) -> Self {
        SimulatorError::Store(error)
    }
}

impl From<TableError> for SimulatorError {
    fn from(error: TableError) -> Self {
        SimulatorError::Table(error)
    }
}
