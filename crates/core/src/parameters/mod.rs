//! Parameter management types
//!
//! A small typed parameter store plus the parameter set that configures the
//! align-and-shoot controller.

pub mod align;
pub mod error;
pub mod storage;

pub use align::AlignParams;
pub use error::ParameterError;
pub use storage::{ParamFlags, ParamMetadata, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
