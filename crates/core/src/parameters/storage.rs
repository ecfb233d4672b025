//! Parameter Storage Types
//!
//! Provides the `ParameterStore` used for tuning. Every parameter is a
//! bounded float registered once with a default and flags; later writes are
//! validated against that registration.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter cannot be modified after registration
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamMetadata {
    /// Parameter flags
    pub flags: ParamFlags,
    /// Inclusive lower bound
    pub min: f32,
    /// Inclusive upper bound
    pub max: f32,
}

impl ParamMetadata {
    /// True if writes are rejected
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(ParamFlags::READ_ONLY)
    }
}

/// Parameter store for tuning values
///
/// Stores parameters as key-value pairs with metadata (flags, bounds).
pub struct ParameterStore {
    /// Parameter values
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, f32, MAX_PARAMS>,
    /// Parameter metadata
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    if name.is_empty() {
        return Err(ParameterError::InvalidName);
    }
    let mut key = String::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidName)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<f32> {
        self.parameters.get(&key(name).ok()?).copied()
    }

    /// Set parameter value
    ///
    /// The value must be finite and lie within the registered bounds.
    pub fn set(&mut self, name: &str, value: f32) -> Result<(), ParameterError> {
        let key = key(name)?;
        let meta = *self
            .metadata
            .get(&key)
            .ok_or(ParameterError::UnknownParameter)?;

        if meta.is_read_only() {
            return Err(ParameterError::ReadOnly);
        }
        if !value.is_finite() {
            return Err(ParameterError::InvalidValue);
        }
        if !(meta.min..=meta.max).contains(&value) {
            return Err(ParameterError::OutOfRange);
        }

        self.parameters.insert(key, value).ok();
        Ok(())
    }

    /// Set a parameter from text
    pub fn set_from_str(&mut self, name: &str, text: &str) -> Result<(), ParameterError> {
        if self.get(name).is_none() {
            return Err(ParameterError::UnknownParameter);
        }
        let value: f32 = text
            .trim()
            .parse()
            .map_err(|_| ParameterError::InvalidValue)?;
        self.set(name, value)
    }

    /// Register a parameter with its default, inclusive bounds, and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: f32,
        min: f32,
        max: f32,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = key(name)?;

        if self.parameters.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        let meta = ParamMetadata {
            flags,
            min: min.min(max),
            max: max.max(min),
        };
        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(key, meta)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Parameter names in registration order
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(|name| name.as_str())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Get metadata for a parameter by name
    pub fn get_metadata(&self, name: &str) -> Option<&ParamMetadata> {
        self.metadata.get(&key(name).ok()?)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_gain() -> ParameterStore {
        let mut store = ParameterStore::new();
        store
            .register("GAIN", 0.5, 0.0, 2.0, ParamFlags::empty())
            .unwrap();
        store
    }

    #[test]
    fn test_parameter_store_new() {
        let store = ParameterStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.get("GAIN"), None);
    }

    #[test]
    fn test_register_and_set() {
        let mut store = store_with_gain();
        assert_eq!(store.get("GAIN"), Some(0.5));

        store.set("GAIN", 0.7).unwrap();
        assert_eq!(store.get("GAIN"), Some(0.7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(store.set("UNKNOWN", 1.0), Err(ParameterError::UnknownParameter));
    }

    #[test]
    fn test_invalid_names() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register("", 1.0, 0.0, 2.0, ParamFlags::empty()),
            Err(ParameterError::InvalidName)
        );
        assert_eq!(
            store.register(
                "A_VERY_LONG_PARAMETER_NAME",
                1.0,
                0.0,
                2.0,
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidName)
        );
    }

    #[test]
    fn test_register_idempotent() {
        let mut store = store_with_gain();
        store.set("GAIN", 1.5).unwrap();
        // Re-register should not overwrite
        store
            .register("GAIN", 0.5, 0.0, 2.0, ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("GAIN"), Some(1.5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_bounds_enforced() {
        let mut store = ParameterStore::new();
        store
            .register("RATE", 3.0, 0.1, 20.0, ParamFlags::empty())
            .unwrap();

        assert!(store.set("RATE", 20.0).is_ok());
        assert_eq!(store.set("RATE", 25.0), Err(ParameterError::OutOfRange));
        assert_eq!(store.set("RATE", 0.0), Err(ParameterError::OutOfRange));
        assert_eq!(store.set("RATE", f32::NAN), Err(ParameterError::InvalidValue));
        assert_eq!(store.get("RATE"), Some(20.0));

        let meta = store.get_metadata("RATE").unwrap();
        assert_eq!((meta.min, meta.max), (0.1, 20.0));
    }

    #[test]
    fn test_swapped_bounds_are_ordered() {
        let mut store = ParameterStore::new();
        store
            .register("RATE", 3.0, 20.0, 0.1, ParamFlags::empty())
            .unwrap();
        let meta = store.get_metadata("RATE").unwrap();
        assert_eq!((meta.min, meta.max), (0.1, 20.0));
    }

    #[test]
    fn test_set_from_str() {
        let mut store = store_with_gain();

        store.set_from_str("GAIN", " 0.25 ").unwrap();
        assert_eq!(store.get("GAIN"), Some(0.25));

        assert_eq!(
            store.set_from_str("GAIN", "fast"),
            Err(ParameterError::InvalidValue)
        );
        assert_eq!(
            store.set_from_str("GAIN", "NaN"),
            Err(ParameterError::InvalidValue)
        );
        assert_eq!(
            store.set_from_str("NOPE", "1"),
            Err(ParameterError::UnknownParameter)
        );
    }

    #[test]
    fn test_parameter_read_only() {
        let mut store = ParameterStore::new();
        store
            .register("PERIOD", 0.02, 0.001, 0.1, ParamFlags::READ_ONLY)
            .unwrap();
        assert!(store.get_metadata("PERIOD").unwrap().is_read_only());
        assert_eq!(store.set("PERIOD", 0.01), Err(ParameterError::ReadOnly));
        assert_eq!(store.set_from_str("PERIOD", "0.01"), Err(ParameterError::ReadOnly));
        assert_eq!(store.get("PERIOD"), Some(0.02));
    }

    #[test]
    fn test_iter_names_in_registration_order() {
        let mut store = ParameterStore::new();
        for name in ["B_PARAM", "A_PARAM", "C_PARAM"] {
            store
                .register(name, 1.0, 0.0, 2.0, ParamFlags::empty())
                .unwrap();
        }
        let names: heapless::Vec<&str, MAX_PARAMS> = store.iter_names().collect();
        assert_eq!(names.as_slice(), &["B_PARAM", "A_PARAM", "C_PARAM"]);
    }
}
