//! Decoding strategy contract and registry

use crate::errors::{DecodeError, UsageError};
use crate::strategies::{
    SerdeMapStrategy, SerdeTypedStrategy, SimdDomStrategy, SonicKeyScanStrategy,
    SonicMapStrategy, SonicTypedStrategy,
};

/// Strategy trait: decode one record and return its checksum
pub trait Strategy: Send + Sync {
    /// Registry name
    fn name(&self) -> &'static str;

    /// Short human-readable description
    fn description(&self) -> &'static str;

    /// Decode a single JSON record and return `integer_1 + integer_2`
    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError>;

    /// Known asymmetry with the other strategies, if any
    fn caveat(&self) -> Option<&'static str> {
        None
    }
}

/// Fixed, name-indexed table of strategies
///
/// Built once at startup and passed by reference to the driver.
pub struct Registry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Registry with every built-in strategy, in listing order
    pub fn standard() -> Result<Self, UsageError> {
        let mut registry = Self::new();
        registry.register(Box::new(SerdeMapStrategy))?;
        registry.register(Box::new(SonicMapStrategy))?;
        registry.register(Box::new(SerdeTypedStrategy))?;
        registry.register(Box::new(SonicTypedStrategy))?;
        registry.register(Box::new(SonicKeyScanStrategy))?;
        registry.register(Box::new(SimdDomStrategy))?;
        Ok(registry)
    }

    /// Add a strategy; names must be unique
    pub fn register(&mut self, strategy: Box<dyn Strategy>) -> Result<(), UsageError> {
        if self.contains(strategy.name()) {
            return Err(UsageError::DuplicateBenchmark(strategy.name().to_string()));
        }
        self.strategies.push(strategy);
        Ok(())
    }

    /// Look up a strategy by exact name
    pub fn get(&self, name: &str) -> Result<&dyn Strategy, UsageError> {
        self.strategies
            .iter()
            .find(|s| s.name() == name)
            .map(|s| &**s)
            .ok_or_else(|| UsageError::UnknownBenchmark(name.to_string()))
    }

    /// Whether a strategy with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|s| s.name() == name)
    }

    /// Registered names in listing order
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Iterate strategies in listing order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Strategy> {
        self.strategies.iter().map(|s| &**s)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
