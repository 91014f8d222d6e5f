//! Configuration for assembling and solving a system

use crate::oracle::OracleConfig;

/// Configuration for a solve call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    /// Settings handed to the oracle
    pub oracle: OracleConfig,
    /// Assert `t_i >= 0` for every time unknown
    pub non_negative_time: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            non_negative_time: true,
        }
    }
}

impl SolveConfig {
    pub fn with_oracle(mut self, oracle: OracleConfig) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_non_negative_time(mut self, enabled: bool) -> Self {
        self.non_negative_time = enabled;
        self
    }
}
