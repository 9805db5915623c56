/// Shared configuration for all root-finding solvers.
///
/// The tolerance is compared against the approximate error of each
/// iteration, which is a percentage for nonzero estimates (see the
/// crate's convergence rules).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Convergence threshold for the approximate error.
    pub tolerance: f64,
    /// Iteration cap; reaching it returns the trace without error.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates that the tolerance is positive and finite and the
    /// iteration cap is nonzero.
    ///
    /// # Errors
    ///
    /// Returns a reason string if either field is out of range.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let config = Config {
            tolerance: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            tolerance: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_tolerance() {
        let config = Config {
            tolerance: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
