//! Configuration of [`FifoOnPolicyBuffer`](super::FifoOnPolicyBuffer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`FifoOnPolicyBuffer`](super::FifoOnPolicyBuffer).
///
/// # Examples
///
/// ```rust
/// use sarsa_buffer::fifo_buffer::FifoOnPolicyBufferConfig;
///
/// let config = FifoOnPolicyBufferConfig::default()
///     .capacity(1000)
///     .seed(7);
/// assert_eq!(config.capacity, 1000);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct FifoOnPolicyBufferConfig {
    /// Maximum number of complete transitions kept in the buffer.
    /// Must be positive.
    pub capacity: usize,

    /// Random seed used when sampling batches.
    pub seed: u64,
}

impl Default for FifoOnPolicyBufferConfig {
    /// Creates a default configuration:
    /// - `capacity = 10000`
    /// - `seed = 42`
    fn default() -> Self {
        Self {
            capacity: 10000,
            seed: 42,
        }
    }
}

impl FifoOnPolicyBufferConfig {
    /// Sets the capacity of the buffer.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of complete transitions, must be positive
    ///
    /// # Returns
    ///
    /// The modified configuration
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the random seed for sampling.
    ///
    /// # Arguments
    ///
    /// * `seed` - The new random seed
    ///
    /// # Returns
    ///
    /// The modified configuration
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads the configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path where the configuration should be saved
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = FifoOnPolicyBufferConfig::default().capacity(128).seed(3);

        let dir = TempDir::new("fifo_on_policy_buffer")?;
        let path = dir.path().join("fifo_on_policy_buffer.yaml");
        config.save(&path)?;
        let config_ = FifoOnPolicyBufferConfig::load(&path)?;
        assert_eq!(config, config_);

        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(FifoOnPolicyBufferConfig::load("/nonexistent/fifo.yaml").is_err());
    }
}
