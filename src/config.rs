use std::thread::available_parallelism;

use simple_error::SimpleError;


pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Tunables for one pipeline run. Both values are validated before any
/// concurrent work starts; a zero in either field is a configuration
/// error, never a runtime one.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on tokens per work chunk.
    pub max_chunk_size: usize,
    /// Upper bound on concurrently live workers.
    pub max_workers: usize,
}

/// Half the host's available parallelism, floor one.
pub fn default_worker_cap() -> usize {
    let cpus = available_parallelism().map(|n| n.get()).unwrap_or(1);
    (cpus / 2).max(1)
}

impl Default for PipelineConfig {
    fn default() -> PipelineConfig {
        PipelineConfig {
            max_chunk_size: DEFAULT_CHUNK_SIZE,
            max_workers: default_worker_cap(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), SimpleError> {
        if self.max_chunk_size == 0 {
            return Err(SimpleError::new("max_chunk_size must be at least 1"));
        }
        if self.max_workers == 0 {
            return Err(SimpleError::new("max_workers must be at least 1"));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.max_workers >= 1);
        assert_eq!(config.max_chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let config = PipelineConfig {
            max_chunk_size: 0,
            max_workers: 2,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let config = PipelineConfig {
            max_chunk_size: 100,
            max_workers: 0,
        };
        assert!(config.validate().is_err());
    }
}
