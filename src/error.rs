/// Errors that can occur when building an effect processor
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorError {
    /// Block capacity must be at least one sample
    ZeroCapacity,
    /// The scratch buffers or delay line could not be allocated
    AllocationFailed { requested: usize },
    /// Modulation base delay must be finite and non-negative
    InvalidBaseDelay { value: f32 },
}

impl std::fmt::Display for ProcessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorError::ZeroCapacity => {
                write!(f, "Processor capacity must be greater than zero samples")
            }
            ProcessorError::AllocationFailed { requested } => {
                write!(f, "Failed to allocate {} samples for processor buffers", requested)
            }
            ProcessorError::InvalidBaseDelay { value } => {
                write!(
                    f,
                    "Modulation base delay must be finite and non-negative, got {}",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ProcessorError {}
