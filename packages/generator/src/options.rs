use crate::codegen::Target;

/// Configuration options for a generation session
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Host language of the emitted fragments
    pub target: Target,

    /// Run the per-type pipeline on the rayon thread pool.
    /// Output is identical either way; turning it off helps when debugging.
    pub parallel: bool,

    /// Prefix every emitted file with an `@generated` comment
    pub header: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            target: Target::Rust,
            parallel: true,
            header: true,
        }
    }
}

impl GenerateOptions {
    /// Default options for the given target
    pub fn for_target(target: Target) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    /// Default options with the pipeline running on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }
}
