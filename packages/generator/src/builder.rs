use crate::codegen::Target;
use crate::error::{GenerateError, GenerateResult};
use crate::options::GenerateOptions;
use crate::session::{Session, SessionReport};
use crate::sink::DirSink;
use reprgen_syntax::load_rust_dir;
use std::env;
use std::path::PathBuf;
use tracing::instrument;

/// Start configuring generation from a build script.
///
/// ```rust,ignore
/// // build.rs
/// fn main() -> Result<(), reprgen_generator::GenerateError> {
///     reprgen_generator::configure().generate()?;
///     Ok(())
/// }
///
/// // lib.rs
/// include!(concat!(env!("OUT_DIR"), "/reprgen.rs"));
/// ```
pub fn configure() -> Builder {
    Builder::default()
}

/// Build-script front door: scans a Rust source tree and writes fragments plus
/// an index file into the output directory.
#[derive(Debug, Clone)]
pub struct Builder {
    src_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    options: GenerateOptions,
    emit_rerun_if_changed: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            src_dir: None,
            out_dir: None,
            options: GenerateOptions::default(),
            emit_rerun_if_changed: true,
        }
    }
}

impl Builder {
    /// Source root to scan. Defaults to `$CARGO_MANIFEST_DIR/src`.
    pub fn src_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.src_dir = Some(path.into());
        self
    }

    /// Output directory. Defaults to `$OUT_DIR`.
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.options.target = target;
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.options.parallel = enabled;
        self
    }

    pub fn header(mut self, enabled: bool) -> Self {
        self.options.header = enabled;
        self
    }

    /// Print `cargo:rerun-if-changed` for the source root (on by default)
    pub fn emit_rerun_if_changed(mut self, enabled: bool) -> Self {
        self.emit_rerun_if_changed = enabled;
        self
    }

    #[instrument(skip_all)]
    pub fn generate(self) -> GenerateResult<SessionReport> {
        let src_dir = match self.src_dir {
            Some(dir) => dir,
            None => PathBuf::from(
                env::var_os("CARGO_MANIFEST_DIR")
                    .ok_or(GenerateError::MissingEnv("CARGO_MANIFEST_DIR"))?,
            )
            .join("src"),
        };
        let out_dir = match self.out_dir {
            Some(dir) => dir,
            None => PathBuf::from(env::var_os("OUT_DIR").ok_or(GenerateError::MissingEnv("OUT_DIR"))?),
        };

        if self.emit_rerun_if_changed {
            println!("cargo:rerun-if-changed={}", src_dir.display());
        }

        let loaded = load_rust_dir(&src_dir)?;
        for warning in &loaded.warnings {
            println!("cargo:warning=reprgen: {}", warning);
        }

        let mut sink = DirSink::new(out_dir, &self.options)?;
        Session::new(self.options).run(&loaded.snapshot, &mut sink)
    }
}
