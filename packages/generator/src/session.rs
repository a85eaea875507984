//! Session driver.
//!
//! A session is one pass over one declaration snapshot:
//!
//! 1. emit the marker definition (always, exactly once)
//! 2. filter → match → extract → synthesize every declaration, in parallel
//! 3. hand the fragments to the output sink
//!
//! Sessions keep no state between runs, so re-running over an unchanged
//! snapshot produces byte-identical fragments.

use crate::codegen::CodeGenerator;
use crate::error::{GenerateError, GenerateResult};
use crate::filter::is_syntax_target;
use crate::fragment::{DestinationId, GeneratedFragment, MarkerDefinitionFragment};
use crate::matcher::semantic_target;
use crate::options::GenerateOptions;
use crate::sink::OutputSink;
use crate::synth::synthesize;
use rayon::prelude::*;
use reprgen_syntax::{DeclarationNode, DeclarationSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, instrument};

/// Counts collected over one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Declarations in the snapshot
    pub scanned: usize,
    /// Type declarations carrying at least one marker
    pub candidates: usize,
    /// Candidates carrying the generation marker
    pub matched: usize,
    /// Fragments handed to the sink
    pub emitted: usize,
    /// Matched types that produced no fragment
    pub skipped: usize,
}

enum Outcome {
    NotCandidate,
    Unmatched,
    Skipped,
    Emitted(GeneratedFragment),
    Aborted,
}

pub struct Session {
    generator: Box<dyn CodeGenerator>,
    options: GenerateOptions,
    abort: Option<Arc<AtomicBool>>,
}

impl Session {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            generator: options.target.generator(),
            options,
            abort: None,
        }
    }

    /// Session rendering through a custom generator
    pub fn with_generator(generator: Box<dyn CodeGenerator>, options: GenerateOptions) -> Self {
        Self {
            generator,
            options,
            abort: None,
        }
    }

    /// Flag the host can raise to drop the remaining work
    pub fn with_abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn marker_definition(&self) -> MarkerDefinitionFragment {
        MarkerDefinitionFragment {
            id: DestinationId::marker_definition(),
            body: self.generator.render_marker_definition(self.options.header),
        }
    }

    /// Run the pipeline without a sink. Fragments come back in snapshot order.
    #[instrument(skip_all, fields(target = %self.options.target))]
    pub fn synthesize_all<S>(&self, source: &S) -> GenerateResult<(Vec<GeneratedFragment>, SessionReport)>
    where
        S: DeclarationSource + ?Sized,
    {
        let declarations = source.declarations();

        let outcomes: Vec<Outcome> = if self.options.parallel {
            declarations.par_iter().map(|node| self.process(node)).collect()
        } else {
            declarations.iter().map(|node| self.process(node)).collect()
        };

        let mut report = SessionReport {
            scanned: declarations.len(),
            ..Default::default()
        };
        let mut fragments = Vec::new();

        for outcome in outcomes {
            match outcome {
                Outcome::NotCandidate => {}
                Outcome::Unmatched => report.candidates += 1,
                Outcome::Skipped => {
                    report.candidates += 1;
                    report.matched += 1;
                    report.skipped += 1;
                }
                Outcome::Emitted(fragment) => {
                    report.candidates += 1;
                    report.matched += 1;
                    fragments.push(fragment);
                }
                Outcome::Aborted => return Err(GenerateError::Aborted),
            }
        }

        Ok((fragments, report))
    }

    /// Run a full session into `sink`
    #[instrument(skip_all, fields(target = %self.options.target))]
    pub fn run<S>(&self, source: &S, sink: &mut dyn OutputSink) -> GenerateResult<SessionReport>
    where
        S: DeclarationSource + ?Sized,
    {
        sink.add_marker_definition(self.marker_definition())?;

        let (fragments, mut report) = self.synthesize_all(source)?;

        for fragment in fragments {
            if self.is_aborted() {
                return Err(GenerateError::Aborted);
            }
            sink.add_fragment(fragment)?;
            report.emitted += 1;
        }

        sink.finish()?;

        info!(
            "Session complete: {} scanned, {} matched, {} emitted, {} skipped",
            report.scanned, report.matched, report.emitted, report.skipped
        );

        Ok(report)
    }

    fn process(&self, node: &DeclarationNode) -> Outcome {
        if self.is_aborted() {
            return Outcome::Aborted;
        }
        if !is_syntax_target(node) {
            return Outcome::NotCandidate;
        }
        let Some(decl) = semantic_target(node) else {
            return Outcome::Unmatched;
        };

        match synthesize(decl, self.generator.as_ref(), &self.options) {
            Some(fragment) => Outcome::Emitted(fragment),
            None => Outcome::Skipped,
        }
    }

    fn is_aborted(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}
