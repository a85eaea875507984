use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use reprgen_generator::{DirSink, GenerateOptions, MemorySink, Session, SessionReport, Target};
use reprgen_syntax::{load_rust_dir, Snapshot};
use std::fmt::{Display, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Target language (overrides config)
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Read declarations from a JSON snapshot instead of scanning sources
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Run the pipeline on a single thread
    #[arg(long)]
    pub sequential: bool,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let config = Config::load(&root)?;

    let options = GenerateOptions {
        target: args.target.unwrap_or(config.target),
        parallel: !args.sequential,
        ..GenerateOptions::default()
    };

    let status = StatusStream::for_args(&args);
    status.line("🔨 Generating string representations...".bright_blue().bold());

    let snapshot = load_declarations(&args, &config, &root, cwd, status)?;
    let session = Session::new(options.clone());

    if args.stdout {
        let mut sink = MemorySink::new();
        let report = session.run(&snapshot, &mut sink)?;
        print!("{}", render_fragments(&sink));
        print_summary(&report, None, status);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => root.join(dir),
        None => config.get_out_dir(&root),
    };

    let mut sink = DirSink::new(&out_dir, &options)?;
    let report = session.run(&snapshot, &mut sink)?;

    for (id, path) in sink.written() {
        let relative = path.strip_prefix(&root).unwrap_or(path);
        status.line(format!("  {} {} → {}", "✓".green(), id, relative.display()));
    }
    print_summary(&report, Some(&sink), status);

    Ok(())
}

fn load_declarations(
    args: &GenerateArgs,
    config: &Config,
    root: &Path,
    cwd: &Path,
    status: StatusStream,
) -> Result<Snapshot> {
    let snapshot_path = match &args.snapshot {
        Some(path) => Some(cwd.join(path)),
        None => config.get_snapshot(root),
    };

    if let Some(path) = snapshot_path {
        debug!("Reading snapshot {}", path.display());
        let snapshot = Snapshot::load(&path)?;
        status.line(format!(
            "Read {} declarations from {}",
            snapshot.len(),
            path.display()
        ));
        return Ok(snapshot);
    }

    let src_dir = config.get_src_dir(root);
    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let loaded = load_rust_dir(&src_dir)?;
    status.line(format!("Scanned {} files", loaded.files));

    for warning in &loaded.warnings {
        eprintln!("  {} {}", "⚠️".yellow(), warning.to_string().yellow());
    }

    Ok(loaded.snapshot)
}

/// Where progress and summary lines go. With `--stdout` the fragments own
/// stdout, so status moves to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusStream {
    Stdout,
    Stderr,
}

impl StatusStream {
    fn for_args(args: &GenerateArgs) -> Self {
        if args.stdout {
            StatusStream::Stderr
        } else {
            StatusStream::Stdout
        }
    }

    fn line(self, text: impl Display) {
        match self {
            StatusStream::Stdout => println!("{}", text),
            StatusStream::Stderr => eprintln!("{}", text),
        }
    }
}

/// Plain text only: this is what ends up in a pipe.
fn render_fragments(sink: &MemorySink) -> String {
    let mut out = String::new();
    if let Some(marker) = sink.marker_definition() {
        let _ = writeln!(out, "// ── {} ──", marker.id);
        out.push_str(&marker.body);
    }
    for (id, body) in sink.fragments() {
        let _ = writeln!(out);
        let _ = writeln!(out, "// ── {} ──", id);
        out.push_str(body);
    }
    out
}

fn print_summary(report: &SessionReport, sink: Option<&DirSink>, status: StatusStream) {
    status.line("");
    status.line(format!(
        "{} Generated {} of {} marked types ({} declarations scanned)",
        "✅".green(),
        report.emitted,
        report.matched,
        report.scanned
    ));

    if report.skipped > 0 {
        status.line(format!(
            "{} Skipped {} types (top-level, unreachable or unsupported by the target)",
            "⚠️".yellow(),
            report.skipped
        ));
    }

    if let Some(sink) = sink {
        if sink.unchanged() > 0 {
            status.line(format!("   {} files already up to date", sink.unchanged()));
        }
        status.line(format!("   Index: {}", sink.index_path().display()));
    }
}
