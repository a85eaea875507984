use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use reprgen_syntax::load_rust_dir;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Write the snapshot to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn snapshot(args: SnapshotArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let loaded = load_rust_dir(&src_dir)?;
    for warning in &loaded.warnings {
        eprintln!("  {} {}", "⚠️".yellow(), warning.to_string().yellow());
    }

    let json = loaded.snapshot.to_json_pretty()?;

    match args.output {
        Some(output) => {
            let output = cwd.join(output);
            fs::write(&output, json)?;
            println!(
                "{} Wrote {} declarations from {} files to {}",
                "✅".green(),
                loaded.snapshot.len(),
                loaded.files,
                output.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
