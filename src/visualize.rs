use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::graph;
use crate::history::{GitLog, HistorySource};
use crate::msg;

/// Everything the pipeline needs, resolved from the command line.
pub struct Config {
    /// Graphviz executable the user will render the description with.
    /// Only echoed in the hint output; never invoked here.
    pub graphviz_path: PathBuf,
    pub repo_path: PathBuf,
    pub output_file: PathBuf,
    pub file_name: String,
}

/// Run the full pipeline: query the file's commit history, encode it as a
/// graph description, write the description file, and echo it.
pub fn run(config: &Config) -> Result<()> {
    if !config.repo_path.exists() {
        bail!("Repository not found: {}", config.repo_path.display());
    }

    let source = GitLog::new(&config.repo_path);
    let description = generate(&source, &config.file_name)?;

    fs::write(&config.output_file, &description)
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;

    msg::success(&format!(
        "Graph description written to {}",
        config.output_file.display()
    ));
    msg::hint(&format!(
        "Render it with: {} -Tsvg {} -o graph.svg",
        config.graphviz_path.display(),
        config.output_file.display()
    ));
    println!();
    print!("{}", description);

    Ok(())
}

/// Fetch parent edges for `file` and encode them as a graph description.
pub fn generate(source: &dyn HistorySource, file: &str) -> Result<String> {
    let records = source.parent_edges(file)?;
    Ok(graph::render(&records))
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
