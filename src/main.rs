mod git_commands;
mod graph;
mod history;
mod msg;
mod visualize;

#[cfg(test)]
mod test_helpers;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::control;

#[derive(Parser)]
#[command(
    name = "git-filegraph",
    about = "Render the commit ancestry of a single file as a Graphviz graph"
)]
struct Cli {
    /// Path to the Graphviz dot executable that will render the description
    #[arg(long)]
    graphviz_path: PathBuf,

    /// Path to the repository to analyze
    #[arg(long)]
    repo_path: PathBuf,

    /// Destination file for the generated graph description
    #[arg(long)]
    output_file: PathBuf,

    /// File whose commit history is graphed
    #[arg(long)]
    file_name: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color
        || std::env::var_os("NO_COLOR").is_some()
        || std::env::var_os("TERM").is_some_and(|v| v == "dumb")
        || !std::io::stdout().is_terminal()
    {
        control::set_override(false);
    }

    if let Err(e) = git_commands::check_git_available() {
        msg::error(&format!("{:#}", e));
        std::process::exit(1);
    }

    let config = visualize::Config {
        graphviz_path: cli.graphviz_path,
        repo_path: cli.repo_path,
        output_file: cli.output_file,
        file_name: cli.file_name,
    };

    if let Err(e) = visualize::run(&config) {
        msg::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
