use std::path::PathBuf;

use clap::Parser;
use ovidiu::options::DEFAULT_LINTERS;
use ovidiu::{AppError, ProjectOptions};

#[derive(Parser)]
#[command(name = "ovidiu")]
#[command(version)]
#[command(
    about = "Bootstrap a Python project directory with git, docs, a license, and a virtual environment",
    long_about = None
)]
struct Cli {
    /// Path to the project directory
    #[arg(long)]
    path: PathBuf,

    /// List of dependencies to install
    #[arg(long, num_args = 1..)]
    dependencies: Vec<String>,

    /// Install linters
    #[arg(long)]
    use_linters: bool,

    /// List of linters to install
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_LINTERS.map(String::from))]
    linters: Vec<String>,

    /// Write a Dockerfile for the project
    #[arg(long)]
    use_docker: bool,

    /// Skip virtual environment creation and package installs
    #[arg(long, conflicts_with_all = ["dependencies", "use_linters"])]
    skip_venv: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = ProjectOptions {
        path: cli.path,
        dependencies: cli.dependencies,
        use_linters: cli.use_linters,
        linters: cli.linters,
        use_docker: cli.use_docker,
        skip_venv: cli.skip_venv,
    };

    let result: Result<(), AppError> = ovidiu::create_project(&options);

    match result {
        Ok(()) => println!("✅ Created project at {}", options.path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
