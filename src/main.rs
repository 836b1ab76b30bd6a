//! tornastrap CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffolding core.
#![deny(unsafe_code)]
mod core;

// Internal imports (std, crate)
use crate::core::Error;
use crate::core::plan::{Applied, GenerationPlan, Report};
use crate::core::project::{ProjectLayout, StackPrecondition, validate_app_name};
use crate::core::scaffold::Scaffolder;
use crate::core::templates::TemplateRegistry;
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use chrono::Local;
use clap::{ArgGroup, Parser};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tornastrap")]
#[command(author, version, about = "Bootstrap Tornado-style web projects", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["stack", "app"])))]
struct Cli {
    /// Materialize the full project skeleton
    #[arg(long)]
    stack: bool,

    /// Materialize a new app module inside a bootstrapped project
    #[arg(long, value_name = "NAME")]
    app: Option<String>,

    /// Project root (defaults to the current working directory)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Author recorded in generated file headers (defaults to $USER)
    #[arg(long, value_name = "AUTHOR")]
    author: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let current_dir =
        std::env::current_dir().context("Failed to resolve the current working directory")?;
    let root = match cli.dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    let author = cli.author.unwrap_or_else(default_author);
    let created = Local::now().format("%B %d %Y").to_string();

    let registry = TemplateRegistry::new().context("Failed to initialize the template registry")?;
    let layout = ProjectLayout::new(root);
    let scaffolder = Scaffolder::new(&registry);

    let (plan, done_message) = match (cli.stack, cli.app.as_deref()) {
        (true, _) => {
            let state = layout.probe();
            if state.has_requires || state.has_core || state.has_utils || state.has_bootstrap {
                info!("existing stack detected; generated files will be overwritten");
            }
            info!(root = %layout.root().display(), "generating project stack");
            println!("Bootstrapping project at {}...", layout.root().display());
            (
                GenerationPlan::stack(&layout, &author, &created),
                "Completed bootstrapping. Start the server with main.py".to_string(),
            )
        }
        (false, Some(name)) => {
            validate_app_name(name)?;
            if let StackPrecondition::MissingBootstrap { expected } =
                layout.check_app_precondition()
            {
                return Err(Error::MissingBootstrap(expected).into());
            }
            info!(
                root = %layout.root().display(),
                app = name,
                existing = layout.app_exists(name),
                "generating app module"
            );
            println!("Generating application ~ {name}...");
            (
                GenerationPlan::app(&layout, name, &author, &created),
                format!("Completed generating app ~ {name}"),
            )
        }
        (false, None) => {
            anyhow::bail!("either --stack or --app <NAME> is required");
        }
    };

    let mut report = Report::new();
    let result = scaffolder.apply(&plan, &mut report);

    for entry in report.entries() {
        match entry {
            Applied::CreatedDir(path) => println!("Created directory {}", path.display()),
            Applied::WroteFile(path) => println!("Wrote {}", path.display()),
        }
    }

    match result {
        Ok(()) => {
            println!("{done_message}");
            Ok(())
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "scaffolding aborted after {} of {} planned files",
                report.files_written(),
                plan.len()
            )
        }),
    }
}

/// Author identity fallback, mirroring the invoking user's login name
fn default_author() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
