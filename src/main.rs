use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pymin::config::DEFAULT_INDEX_URL;
use pymin::version::registries::PypiRegistry;
use pymin::version::resolver::RequiresPythonResolver;
use pymin::version::selector;

/// pymin - minimum Python version resolver
///
/// Queries the package index for a release's requires-python constraint and
/// prints the lowest candidate interpreter version that satisfies it.
///
/// Examples:
///   pymin -p scikit-learn -v 1.1.0 --python-versions "3.8,3.9,3.10"
#[derive(Parser, Debug)]
#[command(name = "pymin")]
#[command(about = "Resolve the minimum Python version for a package release")]
struct Cli {
    /// Package name
    #[arg(long, short = 'p')]
    package: String,

    /// Package release version; "dev" releases of known source-install
    /// packages use a pinned constraint instead of index metadata
    #[arg(long, short = 'v')]
    version: String,

    /// Comma separated string representing python versions. If
    /// requires_python is unavailable for the specified package, the
    /// minimum version will be selected.
    #[arg(long, value_name = "VERSIONS")]
    python_versions: String,

    /// Package index base URL
    #[arg(
        long,
        value_name = "URL",
        env = "PYMIN_INDEX_URL",
        default_value = DEFAULT_INDEX_URL
    )]
    index_url: String,
}

async fn resolve_minimum_python(cli: &Cli) -> Result<String> {
    let candidates = selector::parse_candidates(&cli.python_versions)?;
    let registry = Arc::new(PypiRegistry::new(cli.index_url.clone()));
    let resolver = RequiresPythonResolver::new(registry);
    let requires_python = resolver.resolve(&cli.package, &cli.version).await?;
    Ok(selector::pick_version(&candidates, requires_python.as_deref())?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let version = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(resolve_minimum_python(&cli))?;

    println!("{version}");
    Ok(())
}
