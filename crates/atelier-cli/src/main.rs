mod delete;
mod generate;
mod import;
mod prompt;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use atelier_catalog::DEFAULT_COUNT;
use atelier_cms::CmsClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::prompt::Prompt;

#[derive(Debug, Parser)]
#[command(name = "atelier-cli")]
#[command(about = "Storefront catalog tooling: generate, import and delete CMS content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a synthetic product catalog as a JSON array
    Generate {
        /// Number of products to generate
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Seed for a reproducible catalog
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (defaults to `{data_dir}/products.json`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Directory with optional `fabrics.json` / `colors.json` overrides
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Import fabrics, colors or products from the export endpoint into the CMS
    Import,
    /// Delete every CMS document of a chosen type
    Clear,
    /// Delete a single CMS document by id
    DeleteItem,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = atelier_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            count,
            seed,
            output,
            data_dir,
        } => {
            let args = generate::GenerateArgs {
                count,
                seed,
                output,
                data_dir,
            };
            generate::run_generate(&config, &args)?;
        }
        Commands::Import => {
            let import = atelier_core::load_import_config()?;
            let client = CmsClient::new(&import.cms, config.http_timeout_secs)?;
            import::run_import(&client, &import, &config, &mut Prompt::stdio()).await?;
        }
        Commands::Clear => {
            let cms = atelier_core::load_cms_config()?;
            let client = CmsClient::new(&cms, config.http_timeout_secs)?;
            delete::run_clear(&client, &mut Prompt::stdio()).await?;
        }
        Commands::DeleteItem => {
            let cms = atelier_core::load_cms_config()?;
            let client = CmsClient::new(&cms, config.http_timeout_secs)?;
            delete::run_delete_item(&client, &mut Prompt::stdio()).await?;
        }
    }

    Ok(())
}
