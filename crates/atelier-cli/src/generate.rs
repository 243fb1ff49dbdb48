//! `generate`: write a synthetic product catalog to JSON.

use std::path::PathBuf;

use atelier_catalog::{generate_products, write_products, CatalogSources};
use atelier_core::AppConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub(crate) struct GenerateArgs {
    pub count: usize,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Generates `args.count` products and writes them, returning the output path.
///
/// Fabric and color lists come from the data directory when present. Without
/// a seed the run draws from OS entropy.
///
/// # Errors
///
/// Fails if the color list is empty or the output cannot be written.
pub(crate) fn run_generate(config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<PathBuf> {
    let config = match &args.data_dir {
        Some(dir) => AppConfig {
            data_dir: dir.clone(),
            ..config.clone()
        },
        None => config.clone(),
    };
    let data_dir = &config.data_dir;
    let output = args.output.clone().unwrap_or_else(|| config.products_path());

    let sources = CatalogSources::load(data_dir);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::info!(
        count = args.count,
        seed = ?args.seed,
        fabrics = sources.fabrics.len(),
        colors = sources.colors.len(),
        "generating catalog"
    );

    let products = generate_products(&mut rng, args.count, &sources)?;
    write_products(&output, &products)?;
    println!("Generated {} products at {}", products.len(), output.display());
    Ok(output)
}
