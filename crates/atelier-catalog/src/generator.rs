//! Synthetic product catalog generator.
//!
//! Produces schema-conformant [`ProductRecord`]s for seeding a storefront.
//! Every random choice goes through the caller's RNG, so a fixed seed yields
//! the same catalog byte for byte.

use std::collections::HashSet;
use std::path::Path;

use atelier_core::reference::{self, CATEGORIES, DESIGNS, OCCASIONS, SEASONS, SUB_CATEGORIES};
use atelier_core::{Audience, ProductRecord, VariantRecord};
use rand::Rng;
use serde_json::Number;

use crate::error::CatalogError;
use crate::random::{rand_int, rand_pick, rand_pick_many};
use crate::slug::slugify;
use crate::sources::CatalogSources;

pub const DEFAULT_COUNT: usize = 1000;

pub const PRICE_MIN: f64 = 1200.0;
pub const PRICE_MAX: f64 = 15990.0;

const MAX_VARIANTS: usize = 4;
const MAX_ADDITIONAL_IMAGES: usize = 3;
const MAX_STOCK: u32 = 100;
const MAX_DISCOUNT: u8 = 50;

const FEATURED_PROBABILITY: f64 = 0.12;
const NEW_ARRIVAL_PROBABILITY: f64 = 0.18;
const POPULAR_PROBABILITY: f64 = 0.20;

/// Generates `count` products with ordinals `1..=count`.
///
/// # Errors
///
/// Returns [`CatalogError::NoColors`] if `sources.colors` is empty, since
/// every product needs at least one variant.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    sources: &CatalogSources,
) -> Result<Vec<ProductRecord>, CatalogError> {
    if sources.colors.is_empty() {
        return Err(CatalogError::NoColors);
    }

    let mut products = Vec::with_capacity(count);
    for index in 1..=count {
        products.push(make_product(rng, index, sources));
        if index % 100 == 0 {
            tracing::info!(generated = index, total = count, "generating products");
        }
    }
    Ok(products)
}

/// Builds the product with ordinal `index`. The ordinal is embedded in both
/// title and slug, which keeps them unique across a batch.
pub fn make_product<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    sources: &CatalogSources,
) -> ProductRecord {
    let audience = *rand_pick(rng, &Audience::ALL).unwrap_or(&Audience::Women);
    let title = make_title(rng, index, audience);
    let sub_title = format!("{title} is the sub title of this product");
    let slug = format!("{}-{index}", slugify(&title));
    let price = round_price(rng.random_range(PRICE_MIN..PRICE_MAX));

    let category = pick_owned(rng, CATEGORIES);
    let sub_category = pick_owned(rng, SUB_CATEGORIES);
    let outfit_type = pick_owned(rng, reference::outfit_types_for(audience));
    let (men_outfit_type, women_outfit_type) = match audience {
        Audience::Men => (outfit_type, None),
        Audience::Women => (None, outfit_type),
    };

    let season = pick_many_owned(rng, SEASONS);
    let designs = pick_many_owned(rng, DESIGNS);
    let occasions = pick_many_owned(rng, OCCASIONS);
    let fabric = rand_pick(rng, &sources.fabrics).cloned();
    let discount = rand_int(rng, 0, MAX_DISCOUNT);
    let variants = make_variants(rng, audience, &sources.colors);

    let description = format!(
        "{title} - Comfortable, stylish and made from {}. Perfect for {}.",
        fabric.as_deref().unwrap_or("quality fabric"),
        occasions.join(", ")
    );
    let mut relevant_tags = vec![title.split(' ').nth(1).unwrap_or("Apparel").to_string()];
    relevant_tags.extend(designs.first().cloned());
    relevant_tags.extend(occasions.first().cloned());

    let is_featured = rng.random_bool(FEATURED_PROBABILITY);
    let is_new_arrival = rng.random_bool(NEW_ARRIVAL_PROBABILITY);
    let is_popular = rng.random_bool(POPULAR_PROBABILITY);
    let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

    ProductRecord {
        id: Some(id.to_string()),
        title,
        sub_title: Some(sub_title),
        slug: Some(slug),
        price: Some(price),
        audience: Some(audience.as_str().to_string()),
        category,
        sub_category,
        men_outfit_type,
        women_outfit_type,
        season: Some(season),
        designs: Some(designs),
        occasions: Some(occasions),
        fabric,
        discount: Some(Number::from(discount)),
        is_new_arrival: Some(is_new_arrival),
        variants,
        description: Some(description),
        relevant_tags: Some(relevant_tags),
        is_featured: Some(is_featured),
        is_popular: Some(is_popular),
    }
}

/// `"{adjective} {noun} {index}"` with the noun drawn from the audience's list.
fn make_title<R: Rng + ?Sized>(rng: &mut R, index: usize, audience: Audience) -> String {
    let adjective = rand_pick(rng, reference::TITLE_ADJECTIVES).unwrap_or(&"Classic");
    let noun = rand_pick(rng, reference::nouns_for(audience)).unwrap_or(&"Outfit");
    format!("{adjective} {noun} {index}")
}

/// One to four variants, each with a color not used by a sibling variant.
///
/// The variant count is capped at the number of distinct color names, so
/// repeated names in the source list cannot stall the uniqueness loop.
fn make_variants<R: Rng + ?Sized>(
    rng: &mut R,
    audience: Audience,
    colors: &[String],
) -> Vec<VariantRecord> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(colors.len());
    let distinct: Vec<&String> = colors
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .collect();
    let wanted = rand_int(rng, 1, MAX_VARIANTS).min(distinct.len());
    let pool = reference::image_pool_for(audience);

    let mut used: HashSet<&str> = HashSet::with_capacity(wanted);
    let mut variants = Vec::with_capacity(wanted);
    while variants.len() < wanted {
        let Some(color) = rand_pick(rng, &distinct) else {
            break;
        };
        if !used.insert(color.as_str()) {
            continue;
        }

        let featured_image = rand_pick(rng, &pool).map(|p| (*p).to_string());
        let additional_count = rand_int(rng, 0, MAX_ADDITIONAL_IMAGES);
        let additional_images = (0..additional_count)
            .filter_map(|_| rand_pick(rng, &pool).map(|p| (*p).to_string()))
            .collect();

        variants.push(VariantRecord {
            color: Some((*color).clone()),
            featured_image,
            additional_images,
            stock: Some(Number::from(rand_int(rng, 0, MAX_STOCK))),
        });
    }
    variants
}

fn pick_owned<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> Option<String> {
    rand_pick(rng, items).map(|s| (*s).to_string())
}

/// Subset of size 1–2, no repeats.
fn pick_many_owned<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> Vec<String> {
    rand_pick_many(rng, items, 1, 2)
        .into_iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Rounds to two decimal places.
#[must_use]
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Writes `products` as one pretty-printed JSON array, creating parent dirs.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the directory or file cannot be written,
/// or [`CatalogError::Serialize`] if serialization fails.
pub fn write_products(path: &Path, products: &[ProductRecord]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CatalogError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let body = serde_json::to_string_pretty(products)?;
    std::fs::write(path, body).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
