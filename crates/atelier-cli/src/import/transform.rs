//! Source record → CMS document.
//!
//! Names become references by lookup, image paths become uploaded assets,
//! the plain-text description becomes one rich-text paragraph, and absent
//! optional fields get their defaults.

use atelier_cms::{Block, ContentStore, ImageField, KeyedImage, Reference, Slug};
use atelier_core::{DataType, ProductRecord, VariantRecord};
use serde_json::{json, Number, Value};

use super::images::ImageUploader;

pub(crate) const DEFAULT_SUBTITLE: &str = "Not set the subTitle yet";

/// Fresh `_key` for an array member.
fn new_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Reference to the `data_type` document named `name`.
///
/// Unknown names and lookup failures both resolve to `None`; neither creates
/// the missing document.
pub(crate) async fn resolve_reference<S: ContentStore>(
    store: &S,
    data_type: DataType,
    name: Option<&str>,
) -> Option<Reference> {
    let name = name.filter(|n| !n.is_empty())?;
    match store.find_id_by_field(data_type.as_str(), "name", name).await {
        Ok(Some(id)) => Some(Reference::to(id)),
        Ok(None) => {
            tracing::warn!(%data_type, name, "no document with this name; leaving reference empty");
            None
        }
        Err(e) => {
            tracing::warn!(%data_type, name, error = %e, "reference lookup failed");
            None
        }
    }
}

/// Lower-cased title with whitespace runs replaced by `-`.
pub(crate) fn fallback_slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

async fn build_variant<S: ContentStore>(
    store: &S,
    uploader: &mut ImageUploader,
    variant: &VariantRecord,
) -> Value {
    let mut featured_image = None;
    if let Some(source) = variant.featured_image.as_deref() {
        featured_image = uploader
            .upload(store, source)
            .await
            .map(ImageField::for_asset);
    }

    let mut additional_images = Vec::with_capacity(variant.additional_images.len());
    for source in &variant.additional_images {
        if let Some(asset_id) = uploader.upload(store, source).await {
            additional_images.push(KeyedImage {
                key: new_key(),
                image: ImageField::for_asset(asset_id),
            });
        }
    }

    let color = resolve_reference(store, DataType::Color, variant.color.as_deref()).await;

    json!({
        "_key": new_key(),
        "color": color,
        "featuredImage": featured_image,
        "additionalImages": additional_images,
        "stock": variant.stock.clone().unwrap_or_else(|| Number::from(0)),
    })
}

/// Assembles the `product` document for `record`, uploading its images and
/// resolving its color and fabric references along the way.
pub(crate) async fn build_product_document<S: ContentStore>(
    store: &S,
    uploader: &mut ImageUploader,
    record: &ProductRecord,
) -> Value {
    let mut variants = Vec::with_capacity(record.variants.len());
    for variant in &record.variants {
        variants.push(build_variant(store, uploader, variant).await);
    }

    let description: Vec<Block> = record
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|text| vec![Block::paragraph(new_key(), new_key(), text)])
        .unwrap_or_default();

    let fabric = resolve_reference(store, DataType::Fabric, record.fabric.as_deref()).await;

    let sub_title = record
        .sub_title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBTITLE);
    let slug = record
        .slug
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_slug(&record.title));

    json!({
        "_type": DataType::Product.as_str(),
        "title": record.title,
        "subTitle": sub_title,
        "slug": Slug::new(slug),
        "audience": record.audience,
        "category": record.category,
        "subCategory": record.sub_category,
        "menOutfitType": record.men_outfit_type,
        "womenOutfitType": record.women_outfit_type,
        "price": record.price,
        "fabric": fabric,
        "variants": variants,
        "description": description,
        "season": record.season.clone().unwrap_or_default(),
        "designs": record.designs.clone().unwrap_or_default(),
        "occasions": record.occasions.clone().unwrap_or_default(),
        "relevantTags": record.relevant_tags.clone().unwrap_or_default(),
        "isFeatured": record.is_featured.unwrap_or(false),
        "isNewArrival": record.is_new_arrival.unwrap_or(false),
        "isPopular": record.is_popular.unwrap_or(false),
        "discount": record.discount.clone().unwrap_or_else(|| Number::from(0)),
    })
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
