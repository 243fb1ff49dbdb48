//! Built-in reference data.
//!
//! Used by the generator whenever `fabrics.json` / `colors.json` are absent,
//! and as the option lists the schema rules validate against.

use crate::catalog::Audience;

pub const FABRICS: &[&str] = &[
    "Chiffon", "Cotton", "Silk", "Linen", "Wool", "Polyester", "Velvet", "Satin", "Georgette",
    "Denim", "Organza", "Tulle", "Crepe", "Jersey", "Rayon", "Nylon", "Leather", "Fleece",
    "Chambray", "Poplin",
];

/// `(name, #RRGGBB)` pairs.
pub const COLORS: &[(&str, &str)] = &[
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#008000"),
    ("Yellow", "#FFFF00"),
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Pink", "#FFC0CB"),
    ("Purple", "#800080"),
    ("Orange", "#FFA500"),
    ("Brown", "#A52A2A"),
    ("Grey", "#808080"),
    ("Beige", "#F5F5DC"),
    ("Maroon", "#800000"),
    ("Turquoise", "#40E0D0"),
    ("Navy Blue", "#000080"),
    ("Olive", "#808000"),
    ("Teal", "#008080"),
    ("Lavender", "#E6E6FA"),
    ("Gold", "#FFD700"),
    ("Silver", "#C0C0C0"),
];

pub const CATEGORIES: &[&str] = &["unStitched", "stitched", "readyToWear"];

pub const SUB_CATEGORIES: &[&str] = &["top", "bottom", "2piece", "3piece"];

pub const MEN_OUTFIT_TYPES: &[&str] = &[
    "polo", "tshirt", "shirt", "kurta", "waistcoat", "2pieceSuit", "3pieceSuit", "sherwani",
    "jeans", "trousers", "shorts", "tracksuit", "jogger", "hoodie", "blazer",
];

pub const WOMEN_OUTFIT_TYPES: &[&str] = &[
    "kurti", "polo", "tshirt", "blouse", "dress", "gown", "saree", "lehenga", "anarkali",
    "2pieceSuit", "3pieceSuit", "jeansTrousers", "skirt", "leggings", "tracksuit",
];

pub const SEASONS: &[&str] = &["summer", "winter"];

pub const DESIGNS: &[&str] = &[
    "plain",
    "printed",
    "embroidered",
    "block_print",
    "digital_print",
    "geometric",
    "floral",
    "abstract",
    "minimalist",
    "striped",
];

pub const OCCASIONS: &[&str] = &[
    "casual", "formal", "party", "wedding", "office", "eid", "gym",
];

pub const TITLE_ADJECTIVES: &[&str] = &[
    "Classic", "Modern", "Elegant", "Casual", "Premium", "Urban", "Comfort", "Essential",
    "Sport", "Formal", "Festive", "Smart", "Cozy", "Chic", "Vintage",
];

pub const MEN_NOUNS: &[&str] = &[
    "Shirt", "Polo", "T-Shirt", "Kurta", "Suit", "Sherwani", "Jeans", "Tracksuit", "Hoodie",
    "Blazer", "Waistcoat", "Jogger", "Pants", "Jumpsuit",
];

pub const WOMEN_NOUNS: &[&str] = &[
    "Kurti", "Dress", "Gown", "Saree", "Lehenga", "Anarkali", "Top", "Blouse", "Skirt", "Jeans",
    "Trousers", "Leggings", "Maxi", "Tunic",
];

pub const IMAGES_COMMON: &[&str] = &[
    "/images/categories/bottom.webp",
    "/images/categories/full.webp",
    "/images/categories/readyToWear.webp",
    "/images/categories/top.webp",
    "/images/categories/unStitched.webp",
    "/images/fabrics/Chambray.webp",
    "/images/fabrics/Chiffon.webp",
    "/images/fabrics/Cotton.webp",
    "/images/fabrics/Denim.webp",
    "/images/fabrics/Linen.webp",
    "/images/fabrics/Silk.webp",
];

pub const IMAGES_MEN: &[&str] = &[
    "/images/men/formal-shirt.jpg",
    "/images/men/formal-suit.jpg",
    "/images/men/hodie.jpg",
    "/images/men/jeans.jpg",
    "/images/men/kurta.jpg",
    "/images/men/polo.jpg",
    "/images/men/sherwani.jpg",
    "/images/men/t-shirt.jpg",
    "/images/men/tracksuit.jpg",
    "/images/men/trouser.jpg",
];

pub const IMAGES_WOMEN: &[&str] = &[
    "/images/women/2-piece-suit.jpg",
    "/images/women/3-piece-suit.jpg",
    "/images/women/anarkali.jpg",
    "/images/women/dress.jpg",
    "/images/women/gown.jpg",
    "/images/women/jeans-trousers.jpg",
    "/images/women/kurti.jpg",
    "/images/women/lehenga.jpg",
    "/images/women/polo.jpg",
    "/images/women/skirt.jpg",
    "/images/women/t-shirt.jpg",
    "/images/women/tracksuit.jpg",
];

#[must_use]
pub fn nouns_for(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Men => MEN_NOUNS,
        Audience::Women => WOMEN_NOUNS,
    }
}

#[must_use]
pub fn outfit_types_for(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Men => MEN_OUTFIT_TYPES,
        Audience::Women => WOMEN_OUTFIT_TYPES,
    }
}

/// Audience images first, then the shared category/fabric shots.
#[must_use]
pub fn image_pool_for(audience: Audience) -> Vec<&'static str> {
    let own = match audience {
        Audience::Men => IMAGES_MEN,
        Audience::Women => IMAGES_WOMEN,
    };
    own.iter().chain(IMAGES_COMMON).copied().collect()
}

#[must_use]
pub fn fallback_fabrics() -> Vec<String> {
    FABRICS.iter().map(|f| (*f).to_string()).collect()
}

#[must_use]
pub fn fallback_color_names() -> Vec<String> {
    COLORS.iter().map(|(name, _)| (*name).to_string()).collect()
}
