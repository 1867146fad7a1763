//! Static product descriptors rendered by the catalog.

/// One displayed product. Text fields are raw and escaped at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Opaque asset path, never validated.
    pub image: &'static str,
    pub badges: &'static [&'static str],
}

/// The product line as shipped on the site.
pub const PRODUCTS: &[ProductDescriptor] = &[
    ProductDescriptor {
        name: "FÄM Original",
        description: "Värske ja kerge sparkling cocktail. Parim jääkülmalt.",
        image: "assets/fam-can-orange.png",
        badges: &["5.5% vol", "330 ml", "Serve cold"],
    },
    ProductDescriptor {
        name: "FÄM Green Series",
        description: "Roheline seeria — hetkede jook, mis sobib nii peole kui rahulikuks õhtuks.",
        image: "assets/fam-cans-green.png",
        badges: &["Kihisev", "Kerge", "Party-ready"],
    },
    ProductDescriptor {
        name: "FÄM Orange",
        description: "Tsitruselisem vibe. Hea jääga highball’ina.",
        image: "assets/fam-can-orange.png",
        badges: &["Citrus", "Ice", "Simple"],
    },
];
