//! Facade crate for the FÄM site enhancement layer.
//! Re-exports domain/kernel primitives and composes the feature slices into a [`Site`].
//! Keep this crate thin: it wires slices together, it does not implement feature logic.
//!
//! ## Usage
//! - Build a page (or take [`template::storefront`]) and hand it to [`Site::builder`].
//! - Call [`Site::ready`] once, then forward host events (`click`, `submit`, `resize`, ...).
//! - Drive delayed work with [`Site::advance`], sleeping for [`Site::next_due`] in between.

pub mod config;
pub mod error;
pub mod site;
pub mod template;

pub use fam_domain as domain;
pub use fam_kernel as kernel;
pub use crate::error::{SiteError, SiteErrorExt};
pub use crate::site::{Site, SiteBuilder};

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "age-gate")]
    pub use fam_age_gate as age_gate;
    #[cfg(feature = "catalog")]
    pub use fam_catalog as catalog;
    #[cfg(feature = "contact")]
    pub use fam_contact as contact;
    use fam_domain::features::{self as names, FeatureKind, FeatureSet};
    #[cfg(feature = "footer")]
    pub use fam_footer as footer;
    #[cfg(feature = "nav")]
    pub use fam_nav as nav;
    #[cfg(feature = "reveal")]
    pub use fam_reveal as reveal;

    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "age-gate")]
        names::AGE_GATE,
        #[cfg(feature = "nav")]
        names::NAV,
        #[cfg(feature = "catalog")]
        names::CATALOG,
        #[cfg(feature = "footer")]
        names::FOOTER,
        #[cfg(feature = "contact")]
        names::CONTACT,
        #[cfg(feature = "reveal")]
        names::REVEAL,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }

    /// Slices compiled into this build.
    #[must_use]
    pub fn compiled() -> FeatureSet {
        ENABLED.iter().fold(FeatureSet::empty(), |set, name| set | FeatureSet::from(*name))
    }

    #[must_use]
    pub fn is_compiled(kind: FeatureKind) -> bool {
        is_enabled(kind.as_str())
    }
}
