//! Element identifiers, class names and storage keys shared by the page and the features.

/// Age-gate overlay container.
pub const AGE_GATE: &str = "agegate";
/// Age-gate confirmation control.
pub const AGE_CONFIRM: &str = "age-yes";
/// Mobile navigation trigger ("burger").
pub const NAV_TRIGGER: &str = "burger";
/// Navigation links container.
pub const NAV_LINKS: &str = "navlinks";
/// Product cards container.
pub const PRODUCTS: &str = "products";
/// Contact form.
pub const CONTACT_FORM: &str = "contactForm";
/// Footer year text node.
pub const FOOTER_YEAR: &str = "year";

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

/// Persisted flag key, versioned so a copy change can re-prompt everyone.
pub const AGE_VERIFIED_KEY: &str = "fam_age_verified_v1";
/// The only stored value that counts as verified.
pub const AGE_VERIFIED_VALUE: &str = "true";

pub const CLASS_OPEN: &str = "open";
pub const CLASS_REVEAL: &str = "reveal";
pub const CLASS_REVEALED: &str = "in";

pub const ARIA_EXPANDED: &str = "aria-expanded";
