//! Kernel utilities shared across feature slices.
//!
//! Features never touch a live document. They read a [`page::Page`] snapshot,
//! react to a [`event::PageEvent`], and answer with a list of [`effect::Effect`]s
//! that the facade applies. Keep this crate free of feature logic.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use fam_kernel::config::load_config;
//! use fam_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("site")).unwrap_or_default();
//! ```

pub mod clock;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod effect;
pub mod error;
pub mod escape;
pub mod event;
pub mod feature;
pub mod page;
pub mod prelude;
pub mod scheduler;
pub mod store;

pub use fam_domain as domain;
