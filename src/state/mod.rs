//! Shared model types consumed by card components and demo pages.
//!
//! DESIGN
//! ======
//! Models are plain data with serde derives so host applications can feed
//! catalog JSON straight into component props.

pub mod templates;
