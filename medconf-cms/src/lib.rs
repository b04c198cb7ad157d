//! Override-document fetching for the MedConf site.
//!
//! The content-management backend is an external collaborator: this crate
//! only reads from it. An [`OverrideSource`] fetches the document for one
//! page; a [`PageSession`] ties each fetch to the page visit that asked for
//! it and drops results that arrive after the reader has navigated away.

mod error;
mod http;
mod session;
mod source;

pub use error::{CmsError, CmsResult};
pub use http::{CmsConfig, HttpOverrideSource};
pub use session::{LoadOutcome, PageSession, VisitToken};
pub use source::{OfflineSource, OverrideSource, StaticSource};
