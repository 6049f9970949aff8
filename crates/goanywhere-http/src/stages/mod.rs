//! Standard pipeline stages
//!
//! Assembled by the builder in this order, outermost first: redirect
//! handling, base-URI resolution, path-prefix rewriting, authentication,
//! default headers.

mod authentication;
mod base_uri;
mod header_defaults;
mod path_prepend;
mod redirect;

pub use authentication::Authentication;
pub use base_uri::BaseUri;
pub use header_defaults::HeaderDefaults;
pub use path_prepend::PathPrepend;
pub use redirect::FollowRedirects;
