//! Request guards and extractors.
//!
//! - `auth` - bearer token layer, `CurrentUser` extractor and `AuthGuard`
//! - `validate` - `ValidJson` body extractor

pub mod auth;
pub mod validate;

#[cfg(test)]
mod test;
