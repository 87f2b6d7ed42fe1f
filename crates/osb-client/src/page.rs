//! Page-envelope handling for list endpoints.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// List payload shape: newer API versions wrap lists in an `items` page
/// envelope, older versions and file dumps return a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Page { items: Vec<T> },
    Bare(Vec<T>),
}

/// Parse a list body, accepting either envelope shape.
pub(crate) fn parse_listing<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let listing: Listing<T> = serde_json::from_str(body)?;
    Ok(match listing {
        Listing::Page { items } => items,
        Listing::Bare(items) => items,
    })
}
