//! Route handlers organized by resource

pub mod health;
pub mod quotes;
pub mod subjects;

use crate::models::limit::{DEFAULT_LISTING_LIMIT, DEFAULT_RANDOM_LIMIT};

use super::extractors::ValidLimit;

/// `?limit=` for every listing except random quotes (default 5)
pub type ListingLimit = ValidLimit<{ DEFAULT_LISTING_LIMIT }>;

/// `?limit=` for random quotes (default 10)
pub type RandomLimit = ValidLimit<{ DEFAULT_RANDOM_LIMIT }>;
