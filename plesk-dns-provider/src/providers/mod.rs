//! DNS Provider implementations

mod plesk;

pub use plesk::{PleskProvider, PleskProviderBuilder};
