pub mod auth;
pub mod buckets;
