//! Adapters for the hosted document store.

pub mod feed;
