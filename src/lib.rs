// https://stackoverflow.com/a/61417700
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod error;
mod scheduler;
mod service;

#[cfg(test)]
mod testing;

/// Axum routing.
#[cfg(feature = "axum")]
pub mod axum;

/// Cache tiers.
pub mod cache;

/// Transit data model.
pub mod model;

/// Upstream API.
pub mod upstream;

pub use {error::*, scheduler::*, service::*};
