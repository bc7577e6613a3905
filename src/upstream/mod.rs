mod endpoints;
mod error;
mod fetch;
#[allow(clippy::module_inception)]
mod upstream;

#[allow(unused_imports)]
pub use {endpoints::*, error::*, fetch::*, upstream::*};
