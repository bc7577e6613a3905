mod handlers;
mod response;
mod router;

#[allow(unused_imports)]
pub use {handlers::*, response::*, router::*};
