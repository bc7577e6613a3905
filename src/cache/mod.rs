mod configuration;
mod predictions;
mod snapshot;
mod static_data;
mod tier;

#[allow(unused_imports)]
pub use {configuration::*, predictions::*, snapshot::*, static_data::*, tier::*};
