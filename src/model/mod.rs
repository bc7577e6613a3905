mod entrance;
mod line;
mod nullable;
mod parking;
mod prediction;
mod station;

#[allow(unused_imports)]
pub use {entrance::*, line::*, nullable::*, parking::*, prediction::*, station::*};
