//! Investment voting and activation (see [`voting`]).

pub mod voting;
