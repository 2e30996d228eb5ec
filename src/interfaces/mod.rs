//! Adapters between the resolver and the outside world.

pub mod csv;
