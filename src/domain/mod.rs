//! Domain types: networks, merchant definitions, the registry and addresses.

pub mod address;
pub mod encoding;
pub mod merchant;
pub mod network;
pub mod ports;
pub mod registry;
