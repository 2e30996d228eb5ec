//! Resolves merchant payment QR payloads into Lightning addresses.
//!
//! ```
//! use merchant_qr::application::resolver::Resolver;
//! use merchant_qr::domain::network::Network;
//! use merchant_qr::domain::ports::RegistrySource;
//! use merchant_qr::infrastructure::builtin::BuiltinRegistry;
//!
//! let resolver = Resolver::new(BuiltinRegistry::new().load().unwrap());
//! let address = resolver.resolve("8784599487", Network::Mainnet, None).unwrap();
//! assert_eq!(address.to_string(), "8784599487@cryptoqr.net");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::resolver::{Resolution, Resolver};
pub use domain::address::LightningAddress;
pub use domain::encoding::strict_encode;
pub use domain::network::Network;
