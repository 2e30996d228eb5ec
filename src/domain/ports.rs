use super::registry::MerchantRegistry;
use crate::error::Result;

/// Where a merchant registry comes from.
///
/// Loading compiles every pattern, so a source that returns `Ok` hands back a
/// registry the resolver can use without further checks.
pub trait RegistrySource: Send + Sync {
    fn load(&self) -> Result<MerchantRegistry>;
}

pub type RegistrySourceBox = Box<dyn RegistrySource>;
