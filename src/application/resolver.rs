use crate::domain::address::LightningAddress;
use crate::domain::network::Network;
use crate::domain::ports::RegistrySource;
use crate::domain::registry::MerchantRegistry;
use crate::error::Result;
use serde::Serialize;

/// A merchant that recognized the payload, before disambiguation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate<'a> {
    pub merchant_id: &'a str,
    pub raw_identifier: &'a str,
    pub domain: &'a str,
    pub display_currency: Option<&'a str>,
}

impl Candidate<'_> {
    pub fn address(&self) -> LightningAddress {
        LightningAddress::new(self.raw_identifier, self.domain)
    }
}

/// Why a payload did or did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution<'a> {
    Resolved {
        merchant_id: &'a str,
        address: LightningAddress,
    },
    EmptyPayload,
    NoMatch,
    /// Several merchants matched and no currency hint was given.
    Ambiguous { candidates: Vec<Candidate<'a>> },
    /// Several merchants matched and none of them uses the hinted currency.
    CurrencyMismatch {
        hint: String,
        candidates: Vec<Candidate<'a>>,
    },
}

impl Resolution<'_> {
    pub fn into_address(self) -> Option<LightningAddress> {
        match self {
            Self::Resolved { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Turns scanned merchant QR payloads into Lightning addresses.
///
/// Every merchant in the registry is evaluated against the payload. A single
/// match wins outright; multiple matches are only resolved by a currency hint,
/// and otherwise the payload is left unresolved rather than guessed.
///
/// The resolver owns its registry and never mutates it, so it can be shared
/// across threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    registry: MerchantRegistry,
}

impl Resolver {
    pub fn new(registry: MerchantRegistry) -> Self {
        Self { registry }
    }

    /// Builds a resolver from a registry source.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the registry cannot be loaded or one of
    /// its patterns does not compile.
    pub fn from_source(source: &dyn RegistrySource) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    pub fn registry(&self) -> &MerchantRegistry {
        &self.registry
    }

    /// Resolves `payload` to a Lightning address, or `None` when it is empty,
    /// unrecognized, or ambiguous.
    pub fn resolve(
        &self,
        payload: &str,
        network: Network,
        currency_hint: Option<&str>,
    ) -> Option<LightningAddress> {
        self.resolve_detailed(payload, network, currency_hint)
            .into_address()
    }

    /// Every merchant recognizing `payload`, in registry order.
    pub fn candidates<'a>(&'a self, payload: &'a str, network: Network) -> Vec<Candidate<'a>> {
        self.registry
            .iter()
            .filter_map(|merchant| {
                let raw_identifier = merchant.capture_identifier(payload)?;
                Some(Candidate {
                    merchant_id: merchant.id(),
                    raw_identifier,
                    domain: merchant.domain_for(network),
                    display_currency: merchant.display_currency(),
                })
            })
            .collect()
    }

    /// Same as [`Resolver::resolve`], but reports why resolution failed.
    pub fn resolve_detailed<'a>(
        &'a self,
        payload: &'a str,
        network: Network,
        currency_hint: Option<&str>,
    ) -> Resolution<'a> {
        if payload.is_empty() {
            return Resolution::EmptyPayload;
        }

        let mut candidates = self.candidates(payload, network);
        tracing::debug!(
            %network,
            matches = candidates.len(),
            "evaluated payload against merchant registry"
        );

        if candidates.len() <= 1 {
            return match candidates.pop() {
                Some(winner) => resolved(winner),
                None => Resolution::NoMatch,
            };
        }

        let hint = currency_hint
            .map(|h| h.trim().to_uppercase())
            .filter(|h| !h.is_empty());
        let Some(hint) = hint else {
            tracing::warn!(
                merchants = ?merchant_ids(&candidates),
                "payload matches several merchants and no currency hint was given"
            );
            return Resolution::Ambiguous { candidates };
        };

        let position = candidates.iter().position(|c| {
            c.display_currency
                .is_some_and(|currency| currency.to_uppercase() == hint)
        });
        match position {
            Some(index) => resolved(candidates.swap_remove(index)),
            None => {
                tracing::warn!(
                    %hint,
                    merchants = ?merchant_ids(&candidates),
                    "no matching merchant uses the hinted currency"
                );
                Resolution::CurrencyMismatch { hint, candidates }
            }
        }
    }
}

fn resolved(winner: Candidate<'_>) -> Resolution<'_> {
    Resolution::Resolved {
        merchant_id: winner.merchant_id,
        address: winner.address(),
    }
}

fn merchant_ids<'a>(candidates: &[Candidate<'a>]) -> Vec<&'a str> {
    candidates.iter().map(|c| c.merchant_id).collect()
}
