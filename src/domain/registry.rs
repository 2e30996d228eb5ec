use super::merchant::MerchantDefinition;

/// Ordered collection of merchant definitions.
///
/// Definitions may overlap; the resolver evaluates all of them. The registry
/// only grows by appending or replacing entries, and is handed to a
/// `Resolver` by value once built.
#[derive(Debug, Clone, Default)]
pub struct MerchantRegistry {
    merchants: Vec<MerchantDefinition>,
}

impl MerchantRegistry {
    pub fn new(merchants: Vec<MerchantDefinition>) -> Self {
        Self { merchants }
    }

    /// Appends a definition after all existing ones.
    pub fn push(&mut self, merchant: MerchantDefinition) {
        self.merchants.push(merchant);
    }

    /// Replaces the first definition with the same id, keeping its position.
    ///
    /// Appends when no definition has that id. Returns the replaced definition.
    pub fn replace(&mut self, merchant: MerchantDefinition) -> Option<MerchantDefinition> {
        match self.merchants.iter_mut().find(|m| m.id() == merchant.id()) {
            Some(slot) => Some(std::mem::replace(slot, merchant)),
            None => {
                self.merchants.push(merchant);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&MerchantDefinition> {
        self.merchants.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MerchantDefinition> {
        self.merchants.iter()
    }

    pub fn len(&self) -> usize {
        self.merchants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merchants.is_empty()
    }
}

impl FromIterator<MerchantDefinition> for MerchantRegistry {
    fn from_iter<I: IntoIterator<Item = MerchantDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MerchantRegistry {
    type Item = &'a MerchantDefinition;
    type IntoIter = std::slice::Iter<'a, MerchantDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.merchants.iter()
    }
}
