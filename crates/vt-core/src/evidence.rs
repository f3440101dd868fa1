//! Evidence entries and the per-provider slots they are aggregated into.

use serde::{Deserialize, Serialize};

use crate::enums::{Capability, Label, ProviderId};

/// One titled, linked piece of content retrieved for a claim query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub title: String,
    pub url: String,
    /// Text sent to the classifier. May differ from `title` (a claim text,
    /// an article abstract, a search snippet).
    pub prompt_source: String,
    /// Assigned by the classifier; `None` until classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Label>,
}

impl EvidenceEntry {
    /// Entry whose classifier text is its title.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            prompt_source: title.clone(),
            title,
            url: url.into(),
            prediction: None,
        }
    }

    /// Entry with a dedicated classifier text. Blank `prompt_source` falls
    /// back to the title.
    pub fn with_prompt(
        title: impl Into<String>,
        url: impl Into<String>,
        prompt_source: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let prompt_source = prompt_source.into();
        let prompt_source = if prompt_source.trim().is_empty() {
            title.clone()
        } else {
            prompt_source
        };
        Self {
            title,
            url: url.into(),
            prompt_source,
            prediction: None,
        }
    }
}

/// Evidence produced by one provider for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSlot {
    pub provider: ProviderId,
    pub entries: Vec<EvidenceEntry>,
    /// Cause of failure when the provider could not produce results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderSlot {
    #[must_use]
    pub const fn new(provider: ProviderId, entries: Vec<EvidenceEntry>) -> Self {
        Self {
            provider,
            entries,
            error: None,
        }
    }

    /// Empty slot standing in for a provider that failed.
    pub fn failed(provider: ProviderId, error: impl Into<String>) -> Self {
        Self {
            provider,
            entries: Vec::new(),
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<[EvidenceEntry]> for ProviderSlot {
    fn as_ref(&self) -> &[EvidenceEntry] {
        &self.entries
    }
}

/// All provider slots for one query, in configured provider order.
///
/// Holds exactly one slot per configured provider; a failed provider has an
/// empty slot rather than a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEvidence {
    pub query: String,
    slots: Vec<ProviderSlot>,
}

impl AggregatedEvidence {
    #[must_use]
    pub const fn new(query: String, slots: Vec<ProviderSlot>) -> Self {
        Self { query, slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[ProviderSlot] {
        &self.slots
    }

    /// Mutable access to the entries, used to attach predictions.
    pub fn slots_mut(&mut self) -> &mut [ProviderSlot] {
        &mut self.slots
    }

    /// Slot produced by `provider`, if that provider was configured.
    #[must_use]
    pub fn slot(&self, provider: ProviderId) -> Option<&ProviderSlot> {
        self.slots.iter().find(|slot| slot.provider == provider)
    }

    /// Slots whose provider offers `capability`, in slot order.
    #[must_use]
    pub fn by_capability(&self, capability: Capability) -> Vec<&ProviderSlot> {
        self.slots
            .iter()
            .filter(|slot| slot.provider.capability() == capability)
            .collect()
    }

    /// Entries of every slot, slot order then entry order.
    pub fn entries(&self) -> impl Iterator<Item = &EvidenceEntry> {
        self.slots.iter().flat_map(|slot| slot.entries.iter())
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut EvidenceEntry> {
        self.slots.iter_mut().flat_map(|slot| slot.entries.iter_mut())
    }

    /// Total entry count across all slots.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.slots.iter().map(ProviderSlot::len).sum()
    }

    /// Number of slots (equals the number of configured providers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Providers whose fetch failed.
    #[must_use]
    pub fn failed_providers(&self) -> Vec<ProviderId> {
        self.slots
            .iter()
            .filter(|slot| slot.is_failed())
            .map(|slot| slot.provider)
            .collect()
    }
}
