//! Domain model for notification preference toggle groups.
//!
//! Six categories share one model: each category has a set of allowed
//! channels, an optional pinned channel, and a derived "all" switch. The
//! differences between categories live entirely in [`ChannelPolicy`], never
//! in per-category code.

use shared::{CategoryType, Channel, ChannelRecord, ChannelUpdateRequest};
use std::collections::BTreeMap;

/// Which channels a category supports and which are fixed by policy.
///
/// Pinned channels are always `true` and not user-toggleable. Only the
/// treatment-reminder category pins a channel today (its in-app
/// notification), but the table keeps that a data fact rather than a
/// special case in the mutation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPolicy {
    pub allowed: &'static [Channel],
    pub pinned: &'static [Channel],
}

const ALL_CHANNELS: &[Channel] = &[Channel::Email, Channel::Sms, Channel::Insite, Channel::Phone];
const COMMUNITY_CHANNELS: &[Channel] = &[Channel::Email, Channel::Insite];
const TREATMENT_PINNED: &[Channel] = &[Channel::Insite];

impl ChannelPolicy {
    /// Policy table, one row per category.
    pub fn for_category(category: CategoryType) -> ChannelPolicy {
        match category {
            CategoryType::Treatment => ChannelPolicy {
                allowed: ALL_CHANNELS,
                pinned: TREATMENT_PINNED,
            },
            CategoryType::Community => ChannelPolicy {
                allowed: COMMUNITY_CHANNELS,
                pinned: &[],
            },
            CategoryType::Symptom
            | CategoryType::Questionnaire
            | CategoryType::Challenge
            | CategoryType::NewContent => ChannelPolicy {
                allowed: ALL_CHANNELS,
                pinned: &[],
            },
        }
    }

    pub fn allows(&self, channel: Channel) -> bool {
        self.allowed.contains(&channel)
    }

    pub fn is_pinned(&self, channel: Channel) -> bool {
        self.pinned.contains(&channel)
    }
}

/// One category's toggle state: channel flags plus the derived "all" switch.
///
/// Despite the name, `all_flag` follows the observed product behaviour of
/// "any channel on" (logical OR), not "all channels on".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleGroup {
    pub category: CategoryType,
    channels: BTreeMap<Channel, bool>,
    all_flag: bool,
}

impl ToggleGroup {
    /// New group with policy defaults: pinned channels on, everything else off.
    pub fn new(category: CategoryType) -> Self {
        let policy = ChannelPolicy::for_category(category);
        let channels = policy
            .allowed
            .iter()
            .map(|&ch| (ch, policy.is_pinned(ch)))
            .collect();
        let mut group = Self {
            category,
            channels,
            all_flag: false,
        };
        group.recompute_all_flag();
        group
    }

    /// Initialise channel values from a fetched settings record.
    ///
    /// Channels outside the category's allowed set are ignored; pinned
    /// channels are forced on regardless of what the record says.
    pub fn load(&mut self, record: &ChannelRecord) {
        let policy = ChannelPolicy::for_category(self.category);
        for (&channel, value) in self.channels.iter_mut() {
            *value = policy.is_pinned(channel) || record.get(channel);
        }
        self.recompute_all_flag();
    }

    /// Set one channel from a checkbox change.
    ///
    /// Silent no-op for channels the category does not allow and for pinned
    /// channels. Recomputes the "all" switch afterwards.
    pub fn set_channel(&mut self, channel: Channel, value: bool) {
        let policy = ChannelPolicy::for_category(self.category);
        if !policy.allows(channel) || policy.is_pinned(channel) {
            return;
        }
        self.channels.insert(channel, value);
        self.recompute_all_flag();
    }

    /// Bulk toggle from the "all" switch.
    ///
    /// Every non-pinned channel takes `value`; pinned channels stay on. The
    /// switch itself takes `value` directly, so switching a pinned category
    /// off reports `all_flag == false` even though its pinned channel is
    /// still on. That matches the shipped panel; the next channel-level
    /// change recomputes the OR and flips it back.
    pub fn set_all(&mut self, value: bool) {
        let policy = ChannelPolicy::for_category(self.category);
        for (&channel, flag) in self.channels.iter_mut() {
            if !policy.is_pinned(channel) {
                *flag = value;
            }
        }
        self.all_flag = value;
    }

    pub fn channel(&self, channel: Channel) -> Option<bool> {
        self.channels.get(&channel).copied()
    }

    pub fn all_flag(&self) -> bool {
        self.all_flag
    }

    /// Pure serialization into this category's save payload. Pinned channels
    /// are forced on; disallowed channels are absent.
    pub fn to_save_request(&self) -> ChannelUpdateRequest {
        let policy = ChannelPolicy::for_category(self.category);
        let channels = self
            .channels
            .iter()
            .map(|(&ch, &value)| (ch, policy.is_pinned(ch) || value))
            .collect();
        ChannelUpdateRequest {
            category: self.category,
            channels,
        }
    }

    fn recompute_all_flag(&mut self) {
        self.all_flag = self.channels.values().any(|&v| v);
    }
}

/// The full preference panel model: one toggle group per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleGroupModel {
    groups: BTreeMap<CategoryType, ToggleGroup>,
}

impl ToggleGroupModel {
    /// Model with every category at policy defaults.
    pub fn new() -> Self {
        let groups = CategoryType::ALL
            .iter()
            .map(|&category| (category, ToggleGroup::new(category)))
            .collect();
        Self { groups }
    }

    pub fn group(&self, category: CategoryType) -> &ToggleGroup {
        &self.groups[&category]
    }

    pub fn load(&mut self, category: CategoryType, record: &ChannelRecord) {
        if let Some(group) = self.groups.get_mut(&category) {
            group.load(record);
        }
    }

    pub fn set_channel(&mut self, category: CategoryType, channel: Channel, value: bool) {
        if let Some(group) = self.groups.get_mut(&category) {
            group.set_channel(channel, value);
        }
    }

    pub fn set_all(&mut self, category: CategoryType, value: bool) {
        if let Some(group) = self.groups.get_mut(&category) {
            group.set_all(value);
        }
    }

    /// One save request per category, in panel order.
    pub fn to_save_requests(&self) -> Vec<ChannelUpdateRequest> {
        CategoryType::ALL
            .iter()
            .map(|category| self.groups[category].to_save_request())
            .collect()
    }
}

impl Default for ToggleGroupModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_defaults() {
        let group = ToggleGroup::new(CategoryType::Symptom);
        for channel in Channel::ALL {
            assert_eq!(group.channel(channel), Some(false));
        }
        assert!(!group.all_flag());

        // Pinned channel starts on, so the derived switch starts on too
        let treatment = ToggleGroup::new(CategoryType::Treatment);
        assert_eq!(treatment.channel(Channel::Insite), Some(true));
        assert!(treatment.all_flag());
    }

    #[test]
    fn test_community_allows_only_email_and_insite() {
        let group = ToggleGroup::new(CategoryType::Community);
        assert_eq!(group.channel(Channel::Email), Some(false));
        assert_eq!(group.channel(Channel::Insite), Some(false));
        assert_eq!(group.channel(Channel::Sms), None);
        assert_eq!(group.channel(Channel::Phone), None);
    }

    #[test]
    fn test_set_channel_recomputes_all_flag() {
        let mut group = ToggleGroup::new(CategoryType::Questionnaire);
        group.set_channel(Channel::Sms, true);
        assert!(group.all_flag());

        group.set_channel(Channel::Sms, false);
        assert!(!group.all_flag());
    }

    #[test]
    fn test_all_flag_is_or_after_any_mutation_sequence() {
        let mut group = ToggleGroup::new(CategoryType::Challenge);
        group.set_channel(Channel::Email, true);
        group.set_channel(Channel::Phone, true);
        group.set_channel(Channel::Email, false);
        // Phone still on, so the OR holds
        assert!(group.all_flag());
        group.set_channel(Channel::Phone, false);
        assert!(!group.all_flag());
    }

    #[test]
    fn test_set_channel_invalid_channel_is_noop() {
        let mut group = ToggleGroup::new(CategoryType::Community);
        let before = group.clone();
        group.set_channel(Channel::Sms, true);
        group.set_channel(Channel::Phone, true);
        assert_eq!(group, before);
    }

    #[test]
    fn test_set_channel_pinned_channel_is_noop() {
        let mut group = ToggleGroup::new(CategoryType::Treatment);
        group.set_channel(Channel::Insite, false);
        assert_eq!(group.channel(Channel::Insite), Some(true));
    }

    #[test]
    fn test_set_all_round_trip() {
        let mut group = ToggleGroup::new(CategoryType::Symptom);
        group.set_all(true);
        for channel in Channel::ALL {
            assert_eq!(group.channel(channel), Some(true));
        }
        assert!(group.all_flag());

        group.set_all(false);
        for channel in Channel::ALL {
            assert_eq!(group.channel(channel), Some(false));
        }
        assert!(!group.all_flag());
    }

    #[test]
    fn test_set_all_false_keeps_pinned_channel_on() {
        let mut group = ToggleGroup::new(CategoryType::Treatment);
        group.set_all(true);
        group.set_all(false);

        assert_eq!(group.channel(Channel::Email), Some(false));
        assert_eq!(group.channel(Channel::Sms), Some(false));
        assert_eq!(group.channel(Channel::Phone), Some(false));
        assert_eq!(group.channel(Channel::Insite), Some(true));
        // The switch reports what the user set, even though the pinned
        // channel keeps the OR true
        assert!(!group.all_flag());

        // Any channel-level change recomputes the OR, which includes the pin
        group.set_channel(Channel::Email, false);
        assert!(group.all_flag());
    }

    #[test]
    fn test_load_forces_pinned_channel() {
        let mut group = ToggleGroup::new(CategoryType::Treatment);
        group.load(&ChannelRecord {
            email: true,
            sms: false,
            insite: false,
            phone: false,
        });
        assert_eq!(group.channel(Channel::Email), Some(true));
        assert_eq!(group.channel(Channel::Insite), Some(true));
        assert!(group.all_flag());
    }

    #[test]
    fn test_load_all_false_record() {
        let mut group = ToggleGroup::new(CategoryType::Community);
        group.load(&ChannelRecord::default());
        assert!(!group.all_flag());
    }

    #[test]
    fn test_save_request_omits_disallowed_channels() {
        let mut group = ToggleGroup::new(CategoryType::Community);
        group.set_channel(Channel::Email, true);
        let request = group.to_save_request();

        assert_eq!(request.category, CategoryType::Community);
        assert_eq!(request.channels.get(&Channel::Email), Some(&true));
        assert_eq!(request.channels.get(&Channel::Insite), Some(&false));
        assert!(!request.channels.contains_key(&Channel::Sms));
        assert!(!request.channels.contains_key(&Channel::Phone));
    }

    #[test]
    fn test_save_request_forces_pinned_channel_on() {
        let mut group = ToggleGroup::new(CategoryType::Treatment);
        group.set_all(false);
        let request = group.to_save_request();
        assert_eq!(request.channels.get(&Channel::Insite), Some(&true));
    }

    #[test]
    fn test_model_produces_one_request_per_category() {
        let model = ToggleGroupModel::new();
        let requests = model.to_save_requests();
        assert_eq!(requests.len(), CategoryType::ALL.len());
        let categories: Vec<_> = requests.iter().map(|r| r.category).collect();
        assert_eq!(categories, CategoryType::ALL.to_vec());
    }
}
