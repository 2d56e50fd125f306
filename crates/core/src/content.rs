//! Built-in blueprint catalog shared by the default configuration.

use crate::types::BlueprintKey;

pub mod keys {
    pub const ENCOUNTER_MONSTER: &str = "encounter_monster";
    pub const ENCOUNTER_ELITE: &str = "encounter_elite";
    pub const ENCOUNTER_BOSS: &str = "encounter_boss";

    pub const EVENT_MYSTERY: &str = "event_mystery";

    pub const SITE_MERCHANT: &str = "site_merchant";
    pub const SITE_TREASURE: &str = "site_treasure";
    pub const SITE_REST: &str = "site_rest";
}

/// Pool a node draws from when its layer rolls a randomized blueprint.
/// The boss blueprint is deliberately absent; it is only ever a layer default.
pub fn default_random_pool() -> Vec<BlueprintKey> {
    [
        keys::ENCOUNTER_MONSTER,
        keys::ENCOUNTER_ELITE,
        keys::EVENT_MYSTERY,
        keys::SITE_MERCHANT,
        keys::SITE_TREASURE,
        keys::SITE_REST,
    ]
    .into_iter()
    .map(BlueprintKey::from)
    .collect()
}
