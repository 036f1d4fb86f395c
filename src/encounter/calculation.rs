use schema::{EffectKind, ItemEffect, ItemRecord};

/// Damage dealt by the player's plain attack.
pub fn calculate_player_damage(base_attack: u32, attack_buff: u32) -> u32 {
    base_attack.saturating_add(attack_buff)
}

/// Damage dealt by the opponent. Debuffs can never reduce it below 1.
pub fn calculate_opponent_damage(base_attack: u32, attack_debuff: u32) -> u32 {
    base_attack.saturating_sub(attack_debuff).max(1)
}

/// Effect an item applies. Items without effect metadata heal by `default_heal`.
pub fn resolve_item_effect(item: &ItemRecord, default_heal: u32) -> ItemEffect {
    item.effect().unwrap_or(ItemEffect {
        kind: EffectKind::Heal,
        magnitude: default_heal,
    })
}

/// Whether using an item with this effect ends the player's turn.
///
/// Debuffing the opponent is a free action.
pub fn effect_passes_turn(kind: EffectKind) -> bool {
    !matches!(kind, EffectKind::AttackDebuff)
}
