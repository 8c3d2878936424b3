//! Weapon and defeated-monster stack.
//!
//! A weapon keeps blocking monsters for free only while each new monster is
//! strictly weaker than the last one it defeated:
//!
//! | weapon | stack      | monster `r`      | damage          | stack after |
//! |--------|------------|------------------|-----------------|-------------|
//! | none   | -          | any              | `r`             | unchanged   |
//! | `w`    | empty      | any              | `max(r - w, 0)` | `[r]`       |
//! | `w`    | `[h, ..]`  | `r < h`          | `0`             | `[r, h, ..]`|
//! | `w`    | `[h, ..]`  | `r >= h`         | `r`             | unchanged   |

use serde::{Deserialize, Serialize};

/// How an attack was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strike {
    /// No weapon: full damage.
    Unarmed,
    /// First monster fought with this weapon: reduced damage, starts the stack.
    FirstBlood,
    /// Weaker than the last defeated monster: no damage, stacked.
    Parried,
    /// Equal or stronger than the last defeated monster: full damage.
    Overpowered,
}

/// Result of resolving one monster against the current weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Rank of the monster.
    pub monster: u8,
    /// Health lost.
    pub damage: u8,
    pub strike: Strike,
}

/// Equipped weapon and the monsters it has defeated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Weapon rank, 0 when unarmed.
    weapon: u8,
    /// Defeated monster ranks, most recent first.
    stack: Vec<u8>,
}

impl CombatState {
    /// Unarmed, nothing defeated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weapon rank, 0 when unarmed.
    #[must_use]
    pub fn weapon(&self) -> u8 {
        self.weapon
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.weapon != 0
    }

    /// Defeated monster ranks, most recent first.
    #[must_use]
    pub fn stack(&self) -> &[u8] {
        &self.stack
    }

    /// Most recently defeated monster.
    #[must_use]
    pub fn last_defeated(&self) -> Option<u8> {
        self.stack.first().copied()
    }

    /// Equip a weapon.
    ///
    /// Fails with the current weapon rank if already armed.
    pub fn equip(&mut self, rank: u8) -> Result<(), u8> {
        if self.is_armed() {
            return Err(self.weapon);
        }
        self.weapon = rank;
        Ok(())
    }

    /// Drop the weapon and its stack.
    ///
    /// Returns the discarded weapon rank, or `None` if unarmed.
    pub fn discard(&mut self) -> Option<u8> {
        if !self.is_armed() {
            return None;
        }
        let weapon = std::mem::take(&mut self.weapon);
        self.stack.clear();
        Some(weapon)
    }

    /// Fight a monster of rank `monster`.
    ///
    /// Updates the stack and reports the damage to apply; health is owned by
    /// the caller.
    pub fn resolve_attack(&mut self, monster: u8) -> Attack {
        let (damage, strike) = if !self.is_armed() {
            (monster, Strike::Unarmed)
        } else {
            match self.last_defeated() {
                None => {
                    self.stack.insert(0, monster);
                    (monster.saturating_sub(self.weapon), Strike::FirstBlood)
                }
                Some(head) if monster < head => {
                    self.stack.insert(0, monster);
                    (0, Strike::Parried)
                }
                Some(_) => (monster, Strike::Overpowered),
            }
        };

        Attack {
            monster,
            damage,
            strike,
        }
    }

    /// Whether the stack is non-increasing from most recent to oldest.
    #[must_use]
    pub fn stack_is_ordered(&self) -> bool {
        self.stack.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(weapon: u8, stack: &[u8]) -> CombatState {
        CombatState {
            weapon,
            stack: stack.to_vec(),
        }
    }

    #[test]
    fn test_unarmed_takes_full_damage() {
        let mut combat = CombatState::new();
        let attack = combat.resolve_attack(10);

        assert_eq!(attack.damage, 10);
        assert_eq!(attack.strike, Strike::Unarmed);
        assert_eq!(combat, CombatState::new());
    }

    #[test]
    fn test_first_blood_reduces_damage() {
        let mut combat = armed(5, &[]);
        let attack = combat.resolve_attack(8);

        assert_eq!(attack.damage, 3);
        assert_eq!(attack.strike, Strike::FirstBlood);
        assert_eq!(combat.stack(), &[8]);
    }

    #[test]
    fn test_first_blood_never_heals() {
        let mut combat = armed(9, &[]);
        let attack = combat.resolve_attack(4);

        assert_eq!(attack.damage, 0);
        assert_eq!(combat.stack(), &[4]);
    }

    #[test]
    fn test_weaker_monster_is_parried() {
        let mut combat = armed(5, &[8]);
        let attack = combat.resolve_attack(6);

        assert_eq!(attack.damage, 0);
        assert_eq!(attack.strike, Strike::Parried);
        assert_eq!(combat.stack(), &[6, 8]);
        assert_eq!(combat.last_defeated(), Some(6));
    }

    #[test]
    fn test_stronger_monster_overpowers() {
        let mut combat = armed(5, &[6, 8]);
        let attack = combat.resolve_attack(9);

        assert_eq!(attack.damage, 9);
        assert_eq!(attack.strike, Strike::Overpowered);
        assert_eq!(combat.stack(), &[6, 8]);
        assert_eq!(combat.weapon(), 5);
    }

    #[test]
    fn test_equal_monster_overpowers() {
        let mut combat = armed(5, &[6]);
        let attack = combat.resolve_attack(6);

        assert_eq!(attack.damage, 6);
        assert_eq!(attack.strike, Strike::Overpowered);
        assert_eq!(combat.stack(), &[6]);
    }

    #[test]
    fn test_equip() {
        let mut combat = CombatState::new();
        assert_eq!(combat.equip(7), Ok(()));
        assert_eq!(combat.weapon(), 7);
        assert!(combat.is_armed());

        assert_eq!(combat.equip(3), Err(7));
        assert_eq!(combat.weapon(), 7);
    }

    #[test]
    fn test_discard() {
        let mut combat = armed(5, &[6, 8]);
        assert_eq!(combat.discard(), Some(5));
        assert_eq!(combat, CombatState::new());

        assert_eq!(combat.discard(), None);
    }

    #[test]
    fn test_stack_stays_ordered() {
        let mut combat = armed(3, &[]);
        for monster in [10, 7, 12, 7, 2, 14, 1] {
            combat.resolve_attack(monster);
            assert!(combat.stack_is_ordered(), "{:?}", combat.stack());
        }
        assert_eq!(combat.stack(), &[1, 2, 7, 10]);
    }

    #[test]
    fn test_serialization() {
        let combat = armed(5, &[6, 8]);
        let json = serde_json::to_string(&combat).unwrap();
        let deserialized: CombatState = serde_json::from_str(&json).unwrap();
        assert_eq!(combat, deserialized);
    }
}
