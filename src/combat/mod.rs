//! Weapon combat.
//!
//! `CombatState` owns the equipped weapon and the stack of monsters it has
//! defeated. It reports damage but never touches health; the rules engine
//! applies it.

pub mod state;

pub use state::{Attack, CombatState, Strike};
