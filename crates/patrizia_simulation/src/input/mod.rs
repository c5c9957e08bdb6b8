//! Player input module
//!
//! ```text
//! Action source (client keyboard/mouse, тест, headless скрипт)
//!     ↓
//! ActionEvent — actions.rs
//!     ↓
//! dispatch_actions + ActionBindings — bindings.rs
//!     ↓
//! CharacterCommand → locomotion
//! ```

pub mod actions;
pub mod bindings;

use bevy::prelude::*;

pub use actions::*;
pub use bindings::*;

/// Input Plugin: events + dispatch (GameplaySet::Input, до locomotion)
pub struct ActionInputPlugin;

impl Plugin for ActionInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActionEvent>()
            .add_event::<CharacterCommand>();

        app.add_systems(
            Update,
            (log_new_bindings, dispatch_actions)
                .chain()
                .in_set(crate::GameplaySet::Input),
        );
    }
}
