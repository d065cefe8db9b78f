//! Systems that operate on the game world each tick.
//!
//! Systems are free functions that borrow the `GameWorld` (or `&GameWorld`
//! for read-only). They do not own state; all state lives in components,
//! the resource field and the notification list.

pub mod bot_ai;
pub mod collision;
pub mod elimination;
pub mod feeding;
pub mod growth;
pub mod movement;
pub mod notifications;
pub mod power_event;
pub mod snapshot;
pub mod steering;
