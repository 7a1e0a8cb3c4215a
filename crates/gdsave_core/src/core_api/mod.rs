mod engine;
mod error;
mod icons;
mod types;

pub use engine::{Engine, Session};
pub use error::{CoreError, CoreErrorCode};
pub use icons::{FIRST_UNLOCKABLE_ICON, IconKind};
pub use types::{LevelCollectionEntry, Snapshot, StatEntry};
