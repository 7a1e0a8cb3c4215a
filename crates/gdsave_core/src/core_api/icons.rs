use std::fmt;

/// Icon 1 of every kind is owned from the start.
pub const FIRST_UNLOCKABLE_ICON: u32 = 2;

/// Unlockable icon kinds. Unlocks live in `unlockedItems` under
/// `<item prefix>_<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Cube,
    Ship,
    Ball,
    Ufo,
    Wave,
    Robot,
    Spider,
    Trail,
    Death,
}

impl IconKind {
    pub const ALL: [IconKind; 9] = [
        Self::Cube,
        Self::Ship,
        Self::Ball,
        Self::Ufo,
        Self::Wave,
        Self::Robot,
        Self::Spider,
        Self::Trail,
        Self::Death,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Ship => "ship",
            Self::Ball => "ball",
            Self::Ufo => "ufo",
            Self::Wave => "wave",
            Self::Robot => "robot",
            Self::Spider => "spider",
            Self::Trail => "trail",
            Self::Death => "death",
        }
    }

    /// The game's internal name, which differs from the menu name for a few kinds.
    pub fn item_prefix(self) -> &'static str {
        match self {
            Self::Cube => "i",
            Self::Ufo => "bird",
            Self::Wave => "dart",
            Self::Trail => "special",
            other => other.name(),
        }
    }

    /// Highest icon id of this kind.
    pub fn total(self) -> u32 {
        match self {
            Self::Cube => 142,
            Self::Ship => 51,
            Self::Ball => 43,
            Self::Ufo | Self::Wave => 35,
            Self::Robot => 26,
            Self::Spider | Self::Death => 17,
            Self::Trail => 7,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn contains(self, id: u32) -> bool {
        (FIRST_UNLOCKABLE_ICON..=self.total()).contains(&id)
    }

    pub fn item_key(self, id: u32) -> String {
        format!("{}_{id}", self.item_prefix())
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
