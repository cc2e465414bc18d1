use rosu_mods::{GameModIntermode, GameMods as GameModsLazer, GameModsIntermode, GameModsLegacy};

/// Mods that affect flashlight evaluation.
///
/// Can be constructed from lazer mods, intermode mods, or legacy bitflags.
///
/// ```
/// use rosu_flashlight::GameMods;
///
/// let mods = GameMods::from(8 + 1024); // HDFL
///
/// assert!(mods.hd());
/// assert!(mods.fl());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum GameMods {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    /// Whether Hidden is enabled, i.e. approach circles are not shown.
    pub fn hd(&self) -> bool {
        self.contains(GameModIntermode::Hidden, GameModsLegacy::Hidden)
    }

    /// Whether Flashlight is enabled.
    pub fn fl(&self) -> bool {
        self.contains(GameModIntermode::Flashlight, GameModsLegacy::Flashlight)
    }

    fn contains(&self, intermode: GameModIntermode, legacy: GameModsLegacy) -> bool {
        match self {
            Self::Lazer(ref mods) => mods.contains_intermode(intermode),
            Self::Intermode(ref mods) => mods.contains(intermode),
            Self::Legacy(mods) => mods.contains(legacy),
        }
    }
}

impl Default for GameMods {
    fn default() -> Self {
        Self::Legacy(GameModsLegacy::from_bits(0))
    }
}

macro_rules! from_impls {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for GameMods {
                fn from(mods: $ty) -> Self {
                    Self::$variant(mods)
                }
            }
        )*
    };
}

from_impls! {
    GameModsLazer => Lazer,
    GameModsIntermode => Intermode,
    GameModsLegacy => Legacy,
}

impl From<&GameModsLazer> for GameMods {
    fn from(mods: &GameModsLazer) -> Self {
        Self::Lazer(mods.clone())
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        Self::Intermode(mods.clone())
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self::Legacy(GameModsLegacy::from_bits(bits))
    }
}
