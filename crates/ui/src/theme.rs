use std::fmt;
use std::str::FromStr;

use onboard_core::model::StepIcon;

/// Named presets shipped with the checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreset {
    #[default]
    Violet,
    Emerald,
}

impl ThemePreset {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreset::Violet => "violet",
            ThemePreset::Emerald => "emerald",
        }
    }

    #[must_use]
    pub fn theme(self) -> ChecklistTheme {
        match self {
            ThemePreset::Violet => ChecklistTheme::violet(),
            ThemePreset::Emerald => ChecklistTheme::emerald(),
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeError {
    raw: String,
}

impl fmt::Display for UnknownThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?} (expected violet or emerald)", self.raw)
    }
}

impl std::error::Error for UnknownThemeError {}

impl FromStr for ThemePreset {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "violet" => Ok(Self::Violet),
            "emerald" => Ok(Self::Emerald),
            _ => Err(UnknownThemeError { raw: s.to_string() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    Comfortable,
    Compact,
}

impl Density {
    fn modifier(self) -> &'static str {
        match self {
            Density::Comfortable => "checklist--comfortable",
            Density::Compact => "checklist--compact",
        }
    }
}

/// Visual parameters of the checklist card.
///
/// Colors live in the stylesheet under the preset's modifier class; the
/// theme picks the modifier, spacing density, glyph size and the glyph shown
/// on completed steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistTheme {
    pub preset: ThemePreset,
    pub density: Density,
    pub glyph_size: u32,
    pub completed_icon: StepIcon,
}

impl ChecklistTheme {
    #[must_use]
    pub fn violet() -> Self {
        Self {
            preset: ThemePreset::Violet,
            density: Density::Comfortable,
            glyph_size: 24,
            completed_icon: StepIcon::Check,
        }
    }

    #[must_use]
    pub fn emerald() -> Self {
        Self {
            preset: ThemePreset::Emerald,
            density: Density::Compact,
            glyph_size: 20,
            completed_icon: StepIcon::CircleCheck,
        }
    }

    #[must_use]
    pub fn root_class(&self) -> String {
        format!(
            "checklist checklist--{} {}",
            self.preset.as_str(),
            self.density.modifier()
        )
    }
}

impl Default for ChecklistTheme {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}
