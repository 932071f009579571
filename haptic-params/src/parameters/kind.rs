use std::fmt::Display;

use super::ParameterId;

/// The four logical properties exposed by [`crate::ParameterModel`].
///
/// `Intensity` and `Spectrum` are the stored hardware values, `Movement` and
/// `Vibration` are perceptual levels derived from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticParameter {
    Intensity,
    Spectrum,
    Movement,
    Vibration,
}

impl HapticParameter {
    pub const ALL: [HapticParameter; 4] = [
        Self::Intensity,
        Self::Spectrum,
        Self::Movement,
        Self::Vibration,
    ];

    pub fn from_id(id: ParameterId) -> Option<Self> {
        Self::ALL.into_iter().find(|parameter| parameter.id() == id)
    }

    pub const fn id(self) -> ParameterId {
        match self {
            Self::Intensity => 0,
            Self::Spectrum => 1,
            Self::Movement => 2,
            Self::Vibration => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Intensity => "Intensity",
            Self::Spectrum => "Spectrum",
            Self::Movement => "Movement",
            Self::Vibration => "Vibration",
        }
    }

    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Movement | Self::Vibration)
    }
}

impl Display for HapticParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<HapticParameter> for ParameterId {
    fn from(parameter: HapticParameter) -> Self {
        parameter.id()
    }
}
