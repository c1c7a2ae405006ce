//! What kind of forager an entity is and how it perceives the world.

use std::fmt;

use fg_core::{FgError, FgResult, ensure_non_negative, ensure_probability};

// ── Variant ───────────────────────────────────────────────────────────────────

/// Movement strategy family.
///
/// The discriminant doubles as the index into the behavior strategy table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Variant {
    #[default]
    Solitary               = 0,
    Social                 = 1,
    StrainSpecificSolitary = 2,
    StrainSpecificSocial   = 3,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Solitary,
        Variant::Social,
        Variant::StrainSpecificSolitary,
        Variant::StrainSpecificSocial,
    ];

    /// Variant for the `social` / `strain_specific` configuration flags.
    pub fn from_flags(social: bool, strain_specific: bool) -> Self {
        match (social, strain_specific) {
            (false, false) => Variant::Solitary,
            (true, false)  => Variant::Social,
            (false, true)  => Variant::StrainSpecificSolitary,
            (true, true)   => Variant::StrainSpecificSocial,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_social(self) -> bool {
        matches!(self, Variant::Social | Variant::StrainSpecificSocial)
    }

    #[inline]
    pub fn is_strain_specific(self) -> bool {
        matches!(self, Variant::StrainSpecificSolitary | Variant::StrainSpecificSocial)
    }

    pub fn capabilities(self) -> Capabilities {
        Capabilities {
            senses_discrete_food:    true,
            uses_targeted_step:      self.is_social(),
            uses_border_leave_logic: self.is_strain_specific(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Solitary               => "solitary",
            Variant::Social                 => "social",
            Variant::StrainSpecificSolitary => "strain_specific_solitary",
            Variant::StrainSpecificSocial   => "strain_specific_social",
        })
    }
}

/// Feature set a variant's strategy draws on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Narrows the move radius when food is within `sensing_range`.
    pub senses_discrete_food:    bool,
    /// Restricts candidates to cells shared with nearby foragers.
    pub uses_targeted_step:      bool,
    /// Decides between staying on and leaving a food patch at its border.
    pub uses_border_leave_logic: bool,
}

// ── Weights ───────────────────────────────────────────────────────────────────

/// Blend weights of the continuous heading law.  The remainder
/// `1 − (align + attract + repel)` goes to the random heading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weights {
    pub align:   f64,
    pub attract: f64,
    pub repel:   f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self { align: 0.2, attract: 0.4, repel: 0.4 }
    }
}

impl Weights {
    /// Slack for accumulated rounding in hand-written weights like 0.1 + 0.2 + 0.7.
    const SUM_TOLERANCE: f64 = 1e-9;

    pub fn sum(&self) -> f64 {
        self.align + self.attract + self.repel
    }

    pub fn validate(&self) -> FgResult<()> {
        ensure_non_negative("weights.align", self.align)?;
        ensure_non_negative("weights.attract", self.attract)?;
        ensure_non_negative("weights.repel", self.repel)?;
        if self.sum() > 1.0 + Self::SUM_TOLERANCE {
            return Err(FgError::config("weights", format!("sum must be <= 1, got {}", self.sum())));
        }
        Ok(())
    }
}

// ── Sensing ───────────────────────────────────────────────────────────────────

/// Perception and feeding parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sensing {
    /// Food (grid, in cells) or signal (continuous) perception radius.
    pub sensing_range:       f64,
    /// Neighbors closer than this contribute to alignment.
    pub align_dist:          f64,
    /// Food units eaten per step from the forager's own cell.
    pub feeding_rate:        u32,
    /// Chance of leaving a food patch when standing at its border.
    pub leaving_probability: f64,
}

impl Default for Sensing {
    fn default() -> Self {
        Self {
            sensing_range:       1.0,
            align_dist:          10.0,
            feeding_rate:        1,
            leaving_probability: 0.5,
        }
    }
}

impl Sensing {
    pub fn validate(&self) -> FgResult<()> {
        ensure_non_negative("sensing_range", self.sensing_range)?;
        ensure_non_negative("align_dist", self.align_dist)?;
        ensure_probability("leaving_probability", self.leaving_probability)
    }
}

// ── ForagerProfile ────────────────────────────────────────────────────────────

/// Everything static about one forager.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForagerProfile {
    pub variant: Variant,
    pub weights: Weights,
    pub sensing: Sensing,
}

impl ForagerProfile {
    pub fn new(variant: Variant, weights: Weights, sensing: Sensing) -> FgResult<Self> {
        let profile = Self { variant, weights, sensing };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> FgResult<()> {
        self.weights.validate()?;
        self.sensing.validate()
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.variant.capabilities()
    }
}
