use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of spending phases every plan is split into.
pub const PHASE_COUNT: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile {profile} must define {expected} phase weights, got {count}", expected = PHASE_COUNT)]
    WrongPhaseCount { profile: String, count: usize },
    #[error("profile {profile} weights must sum to 100, got {sum}")]
    WeightSum { profile: String, sum: u64 },
    #[error("profile {0} is not defined in the profile table")]
    MissingProfile(ProfileKind),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    Linear,
    FrontLoaded,
    BackLoaded,
    Constant,
    Centered,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 5] = [
        ProfileKind::Linear,
        ProfileKind::FrontLoaded,
        ProfileKind::BackLoaded,
        ProfileKind::Constant,
        ProfileKind::Centered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::Linear => "linear",
            ProfileKind::FrontLoaded => "front-loaded",
            ProfileKind::BackLoaded => "back-loaded",
            ProfileKind::Constant => "constant",
            ProfileKind::Centered => "centered",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Percentage weights of phases 1..=5. Always five entries summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWeights([u32; PHASE_COUNT]);

impl PhaseWeights {
    pub fn new(profile: &str, weights: &[u32]) -> Result<Self, ProfileError> {
        let weights: [u32; PHASE_COUNT] =
            weights
                .try_into()
                .map_err(|_| ProfileError::WrongPhaseCount {
                    profile: profile.to_string(),
                    count: weights.len(),
                })?;
        let sum: u64 = weights.iter().copied().map(u64::from).sum();
        if sum != 100 {
            return Err(ProfileError::WeightSum {
                profile: profile.to_string(),
                sum,
            });
        }
        Ok(Self(weights))
    }

    /// Weight of a 1-based phase number.
    pub fn weight(&self, phase: usize) -> u32 {
        self.0[phase - 1]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Lookup of phase weights by profile, handed to the allocator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: BTreeMap<ProfileKind, PhaseWeights>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(ProfileKind::Linear, PhaseWeights([7, 13, 20, 27, 33]));
        table.insert(ProfileKind::FrontLoaded, PhaseWeights([10, 45, 22, 13, 10]));
        table.insert(ProfileKind::BackLoaded, PhaseWeights([10, 13, 22, 45, 10]));
        table.insert(ProfileKind::Constant, PhaseWeights([12, 22, 22, 22, 22]));
        table.insert(ProfileKind::Centered, PhaseWeights([8, 20, 44, 20, 8]));
        table
    }

    pub fn insert(&mut self, kind: ProfileKind, weights: PhaseWeights) {
        self.profiles.insert(kind, weights);
    }

    pub fn contains(&self, kind: ProfileKind) -> bool {
        self.profiles.contains_key(&kind)
    }

    pub fn weights(&self, kind: ProfileKind) -> Result<&PhaseWeights, ProfileError> {
        self.profiles
            .get(&kind)
            .ok_or(ProfileError::MissingProfile(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileKind, &PhaseWeights)> {
        self.profiles.iter().map(|(kind, weights)| (*kind, weights))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
