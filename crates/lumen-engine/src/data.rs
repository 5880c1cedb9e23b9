//! Opaque configuration value objects passed through to the engine
//!
//! Both types are bitmasks the engine interprets; this layer only builds
//! them and hands them on.

use serde::{Deserialize, Serialize};

/// Flags applied to a single `load_url` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadUrlFlags(u32);

impl LoadUrlFlags {
    pub const NONE: u32 = 0;
    pub const BYPASS_CACHE: u32 = 1 << 0;
    pub const BYPASS_PROXY: u32 = 1 << 1;
    pub const EXTERNAL: u32 = 1 << 2;
    pub const ALLOW_POPUPS: u32 = 1 << 3;
    pub const BYPASS_CLASSIFIER: u32 = 1 << 4;

    const ALL: u32 = Self::BYPASS_CACHE
        | Self::BYPASS_PROXY
        | Self::EXTERNAL
        | Self::ALLOW_POPUPS
        | Self::BYPASS_CLASSIFIER;

    /// No special load behavior. The default for every load.
    pub fn none() -> Self {
        Self(Self::NONE)
    }

    pub fn all() -> Self {
        Self(Self::ALL)
    }

    /// Combine an arbitrary set of flag constants.
    pub fn select(types: &[u32]) -> Self {
        Self(types.iter().fold(Self::NONE, |acc, t| acc | t))
    }

    pub fn contains(&self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for LoadUrlFlags {
    fn default() -> Self {
        Self::none()
    }
}

/// Selector for the categories of browsing data a clear operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsingData(u32);

impl BrowsingData {
    pub const COOKIES: u32 = 1 << 0;
    pub const NETWORK_CACHE: u32 = 1 << 1;
    pub const IMAGE_CACHE: u32 = 1 << 2;
    pub const DOM_STORAGES: u32 = 1 << 4;
    pub const AUTH_SESSIONS: u32 = 1 << 5;
    pub const PERMISSIONS: u32 = 1 << 6;

    const ALL: u32 = Self::COOKIES
        | Self::NETWORK_CACHE
        | Self::IMAGE_CACHE
        | Self::DOM_STORAGES
        | Self::AUTH_SESSIONS
        | Self::PERMISSIONS;

    /// Every category. The default for clear-data operations.
    pub fn all() -> Self {
        Self(Self::ALL)
    }

    /// Combine an arbitrary set of category constants.
    pub fn select(types: &[u32]) -> Self {
        Self(types.iter().fold(0, |acc, t| acc | t))
    }

    pub fn contains(&self, category: u32) -> bool {
        self.0 & category != 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for BrowsingData {
    fn default() -> Self {
        Self::all()
    }
}
