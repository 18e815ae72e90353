//! Resource classes, their key prefixes and TTL tiers.

use crate::error::CacheError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Leading segment shared by every cache key.
pub const KEY_NAMESPACE: &str = "cache";

/// How long an entry may live, chosen by how often the data changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtlTier {
    /// One hour: categories, locales, translations.
    Static,
    /// Fifteen minutes.
    SemiStatic,
    /// Five minutes: news and article listings.
    Dynamic,
    /// Five minutes: per-user data.
    User,
    /// One minute.
    Short,
}

impl TtlTier {
    pub const fn as_secs(self) -> u64 {
        match self {
            TtlTier::Static => 3600,
            TtlTier::SemiStatic => 900,
            TtlTier::Dynamic => 300,
            TtlTier::User => 300,
            TtlTier::Short => 60,
        }
    }

    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.as_secs())
    }

    pub const fn name(self) -> &'static str {
        match self {
            TtlTier::Static => "static",
            TtlTier::SemiStatic => "semi-static",
            TtlTier::Dynamic => "dynamic",
            TtlTier::User => "user",
            TtlTier::Short => "short",
        }
    }
}

impl From<TtlTier> for Duration {
    fn from(tier: TtlTier) -> Self {
        tier.duration()
    }
}

/// Logical resource classes whose cached queries are invalidated together.
///
/// Extend by adding a variant and listing it in [`Resource::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    News,
    Articles,
    Lectio,
    Sources,
    Calendar,
    Quotes,
    Categories,
    User,
    Profile,
    Translations,
    Locales,
}

impl Resource {
    pub const ALL: [Resource; 11] = [
        Resource::News,
        Resource::Articles,
        Resource::Lectio,
        Resource::Sources,
        Resource::Calendar,
        Resource::Quotes,
        Resource::Categories,
        Resource::User,
        Resource::Profile,
        Resource::Translations,
        Resource::Locales,
    ];

    /// Lower-case key segment, e.g. `news`.
    pub const fn segment(self) -> &'static str {
        match self {
            Resource::News => "news",
            Resource::Articles => "articles",
            Resource::Lectio => "lectio",
            Resource::Sources => "sources",
            Resource::Calendar => "calendar",
            Resource::Quotes => "quotes",
            Resource::Categories => "categories",
            Resource::User => "user",
            Resource::Profile => "profile",
            Resource::Translations => "translations",
            Resource::Locales => "locales",
        }
    }

    /// Upper-case name used by admin endpoints, e.g. `NEWS`.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::News => "NEWS",
            Resource::Articles => "ARTICLES",
            Resource::Lectio => "LECTIO",
            Resource::Sources => "SOURCES",
            Resource::Calendar => "CALENDAR",
            Resource::Quotes => "QUOTES",
            Resource::Categories => "CATEGORIES",
            Resource::User => "USER",
            Resource::Profile => "PROFILE",
            Resource::Translations => "TRANSLATIONS",
            Resource::Locales => "LOCALES",
        }
    }

    /// Namespace prefix, e.g. `cache:news`.
    pub fn prefix(self) -> String {
        format!("{}:{}", KEY_NAMESPACE, self.segment())
    }

    /// Glob matching every key under [`prefix`](Self::prefix).
    pub fn pattern(self) -> String {
        format!("{}:*", self.prefix())
    }

    /// Tier used when the caller does not pick one.
    pub const fn default_tier(self) -> TtlTier {
        match self {
            Resource::Categories
            | Resource::Locales
            | Resource::Translations
            | Resource::Sources => TtlTier::Static,
            Resource::Lectio | Resource::Calendar | Resource::Quotes => TtlTier::SemiStatic,
            Resource::News | Resource::Articles => TtlTier::Dynamic,
            Resource::User | Resource::Profile => TtlTier::User,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = CacheError;

    /// Accepts `NEWS` or `news`; anything outside the enumeration is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == trimmed || r.segment() == trimmed)
            .ok_or_else(|| CacheError::UnknownResource(s.to_string()))
    }
}
