mod client;

pub use client::TrendClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBadge {
    Hot,
    Rising,
    Stable,
}

impl TrendBadge {
    pub fn for_stars(stars: u64) -> Self {
        if stars >= 50_000 {
            Self::Hot
        } else if stars >= 10_000 {
            Self::Rising
        } else {
            Self::Stable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "🔥 Hot",
            Self::Rising => "📈 Rising",
            Self::Stable => "➖ Stable",
        }
    }
}

/// Top repository match for a technology, as ranked by the search API.
#[derive(Debug, Clone)]
pub struct TrendRecord {
    pub stars: u64,
    pub badge: TrendBadge,
    pub repo_name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_tiers_follow_star_thresholds() {
        assert_eq!(TrendBadge::for_stars(75_000), TrendBadge::Hot);
        assert_eq!(TrendBadge::for_stars(12_000), TrendBadge::Rising);
        assert_eq!(TrendBadge::for_stars(500), TrendBadge::Stable);
    }

    #[test]
    fn badge_tier_boundaries() {
        assert_eq!(TrendBadge::for_stars(50_000), TrendBadge::Hot);
        assert_eq!(TrendBadge::for_stars(49_999), TrendBadge::Rising);
        assert_eq!(TrendBadge::for_stars(10_000), TrendBadge::Rising);
        assert_eq!(TrendBadge::for_stars(9_999), TrendBadge::Stable);
        assert_eq!(TrendBadge::for_stars(0), TrendBadge::Stable);
    }
}
