//! Summary metric cards.
//!
//! The figures are fixed placeholders; nothing here is computed from data.

/// Colour scheme of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Purple,
    Blue,
    Orange,
}

impl CardTone {
    /// CSS modifier class for the card background.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Purple => "stat-card--purple",
            Self::Blue => "stat-card--blue",
            Self::Orange => "stat-card--orange",
        }
    }
}

/// One metric card on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    /// Caption under the figure.
    pub label: &'static str,
    /// Headline figure.
    pub value: &'static str,
    /// Change badge, e.g. `+60%`.
    pub delta: &'static str,
    /// Phosphor icon class.
    pub icon: &'static str,
    pub tone: CardTone,
}

/// The three cards shown at the top of the dashboard.
#[must_use]
pub const fn dashboard_stat_cards() -> [StatCard; 3] {
    [
        StatCard {
            label: "Stock Total",
            value: "$150000",
            delta: "+60%",
            icon: "ph-monitor",
            tone: CardTone::Purple,
        },
        StatCard {
            label: "Total Profit",
            value: "$25000",
            delta: "+30%",
            icon: "ph-currency-dollar",
            tone: CardTone::Blue,
        },
        StatCard {
            label: "Unique Visitors",
            value: "250000",
            delta: "+80%",
            icon: "ph-users",
            tone: CardTone::Orange,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stat_cards() {
        let cards = dashboard_stat_cards();
        assert_eq!(cards.map(|c| c.value), ["$150000", "$25000", "250000"]);
        assert_eq!(cards.map(|c| c.delta), ["+60%", "+30%", "+80%"]);
        assert_eq!(
            cards.map(|c| c.label),
            ["Stock Total", "Total Profit", "Unique Visitors"]
        );
    }
}
