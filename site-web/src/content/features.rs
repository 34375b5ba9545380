//! Home page feature grid

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: IconKind::Brain,
        title: "AI Financial Assistant",
        description: "Your personal AI advisor analyzes spending patterns and provides intelligent recommendations to help you save money and reach financial goals faster.",
    },
    Feature {
        icon: IconKind::Sparkles,
        title: "Smart Categorization",
        description: "AI automatically categorizes your transactions and identifies spending trends. Get instant insights without manual effort.",
    },
    Feature {
        icon: IconKind::CreditCard,
        title: "Manual & CSV Import",
        description: "Add transactions manually or bulk import via CSV. Perfect for cash expenses, freelancers, and small businesses.",
    },
    Feature {
        icon: IconKind::TrendingUp,
        title: "Predictive Analytics",
        description: "AI predicts future spending patterns and alerts you before you exceed budgets. Stay ahead of your finances.",
    },
    Feature {
        icon: IconKind::Zap,
        title: "Instant AI Insights",
        description: "Ask your AI assistant anything about your finances. Get instant answers, tips, and personalized advice in natural language.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Bank-Grade Security",
        description: "Advanced encryption, biometric authentication, and PIN protection. Your financial data is always secure and private.",
    },
];

/// App screenshots shown in the hero: image path, alt text, caption, subcaption.
pub const SCREENSHOTS: [(&str, &str, &str, &str); 2] = [
    ("/screenshot 1.png", "Expenzez Dashboard", "Dashboard", "Track all accounts"),
    ("/screenshot 2.png", "Budget Tracking", "Budget Tracking", "Monitor spending"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_titles_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
