//! Marketing copy for the static pages.

pub const PRODUCT_NAME: &str = "NexClaw";
pub const TAGLINE: &str = "Self-custody wallets with guard rails built in";
pub const SUPPORT_EMAIL: &str = "support@nexclaw.io";
pub const LEGAL_LAST_UPDATED: &str = "June 1, 2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡",
        title: "Risk rules",
        body: "Amount limits, burst protection and address screening on every wallet.",
    },
    Feature {
        icon: "👛",
        title: "Multi-wallet",
        body: "Label, organise and fund any number of wallets from one dashboard.",
    },
    Feature {
        icon: "🔔",
        title: "Alerts",
        body: "Email and push notifications the moment a rule flags a transfer.",
    },
];

pub const ABOUT: &[ContentSection] = &[
    ContentSection {
        heading: "Our mission",
        paragraphs: &[
            "NexClaw makes self-custody safe enough for everyday use. We believe holding your own keys should not mean giving up the protections a bank account offers.",
        ],
    },
    ContentSection {
        heading: "What we build",
        paragraphs: &[
            "A wallet dashboard with programmable risk controls: per-wallet spending limits, velocity checks and destination screening.",
            "Every rule runs before a transfer is signed, so a compromised device cannot drain a wallet in one go.",
        ],
    },
    ContentSection {
        heading: "The team",
        paragraphs: &[
            "We are a small team of security engineers and designers who have spent years building custody infrastructure.",
        ],
    },
];

pub const PRIVACY: &[ContentSection] = &[
    ContentSection {
        heading: "Information we collect",
        paragraphs: &[
            "Your name and email address when you create an account, and the public addresses of wallets you add.",
            "We never see or store private keys or seed phrases.",
        ],
    },
    ContentSection {
        heading: "How we use it",
        paragraphs: &[
            "To operate the dashboard, evaluate your risk rules and send the notifications you opt into.",
        ],
    },
    ContentSection {
        heading: "Your choices",
        paragraphs: &[
            "You can change notification preferences at any time and request deletion of your account by contacting support.",
        ],
    },
];

pub const TERMS: &[ContentSection] = &[
    ContentSection {
        heading: "Acceptance",
        paragraphs: &[
            "By creating an account you agree to these terms. If you do not agree, do not use the service.",
        ],
    },
    ContentSection {
        heading: "Self-custody",
        paragraphs: &[
            "You alone control your wallets. NexClaw cannot reverse transfers or recover lost keys.",
        ],
    },
    ContentSection {
        heading: "Risk controls",
        paragraphs: &[
            "Risk rules reduce but do not eliminate the chance of loss. They are provided as-is without warranty.",
        ],
    },
    ContentSection {
        heading: "Changes",
        paragraphs: &[
            "We may update these terms. Material changes will be announced by email at least 14 days in advance.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_content() {
        for section in ABOUT.iter().chain(PRIVACY).chain(TERMS) {
            assert!(!section.heading.is_empty());
            assert!(!section.paragraphs.is_empty());
        }
    }
}
