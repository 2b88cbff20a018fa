//! Copy shown on the landing page.

pub const SITE_TITLE: &str = "Lock-In";
pub const TAGLINE: &str = "The easiest way to create flashcards from your text.";
pub const CHECKOUT_TOAST: &str = "Redirecting to Checkout...";

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1591088520983-5afbf1efdde2?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

pub const FEATURES: [&str; 5] = [
    "Automatic Text Parsing",
    "Multiple Flashcard Designs",
    "Export to PDF",
    "Collaborative Decks",
    "Advanced Study Modes",
];

pub fn feature_description(feature: &str) -> String {
    format!("Description of the {}.", feature.to_lowercase())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        price: "$9/month",
        features: &["Feature A", "Feature B", "Feature C"],
    },
    Plan {
        name: "Pro",
        price: "$19/month",
        features: &["Feature A", "Feature B", "Feature C", "Feature D"],
    },
    Plan {
        name: "Enterprise",
        price: "Contact Us",
        features: &["All Features", "Priority Support", "Custom Solutions"],
    },
];

impl Plan {
    pub fn is_highlighted(&self) -> bool {
        self.name == "Pro"
    }

    pub fn feature_summary(&self) -> String {
        self.features.join(", ")
    }

    pub fn cta_label(&self) -> String {
        format!("Choose {}", self.name)
    }
}
