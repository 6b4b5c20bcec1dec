//! Static site copy. Everything here is fixed at build time and may be
//! overridden wholesale from the config file, never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Everything the page renders that is not UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company: Company,
    pub features: Vec<Feature>,
    pub social: Social,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub domain: String,
    pub contact_email: String,
}

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub twitter: String,
    pub instagram: String,
    pub facebook: String,
}

/// Brand colours as CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

impl SiteConfig {
    #[must_use]
    pub const fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Feature at `index`, wrapping around the list. `None` only for an empty list.
    #[must_use]
    pub fn feature(&self, index: usize) -> Option<&Feature> {
        match self.features.len() {
            0 => None,
            len => self.features.get(index % len),
        }
    }

    #[must_use]
    pub fn site_url(&self) -> String {
        format!("https://{}", self.company.domain)
    }

    #[must_use]
    pub fn og_image_url(&self) -> String {
        format!("{}/og-image.jpg", self.site_url())
    }

    /// Inline CSS custom properties for the brand palette.
    #[must_use]
    pub fn palette_css(&self) -> String {
        let p = &self.palette;
        format!(
            ":root {{ --color-primary: {}; --color-secondary: {}; --color-background: {}; --color-text: {}; }}",
            p.primary, p.secondary, p.background, p.text
        )
    }
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

// --- Default ---

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: Company::default(),
            features: default_features(),
            social: Social::default(),
            palette: Palette::default(),
        }
    }
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: "Front of House Productions".to_owned(),
            short_name: "foh-pro".to_owned(),
            tagline: "Coming Soon: Event Production Made Simple".to_owned(),
            domain: "foh-pro.com".to_owned(),
            contact_email: "info@foh-pro.com".to_owned(),
        }
    }
}

impl Default for Social {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/fohpro".to_owned(),
            instagram: "https://instagram.com/fohpro".to_owned(),
            facebook: "https://facebook.com/fohpro".to_owned(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#9aea00".to_owned(),
            secondary: "#333333".to_owned(),
            background: "#ffffff".to_owned(),
            text: "#000000".to_owned(),
        }
    }
}

fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "Backed by Expert Audio Video and Lighting Technicians",
            "Our seasoned professionals ensure flawless technical execution at every event bringing together cutting-edge equipment and years of industry expertise.",
        ),
        Feature::new(
            "Experience the Flow of a Connected Team",
            "Our platform brings everyone together in one unified workspace ensuring seamless coordination and eliminating communication silos.",
        ),
        Feature::new(
            "Plan Your Event in Minutes Not Days",
            "Our streamlined booking and automated checklists let you spend more time creating memorable moments\u{2014}and less time on logistics.",
        ),
        Feature::new(
            "Never Miss a Beat\u{2014}Stay in the Loop 24/7",
            "Real-time dashboards and push notifications keep you updated on every detail so you can focus on the fun.",
        ),
        Feature::new(
            "Get the Perfect Setup Every Time",
            "Our AI-driven equipment suggestions ensure you're never under- or over-prepared\u{2014}just plug in your event details and we'll do the rest.",
        ),
        Feature::new(
            "Collaborate with Ease\u{2014}All Under One Roof",
            "Share venue maps invite team members and track tasks together. No extra apps no confusion\u{2014}just smooth teamwork.",
        ),
        Feature::new(
            "Cut Costs Without Cutting Corners",
            "Stay on budget with smart recommendations real-time expense tracking and exclusive loyalty rewards for repeat bookings.",
        ),
        Feature::new(
            "Peace of Mind\u{2014}Anywhere Anytime",
            "Keep an eye on deliveries staff assignments and potential risks straight from your phone. Worry less celebrate more.",
        ),
        Feature::new(
            "Turn Your Photos & Videos into Memories",
            "Easily upload event media add branded watermarks and share highlights with a single click\u{2014}your event goes live online instantly.",
        ),
    ]
}
