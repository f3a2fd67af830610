//! Tool records and their SEO content
//!
//! A tool is one user-facing utility page: routing key, display metadata and
//! optional presentation hints for the consuming UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{AdsProfile, Category, SettingsType};

/// One question/answer pair shown on a tool page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// Descriptive page content for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    /// Introductory paragraph
    pub intro: String,
    /// "How to use" steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<Faq>,
    /// Content freshness date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl Seo {
    pub fn new(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            steps: Vec::new(),
            tips: Vec::new(),
            faq: Vec::new(),
            last_updated: None,
        }
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    pub fn with_faq(mut self, q: impl Into<String>, a: impl Into<String>) -> Self {
        self.faq.push(Faq { q: q.into(), a: a.into() });
        self
    }

    pub fn with_last_updated(mut self, date: NaiveDate) -> Self {
        self.last_updated = Some(date);
        self
    }
}

/// A catalog entry for one utility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub category: Category,
    /// URL-safe identifier, unique within its category
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Material icon name
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    /// Settings panel for the consuming UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_type: Option<SettingsType>,
    /// Display position within the category; unordered tools go last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads_profile: Option<AdsProfile>,
}

impl Tool {
    /// Create a tool with required routing and display fields
    pub fn new(
        category: Category,
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            icon: String::new(),
            tags: Vec::new(),
            seo: None,
            settings_type: None,
            order: None,
            ads_profile: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seo(mut self, seo: Seo) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn with_settings(mut self, settings: SettingsType) -> Self {
        self.settings_type = Some(settings);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_ads_profile(mut self, profile: AdsProfile) -> Self {
        self.ads_profile = Some(profile);
        self
    }

    /// Ads profile, falling back to the default placement
    pub fn effective_ads_profile(&self) -> AdsProfile {
        self.ads_profile.unwrap_or_default()
    }

    /// Sort key for display ordering: explicit orders ascending, then unordered
    pub fn order_key(&self) -> (bool, i32) {
        match self.order {
            Some(order) => (false, order),
            None => (true, 0),
        }
    }

    /// Whether the slug only uses lowercase ASCII letters, digits and hyphens
    pub fn has_url_safe_slug(&self) -> bool {
        !self.slug.is_empty()
            && self
                .slug
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }
}
