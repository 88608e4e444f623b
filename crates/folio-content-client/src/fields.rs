//! Typed custom-field payloads for the site's content kinds.
//!
//! Every field is defaulted: the backend omits fields that were never filled
//! in. Image, gallery and price fields that were cleared arrive as `false`,
//! `""` or `[]`; those read as the field's default without affecting the
//! rest of the record. A payload that still does not fit becomes the type's
//! `Default` during normalization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Image reference inside custom fields (`{"url": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: String,
}

/// Gallery image inside custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub id: u64,
    pub title: String,
    pub full_image_url: String,
    pub thumbnail_image_url: String,
    pub alt_text: String,
    #[serde(deserialize_with = "or_default")]
    pub media_details: ImageDimensions,
}

/// Pixel dimensions of a gallery image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// One entry of the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceFields {
    pub job_title: String,
    pub job_start_year: String,
    pub job_end_year: String,
    pub company_name: String,
    pub location: String,
    pub job_description: String,
    #[serde(deserialize_with = "or_default")]
    pub company_logo: ImageRef,
}

/// Portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFields {
    pub short_project_description: String,
    pub project_description: String,
    /// Comma-separated technology list.
    #[serde(rename = "tools_&_technologies")]
    pub tools_and_technologies: String,
    #[serde(deserialize_with = "or_default")]
    pub screenshots: Vec<GalleryImage>,
}

impl ProjectFields {
    /// The technology list, split and trimmed.
    pub fn technologies(&self) -> Vec<&str> {
        split_list(&self.tools_and_technologies)
    }
}

/// Client testimonial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewFields {
    pub client_name: String,
    pub testimonial_author_title: String,
    pub testimonial_quote: String,
    #[serde(deserialize_with = "or_default")]
    pub image: ImageRef,
}

/// Case study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudyFields {
    pub client_name: String,
    pub completion_date: String,
    pub project_duration: String,
    #[serde(deserialize_with = "or_default")]
    pub screenshots: Vec<GalleryImage>,
}

/// Service offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFields {
    pub subtitle: String,
    pub short_description: String,
    pub detailed_description: String,
    /// Comma-separated feature list.
    pub features: String,
    #[serde(deserialize_with = "price")]
    pub orig_price: Option<f64>,
    #[serde(deserialize_with = "price")]
    pub discounted_price: Option<f64>,
}

impl ServiceFields {
    /// The feature list, split and trimmed.
    pub fn features_list(&self) -> Vec<&str> {
        split_list(&self.features)
    }

    /// Price to charge: the discounted price when set, else the original.
    pub fn effective_price(&self) -> Option<f64> {
        self.discounted_price.or(self.orig_price)
    }
}

/// Site owner profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoFields {
    pub name: String,
    #[serde(rename = "title__headline")]
    pub headline: String,
    pub button_text: String,
    pub button_url: String,
    pub button_target: String,
    /// Comma-separated profile URLs.
    #[serde(rename = "social_media_comma_seperated")]
    pub social_media: String,
    #[serde(deserialize_with = "or_default")]
    pub images: Vec<GalleryImage>,
    #[serde(deserialize_with = "or_default")]
    pub logo: ImageRef,
}

impl PersonalInfoFields {
    /// Recognised social profile links, in listed order.
    pub fn social_links(&self) -> Vec<SocialLink> {
        split_list(&self.social_media)
            .into_iter()
            .filter_map(|url| {
                SocialPlatform::classify(url).map(|platform| SocialLink {
                    platform,
                    url: url.to_string(),
                })
            })
            .collect()
    }
}

/// Social network a profile link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Twitter,
    Linkedin,
    Mail,
    Facebook,
    Instagram,
    Youtube,
    Tiktok,
}

impl SocialPlatform {
    /// Classify a profile URL by host. `mailto:` links are [`SocialPlatform::Mail`].
    pub fn classify(url: &str) -> Option<Self> {
        let lower = url.trim().to_ascii_lowercase();
        if lower.starts_with("mailto:") {
            return Some(Self::Mail);
        }
        let host = url::Url::parse(&lower)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| lower.split('/').next().unwrap_or_default().to_string());
        let host = host.strip_prefix("www.").unwrap_or(&host);
        let matches = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));

        [
            ("github.com", Self::Github),
            ("twitter.com", Self::Twitter),
            ("x.com", Self::Twitter),
            ("linkedin.com", Self::Linkedin),
            ("facebook.com", Self::Facebook),
            ("instagram.com", Self::Instagram),
            ("youtube.com", Self::Youtube),
            ("youtu.be", Self::Youtube),
            ("tiktok.com", Self::Tiktok),
        ]
        .into_iter()
        .find(|(domain, _)| matches(domain))
        .map(|(_, platform)| platform)
    }
}

/// A classified profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Read a field, or its default when the value has the wrong shape.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Prices arrive as numbers, numeric strings, or `""`/`false` when unset.
fn price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|p| p.is_finite()))
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}
