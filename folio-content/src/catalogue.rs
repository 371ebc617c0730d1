//! Typed translation catalogues.
//!
//! Both languages ship a complete content tree embedded at compile time. The
//! trees share one statically-shaped schema; a key present in one language but
//! missing in the other fails deserialization instead of silently rendering a
//! gap. List-valued sections must also agree on length and, for projects, on
//! identifiers - the UI indexes content by id across languages. Those
//! invariants are enforced by `tests/catalogue_schema.rs`.
//!
//! Numerals and dates arrive pre-localized per tree (Persian digits in the
//! Persian file); no transliteration happens at runtime.

use crate::lang::Lang;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const EN_JSON: &str = include_str!("../content/en.json");
const FA_JSON: &str = include_str!("../content/fa.json");

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("catalogue for '{lang}' is malformed: {source}")]
    Malformed {
        lang: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalogue {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub projects: Projects,
    pub skills: Skills,
    pub contact: Contact,
    pub footer: Footer,
    pub not_found: NotFound,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nav {
    pub home: String,
    pub about: String,
    pub projects: String,
    pub skills: String,
    pub contact: String,
    pub brand_first: String,
    pub brand_last: String,
    /// Label on the language toggle: names the language a click switches to.
    pub toggle_label: String,
    pub skip_to_content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    pub contact: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub achievements: String,
    pub achievements_list: Vec<Achievement>,
    pub experience: String,
    pub experience_list: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projects {
    pub title: String,
    pub subtitle: String,
    pub view_live: String,
    pub view_video: String,
    pub view_details: String,
    pub empty: String,
    pub filters: ProjectFilters,
    pub list: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFilters {
    pub all: String,
    pub fintech: String,
    pub ecommerce: String,
    pub corporate: String,
    pub healthcare: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Stable identifier; the same id names the same project in both trees.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub category: Category,
    pub category_label: String,
}

/// Language-independent project category. Serialized identically in both
/// trees; the localized display text lives in `category_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fintech,
    Ecommerce,
    Corporate,
    Healthcare,
    Dashboard,
    Education,
    RealEstate,
}

impl Category {
    /// The filter group a category belongs to. Narrow categories fold into
    /// the corporate filter, matching the gallery's five filter chips.
    #[must_use]
    pub const fn filter_group(self) -> Self {
        match self {
            Self::Fintech => Self::Fintech,
            Self::Ecommerce => Self::Ecommerce,
            Self::Healthcare => Self::Healthcare,
            Self::Corporate | Self::Dashboard | Self::Education | Self::RealEstate => {
                Self::Corporate
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub title: String,
    pub subtitle: String,
    pub categories: SkillCategories,
    pub other: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategories {
    pub frontend: String,
    pub frameworks: String,
    pub styling: String,
    pub tools: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub collaborate: String,
    pub description: String,
    pub form: ContactForm,
    pub info: ContactInfo,
    pub location_label: String,
    pub location_value: String,
    pub copied: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub send: String,
    pub sending: String,
    pub sent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub copyright: String,
    pub made_with: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFound {
    pub title: String,
    pub body: String,
    pub back_home: String,
}

/// Parse the embedded tree for a language. Exposed so the schema tests can
/// report a defect as a failing assertion rather than a panic.
///
/// # Errors
/// Returns [`CatalogueError::Malformed`] when the embedded JSON does not match
/// the schema above.
pub fn parse_catalogue(lang: Lang) -> Result<Catalogue, CatalogueError> {
    let raw = match lang {
        Lang::En => EN_JSON,
        Lang::Fa => FA_JSON,
    };
    serde_json::from_str(raw).map_err(|source| CatalogueError::Malformed {
        lang: lang.code(),
        source,
    })
}

static EN: Lazy<Catalogue> =
    Lazy::new(|| parse_catalogue(Lang::En).expect("embedded en catalogue must match the schema"));
static FA: Lazy<Catalogue> =
    Lazy::new(|| parse_catalogue(Lang::Fa).expect("embedded fa catalogue must match the schema"));

/// The complete content tree for a language. Total for every [`Lang`]; there
/// is no partial or missing-key state at runtime.
#[must_use]
pub fn catalogue(lang: Lang) -> &'static Catalogue {
    match lang {
        Lang::En => &EN,
        Lang::Fa => &FA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_trees_parse_into_the_shared_schema() {
        assert!(parse_catalogue(Lang::En).is_ok());
        assert!(parse_catalogue(Lang::Fa).is_ok());
    }

    #[test]
    fn catalogue_is_total_and_stable() {
        let first = catalogue(Lang::Fa);
        let second = catalogue(Lang::Fa);
        assert!(std::ptr::eq(first, second));
        assert_eq!(catalogue(Lang::En).nav.home, "Home");
        assert_eq!(catalogue(Lang::Fa).nav.home, "خانه");
    }

    #[test]
    fn narrow_categories_fold_into_corporate() {
        assert_eq!(Category::Dashboard.filter_group(), Category::Corporate);
        assert_eq!(Category::Education.filter_group(), Category::Corporate);
        assert_eq!(Category::RealEstate.filter_group(), Category::Corporate);
        assert_eq!(Category::Fintech.filter_group(), Category::Fintech);
    }
}
