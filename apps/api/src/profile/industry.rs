//! Classifier — maps a free-text business name to an `Industry` and a free-text
//! location to a `LocationTier`.
//!
//! Both functions are total: any string (including empty or HTML-escaped text)
//! resolves to exactly one tag.

use serde::Serialize;

/// Industry inferred from business-name keywords.
///
/// Declaration order is the keyword precedence order: the first industry whose
/// keyword list matches wins, even when a later industry also matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Restaurant,
    Tech,
    Retail,
    Health,
    Beauty,
    Automotive,
    Legal,
    RealEstate,
    Education,
    Finance,
    Default,
}

impl Industry {
    /// Every keyword-bearing industry, in match precedence order.
    /// `Default` is intentionally absent: it is the residual.
    pub const KEYWORD_ORDER: [Industry; 10] = [
        Industry::Restaurant,
        Industry::Tech,
        Industry::Retail,
        Industry::Health,
        Industry::Beauty,
        Industry::Automotive,
        Industry::Legal,
        Industry::RealEstate,
        Industry::Education,
        Industry::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Restaurant => "restaurant",
            Industry::Tech => "tech",
            Industry::Retail => "retail",
            Industry::Health => "health",
            Industry::Beauty => "beauty",
            Industry::Automotive => "automotive",
            Industry::Legal => "legal",
            Industry::RealEstate => "real_estate",
            Industry::Education => "education",
            Industry::Finance => "finance",
            Industry::Default => "default",
        }
    }

    /// Human-readable label: underscores become spaces, each word capitalised.
    /// `real_estate` → `Real Estate`.
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lower-case keywords that select this industry.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Industry::Restaurant => &[
                "restaurant", "cafe", "bistro", "eatery", "diner", "grill", "pizza", "burger",
                "food", "kitchen", "bakery", "pastry", "cake", "coffee", "bar", "pub",
            ],
            Industry::Tech => &[
                "tech", "software", "digital", "app", "web", "computer", "cyber", "data", "cloud",
                "startup", "innovation",
            ],
            Industry::Retail => &[
                "store", "shop", "boutique", "market", "mall", "outlet", "fashion", "clothing",
                "apparel", "shoes", "accessories",
            ],
            Industry::Health => &[
                "clinic", "hospital", "medical", "doctor", "dentist", "pharmacy", "health",
                "wellness", "fitness", "gym", "spa",
            ],
            Industry::Beauty => &[
                "salon", "spa", "beauty", "nails", "hair", "skincare", "cosmetics", "barber",
            ],
            Industry::Automotive => &[
                "auto", "car", "garage", "mechanic", "dealership", "repair", "service", "parts",
            ],
            Industry::Legal => &["law", "legal", "attorney", "lawyer", "firm", "advocates"],
            Industry::RealEstate => &[
                "real estate", "property", "homes", "realtor", "broker", "mortgage",
            ],
            Industry::Education => &[
                "school", "academy", "institute", "university", "college", "training",
                "education",
            ],
            Industry::Finance => &[
                "bank", "financial", "investment", "insurance", "credit", "loan",
            ],
            Industry::Default => &[],
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Location tier — drives the review-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTier {
    Metro,
    International,
    SmallTown,
}

impl LocationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationTier::Metro => "metro",
            LocationTier::International => "international",
            LocationTier::SmallTown => "small_town",
        }
    }
}

const METRO_CITIES: &[&str] = &[
    "mumbai",
    "delhi",
    "bangalore",
    "chennai",
    "kolkata",
    "pune",
    "hyderabad",
    "new york",
    "london",
    "tokyo",
    "singapore",
    "dubai",
    "paris",
    "sydney",
];

const COUNTRY_TOKENS: &[&str] = &["usa", "uk", "uae", "singapore"];

/// First-match-wins keyword scan over `Industry::KEYWORD_ORDER`.
pub fn detect_industry(name: &str) -> Industry {
    let name_lower = name.to_lowercase();

    Industry::KEYWORD_ORDER
        .into_iter()
        .find(|industry| {
            industry
                .keywords()
                .iter()
                .any(|keyword| name_lower.contains(keyword))
        })
        .unwrap_or(Industry::Default)
}

/// Metro city match beats the international check; a comma alone is not
/// enough for `International`, a country token must also be present.
pub fn classify_location(location: &str) -> LocationTier {
    let location_lower = location.to_lowercase();

    if METRO_CITIES.iter().any(|city| location_lower.contains(city)) {
        LocationTier::Metro
    } else if location.contains(',')
        && COUNTRY_TOKENS
            .iter()
            .any(|country| location_lower.contains(country))
    {
        LocationTier::International
    } else {
        LocationTier::SmallTown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_name_is_default() {
        assert_eq!(detect_industry("Xyzzy Consulting"), Industry::Default);
    }

    #[test]
    fn test_empty_inputs_fall_to_residuals() {
        assert_eq!(detect_industry(""), Industry::Default);
        assert_eq!(classify_location(""), LocationTier::SmallTown);
    }

    #[test]
    fn test_tech_keyword() {
        assert_eq!(detect_industry("Tech Innovators Hub"), Industry::Tech);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(detect_industry("SUNRISE BAKERY"), Industry::Restaurant);
        assert_eq!(detect_industry("Downtown Dentist"), Industry::Health);
    }

    #[test]
    fn test_earlier_industry_wins_on_double_match() {
        // "cafe" → restaurant, "salon" → beauty
        assert_eq!(detect_industry("Salon Cafe"), Industry::Restaurant);
        // "spa" is listed under both health and beauty; health comes first
        assert_eq!(detect_industry("Lotus Spa"), Industry::Health);
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(detect_industry("Sunrise Real Estate"), Industry::RealEstate);
    }

    #[test]
    fn test_later_industries_reachable() {
        assert_eq!(detect_industry("Harbor Mechanic"), Industry::Automotive);
        assert_eq!(detect_industry("Smith Attorney"), Industry::Legal);
        assert_eq!(detect_industry("Lincoln Academy"), Industry::Education);
        assert_eq!(detect_industry("First Union Loan"), Industry::Finance);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Industry::Tech.label(), "Tech");
        assert_eq!(Industry::RealEstate.label(), "Real Estate");
        assert_eq!(Industry::Default.label(), "Default");
    }

    #[test]
    fn test_industry_serde_uses_snake_case_tag() {
        let json = serde_json::to_string(&Industry::RealEstate).unwrap();
        assert_eq!(json, r#""real_estate""#);
    }

    #[test]
    fn test_metro_wins_over_comma() {
        assert_eq!(classify_location("Mumbai, India"), LocationTier::Metro);
        assert_eq!(classify_location("Bangalore, India"), LocationTier::Metro);
    }

    #[test]
    fn test_comma_and_country_is_international() {
        assert_eq!(
            classify_location("Springfield, USA"),
            LocationTier::International
        );
    }

    #[test]
    fn test_comma_without_country_is_small_town() {
        assert_eq!(classify_location("Springfield, Illinois"), LocationTier::SmallTown);
    }

    #[test]
    fn test_country_without_comma_is_small_town() {
        assert_eq!(classify_location("Springfield USA"), LocationTier::SmallTown);
        assert_eq!(classify_location("Springfield"), LocationTier::SmallTown);
    }

    #[test]
    fn test_tier_tags() {
        assert_eq!(LocationTier::SmallTown.as_str(), "small_town");
        assert_eq!(LocationTier::Metro.as_str(), "metro");
    }
}
