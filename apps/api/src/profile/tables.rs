//! Static lookup tables for profile generation.
//!
//! Each table has a per-industry row for some industries and a default row.
//! The `*_row` functions return `None` where an industry has no row of its own;
//! the public accessors resolve that to the default row, so every lookup is total.

use crate::profile::industry::{Industry, LocationTier};

/// Inclusive numeric range used for uniform draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

const fn range<T>(min: T, max: T) -> Range<T> {
    Range { min, max }
}

/// How an industry's price tier is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceTier {
    /// Drawn uniformly from the listed tiers.
    OneOf(&'static [&'static str]),
    Fixed(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Headlines
// ────────────────────────────────────────────────────────────────────────────

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

const DEFAULT_HEADLINES: &[&str] = &[
    "Why {name} is {location}'s Best Kept Secret in 2025",
    "Discover What Makes {name} the Top Choice in {location}",
    "{name}: The {location} Business Everyone's Talking About",
    "How {name} Became {location}'s Most Trusted Local Business",
    "The Ultimate Guide to {name} - {location}'s Hidden Gem",
];

fn headline_row(industry: Industry) -> Option<&'static [&'static str]> {
    match industry {
        Industry::Restaurant => Some(&[
            "Why {name} is {location}'s Most Talked-About Dining Destination",
            "The Secret Recipe Behind {name}'s Success in {location}",
            "How {name} Became {location}'s Favorite Culinary Experience",
            "Discover What Makes {name} the Best Food Spot in {location}",
            "{name}: Where {location} Locals Go for Unforgettable Meals",
        ]),
        Industry::Tech => Some(&[
            "How {name} is Revolutionizing Technology in {location}",
            "Why {name} is {location}'s Leading Tech Innovation Hub",
            "The Digital Transformation Story of {name} in {location}",
            "{name}: Pioneering the Future of Tech in {location}",
            "Why Smart Businesses in {location} Choose {name}",
        ]),
        Industry::Retail => Some(&[
            "The Shopping Revolution: Why {name} Dominates {location}",
            "How {name} Became {location}'s Premier Shopping Destination",
            "Why Fashion-Forward {location} Residents Love {name}",
            "{name}: Redefining Retail Excellence in {location}",
            "The Style Story Behind {name}'s Success in {location}",
        ]),
        Industry::Health => Some(&[
            "Why {name} is {location}'s Most Trusted Healthcare Provider",
            "The Healing Touch: How {name} Transformed Healthcare in {location}",
            "{name}: Where {location} Families Trust Their Health",
            "Discover Why {name} is {location}'s Premier Medical Facility",
            "The Wellness Revolution Led by {name} in {location}",
        ]),
        Industry::Beauty => Some(&[
            "The Beauty Secret: Why {name} is {location}'s Top Choice",
            "How {name} Became {location}'s Most Glamorous Destination",
            "{name}: Where {location}'s Beauty Standards are Set",
            "The Transformation Story of {name} in {location}",
            "Why {location}'s Style Icons Choose {name}",
        ]),
        _ => None,
    }
}

pub fn headline_templates(industry: Industry) -> &'static [&'static str] {
    headline_row(industry).unwrap_or(DEFAULT_HEADLINES)
}

// ────────────────────────────────────────────────────────────────────────────
// Business hours
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_HOURS: &str = "Mon-Sat: 9:00 AM - 7:00 PM";

fn hours_row(industry: Industry) -> Option<&'static str> {
    match industry {
        Industry::Restaurant => Some("Mon-Sun: 11:00 AM - 11:00 PM"),
        Industry::Retail => Some("Mon-Sat: 10:00 AM - 9:00 PM, Sun: 12:00 PM - 7:00 PM"),
        Industry::Health => Some("Mon-Fri: 9:00 AM - 6:00 PM, Sat: 9:00 AM - 2:00 PM"),
        Industry::Beauty => Some("Tue-Sun: 10:00 AM - 8:00 PM, Closed Mondays"),
        Industry::Tech => Some("Mon-Fri: 9:00 AM - 6:00 PM"),
        _ => None,
    }
}

pub fn business_hours(industry: Industry) -> &'static str {
    hours_row(industry).unwrap_or(DEFAULT_HOURS)
}

// ────────────────────────────────────────────────────────────────────────────
// Numeric ranges
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_RATING: Range<f64> = range(3.5, 4.8);

fn rating_row(industry: Industry) -> Option<Range<f64>> {
    match industry {
        Industry::Restaurant => Some(range(3.8, 4.9)),
        Industry::Health => Some(range(4.2, 4.9)),
        Industry::Beauty => Some(range(4.0, 4.8)),
        Industry::Tech => Some(range(4.1, 4.7)),
        Industry::Retail => Some(range(3.9, 4.6)),
        _ => None,
    }
}

pub fn rating_range(industry: Industry) -> Range<f64> {
    rating_row(industry).unwrap_or(DEFAULT_RATING)
}

/// Every tier has its own row; no fallback needed.
pub fn review_range(tier: LocationTier) -> Range<u32> {
    match tier {
        LocationTier::Metro => range(200, 800),
        LocationTier::International => range(150, 600),
        LocationTier::SmallTown => range(30, 250),
    }
}

const DEFAULT_SOCIAL: Range<u32> = range(100, 1500);

fn social_row(industry: Industry) -> Option<Range<u32>> {
    match industry {
        Industry::Beauty => Some(range(500, 5000)),
        Industry::Restaurant => Some(range(300, 3000)),
        Industry::Retail => Some(range(800, 8000)),
        Industry::Tech => Some(range(200, 2000)),
        _ => None,
    }
}

/// Facebook follower range; Instagram and Twitter ranges derive from it.
pub fn social_range(industry: Industry) -> Range<u32> {
    social_row(industry).unwrap_or(DEFAULT_SOCIAL)
}

pub const ENGAGEMENT_RATE: Range<f64> = range(2.5, 8.5);
pub const SENTIMENT_SCORE: Range<f64> = range(7.5, 9.5);

// ────────────────────────────────────────────────────────────────────────────
// Keywords and tips
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_TRENDING: &[&str] = &[
    "local business",
    "customer service",
    "quality products",
    "trusted brand",
];

fn trending_row(industry: Industry) -> Option<&'static [&'static str]> {
    match industry {
        Industry::Restaurant => Some(&[
            "food delivery",
            "outdoor dining",
            "fresh ingredients",
            "chef specials",
        ]),
        Industry::Tech => Some(&[
            "AI solutions",
            "digital transformation",
            "cloud services",
            "cybersecurity",
        ]),
        Industry::Retail => Some(&[
            "sustainable fashion",
            "local brands",
            "personalized shopping",
            "eco-friendly",
        ]),
        Industry::Health => Some(&[
            "telemedicine",
            "preventive care",
            "wellness programs",
            "health screening",
        ]),
        Industry::Beauty => Some(&[
            "organic treatments",
            "anti-aging",
            "natural skincare",
            "beauty wellness",
        ]),
        _ => None,
    }
}

pub fn trending_seeds(industry: Industry) -> &'static [&'static str] {
    trending_row(industry).unwrap_or(DEFAULT_TRENDING)
}

/// Appended to every seed list before shuffling.
pub const CUSTOMER_REVIEWS_KEYWORD: &str = "customer reviews";
pub const MAX_TRENDING_KEYWORDS: usize = 4;

const DEFAULT_SEO_TIPS: &[&str] = &[
    "Claim and optimize your Google Business Profile",
    "Encourage customers to leave authentic reviews",
    "Use location-based keywords in your content",
    "Ensure your website is mobile-friendly and fast",
];

fn seo_tips_row(industry: Industry) -> Option<&'static [&'static str]> {
    match industry {
        Industry::Restaurant => Some(&[
            "Optimize for 'near me' searches with local keywords",
            "Showcase customer reviews and food photos",
            "Create content around seasonal menus and events",
            "Use schema markup for restaurant information",
        ]),
        Industry::Tech => Some(&[
            "Focus on industry-specific technical keywords",
            "Create thought leadership content and case studies",
            "Optimize for B2B search terms and solutions",
            "Build authority with expert interviews and insights",
        ]),
        Industry::Retail => Some(&[
            "Optimize product pages with detailed descriptions",
            "Use local inventory and 'in-stock' keywords",
            "Create seasonal and trend-based content",
            "Implement customer review schema markup",
        ]),
        _ => None,
    }
}

pub fn seo_tips(industry: Industry) -> &'static [&'static str] {
    seo_tips_row(industry).unwrap_or(DEFAULT_SEO_TIPS)
}

// ────────────────────────────────────────────────────────────────────────────
// Misc
// ────────────────────────────────────────────────────────────────────────────

pub const PEAK_HOURS: &[&str] = &[
    "Lunch: 12-2 PM, Dinner: 7-9 PM",
    "Morning: 9-11 AM, Evening: 5-7 PM",
    "Afternoon: 2-4 PM, Evening: 6-8 PM",
    "Weekend: 11 AM-3 PM",
];

const DEFAULT_PRICE: PriceTier = PriceTier::Fixed("$$");

fn price_row(industry: Industry) -> Option<PriceTier> {
    match industry {
        Industry::Restaurant => Some(PriceTier::OneOf(&["$", "$$", "$$$"])),
        Industry::Beauty => Some(PriceTier::OneOf(&["$$", "$$$"])),
        Industry::Health => Some(PriceTier::Fixed("$$$")),
        Industry::Tech => Some(PriceTier::Fixed("Enterprise")),
        Industry::Retail => Some(PriceTier::OneOf(&["$", "$$"])),
        _ => None,
    }
}

pub fn price_tier(industry: Industry) -> PriceTier {
    price_row(industry).unwrap_or(DEFAULT_PRICE)
}

/// Word lists and numeric ranges for one competitor slot.
#[derive(Debug, Clone, Copy)]
pub struct CompetitorSlot {
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub rating_difference: Range<f64>,
    pub review_difference: Range<i32>,
}

/// Exactly two competitor entries are produced, one per slot, in this order.
pub const COMPETITOR_SLOTS: [CompetitorSlot; 2] = [
    CompetitorSlot {
        adjectives: &["Elite", "Premium", "Royal", "Golden", "Superior"],
        nouns: &["Solutions", "Services", "Group", "Associates", "Enterprises"],
        rating_difference: range(-0.5, 0.8),
        review_difference: range(-150, 200),
    },
    CompetitorSlot {
        adjectives: &["Metro", "Central", "Prime", "First", "Top"],
        nouns: &["Hub", "Center", "Plaza", "Point", "Zone"],
        rating_difference: range(-0.3, 0.6),
        review_difference: range(-100, 150),
    },
];
