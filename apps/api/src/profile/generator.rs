//! Profile Generator — assembles a `ProfileBundle` from classifier output,
//! the static lookup tables, and independent uniform random draws.
//!
//! Every function takes the random source as a parameter. Handlers pass
//! `rand::thread_rng()`; tests pass a seeded `StdRng` and assert ranges only.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::profile::industry::{classify_location, detect_industry, Industry, LocationTier};
use crate::profile::models::{CompetitorInsight, ProfileBundle, SocialMetrics};
use crate::profile::tables::{self, PriceTier, Range, LOCATION_PLACEHOLDER, NAME_PLACEHOLDER};

/// Internal failure while assembling a bundle. Never surfaced with a partial result.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("lookup table '{0}' has no entries to choose from")]
    EmptyTable(&'static str),
}

/// Classifies `(name, location)` and generates the full bundle in one pass.
pub fn build_profile<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    location: &str,
) -> Result<ProfileBundle, GenerationError> {
    let industry = detect_industry(name);
    let tier = classify_location(location);
    debug!(
        industry = industry.as_str(),
        tier = tier.as_str(),
        "Generating business profile"
    );
    generate_profile(rng, name, location, industry, tier)
}

pub fn generate_profile<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    location: &str,
    industry: Industry,
    tier: LocationTier,
) -> Result<ProfileBundle, GenerationError> {
    let rating = draw_decimal(rng, tables::rating_range(industry));
    let reviews = draw_int(rng, tables::review_range(tier));
    let headline = select_headline(rng, name, location, industry)?;

    Ok(ProfileBundle {
        rating,
        reviews,
        headline,
        industry: industry.label(),
        business_hours: tables::business_hours(industry).to_string(),
        phone: phone_number(rng, location),
        website: website_for(name),
        social_metrics: social_metrics(rng, industry),
        competitor_insights: competitor_insights(rng)?,
        trending_keywords: trending_keywords(rng, industry, location),
        seo_tips: tables::seo_tips(industry)
            .iter()
            .map(|tip| tip.to_string())
            .collect(),
        sentiment_score: draw_decimal(rng, tables::SENTIMENT_SCORE),
        peak_hours: choose(rng, tables::PEAK_HOURS, "peak_hours")?.to_string(),
        price_range: price_range(rng, industry)?,
    })
}

/// Headline reroll: re-detects the industry from `name` and picks a fresh
/// template. Carries no memory of earlier bundles.
pub fn regenerate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    location: &str,
) -> Result<String, GenerationError> {
    select_headline(rng, name, location, detect_industry(name))
}

fn select_headline<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    location: &str,
    industry: Industry,
) -> Result<String, GenerationError> {
    let template = choose(rng, tables::headline_templates(industry), "headlines")?;
    Ok(fill_template(template, name, location))
}

/// Substitutes every `{name}`, then every `{location}` in the result, so a
/// `{location}` carried in by the name is filled as well.
pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    template
        .replace(NAME_PLACEHOLDER, name)
        .replace(LOCATION_PLACEHOLDER, location)
}

/// Country-flavoured phone number. Indian and US locations get their national
/// formats; anything else gets a generic `+CC-XXX-XXXX`.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R, location: &str) -> String {
    let location_lower = location.to_lowercase();

    if location_lower.contains("mumbai") || location_lower.contains("india") {
        format!(
            "+91-{}-{}",
            rng.gen_range(70000..=99999),
            rng.gen_range(10000..=99999)
        )
    } else if location_lower.contains("new york") || location_lower.contains("usa") {
        format!(
            "+1-{}-{}-{}",
            rng.gen_range(200..=999),
            rng.gen_range(100..=999),
            rng.gen_range(1000..=9999)
        )
    } else {
        format!(
            "+{}-{}-{}",
            rng.gen_range(1..=999),
            rng.gen_range(100..=999),
            rng.gen_range(1000..=9999)
        )
    }
}

/// `www.` + lower-cased name with whitespace removed and `&` spelled out + `.com`.
pub fn website_for(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("www.{}.com", slug.replace('&', "and"))
}

fn social_metrics<R: Rng + ?Sized>(rng: &mut R, industry: Industry) -> SocialMetrics {
    let base = tables::social_range(industry);

    SocialMetrics {
        facebook_followers: draw_int(rng, base),
        instagram_followers: draw_int(
            rng,
            Range {
                min: base.min * 2,
                max: base.max * 2,
            },
        ),
        twitter_followers: draw_int(
            rng,
            Range {
                min: base.min / 2,
                max: base.max / 2,
            },
        ),
        engagement_rate: draw_decimal(rng, tables::ENGAGEMENT_RATE),
    }
}

fn competitor_insights<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<Vec<CompetitorInsight>, GenerationError> {
    tables::COMPETITOR_SLOTS
        .iter()
        .map(|slot| -> Result<CompetitorInsight, GenerationError> {
            let adjective = choose(rng, slot.adjectives, "competitor_adjectives")?;
            let noun = choose(rng, slot.nouns, "competitor_nouns")?;
            Ok(CompetitorInsight {
                competitor_name: format!("{adjective} {noun}"),
                rating_difference: draw_decimal(rng, slot.rating_difference),
                review_difference: rng
                    .gen_range(slot.review_difference.min..=slot.review_difference.max),
            })
        })
        .collect()
}

/// Industry seeds plus `"{location} business"` and `"customer reviews"`,
/// shuffled, truncated to at most four.
fn trending_keywords<R: Rng + ?Sized>(
    rng: &mut R,
    industry: Industry,
    location: &str,
) -> Vec<String> {
    let mut keywords: Vec<String> = tables::trending_seeds(industry)
        .iter()
        .map(|k| k.to_string())
        .collect();
    keywords.push(format!("{location} business"));
    keywords.push(tables::CUSTOMER_REVIEWS_KEYWORD.to_string());

    keywords.shuffle(rng);
    keywords.truncate(tables::MAX_TRENDING_KEYWORDS);
    keywords
}

fn price_range<R: Rng + ?Sized>(rng: &mut R, industry: Industry) -> Result<String, GenerationError> {
    match tables::price_tier(industry) {
        PriceTier::Fixed(tier) => Ok(tier.to_string()),
        PriceTier::OneOf(tiers) => Ok(choose(rng, tiers, "price_tiers")?.to_string()),
    }
}

fn choose<'a, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [&'static str],
    table: &'static str,
) -> Result<&'a str, GenerationError> {
    items
        .choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyTable(table))
}

fn draw_int<R: Rng + ?Sized>(rng: &mut R, range: Range<u32>) -> u32 {
    rng.gen_range(range.min..=range.max)
}

/// Uniform draw rounded to one decimal place. Bounds are themselves one-decimal
/// values, so rounding never leaves the range.
fn draw_decimal<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    round1(rng.gen_range(range.min..=range.max))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
