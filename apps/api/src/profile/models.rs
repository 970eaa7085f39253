use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SocialMetrics {
    pub facebook_followers: u32,
    pub instagram_followers: u32,
    pub twitter_followers: u32,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorInsight {
    pub competitor_name: String,
    pub rating_difference: f64,
    pub review_difference: i32,
}

/// Full synthetic profile returned by `POST /api/business-data`.
/// Serialised as a flat JSON object; nested only for social metrics and competitors.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBundle {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
    /// Human-readable industry label, e.g. "Real Estate".
    pub industry: String,
    pub business_hours: String,
    pub phone: String,
    pub website: String,
    pub social_metrics: SocialMetrics,
    pub competitor_insights: Vec<CompetitorInsight>,
    pub trending_keywords: Vec<String>,
    pub seo_tips: Vec<String>,
    pub sentiment_score: f64,
    pub peak_hours: String,
    pub price_range: String,
}
