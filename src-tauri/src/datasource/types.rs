use serde::{Deserialize, Serialize};

/// Sentiment classification attached to a conversation or an aggregate.
///
/// Labels the analysis service adds later land in `Unknown` instead of
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    #[serde(other)]
    Unknown,
}

/// Per-conversation sentiment as produced by the analysis service.
/// The label is not cross-checked against the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
    /// 0.0 - 1.0
    pub confidence: f64,
}

/// One collected customer conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub transcript: String,
    /// Length of the call in seconds
    pub duration: u32,
    /// ISO-8601 timestamp
    pub created_at: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationsPayload {
    pub conversations: Vec<Conversation>,
}

/// One value per sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerSentiment<T> {
    pub positive: T,
    pub neutral: T,
    pub negative: T,
}

/// Counts and percentages exactly as reported by the API.
/// Percentages are expected to sum to ~100 but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub counts: PerSentiment<u32>,
    pub percentages: PerSentiment<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    pub classification: SentimentLabel,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInsights {
    pub what_customers_love: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

/// Aggregate sentiment overview for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewPayload {
    pub total_conversations: u32,
    pub sentiment_breakdown: SentimentBreakdown,
    pub overall_sentiment: OverallSentiment,
    pub key_insights: KeyInsights,
}
