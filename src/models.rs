use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: i32,
    #[serde(deserialize_with = "null_as_nan")]
    pub avg_engagement_rate: f64,
    pub total_views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSnapshot {
    pub year: i32,
    pub avg_engagement_rate: f64,
    pub total_views: u64,
    pub engagement_rate_change: Option<f64>,
    pub views_change: Option<f64>,
}

/// Body of `GET <backend>/video/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInsights {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Thumbnails", default)]
    pub thumbnail: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "Sentiment", default)]
    pub sentiment: Option<u8>,
    #[serde(rename = "Suggestions", default, deserialize_with = "text_or_none")]
    pub suggestions: Option<String>,
}

/// Body of `GET <backend>/channel/lookup`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInsights {
    #[serde(rename = "ChannelName")]
    pub channel_name: String,
    #[serde(rename = "pfp", default)]
    pub avatar: String,
    #[serde(rename = "Subscribers")]
    pub subscribers: u64,
    #[serde(rename = "ViewCount")]
    pub view_count: u64,
    #[serde(rename = "VideoCount")]
    pub video_count: u64,
    #[serde(rename = "EngagementRate", default)]
    pub engagement_rate: Option<f64>,
    #[serde(rename = "GraphData", default)]
    pub graph_data: Option<String>,
    #[serde(rename = "TopVideos", default)]
    pub top_videos: Vec<TopVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopVideo {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "thumbnails", default)]
    pub thumbnail: String,
    #[serde(rename = "Likes", default)]
    pub likes: u64,
    #[serde(rename = "Comments", default)]
    pub comments: u64,
    #[serde(rename = "Views", default)]
    pub views: u64,
    #[serde(rename = "PublishedDate", default)]
    pub published_date: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelQuery {
    #[serde(default)]
    pub channel_input: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    #[serde(default)]
    pub video: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentView {
    pub value: u8,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoReport {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub description_preview: String,
    pub tags: Vec<String>,
    pub sentiment: Option<SentimentView>,
    pub suggestions_html: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopVideoView {
    pub title: String,
    pub thumbnail: String,
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
    pub published: String,
    pub engagement: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel_name: String,
    pub avatar: String,
    pub subscribers: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub engagement_rate: Option<f64>,
    pub engagement_label: Option<String>,
    pub trend: Vec<AnnotatedSnapshot>,
    pub top_videos: Vec<TopVideoView>,
}

fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

// The backend sends an error object here when suggestion generation fails.
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}
