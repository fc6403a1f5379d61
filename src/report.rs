use crate::backend::LookupError;
use crate::models::{
    ChannelInsights, ChannelReport, SentimentView, TopVideo, TopVideoView, VideoInsights,
    VideoReport,
};
use crate::reference::VideoId;
use crate::trend;
use chrono::NaiveDate;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

pub fn video_report(id: &VideoId, video: VideoInsights) -> VideoReport {
    VideoReport {
        video_id: id.to_string(),
        description_preview: description_preview(&video.description),
        sentiment: video.sentiment.and_then(sentiment_view),
        suggestions_html: video.suggestions.as_deref().map(render_markdown),
        title: video.title,
        thumbnail: video.thumbnail,
        description: video.description,
        tags: video.tags,
    }
}

pub fn channel_report(channel: ChannelInsights) -> Result<ChannelReport, LookupError> {
    let trend = match channel.graph_data.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => trend::compute(&trend::parse_graph_data(raw)?),
        _ => Vec::new(),
    };

    Ok(ChannelReport {
        engagement_label: channel.engagement_rate.and_then(engagement_label).map(str::to_string),
        top_videos: channel.top_videos.into_iter().map(top_video_view).collect(),
        channel_name: channel.channel_name,
        avatar: channel.avatar,
        subscribers: channel.subscribers,
        view_count: channel.view_count,
        video_count: channel.video_count,
        engagement_rate: channel.engagement_rate,
        trend,
    })
}

pub fn engagement_label(rate: f64) -> Option<&'static str> {
    if rate.is_nan() {
        None
    } else if rate >= 10.0 {
        Some("Excellent Engagement")
    } else if rate >= 5.0 {
        Some("Good Engagement")
    } else if rate >= 2.0 {
        Some("Average Engagement")
    } else {
        Some("Low Engagement")
    }
}

pub fn sentiment_view(value: u8) -> Option<SentimentView> {
    let (label, color) = match value {
        1 => ("Negative", "red"),
        2 => ("Weak Negative", "orange"),
        3 => ("Neutral", "yellow"),
        4 => ("Weak Positive", "lightgreen"),
        5 => ("Positive", "green"),
        _ => return None,
    };
    Some(SentimentView {
        value,
        label: label.to_string(),
        color: color.to_string(),
    })
}

/// Interactions per hundred views.
pub fn video_engagement(likes: u64, comments: u64, views: u64) -> Option<f64> {
    if views == 0 {
        return None;
    }
    Some(likes.saturating_add(comments) as f64 * 100.0 / views as f64)
}

pub fn description_preview(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

pub fn format_published(raw: &str) -> String {
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Renders backend suggestions as GitHub-flavored markdown. Embedded HTML is
/// shown as text and links or images with a script-capable scheme lose their
/// target.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

// Relative urls and http(s)/mailto pass; any other scheme is blanked.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let cleaned: String = url
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace() && !ch.is_control())
        .collect();
    let allowed = match cleaned.find([':', '/', '?', '#']) {
        Some(pos) if cleaned[pos..].starts_with(':') => matches!(
            cleaned[..pos].to_ascii_lowercase().as_str(),
            "http" | "https" | "mailto"
        ),
        _ => true,
    };
    if allowed { url } else { CowStr::Borrowed("") }
}

fn top_video_view(video: TopVideo) -> TopVideoView {
    TopVideoView {
        engagement: video_engagement(video.likes, video.comments, video.views),
        published: format_published(&video.published_date),
        title: video.title,
        thumbnail: video.thumbnail,
        likes: video.likes,
        comments: video.comments,
        views: video.views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::resolve;

    fn channel(graph_data: Option<&str>) -> ChannelInsights {
        ChannelInsights {
            channel_name: "Rustaceans".to_string(),
            avatar: "a.jpg".to_string(),
            subscribers: 100,
            view_count: 1000,
            video_count: 3,
            engagement_rate: Some(5.0),
            graph_data: graph_data.map(str::to_string),
            top_videos: vec![TopVideo {
                title: "hello".to_string(),
                thumbnail: "t.jpg".to_string(),
                likes: 8,
                comments: 2,
                views: 200,
                published_date: "2024-03-07".to_string(),
            }],
        }
    }

    #[test]
    fn engagement_labels_follow_thresholds() {
        assert_eq!(engagement_label(12.0), Some("Excellent Engagement"));
        assert_eq!(engagement_label(10.0), Some("Excellent Engagement"));
        assert_eq!(engagement_label(5.0), Some("Good Engagement"));
        assert_eq!(engagement_label(2.0), Some("Average Engagement"));
        assert_eq!(engagement_label(1.99), Some("Low Engagement"));
        assert_eq!(engagement_label(f64::NAN), None);
    }

    #[test]
    fn sentiment_maps_one_to_five() {
        let view = sentiment_view(1).unwrap();
        assert_eq!((view.label.as_str(), view.color.as_str()), ("Negative", "red"));
        let view = sentiment_view(4).unwrap();
        assert_eq!((view.label.as_str(), view.color.as_str()), ("Weak Positive", "lightgreen"));
        assert!(sentiment_view(0).is_none());
        assert!(sentiment_view(6).is_none());
    }

    #[test]
    fn video_engagement_handles_zero_views() {
        assert_eq!(video_engagement(8, 2, 200), Some(5.0));
        assert_eq!(video_engagement(8, 2, 0), None);
    }

    #[test]
    fn description_preview_cuts_on_characters() {
        let long = "é".repeat(250);
        let preview = description_preview(&long);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
        assert_eq!(description_preview("short"), "short...");
    }

    #[test]
    fn published_dates_are_humanized_when_possible() {
        assert_eq!(format_published("2024-03-07"), "Mar 7, 2024");
        assert_eq!(format_published("2024-03-07T10:00:00Z"), "Mar 7, 2024");
        assert_eq!(format_published("last week"), "last week");
    }

    #[test]
    fn markdown_escapes_embedded_html() {
        let rendered = render_markdown("**Title**\n\n<script>alert(1)</script>\n\n~~old~~");
        assert!(rendered.contains("<strong>Title</strong>"));
        assert!(rendered.contains("<del>old</del>"));
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_blanks_script_link_targets() {
        let rendered =
            render_markdown("[click](javascript:alert(document.cookie)) ![i](javascript:x)");
        assert!(!rendered.contains("javascript:"));
        assert!(rendered.contains(r#"<a href="">click</a>"#));
        assert!(rendered.contains(r#"<img src="" alt="i" />"#));

        let rendered = render_markdown("[a](JaVaScRiPt:x) [b](data:text/html,hi) [c](vbscript:x)");
        assert!(!rendered.to_ascii_lowercase().contains("script:"));
        assert!(!rendered.contains("data:"));
    }

    #[test]
    fn markdown_keeps_web_and_relative_links() {
        let rendered = render_markdown(
            "[site](https://example.com/a?b=1) [mail](mailto:me@example.com) [rel](/channel) [frag](#tips)",
        );
        assert!(rendered.contains(r#"href="https://example.com/a?b=1""#));
        assert!(rendered.contains(r#"href="mailto:me@example.com""#));
        assert!(rendered.contains(r#"href="/channel""#));
        assert!(rendered.contains(r##"href="#tips""##));
    }

    #[test]
    fn channel_report_derives_trend_and_engagement() {
        let graph = r#"[{"year":2021,"total_views":1500,"avg_engagement_rate":15.0},{"year":2020,"total_views":1000,"avg_engagement_rate":10.0}]"#;
        let report = channel_report(channel(Some(graph))).unwrap();
        assert_eq!(report.engagement_label.as_deref(), Some("Good Engagement"));
        assert_eq!(report.trend.len(), 2);
        assert_eq!(report.trend[0].year, 2020);
        assert_eq!(report.trend[1].engagement_rate_change, Some(50.0));
        assert_eq!(report.top_videos[0].engagement, Some(5.0));
        assert_eq!(report.top_videos[0].published, "Mar 7, 2024");
    }

    #[test]
    fn channel_report_without_graph_data_has_empty_trend() {
        assert!(channel_report(channel(None)).unwrap().trend.is_empty());
        assert!(channel_report(channel(Some("  "))).unwrap().trend.is_empty());
    }

    #[test]
    fn channel_report_rejects_malformed_graph_data() {
        assert!(matches!(
            channel_report(channel(Some("{oops"))),
            Err(LookupError::Decode(_))
        ));
    }

    #[test]
    fn video_report_carries_canonical_id() {
        let id = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s").unwrap();
        let report = video_report(
            &id,
            VideoInsights {
                title: "t".to_string(),
                thumbnail: String::new(),
                description: "d".to_string(),
                tags: vec!["x".to_string()],
                sentiment: Some(5),
                suggestions: None,
            },
        );
        assert_eq!(report.video_id, "dQw4w9WgXcQ");
        assert_eq!(report.sentiment.unwrap().label, "Positive");
        assert!(report.suggestions_html.is_none());
    }
}
