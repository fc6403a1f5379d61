use crate::session::Session;
use chrono::{Datelike, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Channel,
    Video,
}

pub fn render_page(page: Page, session: &Session, sign_out_url: &str) -> String {
    let (title, body, script) = match page {
        Page::Home => ("SocioYT", HOME_BODY, ""),
        Page::Channel => ("Channel Statistics · SocioYT", CHANNEL_BODY, CHANNEL_SCRIPT),
        Page::Video => ("Video Statistics · SocioYT", VIDEO_BODY, VIDEO_SCRIPT),
    };
    let script = if script.is_empty() {
        String::new()
    } else {
        format!("<script>\n{LOOKUP_SCRIPT}\n{script}\n</script>")
    };

    SHELL_HTML
        .replace("{{TITLE}}", title)
        .replace("{{YEAR}}", &Local::now().year().to_string())
        .replace("{{BODY}}", body)
        .replace("{{SCRIPT}}", &script)
        .replace("{{SIGN_OUT}}", &escape_html(sign_out_url))
        .replace("{{USER}}", &escape_html(&session.display_name))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f4;
      --bg-2: #bfe8dc;
      --ink: #1f2a2e;
      --accent: #0cdda4;
      --accent-2: #2f4858;
      --danger: #d64545;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f4ef 60%, #f4faf8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      flex-direction: column;
    }

    .site-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 12px;
      padding: 18px 32px;
      background: var(--card);
      box-shadow: 0 8px 24px rgba(47, 72, 88, 0.08);
    }

    .site-header a {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 600;
    }

    .brand {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.6rem;
    }

    .nav {
      display: flex;
      align-items: center;
      gap: 18px;
    }

    .greeting {
      color: #5f5c57;
    }

    main {
      flex: 1;
      width: min(960px, 100%);
      margin: 0 auto;
      padding: 32px 18px 48px;
      display: grid;
      gap: 28px;
      align-content: start;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .panel {
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 18px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 22px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
      color: inherit;
      text-decoration: none;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    a.card:hover {
      transform: translateY(-3px);
      box-shadow: 0 12px 28px rgba(47, 72, 88, 0.14);
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.lookup {
      display: flex;
      gap: 12px;
    }

    form.lookup input {
      flex: 1;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button.link {
      background: transparent;
      color: var(--accent-2);
      padding: 4px 8px;
    }

    .error {
      color: var(--danger);
      margin: 0;
    }

    .loader {
      width: 50px;
      height: 50px;
      margin: 24px auto;
      border-radius: 50%;
      border: 5px solid rgba(0, 191, 255, 0.2);
      border-top-color: #00bfff;
      animation: spin 900ms linear infinite;
    }

    .empty {
      text-align: center;
      color: #8b857d;
    }

    .profile {
      display: flex;
      align-items: center;
      gap: 20px;
    }

    .profile img {
      width: 120px;
      height: 120px;
      border-radius: 50%;
      object-fit: cover;
    }

    .thumbnail {
      width: 100%;
      border-radius: 18px;
    }

    .tier {
      color: var(--accent);
      font-weight: 600;
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      padding: 0;
      list-style: none;
    }

    .tags li {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 6px 12px;
    }

    .sentiment-bar {
      height: 18px;
      border-radius: 999px;
    }

    .top-videos {
      display: grid;
      gap: 16px;
      padding-left: 20px;
    }

    .top-videos li {
      display: flex;
      gap: 16px;
      align-items: flex-start;
    }

    .top-videos img {
      width: 180px;
      border-radius: 12px;
    }

    .facts {
      display: flex;
      flex-wrap: wrap;
      gap: 6px 16px;
      color: #5f5c57;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart-card svg {
      width: 100%;
      height: auto;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.4);
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-label {
      font-size: 12px;
      fill: #8b857d;
    }

    .site-footer {
      text-align: center;
      padding: 20px;
      color: #8b857d;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }
  </style>
</head>
<body>
  <header class="site-header">
    <a class="brand" href="/">SocioYT</a>
    <nav class="nav">
      <span class="greeting">Hi, {{USER}}</span>
      <a href="/channel">Channel</a>
      <a href="/video">Video</a>
      <a href="{{SIGN_OUT}}">Sign out</a>
    </nav>
  </header>
  <main>
{{BODY}}
  </main>
  <footer class="site-footer">&copy; {{YEAR}} SocioYT</footer>
{{SCRIPT}}
</body>
</html>
"#;

const HOME_BODY: &str = r#"    <section class="panel">
      <h1>Unlock Insights with Our YouTube Content Analyzer</h1>
      <p class="subtitle">Analyze trends, track performance, and optimize your content strategy with actionable insights.</p>
    </section>
    <section class="cards">
      <a class="card" href="/channel">
        <h2>Channel Analysis</h2>
        <p class="subtitle">Provide us with a channel ID and we'll provide you with its engagement rate and statistics.</p>
      </a>
      <a class="card" href="/video">
        <h2>Video Analysis</h2>
        <p class="subtitle">Provide us with a video ID and we'll provide you with its engagement predictions and tips for improvement.</p>
      </a>
    </section>"#;

const CHANNEL_BODY: &str = r#"    <section class="panel">
      <h1>Channel Statistics</h1>
      <form class="lookup" id="lookup-form">
        <input type="text" id="lookup-input" name="channel_input" placeholder="Enter Channel Id, @handle or username" autocomplete="off" />
        <button type="submit">Go</button>
      </form>
      <p class="error" id="lookup-error" hidden></p>
    </section>
    <div class="loader" id="loader" hidden aria-label="loading"></div>
    <section class="panel empty" id="empty">
      <h2>Nothing to Show</h2>
    </section>
    <section class="panel" id="output" hidden></section>"#;

const VIDEO_BODY: &str = r#"    <section class="panel">
      <h1>Video Statistics</h1>
      <form class="lookup" id="lookup-form">
        <input type="text" id="lookup-input" name="video" placeholder="Enter Video Id or URL" autocomplete="off" />
        <button type="submit">Go</button>
      </form>
      <p class="error" id="lookup-error" hidden></p>
    </section>
    <div class="loader" id="loader" hidden aria-label="loading"></div>
    <section class="panel empty" id="empty">
      <h2>Nothing to Show</h2>
    </section>
    <section class="panel" id="output" hidden></section>"#;

// Shared by both lookup pages. A newer lookup aborts the one in flight so a
// slow response can never replace a later one.
const LOOKUP_SCRIPT: &str = r#"    const form = document.getElementById('lookup-form');
    const input = document.getElementById('lookup-input');
    const errorEl = document.getElementById('lookup-error');
    const loaderEl = document.getElementById('loader');
    const emptyEl = document.getElementById('empty');
    const outputEl = document.getElementById('output');
    let inflight = null;
    let sequence = 0;

    const escapeHtml = (value) =>
      String(value ?? '').replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const formatCount = (value) =>
      typeof value === 'number' ? value.toLocaleString() : '--';

    const formatPercent = (value, decimals = 2) =>
      typeof value === 'number' && Number.isFinite(value) ? `${value.toFixed(decimals)}%` : '--';

    const showState = (state, message) => {
      loaderEl.hidden = state !== 'loading';
      emptyEl.hidden = state !== 'empty';
      outputEl.hidden = state !== 'data';
      errorEl.hidden = !message;
      errorEl.textContent = message || '';
    };

    const runLookup = async (url, render) => {
      if (inflight) {
        inflight.abort();
      }
      const controller = new AbortController();
      inflight = controller;
      const ticket = ++sequence;
      showState('loading');
      try {
        const res = await fetch(url, { signal: controller.signal });
        if (!res.ok) {
          const msg = res.status === 400 ? await res.text() : 'Lookup failed, please try again.';
          throw new Error(msg);
        }
        const data = await res.json();
        if (ticket !== sequence) {
          return;
        }
        outputEl.innerHTML = render(data);
        showState('data');
        wireOutput(data);
      } catch (err) {
        if (err.name === 'AbortError' || ticket !== sequence) {
          return;
        }
        showState('empty', err.message);
      } finally {
        if (inflight === controller) {
          inflight = null;
        }
      }
    };

    let wireOutput = () => {};

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const value = input.value.trim();
      if (!value) {
        showState('empty', input.dataset.invalid);
        return;
      }
      runLookup(lookupUrl(value), renderReport);
    });"#;

const CHANNEL_SCRIPT: &str = r#"    input.dataset.invalid = 'Please enter a channel ID, handle or username';
    const lookupUrl = (value) => `/api/channel?channel_input=${encodeURIComponent(value)}`;

    const renderLineChart = (chartEl, points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const width = 600;
      const height = 260;
      const paddingX = 52;
      const paddingY = 34;
      const top = 24;
      const values = points.map((point) => point.value);
      let min = Math.min(...values, 0);
      let max = Math.max(...values, 0);
      if (min === max) {
        min -= 1;
        max += 1;
      }
      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;
      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');
      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = min + (range * i) / 4;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(value) + 4}" text-anchor="end">${Math.round(value)}%</text>`;
      }
      const labels = points
        .map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`)
        .join('');
      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4"><title>${point.value.toFixed(2)}%</title></circle>`)
        .join('');
      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `
        ${grid}
        <line class="chart-axis" x1="${paddingX}" y1="${y(0)}" x2="${width - paddingX}" y2="${y(0)}" />
        <path class="chart-line" d="${path}" />
        ${circles}
        ${labels}
      `;
    };

    const renderReport = (data) => {
      const videos = data.top_videos
        .map((video) => `
          <li>
            <img src="${escapeHtml(video.thumbnail)}" alt="thumbnail" />
            <div>
              <h3>${escapeHtml(video.title)}</h3>
              <div class="facts">
                <span>Likes: ${formatCount(video.likes)}</span>
                <span>Comments: ${formatCount(video.comments)}</span>
                <span>Views: ${formatCount(video.views)}</span>
                <span>Published on: ${escapeHtml(video.published)}</span>
                <span>Engagement: ${formatPercent(video.engagement)}</span>
              </div>
            </div>
          </li>`)
        .join('');
      const chart = data.trend.length
        ? `<h2>Yearly Change</h2>
          <div class="tabs" role="tablist">
            <button class="tab active" type="button" data-metric="engagement_rate_change">Engagement rate</button>
            <button class="tab" type="button" data-metric="views_change">Views</button>
          </div>
          <div class="chart-card"><svg id="trend-chart" role="img"></svg></div>`
        : '';
      return `
        <div class="profile">
          <img src="${escapeHtml(data.avatar)}" alt="channel logo" />
          <h1>${escapeHtml(data.channel_name)}</h1>
        </div>
        <h2>Statistics</h2>
        <div class="cards">
          <div class="card stat"><span class="label">Subscribers</span><span class="value">${formatCount(data.subscribers)}</span></div>
          <div class="card stat"><span class="label">View Count</span><span class="value">${formatCount(data.view_count)}</span></div>
          <div class="card stat"><span class="label">Video Count</span><span class="value">${formatCount(data.video_count)}</span></div>
        </div>
        <h2>Engagement Rate</h2>
        <div>
          <div class="stat"><span class="value">${formatPercent(data.engagement_rate)}</span></div>
          <p class="tier">${escapeHtml(data.engagement_label || '')}</p>
        </div>
        ${chart}
        <h2>Top 10 Videos based on views</h2>
        <ol class="top-videos">${videos}</ol>`;
    };

    wireOutput = (data) => {
      const chartEl = document.getElementById('trend-chart');
      if (!chartEl) {
        return;
      }
      const tabs = Array.from(outputEl.querySelectorAll('.tab'));
      const draw = (metric) => {
        tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.metric === metric));
        const points = data.trend
          .filter((point) => typeof point[metric] === 'number')
          .map((point) => ({ label: point.year, value: point[metric] }));
        renderLineChart(chartEl, points);
      };
      tabs.forEach((tab) => tab.addEventListener('click', () => draw(tab.dataset.metric)));
      draw('engagement_rate_change');
    };"#;

const VIDEO_SCRIPT: &str = r#"    input.dataset.invalid = 'Please enter a valid video ID or URL';
    const lookupUrl = (value) => `/api/video?video=${encodeURIComponent(value)}`;

    const renderReport = (data) => {
      const tags = data.tags.map((tag) => `<li>#${escapeHtml(tag)}</li>`).join('');
      const sentiment = data.sentiment
        ? `<div class="sentiment-bar" style="background-color: ${escapeHtml(data.sentiment.color)}"></div>
          <h2>${escapeHtml(data.sentiment.label)}</h2>`
        : '<h2>Nothing</h2>';
      const suggestions = data.suggestions_html || '<p>No suggestions available</p>';
      return `
        <img class="thumbnail" src="${escapeHtml(data.thumbnail)}" alt="thumbnail" />
        <h1>${escapeHtml(data.title)}</h1>
        <h2>Description</h2>
        <div>
          <p id="description">${escapeHtml(data.description_preview)}</p>
          <button class="link" type="button" id="description-toggle">Read more</button>
        </div>
        <h2>Tags</h2>
        <ul class="tags">${tags}</ul>
        <h2>Sentiment</h2>
        ${sentiment}
        <h2>Suggestions for improvement</h2>
        <div class="suggestions">${suggestions}</div>`;
    };

    wireOutput = (data) => {
      const descriptionEl = document.getElementById('description');
      const toggle = document.getElementById('description-toggle');
      let expanded = false;
      toggle.addEventListener('click', () => {
        expanded = !expanded;
        descriptionEl.textContent = expanded ? data.description : data.description_preview;
        toggle.textContent = expanded ? 'Read less' : 'Read more';
      });
    };"#;

pub const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Page not found · SocioYT</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      font-family: "Trebuchet MS", sans-serif;
      background: #f4faf8;
      color: #1f2a2e;
      text-align: center;
    }

    h1 {
      font-size: 5rem;
      margin: 0;
    }

    a {
      display: inline-block;
      margin-top: 16px;
      padding: 12px 22px;
      border-radius: 999px;
      background: #0cdda4;
      color: white;
      text-decoration: none;
    }
  </style>
</head>
<body>
  <section>
    <h1>404</h1>
    <h3>Looks like you're lost</h3>
    <p>The page you are looking for is not available.</p>
    <a href="/">Go to Home</a>
  </section>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> Session {
        Session {
            display_name: name.to_string(),
        }
    }

    #[test]
    fn pages_greet_the_user_escaped() {
        let html = render_page(Page::Home, &session("<Ada>"), "/sign-out");
        assert!(html.contains("Hi, &lt;Ada&gt;"));
        assert!(!html.contains("<Ada>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn lookup_pages_carry_their_scripts() {
        let channel = render_page(Page::Channel, &session("Ada"), "/sign-out");
        assert!(channel.contains("/api/channel?channel_input="));
        assert!(channel.contains("Channel Statistics"));

        let video = render_page(Page::Video, &session("Ada"), "/sign-out");
        assert!(video.contains("/api/video?video="));
        assert!(video.contains("Nothing to Show"));

        let home = render_page(Page::Home, &session("Ada"), "/sign-out");
        assert!(!home.contains("<script>"));
    }

    #[test]
    fn header_links_to_sign_out() {
        let html = render_page(
            Page::Video,
            &session("Ada"),
            "https://id.example.com/logout?next=/&a=\"b\"",
        );
        assert!(html.contains(
            r#"<a href="https://id.example.com/logout?next=/&amp;a=&quot;b&quot;">Sign out</a>"#
        ));
    }
}
