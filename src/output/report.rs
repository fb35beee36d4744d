use crate::state::CrawlState;

/// Which report, if any, to print after a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Statistics only
    #[default]
    Summary,
    /// One remembered URL per line
    Urls,
    /// One remembered link per line, as `src -> dst`
    Links,
}

impl OutputMode {
    /// Picks the mode from the two mutually exclusive CLI switches
    pub fn from_flags(show_urls: bool, show_links: bool) -> Self {
        match (show_urls, show_links) {
            (true, _) => Self::Urls,
            (false, true) => Self::Links,
            (false, false) => Self::Summary,
        }
    }
}

/// Newline-joined list of remembered URLs
pub fn render_urls(state: &CrawlState) -> String {
    state
        .remembered_urls()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Newline-joined list of remembered links
pub fn render_links(state: &CrawlState) -> String {
    state
        .remembered_links()
        .iter()
        .map(|link| link.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the report for `mode`, or `None` in summary mode
pub fn render_report(state: &CrawlState, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Summary => None,
        OutputMode::Urls => Some(render_urls(state)),
        OutputMode::Links => Some(render_links(state)),
    }
}
