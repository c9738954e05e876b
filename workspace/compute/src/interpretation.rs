/// Qualitative reading of an average GDP-growth prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    /// Average strictly above 5%
    Strong,
    /// Average strictly above 0%
    Moderate,
    /// Zero or negative growth
    Challenging,
}

impl Outlook {
    pub fn from_average(average: f64) -> Self {
        if average > 5.0 {
            Outlook::Strong
        } else if average > 0.0 {
            Outlook::Moderate
        } else {
            Outlook::Challenging
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outlook::Strong => "Strong economic growth expected!",
            Outlook::Moderate => "Moderate economic growth expected.",
            Outlook::Challenging => "Economic challenges predicted.",
        }
    }

    /// DaisyUI alert modifier for the banner.
    pub fn alert_class(&self) -> &'static str {
        match self {
            Outlook::Strong => "alert-success",
            Outlook::Moderate => "alert-info",
            Outlook::Challenging => "alert-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Outlook::Strong => "fas fa-rocket",
            Outlook::Moderate => "fas fa-chart-line",
            Outlook::Challenging => "fas fa-exclamation-triangle",
        }
    }
}
