//! Link out to the third-party chart page.

use eframe::egui::{Context, OpenUrl};

use crate::config::ChartEmbedConfig;

pub fn chart_url(config: &ChartEmbedConfig) -> String {
    format!(
        "{}?symbol={}&theme={}&interval={}&timezone={}",
        config.base_url,
        urlencoding::encode(config.symbol),
        urlencoding::encode(config.theme),
        urlencoding::encode(config.interval),
        urlencoding::encode(config.timezone),
    )
}

/// One-shot open request. A click queues it; the next frame opens the page once.
#[derive(Debug, Default)]
pub struct ExternalChartLink {
    pending: Option<String>,
}

impl ExternalChartLink {
    pub fn request(&mut self, config: &ChartEmbedConfig) {
        self.pending = Some(chart_url(config));
    }

    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn open_pending(&mut self, ctx: &Context) {
        if let Some(url) = self.take_pending() {
            log::info!("Opening external chart: {}", url);
            ctx.open_url(OpenUrl::new_tab(url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHART_EMBED;

    #[test]
    fn url_encodes_symbol_and_timezone() {
        let url = chart_url(&CHART_EMBED);
        assert_eq!(
            url,
            "https://www.tradingview.com/chart/?symbol=NSE%3ANIFTY50&theme=dark&interval=1&timezone=Asia%2FKolkata"
        );
    }

    #[test]
    fn opens_once_per_request() {
        let mut link = ExternalChartLink::default();
        assert!(link.take_pending().is_none());
        link.request(&CHART_EMBED);
        assert!(link.take_pending().is_some());
        assert!(link.take_pending().is_none());
    }
}
