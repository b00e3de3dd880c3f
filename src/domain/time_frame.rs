use {
    crate::utils::TimeUtils,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Chart window selectable from the time-frame bar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum TimeFrame {
    #[strum(to_string = "10s")]
    #[serde(rename = "10s")]
    #[value(name = "10s")]
    S10,
    #[strum(to_string = "30s")]
    #[serde(rename = "30s")]
    #[value(name = "30s")]
    S30,
    #[default]
    #[strum(to_string = "1m")]
    #[serde(rename = "1m")]
    #[value(name = "1m")]
    M1,
    #[strum(to_string = "5m")]
    #[serde(rename = "5m")]
    #[value(name = "5m")]
    M5,
    #[strum(to_string = "1h")]
    #[serde(rename = "1h")]
    #[value(name = "1h")]
    H1,
    #[strum(to_string = "1d")]
    #[serde(rename = "1d")]
    #[value(name = "1d")]
    D1,
    #[strum(to_string = "1w")]
    #[serde(rename = "1w")]
    #[value(name = "1w")]
    W1,
    #[strum(to_string = "1M")]
    #[serde(rename = "1M")]
    #[value(name = "1M")]
    Month1,
    #[strum(to_string = "1y")]
    #[serde(rename = "1y")]
    #[value(name = "1y")]
    Y1,
}

impl TimeFrame {
    /// Window length. Series never hold more points than this.
    pub const fn point_count(self) -> usize {
        match self {
            TimeFrame::S10 => 10,
            TimeFrame::S30 => 30,
            _ => 60,
        }
    }

    /// Spacing between consecutive points.
    /// Day and longer frames have no slower feed to sample from yet, so they
    /// fall back to one-second sampling.
    pub const fn sample_interval_ms(self) -> i64 {
        match self {
            TimeFrame::M5 => TimeUtils::MS_IN_5_S,
            TimeFrame::H1 => TimeUtils::MS_IN_MIN,
            _ => TimeUtils::MS_IN_S,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use strum::IntoEnumIterator;

    #[test]
    fn window_table() {
        let table: Vec<(String, usize, i64)> = TimeFrame::iter()
            .map(|tf| (tf.to_string(), tf.point_count(), tf.sample_interval_ms()))
            .collect();
        let expected = [
            ("10s", 10, 1_000),
            ("30s", 30, 1_000),
            ("1m", 60, 1_000),
            ("5m", 60, 5_000),
            ("1h", 60, 60_000),
            ("1d", 60, 1_000),
            ("1w", 60, 1_000),
            ("1M", 60, 1_000),
            ("1y", 60, 1_000),
        ];
        assert_eq!(table.len(), expected.len());
        for ((label, count, interval), (el, ec, ei)) in table.iter().zip(expected) {
            assert_eq!(label, el);
            assert_eq!(*count, ec, "{label}");
            assert_eq!(*interval, ei, "{label}");
        }
    }

    #[test]
    fn minute_and_month_are_distinct_on_the_cli() {
        assert_eq!(TimeFrame::from_str("1m", false), Ok(TimeFrame::M1));
        assert_eq!(TimeFrame::from_str("1M", false), Ok(TimeFrame::Month1));
    }

    #[test]
    fn serde_uses_short_labels() {
        let json = serde_json::to_string(&TimeFrame::M5).expect("serialize");
        assert_eq!(json, "\"5m\"");
        let back: TimeFrame = serde_json::from_str("\"1h\"").expect("deserialize");
        assert_eq!(back, TimeFrame::H1);
    }
}
