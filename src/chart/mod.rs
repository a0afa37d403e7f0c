//! Running balance chart rendering.
//!
//! This module turns a balance series into:
//! - **Chart options**: an ECharts line chart configuration built with `charming`
//! - **Chart page**: a standalone HTML document that initialises the chart
//!
//! Point colours and tooltip text are computed up front from each
//! [BalancePoint](crate::BalancePoint), so the chart configuration only
//! carries plain data.

mod options;
mod page;
mod style;
mod tooltip;

pub use options::balance_chart;
pub use page::chart_page;
pub use style::PointStyle;
pub use tooltip::TooltipContent;

use crate::format::CurrencyFormat;

/// The ECharts build loaded by [chart_page] unless another is configured.
pub const DEFAULT_ECHARTS_SRC: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Presentation settings for the balance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    /// An optional title shown above the chart.
    pub title: Option<String>,
    /// How balances and amounts are written in tooltips and axis labels.
    pub currency: CurrencyFormat,
    /// The height of the chart container in pixels.
    pub height_px: u32,
    /// The URL or file path of the ECharts script used by [chart_page].
    pub echarts_src: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: None,
            currency: CurrencyFormat::default(),
            height_px: 400,
            echarts_src: DEFAULT_ECHARTS_SRC.to_owned(),
        }
    }
}
