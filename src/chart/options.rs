//! The ECharts configuration for the running balance chart.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ColorStop, ItemStyle,
        JsFunction, LineStyle, NameLocation, TextStyle, Tooltip, Trigger,
    },
    series::Line,
};
use serde_json::Value;

use crate::{
    chart::{
        ChartSettings,
        style::{
            AREA_BOTTOM_COLOR, AREA_TOP_COLOR, LINE_COLOR, POINT_BORDER_COLOR, PointStyle,
            TOOLTIP_BACKGROUND_COLOR, TOOLTIP_BORDER_COLOR, TOOLTIP_TEXT_COLOR,
        },
        tooltip::TooltipContent,
    },
    format::{CurrencyFormat, format_date_label},
    series::BalancePoint,
};

/// Creates the line chart of the running balance.
///
/// The chart is made of parallel arrays indexed by point: date labels on the
/// x-axis, balances in the series, a colour per point derived from its
/// [PointStyle], and the tooltip for each point looked up by its index.
///
/// # Arguments
/// * `points` - The balance series, in chronological order
/// * `settings` - The title and currency format to use
pub fn balance_chart(points: &[BalancePoint], settings: &ChartSettings) -> Chart {
    let labels: Vec<String> = points
        .iter()
        .map(|point| format_date_label(point.date))
        .collect();

    let data: Vec<DataPointItem> = points
        .iter()
        .map(|point| {
            DataPointItem::new(point.balance)
                .item_style(ItemStyle::new().color(PointStyle::from(point.direction).color()))
        })
        .collect();

    let tooltips: Vec<TooltipContent> = points
        .iter()
        .map(|point| TooltipContent::for_point(point, &settings.currency))
        .collect();

    let mut chart = Chart::new();

    if let Some(title) = &settings.title {
        chart = chart.title(Title::new().text(title.as_str()).left("center"));
    }

    chart
        .tooltip(balance_tooltip(&tooltips))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Date")
                .name_location(NameLocation::Middle)
                .name_gap(50.0)
                .name_text_style(axis_name_style())
                .axis_label(AxisLabel::new().rotate(45.0))
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Balance")
                .name_location(NameLocation::Middle)
                .name_gap(70.0)
                .name_text_style(axis_name_style())
                .scale(false)
                .axis_label(AxisLabel::new().formatter(currency_formatter(&settings.currency))),
        )
        .series(
            Line::new()
                .name("Balance")
                .smooth(0.1)
                .symbol_size(8.0)
                .line_style(LineStyle::new().color(LINE_COLOR).width(2.0))
                .item_style(
                    ItemStyle::new()
                        .border_color(POINT_BORDER_COLOR)
                        .border_width(2.0),
                )
                .area_style(AreaStyle::new().color(Color::LinearGradient {
                    x: 0.0,
                    y: 0.0,
                    x2: 0.0,
                    y2: 1.0,
                    color_stops: vec![
                        ColorStop::new(0, AREA_TOP_COLOR),
                        ColorStop::new(1, AREA_BOTTOM_COLOR),
                    ],
                }))
                .data(data),
        )
}

fn axis_name_style() -> TextStyle {
    TextStyle::new().font_size(14.0).font_weight("bold")
}

/// Formats axis values the same way tooltips format money, e.g. "₹-60.00".
fn currency_formatter(currency: &CurrencyFormat) -> JsFunction {
    let symbol = Value::from(currency.symbol());

    JsFunction::new_with_args(
        "value",
        &format!(
            "const symbol = {symbol};
            const rounded = Math.round(value * 100) / 100;
            return symbol + (rounded === 0 ? 0 : rounded).toFixed(2);"
        ),
    )
}

/// Creates the dark tooltip that shows the precomputed details of the
/// hovered point.
fn balance_tooltip(tooltips: &[TooltipContent]) -> Tooltip {
    let details = Value::Array(tooltips.iter().map(TooltipContent::to_json).collect());

    let formatter = JsFunction::new_with_args(
        "params",
        &format!(
            "const details = {details};
            const point = Array.isArray(params) ? params[0] : params;
            const detail = point ? details[point.dataIndex] : undefined;
            if (!detail) {{
                return '';
            }}
            const text = [detail.title]
                .concat(detail.lines)
                .map(echarts.format.encodeHTML)
                .join('<br/>');
            return '<div style=\"color: {TOOLTIP_TEXT_COLOR};\">' + text + '</div>';"
        ),
    );

    Tooltip::new()
        .trigger(Trigger::Axis)
        .formatter(formatter)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
        .background_color(TOOLTIP_BACKGROUND_COLOR)
        .border_color(TOOLTIP_BORDER_COLOR)
        .border_width(1.0)
}
