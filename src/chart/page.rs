//! A standalone HTML page that displays the balance chart.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    chart::{ChartSettings, options::balance_chart},
    series::BalancePoint,
};

/// The HTML element ID of the chart container.
const CHART_ID: &str = "balance-chart";

/// Renders a complete HTML document containing the balance chart.
///
/// The chart fills the page width and is `settings.height_px` tall. It is
/// resized with the window and switches to the dark theme when the system
/// prefers a dark colour scheme. If `points` is empty, a message is shown
/// instead of an empty chart.
pub fn chart_page(points: &[BalancePoint], settings: &ChartSettings) -> Markup {
    let page_title = settings.title.as_deref().unwrap_or("Balance");

    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) }

                @if !points.is_empty() {
                    script src=(settings.echarts_src) {}
                    script { (chart_script(points, settings)) }
                }
            }

            body
            {
                @if points.is_empty() {
                    p id="no-data" { "No transactions yet" }
                } @else {
                    div
                        id=(CHART_ID)
                        style=(format!("height: {}px; width: 100%; position: relative;", settings.height_px))
                    {}
                }
            }
        }
    }
}

/// Generates the JavaScript that initialises the chart once the page has
/// loaded.
fn chart_script(points: &[BalancePoint], settings: &ChartSettings) -> PreEscaped<String> {
    // "</" would close the script element early if a category or title
    // contained "</script>".
    let options = balance_chart(points, settings)
        .to_string()
        .replace("</", "<\\/");

    PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{CHART_ID}");
            const chart = echarts.init(chartDom);
            const option = {options};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#
    ))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use super::chart_page;
    use crate::{chart::ChartSettings, series::build_balance_series, transaction::Transaction};

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn render(incomes: &[Transaction], expenses: &[Transaction], settings: &ChartSettings) -> Html {
        let points = build_balance_series(incomes, expenses);
        Html::parse_document(&chart_page(&points, settings).into_string())
    }

    #[test]
    fn renders_chart_container_with_height() {
        let incomes = [Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary")];
        let settings = ChartSettings {
            height_px: 320,
            ..Default::default()
        };

        let html = render(&incomes, &[], &settings);

        assert_valid_html(&html);
        let selector = Selector::parse("#balance-chart").unwrap();
        let container = html
            .select(&selector)
            .next()
            .expect("Could not find chart container");
        let style = container.value().attr("style").unwrap_or_default();
        assert!(style.contains("height: 320px"), "Got style: {style}");
        assert!(style.contains("width: 100%"), "Got style: {style}");
    }

    #[test]
    fn loads_configured_echarts_script() {
        let incomes = [Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary")];
        let settings = ChartSettings {
            echarts_src: "/static/echarts.min.js".to_owned(),
            ..Default::default()
        };

        let html = render(&incomes, &[], &settings);

        let selector = Selector::parse("script[src]").unwrap();
        let sources: Vec<_> = html
            .select(&selector)
            .filter_map(|script| script.value().attr("src"))
            .collect();
        assert_eq!(sources, vec!["/static/echarts.min.js"]);
    }

    #[test]
    fn inline_script_initialises_chart() {
        let incomes = [Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary")];
        let expenses = [Transaction::expense(date!(2024 - 01 - 02), 40.0, "Food")];

        let html = render(&incomes, &expenses, &ChartSettings::default());

        let selector = Selector::parse("script:not([src])").unwrap();
        let script: String = html
            .select(&selector)
            .flat_map(|script| script.text())
            .collect();
        assert!(script.contains("echarts.init"), "Got script: {script}");
        assert!(script.contains("02/01/2024"), "Got script: {script}");
    }

    #[test]
    fn category_cannot_close_script_element() {
        let expenses = [Transaction::expense(
            date!(2024 - 01 - 02),
            40.0,
            "</script><p id=\"injected\">",
        )];

        let html = render(&[], &expenses, &ChartSettings::default());

        assert_valid_html(&html);
        let selector = Selector::parse("#injected").unwrap();
        assert!(html.select(&selector).next().is_none());
    }

    #[test]
    fn empty_series_shows_message_instead_of_chart() {
        let html = render(&[], &[], &ChartSettings::default());

        assert_valid_html(&html);
        let message = Selector::parse("#no-data").unwrap();
        let chart = Selector::parse("#balance-chart").unwrap();
        let scripts = Selector::parse("script").unwrap();
        let text: String = html
            .select(&message)
            .next()
            .expect("Could not find no data message")
            .text()
            .collect();
        assert_eq!(text, "No transactions yet");
        assert!(html.select(&chart).next().is_none());
        assert!(html.select(&scripts).next().is_none());
    }

    #[test]
    fn uses_title_for_document_title() {
        let incomes = [Transaction::income(date!(2024 - 01 - 01), 100.0, "Salary")];
        let settings = ChartSettings {
            title: Some("My savings".to_owned()),
            ..Default::default()
        };

        let html = render(&incomes, &[], &settings);

        let selector = Selector::parse("title").unwrap();
        let title: String = html.select(&selector).next().unwrap().text().collect();
        assert_eq!(title, "My savings");
    }
}
