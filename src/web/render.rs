// Route table to HTML rendering
//
// Interface names and metrics come from the kernel and are written into the
// page as-is, without HTML escaping.

use super::PageTemplate;
use crate::error::{AppError, AppResult};
use crate::routes::address::to_dotted_decimal;
use crate::routes::{flags, RouteRecord};

const HEADER_ROW: &str = "<tr><th>Interface</th><th>Destination</th><th>Mask</th><th>Metric</th><th>Gateway</th><th>Flags</th></tr>";

/// Render routes as an HTML table, one row per route in the order given.
/// Any undecodable field fails the whole table.
pub fn render(routes: &[RouteRecord], trailing_flag_separator: bool) -> AppResult<String> {
    let mut html = String::from("<table>\n");
    html.push_str(HEADER_ROW);
    html.push('\n');

    for route in routes {
        let flags = flags::decode(&route.flags_hex)?;
        let destination = to_dotted_decimal(&route.destination_hex)?;
        let mask = to_dotted_decimal(&route.mask_hex)?;
        let gateway = to_dotted_decimal(&route.gateway_hex)?;

        let row_open = if flags.is_gateway_route() {
            "<tr class=\"gateway\">"
        } else {
            "<tr>"
        };

        html.push_str(&format!(
            "{}<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row_open,
            route.interface,
            destination,
            mask,
            route.metric,
            gateway,
            flags.display(trailing_flag_separator),
        ));
    }

    html.push_str("</table>");
    Ok(html)
}

/// Full document: heading, host caption, and the route table.
pub fn render_page(
    template: &PageTemplate,
    routes: &[RouteRecord],
    trailing_flag_separator: bool,
) -> AppResult<String> {
    let table = render(routes, trailing_flag_separator)?;
    Ok(template.wrap(&format!(
        "<h1>{}</h1>\n{}\n{}",
        template.title,
        caption(),
        table
    )))
}

/// Document served instead of the table when the page cannot be built
pub fn render_error_page(template: &PageTemplate, error: &AppError) -> String {
    template.wrap(&format!(
        "<h1>Routing table unavailable</h1>\n{}\n<p>{}</p>\n<pre>{}</pre>",
        caption(),
        error.user_message(),
        error
    ))
}

fn caption() -> String {
    format!(
        "<p>Host <b>{}</b> at {}</p>",
        get_hostname(),
        chrono::Utc::now().to_rfc3339()
    )
}

fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
