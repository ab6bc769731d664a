//! HTTP helper for the backend trends proxy.
//!
//! One endpoint, one verb: `GET <base>?query=<term>&date=<range>`. Callers
//! get a `Result` with a human-readable message instead of a panic so fetch
//! failures degrade to an error line in the UI without crashing the app.

use gloo_net::http::Request;
use trends_data::envelope::ResponseEnvelope;
use trends_data::query::{query_pairs, TRENDS_ENDPOINT};

/// Fetch interest-over-time data for `term` over `date_range`.
///
/// Any failure (network, non-2xx status, malformed body) comes back as a
/// message string; the distinction only matters for the console log.
/// No retries, no timeout beyond the browser's own, no cancellation.
pub async fn fetch_interest_over_time(
    term: &str,
    date_range: &str,
) -> Result<ResponseEnvelope, String> {
    let pairs = query_pairs(term, date_range);
    let resp = Request::get(TRENDS_ENDPOINT)
        .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !resp.ok() {
        return Err(format!("proxy returned status {}", resp.status()));
    }

    resp.json::<ResponseEnvelope>()
        .await
        .map_err(|e| format!("malformed response body: {e}"))
}
