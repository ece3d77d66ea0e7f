//! Snapshot fetching and endpoint URL construction
//!
//! One GET per category. Failures are logged and swallowed: the affected
//! category simply never populates, and nothing downstream of the fetch
//! runs for it. No retries, no app-level timeout beyond the transport's.

use netscope_core::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::Url;

use crate::source::SnapshotSource;

/// Characters escaped in query parameter values. Colons stay literal so
/// MAC addresses appear verbatim in the request line, matching what the
/// orchestrator's query handler expects.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+');

/// URL for a plain category snapshot, e.g. `<base>/switch_state`.
pub fn endpoint_url(base: &Url, category: &str) -> Result<Url> {
    base.join(category).map_err(|e| Error::Url(e.to_string()))
}

/// URL for a host-path query between two MAC addresses.
///
/// The full addresses ride in the query string: `host_path?eth_src=<src>&eth_dst=<dst>`.
pub fn host_path_url(base: &Url, eth_src: &str, eth_dst: &str) -> Result<Url> {
    let mut url = base
        .join("host_path")
        .map_err(|e| Error::Url(e.to_string()))?;
    url.set_query(Some(&format!(
        "eth_src={}&eth_dst={}",
        utf8_percent_encode(eth_src, QUERY_VALUE),
        utf8_percent_encode(eth_dst, QUERY_VALUE)
    )));
    Ok(url)
}

/// Category name for a host-path query, derived from the last two
/// characters of each address: `host_path_<src>_<dst>`.
///
/// Addresses are not validated; a malformed address yields a malformed
/// category, which the store happily keys on.
pub fn host_path_category(eth_src: &str, eth_dst: &str) -> String {
    format!("host_path_{}_{}", last_two(eth_src), last_two(eth_dst))
}

fn last_two(s: &str) -> &str {
    let mut chars = s.char_indices().rev();
    chars.next();
    match chars.next() {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// GET `url` and parse the body as JSON.
///
/// Returns `None` on any failure (network, non-2xx, non-JSON body) after
/// logging it; the caller skips the store update and completion entirely.
pub async fn fetch_snapshot<S: SnapshotSource>(
    source: &S,
    category: &str,
    url: &str,
) -> Option<Value> {
    debug!("Fetching {category} from {url}");
    match source.get_json(url).await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Snapshot fetch for {category} failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FakeSource;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://localhost:9019/").unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        let url = endpoint_url(&base(), "switch_state").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9019/switch_state");
    }

    #[test]
    fn test_host_path_url_carries_full_addresses() {
        let url = host_path_url(&base(), "9a:02:57:1e:8f:01", "9a:02:57:1e:8f:02").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9019/host_path?eth_src=9a:02:57:1e:8f:01&eth_dst=9a:02:57:1e:8f:02"
        );
    }

    #[test]
    fn test_host_path_category_from_last_octets() {
        assert_eq!(
            host_path_category("aa:bb:cc:dd:ee:01", "aa:bb:cc:dd:ee:02"),
            "host_path_01_02"
        );
    }

    #[test]
    fn test_host_path_category_malformed_input() {
        // Garbage in, garbage category out: no validation by contract.
        assert_eq!(host_path_category("x", ""), "host_path_x_");
        assert_eq!(host_path_category("zz", "q"), "host_path_zz_q");
    }

    #[tokio::test]
    async fn test_fetch_snapshot_success() {
        let source = FakeSource::new().respond("http://x/cpn_state", json!({"up": 3}));
        let value = fetch_snapshot(&source, "cpn_state", "http://x/cpn_state").await;
        assert_eq!(value, Some(json!({"up": 3})));
    }

    #[tokio::test]
    async fn test_fetch_snapshot_failure_is_none() {
        let source = FakeSource::new();
        let value = fetch_snapshot(&source, "cpn_state", "http://x/cpn_state").await;
        assert_eq!(value, None);
    }
}
