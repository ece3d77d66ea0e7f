//! Switch name classification
//!
//! Switch names carry their fabric tier as a substring: "t1" for
//! distribution switches, "t2" for access switches (e.g.
//! "nz-kiwi-t1-sw1"). Each classifier scans independently, so a name
//! containing both markers lands in both groups. That mirrors the
//! orchestrator's naming contract rather than inferring an intent the
//! data does not state.

/// Switch names containing the "t1" marker, sorted ascending.
pub fn find_t1_switches<S: AsRef<str>>(switch_names: &[S]) -> Vec<String> {
    find_tier(switch_names, "t1")
}

/// Switch names containing the "t2" marker, sorted ascending.
pub fn find_t2_switches<S: AsRef<str>>(switch_names: &[S]) -> Vec<String> {
    find_tier(switch_names, "t2")
}

fn find_tier<S: AsRef<str>>(switch_names: &[S], marker: &str) -> Vec<String> {
    let mut result: Vec<String> = switch_names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| name.contains(marker))
        .map(str::to_owned)
        .collect();
    result.sort();
    result
}
