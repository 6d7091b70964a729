//! Picker-driven selection toggling.

/// Add `candidate` to the selection, or remove it if already selected.
///
/// Membership is decided on uppercased names, so an entry typed in as
/// `tls_aes_128_gcm_sha256` is removed by toggling `TLS_AES_128_GCM_SHA256`.
/// Every stored entry matching the candidate is removed; all other entries
/// keep their exact spelling and order. A new candidate is appended as given.
///
/// Free-text input bypasses this function and is held to exact case by
/// [`validate`](crate::validate).
pub fn toggle<S: AsRef<str>>(selection: &[S], candidate: &str) -> Vec<String> {
    let needle = candidate.to_uppercase();
    let is_match = |entry: &str| entry.to_uppercase() == needle;

    let mut next: Vec<String> = selection
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|entry| !is_match(*entry))
        .map(str::to_owned)
        .collect();

    if next.len() == selection.len() {
        next.push(candidate.to_owned());
    }
    next
}
