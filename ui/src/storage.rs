//! Persistence of the last successful analysis across reloads.
//!
//! One localStorage key holding the JSON-serialized record. Error records
//! are never written here, so a transport failure cannot clobber the last
//! good report. Writes are best-effort; storage being unavailable
//! (private mode, quota) only costs the reload convenience.

use payloads::AnalysisResult;
use web_sys::Storage;

const LAST_RESULT_KEY: &str = "resultadoAnalise";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted last-good record, if any.
///
/// Anything that fails to parse as a non-error analysis record is
/// discarded; there is no schema migration for old stored data.
pub fn load_last_result() -> Option<AnalysisResult> {
    let raw = local_storage()?.get_item(LAST_RESULT_KEY).ok().flatten()?;
    match serde_json::from_str::<AnalysisResult>(&raw) {
        Ok(result) if !result.is_error() => Some(result),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("discarding unparseable stored result: {err}");
            None
        }
    }
}

/// Persist a record, overwriting any previous entry. Error records are
/// silently skipped.
pub fn store_last_result(result: &AnalysisResult) {
    if result.is_error() {
        return;
    }
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(result) {
        let _ = storage.set_item(LAST_RESULT_KEY, &json);
    }
}
