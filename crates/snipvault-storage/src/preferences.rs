use snipvault_core::keys;
use snipvault_core::models::theme::{AppState, Theme};

use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::state::save_state;

/// Read the persisted UI state. Anything missing or unrecognised means the
/// light theme.
pub fn load_app_state(store: &impl KeyValueStore) -> AppState {
    let theme = match store.get(keys::THEME) {
        Ok(Some(raw)) => parse_theme(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "unknown stored theme, using light");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, "theme unreadable, using light");
            Theme::default()
        }
    };
    AppState::new(theme)
}

pub fn save_app_state(
    store: &mut impl KeyValueStore,
    state: &AppState,
) -> Result<(), StorageError> {
    save_state(store, keys::THEME, state.theme().as_str())?;
    tracing::info!(theme = %state.theme(), "theme saved");
    Ok(())
}

// Accept both a JSON string and the bare name older clients wrote.
fn parse_theme(raw: &str) -> Option<Theme> {
    let trimmed = raw.trim();
    let name = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    name.parse().ok()
}
