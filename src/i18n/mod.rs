//! Internationalization (i18n) module for configkeys
//!
//! English is embedded in the binary. Other languages are loaded from
//! `<config_dir>/i18n/<lang>.toml` and fall back to English on any error.

use serde::Deserialize;
use std::sync::OnceLock;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === List ===
    pub no_vars_found: &'static str,
    pub no_vars_matching: &'static str,
    pub found_vars: &'static str,

    // === Set ===
    pub empty_name: &'static str,
    pub var_added: &'static str,
    pub var_updated: &'static str,
    pub new_sessions_hint: &'static str,
    pub temp_intro: &'static str,
    pub temp_persist_hint: &'static str,

    // === Remove ===
    pub var_removed: &'static str,
    pub removed_sessions_hint: &'static str,
    pub removed_from_session: &'static str,
    pub var_not_found: &'static str,
    pub no_config_file: &'static str,

    // === Backup ===
    pub backup_created: &'static str,
    pub backup_failed: &'static str,

    // === Info ===
    pub info_primary: &'static str,
    pub info_shell: &'static str,
    pub info_exists: &'static str,
    pub info_size: &'static str,
    pub info_bytes: &'static str,
    pub info_modified: &'static str,
    pub info_backup: &'static str,
    pub info_persisted: &'static str,
    pub info_candidates: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub none: &'static str,

    // === Reload Hint ===
    pub reload_hint: &'static str,
}

impl Messages {
    /// Localized "Yes"/"No"
    pub fn yes_no(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

/// Temporary structure for deserializing TOML messages
#[derive(Debug, Deserialize)]
struct MessagesToml {
    no_vars_found: String,
    no_vars_matching: String,
    found_vars: String,

    empty_name: String,
    var_added: String,
    var_updated: String,
    new_sessions_hint: String,
    temp_intro: String,
    temp_persist_hint: String,

    var_removed: String,
    removed_sessions_hint: String,
    removed_from_session: String,
    var_not_found: String,
    no_config_file: String,

    backup_created: String,
    backup_failed: String,

    info_primary: String,
    info_shell: String,
    info_exists: String,
    info_size: String,
    info_bytes: String,
    info_modified: String,
    info_backup: String,
    info_persisted: String,
    info_candidates: String,
    yes: String,
    no: String,
    none: String,

    reload_hint: String,
}

/// Helper macro to leak a string and get a &'static str
macro_rules! leak {
    ($s:expr) => {
        Box::leak($s.into_boxed_str())
    };
}

impl From<MessagesToml> for Messages {
    fn from(toml: MessagesToml) -> Self {
        Messages {
            no_vars_found: leak!(toml.no_vars_found),
            no_vars_matching: leak!(toml.no_vars_matching),
            found_vars: leak!(toml.found_vars),

            empty_name: leak!(toml.empty_name),
            var_added: leak!(toml.var_added),
            var_updated: leak!(toml.var_updated),
            new_sessions_hint: leak!(toml.new_sessions_hint),
            temp_intro: leak!(toml.temp_intro),
            temp_persist_hint: leak!(toml.temp_persist_hint),

            var_removed: leak!(toml.var_removed),
            removed_sessions_hint: leak!(toml.removed_sessions_hint),
            removed_from_session: leak!(toml.removed_from_session),
            var_not_found: leak!(toml.var_not_found),
            no_config_file: leak!(toml.no_config_file),

            backup_created: leak!(toml.backup_created),
            backup_failed: leak!(toml.backup_failed),

            info_primary: leak!(toml.info_primary),
            info_shell: leak!(toml.info_shell),
            info_exists: leak!(toml.info_exists),
            info_size: leak!(toml.info_size),
            info_bytes: leak!(toml.info_bytes),
            info_modified: leak!(toml.info_modified),
            info_backup: leak!(toml.info_backup),
            info_persisted: leak!(toml.info_persisted),
            info_candidates: leak!(toml.info_candidates),
            yes: leak!(toml.yes),
            no: leak!(toml.no),
            none: leak!(toml.none),

            reload_hint: leak!(toml.reload_hint),
        }
    }
}

/// Embedded English messages (fallback)
const EMBEDDED_EN: &str = include_str!("../../assets/i18n/en.toml");

/// Global messages instance
static MESSAGES: OnceLock<Messages> = OnceLock::new();

/// Load messages from external file or embedded English TOML
fn load_messages_from_toml(lang: &str) -> Messages {
    if lang != "en" {
        let lang_file = crate::model::Config::config_dir()
            .join("i18n")
            .join(format!("{}.toml", lang));

        match std::fs::read_to_string(&lang_file) {
            Ok(content) => match toml::from_str::<MessagesToml>(&content) {
                Ok(toml_messages) => return toml_messages.into(),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse language file {}: {}",
                        lang_file.display(),
                        e
                    );
                }
            },
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read language file {}: {}",
                    lang_file.display(),
                    e
                );
            }
        }
    }

    let toml_messages: MessagesToml =
        toml::from_str(EMBEDDED_EN).expect("Failed to parse embedded English messages");
    toml_messages.into()
}

/// Initialize and get the global messages instance
pub fn init_messages(lang: &str) -> &'static Messages {
    MESSAGES.get_or_init(|| load_messages_from_toml(lang))
}
