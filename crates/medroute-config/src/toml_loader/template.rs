//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# medroute Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[oracle]
# provider = "gemini"
# model = "gemini-2.5-flash"
# temperature = 0.2          # 0.0-2.0
# max_output_tokens = 4096   # 1-65536
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# api_key_env = "GEMINI_API_KEY"   # API_KEY is also checked
# connect_timeout_secs = 10  # 1-600
# request_timeout_secs = 120 # 1-600
# enable_search = true
# system_prompt = "..."      # replaces the built-in coordinator instruction

[coordinator]
# followup_delay_ms = 1500   # 0-60000
# show_welcome = true

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
