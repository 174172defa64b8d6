//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Aura Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-2.5-pro"
# system_instruction = "You are Aura, ..."
# Environment variables searched, in order, for the API key.
# A .env file in the working directory is read at startup.
# api_key_env = ["API_KEY", "GEMINI_API_KEY"]
# max_output_tokens = 2048   # 64-65536
# temperature = 0.7          # 0.0-2.0
# greeting = "Aura OS is online. All systems nominal. How can I assist you?"

[tools]
# default_scheme = "https"       # http | https
# max_tool_calls_per_turn = 8    # 1-32, caps calls requested by follow-up replies
# open_in_browser = true         # false logs URLs instead of opening them

[logging]
# level = "INFO"                 # DEBUG | INFO | WARNING | ERROR
"##
}
