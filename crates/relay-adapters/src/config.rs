//! Provider configuration for the chat and speech adapters.

/// Environment variable for the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the OpenAI-compatible base URL.
pub const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable for the ElevenLabs API key.
pub const ELEVENLABS_API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Environment variable overriding the ElevenLabs base URL.
pub const ELEVENLABS_BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";

/// Environment variable overriding the ElevenLabs voice.
pub const ELEVENLABS_VOICE_ID_ENV: &str = "ELEVENLABS_VOICE_ID";

/// Environment variable overriding the ElevenLabs synthesis model.
pub const ELEVENLABS_MODEL_ID_ENV: &str = "ELEVENLABS_MODEL_ID";

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default ElevenLabs API base URL.
pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Default ElevenLabs voice ("Rachel").
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Default ElevenLabs synthesis model.
pub const DEFAULT_TTS_MODEL: &str = "eleven_multilingual_v2";

/// Default transcription model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Credentials and endpoints for every upstream provider.
///
/// Keys are optional: adapters built from a config without a key report
/// [`AdapterError::CredentialMissing`](crate::AdapterError::CredentialMissing)
/// on every call instead of failing at start-up.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    /// OpenAI API key.
    pub openai_api_key: Option<String>,
    /// OpenAI-compatible base URL (without trailing slash).
    pub openai_base_url: String,
    /// ElevenLabs API key.
    pub elevenlabs_api_key: Option<String>,
    /// ElevenLabs base URL (without trailing slash).
    pub elevenlabs_base_url: String,
    /// ElevenLabs voice identifier.
    pub voice_id: String,
    /// ElevenLabs model identifier.
    pub tts_model: String,
    /// Transcription model identifier.
    pub transcription_model: String,
}

impl ProviderConfig {
    /// Create a configuration with default endpoints and no credentials.
    pub fn new() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            elevenlabs_api_key: None,
            elevenlabs_base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
        }
    }

    /// Load the configuration from environment variables.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            openai_api_key: env_value(OPENAI_API_KEY_ENV),
            openai_base_url: env_value(OPENAI_BASE_URL_ENV)
                .map(|url| trim_base_url(&url))
                .unwrap_or(defaults.openai_base_url),
            elevenlabs_api_key: env_value(ELEVENLABS_API_KEY_ENV),
            elevenlabs_base_url: env_value(ELEVENLABS_BASE_URL_ENV)
                .map(|url| trim_base_url(&url))
                .unwrap_or(defaults.elevenlabs_base_url),
            voice_id: env_value(ELEVENLABS_VOICE_ID_ENV).unwrap_or(defaults.voice_id),
            tts_model: env_value(ELEVENLABS_MODEL_ID_ENV).unwrap_or(defaults.tts_model),
            transcription_model: defaults.transcription_model,
        }
    }

    /// Set the OpenAI API key.
    pub fn with_openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Set the OpenAI-compatible base URL.
    pub fn with_openai_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.openai_base_url = trim_base_url(url.as_ref());
        self
    }

    /// Set the ElevenLabs API key.
    pub fn with_elevenlabs_key(mut self, key: impl Into<String>) -> Self {
        self.elevenlabs_api_key = Some(key.into());
        self
    }

    /// Set the ElevenLabs base URL.
    pub fn with_elevenlabs_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.elevenlabs_base_url = trim_base_url(url.as_ref());
        self
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<set>"))
            .field("openai_base_url", &self.openai_base_url)
            .field(
                "elevenlabs_api_key",
                &self.elevenlabs_api_key.as_ref().map(|_| "<set>"),
            )
            .field("elevenlabs_base_url", &self.elevenlabs_base_url)
            .field("voice_id", &self.voice_id)
            .field("tts_model", &self.tts_model)
            .field("transcription_model", &self.transcription_model)
            .finish()
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
