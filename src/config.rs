use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub interview: InterviewConfig,
    pub audio: AudioConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct InterviewConfig {
    /// Target job title the interviewer evaluates for
    pub role: String,
    /// Opening questions, asked in order starting with the first
    pub questions: Vec<String>,
    /// Overall interview bound in seconds (enforced client-side)
    pub duration_secs: u64,
    /// How often buffered audio is flushed for transcription
    pub flush_interval_secs: u64,
    /// Language hint passed to the transcription service
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub chat_model: String,
    pub transcription_model: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
