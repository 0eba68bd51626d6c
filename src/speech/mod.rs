//! Speech to Text service (v1).

mod client;
mod types;

pub use client::SpeechToText;
pub use types::{
    RecognizeMetadata, RecognizeOptions, RecognizeOptionsBuilder, SessionState, SessionStatus,
    SpeechModel, SpeechModelSet, SpeechRecognitionAlternative, SpeechRecognitionResult,
    SpeechRecognitionResults, SpeechSession, SupportedFeatures,
};
