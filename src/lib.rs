//! Picks vocabulary candidates out of text and keeps them in an Eudic study list.

pub mod config;
pub mod core;
pub mod eudic;
pub mod persistence;
pub mod pipeline;
pub mod segmentation;

pub use config::{
    EudicConfig,
    TransportMode,
};
pub use crate::core::{
    Result,
    VocBuilderError,
};
pub use eudic::{
    get_client,
    AsyncEudicClient,
    BlockingEudicClient,
    ClientFactory,
    ClientOptions,
    EudicClient,
    NoteRecord,
    StudyListWord,
};
pub use segmentation::{
    extract_candidates,
    tokenize,
    CandidateExtractor,
};
