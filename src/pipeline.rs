use std::collections::HashSet;

use tracing::info;

use crate::{
    core::VocBuilderError,
    eudic::{
        AsyncEudicClient,
        BlockingEudicClient,
        StudyListWord,
    },
    segmentation::CandidateExtractor,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub candidates: Vec<String>, // Everything the extractor picked
    pub known: Vec<String>,      // Already in the study list
    pub added: Vec<String>,      // Sent to the study list
}

/// Splits candidates into (new, already known), matching words ignoring case.
pub fn partition_known(
    candidates: &[String],
    existing: &[StudyListWord],
) -> (Vec<String>, Vec<String>) {
    let existing: HashSet<String> = existing.iter().map(|w| w.word.to_lowercase()).collect();
    candidates.iter().cloned().partition(|c| !existing.contains(&c.to_lowercase()))
}

/// Extracts candidates from `text` and adds the ones missing from `list_id`.
///
/// Costs one request to read the list, plus one to add words when any are new.
pub fn sync_text_blocking(
    client: &BlockingEudicClient,
    extractor: &CandidateExtractor,
    text: &str,
    list_id: &str,
) -> Result<SyncReport, VocBuilderError> {
    let candidates = extractor.extract(text);
    if candidates.is_empty() {
        return Ok(SyncReport::default());
    }

    let existing = client.get_study_list_words(list_id)?;
    let (added, known) = partition_known(&candidates, &existing);
    if !added.is_empty() {
        client.add_words_to_study_list(&added, list_id)?;
    }

    info!(list_id, added = added.len(), known = known.len(), "Synced text to study list");
    Ok(SyncReport { candidates, known, added })
}

pub async fn sync_text(
    client: &AsyncEudicClient,
    extractor: &CandidateExtractor,
    text: &str,
    list_id: &str,
) -> Result<SyncReport, VocBuilderError> {
    let candidates = extractor.extract(text);
    if candidates.is_empty() {
        return Ok(SyncReport::default());
    }

    let existing = client.get_study_list_words(list_id).await?;
    let (added, known) = partition_known(&candidates, &existing);
    if !added.is_empty() {
        client.add_words_to_study_list(&added, list_id).await?;
    }

    info!(list_id, added = added.len(), known = known.len(), "Synced text to study list");
    Ok(SyncReport { candidates, known, added })
}
