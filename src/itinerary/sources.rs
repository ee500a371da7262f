use std::collections::HashMap;

use super::model::Source;
use crate::llm::GroundingMetadata;

/// Collects web citations, one per URL.
///
/// Deduplication is last-write-wins keyed on URL: a repeated URL keeps the
/// position of its first occurrence but takes the title (or lack of one) of
/// its last. Chunks without a URL are dropped.
pub fn extract_sources(metadata: Option<&GroundingMetadata>) -> Vec<Source> {
    let Some(chunks) = metadata.and_then(|m| m.grounding_chunks.as_ref()) else {
        return Vec::new();
    };

    let mut sources: Vec<Source> = Vec::new();
    let mut index_by_url: HashMap<String, usize> = HashMap::new();

    for web in chunks.iter().filter_map(|chunk| chunk.web.as_ref()) {
        let Some(url) = web.uri.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let source = Source {
            title: web.title.clone(),
            url: url.to_string(),
        };
        match index_by_url.get(url) {
            Some(&i) => sources[i] = source,
            None => {
                index_by_url.insert(url.to_string(), sources.len());
                sources.push(source);
            }
        }
    }

    sources
}

pub fn extract_search_queries(metadata: Option<&GroundingMetadata>) -> Vec<String> {
    metadata
        .and_then(|m| m.web_search_queries.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{GroundingChunk, WebSource};

    fn metadata(chunks: Vec<GroundingChunk>) -> GroundingMetadata {
        GroundingMetadata {
            grounding_chunks: Some(chunks),
            web_search_queries: None,
        }
    }

    #[test]
    fn duplicate_url_keeps_the_later_title() {
        let meta = metadata(vec![
            GroundingChunk::web("https://www.kayak.com/flights/MIA-LIM", Some("Kayak")),
            GroundingChunk::web("https://www.viator.com/Lima", Some("Viator")),
            GroundingChunk::web("https://www.kayak.com/flights/MIA-LIM", Some("kayak.com")),
        ]);
        let sources = extract_sources(Some(&meta));
        assert_eq!(
            sources,
            vec![
                Source {
                    title: Some("kayak.com".into()),
                    url: "https://www.kayak.com/flights/MIA-LIM".into(),
                },
                Source {
                    title: Some("Viator".into()),
                    url: "https://www.viator.com/Lima".into(),
                },
            ]
        );
    }

    #[test]
    fn later_duplicate_without_title_clears_it() {
        let meta = metadata(vec![
            GroundingChunk::web("https://a.example", Some("A")),
            GroundingChunk::web("https://a.example", None),
        ]);
        let sources = extract_sources(Some(&meta));
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, None);
    }

    #[test]
    fn chunks_without_url_are_dropped() {
        let meta = metadata(vec![
            GroundingChunk { web: None },
            GroundingChunk {
                web: Some(WebSource {
                    uri: None,
                    title: Some("orphan".into()),
                }),
            },
            GroundingChunk::web("", Some("blank")),
            GroundingChunk::web("https://b.example", None),
        ]);
        let sources = extract_sources(Some(&meta));
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].url, "https://b.example");
    }

    #[test]
    fn empty_or_absent_metadata_yields_nothing() {
        assert!(extract_sources(None).is_empty());
        assert!(extract_sources(Some(&metadata(vec![]))).is_empty());
        assert!(extract_sources(Some(&GroundingMetadata::default())).is_empty());
    }

    #[test]
    fn search_queries_default_to_empty() {
        assert!(extract_search_queries(None).is_empty());
        let meta = GroundingMetadata {
            grounding_chunks: None,
            web_search_queries: Some(vec!["lima hotels march".into()]),
        };
        assert_eq!(extract_search_queries(Some(&meta)), vec!["lima hotels march"]);
    }
}
