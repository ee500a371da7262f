use serde_json::{Map, Value};

const FENCE: &str = "```";

/// What could be recovered from the model's answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    Structured(Map<String, Value>),
    /// No JSON object could be found. Not an error: the caller degrades.
    Unstructured,
}

impl ParsedResponse {
    pub fn into_structured(self) -> Option<Map<String, Value>> {
        match self {
            Self::Structured(map) => Some(map),
            Self::Unstructured => None,
        }
    }
}

type Strategy = fn(&str) -> Option<Map<String, Value>>;

/// Tried in order; the first strategy that yields an object wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("json-fence", from_json_fence),
    ("any-fence", from_any_fence),
    ("raw", from_raw),
];

pub fn parse_response(text: &str) -> ParsedResponse {
    for (name, strategy) in STRATEGIES {
        if let Some(map) = strategy(text) {
            tracing::debug!(strategy = *name, "recovered structured response");
            return ParsedResponse::Structured(map);
        }
        tracing::debug!(strategy = *name, "no JSON object recovered");
    }
    tracing::warn!("model answer held no JSON object, falling back to raw text");
    ParsedResponse::Unstructured
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// First block opened with ```json followed by a newline.
fn from_json_fence(text: &str) -> Option<Map<String, Value>> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find("```json") {
        let tag_end = search_from + offset + "```json".len();
        let rest = &text[tag_end..];
        let after_tag = rest.trim_start_matches([' ', '\t', '\r']);
        if let Some(body) = after_tag.strip_prefix('\n') {
            let close = body.find(FENCE)?;
            return parse_object(&body[..close]);
        }
        search_from = tag_end;
    }
    None
}

/// Every fenced block in order, with any info string on the opening line dropped.
fn from_any_fence(text: &str) -> Option<Map<String, Value>> {
    fenced_blocks(text).into_iter().find_map(|block| {
        parse_object(block).or_else(|| {
            let (first_line, rest) = block.split_once('\n')?;
            if first_line.contains(['{', '[']) {
                return None;
            }
            parse_object(rest)
        })
    })
}

fn from_raw(text: &str) -> Option<Map<String, Value>> {
    parse_object(text)
}

fn fenced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(FENCE) {
        let body = &rest[open + FENCE.len()..];
        let Some(close) = body.find(FENCE) else {
            break;
        };
        blocks.push(&body[..close]);
        rest = &body[close + FENCE.len()..];
    }
    blocks
}
