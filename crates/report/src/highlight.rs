use regex::RegexBuilder;

use crate::types::Claim;

/// One run of text, attributed to a claim when it is a highlighted match.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub claim_id: Option<String>,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            claim_id: None,
        }
    }

    fn claimed(text: &str, id: &str) -> Self {
        Self {
            text: text.to_owned(),
            claim_id: Some(id.to_owned()),
        }
    }
}

/// Split `text` into segments, marking each case-insensitive literal
/// occurrence of a claim's text with that claim's id.
///
/// Claim text is data, never pattern: it is regex-escaped before matching, so
/// metacharacters match themselves and nothing a claim contains can alter the
/// match or the produced segments. Claims are applied in order, and a run
/// already attributed to an earlier claim is never re-matched.
pub fn segment(text: &str, claims: &[Claim]) -> Vec<Segment> {
    let mut segments = vec![Segment::plain(text)];

    for claim in claims {
        if claim.text.is_empty() {
            continue;
        }
        let pattern = match RegexBuilder::new(&regex::escape(&claim.text))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            // escape() makes this unreachable short of the size limit
            Err(_) => continue,
        };

        let mut next = Vec::with_capacity(segments.len());
        for seg in segments {
            if seg.claim_id.is_some() {
                next.push(seg);
                continue;
            }
            let mut last = 0;
            for m in pattern.find_iter(&seg.text) {
                if m.start() > last {
                    next.push(Segment::plain(&seg.text[last..m.start()]));
                }
                next.push(Segment::claimed(m.as_str(), &claim.id));
                last = m.end();
            }
            if last == 0 {
                next.push(seg);
            } else if last < seg.text.len() {
                next.push(Segment::plain(&seg.text[last..]));
            }
        }
        segments = next;
    }

    segments
}
