use super::{
    kinds::{Department, Doctor, DoctorProfile, DoctorsList, Emergency, Location, Telephone},
    types::{EntitySpan, SpanKind, TagMatch},
};

type Scanner = fn(&str) -> Vec<TagMatch>;

/// Tag scanners in registration order. Ties on start offset keep this order.
pub const REGISTRY: [(&str, Scanner); 7] = [
    (Telephone::NAME, Telephone::scan),
    (Doctor::NAME, Doctor::scan),
    (DoctorProfile::NAME, DoctorProfile::scan),
    (DoctorsList::NAME, DoctorsList::scan),
    (Location::NAME, Location::scan),
    (Emergency::NAME, Emergency::scan),
    (Department::NAME, Department::scan),
];

/// Splits `text` into an ordered sequence of plain-text and tag spans.
///
/// Plain-text spans fill every gap between tags, so for non-overlapping tags
/// the spans partition the input. Text without any tag comes back as a single
/// plain-text span covering all of it (including the empty string).
pub fn extract_entities(text: &str) -> Vec<EntitySpan> {
    let mut matches: Vec<TagMatch> = REGISTRY
        .iter()
        .flat_map(|(_, scan)| scan(text))
        .collect();
    matches.sort_by_key(|m| m.span.start);

    let mut out = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for m in matches {
        if m.span.start > cursor {
            out.push(EntitySpan::plain(cursor, m.span.start));
        }
        cursor = m.span.end;
        out.push(EntitySpan {
            span: m.span,
            kind: SpanKind::Tag(m.tag),
        });
    }

    if cursor < text.len() || out.is_empty() {
        out.push(EntitySpan::plain(cursor, text.len()));
    }

    log::trace!("extracted {} span(s) from {} byte(s)", out.len(), text.len());
    out
}
