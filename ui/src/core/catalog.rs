//! Built-in result descriptors, one per archetype, with copy from the active locale.

use crate::core::result_type::{ResultKind, ResultType};
use crate::core::score::Score;
use crate::i18n;

const ADVICE_SLOTS: usize = 3;

struct Entry {
    kind: ResultKind,
    score: i32,
    color: &'static str,
    /// Representative traits used when the archetype is opened from the gallery.
    preview: Score,
}

const ENTRIES: [Entry; 8] = [
    Entry { kind: ResultKind::Fox, score: 92, color: "text-rose-500", preview: Score { l: 80.0, e: 70.0 } },
    Entry { kind: ResultKind::Retriever, score: 85, color: "text-orange-500", preview: Score { l: 60.0, e: 90.0 } },
    Entry { kind: ResultKind::Raccoon, score: 81, color: "text-indigo-500", preview: Score { l: 75.0, e: 55.0 } },
    Entry { kind: ResultKind::Cat, score: 74, color: "text-violet-500", preview: Score { l: 40.0, e: 75.0 } },
    Entry { kind: ResultKind::Boar, score: 63, color: "text-red-500", preview: Score { l: 95.0, e: 20.0 } },
    Entry { kind: ResultKind::Rabbit, score: 58, color: "text-pink-400", preview: Score { l: 25.0, e: 70.0 } },
    Entry { kind: ResultKind::Sloth, score: 41, color: "text-emerald-500", preview: Score { l: 20.0, e: 40.0 } },
    Entry { kind: ResultKind::Rock, score: 12, color: "text-slate-500", preview: Score { l: 5.0, e: 10.0 } },
];

/// Descriptor for `kind`, localized with the current language.
pub fn result_type(kind: ResultKind) -> ResultType {
    match ENTRIES.iter().find(|entry| entry.kind == kind) {
        Some(entry) => build(entry.kind, entry.score, entry.color),
        None => fallback(),
    }
}

/// Descriptor for a raw identifier; unknown ids resolve to [`fallback`].
pub fn result_type_for_id(id: &str) -> ResultType {
    match id.parse::<ResultKind>() {
        Ok(kind) => result_type(kind),
        Err(never) => match never {},
    }
}

/// Gallery preview traits for `kind`; [`ResultKind::Unknown`] previews as all zeroes.
pub fn preview_score(kind: ResultKind) -> Score {
    ENTRIES
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.preview)
        .unwrap_or_default()
}

/// Every archetype descriptor, in catalogue order.
pub fn all() -> Vec<ResultType> {
    ENTRIES
        .iter()
        .map(|entry| build(entry.kind, entry.score, entry.color))
        .collect()
}

/// Descriptor shown when the classifier hands over an identifier we don't know.
pub fn fallback() -> ResultType {
    build(ResultKind::Unknown, 0, "text-gray-500")
}

fn build(kind: ResultKind, score: i32, color: &str) -> ResultType {
    let slug = kind.slug();
    let message = |field: &str| i18n::lookup(&format!("result-{slug}-{field}"));

    let advice = (1..=ADVICE_SLOTS)
        .map(|n| format!("result-{slug}-advice-{n}"))
        .filter(|key| i18n::has_message(key))
        .map(|key| i18n::lookup(&key))
        .collect();

    ResultType {
        id: kind,
        title: message("title"),
        subtitle: message("subtitle"),
        score,
        description: message("description"),
        color: color.to_string(),
        advice,
    }
}
