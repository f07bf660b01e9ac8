use crate::models::SectorId;

/// Ordered matching rules for raw sector labels.
///
/// The source labels are inconsistently formatted free text, so matching is
/// case-insensitive substring containment against a small fixed vocabulary.
/// The FIRST rule whose pattern list matches wins; there is no scoring and
/// no longest-match preference. A label containing both "bosque" and
/// "granadino" therefore resolves to `BosquesDelSur`. Keep this order.
pub const MATCH_RULES: &[(&[&str], SectorId)] = &[
    (&["agua viva"], SectorId::AguaViva),
    (&["bosques del sur", "bosque"], SectorId::BosquesDelSur),
    (&["granadino"], SectorId::CorredorGranadino),
    (&["expansión", "expansion"], SectorId::NucleoDeExpansion),
];

/// Map a raw, free-text sector label to its canonical identity.
///
/// Trims whitespace and lowercases (Unicode-aware, so "EXPANSIÓN" matches
/// the accented pattern). A blank label yields `Unlabeled`, which callers
/// may treat like `Unknown` but can still tell apart. Never fails.
pub fn normalize(raw: &str) -> SectorId {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return SectorId::Unlabeled;
    }
    for (patterns, id) in MATCH_RULES {
        if patterns.iter().any(|p| needle.contains(p)) {
            return *id;
        }
    }
    SectorId::Unknown
}
