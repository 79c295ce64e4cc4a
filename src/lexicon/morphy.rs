use crate::tagger::PosCategory;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const fn rules(pos: PosCategory) -> &'static [(&'static str, &'static str)] {
    match pos {
        PosCategory::Noun => NOUN_RULES,
        PosCategory::Verb => VERB_RULES,
        PosCategory::Adjective => ADJECTIVE_RULES,
        PosCategory::Adverb => &[],
    }
}

fn apply_rules(forms: &[String], pos: PosCategory) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules(pos).iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{stem}{new}"))
            })
        })
        .collect()
}

fn keep_known<'a>(
    forms: impl IntoIterator<Item = &'a String>,
    is_known: &impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();

    for form in forms {
        if is_known(form) && !kept.contains(form) {
            kept.push(form.clone());
        }
    }

    kept
}

/// Candidate base forms of `form` as `pos`, in discovery order.
///
/// An exception entry short-circuits the suffix rules. Otherwise the rules are applied to the form
/// and then repeatedly to their own output until some candidate is a known lemma.
pub fn base_forms(
    form: &str,
    pos: PosCategory,
    exceptions: Option<&[String]>,
    is_known: impl Fn(&str) -> bool,
) -> Vec<String> {
    let form = form.to_string();

    if let Some(exceptions) = exceptions {
        return keep_known(std::iter::once(&form).chain(exceptions), &is_known);
    }

    let mut forms = apply_rules(std::slice::from_ref(&form), pos);
    let found = keep_known(std::iter::once(&form).chain(&forms), &is_known);
    if !found.is_empty() {
        return found;
    }

    while !forms.is_empty() {
        forms = apply_rules(&forms, pos);
        let found = keep_known(&forms, &is_known);
        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}
