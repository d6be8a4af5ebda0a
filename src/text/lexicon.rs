//! Curated environmental vocabulary
//!
//! Static tables shared read-only by the scorers, the control filters and the
//! explanation generator. Entries are matched as literal substrings of the
//! lowercased label, so stems like `"agricultur"` cover both "agriculture"
//! and "agricultural".

/// A theme groups domain keywords for explanation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeywordTheme {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Domain keywords grouped by theme.
pub const KEYWORD_THEMES: &[KeywordTheme] = &[
    KeywordTheme {
        name: "water",
        keywords: &["water", "marine", "ocean", "coastal", "river", "estuar", "wetland"],
    },
    KeywordTheme {
        name: "pollution",
        keywords: &[
            "pollution", "contamina", "toxic", "chemical", "nutrient", "plastic",
            "litter", "oil", "sewage", "waste", "discharge", "emission",
        ],
    },
    KeywordTheme {
        name: "biological",
        keywords: &["species", "habitat", "fish", "biodiversity", "ecosystem", "coral"],
    },
    KeywordTheme {
        name: "impact",
        keywords: &[
            "loss", "decline", "degradation", "depletion", "mortality", "damage",
            "disturbance", "erosion",
        ],
    },
    KeywordTheme {
        name: "activity",
        keywords: &[
            "fishing", "shipping", "industrial", "agricultur", "tourism",
            "construction", "dredging", "aquaculture",
        ],
    },
    KeywordTheme {
        name: "control",
        keywords: &["regulat", "monitor", "protect", "restor", "manage"],
    },
];

/// Iterate every domain keyword with the theme it belongs to.
pub fn domain_keywords() -> impl Iterator<Item = (&'static str, &'static KeywordTheme)> {
    KEYWORD_THEMES
        .iter()
        .flat_map(|theme| theme.keywords.iter().map(move |kw| (*kw, theme)))
}

/// A known cause → effect vocabulary pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CausalPattern {
    /// Short label used in explanations
    pub name: &'static str,
    pub cause_words: &'static [&'static str],
    pub effect_words: &'static [&'static str],
}

impl CausalPattern {
    /// True when any cause word occurs in `from` and any effect word in `to`.
    ///
    /// Both labels must already be lowercased.
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.cause_words.iter().any(|w| from.contains(w))
            && self.effect_words.iter().any(|w| to.contains(w))
    }
}

/// Curated cause → effect patterns.
pub const CAUSAL_PATTERNS: &[CausalPattern] = &[
    CausalPattern {
        name: "fishing pressure",
        cause_words: &["fishing", "trawling", "harvest"],
        effect_words: &["bycatch", "depletion", "overfishing"],
    },
    CausalPattern {
        name: "industrial pollution",
        cause_words: &["industrial", "manufacturing", "factory"],
        effect_words: &["emission", "waste", "chemical"],
    },
    CausalPattern {
        name: "agricultural runoff",
        cause_words: &["agricultur", "farming", "fertili"],
        effect_words: &["nutrient", "eutrophication", "runoff"],
    },
    CausalPattern {
        name: "maritime traffic",
        cause_words: &["shipping", "vessel", "navigation"],
        effect_words: &["noise", "collision", "spill"],
    },
    CausalPattern {
        name: "coastal modification",
        cause_words: &["construction", "dredging", "reclamation"],
        effect_words: &["habitat", "sediment", "erosion"],
    },
    CausalPattern {
        name: "wastewater discharge",
        cause_words: &["sewage", "wastewater", "effluent"],
        effect_words: &["contamination", "pathogen", "pollution"],
    },
    CausalPattern {
        name: "recreational use",
        cause_words: &["tourism", "recreation", "boating"],
        effect_words: &["disturbance", "litter", "trampling"],
    },
    CausalPattern {
        name: "aquaculture impact",
        cause_words: &["aquaculture", "mariculture", "fish farm"],
        effect_words: &["disease", "escape", "parasite"],
    },
    CausalPattern {
        name: "resource extraction",
        cause_words: &["mining", "drilling", "extraction"],
        effect_words: &["turbidity", "noise", "disturbance"],
    },
    CausalPattern {
        name: "climate forcing",
        cause_words: &["climate", "warming", "greenhouse"],
        effect_words: &["acidification", "bleaching", "deoxygenation"],
    },
];

/// Stems marking a control as preventive (acts before the central problem).
pub const PREVENTIVE_KEYWORDS: &[&str] = &[
    "prevent", "reduc", "minimi", "control", "regulat", "monitor", "restric",
    "limit", "manage", "inspect", "check", "avoid",
];

/// Stems marking a control as protective (acts after the central problem).
pub const PROTECTIVE_KEYWORDS: &[&str] = &[
    "mitigat", "protect", "respond", "recover", "restor", "remed", "repair",
    "clean", "treat", "emergency", "contain", "relief",
];

/// True when the lowercased label contains any of `stems`.
pub fn contains_any(lowered: &str, stems: &[&str]) -> bool {
    stems.iter().any(|stem| lowered.contains(stem))
}
