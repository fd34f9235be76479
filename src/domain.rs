use std::fmt;

/// Collection domain. Selects the static keyword tables used for detection and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Travel,
    Hr,
    Food,
    General,
}

const TRAVEL_KEYWORDS: &[&str] = &[
    "guide", "cities", "restaurants", "hotels", "activities", "things", "do",
    "adventures", "coastal", "experiences", "culinary", "packing", "tips",
    "tricks", "culture", "traditions", "history", "cuisine", "nightlife", "entertainment",
];
const HR_KEYWORDS: &[&str] = &[
    "acrobat", "create", "convert", "edit", "export", "fill", "sign",
    "generative", "ai", "signatures", "share", "skills", "checklist", "pdf", "forms",
    "fillable", "clipboard", "batch", "document",
];
const FOOD_KEYWORDS: &[&str] = &[
    "breakfast", "lunch", "dinner", "ideas", "mains", "sides", "recipes",
    "cooking", "ingredients", "menu", "planning", "falafel", "ratatouille",
    "vegetarian", "lasagna", "sushi", "ganoush", "chickpeas", "eggplant",
];

const TRAVEL_BONUS: &[&str] = &["adventures", "experiences", "attractions", "destinations", "activities"];
const HR_BONUS: &[&str] = &["forms", "documents", "procedures", "processes", "workflow"];
const FOOD_BONUS: &[&str] = &["recipe", "ingredients", "cooking", "preparation", "menu"];

const TRAVEL_INDICATORS: &[&str] = &["travel", "trip", "vacation", "planner", "tourism", "holiday"];
const HR_INDICATORS: &[&str] = &[
    "hr", "human resources", "professional", "forms", "compliance", "onboarding", "employee",
];
const FOOD_INDICATORS: &[&str] = &[
    "food", "cook", "chef", "contractor", "menu", "catering", "recipe", "kitchen",
];

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Travel => "travel",
            Domain::Hr => "hr",
            Domain::Food => "food",
            Domain::General => "general",
        }
    }

    /// Keywords used both for header detection and for the occurrence score.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Domain::Travel => TRAVEL_KEYWORDS,
            Domain::Hr => HR_KEYWORDS,
            Domain::Food => FOOD_KEYWORDS,
            Domain::General => &[],
        }
    }

    /// Title-only bonus words for the scorer.
    pub fn bonus_keywords(self) -> &'static [&'static str] {
        match self {
            Domain::Travel => TRAVEL_BONUS,
            Domain::Hr => HR_BONUS,
            Domain::Food => FOOD_BONUS,
            Domain::General => &[],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the collection domain from the persona role and the task.
///
/// Each indicator counts once if it appears in either text. Ties go to the
/// earlier domain in travel, hr, food order; no indicator at all means general.
pub fn classify(persona: &str, task: &str) -> Domain {
    let persona = persona.to_lowercase();
    let task = task.to_lowercase();

    let score = |indicators: &[&str]| -> usize {
        indicators
            .iter()
            .filter(|ind| persona.contains(*ind) || task.contains(*ind))
            .count()
    };

    let travel = score(TRAVEL_INDICATORS);
    let hr = score(HR_INDICATORS);
    let food = score(FOOD_INDICATORS);

    if travel == 0 && hr == 0 && food == 0 {
        return Domain::General;
    }

    if travel >= hr.max(food) {
        Domain::Travel
    } else if hr >= travel.max(food) {
        Domain::Hr
    } else if food >= travel.max(hr) {
        Domain::Food
    } else {
        Domain::General
    }
}

// ── Tests ──
