//! Static field-kit schema: the fixed catalog of journaling modules.
//!
//! # Responsibility
//! - Define the module/section catalog every other layer is bounded by.
//! - Provide lookup helpers for key/id resolution.
//!
//! # Invariants
//! - The registry is immutable for the process lifetime.
//! - Module keys are unique; section ids are unique within their module.

/// Value shape of a section: one free-text block or an ordered string list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    Text,
    List,
}

/// A single field within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    /// Unique within the owning module, not globally.
    pub id: &'static str,
    pub title: &'static str,
    pub section_type: SectionType,
    pub placeholder: Option<&'static str>,
}

/// A top-level topical category of the field kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDef {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent color hint for front ends. Core never interprets it.
    pub accent: &'static str,
    pub sections: &'static [SectionDef],
}

impl ModuleDef {
    /// Finds a section of this module by id.
    pub fn section(&self, id: &str) -> Option<&'static SectionDef> {
        self.sections.iter().find(|section| section.id == id)
    }
}

const fn text(id: &'static str, title: &'static str, placeholder: &'static str) -> SectionDef {
    SectionDef {
        id,
        title,
        section_type: SectionType::Text,
        placeholder: Some(placeholder),
    }
}

const fn list(id: &'static str, title: &'static str, placeholder: &'static str) -> SectionDef {
    SectionDef {
        id,
        title,
        section_type: SectionType::List,
        placeholder: Some(placeholder),
    }
}

static MODULES: [ModuleDef; 7] = [
    ModuleDef {
        key: "snapshot",
        title: "Snapshot",
        description: "How life feels right now and the signals you are noticing.",
        accent: "#b472ff",
        sections: &[
            text(
                "currentState",
                "Current State",
                "What is true right now? Energy, routines, constraints.",
            ),
            list(
                "evidence",
                "Evidence & Signals",
                "Wins, tensions, feedback you are collecting.",
            ),
            list(
                "feelings",
                "How It Feels",
                "Words that describe the vibe of this season.",
            ),
        ],
    },
    ModuleDef {
        key: "idealLife",
        title: "Ideal Life",
        description: "Describe the life you are designing toward.",
        accent: "#68d4ff",
        sections: &[
            text(
                "narrative",
                "Narrative",
                "Paint the scene for the life you want.",
            ),
            list(
                "outcomes",
                "Defining Outcomes",
                "Health, work, relationships, money, environment.",
            ),
            list(
                "habits",
                "Daily Practices",
                "Micro-behaviors that make the ideal life inevitable.",
            ),
        ],
    },
    ModuleDef {
        key: "creativity",
        title: "Creativity",
        description: "Projects, sparks, and constraints that help you ship.",
        accent: "#ffd166",
        sections: &[
            list(
                "projects",
                "Active Projects",
                "Name the creative tracks you are moving.",
            ),
            list(
                "sparks",
                "Sparks",
                "Ideas, references, people, or quotes to explore.",
            ),
            text(
                "constraints",
                "Creative Constraints",
                "Rules that keep you prolific (formats, schedules, limits).",
            ),
        ],
    },
    ModuleDef {
        key: "community",
        title: "Community",
        description: "Who you are traveling with and how you show up for them.",
        accent: "#7bd88f",
        sections: &[
            list(
                "people",
                "People & Circles",
                "Communities, mentors, collaborators.",
            ),
            list(
                "collaborations",
                "Collaboration Ideas",
                "Things to build, host, or ship together.",
            ),
            text(
                "support",
                "Support Needs",
                "What you need from the room right now.",
            ),
        ],
    },
    ModuleDef {
        key: "gapMap",
        title: "Gap Map",
        description: "Where reality and the vision diverge, and how to close it.",
        accent: "#ff8ba7",
        sections: &[
            list(
                "frictions",
                "Frictions",
                "Blocks, resource gaps, patterns that keep showing up.",
            ),
            list(
                "opportunities",
                "Opportunities",
                "Moments to leverage, shortcuts, relationships.",
            ),
            text(
                "bridges",
                "Possible Bridges",
                "What would collapse the gap? Systems, rhythms, asks.",
            ),
        ],
    },
    ModuleDef {
        key: "experiments",
        title: "Experiments",
        description: "Run small bets that test what matters.",
        accent: "#74b9ff",
        sections: &[
            list("active", "Active", "Hypotheses you are currently running."),
            list("next", "Next Up", "Experiments queued for this month."),
            text(
                "learning",
                "Learning Notes",
                "What you are noticing, what to double down on.",
            ),
        ],
    },
    ModuleDef {
        key: "weeklyCheckins",
        title: "Weekly Check-ins",
        description: "Lightweight rituals to keep momentum.",
        accent: "#c792ea",
        sections: &[
            list("wins", "Wins", "Moments to celebrate from this week."),
            text(
                "mood",
                "Mood & Energy",
                "How did the week feel? What spiked or dipped?",
            ),
            list(
                "focus",
                "Focus for Next Week",
                "Three commitments that would make next week a win.",
            ),
        ],
    },
];

/// Returns the ordered module catalog.
pub fn registry() -> &'static [ModuleDef] {
    &MODULES
}

/// Finds a module by key.
pub fn module(key: &str) -> Option<&'static ModuleDef> {
    registry().iter().find(|module| module.key == key)
}

/// Finds a section by module key and section id in one step.
pub fn section(module_key: &str, section_id: &str) -> Option<&'static SectionDef> {
    module(module_key).and_then(|module| module.section(section_id))
}

/// Enumerates every (module, section) pair in registry order.
pub fn all_sections() -> impl Iterator<Item = (&'static ModuleDef, &'static SectionDef)> {
    registry()
        .iter()
        .flat_map(|module| module.sections.iter().map(move |section| (module, section)))
}
