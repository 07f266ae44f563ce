//! Fixed knowledge tables.
//!
//! Every "generated" artifact in pmlab-tui is a canned template drawn from
//! the read-only constants in this module. Nothing here is derived from the
//! semantic content of user input.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// How long an error notice stays on screen.
pub const ERROR_NOTICE_TTL: Duration = Duration::from_millis(5000);

/// How long a status announcement stays on screen.
pub const STATUS_NOTICE_TTL: Duration = Duration::from_millis(1000);

/// Delay before the estimation session advances to the next story.
pub const STORY_ADVANCE_DELAY: Duration = Duration::from_millis(5000);

/// Simulated latency for the artifact generators.
pub const GENERATION_LATENCY: Duration = Duration::from_millis(2000);

// ============================================================================
// Velocity
// ============================================================================

/// Lowest velocity a sampled sprint can have.
pub const VELOCITY_MIN: u32 = 20;

/// Highest velocity a sampled sprint can have.
pub const VELOCITY_MAX: u32 = 35;

/// Story points completed in the six seeded sprints.
pub const INITIAL_VELOCITY: [u32; 6] = [23, 27, 31, 25, 29, 33];

// ============================================================================
// Planning poker
// ============================================================================

/// The Fibonacci-like estimation scale.
pub const ESTIMATE_SCALE: [u32; 7] = [1, 2, 3, 5, 8, 13, 21];

/// Story prompts the estimation session cycles through.
pub const STORY_PROMPTS: [&str; 5] = [
    "As a user, I want to register an account using email and password.",
    "As a student, I want to search for study materials by course and topic.",
    "As a seller, I want to upload photos of my items with descriptions.",
    "As a buyer, I want to filter search results by price range and condition.",
    "As a user, I want to receive notifications when someone messages me.",
];

// ============================================================================
// Roadmap topics
// ============================================================================

/// Static explanatory content for one roadmap topic card.
pub struct TopicRecord {
    pub title: &'static str,
    /// Labeled lead-in lines ("Definition", "Purpose", ...).
    pub facts: &'static [(&'static str, &'static str)],
    pub bullet_heading: &'static str,
    pub bullets: &'static [&'static str],
}

pub static TOPIC_VISION: TopicRecord = TopicRecord {
    title: "Product Vision",
    facts: &[
        (
            "Definition",
            "A concise statement describing the future state of the product and its value proposition.",
        ),
        (
            "Purpose",
            "Provides direction and inspiration for all product decisions.",
        ),
        (
            "Example",
            "\"To be the most trusted platform for peer-to-peer learning, connecting students worldwide through interactive study groups.\"",
        ),
    ],
    bullet_heading: "Key Elements",
    bullets: &[
        "Target audience and their needs",
        "Unique value proposition",
        "Long-term aspirational goals",
        "Success metrics and outcomes",
    ],
};

pub static TOPIC_ROADMAP: TopicRecord = TopicRecord {
    title: "Product Roadmap",
    facts: &[
        (
            "Definition",
            "A strategic document outlining the product's evolution over time.",
        ),
        (
            "Purpose",
            "Communicates direction, priorities, and progress to stakeholders.",
        ),
        (
            "Time Horizon",
            "Typically covers 6-18 months with decreasing detail over time.",
        ),
    ],
    bullet_heading: "Key Components",
    bullets: &[
        "Themes and initiatives",
        "Key milestones and deliverables",
        "Resource allocation",
        "Dependencies and assumptions",
    ],
};

pub static TOPIC_RELEASE: TopicRecord = TopicRecord {
    title: "Release Plan",
    facts: &[
        (
            "Definition",
            "Detailed plan for delivering specific features in a release.",
        ),
        ("Purpose", "Bridges strategy with tactical execution."),
        (
            "Time Horizon",
            "Typically 2-12 weeks depending on release cycle.",
        ),
    ],
    bullet_heading: "Key Components",
    bullets: &[
        "Specific features and user stories",
        "Sprint breakdown and timeline",
        "Team capacity and velocity",
        "Risk mitigation strategies",
    ],
};

// ============================================================================
// Mock artifacts
// ============================================================================

/// The canned user stories every story generation produces.
pub static MOCK_STORIES: [(&str, u32); 5] = [
    (
        "As a student, I want to create an account so that I can access the marketplace.",
        3,
    ),
    (
        "As a seller, I want to post items with photos and descriptions so that buyers can see what I'm selling.",
        5,
    ),
    (
        "As a buyer, I want to search for items by category so that I can find what I need quickly.",
        8,
    ),
    (
        "As a user, I want to message other users so that I can negotiate prices and arrange meetups.",
        5,
    ),
    (
        "As a seller, I want to mark items as sold so that buyers know they're no longer available.",
        2,
    ),
];

/// Derived textual time estimate shown under the story total.
pub const MOCK_TIME_ESTIMATE: &str =
    "Estimated Development Time: 2-3 sprints (assuming 10-15 points per sprint)";

/// Canned release-plan outline. Only the goal line comes from the user.
pub static RELEASE_FEATURES: [&str; 4] = [
    "User authentication and profile management",
    "Core photo upload and sharing functionality",
    "Basic social interactions (likes, comments)",
    "Mobile-responsive design",
];

pub const RELEASE_TIMELINE: &str = "6-8 weeks (3-4 sprints)";

pub static RELEASE_RISKS: [&str; 3] = [
    "Third-party API integration delays",
    "Mobile performance optimization challenges",
    "User acceptance testing feedback",
];

pub static RELEASE_METRICS: [&str; 3] = [
    "100+ active users in first month",
    "Average session duration > 5 minutes",
    "Photo upload success rate > 95%",
];

// ============================================================================
// PMBOK vs Agile explainer
// ============================================================================

/// One heading-plus-lines section of the explainer block.
pub struct ExplainerSection {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub static EXPLAINER_SECTIONS: [ExplainerSection; 4] = [
    ExplainerSection {
        heading: "Integration Strategies",
        lines: &[
            "Modern software development often benefits from combining PMBOK's structured approach with Agile's flexibility.",
        ],
    },
    ExplainerSection {
        heading: "Project Initiation (PMBOK)",
        lines: &[
            "Stakeholder analysis",
            "Charter development",
            "Risk assessment",
            "Resource planning",
        ],
    },
    ExplainerSection {
        heading: "Execution (Agile)",
        lines: &[
            "Sprint planning",
            "Daily standups",
            "Retrospectives",
            "Continuous delivery",
        ],
    },
    ExplainerSection {
        heading: "When to Use Each Approach",
        lines: &[
            "PMBOK: large, complex projects with fixed requirements and regulatory constraints.",
            "Agile: innovative products with evolving requirements and need for rapid feedback.",
            "Hybrid: enterprise software with both stability and innovation requirements.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_velocity_within_sampling_range() {
        for v in INITIAL_VELOCITY {
            assert!((VELOCITY_MIN..=VELOCITY_MAX).contains(&v));
        }
    }

    #[test]
    fn test_estimate_scale_is_ascending() {
        for pair in ESTIMATE_SCALE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_mock_story_total_is_23() {
        let total: u32 = MOCK_STORIES.iter().map(|(_, pts)| pts).sum();
        assert_eq!(total, 23);
    }

    #[test]
    fn test_topic_records_have_content() {
        for topic in [&TOPIC_VISION, &TOPIC_ROADMAP, &TOPIC_RELEASE] {
            assert!(!topic.title.is_empty());
            assert!(!topic.facts.is_empty());
            assert!(!topic.bullets.is_empty());
        }
    }
}
