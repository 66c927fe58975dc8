//! Embedded six-category career taxonomy.
//!
//! Indicator vocabularies are declared per category and shared by that
//! category's subcategories. Loading from another source (file,
//! database) is a caller concern; this is the default reference data.

use once_cell::sync::Lazy;

use super::{Catalog, CatalogEntry, CareerCategory};

struct CategorySpec {
    category: CareerCategory,
    subcategories: &'static [&'static str],
    indicators: &'static [&'static str],
    advantages: &'static str,
    growth_notes: &'static str,
}

static TAXONOMY: &[CategorySpec] = &[
    CategorySpec {
        category: CareerCategory::Stem,
        subcategories: &[
            "Software Engineering",
            "Data Science",
            "Biomedical Research",
            "Environmental Science",
            "Mechanical Engineering",
            "Mathematics",
            "Physics Research",
            "Cybersecurity",
        ],
        indicators: &[
            "problem-solving",
            "analytical thinking",
            "mathematics",
            "technology",
            "research",
            "experimentation",
            "logical reasoning",
            "coding",
            "algorithms",
        ],
        advantages: "Strong demand across industries and well-paid technical tracks.",
        growth_notes: "Continuous learning is expected as tools and fields evolve quickly.",
    },
    CategorySpec {
        category: CareerCategory::ArtsCreative,
        subcategories: &[
            "Graphic Design",
            "Music Production",
            "Writing & Literature",
            "Film & Media",
            "Fine Arts",
            "Architecture",
            "Fashion Design",
            "Game Design",
        ],
        indicators: &[
            "creativity",
            "artistic expression",
            "visual design",
            "storytelling",
            "aesthetics",
            "imagination",
            "cultural appreciation",
            "drawing",
            "music",
        ],
        advantages: "Work is expressive and portfolio-driven rather than credential-driven.",
        growth_notes: "Digital media keeps opening new creative roles and audiences.",
    },
    CategorySpec {
        category: CareerCategory::SportsFitness,
        subcategories: &[
            "Professional Athletics",
            "Sports Coaching",
            "Physical Therapy",
            "Sports Medicine",
            "Fitness Training",
            "Sports Management",
        ],
        indicators: &[
            "physical activity",
            "competition",
            "team sports",
            "fitness",
            "athletics",
            "coaching",
            "health and wellness",
            "exercise",
        ],
        advantages: "Active, people-facing work tied directly to health outcomes.",
        growth_notes: "Wellness and rehabilitation roles are expanding beyond elite sport.",
    },
    CategorySpec {
        category: CareerCategory::BusinessEntrepreneurship,
        subcategories: &[
            "Marketing",
            "Finance",
            "Consulting",
            "Sales",
            "Operations Management",
            "Startup Founder",
            "Investment Banking",
            "Business Development",
        ],
        indicators: &[
            "leadership",
            "profit-driven",
            "networking",
            "strategic thinking",
            "risk-taking",
            "negotiation",
            "market analysis",
            "management",
        ],
        advantages: "Clear advancement ladders and transferable skills across sectors.",
        growth_notes: "Entrepreneurial paths reward initiative over formal tenure.",
    },
    CategorySpec {
        category: CareerCategory::HealthcareMedicine,
        subcategories: &[
            "Medicine",
            "Nursing",
            "Psychology",
            "Pharmacy",
            "Public Health",
            "Medical Research",
            "Therapy",
            "Healthcare Administration",
        ],
        indicators: &[
            "helping others",
            "empathy",
            "science interest",
            "patient care",
            "health advocacy",
            "medical knowledge",
            "crisis management",
            "biology",
        ],
        advantages: "Stable, meaningful work with direct impact on people's lives.",
        growth_notes: "Aging populations keep demand high across clinical and support roles.",
    },
    CategorySpec {
        category: CareerCategory::EducationSocialServices,
        subcategories: &[
            "Teaching",
            "Social Work",
            "Counseling",
            "Educational Administration",
            "Community Development",
            "Non-profit Leadership",
            "Policy Making",
        ],
        indicators: &[
            "teaching",
            "mentoring",
            "social justice",
            "community service",
            "child development",
            "public service",
            "advocacy",
            "communication",
        ],
        advantages: "Purpose-driven work centered on people and communities.",
        growth_notes: "Leadership and policy roles open up with experience in the field.",
    },
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let entries = TAXONOMY
        .iter()
        .flat_map(|spec| {
            spec.subcategories.iter().map(|&sub| {
                CatalogEntry::new(spec.category, sub, spec.indicators.iter().copied())
                    .with_advantages(spec.advantages)
                    .with_growth_notes(spec.growth_notes)
            })
        })
        .collect();
    // The table above is static and has no duplicate pairs.
    Catalog::new(entries).expect("builtin taxonomy is valid")
});

/// Returns the embedded career taxonomy.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}
