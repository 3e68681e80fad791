// ABOUTME: Slide catalog for the pitchdeck application
// ABOUTME: Holds the fixed deck content and its validation rules

use crate::errors::{DeckError, Result};

/// One slide of the deck. Records are immutable; the catalog is the only
/// source of slide content in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    /// 1-based id, matches position in the catalog.
    pub id: u32,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Descriptive text for the intended visual. Documentation only, it is
    /// never rendered on the slide itself (it does appear in the clipboard
    /// summary).
    pub visual_blueprint: &'static str,
    /// Rendered top to bottom, order is meaningful.
    pub bullets: &'static [&'static str],
    /// Closing quotation line.
    pub power_line: &'static str,
    /// Key into the icon registry; unresolved names fall back to the default.
    pub icon_name: &'static str,
    /// Token for the image-by-seed service; same seed yields the same image.
    pub image_seed: &'static str,
}

/// The full deck in display order.
pub fn catalog() -> &'static [SlideRecord] {
    SLIDES
}

/// Check the catalog invariants: non-empty, ids contiguous starting at 1,
/// required text fields non-empty. The built-in deck is validated by tests;
/// this is exposed so the binary can assert it cheaply at startup.
pub fn validate(slides: &[SlideRecord]) -> Result<()> {
    if slides.is_empty() {
        return Err(DeckError::ValidationError("catalog is empty".to_string()));
    }

    for (i, slide) in slides.iter().enumerate() {
        if slide.id as usize != i + 1 {
            return Err(DeckError::ValidationError(format!(
                "slide at position {} has id {}, expected {}",
                i,
                slide.id,
                i + 1
            )));
        }
        if slide.title.is_empty() {
            return Err(DeckError::ValidationError(format!(
                "slide {} has an empty title",
                slide.id
            )));
        }
        if slide.power_line.is_empty() {
            return Err(DeckError::ValidationError(format!(
                "slide {} has an empty power line",
                slide.id
            )));
        }
        if slide.bullets.iter().any(|b| b.is_empty()) {
            return Err(DeckError::ValidationError(format!(
                "slide {} has an empty bullet",
                slide.id
            )));
        }
    }

    Ok(())
}

static SLIDES: &[SlideRecord] = &[
    SlideRecord {
        id: 1,
        title: "The 50-State Digital Asset Expansion",
        subtitle: Some("Dominating the High-Ticket Plastic Surgery Niche via Algorithmic SEO"),
        visual_blueprint: "A stylized US Map with glowing heat nodes igniting across all 50 states, symbolizing rapid coverage.",
        bullets: &[
            "Targeting the lucrative Plastic Surgery market.",
            "Leveraging 11 years of proprietary SEO data.",
            "A partnership built for speed and scale.",
        ],
        power_line: "We are building a revenue engine, not just websites.",
        icon_name: "Map",
        image_seed: "expansion",
    },
    SlideRecord {
        id: 2,
        title: "The Market Gap: Ad Dependency is a Trap",
        subtitle: None,
        visual_blueprint: "A split screen: Left side showing a 'Money Pit' burning cash on ads; Right side showing an 'Oil Well' pumping organic leads.",
        bullets: &[
            "Plastic Surgeons pay exorbitant CPC rates ($50-$100+ per click).",
            "Paid traffic stops the moment you stop paying.",
            "The market lacks owned, organic, high-intent asset networks.",
        ],
        power_line: "Stop renting traffic; let's own the road together.",
        icon_name: "TrendingDown",
        image_seed: "money-fire",
    },
    SlideRecord {
        id: 3,
        title: "The Solution: Rank-and-Rent Infrastructure",
        subtitle: None,
        visual_blueprint: "Diagram of a 'Digital Real Estate' building block: Site -> Rank -> Lead -> Exclusive Partner.",
        bullets: &[
            "We build proprietary digital real estate (websites) that rank organically.",
            "Assets generate exclusive, high-intent patient leads 24/7.",
            "Zero ad spend required after ranking maturity.",
        ],
        power_line: "We become the digital landlords of high-value leads.",
        icon_name: "Building",
        image_seed: "skyscraper",
    },
    SlideRecord {
        id: 4,
        title: "Rank-and-Rent vs. Traditional Ads",
        subtitle: None,
        visual_blueprint: "A balanced scale comparing 'Asset Ownership' (Heavy, Valuable) vs 'Ad Spend' (Light, Fleeting).",
        bullets: &[
            "Ads: 100% Liability. Stop paying, leads stop instantly.",
            "Rank-and-Rent: 100% Asset. Ranks persist and compound over time.",
            "ROI: We build equity, not just campaign reports.",
        ],
        power_line: "Invest in assets we own, not ads we rent.",
        icon_name: "Scale",
        image_seed: "balance",
    },
    SlideRecord {
        id: 5,
        title: "The Unfair Advantage: 11 Years of Data",
        subtitle: None,
        visual_blueprint: "A line graph showing a sharp, consistent 60-day upward trajectory labeled 'The Algorithm'.",
        bullets: &[
            "11 years of full-stack SEO data condensed into a repeatable algorithm.",
            "Proven 60-day trajectory from 'Launch' to 'Ranked'.",
            "We aren't guessing; we are executing a mathematical certainty.",
        ],
        power_line: "Our data is the blueprint Google can't ignore.",
        icon_name: "LineChart",
        image_seed: "analytics",
    },
    SlideRecord {
        id: 6,
        title: "The Product: High-Ticket Lead Engines",
        subtitle: None,
        visual_blueprint: "Mockup of a sleek, high-end lead gen site (e.g., 'Rhinoplasty Miami') on a mobile device.",
        bullets: &[
            "Niche: Plastic Surgery (High Value: $10k+ per patient).",
            "Product: Geo-targeted lead generation sites.",
            "Value: Pre-qualified leads sent directly to partners.",
        ],
        power_line: "Premium procedures demand premium entry points.",
        icon_name: "Smartphone",
        image_seed: "smartphone",
    },
    SlideRecord {
        id: 7,
        title: "The Partnership Model: 50/50 Synergy",
        subtitle: None,
        visual_blueprint: "A puzzle piece graphic connecting 'Tech/Product' (Vincent) and 'Sales/Client' (Partner).",
        bullets: &[
            "A pure 50/50 equity split on all revenue.",
            "Zero conflict of interest; we both win only when revenue flows.",
            "Combines elite technical execution with elite sales closing.",
        ],
        power_line: "Two halves of a monopoly: I build, you sell.",
        icon_name: "Handshake",
        image_seed: "handshake",
    },
    SlideRecord {
        id: 8,
        title: "Operational Division of Labor",
        subtitle: None,
        visual_blueprint: "Two distinct columns or lanes. Left Lane: Code, SEO, Server. Right Lane: Phone, CRM, Handshake.",
        bullets: &[
            "Vincent's Role (Tech): 100% of funding, development, SEO, and maintenance.",
            "Partner's Role (Growth): 100% of US-based sales, client onboarding, and retention.",
            "Frictionless handoff: I generate the asset; you monetize it.",
        ],
        power_line: "I build the engine; you drive the car to victory.",
        icon_name: "Users",
        image_seed: "teamwork",
    },
    SlideRecord {
        id: 9,
        title: "The Critical Juncture: Why Partner Now?",
        subtitle: None,
        visual_blueprint: "A rocket launching into space, symbolizing first-mover advantage and rapid ascent.",
        bullets: &[
            "First-Mover Advantage: The digital landscape is consolidating; speed is key.",
            "Market Timing: High-ticket niches are craving organic alternatives to expensive ads.",
            "Momentum: We launch now to dominate the search results before competitors wake up.",
        ],
        power_line: "The window is open; let's launch before it closes.",
        icon_name: "Rocket",
        image_seed: "rocket-launch",
    },
    SlideRecord {
        id: 10,
        title: "The Roadmap: 50 States in 12 Months",
        subtitle: None,
        visual_blueprint: "A timeline graphic with 3 milestones: Pilot (5 Cities), Cluster (10 States), Nationwide (50 States).",
        bullets: &[
            "Phase 1: Launch pilots in top 5 metro areas (Proof of Concept).",
            "Phase 2: Reinvest profits to fund 10-state clusters.",
            "Phase 3: Nationwide coverage with 50+ revenue-generating assets.",
        ],
        power_line: "Scale is not just an option; it's our mission.",
        icon_name: "Milestone",
        image_seed: "highway",
    },
    SlideRecord {
        id: 11,
        title: "Revenue Potential & Projections",
        subtitle: None,
        visual_blueprint: "A bar chart showing compounding MRR growth over 12 months, reaching the $150k mark.",
        bullets: &[
            "Conservative Estimate: $2k-$5k/mo per ranked asset.",
            "50 States x $3k avg = $150k/MRR potential.",
            "Asset valuation multiplier (30-40x monthly profit) creates massive exit value.",
        ],
        power_line: "Building cash flow today, generational wealth tomorrow.",
        icon_name: "DollarSign",
        image_seed: "finance",
    },
    SlideRecord {
        id: 12,
        title: "The Decision: Let's Build the Empire",
        subtitle: None,
        visual_blueprint: "A simple, high-contrast slide with a 'Green Light' button or a signature line.",
        bullets: &[
            "The tech is ready.",
            "The data is proven.",
            "The market is waiting.",
        ],
        power_line: "The only missing variable is your handshake.",
        icon_name: "CheckCircle",
        image_seed: "success",
    },
];
