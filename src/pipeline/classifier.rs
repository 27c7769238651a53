use serde::{Deserialize, Serialize};

/// Topical classification driving template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Music,
    Business,
    Technology,
    Fitness,
    Education,
    Travel,
    Gaming,
    Cooking,
    General,
}

/// Canned metadata used when the oEmbed lookup is unavailable.
pub struct CategoryProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub key_topics: &'static [&'static str],
    pub summary: &'static str,
}

/// Keyword sets scanned in priority order. Detection is not mutually
/// exclusive, so first-match-wins by this fixed list is the resolution
/// rule: music outranks everything (e.g. "cover" is music, not generic),
/// and `general` is the fall-through.
const PRIORITY: [(Category, &[&str]); 8] = [
    (
        Category::Music,
        &[
            "music", "official", "vevo", "song", "album", "cover", "lyrics", "remix", "concert",
            "acoustic",
        ],
    ),
    (
        Category::Business,
        &[
            "business",
            "startup",
            "entrepreneur",
            "marketing",
            "finance",
            "invest",
            "money",
            "sales",
        ],
    ),
    (
        Category::Technology,
        &[
            "tech",
            "programming",
            "coding",
            "software",
            "javascript",
            "python",
            "developer",
            "computer",
            "tutorial",
        ],
    ),
    (
        Category::Fitness,
        &[
            "fitness", "workout", "gym", "exercise", "training", "muscle", "yoga", "cardio",
        ],
    ),
    (
        Category::Education,
        &[
            "education", "learn", "course", "lecture", "study", "lesson", "science", "history",
        ],
    ),
    (
        Category::Travel,
        &[
            "travel",
            "trip",
            "vlog",
            "tour",
            "destination",
            "adventure",
            "backpacking",
        ],
    ),
    (
        Category::Gaming,
        &[
            "gaming",
            "gameplay",
            "playthrough",
            "walkthrough",
            "speedrun",
            "esports",
            "minecraft",
        ],
    ),
    (
        Category::Cooking,
        &[
            "cooking", "recipe", "baking", "kitchen", "chef", "meal", "food",
        ],
    ),
];

/// Ordered first-match keyword scan over the given text (URL plus any
/// resolved title/channel strings). Empty or unmatched input falls through
/// to `general`.
pub fn classify(haystack: &str) -> Category {
    let lower = haystack.to_lowercase();
    for (category, keywords) in PRIORITY {
        if keywords.iter().any(|k| lower.contains(k)) {
            return category;
        }
    }
    Category::General
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Fitness => "fitness",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Gaming => "gaming",
            Category::Cooking => "cooking",
            Category::General => "general",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Music => "\u{1F3B5}",
            Category::Business => "\u{1F4BC}",
            Category::Technology => "\u{1F4BB}",
            Category::Fitness => "\u{1F4AA}",
            Category::Education => "\u{1F4DA}",
            Category::Travel => "\u{2708}\u{FE0F}",
            Category::Gaming => "\u{1F3AE}",
            Category::Cooking => "\u{1F468}\u{200D}\u{1F373}",
            Category::General => "\u{1F3AF}",
        }
    }

    /// Category-specific hashtags appended to the tags drawn from metadata.
    pub fn hashtag_bank(&self) -> &'static [&'static str] {
        match self {
            Category::Music => &[
                "musiclover",
                "newmusic",
                "artist",
                "songwriter",
                "playlist",
            ],
            Category::Business => &[
                "entrepreneur",
                "startup",
                "businesstips",
                "success",
                "leadership",
                "growth",
            ],
            Category::Technology => &[
                "tech",
                "coding",
                "developer",
                "programming",
                "innovation",
                "software",
            ],
            Category::Fitness => &[
                "health",
                "wellness",
                "workout",
                "fitnessmotivation",
                "training",
            ],
            Category::Education => &["learning", "education", "knowledge", "skills", "growth"],
            Category::Travel => &["wanderlust", "explore", "adventure", "travelgram"],
            Category::Gaming => &["gamer", "gamingcommunity", "letsplay", "videogames"],
            Category::Cooking => &["foodie", "homecooking", "recipes", "delicious"],
            Category::General => &["content", "insights", "tips", "guide", "learning"],
        }
    }

    /// Static quotable lines per category; the generator tops these up with
    /// generic fillers interpolated with the category name.
    pub fn quote_bank(&self) -> &'static [&'static str] {
        match self {
            Category::Music => &[
                "Music is the universal language of emotion",
                "Where words fail, music speaks",
                "Great music connects hearts across all boundaries",
                "Every song tells a story worth hearing",
            ],
            Category::Business => &[
                "Success is where preparation meets opportunity",
                "Great businesses solve real problems",
                "Execution is everything in business",
                "Customer success is business success",
            ],
            Category::Technology => &[
                "Code is poetry written in logic",
                "The best solutions are elegant and simple",
                "Technology is best when it serves humanity",
                "Great developers solve problems, not just write code",
            ],
            Category::Fitness => &[
                "Your body can do it, convince your mind",
                "Consistency beats intensity every time",
                "Strong habits build strong bodies",
            ],
            Category::Education => &[
                "Learning never exhausts the mind",
                "Knowledge compounds like interest",
                "The best investment is in yourself",
            ],
            Category::Travel => &[
                "The world is a book and those who do not travel read one page",
                "Adventure is worthwhile in itself",
                "Travel far enough to meet yourself",
            ],
            Category::Gaming => &[
                "Every expert was once a beginner",
                "Games teach us to fail forward",
                "Play is the highest form of research",
            ],
            Category::Cooking => &[
                "Cooking is love made visible",
                "Good food is the foundation of happiness",
                "Simple ingredients, extraordinary results",
            ],
            Category::General => &[],
        }
    }

    /// Synthesized metadata for the resolver's fallback path.
    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::Music => &CategoryProfile {
                title: "Official Music Video: A Song Worth Hearing",
                description: "An official music release showcasing artistry, production quality, and emotional depth that resonates with listeners.",
                tags: &["music", "song", "artist", "newrelease"],
                key_topics: &["Songwriting", "Production Quality", "Vocal Performance", "Visual Storytelling"],
                summary: "A standout musical release that combines strong songwriting with polished production and a memorable visual presentation.",
            },
            Category::Business => &CategoryProfile {
                title: "How to Start a Successful Business in 2024",
                description: "Learn the essential steps to launch and grow your business, from idea validation to scaling your startup.",
                tags: &["business", "entrepreneurship", "startup", "marketing"],
                key_topics: &["Business Planning", "Market Research", "Funding", "Marketing Strategy", "Team Building"],
                summary: "A comprehensive guide to starting and scaling a successful business, covering market research, funding strategies, and growth tactics.",
            },
            Category::Technology => &CategoryProfile {
                title: "Master Modern Software Development: From Beginner to Advanced",
                description: "Complete tutorial covering fundamentals to advanced concepts. Build real projects and master modern development practices.",
                tags: &["programming", "software", "coding", "tutorial"],
                key_topics: &["Core Language Features", "Async Programming", "API Integration", "Testing Strategies", "Modern Frameworks"],
                summary: "A comprehensive development course covering modern syntax, asynchronous programming, and practical engineering skills.",
            },
            Category::Fitness => &CategoryProfile {
                title: "Fitness Transformation: Build Muscle and Lose Fat",
                description: "Transform your body with proven workout routines and nutrition strategies for building lean muscle while burning fat.",
                tags: &["fitness", "workout", "nutrition", "health"],
                key_topics: &["Strength Training", "Cardio Optimization", "Nutrition Planning", "Recovery Methods", "Progress Tracking"],
                summary: "A comprehensive fitness program combining strength training, cardio, and nutrition strategies for optimal body composition and health.",
            },
            Category::Education => &CategoryProfile {
                title: "Learn Anything Faster: Evidence-Based Study Techniques",
                description: "Discover science-backed learning methods that help you absorb and retain information more effectively.",
                tags: &["education", "learning", "study", "skills"],
                key_topics: &["Active Recall", "Spaced Repetition", "Note-Taking Systems", "Focus Management"],
                summary: "Evidence-based learning strategies including active recall, spaced repetition, and focus techniques for faster skill acquisition.",
            },
            Category::Travel => &CategoryProfile {
                title: "Travel Hacks: How to Travel the World on a Budget",
                description: "Discover insider secrets to affordable travel: cheap flights, budget accommodations, and authentic local experiences.",
                tags: &["travel", "budgettravel", "adventure", "tips"],
                key_topics: &["Flight Deals", "Budget Accommodation", "Travel Planning", "Local Experiences", "Safety Tips"],
                summary: "Practical travel strategies for exploring the world affordably, including flight hacking, budget accommodation, and local travel tips.",
            },
            Category::Gaming => &CategoryProfile {
                title: "Pro Gaming Guide: Strategies That Actually Win",
                description: "Level up your play with strategy breakdowns, mechanics deep dives, and the habits that separate casual from competitive players.",
                tags: &["gaming", "gameplay", "strategy", "esports"],
                key_topics: &["Game Mechanics", "Strategic Thinking", "Practice Routines", "Competitive Mindset"],
                summary: "A practical gaming guide covering mechanics, strategy, and deliberate practice routines for measurable improvement.",
            },
            Category::Cooking => &CategoryProfile {
                title: "Restaurant-Quality Meals at Home: A Complete Guide",
                description: "Master fundamental cooking techniques and learn to create impressive dishes with everyday ingredients.",
                tags: &["cooking", "recipes", "food", "kitchen"],
                key_topics: &["Knife Skills", "Flavor Building", "Cooking Techniques", "Meal Planning"],
                summary: "A complete cooking education covering fundamental techniques, flavor development, and practical meal planning for home cooks.",
            },
            Category::General => &CategoryProfile {
                title: "Valuable Insights: Key Takeaways Worth Sharing",
                description: "Practical guidance and actionable insights that can make a real difference in your personal and professional growth.",
                tags: &["insights", "growth", "tips", "guide"],
                key_topics: &["Core Concepts", "Practical Application", "Common Pitfalls", "Next Steps"],
                summary: "A practical breakdown of valuable concepts with clear guidance on application, common mistakes, and how to keep improving.",
            },
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_outranks_other_matches() {
        // Contains both a music and a business keyword; music wins by priority.
        assert_eq!(
            classify("https://youtube.com/watch?v=x Official Video about startup life"),
            Category::Music
        );
        assert_eq!(classify("SomeArtistVEVO"), Category::Music);
        assert_eq!(classify("acoustic cover session"), Category::Music);
    }

    #[test]
    fn business_outranks_technology() {
        assert_eq!(
            classify("startup tech review and coding news"),
            Category::Business
        );
    }

    #[test]
    fn each_category_is_reachable() {
        assert_eq!(classify("python tutorial"), Category::Technology);
        assert_eq!(classify("leg day workout"), Category::Fitness);
        assert_eq!(classify("history lecture part 2"), Category::Education);
        assert_eq!(classify("backpacking vlog"), Category::Travel);
        assert_eq!(classify("speedrun world record"), Category::Gaming);
        assert_eq!(classify("weeknight recipe ideas"), Category::Cooking);
    }

    #[test]
    fn unmatched_input_falls_through_to_general() {
        assert_eq!(classify(""), Category::General);
        assert_eq!(
            classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Category::General
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("OFFICIAL MUSIC VIDEO"), Category::Music);
    }

    #[test]
    fn every_profile_has_topics_and_tags() {
        for category in [
            Category::Music,
            Category::Business,
            Category::Technology,
            Category::Fitness,
            Category::Education,
            Category::Travel,
            Category::Gaming,
            Category::Cooking,
            Category::General,
        ] {
            let profile = category.profile();
            assert!(!profile.key_topics.is_empty());
            assert!(!profile.tags.is_empty());
            assert!(!profile.title.is_empty());
        }
    }
}
