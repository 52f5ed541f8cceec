//! Closed category vocabulary shared by the prompt and the keyword fallback.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One bookmark bucket. Anything a provider invents outside this set
/// becomes [`Category::Uncategorized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Fitness,
    Coding,
    Food,
    Cooking,
    Travel,
    Design,
    Photography,
    Music,
    Fashion,
    Education,
    Business,
    Finance,
    Gaming,
    Entertainment,
    Science,
    Health,
    Motivation,
    Productivity,
    Lifestyle,
    News,
    #[default]
    Uncategorized,
}

impl Category {
    /// Scored categories in declaration order. Earlier entries win ties.
    pub const SCORED: [Category; 20] = [
        Category::Fitness,
        Category::Coding,
        Category::Food,
        Category::Cooking,
        Category::Travel,
        Category::Design,
        Category::Photography,
        Category::Music,
        Category::Fashion,
        Category::Education,
        Category::Business,
        Category::Finance,
        Category::Gaming,
        Category::Entertainment,
        Category::Science,
        Category::Health,
        Category::Motivation,
        Category::Productivity,
        Category::Lifestyle,
        Category::News,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fitness => "Fitness",
            Category::Coding => "Coding",
            Category::Food => "Food",
            Category::Cooking => "Cooking",
            Category::Travel => "Travel",
            Category::Design => "Design",
            Category::Photography => "Photography",
            Category::Music => "Music",
            Category::Fashion => "Fashion",
            Category::Education => "Education",
            Category::Business => "Business",
            Category::Finance => "Finance",
            Category::Gaming => "Gaming",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
            Category::Health => "Health",
            Category::Motivation => "Motivation",
            Category::Productivity => "Productivity",
            Category::Lifestyle => "Lifestyle",
            Category::News => "News",
            Category::Uncategorized => "Uncategorized",
        }
    }

    /// Match a free-text category name (case-insensitive, trimmed).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::SCORED
            .into_iter()
            .chain(std::iter::once(Category::Uncategorized))
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// Like [`Category::parse`], coercing unknown names to `Uncategorized`.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Keywords counted as substrings by the offline classifier.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Fitness => &[
                "workout", "gym", "exercise", "fitness", "muscle", "cardio", "yoga",
                "running", "abs", "bodybuilding", "stretch", "health", "weight loss",
                "training", "sport", "protein", "diet", "hiit", "crossfit", "squat",
                "push up", "pull up", "calories", "reps", "sets", "plank", "deadlift",
            ],
            Category::Coding => &[
                "code", "coding", "programming", "developer", "javascript", "python",
                "react", "api", "github", "software", "algorithm", "frontend", "backend",
                "devops", "debug", "html", "css", "node", "database", "typescript",
                "rust", "golang", "nextjs", "deploy", "java", "kotlin", "swift",
                "flutter", "docker", "kubernetes", "git", "open source", "terminal",
                "function", "class", "object", "array", "loop", "variable", "boolean",
                "string[]", "main method", "static void", "public class",
            ],
            Category::Food => &[
                "recipe", "cook", "food", "meal", "pasta", "restaurant", "eat",
                "kitchen", "bake", "delicious", "dinner", "lunch", "breakfast",
                "snack", "chef", "vegan", "pizza", "salad", "healthy eating", "cuisine",
                "ingredient", "flavour", "flavor", "dessert", "smoothie", "coffee",
            ],
            Category::Cooking => &[
                "cooking", "bake", "baking", "bread", "oven", "dough", "sourdough",
                "knead", "roast", "grill", "simmer", "saute", "marinade", "homemade",
                "meal prep", "one pot", "air fryer", "stir fry", "seasoning",
            ],
            Category::Travel => &[
                "travel", "trip", "destination", "flight", "hotel", "explore",
                "adventure", "tourism", "beach", "mountain", "vacation", "hiking",
                "road trip", "wanderlust", "itinerary", "passport", "visa",
                "backpacking", "hostel", "resort", "sightseeing", "landmark",
            ],
            Category::Design => &[
                "design", "ui", "ux", "figma", "typography", "layout", "creative",
                "graphic", "branding", "logo", "illustration", "photoshop", "canva",
                "wireframe", "prototype", "color palette", "design system", "font",
                "visual", "mockup", "component", "animation", "motion",
            ],
            Category::Photography => &[
                "photography", "photographer", "photo", "camera", "lens", "portrait",
                "lightroom", "shutter", "aperture", "exposure", "tripod", "golden hour",
                "landscape shot", "street photography", "preset", "nikon", "canon",
            ],
            Category::Music => &[
                "music", "song", "album", "playlist", "concert", "artist", "beat",
                "rapper", "singer", "guitar", "lyrics", "melody", "spotify",
                "hip hop", "rock", "pop", "jazz", "producer", "studio", "track",
                "bass", "drum", "piano", "vocals", "mixtape",
            ],
            Category::Fashion => &[
                "fashion", "outfit", "ootd", "style", "clothing", "wear", "trend",
                "dress", "shoes", "streetwear", "luxury", "accessories", "wardrobe",
                "model", "lookbook", "collection", "brand", "couture",
            ],
            Category::Education => &[
                "learn", "study", "course", "tutorial", "guide", "tips", "how to",
                "lesson", "teach", "knowledge", "university", "student", "lecture",
                "skill", "certification", "bootcamp", "explained", "basics",
                "beginner", "advanced", "concept", "theory", "exam", "quiz",
            ],
            Category::Business => &[
                "startup", "business", "entrepreneur", "marketing", "money", "invest",
                "finance", "stock", "crypto", "revenue", "growth", "sales", "brand",
                "linkedin", "saas", "product", "founder", "profit", "passive income",
                "e-commerce", "shopify", "monetize", "client", "freelance",
            ],
            Category::Finance => &[
                "personal finance", "investing", "budget", "savings", "retirement",
                "dividend", "portfolio", "bitcoin", "index fund", "credit card",
                "mortgage", "wealth", "interest rate", "stock market", "financial",
            ],
            Category::Gaming => &[
                "gaming", "gamer", "gameplay", "playstation", "xbox", "nintendo",
                "fortnite", "minecraft", "esports", "twitch", "speedrun", "walkthrough",
                "steam", "controller", "video game",
            ],
            Category::Entertainment => &[
                "movie", "film", "show", "netflix", "anime", "meme", "funny",
                "comedy", "game", "gaming", "celebrity", "viral", "drama",
                "series", "trailer", "review", "reaction", "prank", "challenge",
            ],
            Category::Science => &[
                "science", "research", "physics", "biology", "chemistry", "space",
                "nasa", "experiment", "discovery", "data", "artificial intelligence",
                "machine learning", "neuroscience", "climate", "quantum", "rocket",
                "atom", "dna", "evolution", "mathematics",
            ],
            Category::Health => &[
                "health", "doctor", "medical", "nutrition", "vitamin", "sleep",
                "immune", "disease", "symptom", "therapy", "skincare", "hydration",
                "wellbeing", "mental health", "gut health",
            ],
            Category::Motivation => &[
                "motivation", "motivational", "inspiration", "inspiring", "mindset",
                "discipline", "success", "goals", "hustle", "never give up", "believe",
                "quote", "grind", "dream",
            ],
            Category::Productivity => &[
                "productivity", "productive", "time management", "notion", "workflow",
                "focus", "pomodoro", "planner", "organize", "efficiency", "deep work",
                "second brain", "to-do", "habit",
            ],
            Category::Lifestyle => &[
                "lifestyle", "motivation", "mindset", "self improvement", "morning routine",
                "productivity", "wellness", "meditation", "gratitude", "habit",
                "minimalism", "home decor", "relationship", "mental health", "anxiety",
                "confidence", "journaling", "routine", "balance", "self care",
            ],
            Category::News => &[
                "news", "breaking", "headline", "politics", "election", "government",
                "journalism", "announcement", "press release", "policy", "parliament",
                "president", "reporter",
            ],
            Category::Uncategorized => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated vocabulary for prompts.
#[must_use]
pub fn vocabulary() -> String {
    Category::SCORED
        .iter()
        .chain(std::iter::once(&Category::Uncategorized))
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
