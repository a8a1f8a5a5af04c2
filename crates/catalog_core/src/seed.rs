//! The built-in dataset written to an empty store on first read.

use crate::records::{AdRecord, CategoryRecord, ToolRecord};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

pub fn default_categories() -> Vec<CategoryRecord> {
    [
        ("creation", "Post & Image Creation"),
        ("video", "Video Tools"),
        ("caption", "Caption Generation"),
        ("trends", "Trend Analysis"),
        ("hashtags", "Hashtag Tools"),
        ("voiceover", "Voiceover Tools"),
        ("scheduling", "Content Scheduling"),
    ]
    .into_iter()
    .map(|(id, name)| CategoryRecord {
        id: id.to_string(),
        name: name.to_string(),
        version: 1,
    })
    .collect()
}

struct SeedTool {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    link: &'static str,
    icon_name: &'static str,
    category: &'static str,
}

const TOOLS: [SeedTool; 16] = [
    SeedTool {
        id: "1",
        name: "Canva",
        description: "User-friendly design tool for creating social media graphics.",
        link: "https://www.canva.com/",
        icon_name: "ImageIcon",
        category: "creation",
    },
    SeedTool {
        id: "2",
        name: "Bing Image Creator",
        description: "AI-powered image generation from text descriptions.",
        link: "https://www.bing.com/images/create",
        icon_name: "PenSquare",
        category: "creation",
    },
    SeedTool {
        id: "3",
        name: "Adobe Express",
        description: "Quickly create stunning graphics, photos, and videos.",
        link: "https://www.adobe.com/express/",
        icon_name: "ImageIcon",
        category: "creation",
    },
    SeedTool {
        id: "4",
        name: "ChatGPT",
        description: "Generative AI for captions, ideas, and content.",
        link: "https://chat.openai.com/",
        icon_name: "BotMessageSquare",
        category: "caption",
    },
    SeedTool {
        id: "5",
        name: "Gemini",
        description: "Google's creative and helpful AI collaborator.",
        link: "https://gemini.google.com/",
        icon_name: "BotMessageSquare",
        category: "caption",
    },
    SeedTool {
        id: "6",
        name: "Copy.ai",
        description: "AI writer for marketing copy and content.",
        link: "https://www.copy.ai/",
        icon_name: "PenSquare",
        category: "caption",
    },
    SeedTool {
        id: "7",
        name: "Google Trends",
        description: "Analyze the popularity of top search queries.",
        link: "https://trends.google.com/",
        icon_name: "TrendingUp",
        category: "trends",
    },
    SeedTool {
        id: "8",
        name: "Exploding Topics",
        description: "Discover rapidly growing topics before they take off.",
        link: "https://explodingtopics.com/",
        icon_name: "TrendingUp",
        category: "trends",
    },
    SeedTool {
        id: "9",
        name: "All Hashtag",
        description: "Generate top, random, or live hashtags for your posts.",
        link: "https://www.all-hashtag.com/",
        icon_name: "Hash",
        category: "hashtags",
    },
    SeedTool {
        id: "10",
        name: "KeywordTool.io",
        description: "Find great keywords using Google Autocomplete.",
        link: "https://keywordtool.io/",
        icon_name: "Hash",
        category: "hashtags",
    },
    SeedTool {
        id: "11",
        name: "ElevenLabs",
        description: "AI-powered text-to-speech and voice cloning.",
        link: "https://elevenlabs.io/",
        icon_name: "Mic",
        category: "voiceover",
    },
    SeedTool {
        id: "12",
        name: "TTSMP3",
        description: "Free and simple text-to-speech with multiple languages.",
        link: "https://ttsmp3.com/",
        icon_name: "Mic",
        category: "voiceover",
    },
    SeedTool {
        id: "13",
        name: "Buffer",
        description: "Social media management for scheduling and analytics.",
        link: "https://buffer.com/",
        icon_name: "CalendarClock",
        category: "scheduling",
    },
    SeedTool {
        id: "14",
        name: "Later",
        description: "Visually plan and schedule your social media posts.",
        link: "https://later.com/",
        icon_name: "CalendarClock",
        category: "scheduling",
    },
    SeedTool {
        id: "15",
        name: "CapCut",
        description: "Free all-in-one video editor for everyone.",
        link: "https://www.capcut.com/",
        icon_name: "Video",
        category: "video",
    },
    SeedTool {
        id: "16",
        name: "Pictory",
        description: "Create and edit professional quality videos using AI.",
        link: "https://pictory.ai/",
        icon_name: "Video",
        category: "video",
    },
];

pub fn default_tools() -> Vec<ToolRecord> {
    TOOLS
        .iter()
        .map(|seed| ToolRecord {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            link: seed.link.to_string(),
            icon_name: seed.icon_name.to_string(),
            category: seed.category.to_string(),
            version: 1,
        })
        .collect()
}

pub fn default_ads() -> Vec<AdRecord> {
    [
        ("ad-1", "Boost Your Reach", "Upgrade to Pro for exclusive tools and insights."),
        ("ad-2", "New AI Features", "Discover our latest AI-powered content generation tools."),
        ("ad-3", "Summer Sale!", "Get 50% off on all annual plans for a limited time."),
        ("ad-4", "Join Our Webinar", "Learn social media marketing secrets from the experts."),
    ]
    .into_iter()
    .map(|(id, title, description)| AdRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        link: "#".to_string(),
        image_url: PLACEHOLDER_IMAGE.to_string(),
        version: 1,
    })
    .collect()
}
