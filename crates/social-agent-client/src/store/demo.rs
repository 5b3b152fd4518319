use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use social_agent_core::{Engagement, Idea, IdeaStage, Platform};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|n| n.and_utc())
        .unwrap_or_default()
}

fn idea(title: &str, summary: &str, stage: IdeaStage, captions: [&str; 3]) -> Idea {
    let [x, instagram, linkedin] = captions;
    let platform_adaptations = BTreeMap::from([
        (Platform::X, x.to_string()),
        (Platform::Instagram, instagram.to_string()),
        (Platform::Linkedin, linkedin.to_string()),
    ]);
    Idea {
        stage,
        platform_adaptations,
        ..Idea::draft(0, title, summary)
    }
}

fn posted(published_at: DateTime<Utc>, likes: u32, comments: u32, shares: u32) -> IdeaStage {
    IdeaStage::Posted {
        published_at,
        engagement: Engagement {
            likes,
            comments,
            shares,
        },
    }
}

/// Board shown on first launch. Ids are assigned by the store.
pub(super) fn ideas() -> Vec<Idea> {
    vec![
        idea(
            "ChatGPT Pulse Release Analysis",
            "Breaking down OpenAI's latest ChatGPT Pulse feature and its impact on real-time AI interactions. What this means for creators and businesses.",
            IdeaStage::Scheduled {
                scheduled_for: at(2024, 1, 22, 10, 0),
            },
            [
                "BREAKING: ChatGPT Pulse is here!\n\nReal-time AI interactions just got a massive upgrade:\n- Instant responses\n- Live collaboration\n- Enhanced context awareness\n\nThread below #ChatGPT #AI #OpenAI",
                "ChatGPT Pulse just dropped and it's incredible!\n\nWhat's new:\n- Real-time AI conversations\n- Lightning-fast responses\n- Better context understanding\n\nWhat will you create with it? #ChatGPT #AI #ContentCreation",
                "ChatGPT Pulse: A Strategic Analysis for Business Leaders\n\nReal-time AI interaction will reshape customer service automation, content workflows and team collaboration.\n\nHow is your organization preparing? #ChatGPT #AI #BusinessStrategy",
            ],
        ),
        idea(
            "Google Nano Banana Model Deep Dive",
            "Exploring Google's Nano Banana model, a small and efficient AI model for mobile devices. Perfect for edge computing applications.",
            IdeaStage::Scheduled {
                scheduled_for: at(2024, 1, 23, 14, 30),
            },
            [
                "Google's Nano Banana model is tiny but mighty!\n\n- Runs on any mobile device\n- Near-zero latency\n- Privacy-first design\n\n#Google #AI #EdgeComputing",
                "Google just went bananas with their new AI model!\n\nMeet Nano Banana: fits on your phone, answers instantly, keeps your data private.\n\nWhat would you use it for? #Google #AI #MobileTech",
                "Google's Nano Banana Model: Revolutionizing Edge AI Computing\n\nOn-device inference removes cloud dependency and data-privacy concerns for enterprise applications.\n\nThoughts on how edge AI will transform your industry? #EdgeAI #Google",
            ],
        ),
        idea(
            "AI Agents Revolution in Content Creation",
            "How AI agents are transforming the content creation landscape. Real examples and case studies from successful creators.",
            posted(at(2024, 1, 20, 9, 15), 234, 45, 28),
            [
                "AI agents are revolutionizing content creation!\n\n- 3x faster content production\n- Better audience targeting\n- Higher engagement rates\n\n#AI #ContentCreation",
                "AI agents are changing the content game!\n\nIdeas flow faster, quality improves, and there's more time for strategy.\n\n#AI #ContentCreation #CreatorEconomy",
                "The AI Agent Revolution: 6 Months of Real-World Results\n\nKey insight: AI doesn't replace creativity, it amplifies it.\n\nHow are you integrating AI into your content strategy? #AI #ContentStrategy",
            ],
        ),
        idea(
            "Social Media Trends 2024 Predictions",
            "Data-driven predictions for social media trends in 2024. What platforms, features, and content types will dominate.",
            posted(at(2024, 1, 19, 16, 45), 189, 32, 15),
            [
                "2024 Social Media Predictions:\n\n1. AI-generated content goes mainstream\n2. Vertical video dominates\n3. Community > Followers\n4. Authenticity beats perfection\n\n#SocialMedia2024",
                "My 2024 Social Media Predictions!\n\n- AI content creation explodes\n- Short-form video keeps winning\n- Community building becomes the priority\n\n#SocialMedia2024 #ContentTrends",
                "2024 Social Media Landscape: Strategic Predictions for Businesses\n\nAI-assisted creation becomes standard and community-driven marketing outperforms traditional advertising.\n\n#SocialMediaStrategy #DigitalMarketing",
            ],
        ),
        idea(
            "Creator Economy Monetization Strategies",
            "Comprehensive guide to monetizing your content in 2024. Multiple revenue streams and practical implementation tips.",
            posted(at(2024, 1, 18, 11, 30), 312, 67, 41),
            [
                "Creator Economy Revenue Streams 2024:\n\n1. Content subscriptions\n2. Digital products\n3. Coaching\n4. Brand partnerships\n5. Community memberships\n\n#CreatorEconomy",
                "How I built multiple revenue streams as a creator!\n\nDon't rely on just one platform or revenue source.\n\nWhat's your main income stream? #CreatorEconomy #ContentMonetization",
                "Creator Economy Monetization: A Strategic Framework for 2024\n\nSuccessful creators typically run 3-5 active revenue streams, reducing platform dependency.\n\n#CreatorEconomy #DigitalBusiness",
            ],
        ),
    ]
}
