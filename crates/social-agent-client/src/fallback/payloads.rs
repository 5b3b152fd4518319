//! Demo payloads shown when no backend is running.

use serde_json::{json, Value};

pub(super) fn message(message: &str) -> Value {
    json!({ "message": message, "data": [] })
}

pub(super) fn brand_config() -> Value {
    json!({
        "persona": "Playful AI coach for creators",
        "brand_rules": "Be optimistic, include actionable advice, keep it concise.",
        "default_hashtags": "#AI #ContentCreation #SocialMedia"
    })
}

pub(super) fn brand_config_updated() -> Value {
    json!({ "message": "Brand configuration updated successfully" })
}

pub(super) fn trend_list() -> Value {
    json!({
        "trends": [
            {
                "id": 1,
                "source": "linkedin",
                "topic": "#AI",
                "text": "AI agents are revolutionizing content creation workflows",
                "author": "TechInfluencer",
                "url": "https://linkedin.com/posts/tech-influencer-ai-agents",
                "engagement": { "likes": 150, "comments": 25, "shares": 30 },
                "score": 0.85,
                "captured_at": "2024-01-01T12:00:00Z"
            },
            {
                "id": 2,
                "source": "x",
                "topic": "#CreatorEconomy",
                "text": "The creator economy is booming with new AI-powered tools",
                "author": "CreatorExpert",
                "url": "https://x.com/creatorexpert/status/1234567890",
                "engagement": { "likes": 200, "comments": 40, "shares": 50 },
                "score": 0.92,
                "captured_at": "2024-01-01T11:30:00Z"
            },
            {
                "id": 3,
                "source": "instagram",
                "topic": "#SocialMedia",
                "text": "Social media strategies that actually work in 2024",
                "author": "SocialMediaGuru",
                "url": "https://instagram.com/p/socialmediaguru123",
                "engagement": { "likes": 300, "comments": 60, "shares": 25 },
                "score": 0.78,
                "captured_at": "2024-01-01T10:15:00Z"
            }
        ]
    })
}

pub(super) fn idea_list() -> Value {
    json!({
        "ideas": [
            {
                "id": 1,
                "title": "AI Content Creation Revolution",
                "summary": "Explore how AI is transforming content creation workflows...",
                "status": "draft",
                "platform_adaptations": {
                    "x": "AI is changing content creation! Here's what you need to know... #AI #ContentCreation",
                    "instagram": "AI tools are revolutionizing how we create content! What's your experience? #AI #ContentCreation #CreatorEconomy",
                    "linkedin": "Professional insight: AI agents are transforming content workflows. Key takeaways for marketers..."
                }
            },
            {
                "id": 2,
                "title": "Creator Economy Trends 2024",
                "summary": "Latest trends in the creator economy and how to leverage them...",
                "status": "approved",
                "platform_adaptations": {
                    "x": "Creator economy is booming! New opportunities everywhere... #CreatorEconomy",
                    "instagram": "The creator economy is evolving! Share your creator journey below! #CreatorEconomy #ContentStrategy",
                    "linkedin": "The creator economy presents unprecedented opportunities for professionals. Here's my analysis..."
                }
            }
        ]
    })
}

pub(super) fn account_list() -> Value {
    json!({
        "accounts": [
            { "id": 1, "platform": "x", "username": "demo_user", "status": "connected" },
            { "id": 2, "platform": "instagram", "username": "demo_user", "status": "disconnected" },
            { "id": 3, "platform": "linkedin", "username": "demo_user", "status": "disconnected" }
        ]
    })
}

/// Three idea templates, each already adapted for X, Instagram and LinkedIn.
pub(super) fn generated_ideas() -> Value {
    json!({
        "ideas": [
            {
                "id": 1,
                "title": "AI Content Creation Revolution",
                "summary": "Explore how AI is transforming content creation workflows for modern creators. Learn about the latest tools and techniques.",
                "ai_type": "text",
                "platform_adaptations": {
                    "x": "AI is changing the game!\n\nAI agents are revolutionizing how we create content:\n- Faster ideation\n- Better optimization\n- Consistent quality\n\nWhat's your experience with AI tools? #AI #ContentCreation",
                    "instagram": "AI tools are revolutionizing how we create content!\n\nFrom idea generation to optimization, AI is changing everything. What's your favorite AI tool for content creation?\n\n#AI #ContentCreation #CreatorEconomy #SocialMedia #TechTrends",
                    "linkedin": "Professional insight: AI agents are transforming content workflows across industries.\n\nKey benefits I've observed:\n- Faster content production\n- Improved consistency and quality\n- Better audience targeting\n\nHow is your organization leveraging AI for content? #AI #ContentStrategy #DigitalTransformation"
                }
            },
            {
                "id": 2,
                "title": "Creator Economy Insights 2024",
                "summary": "Latest trends and opportunities in the creator economy landscape. Understand how creators are monetizing their content.",
                "ai_type": "text",
                "platform_adaptations": {
                    "x": "Creator economy update!\n\n- $104B market size\n- 50M+ creators worldwide\n- New monetization models emerging daily\n\nAre you part of the creator economy? #CreatorEconomy #ContentCreator",
                    "instagram": "The creator economy is evolving!\n\nNew opportunities everywhere:\n- Brand partnerships\n- Digital products\n- Community building\n- Course creation\n\nShare your creator journey below!\n\n#CreatorEconomy #ContentStrategy #Entrepreneurship",
                    "linkedin": "The creator economy presents unprecedented opportunities for professionals.\n\nMy analysis of current trends:\n- B2B creators seeing higher engagement\n- LinkedIn becoming the go-to platform for thought leadership\n- Personal branding driving career advancement\n\nThoughts on the professionalization of content creation? #CreatorEconomy #PersonalBranding"
                }
            },
            {
                "id": 3,
                "title": "Social Media Strategy 2024",
                "summary": "Effective social media strategies that actually work in 2024. Focus on authentic engagement and community building.",
                "ai_type": "text",
                "platform_adaptations": {
                    "x": "Social media strategy that works:\n\n1. Authenticity > Perfection\n2. Community > Followers\n3. Value > Vanity metrics\n4. Consistency > Viral moments\n\nWhat's your #1 social media tip? #SocialMedia #Strategy",
                    "instagram": "Social media strategies that actually work in 2024!\n\nStop chasing algorithms, start building relationships:\n- Be authentic, not perfect\n- Engage genuinely with your community\n- Share valuable insights consistently\n\nWhat strategy works best for you?\n\n#SocialMedia #Strategy #ContentTips #Community",
                    "linkedin": "Effective social media strategies for professionals in 2024.\n\n1. Thought leadership content outperforms promotional posts\n2. Personal stories drive more engagement than generic advice\n3. A consistent posting schedule builds stronger audience relationships\n\nKey takeaway: authenticity and value creation remain the foundation. #SocialMediaStrategy #DigitalMarketing"
                }
            }
        ],
        "count": 3
    })
}
