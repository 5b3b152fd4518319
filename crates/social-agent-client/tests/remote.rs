//! `ContentService` against live origins, mocked with wiremock.

use serde_json::json;
use social_agent_client::{ContentService, HttpGateway, IdeaStore, SeededEngagement};
use social_agent_core::{BrandConfig, GenerateRequest, IdeaStatus, Platform};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(core: &MockServer, agent: &MockServer) -> ContentService {
    let gateway = HttpGateway::new(&core.uri(), &agent.uri(), "social-agent-test", Some(5))
        .expect("gateway construction should not fail");
    ContentService::new(
        gateway,
        IdeaStore::with_generator(Box::new(SeededEngagement::new(1))),
    )
}

fn request() -> GenerateRequest {
    GenerateRequest::text("Coach", "Be kind", vec![Platform::X, Platform::Linkedin])
}

#[tokio::test]
async fn generate_merges_repurposed_captions_and_assigns_fresh_ids() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate_ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ideas": [
                {
                    "id": "a1",
                    "title": "Rust at the edge",
                    "summary": "Why small binaries matter",
                    "hook": "Ship less",
                    "hashtags": ["#rust"],
                    "ai_type": "text"
                },
                { "id": "a2", "title": "Second idea", "summary": "" }
            ],
            "repurposed_content": {
                "x": [{ "idea_id": "a1", "caption": "Tiny binaries, big wins #rust" }],
                "linkedin": [{ "idea_id": "a1", "caption": "A note on binary size" }],
                "mastodon": [{ "idea_id": "a1", "caption": "ignored" }]
            }
        })))
        .expect(1)
        .mount(&agent)
        .await;

    let service = service_for(&core, &agent);
    let ideas = service.generate(&request()).await;

    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].id, 1);
    assert_eq!(ideas[1].id, 2);
    assert_eq!(ideas[0].title, "Rust at the edge");
    assert_eq!(ideas[0].hook.as_deref(), Some("Ship less"));
    assert_eq!(ideas[0].hashtags, vec!["#rust".to_string()]);
    assert_eq!(
        ideas[0].platform_adaptations.get(&Platform::X).map(String::as_str),
        Some("Tiny binaries, big wins #rust")
    );
    assert_eq!(ideas[0].platform_adaptations.len(), 2);
    assert!(ideas[1].platform_adaptations.is_empty());
    assert!(ideas.iter().all(|i| i.status() == IdeaStatus::Draft));
}

#[tokio::test]
async fn generate_reads_the_agent_reply_with_structured_adaptations() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    let x_adaptation = json!({
        "caption": "#AI is changing the game!\n\nAI agents are revolutionizing content creation workflows...\n\nThoughts?",
        "hashtags": ["#AI", "#ContentCreation", "#SocialMedia"],
        "character_limit": 280
    });
    let linkedin_adaptation = json!({
        "caption": "Professional insight: AI agents are revolutionizing content creation workflows",
        "hashtags": ["#AI", "#ContentCreation"],
        "tone": "professional"
    });

    Mock::given(method("POST"))
        .and(path("/generate_ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ideas": [{
                "id": 1,
                "trend_id": 1,
                "title": "Content idea: #AI",
                "summary": "Create engaging content about #AI based on current trends. AI agents are revolutionizing content creation workflows...",
                "hook": "Transform your strategy with #AI",
                "caption": "AI is transforming how we create content!",
                "hashtags": ["#AI", "#ContentCreation", "#SocialMedia", "#AI", "#CreatorEconomy"],
                "ai_type": "text",
                "status": "draft",
                "platform_adaptations": {
                    "x": x_adaptation,
                    "linkedin": linkedin_adaptation
                }
            }],
            "trending_context": [],
            "repurposed_content": {
                "x": [{
                    "idea_id": 1,
                    "platform": "x",
                    "title": "Content idea: #AI",
                    "content": x_adaptation,
                    "compliance_status": "passed"
                }],
                "linkedin": [{
                    "idea_id": 1,
                    "platform": "linkedin",
                    "title": "Content idea: #AI",
                    "content": linkedin_adaptation,
                    "compliance_status": "passed"
                }]
            },
            "scheduled_posts": [{
                "idea_id": 1,
                "platform": "x",
                "suggested_time": "09:00",
                "status": "suggested",
                "content": x_adaptation
            }]
        })))
        .mount(&agent)
        .await;

    let service = service_for(&core, &agent);
    let ideas = service.generate(&request()).await;

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].title, "Content idea: #AI");
    assert_eq!(ideas[0].status(), IdeaStatus::Draft);
    assert!(ideas[0].platform_adaptations[&Platform::X].starts_with("#AI is changing the game!"));
    assert!(ideas[0].platform_adaptations[&Platform::Linkedin].starts_with("Professional insight"));
    assert_eq!(ideas[0].hook.as_deref(), Some("Transform your strategy with #AI"));
}

#[tokio::test]
async fn generate_with_empty_agent_batch_uses_templates() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate_ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ideas": [] })))
        .mount(&agent)
        .await;

    let service = service_for(&core, &agent);
    let ideas = service.generate(&request()).await;

    assert_eq!(ideas.len(), 3);
}

#[tokio::test]
async fn generate_falls_back_on_server_error() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate_ideas"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&agent)
        .await;

    let service = service_for(&core, &agent);
    let ideas = service.generate(&request()).await;

    assert_eq!(ideas.len(), 3);
    assert_eq!(ideas[0].title, "AI Content Creation Revolution");
}

#[tokio::test]
async fn list_ideas_is_a_superset_of_generated_ideas() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ideas/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 900, "title": "From the database", "status": "approved" },
            { "title": "missing id is skipped" }
        ])))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let generated = service.generate(&request()).await;
    let listed = service.list_ideas().await;

    assert_eq!(listed.len(), generated.len() + 1);
    for idea in &generated {
        assert!(listed.contains(idea));
    }
    let remote = listed.last().expect("remote idea listed");
    assert_eq!(remote.id, 900);
    assert_eq!(remote.status(), IdeaStatus::Approved);
}

#[tokio::test]
async fn list_ideas_keeps_backend_rows_without_stage_fields() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ideas/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 10,
                "title": "Creator economy recap",
                "summary": "Weekly recap",
                "persona": "Playful AI coach",
                "brand_rules": "Be concise",
                "ai_type": "text",
                "status": "draft",
                "platform_targets": ["x", "linkedin"],
                "created_at": "2024-01-20T08:00:00",
                "updated_at": null
            },
            {
                "id": 11,
                "title": "AI tools roundup",
                "summary": "Top five tools",
                "persona": "Playful AI coach",
                "brand_rules": "Be concise",
                "ai_type": "text",
                "status": "scheduled",
                "platform_targets": ["instagram"],
                "created_at": "2024-01-20T08:00:00",
                "updated_at": "2024-01-21T09:30:00.250000"
            }
        ])))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let listed = service.list_ideas().await;

    let ids: Vec<i64> = listed.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(listed[0].status(), IdeaStatus::Draft);
    assert_eq!(listed[1].status(), IdeaStatus::Scheduled);
    assert!(listed[1].scheduled_for().is_some());
}

#[tokio::test]
async fn list_ideas_accepts_wrapped_shape() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ideas/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ideas": [{ "id": 5, "title": "Wrapped", "status": "draft" }]
        })))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let listed = service.list_ideas().await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Wrapped");
}

#[tokio::test]
async fn approve_notifies_core_before_changing_local_state() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent/approve_idea/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    service.generate(&request()).await;

    let idea = service.approve(1).await.expect("approve");
    assert_eq!(idea.status(), IdeaStatus::Approved);
}

#[tokio::test]
async fn approve_of_unknown_idea_makes_no_remote_call() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    assert!(service.approve(7).await.is_err());
}

#[tokio::test]
async fn approve_survives_a_rejecting_backend() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent/approve_idea/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    service.generate(&request()).await;

    let idea = service.approve(1).await.expect("approve applies locally");
    assert_eq!(idea.status(), IdeaStatus::Approved);
}

#[tokio::test]
async fn brand_config_reads_live_config() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config/brand"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "persona": "Live persona",
            "brand_rules": "Live rules"
        })))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let brand = service.brand_config().await.expect("live config decodes");

    assert_eq!(brand.persona, "Live persona");
    assert_eq!(brand.default_hashtags, None);
}

#[tokio::test]
async fn brand_config_with_drifted_shape_uses_canned_config() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config/brand"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let brand = service.brand_config().await.expect("canned config decodes");

    assert_eq!(brand.persona, "Playful AI coach for creators");
}

#[tokio::test]
async fn update_brand_config_puts_the_whole_config() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;
    let brand = BrandConfig {
        persona: "Calm".to_string(),
        brand_rules: "Short sentences".to_string(),
        default_hashtags: None,
    };

    Mock::given(method("PUT"))
        .and(path("/config/brand"))
        .and(body_json(json!({
            "persona": "Calm",
            "brand_rules": "Short sentences"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "saved" })))
        .expect(1)
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let ack = service
        .update_brand_config(brand.clone())
        .await
        .expect("brand config encodes");

    assert_eq!(ack["message"], "saved");
    assert_eq!(service.held_brand_config().await, Some(brand));
}

#[tokio::test]
async fn list_trends_does_not_replace_held_trends() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trends": [{
                "id": 10,
                "source": "tiktok",
                "topic": "#dance",
                "text": "Dance challenge",
                "score": 0.5,
                "captured_at": "2024-03-01T08:00:00Z"
            }]
        })))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let listed = service.list_trends().await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].source, Platform::Tiktok);
    assert!(service.trends().await.is_empty());
}

#[tokio::test]
async fn refresh_trends_holds_the_agent_set() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refresh_trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "source": "x",
            "topic": "#rust",
            "text": "Rust 2024 edition",
            "score": 0.99,
            "captured_at": "2024-03-01T08:00:00Z"
        }])))
        .mount(&agent)
        .await;

    let service = service_for(&core, &agent);
    service.refresh_trends().await;

    let held = service.trends().await;
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].topic, "#rust");
}

#[tokio::test]
async fn connect_returns_the_authorization_url() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/x/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth_url": "https://x.example/oauth?state=abc"
        })))
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let connection = service.connect(Platform::X).await;

    assert_eq!(
        connection.authorization_url.as_deref(),
        Some("https://x.example/oauth?state=abc")
    );
    assert_eq!(connection.account.platform, Platform::X);
}

#[tokio::test]
async fn disconnect_sends_delete_and_removes_account() {
    let core = MockServer::start().await;
    let agent = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/auth/accounts/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&core)
        .await;

    let service = service_for(&core, &agent);
    let account = service.connect(Platform::Instagram).await.account;
    assert_eq!(account.id, 1);

    service.disconnect(account.id).await.expect("disconnect");
    assert!(service.connected_accounts().await.is_empty());
}
