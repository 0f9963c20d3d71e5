// Router-level tests: every request goes through the real axum Router
// backed by a freshly seeded in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use snapfeed_server::{
    config::Cors,
    db::{
        repositories::{CommentRepository, PostRepository},
        Database,
    },
    router::{cors_layer, create_router},
    state::AppState,
};
use snapfeed_types::{Comment, Post};

struct TestApp {
    db: Database,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        Self::with_cors(CorsLayer::permissive())
    }

    fn with_cors(cors: CorsLayer) -> Self {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_if_empty().expect("Failed to seed");
        let router = create_router(AppState::new(db.clone()), cors);
        Self { db, router }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::POST, uri, body).await
    }
}

/// A day ahead of the seed data, so inserted records sort before it
fn future_base() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0) + Duration::days(1)
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_str().expect("id should be a string").to_string())
        .collect()
}

#[tokio::test]
async fn test_fresh_seed_counts() {
    let app = TestApp::new();

    let (status, posts) = app.get("/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts.as_array().unwrap().len(), 6);

    let (_, stories) = app.get("/api/stories").await;
    assert_eq!(stories.as_array().unwrap().len(), 6);

    let (_, explore) = app.get("/api/explore").await;
    assert_eq!(explore["images"].as_array().unwrap().len(), 12);

    let (_, reels) = app.get("/api/reels").await;
    assert_eq!(reels.as_array().unwrap().len(), 6);

    let (_, users) = app.get("/api/users").await;
    assert_eq!(users.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::new();

    let (status, banner) = app.get("/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banner["message"], "Snapfeed API");

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_posts_newest_first_without_storage_ids() {
    let app = TestApp::new();
    let (_, posts) = app.get("/api/posts").await;

    let stamps: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["created_at"].as_str().unwrap())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> =
        stamps.iter().map(|s| s.parse().unwrap()).collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));

    for post in posts.as_array().unwrap() {
        assert!(post.get("_id").is_none());
        assert!(post.get("rowid").is_none());
    }
}

#[tokio::test]
async fn test_get_post_and_unknown_post() {
    let app = TestApp::new();

    let (status, post) = app.get("/api/posts/post_3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["username"], "luna.eats");
    assert_eq!(post["location"], "Brooklyn, NY");

    let (status, body) = app.get("/api/posts/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["details"], "Post not found");
}

#[tokio::test]
async fn test_like_twice_round_trips() {
    let app = TestApp::new();
    let (_, before) = app.get("/api/posts/post_1").await;

    let (status, first) = app.post("/api/posts/post_1/like", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["is_liked"], true);
    assert_eq!(first["likes_count"], before["likes_count"].as_i64().unwrap() + 1);

    let (_, second) = app.post("/api/posts/post_1/like", None).await;
    assert_eq!(second["is_liked"], before["is_liked"]);
    assert_eq!(second["likes_count"], before["likes_count"]);

    let (_, after) = app.get("/api/posts/post_1").await;
    assert_eq!(after["likes_count"], before["likes_count"]);
}

#[tokio::test]
async fn test_toggles_on_unknown_post_are_404() {
    let app = TestApp::new();

    let (status, _) = app.post("/api/posts/nope/like", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.post("/api/posts/nope/save", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_shows_up_in_profile() {
    let app = TestApp::new();

    let (status, saved) = app.post("/api/posts/post_5/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved, json!({ "is_saved": true }));

    let (status, profile) = app.get("/api/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], "user_1");
    assert_eq!(ids(&profile["posts"]), ["post_1"]);
    assert_eq!(ids(&profile["saved_posts"]), ["post_5"]);
}

#[tokio::test]
async fn test_add_comment_bumps_count_and_lists_first() {
    let app = TestApp::new();
    let (_, before) = app.get("/api/posts/post_1").await;

    let (status, comment) = app
        .post("/api/posts/post_1/comment", Some(json!({ "text": "Stunning shot" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["text"], "Stunning shot");
    assert_eq!(comment["post_id"], "post_1");
    assert_eq!(comment["user_id"], "current_user");
    assert_eq!(comment["username"], "you");

    let (_, after) = app.get("/api/posts/post_1").await;
    assert_eq!(
        after["comments_count"].as_i64().unwrap(),
        before["comments_count"].as_i64().unwrap() + 1
    );

    let (status, comments) = app.get("/api/posts/post_1/comments").await;
    assert_eq!(status, StatusCode::OK);
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0]["id"], comment["id"]);
    assert_eq!(comments[0]["text"], "Stunning shot");
}

#[tokio::test]
async fn test_created_comment_matches_listed_comment() {
    let app = TestApp::new();

    let (status, created) = app
        .post("/api/posts/post_1/comment", Some(json!({ "text": "x" })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, comments) = app.get("/api/posts/post_1/comments").await;
    assert_eq!(comments[0], created);
    assert_eq!(comments[0]["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_add_comment_with_custom_author_fields() {
    let app = TestApp::new();

    let (status, comment) = app
        .post(
            "/api/posts/post_2/comment",
            Some(json!({ "text": "", "username": "guest", "user_avatar": "https://example.com/g.png" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["text"], "");
    assert_eq!(comment["username"], "guest");
    assert_eq!(comment["user_avatar"], "https://example.com/g.png");
}

#[tokio::test]
async fn test_add_comment_to_missing_post() {
    let app = TestApp::new();

    let (status, _) = app
        .post("/api/posts/ghost/comment", Some(json!({ "text": "hello?" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, comments) = app.get("/api/posts/ghost/comments").await;
    assert!(comments.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_comment_rejects_malformed_body() {
    let app = TestApp::new();

    let (status, _) = app
        .post("/api/posts/post_1/comment", Some(json!({ "username": "no text" })))
        .await;
    assert!(status.is_client_error());

    let (_, post) = app.get("/api/posts/post_1").await;
    assert_eq!(post["comments_count"], 48);
}

#[tokio::test]
async fn test_reels_project_posts() {
    let app = TestApp::new();
    let (_, reels) = app.get("/api/reels").await;
    let first = &reels[0];

    assert_eq!(first["id"], "reel_post_1");
    assert_eq!(first["music"], "Original Audio");
    assert_eq!(
        first["video_thumbnail"],
        "https://images.unsplash.com/photo-1713959989861-2425c95e9777?w=800&h=1000&fit=crop"
    );
    assert!(first.get("image_url").is_none());
}

#[tokio::test]
async fn test_user_with_posts() {
    let app = TestApp::new();

    let (status, user) = app.get("/api/users/user_4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "kai.explores");
    assert_eq!(ids(&user["posts"]), ["post_5"]);

    let (status, body) = app.get("/api/users/user_99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"], "User not found");
}

#[tokio::test]
async fn test_profile_falls_back_when_user_missing() {
    let app = TestApp::new();
    {
        let conn = app.db.connection().unwrap();
        conn.execute("DELETE FROM users WHERE id = 'user_1'", []).unwrap();
    }
    app.post("/api/posts/post_2/save", None).await;

    let (status, profile) = app.get("/api/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], "user_1");
    assert_eq!(profile["username"], "aria.lens");
    assert_eq!(profile["posts"], json!([]));
    assert_eq!(profile["saved_posts"], json!([]));
}

#[tokio::test]
async fn test_explore_falls_back_to_builtin_images() {
    let app = TestApp::new();
    {
        let conn = app.db.connection().unwrap();
        conn.execute("DELETE FROM explore", []).unwrap();
    }

    let (status, explore) = app.get("/api/explore").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(explore["images"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_reseed_restores_canonical_state() {
    let app = TestApp::new();

    app.post("/api/posts/post_1/like", None).await;
    app.post("/api/posts/post_2/save", None).await;
    app.post("/api/posts/post_3/comment", Some(json!({ "text": "gone soon" })))
        .await;

    let (status, body) = app.post("/api/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Data reseeded successfully");

    let (_, posts) = app.get("/api/posts").await;
    let mut post_ids = ids(&posts);
    post_ids.sort();
    assert_eq!(post_ids, ["post_1", "post_2", "post_3", "post_4", "post_5", "post_6"]);
    for post in posts.as_array().unwrap() {
        assert_eq!(post["is_liked"], false);
        assert_eq!(post["is_saved"], false);
    }

    let (_, comments) = app.get("/api/posts/post_3/comments").await;
    assert_eq!(ids(&comments), ["comment_4"]);

    let (_, post_3) = app.get("/api/posts/post_3").await;
    assert_eq!(post_3["comments_count"], 156);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_stay_consistent() {
    let app = TestApp::new();
    let (_, before) = app.get("/api/posts/post_6").await;
    let base_count = before["likes_count"].as_i64().unwrap();
    let base_liked = before["is_liked"].as_bool().unwrap();

    let mut handles = Vec::new();
    for _ in 0..9 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::post("/api/posts/post_6/like")
                .body(Body::empty())
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (_, after) = app.get("/api/posts/post_6").await;
    let liked = after["is_liked"].as_bool().unwrap();
    let count = after["likes_count"].as_i64().unwrap();

    // The counter always agrees with the flag it tracks
    let expected = base_count + (liked as i64) - (base_liked as i64);
    assert_eq!(count, expected);
}

#[tokio::test]
async fn test_cors_explicit_origins() {
    let cors = Cors {
        origins: "https://app.example, https://admin.example".to_string(),
    };
    let app = TestApp::with_cors(cors_layer(&cors));

    let request = Request::get("/api/posts")
        .header(header::ORIGIN, "https://app.example")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let request = Request::get("/api/posts")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_feed_is_capped_at_fifty_newest() {
    let app = TestApp::new();
    let base = future_base();
    {
        let conn = app.db.connection().unwrap();
        for i in 0..55 {
            let post = Post {
                id: format!("bulk_{}", i),
                user_id: "user_2".to_string(),
                username: "marco.studio".to_string(),
                user_avatar: "https://example.com/a.jpg".to_string(),
                image_url: format!("https://example.com/{}.jpg", i),
                caption: String::new(),
                likes_count: 0,
                comments_count: 0,
                is_liked: false,
                is_saved: false,
                location: String::new(),
                created_at: base + Duration::minutes(i),
            };
            PostRepository::insert(&conn, &post).unwrap();
        }
    }

    let (status, posts) = app.get("/api/posts").await;
    assert_eq!(status, StatusCode::OK);

    let expected: Vec<String> = (5..55).rev().map(|i| format!("bulk_{}", i)).collect();
    assert_eq!(ids(&posts), expected);
}

#[tokio::test]
async fn test_comments_are_capped_at_hundred_newest() {
    let app = TestApp::new();
    let base = future_base();
    {
        let conn = app.db.connection().unwrap();
        for i in 0..105 {
            let comment = Comment {
                id: format!("bulk_comment_{}", i),
                post_id: "post_1".to_string(),
                user_id: "current_user".to_string(),
                username: "you".to_string(),
                user_avatar: "https://example.com/a.jpg".to_string(),
                text: format!("comment {}", i),
                created_at: base + Duration::minutes(i),
            };
            CommentRepository::insert(&conn, &comment).unwrap();
        }
    }

    let (status, comments) = app.get("/api/posts/post_1/comments").await;
    assert_eq!(status, StatusCode::OK);

    let expected: Vec<String> = (5..105)
        .rev()
        .map(|i| format!("bulk_comment_{}", i))
        .collect();
    assert_eq!(ids(&comments), expected);
}

#[tokio::test]
async fn test_cors_wildcard_echoes_origin_with_credentials() {
    let cors = Cors {
        origins: "*".to_string(),
    };
    let app = TestApp::with_cors(cors_layer(&cors));

    let request = Request::get("/api/posts")
        .header(header::ORIGIN, "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://anywhere.example"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/posts/post_1/comment")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(preflight).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://anywhere.example"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "POST"
    );
}
