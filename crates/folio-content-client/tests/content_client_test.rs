//! Contract tests for ContentClient against a mock WordPress-style REST API.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/wp-json/wp/v2/{type}` | `list_*` |
//! | GET    | `/wp-json/wp/v2/{type}?slug=` | `get_by_slug_*` |
//! | GET    | `/wp-json/wp/v2/{type}/{id}` | `get_by_id_*`, `related_*` |
//! | GET    | `/wp-json/wp/v2/categories`, `/tags` | `terms_*`, `list_filters_*` |
//! | GET    | `/wp-json/wp-api-menus/v2/menus/{id}` | `fetch_menu_*` |

use folio_content_client::{
    AuthorId, ContentApiConfig, ContentApiError, ContentClient, ContentEntity, ContentId,
    ContentStatus, ContentType, ListOptions, Taxonomy, TermId,
};
use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

fn test_client(mock_server: &MockServer) -> ContentClient {
    ContentClient::new(ContentApiConfig::parse(&mock_server.uri()).unwrap()).unwrap()
}

fn unreachable_client() -> ContentClient {
    let mut config = ContentApiConfig::parse("http://127.0.0.1:1").unwrap();
    config.timeout_secs = Some(2);
    ContentClient::new(config).unwrap()
}

fn posts() -> ContentType {
    ContentType::posts()
}

/// A raw post with every embed present.
fn raw_post(id: i64, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "date": "2024-03-05T10:15:00",
        "modified": "2024-03-06T08:00:00",
        "status": "publish",
        "link": format!("https://cms.example.com/{slug}/"),
        "title": {"rendered": format!("Post {id}")},
        "content": {"rendered": "<p>Body &amp; more</p>"},
        "excerpt": {"rendered": "<p>Body</p>"},
        "comment_status": "open",
        "format": "standard",
        "sticky": false,
        "acf": {"subtitle": "Sub"},
        "yoast_head_json": {"title": "SEO title"},
        "_embedded": {
            "wp:featuredmedia": [{
                "id": 90,
                "source_url": "https://cdn.example.com/hero.jpg",
                "alt_text": "Hero",
                "media_details": {"width": 1200, "height": 630, "sizes": {
                    "thumbnail": {"source_url": "https://cdn.example.com/hero-150.jpg"}
                }}
            }],
            "author": [{"id": 3, "name": "Jo", "slug": "jo", "avatar_urls": {"96": "https://cdn/jo.png"}}],
            "wp:term": [
                [{"id": 2, "name": "News", "slug": "news", "taxonomy": "category"}],
                [{"id": 7, "name": "Rust", "slug": "rust", "taxonomy": "post_tag"}]
            ]
        }
    })
}

/// A raw post with no embeds at all.
fn bare_post(id: i64, slug: &str) -> Value {
    json!({"id": id, "slug": slug, "title": {"rendered": slug}})
}

// ── GET /{type} ──────────────────────────────────────────────────────

#[tokio::test]
async fn list_sends_embed_and_reads_pagination_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("_embed", "true"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "2"))
        .and(query_param("status", "publish"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-Total", "5")
                .insert_header("X-WP-TotalPages", "3")
                .set_body_json(json!([raw_post(1, "first"), raw_post(2, "second")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListOptions::default().with_page(2).with_per_page(2);
    let page = client.list_entities::<Value>(&posts(), &options).await;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
    assert!(page.has_more);

    let first = &page.items[0];
    assert_eq!(first.id, ContentId::new(1));
    assert_eq!(first.title, "Post 1");
    assert_eq!(first.content, "<p>Body &amp; more</p>");
    assert_eq!(first.comment_status, "open");
    let image = first.featured_image.as_ref().unwrap();
    assert_eq!(image.url, "https://cdn.example.com/hero.jpg");
    assert_eq!(image.width, 1200);
    assert_eq!(first.author.name, "Jo");
    assert_eq!(first.categories[0].slug, "news");
    assert_eq!(first.tags[0].id, TermId::new(7));
    assert_eq!(first.seo.as_ref().unwrap()["title"], json!("SEO title"));
}

#[tokio::test]
async fn list_last_page_has_no_more() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-Total", "5")
                .insert_header("X-WP-TotalPages", "3")
                .set_body_json(json!([raw_post(5, "fifth")])),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_entities::<Value>(&posts(), &ListOptions::default().with_page(3))
        .await;
    assert_eq!(page.items.len(), 1);
    assert!(!page.has_more);
}

#[tokio::test]
async fn list_without_headers_reports_zero_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(1, "a")])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_more);
}

#[tokio::test]
async fn list_truncates_to_requested_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            bare_post(1, "a"),
            bare_post(2, "b"),
            bare_post(3, "c")
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_entities::<Value>(&posts(), &ListOptions::default().with_per_page(2))
        .await;
    let slugs: Vec<_> = page.items.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn list_applies_defaults_for_missing_embeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(4, "plain")])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    let entity = &page.items[0];
    assert!(entity.featured_image.is_none());
    assert!(entity.author.is_placeholder());
    assert!(entity.categories.is_empty());
    assert!(entity.tags.is_empty());
    assert_eq!(entity.status, ContentStatus::Publish);
    assert_eq!(entity.format, "standard");
    assert_eq!(entity.comment_status, "closed");
}

#[tokio::test]
async fn list_drops_entities_without_id_or_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            bare_post(1, "kept"),
            {"id": 2, "slug": ""},
            {"slug": "no-id"},
            {"id": -4, "slug": "negative"},
            "not an object"
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "kept");
}

#[tokio::test]
async fn list_degrades_to_empty_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_entities::<Value>(&posts(), &ListOptions::default().with_page(4))
        .await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.page, 4);
    assert!(!page.has_more);
}

#[tokio::test]
async fn list_degrades_to_empty_on_transport_failure() {
    let client = unreachable_client();
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}

#[tokio::test]
async fn list_degrades_on_non_array_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "rest_no_route"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_filters_resolve_slugs_before_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .and(query_param("slug", "news,ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "News", "slug": "news", "count": 4}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("categories", "2"))
        .and(query_param("author", "3"))
        .and(query_param_is_missing("tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([raw_post(1, "first")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListOptions::default()
        .with_category("news")
        .with_category("ghost")
        .with_author(AuthorId::new(3));
    let page = client.list_entities::<Value>(&posts(), &options).await;
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn list_filters_with_no_matching_slug_do_not_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param_is_missing("tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(1, "a"), bare_post(2, "b")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_by_tag::<Value>(&posts(), "ghost", ListOptions::default())
        .await;
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn list_sends_sort_search_and_sticky() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/project"))
        .and(query_param("search", "wasm"))
        .and(query_param("sticky", "false"))
        .and(query_param("exclude", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListOptions {
        exclude_sticky: true,
        exclude: vec![ContentId::new(9)],
        ..ListOptions::default()
    };
    let project = ContentType::new("project").unwrap();
    let page = client.search::<Value>(&project, "wasm", options).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn recent_and_popular_order_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("orderby", "date"))
        .and(query_param("order", "desc"))
        .and(query_param("per_page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(1, "new")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("orderby", "comment_count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(2, "hot")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let recent = client.recent::<Value>(&posts(), 3).await;
    assert_eq!(recent[0].slug, "new");
    let popular = client.popular::<Value>(&posts(), 3).await;
    assert_eq!(popular[0].slug, "hot");
}

// ── Typed custom fields ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Subtitle {
    subtitle: String,
}

#[tokio::test]
async fn custom_fields_deserialize_or_default() {
    let mock_server = MockServer::start().await;

    let mut empty_acf = bare_post(2, "no-fields");
    empty_acf["acf"] = json!(false);
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([raw_post(1, "with-fields"), empty_acf])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.list_entities::<Subtitle>(&posts(), &ListOptions::default()).await;
    assert_eq!(page.items[0].acf.subtitle, "Sub");
    assert_eq!(page.items[1].acf, Subtitle::default());
}

// ── GET /{type}?slug= ────────────────────────────────────────────────

#[tokio::test]
async fn get_by_slug_returns_first_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("slug", "hello"))
        .and(query_param("_embed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([raw_post(11, "hello"), raw_post(12, "hello")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let entity: ContentEntity = client.get_entity_by_slug(&posts(), "hello").await.unwrap();
    assert_eq!(entity.id, ContentId::new(11));
}

#[tokio::test]
async fn get_by_slug_absent_when_no_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.get_entity_by_slug::<Value>(&posts(), "missing").await.is_none());
}

#[tokio::test]
async fn get_by_slug_absent_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.get_entity_by_slug::<Value>(&posts(), "hello").await.is_none());
    assert!(unreachable_client()
        .get_entity_by_slug::<Value>(&posts(), "hello")
        .await
        .is_none());
}

// ── GET /{type}/{id} ─────────────────────────────────────────────────

#[tokio::test]
async fn get_by_id_returns_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .and(query_param("_embed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(raw_post(10, "ten")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let entity = client
        .get_entity_by_id::<Value>(&posts(), ContentId::new(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entity.slug, "ten");
}

#[tokio::test]
async fn get_by_id_not_found_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": "rest_post_invalid_id"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get_entity_by_id::<Value>(&posts(), ContentId::new(404)).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn get_by_id_server_error_is_distinguishable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .respond_with(ResponseTemplate::new(500).set_body_string("fatal error"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .get_entity_by_id::<Value>(&posts(), ContentId::new(10))
        .await
        .unwrap_err();
    match err {
        ContentApiError::ApiError { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "fatal error");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn get_by_id_transport_failure_is_error() {
    let result = unreachable_client()
        .get_entity_by_id::<Value>(&posts(), ContentId::new(1))
        .await;
    assert!(matches!(result, Err(ContentApiError::Http { .. })));
}

// ── Related content ──────────────────────────────────────────────────

#[tokio::test]
async fn related_matches_terms_and_excludes_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(raw_post(10, "source")))
        .mount(&mock_server)
        .await;

    // The backend ignores `exclude` here; the client must still drop the source.
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("categories", "2"))
        .and(query_param("tags", "7"))
        .and(query_param("tax_relation", "OR"))
        .and(query_param("exclude", "10"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            raw_post(10, "source"),
            raw_post(11, "sibling"),
            raw_post(12, "cousin")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let related = client
        .get_related_entities::<Value>(&posts(), ContentId::new(10), 2)
        .await
        .unwrap();
    let ids: Vec<_> = related.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![11]);
}

#[tokio::test]
async fn related_empty_when_source_has_no_terms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bare_post(10, "lonely")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(11, "x")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let related = client
        .get_related_entities::<Value>(&posts(), ContentId::new(10), 5)
        .await
        .unwrap();
    assert!(related.is_empty());
}

#[tokio::test]
async fn related_empty_when_source_missing_but_error_when_backend_down() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let related = client
        .get_related_entities::<Value>(&posts(), ContentId::new(10), 5)
        .await
        .unwrap();
    assert!(related.is_empty());

    let down = unreachable_client()
        .get_related_entities::<Value>(&posts(), ContentId::new(10), 5)
        .await;
    assert!(down.is_err());
}

#[tokio::test]
async fn related_listing_failure_degrades() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(raw_post(10, "source")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let related = client
        .get_related_entities::<Value>(&posts(), ContentId::new(10), 5)
        .await
        .unwrap();
    assert!(related.is_empty());
}

// ── Taxonomies ───────────────────────────────────────────────────────

#[tokio::test]
async fn terms_list_categories_and_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Uncategorized", "slug": "uncategorized", "count": 0},
            {"id": 2, "name": "News", "slug": "news", "count": 4, "description": "Updates"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/tags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let categories = client.list_categories().await;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].count, 4);
    assert_eq!(categories[1].description, "Updates");
    assert!(client.list_tags().await.is_empty());
}

#[tokio::test]
async fn terms_resolution_skips_request_for_no_slugs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.resolve_term_ids(Taxonomy::Categories, &[]).await.is_empty());
    assert!(client
        .resolve_term_ids(Taxonomy::Categories, &[" ".to_string()])
        .await
        .is_empty());
}

#[tokio::test]
async fn terms_resolution_keeps_only_requested_slugs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/tags"))
        .and(query_param("slug", "rust,go"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "slug": "rust", "name": "Rust"},
            {"id": 8, "slug": "rustacean", "name": "Rustacean"}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let ids = client
        .resolve_term_ids(Taxonomy::Tags, &["rust".to_string(), "go".to_string()])
        .await;
    assert_eq!(ids, vec![TermId::new(7)]);
}

// ── Menus ────────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_menu_returns_raw_payload() {
    let mock_server = MockServer::start().await;

    let payload = json!({"ID": 3, "items": [{"id": 1, "title": "Home", "url": "https://cms.example.com/"}]});
    Mock::given(method("GET"))
        .and(path("/wp-json/wp-api-menus/v2/menus/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(client.fetch_menu(3).await, payload);
}

#[tokio::test]
async fn fetch_menu_failure_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp-api-menus/v2/menus/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(client.fetch_menu(3).await, Value::Null);
    assert_eq!(unreachable_client().fetch_menu(3).await, Value::Null);
}

// ── Configuration ────────────────────────────────────────────────────

#[tokio::test]
async fn independent_clients_do_not_share_state() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(1, "from-first")])))
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(2, "from-second")])))
        .mount(&second)
        .await;

    let a = test_client(&first).recent::<Value>(&posts(), 1).await;
    let b = test_client(&second).recent::<Value>(&posts(), 1).await;
    assert_eq!(a[0].slug, "from-first");
    assert_eq!(b[0].slug, "from-second");
}

#[tokio::test]
async fn sub_directory_install_routes_under_its_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bare_post(1, "nested")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ContentApiConfig::parse(&format!("{}/blog", mock_server.uri())).unwrap();
    let client = ContentClient::new(config).unwrap();
    let page = client.list_entities::<Value>(&posts(), &ListOptions::default()).await;
    assert_eq!(page.items[0].slug, "nested");
}
