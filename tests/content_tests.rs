mod common;

use std::time::Duration;

use common::*;

use content_hub::router::{NavState, Page, PageHandle};
use content_hub::pages::listing::ListingController;

async fn open_listing(
    hub: &content_hub::ContentHub,
    sink: &std::sync::Arc<RecordingSink>,
    page: Page,
) -> ListingController {
    let mut router = hub.router(sink.clone());
    match router.navigate(NavState::page(page)).await {
        PageHandle::Listing(listing) => listing,
        _ => panic!("expected a listing controller for {page}"),
    }
}

#[tokio::test]
async fn listing_shows_published_items_only() {
    let hub = test_hub();
    seed_blog(&hub, "Shipped Post", "Body", &[], true).await;
    seed_blog(&hub, "Secret Draft", "Body", &[], false).await;

    let sink = RecordingSink::new();
    open_listing(&hub, &sink, Page::Blogs).await;

    let html = sink.last_content().expect("listing should render");
    assert!(html.contains("Shipped Post"));
    assert!(!html.contains("Secret Draft"), "drafts must stay hidden");
    assert!(html.contains("Search blogs..."));
    assert!(html.contains("All Categories"));
}

#[tokio::test]
async fn empty_listing_renders_the_placeholder() {
    let hub = test_hub();
    let sink = RecordingSink::new();
    open_listing(&hub, &sink, Page::Videos).await;

    let html = sink.last_content().expect("listing should render");
    assert!(html.contains("No videos yet. Check back soon!"));
}

#[tokio::test(start_paused = true)]
async fn search_filters_after_the_debounce_window() {
    let hub = test_hub();
    let rust_id = seed_blog(&hub, "Rust Patterns", "Traits and enums", &["technology"], true).await;
    seed_blog(&hub, "Garden Notes", "Tomatoes", &["lifestyle"], true).await;

    let sink = RecordingSink::new();
    let listing = open_listing(&hub, &sink, Page::Blogs).await;

    listing.set_search("rust");
    assert!(
        sink.visibility_updates().is_empty(),
        "no filter pass before the debounce window elapses"
    );

    tokio::time::sleep(Duration::from_millis(400)).await;

    let updates = sink.visibility_updates();
    assert_eq!(updates.len(), 1);
    let (visible, no_results) = &updates[0];
    assert_eq!(visible, &vec![rust_id]);
    assert!(!no_results);
}

#[tokio::test(start_paused = true)]
async fn a_newer_keystroke_cancels_the_pending_pass() {
    let hub = test_hub();
    seed_blog(&hub, "Rust Patterns", "Body", &[], true).await;

    let sink = RecordingSink::new();
    let listing = open_listing(&hub, &sink, Page::Blogs).await;

    listing.set_search("rust");
    listing.set_search("zzz-no-match");
    tokio::time::sleep(Duration::from_millis(400)).await;

    let updates = sink.visibility_updates();
    assert_eq!(updates.len(), 1, "the superseded pass must not fire");
    let (visible, no_results) = &updates[0];
    assert!(visible.is_empty());
    assert!(*no_results);
}

#[tokio::test]
async fn video_category_filter_matches_exactly() {
    let hub = test_hub();
    let tutorial_id = seed_video(&hub, "Intro", "tutorial", true).await;
    seed_video(&hub, "Late Show", "entertainment", true).await;

    let sink = RecordingSink::new();
    let listing = open_listing(&hub, &sink, Page::Videos).await;

    listing.set_category("tutorial");
    let updates = sink.visibility_updates();
    assert_eq!(updates.len(), 1, "category changes filter immediately");
    assert_eq!(updates[0].0, vec![tutorial_id]);
}

#[tokio::test]
async fn blog_category_filter_matches_tags() {
    let hub = test_hub();
    let tech_id = seed_blog(&hub, "Compilers", "Body", &["Technology", "rust"], true).await;
    seed_blog(&hub, "Sourdough", "Body", &["health"], true).await;

    let sink = RecordingSink::new();
    let listing = open_listing(&hub, &sink, Page::Blogs).await;

    listing.set_category("technology");
    let updates = sink.visibility_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, vec![tech_id]);
}

#[tokio::test]
async fn filtering_is_idempotent() {
    let hub = test_hub();
    seed_blog(&hub, "Only Post", "Body", &["health"], true).await;

    let sink = RecordingSink::new();
    let listing = open_listing(&hub, &sink, Page::Blogs).await;

    listing.set_category("technology");
    listing.apply();

    let updates = sink.visibility_updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0], updates[1], "same inputs, same visibility patch");
    assert!(updates[0].1, "no-results flag set while nothing matches");

    listing.set_category("");
    let updates = sink.visibility_updates();
    let (visible, no_results) = updates.last().expect("a third pass");
    assert_eq!(visible.len(), 1);
    assert!(!no_results, "flag clears once a card matches again");
}

#[tokio::test]
async fn blog_detail_renders_content_and_share_links() {
    let hub = test_hub();
    let id = seed_blog(
        &hub,
        "Deep Dive",
        "# Heading\n\nFirst paragraph.\n\n- one\n- two",
        &["rust"],
        true,
    )
    .await;

    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());
    router.navigate(NavState::detail(Page::Blogs, id.clone())).await;

    let html = sink.last_content().expect("detail should render");
    assert!(html.contains("Deep Dive"));
    assert!(html.contains("<h2>Heading</h2>"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains("Back to All Blogs"));
    assert!(html.contains("facebook.com/sharer"));
    assert!(html.contains("linkedin.com/shareArticle"));
    assert!(
        html.contains(&format!("%2Fblogs%2F{id}")),
        "share URL must be percent-encoded"
    );
}

#[tokio::test]
async fn video_detail_embeds_the_provider_player() {
    let hub = test_hub();
    let id = seed_video(&hub, "Intro", "tutorial", true).await;

    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());
    router.navigate(NavState::detail(Page::Videos, id)).await;

    let html = sink.last_content().expect("detail should render");
    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    assert!(html.contains("Tutorial"), "category label shown in metadata");
    assert!(!html.contains("linkedin.com"), "videos share to two networks");
}

#[tokio::test]
async fn unknown_video_provider_renders_an_error_block() {
    let hub = test_hub();
    let id = seed_video(&hub, "Mystery", "tutorial", true).await;
    let mut fields = serde_json::Map::new();
    fields.insert(
        "video_type".to_string(),
        serde_json::Value::String("dailymotion".to_string()),
    );
    hub.store.update("videos", &id, fields).await.unwrap();

    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());
    router.navigate(NavState::detail(Page::Videos, id)).await;

    let html = sink.last_content().expect("detail should render");
    assert!(html.contains("Unsupported video type."));
    assert!(!html.contains("<iframe"));
}

#[tokio::test]
async fn store_failures_surface_the_backend_message() {
    let hub = failing_hub();
    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());

    router.navigate(NavState::detail(Page::Blogs, "any")).await;
    let html = sink.last_content().expect("detail should still render");
    assert!(
        html.contains(BACKEND_FAILURE),
        "detail error must carry the underlying message"
    );
    assert!(html.contains("Error loading blog post"));
    assert!(html.contains("Back to All Blogs"));

    sink.clear();
    router.navigate(NavState::page(Page::Videos)).await;
    let html = sink.last_content().expect("listing should still render");
    assert!(
        html.contains(BACKEND_FAILURE),
        "listing error must carry the underlying message"
    );
}

#[tokio::test]
async fn video_cards_carry_a_provider_thumbnail() {
    let hub = test_hub();
    seed_video(&hub, "Intro", "tutorial", true).await;

    let sink = RecordingSink::new();
    open_listing(&hub, &sink, Page::Videos).await;

    let html = sink.last_content().expect("listing should render");
    assert!(html.contains("video-thumbnail"));
    assert!(html.contains("#202020"), "youtube gets its provider color");
}

#[tokio::test]
async fn blog_cards_have_no_thumbnail_block() {
    let hub = test_hub();
    seed_blog(&hub, "Plain Post", "Body", &[], true).await;

    let sink = RecordingSink::new();
    open_listing(&hub, &sink, Page::Blogs).await;

    let html = sink.last_content().expect("listing should render");
    assert!(html.contains("Plain Post"));
    assert!(!html.contains("video-thumbnail"));
}

#[tokio::test]
async fn missing_detail_renders_not_found_with_back_control() {
    let hub = test_hub();
    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());

    router.navigate(NavState::detail(Page::Blogs, "gone")).await;

    let html = sink.last_content().expect("page should still render");
    assert!(html.contains("Blog post not found!"));
    assert!(html.contains("Back to All Blogs"));
}

#[tokio::test]
async fn home_page_shows_stats_and_featured_content() {
    let hub = test_hub();
    sign_in_admin(&hub).await;
    seed_blog(&hub, "Visible Post", "Body", &[], true).await;
    seed_blog(&hub, "Hidden Draft", "Body", &[], false).await;
    seed_video(&hub, "Visible Video", "tutorial", true).await;

    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());
    router.start("/").await;

    let html = sink.last_content().expect("home should render");
    assert!(html.contains("Visible Post"));
    assert!(html.contains("Visible Video"));
    assert!(!html.contains("Hidden Draft"));
    // 1 published blog, 1 published video, 1 registered member.
    assert!(html.contains(r#"<span class="stat-value">1</span>"#));
}

#[tokio::test]
async fn home_featured_is_capped_at_three() {
    let hub = test_hub();
    for i in 0..5 {
        seed_blog(&hub, &format!("Post {i}"), "Body", &[], true).await;
    }

    let sink = RecordingSink::new();
    let mut router = hub.router(sink.clone());
    router.start("/").await;

    let html = sink.last_content().expect("home should render");
    // Newest first, capped at three.
    assert!(html.contains("Post 4"));
    assert!(html.contains("Post 3"));
    assert!(html.contains("Post 2"));
    assert!(!html.contains("Post 1"));
    assert!(!html.contains("Post 0"));
}
