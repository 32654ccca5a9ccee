use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

mod support;

use blog_core::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, PostCommandService, UpdatePostCommand,
};
use blog_core::application::dto::AuthenticatedUser;
use blog_core::application::error::ApplicationError;
use blog_core::domain::errors::DomainResult;
use blog_core::domain::post::services::PostSlugService;
use blog_core::domain::post::{
    Category, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostWriteRepository,
};
use blog_core::domain::user::UserId;
use blog_core::infrastructure::util::DefaultSlugGenerator;
use support::{
    FakeImageStore, InMemoryPostRead, InMemoryPostWrite, PostStore, SlugBlindPostRead,
    SteppingClock, base_time,
};

/// Hides every slug on the first lookup only, as if another writer
/// inserted it right after we checked.
struct LateWriterPostRead {
    inner: InMemoryPostRead,
    lookups: AtomicUsize,
}

#[async_trait]
impl PostReadRepository for LateWriterPostRead {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(None);
        }
        self.inner.find_by_slug(slug).await
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        self.inner.list_page(filter, limit, offset).await
    }
}

fn new_store() -> PostStore {
    Arc::new(Mutex::new(Vec::new()))
}

fn service_with(
    store: &PostStore,
    read_repo: Arc<dyn PostReadRepository>,
    images: Arc<FakeImageStore>,
) -> PostCommandService {
    let clock = Arc::new(SteppingClock::new());
    let write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(InMemoryPostWrite::new(Arc::clone(store)));
    let slug_service = Arc::new(PostSlugService::new(
        Arc::clone(&read_repo),
        Arc::new(DefaultSlugGenerator),
        clock.clone(),
    ));
    PostCommandService::new(write_repo, read_repo, slug_service, images, clock)
}

fn service(store: &PostStore) -> PostCommandService {
    service_with(
        store,
        Arc::new(InMemoryPostRead::new(Arc::clone(store))),
        Arc::new(FakeImageStore::new()),
    )
}

fn actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(Uuid::new_v4()),
        username: "ada_lovelace1".into(),
        expires_at: base_time() + Duration::hours(1),
    }
}

fn command(title: &str, category: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(Some(title.into()))
        .content(Some("body".into()))
        .category(Some(category.into()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn slugs_are_suffixed_in_order() {
    let store = new_store();
    let service = service(&store);
    let actor = actor();

    let mut slugs = Vec::new();
    for _ in 0..4 {
        let post = service
            .create_post(&actor, command("Rust Tips", "technology"))
            .await
            .unwrap();
        slugs.push(post.slug);
    }

    assert_eq!(slugs, ["rust-tips", "rust-tips-1", "rust-tips-2", "rust-tips-3"]);
}

#[tokio::test]
async fn slugs_are_lowercase_without_whitespace() {
    let store = new_store();
    let service = service(&store);

    let post = service
        .create_post(&actor(), command("  Ünïcode   AND Spaces\t", "travel"))
        .await
        .unwrap();

    assert!(!post.slug.chars().any(char::is_whitespace));
    assert_eq!(post.slug, post.slug.to_lowercase());
    assert!(!post.slug.is_empty());
}

#[tokio::test]
async fn unsluggable_title_gets_timestamp_slug() {
    let store = new_store();
    let service = service(&store);

    let post = service
        .create_post(&actor(), command("!!!", "food"))
        .await
        .unwrap();

    let stamp: i64 = post
        .slug
        .strip_prefix("post-")
        .expect("post- prefix")
        .parse()
        .expect("numeric timestamp");
    assert!(stamp >= base_time().timestamp());
}

/// 競合で挿入に失敗してもスラグを再計算して成功する
#[tokio::test]
async fn lost_slug_race_is_retried() {
    let store = new_store();
    let seed = service(&store);
    seed.create_post(&actor(), command("Race", "business"))
        .await
        .unwrap();

    let racing_read = Arc::new(LateWriterPostRead {
        inner: InMemoryPostRead::new(Arc::clone(&store)),
        lookups: AtomicUsize::new(0),
    });
    let racing = service_with(&store, racing_read, Arc::new(FakeImageStore::new()));

    let post = racing
        .create_post(&actor(), command("Race", "business"))
        .await
        .unwrap();

    assert_eq!(post.slug, "race-1");
    assert_eq!(store.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn persistent_slug_collision_is_a_conflict() {
    let store = new_store();
    service(&store)
        .create_post(&actor(), command("Stuck", "health"))
        .await
        .unwrap();

    let blind = service_with(
        &store,
        Arc::new(SlugBlindPostRead::new(Arc::clone(&store))),
        Arc::new(FakeImageStore::new()),
    );
    let err = blind
        .create_post(&actor(), command("Stuck", "health"))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(store.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_create_discards_uploaded_image() {
    let store = new_store();
    service(&store)
        .create_post(&actor(), command("Stuck", "health"))
        .await
        .unwrap();

    let images = Arc::new(FakeImageStore::new());
    let blind = service_with(
        &store,
        Arc::new(SlugBlindPostRead::new(Arc::clone(&store))),
        Arc::clone(&images),
    );
    let with_image = CreatePostCommand::builder()
        .title(Some("Stuck".into()))
        .content(Some("body".into()))
        .category(Some("health".into()))
        .image(Some("data:image/png;base64,AAAA".into()))
        .build()
        .unwrap();
    let err = blind.create_post(&actor(), with_image).await.unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(images.upload_count(), 1);
    assert_eq!(
        images.deleted(),
        vec!["https://images.test/blog/upload-1.png".to_string()]
    );
}

/// 画像を差し替えると古い画像は削除される
#[tokio::test]
async fn replacing_image_deletes_previous_one() {
    let store = new_store();
    let images = Arc::new(FakeImageStore::new());
    let service = service_with(
        &store,
        Arc::new(InMemoryPostRead::new(Arc::clone(&store))),
        Arc::clone(&images),
    );
    let owner = actor();
    let post = service
        .create_post(
            &owner,
            CreatePostCommand::builder()
                .title(Some("Scenery".into()))
                .content(Some("body".into()))
                .category(Some("travel".into()))
                .image(Some("https://example.com/first.png".into()))
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let updated = service
        .update_post(
            &owner,
            UpdatePostCommand {
                id: post.id.to_string(),
                title: None,
                content: None,
                category: None,
                image: Some("https://example.com/second.png".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(
        updated.image_url.as_deref(),
        Some("https://images.test/blog/upload-2.png")
    );
    assert_eq!(
        images.deleted(),
        vec!["https://images.test/blog/upload-1.png".to_string()]
    );
}

#[tokio::test]
async fn unknown_category_falls_back_to_default() {
    let store = new_store();
    let post = service(&store)
        .create_post(&actor(), command("Knitting", "crafts"))
        .await
        .unwrap();

    assert_eq!(post.category, Category::default());
}

#[tokio::test]
async fn update_by_other_user_is_forbidden() {
    let store = new_store();
    let service = service(&store);
    let owner = actor();
    let post = service
        .create_post(&owner, command("Owned", "food"))
        .await
        .unwrap();

    let err = service
        .update_post(
            &actor(),
            UpdatePostCommand {
                id: post.id.to_string(),
                title: Some("Stolen".into()),
                content: None,
                category: None,
                image: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(store.lock().unwrap()[0].title.as_str(), "Owned");
}

/// 不正な値でも作成者以外には 403 を返し、入力の検証より認可を優先する
#[tokio::test]
async fn invalid_update_by_other_user_is_still_forbidden() {
    let store = new_store();
    let images = Arc::new(FakeImageStore::new());
    let service = service_with(
        &store,
        Arc::new(InMemoryPostRead::new(Arc::clone(&store))),
        Arc::clone(&images),
    );
    let post = service
        .create_post(&actor(), command("Owned", "food"))
        .await
        .unwrap();

    let err = service
        .update_post(
            &actor(),
            UpdatePostCommand {
                id: post.id.to_string(),
                title: Some("   ".into()),
                content: None,
                category: None,
                image: Some("https://example.com/sneaky.png".into()),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(images.upload_count(), 0);
}

#[tokio::test]
async fn empty_update_returns_post_unchanged() {
    let store = new_store();
    let service = service(&store);
    let owner = actor();
    let post = service
        .create_post(&owner, command("Quiet", "food"))
        .await
        .unwrap();

    let same = service
        .update_post(
            &owner,
            UpdatePostCommand {
                id: post.id.to_string(),
                title: None,
                content: None,
                category: None,
                image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(same.updated_at, post.updated_at);
}

#[tokio::test]
async fn blank_update_image_is_rejected() {
    let store = new_store();
    let service = service(&store);
    let owner = actor();
    let post = service
        .create_post(&owner, command("Pictureless", "food"))
        .await
        .unwrap();

    let err = service
        .update_post(
            &owner,
            UpdatePostCommand {
                id: post.id.to_string(),
                title: None,
                content: None,
                category: None,
                image: Some("  ".into()),
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_validation());
}

#[tokio::test]
async fn delete_with_malformed_id_is_validation_error() {
    let store = new_store();
    let err = service(&store)
        .delete_post(&actor(), DeletePostCommand { id: "nope".into() })
        .await
        .unwrap_err();

    assert!(err.is_validation());
}
