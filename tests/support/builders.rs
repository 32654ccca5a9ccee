// tests/support/builders.rs
use std::sync::{Arc, Mutex};

use axum::Router;
use blog_core::application::ports::{
    ClockPort, ImageStorePort, PasswordHasherPort, SlugGeneratorPort, TokenManagerPort,
};
use blog_core::application::services::ApplicationServices;
use blog_core::domain::post::{PostReadRepository, PostWriteRepository};
use blog_core::domain::user::UserRepository;
use blog_core::infrastructure::security::token::JwtTokenManager;
use blog_core::infrastructure::util::DefaultSlugGenerator;
use blog_core::presentation::http::routes::build_router_with_rate_limiter;
use blog_core::presentation::http::state::{HttpSettings, HttpState};

use super::mocks::{
    FakeImageStore, InMemoryPostRead, InMemoryPostWrite, InMemoryUserRepo, PlainPasswordHasher,
    PostStore, SteppingClock, TEST_JWT_SECRET,
};

pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// A router over in-memory storage, plus handles on that storage so tests
/// can look behind the HTTP surface.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepo>,
    pub posts: PostStore,
    pub images: Arc<FakeImageStore>,
}

pub struct ServicesBuilder {
    users: Arc<InMemoryUserRepo>,
    posts: PostStore,
    images: Arc<FakeImageStore>,
    clock: Arc<SteppingClock>,
}

impl ServicesBuilder {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            posts: Arc::new(Mutex::new(Vec::new())),
            images: Arc::new(FakeImageStore::new()),
            clock: Arc::new(SteppingClock::new()),
        }
    }

    pub fn build(self) -> (ApplicationServices, TestApp) {
        let user_repo: Arc<dyn UserRepository> = self.users.clone();
        let post_write: Arc<dyn PostWriteRepository> =
            Arc::new(InMemoryPostWrite::new(Arc::clone(&self.posts)));
        let post_read: Arc<dyn PostReadRepository> =
            Arc::new(InMemoryPostRead::new(Arc::clone(&self.posts)));
        let clock: Arc<ClockPort> = self.clock.clone();
        let hasher: Arc<PasswordHasherPort> = Arc::new(PlainPasswordHasher);
        let tokens: Arc<TokenManagerPort> = Arc::new(JwtTokenManager::new(
            TEST_JWT_SECRET,
            TOKEN_TTL_SECONDS,
            Arc::clone(&clock),
        ));
        let images: Arc<ImageStorePort> = self.images.clone();
        let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

        let services = ApplicationServices::new(
            user_repo, post_write, post_read, hasher, tokens, images, clock, slugger,
        );

        let handles = TestApp {
            router: Router::new(),
            users: self.users,
            posts: self.posts,
            images: self.images,
        };
        (services, handles)
    }
}

impl Default for ServicesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the full router without the per-IP limiter, which needs a peer
/// address `oneshot` requests do not carry.
pub fn test_app() -> TestApp {
    let (services, mut app) = ServicesBuilder::new().build();
    let state = HttpState {
        services: Arc::new(services),
        settings: Arc::new(HttpSettings {
            secure_cookies: false,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }),
    };
    app.router = build_router_with_rate_limiter(state, false);
    app
}
