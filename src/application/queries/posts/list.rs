use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, Page, PageRequest, PostDto},
        error::ApplicationResult,
    },
    domain::post::{Category, PostListFilter},
};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostDto>> {
        let filter = PostListFilter {
            category: Self::parse_category_filter(query.category.as_deref())?,
            author_id: None,
        };
        self.fetch_page(filter, PageRequest::new(query.page, query.limit))
            .await
    }

    pub async fn list_posts_by_author(
        &self,
        actor: &AuthenticatedUser,
        query: ListPostsQuery,
    ) -> ApplicationResult<Page<PostDto>> {
        let filter = PostListFilter {
            category: Self::parse_category_filter(query.category.as_deref())?,
            author_id: Some(actor.id),
        };
        self.fetch_page(filter, PageRequest::new(query.page, query.limit))
            .await
    }

    async fn fetch_page(
        &self,
        filter: PostListFilter,
        request: PageRequest,
    ) -> ApplicationResult<Page<PostDto>> {
        let (posts, total) = self
            .read_repo
            .list_page(filter, request.limit, request.offset())
            .await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(Page::new(items, request, total))
    }

    /// Unlike writes, a filter on an unknown category is a client error.
    fn parse_category_filter(raw: Option<&str>) -> ApplicationResult<Option<Category>> {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Ok(Some(value.parse()?)),
            None => Ok(None),
        }
    }
}
