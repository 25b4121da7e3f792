use std::rc::Rc;

use async_trait::async_trait;

use casebook_boundary::{Article, Comment, NewComment};
use casebook_frontend_api::{PublicApi, Result};

#[async_trait(?Send)]
pub trait CommentsApi {
    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>>;
    async fn create_comment(&self, article_id: &str, comment: &NewComment) -> Result<()>;
}

#[async_trait(?Send)]
pub trait SearchApi {
    async fn search(&self, query: &str) -> Result<Vec<Article>>;
}

#[async_trait(?Send)]
impl CommentsApi for PublicApi {
    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        let list = PublicApi::comments(self, article_id).await?;
        Ok(list.comments)
    }
    async fn create_comment(&self, article_id: &str, comment: &NewComment) -> Result<()> {
        let created = PublicApi::create_comment(self, article_id, comment).await?;
        if let Some(message) = created.message {
            log::debug!("{message}");
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl SearchApi for PublicApi {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let res = PublicApi::search(self, query).await?;
        Ok(res.articles)
    }
}

#[async_trait(?Send)]
impl<T> CommentsApi for Rc<T>
where
    T: CommentsApi + ?Sized,
{
    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        (**self).comments(article_id).await
    }
    async fn create_comment(&self, article_id: &str, comment: &NewComment) -> Result<()> {
        (**self).create_comment(article_id, comment).await
    }
}

#[async_trait(?Send)]
impl<T> SearchApi for Rc<T>
where
    T: SearchApi + ?Sized,
{
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        (**self).search(query).await
    }
}
