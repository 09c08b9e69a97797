//! Root Controller
//!
//! [`BlogApp`] owns the application state, runs every user action against the
//! service clients and the session store, and notifies subscribers after each
//! state change commits.
//!
//! Operations take `&self`; state lives in a `RefCell` that is never borrowed
//! across an `.await`, so a host can share the controller behind an `Rc` and
//! start operations from independent event handlers.

use std::cell::{Ref, RefCell};

use crate::error::{AppError, AppResult};
use crate::models::{AuthToken, Blog, BlogDraft, User};
use crate::notification::MessageTicket;
use crate::services::{BlogService, LoginService};
use crate::session::SessionStore;
use crate::state::AppState;
use crate::view::{self, View};

/// Shown when login fails for any reason
pub const WRONG_CREDENTIALS: &str = "Wrong Username or Password";

/// Shown when blog creation fails for any reason
pub const CREATE_FAILED: &str = "Error could not create blog";

type Listener = Box<dyn Fn(&AppState)>;

pub struct BlogApp<B, L, S> {
    blog_service: B,
    login_service: L,
    sessions: S,
    state: RefCell<AppState>,
    listeners: RefCell<Vec<Listener>>,
}

impl<B, L, S> BlogApp<B, L, S>
where
    B: BlogService,
    L: LoginService,
    S: SessionStore,
{
    pub fn new(blog_service: B, login_service: L, sessions: S) -> Self {
        Self {
            blog_service,
            login_service,
            sessions,
            state: RefCell::new(AppState::default()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback run with the committed state after every change.
    ///
    /// Listeners must not call back into the controller's mutating
    /// operations synchronously.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Borrow the current state
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    /// Compose what to display right now
    pub fn view(&self) -> View {
        view::render(&self.state.borrow())
    }

    fn commit<R>(&self, change: impl FnOnce(&mut AppState) -> R) -> R {
        let result = change(&mut self.state.borrow_mut());

        let state = self.state.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
        result
    }

    fn show_message(&self, text: impl Into<String>) -> MessageTicket {
        let text = text.into();
        self.commit(|state| state.notifier.show(text))
    }

    fn token(&self) -> AppResult<AuthToken> {
        self.state
            .borrow()
            .user
            .as_ref()
            .map(User::auth_token)
            .ok_or(AppError::NotAuthenticated)
    }

    /// Restore the stored session and fetch the blog list.
    ///
    /// The two are independent: a failed fetch keeps the restored session.
    pub async fn bootstrap(&self) -> AppResult<()> {
        self.restore_session();
        self.load_blogs().await
    }

    /// Read the session store into the current user.
    ///
    /// A corrupt record is removed and treated as logged out.
    pub fn restore_session(&self) -> Option<User> {
        let user = match self.sessions.load() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session");
                if let Err(e) = self.sessions.remove() {
                    tracing::warn!(error = %e, "Failed to remove unreadable session");
                }
                None
            }
        };

        if let Some(user) = &user {
            tracing::info!(username = %user.username, "Restored session");
            let restored = user.clone();
            self.commit(|state| state.user = Some(restored));
        }
        user
    }

    /// Replace the in-memory list with the service's
    pub async fn load_blogs(&self) -> AppResult<()> {
        let blogs = self.blog_service.get_all().await?;
        tracing::info!(count = blogs.len(), "Loaded blogs");
        self.commit(|state| state.blogs = blogs);
        Ok(())
    }

    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.commit(|state| state.username = username);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.commit(|state| state.password = password);
    }

    /// Log in with the pending username and password.
    ///
    /// On failure the fixed wrong-credentials message is shown and the
    /// underlying error is returned; nothing else changes.
    pub async fn login(&self) -> AppResult<User> {
        let credentials = self.state.borrow().credentials();

        let user = match self.login_service.login(&credentials).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "Login failed");
                self.show_message(WRONG_CREDENTIALS);
                return Err(e.into());
            }
        };

        if let Err(e) = self.sessions.save(&user) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        tracing::info!(username = %user.username, "Logged in");
        let logged_in = user.clone();
        self.commit(|state| {
            state.user = Some(logged_in);
            state.username.clear();
            state.password.clear();
        });
        Ok(user)
    }

    /// Forget the current user here and in the session store
    pub fn logout(&self) {
        if let Err(e) = self.sessions.remove() {
            tracing::warn!(error = %e, "Failed to clear session");
        }
        tracing::info!("Logged out");
        self.commit(|state| state.user = None);
    }

    /// Open or close the blog creation panel
    pub fn toggle_blog_form(&self) {
        self.commit(|state| state.blog_form_open = !state.blog_form_open);
    }

    /// Create a blog and append it, owned by the current user.
    ///
    /// The list is not re-fetched; the created blog is merged with the
    /// current user's public identity instead.
    pub async fn add_blog(&self, draft: BlogDraft) -> AppResult<Blog> {
        let (token, owner) = {
            let state = self.state.borrow();
            match &state.user {
                Some(user) => (user.auth_token(), user.owner()),
                None => return Err(AppError::NotAuthenticated),
            }
        };

        let created = match self.blog_service.create(&token, &draft).await {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(title = %draft.title, error = %e, "Failed to create blog");
                self.show_message(CREATE_FAILED);
                return Err(e.into());
            }
        };

        let blog = Blog {
            user: Some(owner.into()),
            ..created
        };
        tracing::info!(id = %blog.id, title = %blog.title, "Created blog");

        let appended = blog.clone();
        self.commit(|state| {
            state.blogs.push(appended);
            state.blog_form_open = false;
        });
        self.show_message(format!("A new blog {} By {}", blog.title, blog.author));
        Ok(blog)
    }

    /// Add one like to the blog with `id`.
    ///
    /// The count is bumped locally before the update is sent, so overlapping
    /// likes on one blog each send a distinct count. An unknown id fails with
    /// [`AppError::BlogNotFound`] before any service call. A failed update
    /// takes its like back.
    pub async fn add_like(&self, id: &str) -> AppResult<Blog> {
        if self.state.borrow().find_blog(id).is_none() {
            return Err(AppError::BlogNotFound(id.to_string()));
        }
        let token = self.token()?;

        let liked = self
            .commit(|state| state.like_blog(id))
            .ok_or_else(|| AppError::BlogNotFound(id.to_string()))?;

        if let Err(e) = self.blog_service.update(&token, id, &liked).await {
            tracing::warn!(id, error = %e, "Failed to like blog");
            self.commit(|state| state.unlike_blog(id));
            return Err(e.into());
        }

        tracing::debug!(id, likes = liked.likes, "Liked blog");
        Ok(liked)
    }

    /// Delete the blog with `id` once `confirm` agrees.
    ///
    /// `confirm` receives the prompt naming the blog's title and author.
    /// Returns whether the blog was deleted.
    pub async fn remove_blog(
        &self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> AppResult<bool> {
        let prompt = {
            let state = self.state.borrow();
            let blog = state
                .find_blog(id)
                .ok_or_else(|| AppError::BlogNotFound(id.to_string()))?;
            format!("Remove Blog {} By {}", blog.title, blog.author)
        };

        if !confirm(&prompt) {
            return Ok(false);
        }

        let token = self.token()?;
        self.blog_service.remove(&token, id).await?;

        tracing::info!(id, "Removed blog");
        self.commit(|state| state.remove_blog(id));
        Ok(true)
    }

    /// Clear the message shown under `ticket`, if it is still the current one
    pub fn expire_message(&self, ticket: MessageTicket) -> bool {
        let current = self
            .state
            .borrow()
            .notifier
            .current()
            .map(|m| m.ticket == ticket)
            .unwrap_or(false);

        current && self.commit(|state| state.notifier.expire(ticket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::models::{AuthToken, BlogOwner, Credentials, Owner};
    use crate::session::MemorySessionStore;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeBlogs {
        stored: RefCell<Vec<Blog>>,
        calls: RefCell<Vec<String>>,
        fail_writes: Cell<bool>,
        next_id: Cell<u32>,
    }

    impl FakeBlogs {
        fn with(blogs: Vec<Blog>) -> Rc<Self> {
            Rc::new(Self {
                stored: RefCell::new(blogs),
                ..Default::default()
            })
        }

        fn stored_likes(&self, id: &str) -> Option<u64> {
            self.stored.borrow().iter().find(|b| b.id == id).map(|b| b.likes)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn write_result(&self) -> Result<(), ServiceError> {
            if self.fail_writes.get() {
                Err(ServiceError::Status {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl BlogService for Rc<FakeBlogs> {
        async fn get_all(&self) -> Result<Vec<Blog>, ServiceError> {
            self.calls.borrow_mut().push("get_all".to_string());
            Ok(self.stored.borrow().clone())
        }

        async fn create(&self, token: &AuthToken, draft: &BlogDraft) -> Result<Blog, ServiceError> {
            self.calls.borrow_mut().push(format!("create {}", token.0));
            self.write_result()?;
            self.next_id.set(self.next_id.get() + 1);
            let blog = Blog {
                id: format!("new{}", self.next_id.get()),
                title: draft.title.clone(),
                author: draft.author.clone(),
                url: draft.url.clone(),
                likes: 0,
                user: None,
            };
            self.stored.borrow_mut().push(blog.clone());
            Ok(blog)
        }

        async fn update(
            &self,
            token: &AuthToken,
            id: &str,
            blog: &Blog,
        ) -> Result<Blog, ServiceError> {
            self.calls.borrow_mut().push(format!("update {} {}", id, token.0));
            // Suspend like a real request so overlapping calls interleave
            tokio::task::yield_now().await;
            self.write_result()?;
            if let Some(slot) = self.stored.borrow_mut().iter_mut().find(|b| b.id == id) {
                *slot = blog.clone();
            }
            Ok(blog.clone())
        }

        async fn remove(&self, token: &AuthToken, id: &str) -> Result<(), ServiceError> {
            self.calls.borrow_mut().push(format!("remove {} {}", id, token.0));
            self.write_result()
        }
    }

    struct FakeLogin;

    #[async_trait(?Send)]
    impl LoginService for FakeLogin {
        async fn login(&self, credentials: &Credentials) -> Result<User, ServiceError> {
            if credentials.username == "root" && credentials.password == "sekret" {
                Ok(root())
            } else {
                Err(ServiceError::Status {
                    status: 401,
                    message: "invalid username or password".to_string(),
                })
            }
        }
    }

    type TestApp = BlogApp<Rc<FakeBlogs>, FakeLogin, Rc<MemorySessionStore>>;

    fn root() -> User {
        User {
            username: "root".to_string(),
            name: "Superuser".to_string(),
            id: "u1".to_string(),
            token: "t0k3n".to_string(),
        }
    }

    fn blog(id: &str, likes: u64) -> Blog {
        Blog {
            id: id.to_string(),
            title: format!("Title {}", id),
            author: format!("Author {}", id),
            url: format!("http://example.test/{}", id),
            likes,
            user: Some(Owner::Embedded(BlogOwner {
                username: "hellas".to_string(),
                name: "Arto Hellas".to_string(),
                id: "u2".to_string(),
            })),
        }
    }

    fn app_with(blogs: Vec<Blog>) -> (TestApp, Rc<FakeBlogs>, Rc<MemorySessionStore>) {
        let service = FakeBlogs::with(blogs);
        let sessions = Rc::new(MemorySessionStore::new());
        let app = BlogApp::new(service.clone(), FakeLogin, sessions.clone());
        (app, service, sessions)
    }

    async fn logged_in_app(blogs: Vec<Blog>) -> (TestApp, Rc<FakeBlogs>, Rc<MemorySessionStore>) {
        let (app, service, sessions) = app_with(blogs);
        app.bootstrap().await.unwrap();
        app.set_username("root");
        app.set_password("sekret");
        app.login().await.unwrap();
        (app, service, sessions)
    }

    fn display_order(app: &TestApp) -> Vec<String> {
        match app.view() {
            View::Blogs(view) => view.blogs.into_iter().map(|i| i.blog.id).collect(),
            View::Login(_) => panic!("expected blogs view"),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_without_session() {
        let (app, service, _) = app_with(vec![blog("1", 3)]);

        app.bootstrap().await.unwrap();

        assert!(app.state().user.is_none());
        assert_eq!(app.state().blogs.len(), 1);
        assert_eq!(service.calls(), vec!["get_all"]);
        assert!(matches!(app.view(), View::Login(_)));
    }

    #[tokio::test]
    async fn test_bootstrap_restores_session() {
        let (app, service, sessions) = app_with(vec![blog("1", 3)]);
        sessions.save(&root()).unwrap();

        app.bootstrap().await.unwrap();
        assert_eq!(app.state().user, Some(root()));

        // The restored token is used for later calls
        app.add_like("1").await.unwrap();
        assert!(service.calls().contains(&"update 1 t0k3n".to_string()));
    }

    #[tokio::test]
    async fn test_bootstrap_discards_corrupt_session() {
        let service = FakeBlogs::with(vec![]);
        let sessions = Rc::new(MemorySessionStore::with_record("not a user"));
        let app = BlogApp::new(service, FakeLogin, sessions.clone());

        app.bootstrap().await.unwrap();

        assert!(app.state().user.is_none());
        assert!(sessions.read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_success() {
        let (app, _, sessions) = app_with(vec![]);
        app.set_username("root");
        app.set_password("sekret");

        let user = app.login().await.unwrap();

        assert_eq!(user, root());
        let state = app.state();
        assert_eq!(state.user, Some(root()));
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert!(state.message().is_none());
        assert_eq!(sessions.load().unwrap(), Some(root()));
    }

    #[tokio::test]
    async fn test_login_failure_shows_message_until_expiry() {
        let (app, _, sessions) = app_with(vec![]);
        app.set_username("root");
        app.set_password("wrong");

        let err = app.login().await.unwrap_err();
        assert!(matches!(err, AppError::Service(ref e) if e.is_unauthorized()));

        let ticket = {
            let state = app.state();
            assert!(state.user.is_none());
            assert_eq!(state.message(), Some(WRONG_CREDENTIALS));
            assert_eq!(state.username, "root");
            state.notifier.current().unwrap().ticket
        };
        assert!(sessions.load().unwrap().is_none());

        assert!(app.expire_message(ticket));
        assert!(app.state().message().is_none());
    }

    #[tokio::test]
    async fn test_older_timer_does_not_clear_newer_message() {
        let (app, _, _) = app_with(vec![]);
        app.set_username("nobody");

        app.login().await.unwrap_err();
        let first = app.state().notifier.current().unwrap().ticket;
        app.login().await.unwrap_err();
        let second = app.state().notifier.current().unwrap().ticket;

        assert!(!app.expire_message(first));
        assert_eq!(app.state().message(), Some(WRONG_CREDENTIALS));
        assert!(app.expire_message(second));
        assert!(app.state().message().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_user_and_session() {
        let (app, service, sessions) = logged_in_app(vec![]).await;

        app.logout();

        assert!(app.state().user.is_none());
        assert!(sessions.load().unwrap().is_none());

        // A reload does not restore the prior session
        let reloaded = BlogApp::new(service, FakeLogin, sessions);
        reloaded.bootstrap().await.unwrap();
        assert!(reloaded.state().user.is_none());
    }

    #[tokio::test]
    async fn test_add_blog_appends_owned_blog_and_closes_panel() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;
        app.toggle_blog_form();
        assert!(app.state().blog_form_open);

        let draft = BlogDraft {
            title: "Go To Statement Considered Harmful".to_string(),
            author: "Edsger W. Dijkstra".to_string(),
            url: "http://example.test/goto".to_string(),
        };
        let created = app.add_blog(draft).await.unwrap();

        let state = app.state();
        assert_eq!(state.blogs.len(), 2);
        assert_eq!(state.blogs.last(), Some(&created));
        assert_eq!(created.user, Some(Owner::Embedded(root().owner())));
        assert!(!state.blog_form_open);
        assert_eq!(
            state.message(),
            Some("A new blog Go To Statement Considered Harmful By Edsger W. Dijkstra")
        );
        assert!(service.calls().contains(&"create t0k3n".to_string()));
    }

    #[tokio::test]
    async fn test_add_blog_failure_shows_generic_message() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;
        app.toggle_blog_form();
        service.fail_writes.set(true);

        assert!(app.add_blog(BlogDraft::default()).await.is_err());

        let state = app.state();
        assert_eq!(state.blogs.len(), 1);
        assert_eq!(state.message(), Some(CREATE_FAILED));
        assert!(state.blog_form_open);
    }

    #[tokio::test]
    async fn test_add_blog_requires_login() {
        let (app, service, _) = app_with(vec![]);

        let err = app.add_blog(BlogDraft::default()).await.unwrap_err();

        assert!(matches!(err, AppError::NotAuthenticated));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_like_scenario() {
        let (app, _, _) = logged_in_app(vec![blog("1", 3), blog("2", 5)]).await;
        assert_eq!(display_order(&app), vec!["2", "1"]);

        let liked = app.add_like("1").await.unwrap();

        assert_eq!(liked.likes, 4);
        let likes: Vec<_> = app.state().blogs.iter().map(|b| (b.id.clone(), b.likes)).collect();
        assert_eq!(likes, vec![("1".to_string(), 4), ("2".to_string(), 5)]);
        assert_eq!(display_order(&app), vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_overlapping_likes_both_count() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;

        let (first, second) = tokio::join!(app.add_like("1"), app.add_like("1"));

        let mut sent = vec![first.unwrap().likes, second.unwrap().likes];
        sent.sort();
        assert_eq!(sent, vec![4, 5]);
        assert_eq!(app.state().blogs[0].likes, 5);
        assert_eq!(service.stored_likes("1"), Some(5));
    }

    #[tokio::test]
    async fn test_add_like_unknown_id() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;
        let before = service.calls().len();

        let err = app.add_like("gone").await.unwrap_err();

        assert!(matches!(err, AppError::BlogNotFound(ref id) if id == "gone"));
        assert_eq!(service.calls().len(), before);
    }

    #[tokio::test]
    async fn test_add_like_failure_leaves_list_unchanged() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;
        service.fail_writes.set(true);

        assert!(app.add_like("1").await.is_err());
        assert_eq!(app.state().blogs[0].likes, 3);
        assert_eq!(service.stored_likes("1"), Some(3));
    }

    #[tokio::test]
    async fn test_remove_blog_confirmed() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3), blog("2", 5)]).await;
        let mut asked = String::new();

        let removed = app
            .remove_blog("1", |prompt| {
                asked = prompt.to_string();
                true
            })
            .await
            .unwrap();

        assert!(removed);
        assert_eq!(asked, "Remove Blog Title 1 By Author 1");
        assert!(app.state().find_blog("1").is_none());
        assert!(service.calls().contains(&"remove 1 t0k3n".to_string()));
    }

    #[tokio::test]
    async fn test_remove_blog_declined() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3), blog("2", 5)]).await;
        let before = service.calls().len();

        let removed = app.remove_blog("1", |_| false).await.unwrap();

        assert!(!removed);
        assert_eq!(app.state().blogs.len(), 2);
        assert_eq!(service.calls().len(), before);
    }

    #[tokio::test]
    async fn test_remove_blog_failure_keeps_entry() {
        let (app, service, _) = logged_in_app(vec![blog("1", 3)]).await;
        service.fail_writes.set(true);

        assert!(app.remove_blog("1", |_| true).await.is_err());
        assert_eq!(app.state().blogs.len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_commit() {
        let (app, _, _) = app_with(vec![blog("1", 3)]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_listener = seen.clone();
        app.subscribe(move |state| seen_in_listener.borrow_mut().push(state.blogs.len()));

        app.bootstrap().await.unwrap();
        app.set_username("root");

        assert_eq!(*seen.borrow(), vec![1, 1]);
    }
}
