use api::{Activity, ApiClient, ApiError, Like, Post, User};
use dioxus::prelude::*;
use ui::components::{Avatar, Tabs};
use ui::{use_api, use_refreshing_resource, ActivityCard, PostCard};

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    user: User,
    posts: Vec<Post>,
    activities: Vec<Activity>,
    likes: Vec<Like>,
}

/// Fetches the four parts of a profile concurrently. Any failure fails the
/// whole profile; an unknown user is `Ok(None)`.
async fn load_profile(api: &ApiClient, username: &str) -> Result<Option<Profile>, ApiError> {
    let (user, posts, activities, likes) = futures::join!(
        api.user(username),
        api.user_posts(username),
        api.user_activities(username),
        api.user_likes(username),
    );
    let Some(user) = user? else {
        return Ok(None);
    };
    Ok(Some(Profile {
        user,
        posts: posts?,
        activities: activities?,
        likes: likes?,
    }))
}

#[component]
pub fn UserPage(username: ReadSignal<String>) -> Element {
    let api = use_api();
    let mut tab = use_signal(|| 0usize);

    // Refetched when the route changes or something new is created
    let profile = use_refreshing_resource(move || {
        let api = api.clone();
        let username = username();
        async move {
            load_profile(&api, &username).await.map_err(|e| {
                tracing::error!("loading profile of {username} failed: {e}");
                e.user_message("Could not load this profile")
            })
        }
    });

    let state = profile.read().clone();
    rsx! {
        div { class: "page-narrow",
            if let Some(Ok(Some(profile))) = &state {
                ProfileView { profile: profile.clone(), tab: tab(), on_tab: move |i| tab.set(i) }
            } else if let Some(Ok(None)) = &state {
                div { class: "centered",
                    h1 { "No such user" }
                    p { class: "muted", "@{username}" }
                }
            } else if let Some(Err(message)) = &state {
                p { class: "form-error", "{message}" }
            } else {
                p { class: "muted", "Loading..." }
            }
        }
    }
}

#[component]
fn ProfileView(profile: Profile, tab: usize, on_tab: EventHandler<usize>) -> Element {
    let user = &profile.user;
    let labels = vec![
        format!("Posts ({})", profile.posts.len()),
        format!("Activities ({})", profile.activities.len()),
    ];

    rsx! {
        div { class: "profile-summary",
            Avatar {
                picture: user.picture().map(str::to_string),
                initials: user.initials(),
                size: 72,
            }
            div {
                h1 { "{user.display_name}" }
                p { class: "muted", "@{user.username}" }
                p { class: "muted", "{profile.likes.len()} likes" }
            }
        }
        Tabs { labels, active: tab, on_select: on_tab }
        if tab == 0 {
            if profile.posts.is_empty() {
                p { class: "muted", "No posts yet." }
            }
            for post in profile.posts.iter().cloned() {
                PostCard { key: "{post.id}", post: post.clone() }
            }
        } else {
            if profile.activities.is_empty() {
                p { class: "muted", "No activities yet." }
            }
            div { class: "card-list",
                for activity in profile.activities.iter().cloned() {
                    ActivityCard { key: "{activity.id()}", activity: activity.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::StaticCookies;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::config::ApiConfig;

    use super::*;

    async fn client_for(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(
            &format!("http://{addr}"),
            &ApiConfig::default(),
            Arc::new(StaticCookies::new("csrftoken=t")),
        )
    }

    fn backend(user: Value, activities_status: StatusCode) -> Router {
        Router::new()
            .route(
                "/api/users/{name}",
                get(move || async move { Json(json!({ "data": user })) }),
            )
            .route("/api/posts/user/{name}", get(|| async { Json(json!({"data": []})) }))
            .route(
                "/api/super/user/{name}",
                get(move || async move { (activities_status, Json(json!({"data": []}))) }),
            )
            .route(
                "/api/likes/user/{name}",
                get(|| async { Json(json!({"data": [{"user": 1, "post": 4}]})) }),
            )
    }

    fn jdoe() -> Value {
        json!({"id": 1, "username": "jdoe", "display_name": "Jane Doe"})
    }

    #[tokio::test]
    async fn test_profile_loads_all_parts() {
        let api = client_for(backend(jdoe(), StatusCode::OK)).await;
        let profile = load_profile(&api, "jdoe").await.unwrap().unwrap();
        assert_eq!(profile.user.username, "jdoe");
        assert!(profile.posts.is_empty());
        assert_eq!(profile.likes, vec![Like { user: 1, post: 4 }]);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let api = client_for(backend(json!({}), StatusCode::OK)).await;
        assert_eq!(load_profile(&api, "ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_any_failure_fails_profile() {
        let router = backend(jdoe(), StatusCode::INTERNAL_SERVER_ERROR);
        let api = client_for(router).await;
        assert!(load_profile(&api, "jdoe").await.is_err());
    }
}
