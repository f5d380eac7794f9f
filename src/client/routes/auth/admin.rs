use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page::PageHeader, Loading},
    store::session::{SessionSlot, SessionStore},
    util::{load_into, use_authorized_api, use_view_resource},
    view::{admin::CommunityStats, LoadPhase},
};
use crate::model::forum::ForumPost;

#[component]
pub fn Admin() -> Element {
    let api = use_authorized_api();
    let session = use_context::<Signal<SessionStore>>();
    let posts = use_view_resource::<Vec<ForumPost>>();

    use_effect(move || {
        let Some(api) = api.clone() else {
            return;
        };

        load_into(posts, async move { api.list_posts().await });
    });

    let admin = session
        .current_session()
        .map(|session| session.username().to_string())
        .unwrap_or_default();
    let resource = posts.read();

    rsx!(
        Title { "Admin | BudgetWise" }
        header { class: "flex justify-between items-center mb-6",
            PageHeader { title: "Admin Dashboard", subtitle: "Community overview" }
            div { class: "badge badge-primary badge-lg", "Admin Access Granted" }
        }
        p { class: "mb-6", "Signed in as administrator "
            span { class: "font-semibold", "{admin}" }
        }

        match resource.data().map(|posts| CommunityStats::from_posts(posts)) {
            Some(stats) => rsx!(
                div { class: "stats shadow w-full",
                    div { class: "stat",
                        div { class: "stat-title", "Forum Posts" }
                        div { class: "stat-value", "{stats.posts}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Total Likes" }
                        div { class: "stat-value", "{stats.likes}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Active Authors" }
                        div { class: "stat-value", "{stats.authors}" }
                    }
                }
                if let Some((title, likes)) = stats.top_post.as_ref() {
                    div { class: "card shadow-sm bg-base-100 mt-6",
                        div { class: "card-body",
                            h3 { class: "card-title", "Most Liked Discussion" }
                            p { "{title}" }
                            p { class: "text-sm text-base-content/70", "{likes} likes" }
                        }
                    }
                }
            ),
            None if resource.phase() == LoadPhase::Failed => rsx!(
                p { class: "text-error", "Could not load community activity." }
            ),
            None => rsx!(Loading {}),
        }
    )
}
