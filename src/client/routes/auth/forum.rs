use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleUser, FaComment, FaHeart, FaPaperPlane};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{page::PageHeader, Loading},
    util::{load_into, use_authorized_api, use_view_resource},
    view::{
        forum::{
            comment_request, record_like, ForumThreads, PostDraft, ThreadToggle, MAX_TITLE_CHARS,
        },
        write_then_reload, LoadPhase,
    },
};
use crate::model::forum::{ForumComment, ForumPost};

#[component]
pub fn Forum() -> Element {
    let api = use_authorized_api();
    let posts = use_view_resource::<Vec<ForumPost>>();
    let mut threads = use_signal(ForumThreads::default);
    let mut draft = use_signal(PostDraft::default);
    let mut form_error = use_signal(|| None::<String>);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };

            load_into(posts, async move { api.list_posts().await });
        }
    });

    use_effect(move || refresh.call(()));

    let create = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(api) = api.clone() else {
                return;
            };
            let request = match draft.read().to_request() {
                Ok(request) => request,
                Err(e) => {
                    form_error.set(Some(e.user_message()));
                    return;
                }
            };
            form_error.set(None);

            spawn(async move {
                let mut slot = posts;
                let reload = || api.list_posts();

                match write_then_reload(&mut slot, api.create_post(&request), reload).await {
                    Ok(_) => draft.set(PostDraft::default()),
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let like = use_callback({
        let api = api.clone();
        move |post_id: i64| {
            let Some(api) = api.clone() else {
                return;
            };
            let mut posts = posts;

            spawn(async move {
                match api.like_post(post_id).await {
                    Ok(()) => {
                        posts.write().update_local(|list| {
                            record_like(list, post_id);
                        });
                    }
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let toggle = use_callback({
        let api = api.clone();
        move |post_id: i64| {
            let ThreadToggle::Opened { fetch: true } = threads.write().toggle(post_id) else {
                return;
            };
            let Some(api) = api.clone() else {
                return;
            };

            spawn(async move {
                match api.list_comments(post_id).await {
                    Ok(comments) => threads.write().cache(post_id, comments),
                    Err(e) => tracing::error!("{}", e),
                }
            });
        }
    });

    let comment = use_callback(move |(post_id, content): (i64, String)| {
        let Some(api) = api.clone() else {
            return;
        };
        let request = match comment_request(&content) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("{}", e);
                return;
            }
        };

        spawn(async move {
            match api.add_comment(post_id, &request).await {
                Ok(created) => threads.write().append(post_id, created),
                Err(e) => tracing::error!("{}", e),
            }
        });
    });

    let resource = posts.read();
    let current = draft.read().clone();
    let title_len = current.title.chars().count();

    rsx!(
        Title { "Forum | BudgetWise" }
        PageHeader {
            title: "Community Forum",
            subtitle: "Share financial tips, ask questions, and learn from others."
        }

        div { class: "card shadow-sm bg-base-100 mb-6",
            form { class: "card-body gap-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    create.call(());
                },
                h3 { class: "card-title", "Start a Discussion" }
                if let Some(message) = form_error() {
                    div { class: "alert alert-error", "{message}" }
                }
                input {
                    class: "input w-full",
                    r#type: "text",
                    placeholder: "Title",
                    maxlength: "{MAX_TITLE_CHARS}",
                    required: true,
                    value: "{current.title}",
                    oninput: move |e| draft.write().title = e.value(),
                }
                span { class: "text-xs text-right", "{title_len}/{MAX_TITLE_CHARS}" }
                textarea {
                    class: "textarea w-full",
                    placeholder: "What's on your mind?",
                    required: true,
                    value: "{current.content}",
                    oninput: move |e| draft.write().content = e.value(),
                }
                div { class: "card-actions justify-end",
                    button { class: "btn btn-primary", r#type: "submit", "Post" }
                }
            }
        }

        match resource.data() {
            Some(list) if list.is_empty() => rsx!(
                p { class: "text-base-content/70", "No discussions yet. Be the first to post!" }
            ),
            Some(list) => rsx!(
                div { class: "flex flex-col gap-4",
                    for post in list.iter().cloned() {
                        PostCard {
                            key: "{post.id}",
                            open: threads.read().is_open(post.id),
                            comments: threads.read().comments(post.id).to_vec(),
                            post,
                            on_like: like,
                            on_toggle: toggle,
                            on_comment: comment,
                        }
                    }
                }
            ),
            None if resource.phase() == LoadPhase::Failed => rsx!(
                p { class: "text-error", "Could not load the forum." }
            ),
            None => rsx!(Loading {}),
        }
    )
}

#[component]
fn PostCard(
    post: ForumPost,
    open: bool,
    comments: Vec<ForumComment>,
    on_like: Callback<i64>,
    on_toggle: Callback<i64>,
    on_comment: Callback<(i64, String)>,
) -> Element {
    let mut reply = use_signal(String::new);
    let id = post.id;
    let posted = post
        .created_at
        .map(|at| at.format("%d %b %Y").to_string())
        .unwrap_or_default();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body gap-2",
                div { class: "flex items-center gap-2 text-sm text-base-content/70",
                    Icon { width: 18, height: 18, icon: FaCircleUser }
                    span { class: "font-semibold", {post.author()} }
                    span { "{posted}" }
                }
                h4 { class: "text-lg font-bold", "{post.title}" }
                p { class: "whitespace-pre-wrap", "{post.content}" }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-sm btn-ghost flex gap-1",
                        onclick: move |_| on_like.call(id),
                        Icon { width: 14, height: 14, icon: FaHeart }
                        "{post.likes_count}"
                    }
                    button {
                        class: "btn btn-sm btn-ghost flex gap-1",
                        onclick: move |_| on_toggle.call(id),
                        Icon { width: 14, height: 14, icon: FaComment }
                        if open { "Hide comments" } else { "Comments" }
                    }
                }
                if open {
                    div { class: "border-t border-base-300 pt-3 flex flex-col gap-2",
                        if comments.is_empty() {
                            p { class: "text-sm text-base-content/70", "No comments yet." }
                        }
                        for comment in comments.iter() {
                            div { key: "{comment.id}", class: "p-2 rounded bg-base-200",
                                span { class: "text-xs font-semibold", {comment.author()} }
                                p { class: "text-sm", "{comment.content}" }
                            }
                        }
                        form { class: "flex gap-2",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                on_comment.call((id, reply()));
                                reply.set(String::new());
                            },
                            input {
                                class: "input input-sm flex-1",
                                r#type: "text",
                                placeholder: "Write a comment...",
                                value: "{reply}",
                                oninput: move |e| reply.set(e.value()),
                            }
                            button { class: "btn btn-sm btn-primary", r#type: "submit",
                                Icon { width: 12, height: 12, icon: FaPaperPlane }
                            }
                        }
                    }
                }
            }
        }
    )
}
