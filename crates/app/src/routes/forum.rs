use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeart, LdMessageCircle};
use dioxus_free_icons::Icon;
use shared_types::fixtures;
use shared_types::{filter_posts, ForumCategory, ForumPost, FORUM_FILTERS};
use shared_ui::{Badge, BadgeTone, Card, CardContent, PageHeader, UserAvatar};

fn category_tone(category: ForumCategory) -> BadgeTone {
    match category {
        ForumCategory::Announcement => BadgeTone::Danger,
        ForumCategory::Question => BadgeTone::Info,
        ForumCategory::LostAndFound => BadgeTone::Warning,
        ForumCategory::General => BadgeTone::Neutral,
    }
}

/// Campus forum ("PH Corners") with category filter tabs.
#[component]
pub fn ForumPage() -> Element {
    let posts = use_hook(fixtures::forum_posts);
    let mut filter = use_signal(|| Option::<ForumCategory>::None);
    let visible: Vec<ForumPost> = filter_posts(&posts, filter()).into_iter().cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view",
            PageHeader { title: "PH Corners", subtitle: "Connect, discuss and share with the community." }

            div { class: "view-tabs",
                for (label, category) in FORUM_FILTERS.iter().copied() {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: "view-tab",
                        "data-active": if filter() == category { "true" } else { "false" },
                        onclick: move |_| filter.set(category),
                        "{label}"
                    }
                }
            }

            div { class: "view-stack",
                if visible.is_empty() {
                    p { class: "view-empty", "No posts in this category yet." }
                }
                for post in visible {
                    PostCard { key: "{post.id}", post: post.clone() }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: ForumPost) -> Element {
    let initials: String = post
        .author
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    let category = post.category.label();
    let role = post.role.display_name();

    rsx! {
        Card {
            CardContent {
                div { class: "view-post-head",
                    UserAvatar { initials: initials, src: post.avatar.clone() }
                    div {
                        p { class: "view-row-title", "{post.author}" }
                        p { class: "view-muted", "{role} \u{2022} {post.timestamp}" }
                    }
                    Badge { tone: category_tone(post.category), "{category}" }
                }
                h3 { class: "view-post-title", "{post.title}" }
                p { class: "view-post-body", "{post.content}" }
                div { class: "view-post-meta",
                    span {
                        Icon::<LdHeart> { icon: LdHeart, width: 16, height: 16 }
                        " {post.likes}"
                    }
                    span {
                        Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 16, height: 16 }
                        " {post.comments}"
                    }
                }
            }
        }
    }
}
