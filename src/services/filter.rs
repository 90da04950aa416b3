use crate::catalog::{Post, TAG_ALL};

pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }
    posts.iter().filter(|p| haystack(p).contains(&needle)).collect()
}

fn haystack(post: &Post) -> String {
    let mut parts = vec![post.title.as_str(), post.excerpt.as_str()];
    parts.extend(post.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

fn tag_matches(post: &Post, tag: &str) -> bool {
    tag == TAG_ALL || post.tags.iter().any(|t| t == tag)
}

pub fn filter_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| tag_matches(p, tag)).collect()
}

pub fn listing<'a>(posts: &'a [Post], query: &str, tag: &str) -> Vec<&'a Post> {
    let mut out: Vec<&Post> = search(posts, query)
        .into_iter()
        .filter(|p| tag_matches(p, tag))
        .collect();
    // stable sort keeps catalog order for same-day posts
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
