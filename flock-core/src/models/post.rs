use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Post così come viaggia sul wire (`/api/posts`).
///
/// Il backend non è sempre coerente: `post_id` può arrivare come numero,
/// titolo e testo possono mancare o essere `null` (diventano stringhe vuote),
/// `comments` può mancare, essere `null` o non essere una lista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub post_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub post_title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub post_text: String,
    #[serde(default, deserialize_with = "lenient_comments")]
    pub comments: Vec<String>,
}

/// Post mostrato nella bacheca di un hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: String,
    pub title: String,
    pub text: String,
    pub comments: Vec<String>,
}

impl From<PostRecord> for Post {
    fn from(r: PostRecord) -> Self {
        Post {
            post_id: r.post_id,
            title: r.post_title,
            text: r.post_text,
            comments: r.comments,
        }
    }
}

impl Post {
    /// Post appena confermato dal server: i commenti partono sempre vuoti.
    pub fn confirmed(r: PostRecord) -> Self {
        Post { comments: Vec::new(), ..Post::from(r) }
    }
}

fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "post_id must be a string or a number, got {other}"
        ))),
    }
}

fn lenient_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

// tutto ciò che non è una lista diventa lista vuota; gli elementi non stringa vengono scartati
fn lenient_comments<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let comments = match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(comments)
}
