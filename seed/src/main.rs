//! Loads a `comments.json` dump into the board through its REST API.
//!
//! Usage: `seed [path/to/comments.json] [--keep]`. Existing comments are
//! deleted first unless `--keep` is given.

use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, time::Duration};

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_FILE: &str = "comments.json";

#[derive(Deserialize, Debug)]
struct SeedFile {
    comments: Vec<SeedComment>,
}

/// One entry of the dump. `id` and `date` are assigned again by the server.
#[derive(Deserialize, Debug)]
struct SeedComment {
    author: String,
    text: String,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct NewComment {
    author: String,
    text: String,
    likes: i64,
    image: Option<String>,
}

impl From<SeedComment> for NewComment {
    fn from(x: SeedComment) -> Self {
        Self {
            author: x.author,
            text: x.text,
            likes: x.likes,
            image: x.image.filter(|x| !x.is_empty()),
        }
    }
}

#[derive(Deserialize, Debug)]
struct Page {
    next: Option<String>,
    results: Vec<Listed>,
}

#[derive(Deserialize, Debug)]
struct Listed {
    id: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mut path = DEFAULT_FILE.to_string();
    let mut keep = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--keep" => keep = true,
            _ => path = arg,
        }
    }

    let api_url = std::env::var("COMMENTS_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let raw = std::fs::read_to_string(&path).map_err(|e| {
        eprintln!("Error: could not read {path}.");
        e
    })?;
    let seed: SeedFile = serde_json::from_str(&raw)?;
    info!("Read {} comments from {}", seed.comments.len(), path);

    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

    if !keep {
        let removed = clear_comments(&client, &api_url).await?;
        info!("Removed {removed} existing comments");
    }

    let mut created = 0;
    for comment in seed.comments {
        let comment = NewComment::from(comment);
        match create_comment_helper(&client, &api_url, &comment).await {
            Ok(()) => created += 1,
            Err(e) => warn!("Comment by {} was not created: {}", comment.author, e),
        }
    }

    info!("Successfully loaded {created} comments");
    Ok(())
}

/// Walks every page of the list endpoint, then deletes what it found.
async fn clear_comments(client: &Client, api_url: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let mut ids = Vec::new();
    let mut next = Some(format!("{api_url}/comments/"));

    while let Some(url) = next {
        debug!("Fetching comments from: {}", &url);
        let page: Page = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        ids.extend(page.results.into_iter().map(|x| x.id));
        next = page.next;
    }

    let mut removed = 0;
    for id in ids {
        let response = client
            .delete(format!("{api_url}/comments/{id}/"))
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => removed += 1,
            StatusCode::NOT_FOUND => debug!("Comment {id} already gone"),
            status => error!("Failed to delete comment {id}: {status}"),
        }
    }

    Ok(removed)
}

async fn create_comment_helper<T: Serialize + Debug>(
    client: &Client,
    api_url: &str,
    comment: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Creating comment: {:?}", comment);

    client
        .post(format!("{api_url}/comments/"))
        .json(comment)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
