#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use activities::database::ActivityCatalog;
use activities::models::{Activity, ActivityListing};
use activities::{build_router, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct RawResponse {
    pub status: u16,
    pub head: String,
    pub body: String,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.head
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with(&prefix))
            .map(|line| line[prefix.len()..].trim().to_string())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response json")
    }
}

/// Small catalog with known rosters.
pub fn fixture_catalog() -> ActivityCatalog {
    let mut listing = ActivityListing::new();
    listing
        .push(
            "Basketball Team",
            Activity::new("Hoops", "Tuesdays, 4:00 PM", 15, &["existing@x.edu"]),
        )
        .expect("push basketball");
    listing
        .push(
            "Drama Club",
            Activity::new("Plays", "Thursdays, 3:30 PM", 25, &["actor@x.edu"]),
        )
        .expect("push drama");
    listing
        .push(
            "Art Studio",
            Activity::new("Painting", "Mondays, 3:30 PM", 18, &["painter@x.edu", "sculptor@x.edu"]),
        )
        .expect("push art");
    ActivityCatalog::new(listing)
}

pub async fn spawn_app(catalog: ActivityCatalog, static_dir: &Path) -> SocketAddr {
    let app = build_router(AppState::new(catalog, static_dir));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn send_raw(addr: SocketAddr, method: &str, path: &str) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    RawResponse {
        status,
        head: head.to_string(),
        body: body.to_string(),
    }
}
