use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

const JOKES: &[&str] = &[
    "Chuck Norris can divide by zero.",
    "Chuck Norris counted to infinity. Twice.",
    "Chuck Norris writes code that optimizes itself.",
    "Chuck Norris doesn't need a debugger, bugs confess on their own.",
];

pub const LATIN1_CAFE: &[u8] = b"caf\xe9";
pub const BINARY: &[u8] = &[0x00, 0x9f, 0x92, 0x96, 0xff];

const ICON_URL: &str = "https://api.chucknorris.io/img/avatar/chuck-norris.png";

/// Shape of the public joke API's `/jokes/random` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joke {
    pub categories: Vec<String>,
    pub icon_url: String,
    pub id: String,
    pub url: String,
    pub value: String,
}

impl Joke {
    fn random() -> Self {
        let id = Uuid::new_v4();
        let value = JOKES[id.as_bytes()[0] as usize % JOKES.len()];
        let id = id.simple().to_string();
        Joke {
            categories: Vec::new(),
            icon_url: ICON_URL.to_string(),
            url: format!("https://api.chucknorris.io/jokes/{id}"),
            id,
            value: value.to_string(),
        }
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/jokes/random", get(random_joke))
        .route("/headers", get(echo_headers))
        .route("/status/{code}", get(status))
        .route("/bytes/{size}", get(sized_text))
        .route("/latin1", get(latin1_text))
        .route("/binary", get(binary))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn random_joke() -> Json<Joke> {
    Json(Joke::random())
}

/// Echo request headers back as a JSON object, repeated names joined by `, `.
async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let mut echoed: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        echoed
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    Json(echoed)
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

/// `size` bytes of `a` as plain text.
async fn sized_text(Path(size): Path<usize>) -> ([(header::HeaderName, &'static str); 1], Vec<u8>) {
    ([(header::CONTENT_TYPE, "text/plain")], vec![b'a'; size])
}

/// "café" encoded as ISO-8859-1.
async fn latin1_text() -> ([(header::HeaderName, &'static str); 1], Vec<u8>) {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=iso-8859-1")],
        LATIN1_CAFE.to_vec(),
    )
}

async fn binary() -> ([(header::HeaderName, &'static str); 1], Vec<u8>) {
    ([(header::CONTENT_TYPE, "application/octet-stream")], BINARY.to_vec())
}
