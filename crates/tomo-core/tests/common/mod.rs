#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tomo_core::records::{Character, CharacterDetail, CharacterSummary};

/// Relationship slot JSON.
pub fn rel(kind: u32, type_name: &str, target: &str, value: f64) -> Value {
    json!({"type": kind, "type_name": type_name, "target_name": target, "value": value})
}

/// In-memory character with relationships given in slot order.
pub fn character(index: i64, nickname: &str, personality: &str, relationships: Vec<Value>) -> Character {
    let slots: serde_json::Map<String, Value> = relationships
        .into_iter()
        .enumerate()
        .map(|(i, r)| (i.to_string(), r))
        .collect();
    let detail: CharacterDetail = serde_json::from_value(json!({
        "profile": {"firstname": nickname, "lastname": "Test", "nickname": nickname, "creator": "tests"},
        "personality": {"type": personality},
        "relationships": slots,
    }))
    .unwrap();

    Character {
        summary: CharacterSummary {
            index,
            nickname: nickname.to_string(),
            filename: folder_file(index, nickname),
            personality_type: personality.to_string(),
        },
        detail,
    }
}

pub fn folder_file(index: i64, nickname: &str) -> String {
    format!("{:02}_{}/mii.json", index, nickname)
}

/// The A, B, C scenario: A and B are mutual friends, C has no edges.
pub fn abc() -> Vec<Character> {
    vec![
        character(0, "A", "easygoing buddy", vec![rel(1, "Friend", "B", 5.0)]),
        character(1, "B", "outgoing charmer", vec![rel(1, "Friend", "A", 7.0)]),
        character(2, "C", "independent thinker", vec![]),
    ]
}

/// Write a data directory holding the given characters.
pub fn write_data_dir(characters: &[Character]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_characters(dir.path(), characters);
    dir
}

pub fn write_characters(root: &Path, characters: &[Character]) {
    for (relative, body) in documents(characters) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
    }
}

/// `_summary.json` plus every detail document, keyed by relative path.
pub fn documents(characters: &[Character]) -> HashMap<String, Vec<u8>> {
    let mut files = HashMap::new();
    let mut miis = serde_json::Map::new();
    for c in characters {
        miis.insert(format!("mii_{}", c.summary.index), serde_json::to_value(&c.summary).unwrap());
        files.insert(c.summary.filename.clone(), serde_json::to_vec(&c.detail).unwrap());
    }
    files.insert(
        "_summary.json".to_string(),
        serde_json::to_vec(&json!({ "miis": miis })).unwrap(),
    );
    files
}

/// Serve `files` over plain HTTP on a local port; unknown paths get a 404.
///
/// Returns the base URL.
pub async fn serve_documents(files: HashMap<String, Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let files = Arc::new(files);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let files = files.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let response = match files.get(path.trim_start_matches('/')) {
                    Some(body) => {
                        let mut head = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            body.len()
                        )
                        .into_bytes();
                        head.extend_from_slice(body);
                        head
                    }
                    None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
                };
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
