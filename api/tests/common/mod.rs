#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use image::{ImageBuffer, ImageFormat, Rgb};
use larder_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::Value;

/// Server whose Gemini endpoint is unreachable, so every model call fails fast.
pub fn test_server() -> TestServer {
    test_server_with_root("")
}

pub fn test_server_with_root(root_path: &str) -> TestServer {
    let args = Args::parse_from([
        "larder",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        "http://127.0.0.1:9",
        "--llm-timeout",
        "2",
        "--llm-max-retries",
        "0",
        "--server-root-path",
        root_path,
        "--disable-metrics",
    ]);

    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub fn png(color: [u8; 3]) -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(8, 8, Rgb(color));
    let mut encoded = Cursor::new(Vec::new());
    buffer.write_to(&mut encoded, ImageFormat::Png).unwrap();
    encoded.into_inner()
}

pub async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}
