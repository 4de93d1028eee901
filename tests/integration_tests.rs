//! Integration tests for resuming and atomic replacement.
//!
//! Interrupted transfers come from a raw TCP server that promises more
//! bytes than it sends; resumed transfers are served by wiremock with
//! `Range` support.

use resumedl::{DownloadRequest, Error, PartialFile, ProgressSink};

use std::fs;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_interrupted_download_resumes_to_identical_file() {
    init_tracing();
    let content = create_test_content(10 * MIB);
    let cut_at = 4 * MIB;

    let dir = create_temp_dir();
    let target = dir.path().join("world.zip");
    let downloader = test_downloader();

    // First attempt: the connection dies after 4 MB.
    let broken = start_truncating_server(content.clone(), cut_at).await;
    let request = quiet_request(&format!("{}/world.zip", broken), &target);
    let err = downloader.download(&request).await.unwrap_err();
    assert!(matches!(err, Error::Reqwest { .. }), "unexpected error: {:?}", err);

    assert!(!target.exists());
    let kept = partial_len(&target).expect("partial file should be kept");
    assert!(kept > 0 && kept <= cut_at as u64);
    assert_file_content(
        PartialFile::for_target(&target).path(),
        &content[..kept as usize],
    );

    // Second attempt: a server honouring ranges.
    let server = MockServer::start().await;
    mount_resource(&server, "/world.zip", RangeResponder::new(content.clone())).await;

    let calls = Arc::new(Mutex::new(Vec::new()));
    let calls_clone = calls.clone();
    let request = DownloadRequest::try_new(&format!("{}/world.zip", server.uri()), &target)
        .unwrap()
        .on_progress(move |written, total| calls_clone.lock().unwrap().push((written, total)));
    let result = downloader.download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64 - kept);
    assert_file_content(&target, &content);
    assert_no_partial(&target);

    // `written` restarts at zero while `total` covers the whole file.
    let calls = calls.lock().unwrap();
    let (first_written, first_total) = calls[0];
    assert!(first_written <= resumedl::downloader::CHUNK_SIZE as u64);
    assert_eq!(first_total, Some(content.len() as u64));
    assert_eq!(calls.last().unwrap().0, content.len() as u64 - kept);
}

#[tokio::test]
async fn test_failed_download_keeps_previous_target() {
    let content = create_test_content(MIB);
    let broken = start_truncating_server(content, MIB / 2).await;

    let dir = create_temp_dir();
    let target = create_temp_file(dir.path(), "server.jar", b"old complete build");
    let request = quiet_request(&format!("{}/server.jar", broken), dir.path());

    assert!(test_downloader().download(&request).await.is_err());

    assert_file_content(&target, b"old complete build");
    assert!(partial_len(&target).is_some());
}

#[tokio::test]
async fn test_resume_sends_range_from_partial_length() {
    let content = create_test_content(200_000);
    let offset = 50_000;

    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/plugin.jar"))
        .respond_with(RangeResponder::new(content.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plugin.jar"))
        .and(wiremock::matchers::header("range", "bytes=50000-"))
        .respond_with(RangeResponder::new(content.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), &content[..offset]).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), (content.len() - offset) as u64);
    assert_file_content(&target, &content);
    assert_no_partial(&target);
}

#[tokio::test]
async fn test_no_resume_without_range_support() {
    let content = create_test_content(100_000);
    let server = MockServer::start().await;
    mount_resource(
        &server,
        "/plugin.jar",
        RangeResponder::new(content.clone()).without_ranges(),
    )
    .await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), b"stale bytes").unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&target, &content);
    assert_no_partial(&target);
}

#[tokio::test]
async fn test_resume_disabled_restarts_download() {
    let content = create_test_content(100_000);
    let server = MockServer::start().await;
    mount_resource(&server, "/plugin.jar", RangeResponder::new(content.clone())).await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), b"stale bytes").unwrap();

    let request =
        quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path()).with_resume(false);
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&target, &content);
}

#[tokio::test]
async fn test_range_ignored_by_server_restarts_from_zero() {
    let content = create_test_content(100_000);
    let server = MockServer::start().await;
    mount_resource(
        &server,
        "/plugin.jar",
        RangeResponder::new(content.clone()).ignoring_range(),
    )
    .await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), &content[..30_000]).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&target, &content);
}

#[tokio::test]
async fn test_complete_partial_file_is_promoted_without_get() {
    let content = create_test_content(64_000);
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/plugin.jar"))
        .respond_with(RangeResponder::new(content.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), &content).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), 0);
    assert_eq!(result.average_throughput(), 0.0);
    assert_file_content(&target, &content);
    assert_no_partial(&target);
}

#[tokio::test]
async fn test_console_progress_does_not_affect_result() {
    let content = create_test_content(70_000);
    let server = MockServer::start().await;
    mount_resource(&server, "/plugin.jar", RangeResponder::new(content.clone())).await;

    let dir = create_temp_dir();
    let request = DownloadRequest::try_new(&format!("{}/plugin.jar", server.uri()), dir.path())
        .unwrap()
        .with_progress(ProgressSink::Console);
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&dir.path().join("plugin.jar"), &content);
}

#[tokio::test]
async fn test_partial_content_from_wrong_offset_restarts_download() {
    let content = create_test_content(1000);
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/plugin.jar"))
        .respond_with(RangeResponder::new(content.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plugin.jar"))
        .and(wiremock::matchers::header("range", "bytes=400-"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "bytes 0-999/1000")
                .set_body_bytes(content.clone()),
        )
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plugin.jar"))
        .respond_with(RangeResponder::new(content.clone()).without_ranges())
        .expect(1)
        .mount(&server)
        .await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), &content[..400]).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&target, &content);
    assert_no_partial(&target);
}

#[tokio::test]
async fn test_partial_content_never_matching_offset_is_rejected() {
    let content = create_test_content(1000);
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/plugin.jar"))
        .respond_with(RangeResponder::new(content.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plugin.jar"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "bytes 500-999/1000")
                .set_body_bytes(content[500..].to_vec()),
        )
        .expect(2)
        .mount(&server)
        .await;

    let dir = create_temp_dir();
    let target = create_temp_file(dir.path(), "plugin.jar", b"previous build");
    fs::write(PartialFile::for_target(&target).path(), &content[..400]).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let err = test_downloader().download(&request).await.unwrap_err();

    assert!(matches!(err, Error::Transfer { .. }), "unexpected error: {:?}", err);
    assert_file_content(&target, b"previous build");
    assert_eq!(partial_len(&target), Some(400));
}

#[tokio::test]
async fn test_partial_longer_than_resource_restarts_download() {
    let content = create_test_content(1000);
    let server = MockServer::start().await;
    mount_resource(&server, "/plugin.jar", RangeResponder::new(content.clone())).await;

    let dir = create_temp_dir();
    let target = dir.path().join("plugin.jar");
    fs::write(PartialFile::for_target(&target).path(), vec![7u8; 2000]).unwrap();

    let request = quiet_request(&format!("{}/plugin.jar", server.uri()), dir.path());
    let result = test_downloader().download(&request).await.unwrap();

    assert_eq!(result.size(), content.len() as u64);
    assert_file_content(&target, &content);
    assert_no_partial(&target);
}
