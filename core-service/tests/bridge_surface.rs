//! End-to-end tests of the caller-facing bridge surface over real desktop
//! collaborators (temp-dir filesystem, in-memory registrar).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bridge_desktop::{FileContentResolver, SqliteDownloadRegistrar, TokioFileSystem};
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::notify::{Notice, NoticeKind, UserNotifier};
use bridge_traits::time::SystemClock;
use core_runtime::config::RuntimeConfig;
use core_service::{CoreDependencies, StorageBridge};
use core_storage::download::DownloadStrategy;
use core_storage::payload::encode_payload;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.lock().unwrap().iter().map(|n| n.kind).collect()
    }

    async fn wait_for_notices(&self, count: usize) {
        for _ in 0..200 {
            if self.notices.lock().unwrap().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {count} notices, got {:?}", self.notices.lock().unwrap());
    }
}

#[async_trait::async_trait]
impl UserNotifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) -> BridgeResult<()> {
        self.notices.lock().unwrap().push(notice);
        Ok(())
    }
}

struct Host {
    _dir: TempDir,
    downloads_dir: std::path::PathBuf,
    notifier: Arc<RecordingNotifier>,
    registrar: Option<Arc<SqliteDownloadRegistrar>>,
    bridge: StorageBridge,
}

async fn host(with_registrar: bool) -> Host {
    let dir = TempDir::new().unwrap();
    let downloads_dir = dir.path().join("downloads");
    let filesystem = Arc::new(TokioFileSystem::with_directories(
        dir.path().join("cache"),
        downloads_dir.clone(),
    ));

    let registrar = if with_registrar {
        tokio::fs::create_dir_all(&downloads_dir).await.unwrap();
        Some(Arc::new(SqliteDownloadRegistrar::in_memory().await.unwrap()))
    } else {
        None
    };

    let notifier = Arc::new(RecordingNotifier::default());
    let deps = CoreDependencies::new(
        filesystem,
        registrar
            .clone()
            .map(|r| r as Arc<dyn bridge_traits::registrar::DownloadRegistrar>),
        Arc::new(FileContentResolver),
        notifier.clone(),
        Arc::new(SystemClock),
    );

    let bridge = StorageBridge::new(deps, RuntimeConfig::default());
    Host {
        _dir: dir,
        downloads_dir,
        notifier,
        registrar,
        bridge,
    }
}

#[tokio::test]
async fn save_to_cache_roundtrips_through_read() {
    let host = host(false).await;

    let payload = encode_payload(b"cached bytes");
    let path = host.bridge.save_to_cache(&payload, "f.txt").await;
    assert!(!path.is_empty());
    assert!(path.ends_with("f.txt"));

    assert_eq!(host.bridge.read_from_cache("f.txt").await, payload);
}

#[tokio::test]
async fn save_to_cache_returns_empty_string_on_malformed_payload() {
    let host = host(false).await;

    let path = host.bridge.save_to_cache("%%%not-base64%%%", "f.txt").await;
    assert_eq!(path, "");
}

#[tokio::test]
async fn append_to_cache_accumulates_and_reports_failures_as_false() {
    let host = host(false).await;

    for chunk in [b"A".as_slice(), b"B", b"C"] {
        assert!(host.bridge.append_to_cache(&encode_payload(chunk), "chunks").await);
    }
    assert_eq!(host.bridge.read_from_cache("chunks").await, encode_payload(b"ABC"));

    assert!(!host.bridge.append_to_cache("%%%", "chunks").await);
    // A failed chunk leaves the file untouched.
    assert_eq!(host.bridge.read_from_cache("chunks").await, encode_payload(b"ABC"));
}

#[tokio::test]
async fn read_from_cache_returns_empty_string_for_missing_file() {
    let host = host(false).await;
    assert_eq!(host.bridge.read_from_cache("never-written.bin").await, "");
}

#[tokio::test]
async fn download_file_modern_strategy_registers_the_completed_file() {
    let host = host(true).await;
    assert_eq!(host.bridge.download_strategy(), DownloadStrategy::Modern);

    host.bridge
        .download_file(&encode_payload(b"hello"), "report.pdf", "application/pdf");
    host.notifier.wait_for_notices(1).await;
    assert_eq!(host.notifier.kinds(), vec![NoticeKind::Success]);

    let written = tokio::fs::read(host.downloads_dir.join("report.pdf"))
        .await
        .unwrap();
    assert_eq!(written, b"hello");

    let recent = host.registrar.as_ref().unwrap().recent(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].display_name, "report.pdf");
    assert_eq!(recent[0].mime_type, "application/pdf");
    assert_eq!(recent[0].byte_length, 5);
    assert!(recent[0].visible_to_others);
}

#[tokio::test]
async fn download_file_legacy_strategy_creates_the_downloads_dir() {
    let host = host(false).await;
    assert_eq!(host.bridge.download_strategy(), DownloadStrategy::Legacy);
    assert!(!host.downloads_dir.exists());

    host.bridge
        .download_file(&encode_payload(b"legacy bytes"), "old.bin", "");
    host.notifier.wait_for_notices(1).await;
    assert_eq!(host.notifier.kinds(), vec![NoticeKind::Success]);

    let written = tokio::fs::read(host.downloads_dir.join("old.bin")).await.unwrap();
    assert_eq!(written, b"legacy bytes");
}

#[tokio::test]
async fn download_file_failure_reaches_the_user_not_the_caller() {
    let host = host(false).await;

    // Fire-and-forget: the call itself cannot fail.
    host.bridge.download_file("%%%not-base64%%%", "f.txt", "");
    host.notifier.wait_for_notices(1).await;

    assert_eq!(host.notifier.kinds(), vec![NoticeKind::Failure]);
}

#[tokio::test]
async fn download_file_sanitizes_hostile_filenames() {
    let host = host(false).await;

    host.bridge
        .download_file(&encode_payload(b"x"), "../../etc/passwd", "");
    host.notifier.wait_for_notices(1).await;

    // The file landed inside the downloads dir under the sanitized name.
    let written = tokio::fs::read(host.downloads_dir.join("._._etc_passwd"))
        .await
        .unwrap();
    assert_eq!(written, b"x");
}

#[tokio::test]
async fn shared_file_event_arrives_after_renderer_ready() {
    let host = host(false).await;
    let mut events = host.bridge.subscribe_events();

    let shared = host._dir.path().join("incoming.pdf");
    tokio::fs::write(&shared, b"shared").await.unwrap();

    let captured = host
        .bridge
        .capture_shared_content(&shared.to_string_lossy(), Some("application/pdf"))
        .await
        .unwrap();

    // Nothing may arrive before the renderer acknowledges readiness.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(events.try_recv().is_err());

    host.bridge.renderer_ready();
    let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("event after renderer_ready")
        .unwrap();

    assert_eq!(event.path, captured.to_string_lossy());
    assert_eq!(event.mime_type, "application/pdf");
    assert_eq!(tokio::fs::read(&captured).await.unwrap(), b"shared");
}
