//! Shared harness for the hermetic conformance tests.

pub mod forms;
pub mod service;

use petfriends_client::config::SuiteConfig;
use petfriends_client::scenarios::ScenarioContext;

use once_cell::sync::Lazy;
use tempfile::TempDir;

use self::service::ServiceDouble;

/// Minimal JFIF-framed payload. The double never decodes it; the client
/// only needs a readable file with a jpeg extension.
static PHOTO_BYTES: Lazy<Vec<u8>> = Lazy::new(|| {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend(std::iter::repeat(0x42).take(64));
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
});

/// One double, one client, one temp photo fixture - per test.
pub struct TestHarness {
    pub service: ServiceDouble,
    context: ScenarioContext,
    _fixture_dir: TempDir,
}

impl TestHarness {
    pub async fn start() -> Self {
        let service = ServiceDouble::start().await;

        let fixture_dir = tempfile::tempdir().expect("fixture dir should be creatable");
        let photo_path = fixture_dir.path().join("cat.jpg");
        std::fs::write(&photo_path, PHOTO_BYTES.as_slice())
            .expect("photo fixture should be writable");

        let mut config = SuiteConfig::default();
        config.service.base_url = service.uri();
        config.fixtures.pet_photo = photo_path;

        let context =
            ScenarioContext::new(&config).expect("context should build from double config");

        Self {
            service,
            context,
            _fixture_dir: fixture_dir,
        }
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }
}
