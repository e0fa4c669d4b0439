#![allow(dead_code)]

use async_trait::async_trait;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use shortlink::application::services::ShortenService;
use shortlink::domain::entities::Mapping;
use shortlink::domain::repositories::MappingRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::ObjectStoreMappingRepository;
use shortlink::state::AppState;
use shortlink::utils::{CodeGenerator, RandomCodeGenerator};

pub const STATIC_ENDPOINT: &str = "https://static.example";
pub const STORE_PREFIX: &str = "links";

/// Deterministic generator yielding a fixed sequence of codes.
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .expect("code sequence exhausted")
    }
}

/// Repository whose store calls always fail, for exercising the 500 path.
pub struct FailingRepository;

#[async_trait]
impl MappingRepository for FailingRepository {
    async fn exists(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::probe("store unreachable"))
    }

    async fn create(&self, _mapping: Mapping) -> Result<(), AppError> {
        Err(AppError::write("store unreachable"))
    }
}

pub fn create_test_state(
    store: Arc<dyn ObjectStore>,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    let repository = Arc::new(ObjectStoreMappingRepository::new(
        store,
        Path::from(STORE_PREFIX),
    ));
    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        generator,
        STATIC_ENDPOINT.to_string(),
        10,
    ));

    AppState::new(shorten_service, repository)
}

pub fn create_random_state(store: Arc<dyn ObjectStore>) -> AppState {
    create_test_state(store, Arc::new(RandomCodeGenerator))
}

pub fn create_failing_state() -> AppState {
    let repository = Arc::new(FailingRepository);
    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        Arc::new(RandomCodeGenerator),
        STATIC_ENDPOINT.to_string(),
        10,
    ));

    AppState::new(shorten_service, repository)
}

pub async fn seed_mapping(store: &dyn ObjectStore, code: &str, target_url: &str) {
    store
        .put(
            &Path::from(STORE_PREFIX).child(code),
            PutPayload::from(target_url.as_bytes().to_vec()),
        )
        .await
        .unwrap();
}

pub async fn read_mapping(store: &dyn ObjectStore, code: &str) -> String {
    let bytes = store
        .get(&Path::from(STORE_PREFIX).child(code))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
