use std::{collections::VecDeque, sync::Mutex};

use crate::{
    CachedUrl, CareerSuggestions, CareersRequest, GeneratedImage, ImageRequest, ImageService,
    ImageServiceError, ImageServiceResult, PageQuery, UrlPage,
};

#[derive(Default)]
struct MockImageServiceState {
    mocked_generate_results: VecDeque<ImageServiceResult<GeneratedImage>>,
    mocked_careers_results: VecDeque<ImageServiceResult<CareerSuggestions>>,
    mocked_page_results: VecDeque<ImageServiceResult<UrlPage>>,
    mocked_legacy_results: VecDeque<ImageServiceResult<Vec<CachedUrl>>>,
    tracked_image_requests: Vec<ImageRequest>,
    tracked_careers_requests: Vec<CareersRequest>,
    tracked_page_queries: Vec<PageQuery>,
}

/// A mock image service that tracks inputs and yields predefined outputs.
///
/// Results are consumed in FIFO order per operation; calling an operation
/// with an empty queue is an error, so tests notice unexpected calls.
#[derive(Default)]
pub struct MockImageService {
    state: Mutex<MockImageServiceState>,
}

impl MockImageService {
    /// Construct a new mock image service instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a mocked generate result.
    pub fn enqueue_generate(&self, result: ImageServiceResult<GeneratedImage>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_generate_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked career suggestion result.
    pub fn enqueue_careers(&self, result: ImageServiceResult<CareerSuggestions>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_careers_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked paginated listing result.
    pub fn enqueue_page(&self, result: ImageServiceResult<UrlPage>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_page_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked legacy listing result.
    pub fn enqueue_legacy(&self, result: ImageServiceResult<Vec<CachedUrl>>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_legacy_results.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the tracked image requests accumulated so far.
    #[must_use]
    pub fn tracked_image_requests(&self) -> Vec<ImageRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_image_requests.clone()
    }

    /// Retrieve the tracked careers requests accumulated so far.
    #[must_use]
    pub fn tracked_careers_requests(&self) -> Vec<CareersRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_careers_requests.clone()
    }

    /// Retrieve the tracked page queries accumulated so far.
    #[must_use]
    pub fn tracked_page_queries(&self) -> Vec<PageQuery> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_page_queries.clone()
    }

    /// How many page fetches have been issued.
    #[must_use]
    pub fn page_fetch_count(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_page_queries.len()
    }

    /// Clear both tracked inputs and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        *state = MockImageServiceState::default();
    }
}

#[async_trait::async_trait]
impl ImageService for MockImageService {
    fn provider(&self) -> &'static str {
        "mock"
    }

    async fn generate_image(&self, request: ImageRequest) -> ImageServiceResult<GeneratedImage> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_image_requests.push(request);
        state.mocked_generate_results.pop_front().ok_or_else(|| {
            ImageServiceError::Invariant("mock", "no mocked generate results available".into())
        })?
    }

    async fn suggest_careers(
        &self,
        request: CareersRequest,
    ) -> ImageServiceResult<CareerSuggestions> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_careers_requests.push(request);
        state.mocked_careers_results.pop_front().ok_or_else(|| {
            ImageServiceError::Invariant("mock", "no mocked careers results available".into())
        })?
    }

    async fn fetch_urls_page(&self, query: PageQuery) -> ImageServiceResult<UrlPage> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_page_queries.push(query);
        state.mocked_page_results.pop_front().ok_or_else(|| {
            ImageServiceError::Invariant("mock", "no mocked page results available".into())
        })?
    }

    async fn fetch_urls_legacy(&self) -> ImageServiceResult<Vec<CachedUrl>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_legacy_results.pop_front().ok_or_else(|| {
            ImageServiceError::Invariant("mock", "no mocked legacy results available".into())
        })?
    }
}
