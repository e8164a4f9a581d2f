use super::picker::{ImagePicker, ImageRef, Permission, PickOutcome, PickerOptions};
use crate::analysis::{AnalysisClient, MenuAnalysis, WirePreferences};
use crate::error::{AnalysisError, ImageError, MenuMindError};
use crate::media;
use crate::preferences::PreferenceStore;
use tracing::{debug, info};

/// Session state of a scan. One forward path, two loops back: `Result`
/// returns to `Analyzing` on regenerate, and everything returns to `Idle` on
/// new scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScanState {
    Idle,
    CameraChoice,
    ImageCaptured,
    Analyzing,
    Result,
}

/// Orchestrates one analysis session: image acquisition, a fresh preference
/// load, the remote request, response validation, and the state the
/// presentation layer renders from.
///
/// Every failure on the analysis path is recoverable: the state falls back to
/// `ImageCaptured` with the image retained, so the user can trigger analysis
/// again.
pub struct ScanController {
    picker: Box<dyn ImagePicker>,
    store: PreferenceStore,
    client: AnalysisClient,
    options: PickerOptions,
    state: ScanState,
    image: Option<ImageRef>,
    analysis: Option<MenuAnalysis>,
}

impl ScanController {
    #[must_use]
    pub fn new(picker: Box<dyn ImagePicker>, store: PreferenceStore, client: AnalysisClient) -> Self {
        Self {
            picker,
            store,
            client,
            options: PickerOptions::default(),
            state: ScanState::Idle,
            image: None,
            analysis: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&MenuAnalysis> {
        self.analysis.as_ref()
    }

    /// `Idle -> CameraChoice`.
    pub fn begin_scan(&mut self) {
        if self.state == ScanState::Idle {
            self.state = ScanState::CameraChoice;
        }
    }

    /// Take a photo with the camera. Permission denial surfaces an error and
    /// leaves the state unchanged; cancellation is silent. A captured image
    /// immediately starts analysis.
    pub async fn capture_image(&mut self) -> Result<(), MenuMindError> {
        if self.picker.request_permission().await == Permission::Denied {
            return Err(ImageError::PermissionDenied.into());
        }
        let outcome = self.picker.capture_from_camera(self.options).await?;
        self.accept(outcome).await
    }

    /// Choose an existing photo from the library. The library needs no
    /// permission prompt; otherwise identical to `capture_image`.
    pub async fn pick_image(&mut self) -> Result<(), MenuMindError> {
        let outcome = self.picker.pick_from_library(self.options).await?;
        self.accept(outcome).await
    }

    async fn accept(&mut self, outcome: PickOutcome) -> Result<(), MenuMindError> {
        match outcome {
            PickOutcome::Canceled => {
                debug!("image acquisition canceled");
                Ok(())
            }
            PickOutcome::Picked(image) => {
                info!(image = %image.uri.display(), "image captured");
                self.image = Some(image);
                self.state = ScanState::ImageCaptured;
                // A newly held image reference triggers analysis on its own.
                self.analyze().await
            }
        }
    }

    /// Run the analysis for the currently held image.
    ///
    /// Preferences are re-read from the store on every call so edits made on
    /// the settings side are always reflected. Re-triggering while a request
    /// is in flight is a no-op.
    pub async fn analyze(&mut self) -> Result<(), MenuMindError> {
        if self.state == ScanState::Analyzing {
            debug!("analysis already in flight, ignoring trigger");
            return Ok(());
        }
        let Some(image) = self.image.clone() else {
            return Err(AnalysisError::NoImage.into());
        };

        self.state = ScanState::Analyzing;
        match self.run_analysis(&image).await {
            Ok(analysis) => {
                info!(
                    recommendations = analysis.recommendations.len(),
                    "analysis complete"
                );
                self.analysis = Some(analysis);
                self.state = ScanState::Result;
                Ok(())
            }
            Err(error) => {
                // Image retained; the user can trigger analysis again.
                self.state = ScanState::ImageCaptured;
                Err(error)
            }
        }
    }

    async fn run_analysis(&self, image: &ImageRef) -> Result<MenuAnalysis, MenuMindError> {
        let preferences = self.store.load();
        let payload = WirePreferences::from(&preferences);
        let bytes = media::read_image(&image.uri)?;
        Ok(self.client.analyze_menu(&bytes, &payload).await?)
    }

    /// Focus-regained hook: re-analyzes when an image is held, so preference
    /// edits made on another screen are picked up without user action.
    pub async fn on_focus_regained(&mut self) -> Result<(), MenuMindError> {
        if self.image.is_some() && self.state != ScanState::Analyzing {
            debug!("focus regained with image held, re-analyzing");
            return self.analyze().await;
        }
        Ok(())
    }

    /// Discard the current result and re-run analysis on the same image.
    pub async fn regenerate(&mut self) -> Result<(), MenuMindError> {
        self.analysis = None;
        self.analyze().await
    }

    /// End the session: clears image and analysis, back to `Idle`.
    pub fn new_scan(&mut self) {
        self.image = None;
        self.analysis = None;
        self.state = ScanState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{PreferenceEditor, PreferenceList};
    use crate::scanner::picker::FilePicker;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::{TempDir, tempdir};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_BODY: &str =
        r#"{"recommendations":[{"name":"Salad","reason":"low-sodium"}],"notRecommended":[],"otherOptions":[]}"#;

    struct DenyingPicker;

    #[async_trait]
    impl ImagePicker for DenyingPicker {
        async fn request_permission(&self) -> Permission {
            Permission::Denied
        }
        async fn capture_from_camera(
            &self,
            _options: PickerOptions,
        ) -> Result<PickOutcome, ImageError> {
            Ok(PickOutcome::Canceled)
        }
        async fn pick_from_library(
            &self,
            _options: PickerOptions,
        ) -> Result<PickOutcome, ImageError> {
            Ok(PickOutcome::Canceled)
        }
    }

    /// Returns each queued outcome once, then cancels.
    struct QueuedPicker {
        outcomes: Mutex<Vec<PickOutcome>>,
    }

    #[async_trait]
    impl ImagePicker for QueuedPicker {
        async fn request_permission(&self) -> Permission {
            Permission::Granted
        }
        async fn capture_from_camera(
            &self,
            _options: PickerOptions,
        ) -> Result<PickOutcome, ImageError> {
            Ok(self
                .outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(PickOutcome::Canceled))
        }
        async fn pick_from_library(
            &self,
            _options: PickerOptions,
        ) -> Result<PickOutcome, ImageError> {
            self.capture_from_camera(_options).await
        }
    }

    fn write_menu_image(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("menu.jpg");
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        std::fs::write(&path, jpeg).unwrap();
        path
    }

    fn controller_for(dir: &TempDir, image: Option<PathBuf>, base_url: &str) -> ScanController {
        ScanController::new(
            Box::new(FilePicker::new(image)),
            PreferenceStore::new(dir.path()),
            AnalysisClient::new(base_url),
        )
    }

    #[tokio::test]
    async fn full_scan_reaches_result_with_exact_structure() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        controller.capture_image().await.unwrap();

        assert_eq!(controller.state(), ScanState::Result);
        let analysis = controller.analysis().unwrap();
        assert_eq!(analysis.recommendations[0].name, "Salad");
        assert_eq!(analysis.recommendations[0].reason, "low-sodium");
        assert!(analysis.not_recommended.is_empty());
        assert!(analysis.other_options.is_empty());
    }

    #[tokio::test]
    async fn analyze_sends_latest_preferences_under_wire_names() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .and(body_string_contains("neverFoods"))
            .and(body_string_contains("shellfish"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_BODY))
            .expect(1)
            .mount(&server)
            .await;

        // Preferences edited after the controller was constructed must still
        // be in the payload: the store is read fresh on each analyze.
        let mut controller = controller_for(&dir, Some(image), &server.uri());
        let mut editor = PreferenceEditor::load(PreferenceStore::new(dir.path()));
        editor.add(PreferenceList::Restricted, "shellfish").unwrap();

        controller.begin_scan();
        controller.capture_image().await.unwrap();
        assert_eq!(controller.state(), ScanState::Result);
    }

    #[tokio::test]
    async fn empty_recommendations_fail_and_image_is_retained() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"recommendations":[],"notRecommended":[],"otherOptions":[]}"#,
            ))
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        let err = controller.capture_image().await.unwrap_err();

        assert!(err.to_string().contains("No recommendations received"));
        assert_eq!(controller.state(), ScanState::ImageCaptured);
        assert!(controller.image().is_some());
        assert!(controller.analysis().is_none());
    }

    #[tokio::test]
    async fn server_error_surfaces_status_and_body() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        let err = controller.capture_image().await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("500") && message.contains("boom"), "was: {message}");
        assert_eq!(controller.state(), ScanState::ImageCaptured);
    }

    #[tokio::test]
    async fn analyze_without_image_is_an_error_and_leaves_state() {
        let dir = tempdir().unwrap();
        let mut controller = controller_for(&dir, None, "http://localhost:0");

        let err = controller.analyze().await.unwrap_err();

        assert!(matches!(
            err,
            MenuMindError::Analysis(AnalysisError::NoImage)
        ));
        assert_eq!(controller.state(), ScanState::Idle);
    }

    #[tokio::test]
    async fn cancellation_is_silent_and_stays_in_camera_choice() {
        let dir = tempdir().unwrap();
        let mut controller = controller_for(&dir, None, "http://localhost:0");
        controller.begin_scan();

        controller.capture_image().await.unwrap();

        assert_eq!(controller.state(), ScanState::CameraChoice);
        assert!(controller.image().is_none());
    }

    #[tokio::test]
    async fn permission_denied_errors_without_state_change() {
        let dir = tempdir().unwrap();
        let mut controller = ScanController::new(
            Box::new(DenyingPicker),
            PreferenceStore::new(dir.path()),
            AnalysisClient::new("http://localhost:0"),
        );
        controller.begin_scan();

        let err = controller.capture_image().await.unwrap_err();

        assert!(matches!(
            err,
            MenuMindError::Image(ImageError::PermissionDenied)
        ));
        assert_eq!(controller.state(), ScanState::CameraChoice);
    }

    #[tokio::test]
    async fn focus_regained_without_image_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut controller = controller_for(&dir, None, "http://localhost:0");

        controller.on_focus_regained().await.unwrap();

        assert_eq!(controller.state(), ScanState::Idle);
    }

    #[tokio::test]
    async fn focus_regained_with_image_reanalyzes() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_BODY))
            .expect(2)
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        controller.capture_image().await.unwrap();
        controller.on_focus_regained().await.unwrap();

        assert_eq!(controller.state(), ScanState::Result);
    }

    #[tokio::test]
    async fn regenerate_clears_result_and_requests_again() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_BODY))
            .expect(2)
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        controller.capture_image().await.unwrap();
        controller.regenerate().await.unwrap();

        assert_eq!(controller.state(), ScanState::Result);
        assert!(controller.analysis().is_some());
    }

    #[tokio::test]
    async fn new_scan_clears_everything() {
        let dir = tempdir().unwrap();
        let image = write_menu_image(&dir);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_BODY))
            .mount(&server)
            .await;

        let mut controller = controller_for(&dir, Some(image), &server.uri());
        controller.begin_scan();
        controller.capture_image().await.unwrap();
        controller.new_scan();

        assert_eq!(controller.state(), ScanState::Idle);
        assert!(controller.image().is_none());
        assert!(controller.analysis().is_none());
    }

    #[tokio::test]
    async fn unreadable_image_fails_soft_with_image_retained() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("menu.jpg");
        let mut controller = ScanController::new(
            Box::new(QueuedPicker {
                outcomes: Mutex::new(vec![PickOutcome::Picked(ImageRef { uri: image })]),
            }),
            PreferenceStore::new(dir.path()),
            AnalysisClient::new("http://localhost:0"),
        );
        controller.begin_scan();

        // Picker hands back a reference whose file never existed.
        let err = controller.capture_image().await.unwrap_err();

        assert!(matches!(err, MenuMindError::Image(ImageError::Io(_))));
        assert_eq!(controller.state(), ScanState::ImageCaptured);
    }
}
