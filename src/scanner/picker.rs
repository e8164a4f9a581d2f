use crate::error::ImageError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Capture options forwarded to the device capability. The filesystem picker
/// ignores them; a real camera honors all three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    pub allow_editing: bool,
    pub quality: f32,
    pub aspect: (u32, u32),
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            allow_editing: true,
            quality: 0.5,
            aspect: (4, 3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Reference to an acquired image. Only a locator; bytes are read at
/// analysis time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: PathBuf,
}

/// Outcome of a capture or pick. Cancellation is not an error: the caller
/// silently stays where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(ImageRef),
    Canceled,
}

/// The opaque image-acquisition collaborator: a device camera and photo
/// library on mobile, the filesystem here.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn request_permission(&self) -> Permission;

    async fn capture_from_camera(&self, options: PickerOptions)
    -> Result<PickOutcome, ImageError>;

    async fn pick_from_library(&self, options: PickerOptions) -> Result<PickOutcome, ImageError>;
}

/// Filesystem-backed picker for the CLI: "captures" the image the user
/// pointed it at. No path behaves like the user backing out of the camera.
#[derive(Debug, Default)]
pub struct FilePicker {
    path: Option<PathBuf>,
}

impl FilePicker {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn resolve(&self) -> Result<PickOutcome, ImageError> {
        match &self.path {
            None => Ok(PickOutcome::Canceled),
            Some(path) if path.exists() => Ok(PickOutcome::Picked(ImageRef { uri: path.clone() })),
            Some(path) => Err(ImageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ))),
        }
    }
}

#[async_trait]
impl ImagePicker for FilePicker {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn capture_from_camera(
        &self,
        _options: PickerOptions,
    ) -> Result<PickOutcome, ImageError> {
        self.resolve()
    }

    async fn pick_from_library(&self, _options: PickerOptions) -> Result<PickOutcome, ImageError> {
        self.resolve()
    }
}
