pub mod controller;
pub mod picker;

pub use controller::{ScanController, ScanState};
pub use picker::{FilePicker, ImagePicker, ImageRef, Permission, PickOutcome, PickerOptions};
