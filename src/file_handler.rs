use eframe::egui;

/// File extensions offered by the picker and accepted from drops without a MIME type
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Collects image files dropped onto the window so they can become the
/// canvas background.
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up newly dropped files from the UI context.
    /// Returns true if there is anything to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files.extend(i.raw.dropped_files.iter().cloned());
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Drain the queue, returning the bytes of every readable image file.
    pub fn take_image_bytes(&mut self) -> Vec<Vec<u8>> {
        let mut images = Vec::new();

        for file in std::mem::take(&mut self.dropped_files) {
            let file_name = file_display_name(&file);

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }

            if let Some(bytes) = &file.bytes {
                log::info!("Processing image from memory: {} ({} bytes)", file_name, bytes.len());
                images.push(bytes.to_vec());
            } else if let Some(path) = &file.path {
                #[cfg(not(target_arch = "wasm32"))]
                {
                    if let Some(bytes) = read_image_file(path) {
                        images.push(bytes);
                    }
                }

                #[cfg(target_arch = "wasm32")]
                {
                    log::warn!("File path access not supported on WASM: {}", path.display());
                }
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
            }
        }

        images
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop an image to use as background:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

/// Read an image file chosen by path, logging failures.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_image_file(path: &std::path::Path) -> Option<Vec<u8>> {
    log::info!("Processing image from path: {}", path.display());
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::error!("Failed to read image file: {}: {}", path.display(), err);
            None
        }
    }
}

/// Ask for an image with the native file dialog and read it.
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_image_file() -> Option<Vec<u8>> {
    let path = rfd::FileDialog::new()
        .set_title("Load background")
        .add_filter("Image", &IMAGE_EXTENSIONS)
        .pick_file()?;
    read_image_file(&path)
}

fn file_display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| {
            file.name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
        });
    name.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
