//! One-shot conversion of the surface to a PNG image or a single-page PDF.
//!
//! Exports only read the surface; they never touch it or the history.

use crate::error::{SketchError, SketchResult};
use crate::surface::Surface;
use printpdf::image_crate::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG image
    Png,
    /// PDF document with the PNG embedded on one page
    Pdf,
}

impl ExportFormat {
    /// Fixed download name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Png => "drawing.png",
            ExportFormat::Pdf => "drawing.pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Page geometry of the document export, in millimetres from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Resolution the image is embedded at before scaling
    pub dpi: f32,
}

impl Default for PdfLayout {
    /// A4 portrait, image at (10, 10) sized 190x140
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            x: 10.0,
            y: 10.0,
            width: 190.0,
            height: 140.0,
            dpi: 300.0,
        }
    }
}

/// Encode the surface in the given format.
pub fn export(surface: &Surface, format: ExportFormat) -> SketchResult<Vec<u8>> {
    match format {
        ExportFormat::Png => render_to_png(surface),
        ExportFormat::Pdf => render_to_pdf(surface, &PdfLayout::default()),
    }
}

pub fn render_to_png(surface: &Surface) -> SketchResult<Vec<u8>> {
    surface
        .encode_png()
        .map_err(|e| SketchError::Export(format!("PNG encoding failed: {e}")))
}

/// Render a one-page PDF with the surface placed per `layout`.
///
/// Transparent areas are flattened onto white.
pub fn render_to_pdf(surface: &Surface, layout: &PdfLayout) -> SketchResult<Vec<u8>> {
    let (doc, page, layer) = printpdf::PdfDocument::new(
        "drawing",
        printpdf::Mm(layout.page_width),
        printpdf::Mm(layout.page_height),
        "Layer 1",
    );
    let current_layer = doc.get_page(page).get_layer(layer);

    let (w, h) = (surface.width(), surface.height());
    let pdf_image = printpdf::Image::from_dynamic_image(&DynamicImage::ImageRgb8(
        flatten_onto_white(surface)?,
    ));

    // Native size at `dpi`, then scale to the target box.
    let native_width_mm = w as f32 / layout.dpi * 25.4;
    let native_height_mm = h as f32 / layout.dpi * 25.4;

    // PDF space starts at the bottom-left corner.
    let transform = printpdf::ImageTransform {
        translate_x: Some(printpdf::Mm(layout.x)),
        translate_y: Some(printpdf::Mm(layout.page_height - layout.y - layout.height)),
        scale_x: Some(layout.width / native_width_mm),
        scale_y: Some(layout.height / native_height_mm),
        dpi: Some(layout.dpi),
        ..Default::default()
    };
    pdf_image.add_to_layer(current_layer, transform);

    doc.save_to_bytes()
        .map_err(|e| SketchError::Export(format!("PDF save failed: {e}")))
}

fn flatten_onto_white(surface: &Surface) -> SketchResult<RgbImage> {
    let data: Vec<u8> = surface
        .pixmap()
        .pixels()
        .iter()
        .flat_map(|p| {
            // Premultiplied source-over white: c + (255 - a)
            let cover = 255 - p.alpha();
            [p.red() + cover, p.green() + cover, p.blue() + cover]
        })
        .collect();
    RgbImage::from_raw(surface.width(), surface.height(), data)
        .ok_or_else(|| SketchError::Export("surface buffer size mismatch".to_owned()))
}

/// Export and write the file under `dir`, returning the written path.
pub fn save_to_dir(surface: &Surface, format: ExportFormat, dir: &Path) -> SketchResult<PathBuf> {
    let bytes = export(surface, format)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, &bytes)?;
    log::info!("Exported {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Hand the exported bytes to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download(surface: &Surface, format: ExportFormat) -> SketchResult<()> {
    use eframe::wasm_bindgen::JsCast as _;

    let failed = |what: &str| SketchError::Export(format!("browser download failed: {what}"));
    let bytes = export(surface, format)?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| failed("blob"))?;
    let url =
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| failed("object url"))?;

    let anchor = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("a").ok())
        .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        .ok_or_else(|| failed("no document"))?;
    anchor.set_href(&url);
    anchor.set_download(format.file_name());
    anchor.click();
    web_sys::Url::revoke_object_url(&url).ok();

    log::info!("Downloaded {} ({} bytes)", format.file_name(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_flatten_transparent_is_white() {
        let surface = Surface::new(2, 2).unwrap();
        let rgb = flatten_onto_white(&surface).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_keeps_opaque_colour() {
        let mut surface = Surface::new(2, 2).unwrap();
        surface.fill_solid(Color32::from_rgb(10, 20, 30));
        let rgb = flatten_onto_white(&surface).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_file_names_are_fixed() {
        assert_eq!(ExportFormat::Png.file_name(), "drawing.png");
        assert_eq!(ExportFormat::Pdf.file_name(), "drawing.pdf");
    }

    #[test]
    fn test_mime_types_match_content() {
        let surface = Surface::new(4, 4).unwrap();
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert!(export(&surface, ExportFormat::Png).unwrap().starts_with(b"\x89PNG"));
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
        assert!(export(&surface, ExportFormat::Pdf).unwrap().starts_with(b"%PDF-"));
    }
}
