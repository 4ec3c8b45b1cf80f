#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod snapshot;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use background::BackgroundImage;
pub use config::EditorConfig;
pub use editor::{Editor, EditorAction};
pub use error::{SketchError, SketchResult};
pub use export::ExportFormat;
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use snapshot::Snapshot;
pub use state::EditorState;
pub use surface::Surface;
pub use tools::{Tool, ToolSettings};
