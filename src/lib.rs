use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{init_logging, preset_list, set_panic_hook};

#[wasm_bindgen]
pub struct ShapeEditor { pub(crate) inner: clipath::ShapeEditor }

impl ShapeEditor {
    pub fn rs_new() -> ShapeEditor { ShapeEditor { inner: clipath::ShapeEditor::new() } }
    pub fn rs_inner(&self) -> &clipath::ShapeEditor { &self.inner }
}

#[wasm_bindgen]
pub struct Zoom { pub(crate) inner: clipath::Zoom }
