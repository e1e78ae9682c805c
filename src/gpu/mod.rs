//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable vertex buffers,
//! the shared camera uniform, depth attachments, and shader composition.

/// Camera uniform buffer and bind group shared by all pipelines.
pub mod camera_binding;
/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth attachment management.
pub mod texture;
