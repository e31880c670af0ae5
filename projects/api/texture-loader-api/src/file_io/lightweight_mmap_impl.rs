//! File I/O implementation using lightweight-mmap.

use crate::file_io::FileOperationResult;
use crate::traits::{TextureLoaderFactory, TextureUploadTarget};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use texture_loader_common::TextureDescriptor;

/// Read the descriptor of a texture file without touching its payload.
///
/// This function memory-maps the file, validates it with the provided factory
/// and returns the descriptor of the texture it contains.
///
/// # Arguments
///
/// * `factory` - The loader factory for the expected container format
/// * `path` - Path to the texture file
///
/// # Returns
///
/// The descriptor of the contained texture, or an error if the file cannot
/// be opened or is not a valid container.
///
/// # Example
///
/// ```
/// use texture_loader_api::file_io::{read_texture_file_descriptor, FileOperationResult};
/// use texture_loader_ktx1::Ktx1LoaderFactory;
/// use std::path::Path;
///
/// fn example_read_descriptor(path: &Path) -> FileOperationResult<()> {
///     let descriptor = read_texture_file_descriptor(&Ktx1LoaderFactory, path)?;
///     println!("{}x{}", descriptor.width, descriptor.height);
///     Ok(())
/// }
/// ```
pub fn read_texture_file_descriptor<F: TextureLoaderFactory>(
    factory: &F,
    path: &Path,
) -> FileOperationResult<TextureDescriptor> {
    // Open input file
    let input_handle = ReadOnlyFileHandle::open(path)?;
    let input_size = input_handle.size()? as usize;
    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;

    let loader = factory.try_create(input_mapping.as_slice())?;
    Ok(loader.descriptor().clone())
}

/// Load a texture file and upload its mip levels to a target.
///
/// This function memory-maps the file, creates a loader with the provided
/// factory and feeds every stored mip level to `target` straight from the
/// mapping.
///
/// # Arguments
///
/// * `factory` - The loader factory for the expected container format
/// * `path` - Path to the texture file
/// * `target` - The upload target receiving each mip level
///
/// # Returns
///
/// The descriptor of the uploaded texture, or an error if the file cannot
/// be opened, is not a valid container, or the target rejects a write.
pub fn upload_texture_file<F: TextureLoaderFactory>(
    factory: &F,
    path: &Path,
    target: &mut dyn TextureUploadTarget,
) -> FileOperationResult<TextureDescriptor> {
    // Open input file
    let input_handle = ReadOnlyFileHandle::open(path)?;
    let input_size = input_handle.size()? as usize;
    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;

    let loader = factory.try_create(input_mapping.as_slice())?;
    loader.upload_to(target)?;
    Ok(loader.descriptor().clone())
}

/// Copy the payload of a texture file into a caller-provided buffer.
///
/// This function memory-maps the file, creates a loader with the provided
/// factory and copies the stored mip levels into `destination` back to back.
///
/// # Arguments
///
/// * `factory` - The loader factory for the expected container format
/// * `path` - Path to the texture file
/// * `destination` - Buffer receiving the payload bytes
///
/// # Returns
///
/// The descriptor of the copied texture, or an error if the file cannot be
/// opened, is not a valid container, or `destination` is too small.
pub fn copy_texture_file_to_slice<F: TextureLoaderFactory>(
    factory: &F,
    path: &Path,
    destination: &mut [u8],
) -> FileOperationResult<TextureDescriptor> {
    // Open input file
    let input_handle = ReadOnlyFileHandle::open(path)?;
    let input_size = input_handle.size()? as usize;
    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;

    let loader = factory.try_create(input_mapping.as_slice())?;
    loader.copy_to_buffer(destination)?;
    Ok(loader.descriptor().clone())
}
