use crate::error::{PatchError, PatchResult};
use std::path::Path;
use tracing::error;

/// Safely executes filesystem operations with appropriate error handling
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, operation_name: &str) -> PatchResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!(
            "{} failed on {}: {} (at {}:{})",
            operation_name,
            path_ref.display(),
            e,
            file!(),
            line!()
        );

        match e.kind() {
            std::io::ErrorKind::NotFound => PatchError::not_found(path_ref),
            std::io::ErrorKind::PermissionDenied => {
                PatchError::permission_error(path_ref, operation_name)
            }
            _ => PatchError::io_error(e, Some(path_ref)),
        }
    })
}
