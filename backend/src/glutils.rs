use gl::types::*;
use std::ffi::CStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("OpenGL error 0x{0:04X}")]
pub struct GlError(pub GLenum);

pub fn check_gl_err() -> Result<(), GlError> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(GlError(err))
}

/// `GL_VERSION` of the current context, if the driver reports one.
pub fn gl_version_string() -> Option<String> {
    let ptr = unsafe { gl::GetString(gl::VERSION) };
    if ptr.is_null() {
        return None;
    }
    let version = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(version.to_string_lossy().into_owned())
}
