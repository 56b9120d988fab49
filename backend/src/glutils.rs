use gl::types::*;
use std::ffi::{c_void, CStr};

use crate::error::BackendError;

/// Whether `gl_call!`/`gl_result!` drain the GL error queue. Fixed at
/// compile time: on in debug builds or with the `gl-diagnostics` feature.
pub const DIAGNOSTICS: bool = cfg!(any(debug_assertions, feature = "gl-diagnostics"));

/// Location and text of a checked GL call.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    pub label: &'static str,
    pub file: &'static str,
    pub line: u32,
}

/// When the error queue is drained relative to the checked call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Before,
    After,
}

/// Wraps a GL call, draining pending errors before and after it.
///
/// Usage: `gl_call!(gl::BindVertexArray(vao))`. Evaluates to the call's
/// return value.
#[macro_export]
macro_rules! gl_call {
    ($call:expr) => {
        $crate::glutils::checked_call::<{ $crate::glutils::DIAGNOSTICS }, _, _>(
            $crate::glutils::CallSite {
                label: stringify!($call),
                file: file!(),
                line: line!(),
            },
            || unsafe { $crate::gl::GetError() },
            || unsafe { $call },
        )
    };
}

/// Wraps a GL call whose result is used, draining errors after it only.
#[macro_export]
macro_rules! gl_result {
    ($call:expr) => {
        $crate::glutils::checked_result::<{ $crate::glutils::DIAGNOSTICS }, _, _>(
            $crate::glutils::CallSite {
                label: stringify!($call),
                file: file!(),
                line: line!(),
            },
            || unsafe { $crate::gl::GetError() },
            || unsafe { $call },
        )
    };
}

#[inline(always)]
pub fn checked_call<const ENABLED: bool, T, E: FnMut() -> GLenum>(
    site: CallSite,
    mut next_error: E,
    call: impl FnOnce() -> T,
) -> T {
    if ENABLED {
        drain_errors_from(&mut next_error, &site, Stage::Before);
    }
    let ret = call();
    if ENABLED {
        drain_errors_from(&mut next_error, &site, Stage::After);
    }
    ret
}

#[inline(always)]
pub fn checked_result<const ENABLED: bool, T, E: FnMut() -> GLenum>(
    site: CallSite,
    mut next_error: E,
    call: impl FnOnce() -> T,
) -> T {
    let ret = call();
    if ENABLED {
        drain_errors_from(&mut next_error, &site, Stage::After);
    }
    ret
}

pub fn gl_error_name(err: GLenum) -> &'static str {
    match err {
        gl::NO_ERROR => "GL_NO_ERROR",
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "Unknown GL error",
    }
}

pub fn format_gl_error(label: &str, file: &str, line: u32, err: GLenum) -> String {
    format!(
        "OpenGL Error in {file} at line {line} calling {label}: {} (0x{err:x})",
        gl_error_name(err)
    )
}

/// Pulls error codes from `next_error` until `NO_ERROR` and logs each one.
/// Returns the number of errors drained.
pub fn drain_errors_from<E: FnMut() -> GLenum>(
    mut next_error: E,
    site: &CallSite,
    stage: Stage,
) -> usize {
    let mut drained = 0;
    loop {
        let err = next_error();
        if err == gl::NO_ERROR {
            break;
        }
        let line = match stage {
            Stage::Before => format_gl_error(
                &format!(">>BEFORE<< {}", site.label),
                site.file,
                site.line,
                err,
            ),
            Stage::After => format_gl_error(site.label, site.file, site.line, err),
        };
        log::error!("{line}");
        drained += 1;
    }
    drained
}

/// Drains the error queue of the current context.
pub fn drain_gl_errors(site: &CallSite, stage: Stage) -> usize {
    drain_errors_from(|| unsafe { gl::GetError() }, site, stage)
}

/// Reads an info log of `len` bytes (terminator included) through `fill`,
/// which returns the number of bytes written. Logs of one byte or less are
/// treated as empty.
fn read_info_log(len: GLint, fill: impl FnOnce(&mut [u8]) -> GLsizei) -> Option<String> {
    if len <= 1 {
        return None;
    }
    let mut v = vec![0u8; len as usize];
    let written = fill(&mut v).clamp(0, len) as usize;
    v.truncate(written);
    while v.last() == Some(&0) {
        v.pop();
    }
    Some(String::from_utf8_lossy(&v).to_string())
}

pub fn shader_info_log(shader: GLuint) -> Option<String> {
    let mut len: GLint = 0;
    crate::gl_call!(gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len));
    read_info_log(len, |buf| {
        let mut written: GLsizei = 0;
        crate::gl_call!(gl::GetShaderInfoLog(
            shader,
            buf.len() as GLsizei,
            &mut written,
            buf.as_mut_ptr().cast()
        ));
        written
    })
}

pub fn program_info_log(program: GLuint) -> Option<String> {
    let mut len: GLint = 0;
    crate::gl_call!(gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len));
    read_info_log(len, |buf| {
        let mut written: GLsizei = 0;
        crate::gl_call!(gl::GetProgramInfoLog(
            program,
            buf.len() as GLsizei,
            &mut written,
            buf.as_mut_ptr().cast()
        ));
        written
    })
}

/// Writes the shader's info log, if it has one, to the diagnostic stream.
pub fn log_shader_info(shader: GLuint) {
    if let Some(text) = shader_info_log(shader) {
        log::warn!("Shader Info Log:\n{text}");
    }
}

type IsLoaded = fn() -> bool;

// every entry point the program calls
const REQUIRED_ENTRY_POINTS: &[(&str, IsLoaded)] = &[
    ("glGetError", gl::GetError::is_loaded),
    ("glGetString", gl::GetString::is_loaded),
    ("glGetIntegerv", gl::GetIntegerv::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glDrawElements", gl::DrawElements::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glBindVertexArray", gl::BindVertexArray::is_loaded),
    ("glDeleteVertexArrays", gl::DeleteVertexArrays::is_loaded),
    ("glGenBuffers", gl::GenBuffers::is_loaded),
    ("glBindBuffer", gl::BindBuffer::is_loaded),
    ("glBufferData", gl::BufferData::is_loaded),
    ("glDeleteBuffers", gl::DeleteBuffers::is_loaded),
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glShaderSource", gl::ShaderSource::is_loaded),
    ("glCompileShader", gl::CompileShader::is_loaded),
    ("glGetShaderiv", gl::GetShaderiv::is_loaded),
    ("glGetShaderInfoLog", gl::GetShaderInfoLog::is_loaded),
    ("glDeleteShader", gl::DeleteShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glAttachShader", gl::AttachShader::is_loaded),
    ("glBindFragDataLocation", gl::BindFragDataLocation::is_loaded),
    ("glLinkProgram", gl::LinkProgram::is_loaded),
    ("glGetProgramiv", gl::GetProgramiv::is_loaded),
    ("glGetProgramInfoLog", gl::GetProgramInfoLog::is_loaded),
    ("glUseProgram", gl::UseProgram::is_loaded),
    ("glDeleteProgram", gl::DeleteProgram::is_loaded),
    ("glGetAttribLocation", gl::GetAttribLocation::is_loaded),
    ("glEnableVertexAttribArray", gl::EnableVertexAttribArray::is_loaded),
    ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded),
];

/// Resolves the GL entry points through `loader` and checks that all the
/// ones this program calls were found.
pub fn load_gl_with<F>(loader: F) -> Result<(), BackendError>
where
    F: FnMut(&'static str) -> *const c_void,
{
    gl::load_with(loader);

    let missing: Vec<&str> = REQUIRED_ENTRY_POINTS
        .iter()
        .filter(|(_, is_loaded)| !is_loaded())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(BackendError::Loader(format!(
            "unresolved entry points: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

fn gl_string(name: GLenum) -> Option<String> {
    let s = crate::gl_result!(gl::GetString(name));
    if s.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(s.cast()) }.to_string_lossy().to_string())
}

pub fn log_opengl_info() {
    let entries = [
        ("GL_VENDOR", gl::VENDOR),
        ("GL_RENDERER", gl::RENDERER),
        ("GL_VERSION", gl::VERSION),
        ("GL_SHADING_LANGUAGE_VERSION", gl::SHADING_LANGUAGE_VERSION),
    ];
    for (label, name) in entries {
        if let Some(value) = gl_string(name) {
            log::info!("{label} = {value}");
        }
    }

    let mut max_attribs: i32 = 0;
    crate::gl_call!(gl::GetIntegerv(gl::MAX_VERTEX_ATTRIBS, &mut max_attribs));
    log::debug!("GL_MAX_VERTEX_ATTRIBS = {max_attribs}");
}

/// Uploads `buffer` to whatever is bound to `target` with `STATIC_DRAW`.
pub fn buffer_data_static<T: Sized>(target: GLenum, buffer: &[T]) {
    crate::gl_call!(gl::BufferData(
        target,
        std::mem::size_of_val(buffer) as GLsizeiptr,
        buffer.as_ptr().cast(),
        gl::STATIC_DRAW,
    ));
}
