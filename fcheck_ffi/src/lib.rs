//! C FFI layer for the fcheck comparison engine.
//!
//! Exposes a single entry point taking UTF-8 encoded, null-terminated
//! paths and a configuration struct with a mandatory diff callback. The
//! callback receives a flattened five-field block whose layout matches the
//! historical `fc` library ABI: line blocks carry index ranges; byte blocks
//! carry the offset in `start_a`/`start_b` and the two byte values in
//! `end_a`/`end_b`; size blocks carry the two file sizes doubled into the
//! start/end pairs. Blocks are only valid for the duration of the call.

use fcheck_common::{CompareConfig, CompareError, CompareMode, CompareOutcome, DiffBlock, LineBlockKind};
use fcheck_core::CompareEngine;
use std::ffi::{c_char, c_void, CStr};
use std::path::Path;

// Result codes
pub const FCHECK_OK: i32 = 0;
pub const FCHECK_DIFFERENT: i32 = 1;
pub const FCHECK_ERROR_IO: i32 = 2;
pub const FCHECK_ERROR_INVALID_PARAM: i32 = 3;
pub const FCHECK_ERROR_MEMORY: i32 = 4;

// Comparison modes
pub const FCHECK_MODE_TEXT_ASCII: u32 = 0;
pub const FCHECK_MODE_TEXT_UNICODE: u32 = 1;
pub const FCHECK_MODE_BINARY: u32 = 2;
pub const FCHECK_MODE_AUTO: u32 = 3;

// Behavior flags
pub const FCHECK_IGNORE_CASE: u32 = 0x0001;
pub const FCHECK_IGNORE_WS: u32 = 0x0002;
pub const FCHECK_SHOW_LINE_NUMS: u32 = 0x0004;
pub const FCHECK_RAW_TABS: u32 = 0x0008;

// Diff block types
pub const FCHECK_DIFF_TYPE_NONE: u32 = 0;
pub const FCHECK_DIFF_TYPE_CHANGE: u32 = 1;
pub const FCHECK_DIFF_TYPE_DELETE: u32 = 2;
pub const FCHECK_DIFF_TYPE_ADD: u32 = 3;
pub const FCHECK_DIFF_TYPE_SIZE: u32 = 4;

/// One reported difference, flattened to the legacy five-field layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FcheckDiffBlock {
    pub block_type: u32,
    pub start_a: usize,
    pub end_a: usize,
    pub start_b: usize,
    pub end_b: usize,
}

/// Callback receiving one block per difference. `user_data` is the pointer
/// from [`FcheckConfig`], passed through untouched.
pub type FcheckDiffCallback =
    Option<unsafe extern "C" fn(user_data: *mut c_void, block: *const FcheckDiffBlock)>;

/// Comparison configuration for [`fcheck_compare_utf8`].
#[repr(C)]
pub struct FcheckConfig {
    pub mode: u32,
    pub flags: u32,
    pub resync_lines: u32,
    pub buffer_lines: u32,
    pub callback: FcheckDiffCallback,
    pub user_data: *mut c_void,
}

fn flatten(block: &DiffBlock) -> FcheckDiffBlock {
    match *block {
        DiffBlock::Lines {
            kind,
            start_a,
            end_a,
            start_b,
            end_b,
        } => FcheckDiffBlock {
            block_type: match kind {
                LineBlockKind::Change => FCHECK_DIFF_TYPE_CHANGE,
                LineBlockKind::Delete => FCHECK_DIFF_TYPE_DELETE,
                LineBlockKind::Add => FCHECK_DIFF_TYPE_ADD,
            },
            start_a,
            end_a,
            start_b,
            end_b,
        },
        DiffBlock::Bytes {
            offset,
            byte_a,
            byte_b,
        } => FcheckDiffBlock {
            block_type: FCHECK_DIFF_TYPE_CHANGE,
            start_a: offset as usize,
            end_a: byte_a as usize,
            start_b: offset as usize,
            end_b: byte_b as usize,
        },
        DiffBlock::Size { size_a, size_b } => FcheckDiffBlock {
            block_type: FCHECK_DIFF_TYPE_SIZE,
            start_a: size_a as usize,
            end_a: size_a as usize,
            start_b: size_b as usize,
            end_b: size_b as usize,
        },
    }
}

fn mode_from(raw: u32) -> Option<CompareMode> {
    match raw {
        FCHECK_MODE_TEXT_ASCII => Some(CompareMode::TextAscii),
        FCHECK_MODE_TEXT_UNICODE => Some(CompareMode::TextUnicode),
        FCHECK_MODE_BINARY => Some(CompareMode::Binary),
        FCHECK_MODE_AUTO => Some(CompareMode::Auto),
        _ => None,
    }
}

/// Compare two files identified by UTF-8 paths.
///
/// Returns `FCHECK_OK` or `FCHECK_DIFFERENT` on a completed comparison and
/// an error code otherwise. Null pointers, a missing callback, an unknown
/// mode, and paths that are not valid UTF-8 all report
/// `FCHECK_ERROR_INVALID_PARAM`.
///
/// # Safety
///
/// `path1` and `path2` must be valid null-terminated strings and `config`
/// must point to a valid [`FcheckConfig`] for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn fcheck_compare_utf8(
    path1: *const c_char,
    path2: *const c_char,
    config: *const FcheckConfig,
) -> i32 {
    if path1.is_null() || path2.is_null() || config.is_null() {
        return FCHECK_ERROR_INVALID_PARAM;
    }
    let config = &*config;
    let Some(callback) = config.callback else {
        return FCHECK_ERROR_INVALID_PARAM;
    };

    let path1 = match CStr::from_ptr(path1).to_str() {
        Ok(s) => s,
        Err(_) => return FCHECK_ERROR_INVALID_PARAM,
    };
    let path2 = match CStr::from_ptr(path2).to_str() {
        Ok(s) => s,
        Err(_) => return FCHECK_ERROR_INVALID_PARAM,
    };

    let Some(mode) = mode_from(config.mode) else {
        return FCHECK_ERROR_INVALID_PARAM;
    };

    let compare_config = CompareConfig {
        mode,
        ignore_case: config.flags & FCHECK_IGNORE_CASE != 0,
        ignore_whitespace: config.flags & FCHECK_IGNORE_WS != 0,
        show_line_numbers: config.flags & FCHECK_SHOW_LINE_NUMS != 0,
        raw_tabs: config.flags & FCHECK_RAW_TABS != 0,
        resync_lines: config.resync_lines,
        buffer_lines: config.buffer_lines,
    };

    let engine = CompareEngine::with_config(compare_config);
    let user_data = config.user_data;

    let result = engine.compare(Path::new(path1), Path::new(path2), |_, block| {
        let flat = flatten(block);
        // Safety: the caller guarantees the callback is sound; the block
        // pointer is only valid for this invocation.
        unsafe { callback(user_data, &flat) };
    });

    match result {
        Ok(CompareOutcome::Identical) => FCHECK_OK,
        Ok(CompareOutcome::Different) => FCHECK_DIFFERENT,
        Err(CompareError::Io(_)) => FCHECK_ERROR_IO,
        Err(CompareError::InvalidParameter(_)) => FCHECK_ERROR_INVALID_PARAM,
        Err(CompareError::Memory(_)) => FCHECK_ERROR_MEMORY,
    }
}
