// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(non_snake_case)]

use interop_abi::{FFI_OK, HandleFFI, TextureVTableFFI};

use super::{dispatch, try_dispatch};

#[unsafe(no_mangle)]
pub extern "C" fn CTexture_GetWidth(this: HandleFFI) -> i32 {
	dispatch("CTexture_GetWidth", this, |_, texture: &TextureVTableFFI, instance| (texture.get_width)(instance))
}

#[unsafe(no_mangle)]
pub extern "C" fn CTexture_GetHeight(this: HandleFFI) -> i32 {
	dispatch("CTexture_GetHeight", this, |_, texture: &TextureVTableFFI, instance| (texture.get_height)(instance))
}

/// Width over height; 0 for a degenerate texture
#[unsafe(no_mangle)]
pub extern "C" fn CTexture_GetAspectRatio(this: HandleFFI) -> f32 {
	try_dispatch("CTexture_GetAspectRatio", this, |_, texture: &TextureVTableFFI, instance| {
		let width = (texture.get_width)(instance);
		let height = (texture.get_height)(instance);
		(width > 0 && height > 0).then(|| width as f32 / height as f32)
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CTexture_GetMemorySize(this: HandleFFI) -> u64 {
	dispatch("CTexture_GetMemorySize", this, |_, texture: &TextureVTableFFI, instance| {
		(texture.get_memory_size)(instance)
	})
}

/// Copy pixels into `dst`; returns bytes written, at most `dst_len`
#[unsafe(no_mangle)]
pub extern "C" fn CTexture_CopyPixels(this: HandleFFI, dst: *mut u8, dst_len: usize) -> u64 {
	if dst.is_null() || dst_len == 0 {
		return 0;
	}
	try_dispatch("CTexture_CopyPixels", this, |_, texture: &TextureVTableFFI, instance| {
		let written = (texture.copy_pixels)(instance, dst, dst_len);
		Some(written.min(dst_len) as u64)
	})
}

/// Queue a GPU readback; completion arrives on the
/// `Render_Texture_ReadbackComplete` import, possibly on another thread
#[unsafe(no_mangle)]
pub extern "C" fn CTexture_RequestReadback(this: HandleFFI, request_id: u64) -> u8 {
	dispatch("CTexture_RequestReadback", this, |_, texture: &TextureVTableFFI, instance| {
		((texture.request_readback)(instance, this, request_id) == FFI_OK) as u8
	})
}
