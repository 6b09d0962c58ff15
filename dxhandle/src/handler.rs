//! リソースを1つだけ所有して、Handlerが破棄された際に
//! リソースのRelease処理まで行うResourceHandlerを定義する。

use anyhow::{anyhow, Result};
use std::{
    any::type_name,
    fmt::Debug,
    ptr::{null_mut, NonNull},
};

use crate::Release;

/// リソースのポインタを所有し、破棄時にReleaseを呼び出すハンドル
///
/// 空の状態と所有している状態の2つの状態を持つ。
/// 所有権はmoveでのみ移動し、複製はできない。
pub struct ResourceHandler<T: Release> {
    ptr: Option<NonNull<T>>,
}
impl<T: Release> ResourceHandler<T> {
    /// 空のResourceHandlerを作成する
    pub const fn new() -> Self {
        Self { ptr: None }
    }

    /// 生ポインタの所有権を受け取ってResourceHandlerを作成する。
    /// nullの場合は空のHandlerになる。
    /// ## Safety
    /// `raw`がnullでない場合、生きているリソースを指していて、
    /// その参照を1つ分このHandlerに渡すこと。
    pub unsafe fn from_raw(raw: *mut T) -> Self {
        let ptr = NonNull::new(raw);
        if let Some(ptr) = ptr {
            log::trace!("take ownership of {} at {:p}", type_name::<T>(), ptr);
        }
        Self { ptr }
    }

    /// リソースを所有しているかどうか
    pub fn is_valid(&self) -> bool {
        self.ptr.is_some()
    }

    /// 所有しているリソースの生ポインタを取得する。
    /// 空の場合はnullを返す。所有権は移動しない。
    pub fn get(&self) -> *mut T {
        self.ptr.map_or(null_mut(), NonNull::as_ptr)
    }

    /// 所有しているリソースへの参照を取得する
    pub fn as_ref(&self) -> Option<&T> {
        // from_rawの約束により、保持しているポインタは生きている
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// 空であることをエラーとして扱いたい呼び出し側向けのget
    pub fn try_get(&self) -> Result<NonNull<T>> {
        self.ptr
            .ok_or_else(|| anyhow!("{} handle is empty", type_name::<T>()))
    }

    /// 所有しているリソースを新しいリソースに置き換える。
    /// 古いリソースは新しいリソースを受け取る前に1回だけReleaseされる。
    /// 既に所有しているポインタと同じものを渡した場合は何もしない。
    /// ## Safety
    /// `from_raw`と同じ。
    pub unsafe fn reset(&mut self, raw: *mut T) {
        let new = NonNull::new(raw);
        if new == self.ptr {
            return;
        }
        if let Some(old) = self.ptr.take() {
            release(old);
        }
        if let Some(ptr) = new {
            log::trace!("take ownership of {} at {:p}", type_name::<T>(), ptr);
        }
        self.ptr = new;
    }

    /// 所有しているリソースをReleaseして空にする
    pub fn clear(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            release(ptr);
        }
    }

    /// 所有権を移動した新しいHandlerを返し、自身は空になる。
    /// 移動の間にReleaseは呼ばれない。
    pub fn take(&mut self) -> Self {
        Self {
            ptr: self.ptr.take(),
        }
    }

    /// Releaseせずに所有権を呼び出し側に返す。
    /// 空の場合はnullを返す。
    pub fn into_raw(mut self) -> *mut T {
        match self.ptr.take() {
            Some(ptr) => {
                log::trace!("give up ownership of {} at {:p}", type_name::<T>(), ptr);
                ptr.as_ptr()
            }
            None => null_mut(),
        }
    }
}

fn release<T: Release>(ptr: NonNull<T>) {
    log::trace!("release {} at {:p}", type_name::<T>(), ptr);
    // Handlerが所有していたポインタなので生きていて、ここで手放した後は参照されない
    unsafe { T::release(ptr) };
}

impl<T: Release> Default for ResourceHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Debugトレイトの実装
impl<T: Release> Debug for ResourceHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandler")
            .field("type", &type_name::<T>())
            .field("ptr", &self.get())
            .finish()
    }
}

impl<T: Release> PartialEq for ResourceHandler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}
impl<T: Release> Eq for ResourceHandler<T> {}

// Drop時に所有しているリソースをReleaseする
impl<T: Release> Drop for ResourceHandler<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
