//! COMのオブジェクトをResourceHandlerで扱うための定義。
//! IUnknownのvtableのレイアウトと、IUnknown::Releaseを呼び出すReleaseの実装を用意している。

use std::{ffi::c_void, ptr::NonNull};

use crate::Release;

/// COMのインターフェースIDなどに使われるGUID
#[allow(missing_docs)]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// IUnknownのvtable。
/// すべてのCOMインターフェースのvtableはこの3つの関数から始まる。
#[repr(C)]
pub struct IUnknownVtbl {
    /// IUnknown::QueryInterface
    pub query_interface: unsafe extern "system" fn(
        this: *mut c_void,
        riid: *const Guid,
        object: *mut *mut c_void,
    ) -> i32,
    /// IUnknown::AddRef
    pub add_ref: unsafe extern "system" fn(this: *mut c_void) -> u32,
    /// IUnknown::Release
    pub release: unsafe extern "system" fn(this: *mut c_void) -> u32,
}

/// COMのインターフェースであることを示すマーカートレイト。
/// 実装した型はReleaseが自動で実装され、ResourceHandlerで所有できるようになる。
///
/// ## Safety
/// オブジェクトの先頭がIUnknownVtblから始まるvtableへのポインタであること。
pub unsafe trait ComInterface {}

// COMのオブジェクトはIUnknown::Releaseで参照を1つ手放す
unsafe impl<T: ComInterface> Release for T {
    unsafe fn release(this: NonNull<Self>) {
        let remaining = release_unknown(this.cast());
        log::trace!(
            "{} released, {} references remaining",
            std::any::type_name::<T>(),
            remaining
        );
        #[cfg(feature = "validation")]
        if remaining == 0 {
            log::debug!("{} destroyed", std::any::type_name::<T>());
        }
    }
}

/// vtableからIUnknown::Releaseを呼び出し、残りの参照カウントを返す
/// ## Safety
/// `this`は生きているCOMのオブジェクトを指していること。
pub unsafe fn release_unknown(this: NonNull<c_void>) -> u32 {
    let vtbl = *this.as_ptr().cast::<*const IUnknownVtbl>();
    ((*vtbl).release)(this.as_ptr())
}

macro_rules! com_interface {
    ($($(#[$meta:meta])* $name:ident => $handler:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                vtbl: *const $crate::com::IUnknownVtbl,
            }

            unsafe impl $crate::com::ComInterface for $name {}

            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.debug_struct(stringify!($name))
                        .field("vtbl", &self.vtbl)
                        .finish()
                }
            }

            #[doc = concat!("`", stringify!($name), "`を所有するResourceHandler")]
            pub type $handler = $crate::ResourceHandler<$name>;
        )*
    };
}
pub(crate) use com_interface;

com_interface! {
    /// IUnknown
    IUnknown => UnknownHandler;
}
