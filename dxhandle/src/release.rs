//! Handlerが破棄される際に呼び出すRelease処理を定義する。

use std::ptr::NonNull;

/// ResourceHandlerが所有するリソースを解放するためのトレイト
///
/// ## Safety
/// 実装する型は、`release`の1回の呼び出しでちょうど1つの参照を手放すこと。
/// ResourceHandlerは所有しているポインタに対して`release`を1回だけ呼び出し、
/// その後そのポインタには触れない。
pub unsafe trait Release {
    /// リソースを1つ分解放する
    /// ## Safety
    /// `this`は生きているリソースを指していること。
    /// 呼び出し後、`this`は無効になったものとして扱う。
    unsafe fn release(this: NonNull<Self>);
}
