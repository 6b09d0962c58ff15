//! DirectXのリソースに対するRelease処理を忘れたりすることをなくすために用意したラッパーライブラリ。
//! COMのオブジェクトを1つのHandlerが所有し、Handlerが破棄された際に
//! 自動でReleaseを呼び出すようにしたラッパーの構造体`ResourceHandler`が用意されている。
//!
//! Handlerは所有権を移動することしかできず、複製はできない。
//! AddRefによる参照の共有は行わない方針。
#![warn(missing_docs)]

mod release;
pub use release::Release;

mod handler;
pub use handler::ResourceHandler;

pub mod com;
pub use com::ComInterface;

pub mod d3d11;
pub use d3d11::*;
