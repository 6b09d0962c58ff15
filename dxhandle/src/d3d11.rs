//! Direct3D 11とDXGIのインターフェースと、それぞれを所有するHandlerの型。
//! 中身はvtableへのポインタだけのopaqueな型として扱う。

use crate::com::com_interface;

com_interface! {
    /// ID3D11Device
    ID3D11Device => DeviceHandler;
    /// ID3D11DeviceContext
    ID3D11DeviceContext => DeviceContextHandler;
    /// ID3D11Buffer
    ID3D11Buffer => BufferHandler;
    /// ID3D11Texture2D
    ID3D11Texture2D => Texture2DHandler;
    /// ID3D11ShaderResourceView
    ID3D11ShaderResourceView => ShaderResourceViewHandler;
    /// ID3D11RenderTargetView
    ID3D11RenderTargetView => RenderTargetViewHandler;
    /// ID3D11DepthStencilView
    ID3D11DepthStencilView => DepthStencilViewHandler;
    /// ID3D11UnorderedAccessView
    ID3D11UnorderedAccessView => UnorderedAccessViewHandler;
    /// ID3D11SamplerState
    ID3D11SamplerState => SamplerStateHandler;
    /// ID3D11InputLayout
    ID3D11InputLayout => InputLayoutHandler;
    /// ID3D11VertexShader
    ID3D11VertexShader => VertexShaderHandler;
    /// ID3D11PixelShader
    ID3D11PixelShader => PixelShaderHandler;
    /// ID3D11ComputeShader
    ID3D11ComputeShader => ComputeShaderHandler;
    /// IDXGISwapChain
    IDXGISwapChain => SwapChainHandler;
}
