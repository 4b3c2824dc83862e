//! Lane types, the traits the kernels are written against, and the slice
//! layer on top of them.

pub mod lanes;
pub mod slice;
pub mod traits;

pub use lanes::{
    Mask, Vector, F32x2, F32x4, F32x8, F64x2, F64x4, F64x8, U32x2, U32x4, U32x8, U64x2, U64x4,
    U64x8,
};
pub use slice::{
    fast_map, fast_map_with, map_into, par_simd_map, scalar_map, simd_map, DispatchConfig,
};
pub use traits::{SimdFloat, SimdLoad, SimdMask, SimdMath, SimdStore, SimdUint, SimdWiden};
