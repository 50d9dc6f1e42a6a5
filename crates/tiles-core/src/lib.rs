//! Beat-driven light-source animation for addressable light panels.
//!
//! Per-band power samples feed [`BandTracker`]s; detected beats spawn
//! [`LightSource`]s on random panels; the [`Compositor`] blends every live
//! source onto every panel by distance. [`FrameDriver`] ties it together.

pub mod beat;
pub mod color;
pub mod compositor;
pub mod constants;
pub mod driver;
pub mod geometry;
pub mod layout;
pub mod params;
pub mod providers;
pub mod sources;

pub use beat::*;
pub use color::*;
pub use compositor::*;
pub use constants::*;
pub use driver::*;
pub use geometry::*;
pub use layout::*;
pub use params::*;
pub use providers::*;
pub use sources::*;
