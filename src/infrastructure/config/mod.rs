//! Configuration storage adapters

mod memory;
mod overlay;
mod xdg;

pub use memory::MemorySettingsStore;
pub use overlay::OverlaySettingsStore;
pub use xdg::XdgConfigStore;
