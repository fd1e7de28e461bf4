// Adapters layer: concrete implementations of the domain ports against the host OS.

pub mod system;

pub use system::SystemLauncher;
