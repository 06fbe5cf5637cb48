//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Frame → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from state
//! - [`renderer`]: Top-level entry points
//! - [`components`]: Header, cards, search bar, spinner and notice renderers
//! - [`frame`]: Off-screen ANSI buffer
//! - [`helpers`]: Sanitizing, truncation and match highlighting
//! - [`theme`]: Color schemes and escape sequences

pub mod components;
pub mod frame;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use frame::Frame;
pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, NoticeInfo, SearchBarInfo, SpinnerInfo,
    UIViewModel,
};
