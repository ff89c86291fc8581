//! Progress module containing percent accounting and the terminal bar.
//!
//! - `percent` - Percent-complete computation published by the controller
//! - `style` - Progress bar styling options and templates
//! - `display` - The bar drawn while a transfer runs
//!
//! # Examples
//!
//! ```rust
//! use streamsave::controller::ControllerBuilder;
//! use streamsave::progress::ProgressBarOpts;
//!
//! let controller = ControllerBuilder::new()
//!     .style_options(ProgressBarOpts::with_pip_style())
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod percent;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use percent::percent_complete;
pub use style::ProgressBarOpts;
