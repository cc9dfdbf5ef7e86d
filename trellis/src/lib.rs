//! Trellis: a terminal character-grid UI toolkit.
//!
//! An application shell owns a tree of widgets, resolves each widget's
//! on-screen rectangle from declarative placement hints, and paints the
//! result into a fixed-size character buffer once per frame.
//!
//! # Architecture
//!
//! ```text
//! Placement hints -> sizing resolver -> alignment / flow packer -> Rect
//! Rects + widget content -> Surface (char grid) -> terminal flush
//! ```
//!
//! The geometry pass is a single forward walk over each container's
//! children in insertion order; floating children share one flow-packer
//! cursor, anchored children bypass it. Nothing is cached across frames.
//!
//! # Usage
//!
//! ```no_run
//! use trellis::{Alignment, App, Pane, Placement, Point, Size, Sizing, TextBox};
//!
//! fn main() -> Result<(), trellis::AppError> {
//!     let mut app = App::new()?;
//!     let mut pane = Pane::new(
//!         Placement::new(Size::new(100, 80))
//!             .at(Point::new(0, 1))
//!             .sizing(Sizing::Fill),
//!     );
//!     pane.add_widget(TextBox::with_text(
//!         Placement::new(Size::new(40, 20))
//!             .align(Alignment::FloatLeftTop)
//!             .sizing(Sizing::FillHeightRelativeWidth),
//!         "hello",
//!     ));
//!     app.add_widget(pane);
//!     app.demo_mode(Some(5));
//!     app.run()
//! }
//! ```

pub mod app;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod pane;
pub mod surface;
pub mod widget;

pub use app::App;
pub use error::AppError;
pub use geometry::{Point, Rect, Size};
pub use layout::{Alignment, FlowPacker, Sizing};
pub use pane::Pane;
pub use surface::{Region, Surface};
pub use widget::{BoxedWidget, Placement, TextBox, Widget};
