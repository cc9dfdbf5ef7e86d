//! Corner anchors and paint z-order.
//!
//! Four boxes pinned to the pane's corners, plus two overlapping boxes at
//! the top-left showing that the later-added widget wins the overlap.

use crate::app::App;
use crate::error::AppError;
use crate::geometry::{Point, Size};
use crate::layout::{Alignment, Sizing};
use crate::pane::Pane;
use crate::widget::{Placement, TextBox};

use super::DemoOptions;

pub fn run(opts: &DemoOptions) -> Result<(), AppError> {
    let mut app = if opts.headless {
        App::with_size(Size::new(80, 24))
    } else {
        App::new()?
    };
    app.set_title(&opts.title);

    let mut pane = Pane::new(
        Placement::new(Size::ZERO)
            .at(Point::new(0, 1))
            .align(Alignment::LeftTop)
            .sizing(Sizing::Fill),
    )
    .with_border();
    pane.set_title("anchors");

    let corners = [
        (Alignment::LeftTop, "left-top"),
        (Alignment::RightTop, "right-top"),
        (Alignment::LeftBottom, "left-bottom"),
        (Alignment::RightBottom, "right-bottom"),
    ];
    for (alignment, label) in corners {
        pane.add_widget(TextBox::with_text(
            Placement::new(Size::new(14, 1)).align(alignment),
            label,
        ));
    }

    // Two widgets sharing a rectangle; only the later one is visible.
    let overlap = Placement::new(Size::new(20, 1))
        .at(Point::new(20, 0))
        .align(Alignment::LeftTop);
    pane.add_widget(TextBox::with_text(overlap, "painted first"));
    pane.add_widget(TextBox::with_text(overlap, "painted second"));

    app.add_widget(pane);
    app.demo_mode(opts.demo_time_s);

    if opts.headless {
        app.paint_frame();
        return Ok(());
    }
    app.run()
}
