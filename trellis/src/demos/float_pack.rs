//! Three floating text boxes packing inside a pane.
//!
//! The pane is 100x80 with three `FillHeightRelativeWidth` floats requesting
//! 40, 60, and 30 percent of its width. The first two share the top line;
//! the third wraps below once the line is exhausted:
//!
//! ```text
//! 1111222222
//! 1111222222
//! 333
//! ```

use crate::app::App;
use crate::error::AppError;
use crate::geometry::{Point, Size};
use crate::layout::{Alignment, Sizing};
use crate::pane::Pane;
use crate::widget::{Placement, TextBox};

use super::DemoOptions;

pub fn run(opts: &DemoOptions) -> Result<(), AppError> {
    let mut app = if opts.headless {
        App::with_size(Size::new(102, 82))
    } else {
        App::new()?
    };
    app.set_title(&opts.title);

    let mut pane = Pane::new(
        Placement::new(Size::new(100, 80))
            .at(Point::new(0, 1))
            .align(Alignment::LeftTop)
            .sizing(Sizing::Fill),
    )
    .with_border();
    pane.set_title("Test");

    for (index, (width, height)) in [(40, 20), (60, 30), (30, 20)].into_iter().enumerate() {
        let mut textbox = TextBox::new(
            Placement::new(Size::new(width, height))
                .align(Alignment::FloatLeftTop)
                .sizing(Sizing::FillHeightRelativeWidth),
        );
        textbox.set_text(format!("float {} requesting {}x{}", index + 1, width, height));
        pane.add_widget(textbox);
    }

    app.add_widget(pane);
    app.demo_mode(opts.demo_time_s);

    if opts.headless {
        app.paint_frame();
        return Ok(());
    }
    app.run()
}
