use std::path::Path;

use console::Style;
use viewport_core::session::Session;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_session_summary(session: &Session, source: &Path) {
    let s = Styles::new();
    let controller = session.controller();
    let transform = controller.transform();

    println!();
    println!("  {}", s.title.apply_to("Viewport"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.path.apply_to(source.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Surface"),
        s.value.apply_to(controller.surface())
    );
    if let Some(image) = controller.image() {
        let (w, h) = transform.scaled_size(image);
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.value.apply_to(image)
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Displayed"),
            s.value.apply_to(format!("{w:.1}x{h:.1}"))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("{:.3}, {:.3}", transform.x, transform.y))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.5}", transform.scale))
    );
    println!();
}
